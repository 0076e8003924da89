//! Expense, goal and completed-goal lists

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::record_color;
use crate::services::{BudgetSummary, GoalProgress};
use crate::storage::KeyValueStore;
use crate::tui::app::{App, Panel};

fn panel_block(title: String, focused: bool) -> Block<'static> {
    let color = if focused { Color::Cyan } else { Color::Green };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

fn highlight_style() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

/// Render the expense list with each row's share of the total
pub fn render_expenses<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();
    let focused = app.focused_panel == Panel::Expenses;
    let shares = app.expenses();
    let block = panel_block(format!(" EXPENSES [{}] ", shares.len()), focused);

    if shares.is_empty() {
        let hint = Paragraph::new(Span::styled(
            "No expenses. Press 'a' to add one.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = shares
        .iter()
        .map(|share| {
            let expense = &share.expense;
            ListItem::new(Line::from(vec![
                Span::styled("■ ", Style::default().fg(record_color(&expense.color))),
                Span::styled(
                    format!("{:<18}", truncate(&expense.label, 18)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:<10}", truncate(&expense.category, 10)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:>12}", expense.amount.format_with_symbol(symbol)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!(" {:>5.1}%", share.percent),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.expense_index));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style())
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render active goals, two rows each: amounts then a progress bar
pub fn render_goals<S: KeyValueStore>(
    frame: &mut Frame,
    app: &App<'_, S>,
    summary: &BudgetSummary,
    area: Rect,
) {
    let symbol = app.settings.currency_symbol.as_str();
    let focused = app.focused_panel == Panel::Goals;
    let title = format!(
        " GOALS [{}] {} / {} ({}) ",
        summary.active_goal_count,
        summary.total_goal_current.format_with_symbol(symbol),
        summary.total_goal_target.format_with_symbol(symbol),
        summary.goal_progress.label()
    );
    let block = panel_block(title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let goals = app.goals();
    if goals.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No goals. Press 'a' on this panel to add one.",
                Style::default().fg(Color::DarkGray),
            )),
            inner,
        );
        return;
    }

    let visible = (inner.height / 2).max(1) as usize;
    let offset = app.goal_index.saturating_sub(visible - 1);

    for (row, (index, goal)) in goals
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        let y = inner.y + (row as u16) * 2;
        if y + 1 >= inner.y + inner.height {
            break;
        }
        let selected = focused && index == app.goal_index;
        let label_style = if selected {
            highlight_style().fg(Color::White)
        } else {
            Style::default().fg(Color::White)
        };

        let line = Line::from(vec![
            Span::raw(if selected { "> " } else { "  " }),
            Span::styled(truncate(&goal.label, 20), label_style),
            Span::styled(
                format!(
                    "  {} / {}",
                    goal.current_amount.format_with_symbol(symbol),
                    goal.target_amount.format_with_symbol(symbol)
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), Rect::new(inner.x, y, inner.width, 1));

        let progress = GoalProgress::for_goal(goal);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(record_color(&goal.color)).bg(Color::Black))
            .ratio(progress.ratio())
            .label(progress.label());
        let bar = Rect::new(inner.x + 2, y + 1, inner.width.saturating_sub(2), 1);
        frame.render_widget(gauge, bar);
    }
}

/// Render completed goals
pub fn render_completed<S: KeyValueStore>(
    frame: &mut Frame,
    app: &App<'_, S>,
    summary: &BudgetSummary,
    area: Rect,
) {
    let symbol = app.settings.currency_symbol.as_str();
    let focused = app.focused_panel == Panel::Completed;
    let title = format!(
        " COMPLETED [{}] total {} ",
        summary.completed_goal_count,
        summary.total_completed_goal_cost.format_with_symbol(symbol)
    );
    let block = panel_block(title, focused);

    let items: Vec<ListItem> = app
        .completed()
        .iter()
        .map(|goal| {
            let date = goal
                .completed_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            ListItem::new(Line::from(vec![
                Span::styled("✓ ", Style::default().fg(Color::Green)),
                Span::styled(
                    format!("{:<20}", truncate(&goal.label, 20)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>12}", goal.target_amount.format_with_symbol(symbol)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(format!("  {}", date), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if focused && !items.is_empty() {
        state.select(Some(app.completed_index));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style());
    frame.render_stateful_widget(list, area, &mut state);
}

/// Cut `text` to `max` characters, marking the cut with `~`
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('~');
    cut
}

//! Financial status panel and metric cards

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{IncomeType, Money};
use crate::services::BudgetSummary;
use crate::storage::KeyValueStore;
use crate::tui::app::App;

/// Render the income and totals panel
pub fn render_status<S: KeyValueStore>(
    frame: &mut Frame,
    app: &App<'_, S>,
    summary: &BudgetSummary,
    area: Rect,
) {
    let symbol = app.settings.currency_symbol.as_str();
    let doc = app.store.document();

    let block = Block::default()
        .title(" FINANCIAL_STATUS ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let income_type = match doc.income_type {
        IncomeType::Monthly => "monthly".to_string(),
        IncomeType::Bimonthly => format!(
            "bi-monthly ({} per period)",
            doc.bi_monthly_income.format_with_symbol(symbol)
        ),
    };

    let lines = vec![
        field_line("INCOME_TYPE", income_type, Color::White),
        field_line(
            "MONTHLY_INCOME",
            summary.monthly_income.format_with_symbol(symbol),
            Color::Green,
        ),
        field_line(
            "MONTHLY_EXPENSES",
            summary.total_monthly_expenses.format_with_symbol(symbol),
            Color::Yellow,
        ),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(name: &'static str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<18}", name), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

/// Render the four metric cards
pub fn render_metrics(frame: &mut Frame, summary: &BudgetSummary, symbol: &str, areas: [Rect; 4]) {
    let free_color = if summary.is_over_budget() {
        Color::Red
    } else {
        Color::Green
    };

    let cards = [
        ("FREE_MEMORY", summary.monthly_free, free_color),
        ("USED_MEMORY", summary.total_monthly_expenses, Color::Yellow),
        ("QUARTERLY", summary.quarterly_expenses, Color::Cyan),
        ("ANNUAL", summary.annual_expenses, Color::Magenta),
    ];

    for ((title, value, color), area) in cards.into_iter().zip(areas) {
        render_card(frame, title, value, symbol, color, area);
    }
}

fn render_card(frame: &mut Frame, title: &str, value: Money, symbol: &str, color: Color, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let text = Paragraph::new(Span::styled(
        value.format_with_symbol(symbol),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(text, area);
}

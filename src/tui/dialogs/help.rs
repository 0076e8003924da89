//! Help dialog
//!
//! Lists the dashboard key bindings

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::Panel;
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, focused: Panel) {
    let area = centered_rect(60, 80, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(focused))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(focused: Panel) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit"),
        key_line("?", "Show/hide help"),
        key_line("Tab/S-Tab", "Next/previous list"),
        key_line("j/k", "Move selection down/up"),
        key_line("i", "Edit income"),
        key_line("t", "Toggle monthly / bi-monthly income"),
        key_line("x", "Export JSON"),
        key_line("I", "Import JSON (replaces everything)"),
        Line::from(""),
    ];

    match focused {
        Panel::Expenses | Panel::Goals => {
            let title = if focused == Panel::Expenses {
                "Expenses"
            } else {
                "Goals"
            };
            lines.push(heading(title));
            lines.push(Line::from(""));
            lines.push(key_line("a", "Add"));
            lines.push(key_line("e/Enter", "Edit"));
            lines.push(key_line("d", "Delete"));
            lines.push(key_line("J/K", "Move down/up in the list"));
            if focused == Panel::Goals {
                lines.push(key_line("c", "Mark completed"));
            }
        }
        Panel::Completed => {
            lines.push(heading("Completed Goals"));
            lines.push(Line::from(""));
            lines.push(Line::from("Completed goals are read-only."));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

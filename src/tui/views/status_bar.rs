//! Status bar view
//!
//! Shows the focused list and either the last status message or key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::{App, Panel};

/// Render the status bar
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let panel = match app.focused_panel {
        Panel::Expenses => "EXPENSES",
        Panel::Goals => "GOALS",
        Panel::Completed => "COMPLETED",
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", panel),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    match app.status_message {
        Some(ref message) => {
            let color = if message.starts_with("Error") {
                Color::Red
            } else {
                Color::Yellow
            };
            spans.push(Span::styled(message.clone(), Style::default().fg(color)));
        }
        None => {
            let hints = [
                ("a", "add"),
                ("e", "edit"),
                ("d", "delete"),
                ("J/K", "move"),
                ("i", "income"),
                ("x", "export"),
                ("?", "help"),
                ("q", "quit"),
            ];
            for (key, action) in hints {
                spans.push(Span::styled(key, Style::default().fg(Color::Cyan)));
                spans.push(Span::styled(
                    format!(" {}  ", action),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

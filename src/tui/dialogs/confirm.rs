//! Delete confirmation prompt

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::key_hints;
use crate::tui::layout::centered_rect_fixed;

/// Render the prompt for a pending delete
pub fn render(frame: &mut Frame, message: &str) {
    let area = centered_rect_fixed(52, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" [ CONFIRM ] ")
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("!> ", Style::default().fg(Color::Red)),
            Span::styled(message.to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(Span::styled(
            "   this cannot be undone",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        key_hints(&[
            ("y", "Delete", Color::Red),
            ("n/Esc", "Keep", Color::Green),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

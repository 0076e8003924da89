//! Dashboard header: title, clock, public IP and background

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::background::describe_background;
use crate::storage::KeyValueStore;
use crate::tui::app::App;

/// Render the header
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    let mut title = vec![Span::styled(
        "> TERMINAL BUDGET",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(ref background) = app.background {
        title.push(Span::styled(
            format!("  bg: {}", describe_background(background)),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(title)), columns[0]);

    let status = Line::from(vec![
        Span::styled("DATE ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.now.format("%Y-%m-%d").to_string(),
            Style::default().fg(Color::White),
        ),
        Span::styled("  TIME ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.now.format("%H:%M:%S").to_string(),
            Style::default().fg(Color::White),
        ),
        Span::styled("  IP ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.public_ip.clone(), Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Right),
        columns[1],
    );
}

//! Import dialog
//!
//! Takes a file path and shows the state of the running import session.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::services::{ImportSession, ImportState};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// State for the import dialog
#[derive(Debug, Clone)]
pub struct ImportFormState {
    pub path_input: TextInput,
    pub session: ImportSession,
}

impl Default for ImportFormState {
    fn default() -> Self {
        Self {
            path_input: TextInput::new()
                .label("File")
                .placeholder("budget_export.json"),
            session: ImportSession::new(),
        }
    }
}

impl ImportFormState {
    /// Path typed by the user, or the placeholder when empty
    pub fn path(&self) -> String {
        let typed = self.path_input.value().trim();
        if typed.is_empty() {
            self.path_input.placeholder.clone()
        } else {
            typed.to_string()
        }
    }
}

fn state_line(state: &ImportState) -> Line<'static> {
    match state {
        ImportState::Idle => Line::from(Span::styled(
            "The current budget will be replaced.",
            Style::default().fg(Color::Yellow),
        )),
        ImportState::FileSelected { path } | ImportState::Parsing { path } => {
            Line::from(format!("Reading {}...", path.display()))
        }
        ImportState::Replaced { summary, .. } => Line::from(Span::styled(
            format!("Imported {}", summary),
            Style::default().fg(Color::Green),
        )),
        ImportState::Failed { reason } => Line::from(Span::styled(
            reason.clone(),
            Style::default().fg(Color::Red),
        )),
    }
}

/// Render the import dialog
pub fn render(frame: &mut Frame, form: &ImportFormState) {
    let area = centered_rect_fixed(64, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Import JSON ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Path
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // State
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(form.path_input.widget(true), chunks[0]);
    frame.render_widget(
        Paragraph::new(state_line(form.session.state())).wrap(Wrap { trim: true }),
        chunks[2],
    );

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Import  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[3]);
}

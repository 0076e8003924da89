//! Modal dialogs for the dashboard

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

pub mod confirm;
pub mod expense;
pub mod goal;
pub mod help;
pub mod import;
pub mod income;

pub use expense::{ExpenseField, ExpenseFormState};
pub use goal::{GoalField, GoalFormState};
pub use import::ImportFormState;
pub use income::IncomeFormState;

/// One `[key] action` hint line
pub(crate) fn key_hints(hints: &[(&str, &str, Color)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action, color) in hints {
        spans.push(Span::styled(format!("[{}]", key), Style::default().fg(*color)));
        spans.push(Span::raw(format!(" {}  ", action)));
    }
    Line::from(spans)
}

/// Key hints shared by the edit dialogs
pub(crate) fn form_hints() -> Line<'static> {
    key_hints(&[
        ("Tab", "Next", Color::White),
        ("Enter", "Save", Color::Green),
        ("Esc", "Cancel", Color::Red),
    ])
}

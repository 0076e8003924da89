//! TUI Views module
//!
//! The dashboard is a single screen: header, financial status, metric
//! cards, the three lists and the status bar, with dialogs drawn on top.

pub mod dashboard;
pub mod header;
pub mod lists;
pub mod status_bar;

use ratatui::style::Color;
use ratatui::Frame;

use crate::models::palette::hex_to_rgb;
use crate::storage::KeyValueStore;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>) {
    let layout = AppLayout::new(frame.area());
    let summary = app.summary();
    let symbol = app.settings.currency_symbol.as_str();

    header::render(frame, app, layout.header);
    dashboard::render_status(frame, app, &summary, layout.status);
    dashboard::render_metrics(frame, &summary, symbol, layout.metrics);
    lists::render_expenses(frame, app, layout.expenses);
    lists::render_goals(frame, app, &summary, layout.goals);
    lists::render_completed(frame, app, &summary, layout.completed);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>) {
    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app.focused_panel),
        ActiveDialog::Confirm(pending) => dialogs::confirm::render(frame, &pending.message()),
        ActiveDialog::Expense => dialogs::expense::render(frame, &app.expense_form),
        ActiveDialog::Goal => dialogs::goal::render(frame, &app.goal_form),
        ActiveDialog::Income => dialogs::income::render(frame, &app.income_form),
        ActiveDialog::Import => dialogs::import::render(frame, &app.import_form),
        ActiveDialog::None => {}
    }
}

/// Terminal color for a stored `#RRGGBB` record color
pub fn record_color(hex: &str) -> Color {
    hex_to_rgb(hex)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::Green)
}

//! Terminal User Interface module
//!
//! The interactive dashboard for Terminal Budget, built on ratatui. It shows
//! the header clock and public IP, the financial status, metric cards and
//! the expense, goal and completed-goal lists, with dialogs for editing.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;

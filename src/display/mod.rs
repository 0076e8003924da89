//! Display formatting for terminal output
//!
//! Plain-text tables and detail views used by the CLI commands.

pub mod expense;
pub mod goal;
pub mod summary;

pub use expense::{format_expense_details, format_expense_list};
pub use goal::{format_completed_goals, format_goal_details, format_goal_list};
pub use summary::{format_income, format_summary, progress_bar};

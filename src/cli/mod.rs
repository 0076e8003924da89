//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod background;
pub mod expense;
pub mod goal;
pub mod income;
pub mod transfer;

pub use background::{handle_background_command, BackgroundCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use transfer::{handle_export_command, handle_import_command};

use crate::audit::AuditLogger;
use crate::display::format_summary;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;
use crate::services::BudgetSummary;
use crate::storage::{BudgetStore, KeyValueStore};

/// Parse a money amount given on the command line
pub fn parse_amount(s: &str) -> BudgetResult<Money> {
    Money::parse(s).map_err(|e| {
        BudgetError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '1200' or '1,200.50'. Error: {}",
            s, e
        ))
    })
}

/// Handle the summary command
pub fn handle_summary_command<S: KeyValueStore>(store: &BudgetStore<S>, symbol: &str) {
    let summary = BudgetSummary::from_document(store.document());
    print!("{}", format_summary(&summary, symbol));
}

/// Handle the history command
pub fn handle_history_command(logger: &AuditLogger, limit: usize) -> BudgetResult<()> {
    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No history recorded.");
        return Ok(());
    }

    for entry in entries.iter().rev() {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

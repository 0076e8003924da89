//! Expense CLI commands
//!
//! Implements CLI commands for expense management.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::expense::{format_expense_details, format_expense_list};
use crate::error::BudgetResult;
use crate::services::{ExpenseDraft, ExpenseService};
use crate::storage::{BudgetStore, KeyValueStore};

use super::parse_amount;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// List expenses in display order
    List,
    /// Show one expense
    Show {
        /// Expense id, id prefix or label
        expense: String,
    },
    /// Add an expense (unset fields get placeholder values)
    Add {
        /// Label
        #[arg(short, long)]
        label: Option<String>,
        /// Monthly amount (e.g. "1200" or "1,200.50")
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// Category
        #[arg(short, long)]
        category: Option<String>,
        /// Palette color (hex code or palette index)
        #[arg(long)]
        color: Option<String>,
    },
    /// Edit an expense
    Edit {
        /// Expense id, id prefix or label
        expense: String,
        /// New label
        #[arg(short, long)]
        label: Option<String>,
        /// New monthly amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New palette color
        #[arg(long)]
        color: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense id, id prefix or label
        expense: String,
    },
    /// Move an expense to a new index in the list
    Move {
        /// Expense id, id prefix or label
        expense: String,
        /// Target index (0 is the top; past the end moves it last)
        index: usize,
    },
}

fn draft(
    label: Option<String>,
    amount: Option<String>,
    category: Option<String>,
    color: Option<String>,
) -> BudgetResult<ExpenseDraft> {
    Ok(ExpenseDraft {
        label,
        amount: amount.as_deref().map(parse_amount).transpose()?,
        category,
        color,
    })
}

/// Handle an expense command
pub fn handle_expense_command<S: KeyValueStore>(
    store: &mut BudgetStore<S>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let mut service = ExpenseService::new(store);

    match cmd {
        ExpenseCommands::List => {
            let shares = service.list_with_shares();
            println!("{}", format_expense_list(&shares, symbol).trim_end());
        }

        ExpenseCommands::Show { expense } => {
            let found = service.find(&expense)?;
            print!("{}", format_expense_details(&found, symbol));
        }

        ExpenseCommands::Add {
            label,
            amount,
            category,
            color,
        } => {
            let expense = service.add_with(&draft(label, amount, category, color)?)?;
            println!("Created expense: {}", expense.label);
            println!("  Amount: {}", expense.amount.format_with_symbol(symbol));
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::Edit {
            expense,
            label,
            amount,
            category,
            color,
        } => {
            let changes = draft(label, amount, category, color)?;
            if changes.is_empty() {
                println!("No changes specified. Use --label, --amount, --category or --color.");
                return Ok(());
            }

            let updated = service.edit(&expense, &changes)?;
            println!("Updated expense: {}", updated.label);
        }

        ExpenseCommands::Delete { expense } => {
            let found = service.find(&expense)?;
            service.delete(found.id.as_str())?;
            println!("Deleted expense: {}", found.label);
        }

        ExpenseCommands::Move { expense, index } => {
            let found = service.find(&expense)?;
            let ordered = service.move_to(found.id.as_str(), index)?;
            let new_index = ordered
                .iter()
                .position(|e| e.id == found.id)
                .unwrap_or(index);
            println!("Moved expense '{}' to index {}", found.label, new_index);
        }
    }

    Ok(())
}

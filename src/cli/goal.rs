//! Goal CLI commands
//!
//! Implements CLI commands for savings goals and completed goals.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::goal::{format_completed_goals, format_goal_details, format_goal_list};
use crate::error::BudgetResult;
use crate::services::{GoalDraft, GoalService};
use crate::storage::{BudgetStore, KeyValueStore};

use super::parse_amount;

/// Goal subcommands
#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// List active goals with progress
    List,
    /// Show one goal (active or completed)
    Show {
        /// Goal id, id prefix or label
        goal: String,
    },
    /// Add a goal (unset fields get placeholder values)
    Add {
        /// Label
        #[arg(short, long)]
        label: Option<String>,
        /// Target amount
        #[arg(short, long, allow_hyphen_values = true)]
        target: Option<String>,
        /// Amount saved so far
        #[arg(short, long, allow_hyphen_values = true)]
        current: Option<String>,
        /// Palette color (hex code or palette index)
        #[arg(long)]
        color: Option<String>,
        /// Free-form description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Edit an active goal
    Edit {
        /// Goal id, id prefix or label
        goal: String,
        /// New label
        #[arg(short, long)]
        label: Option<String>,
        /// New target amount
        #[arg(short, long, allow_hyphen_values = true)]
        target: Option<String>,
        /// New saved amount
        #[arg(short, long, allow_hyphen_values = true)]
        current: Option<String>,
        /// New palette color
        #[arg(long)]
        color: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete an active goal
    Delete {
        /// Goal id, id prefix or label
        goal: String,
    },
    /// Move a goal to a new index in the list
    Move {
        /// Goal id, id prefix or label
        goal: String,
        /// Target index (0 is the top; past the end moves it last)
        index: usize,
    },
    /// Mark a goal as completed (cannot be undone)
    Complete {
        /// Goal id, id prefix or label
        goal: String,
    },
    /// List completed goals
    Completed,
}

fn draft(
    label: Option<String>,
    target: Option<String>,
    current: Option<String>,
    color: Option<String>,
    description: Option<String>,
) -> BudgetResult<GoalDraft> {
    Ok(GoalDraft {
        label,
        target_amount: target.as_deref().map(parse_amount).transpose()?,
        current_amount: current.as_deref().map(parse_amount).transpose()?,
        color,
        description,
    })
}

/// Handle a goal command
pub fn handle_goal_command<S: KeyValueStore>(
    store: &mut BudgetStore<S>,
    settings: &Settings,
    cmd: GoalCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let mut service = GoalService::new(store);

    match cmd {
        GoalCommands::List => {
            println!("{}", format_goal_list(&service.list(), symbol).trim_end());
        }

        GoalCommands::Show { goal } => {
            let found = service
                .find(&goal)
                .or_else(|_| service.find_completed(&goal))?;
            print!("{}", format_goal_details(&found, symbol));
        }

        GoalCommands::Add {
            label,
            target,
            current,
            color,
            description,
        } => {
            let goal = service.add_with(&draft(label, target, current, color, description)?)?;
            println!("Created goal: {}", goal.label);
            println!("  Target: {}", goal.target_amount.format_with_symbol(symbol));
            println!("  ID: {}", goal.id);
        }

        GoalCommands::Edit {
            goal,
            label,
            target,
            current,
            color,
            description,
        } => {
            let changes = draft(label, target, current, color, description)?;
            if changes.is_empty() {
                println!(
                    "No changes specified. Use --label, --target, --current, --color or --description."
                );
                return Ok(());
            }

            let updated = service.edit(&goal, &changes)?;
            println!("Updated goal: {}", updated.label);
        }

        GoalCommands::Delete { goal } => {
            let found = service.find(&goal)?;
            service.delete(found.id.as_str())?;
            println!("Deleted goal: {}", found.label);
        }

        GoalCommands::Move { goal, index } => {
            let found = service.find(&goal)?;
            let ordered = service.move_to(found.id.as_str(), index)?;
            let new_index = ordered
                .iter()
                .position(|g| g.id == found.id)
                .unwrap_or(index);
            println!("Moved goal '{}' to index {}", found.label, new_index);
        }

        GoalCommands::Complete { goal } => {
            let found = service.find(&goal)?;
            let completed = service.complete(found.id.as_str())?;
            println!("Completed goal: {}", completed.label);
        }

        GoalCommands::Completed => {
            println!(
                "{}",
                format_completed_goals(&service.completed(), symbol).trim_end()
            );
        }
    }

    Ok(())
}

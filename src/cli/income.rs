//! Income CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_income;
use crate::error::BudgetResult;
use crate::services::income::parse_income_type;
use crate::services::IncomeService;
use crate::storage::{BudgetStore, KeyValueStore};

use super::parse_amount;

/// Income subcommands
#[derive(Subcommand, Debug)]
pub enum IncomeCommands {
    /// Show the income fields
    Show,
    /// Set the income amount
    ///
    /// Without --type the amount goes to whichever field the current income
    /// type uses.
    Set {
        /// Amount (monthly, or per pay period for bimonthly)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Switch to this income type first (monthly or bimonthly)
        #[arg(short = 't', long = "type")]
        income_type: Option<String>,
    },
    /// Switch the income type (monthly or bimonthly)
    Type {
        /// monthly or bimonthly
        income_type: String,
    },
}

/// Handle an income command
pub fn handle_income_command<S: KeyValueStore>(
    store: &mut BudgetStore<S>,
    settings: &Settings,
    cmd: IncomeCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let mut service = IncomeService::new(store);

    match cmd {
        IncomeCommands::Show => {
            print!("{}", format_income(&service.view(), symbol));
        }

        IncomeCommands::Set {
            amount,
            income_type,
        } => {
            let amount = parse_amount(&amount)?;
            if let Some(income_type) = income_type {
                let income_type = parse_income_type(&income_type)?;
                if income_type != service.view().income_type {
                    service.set_type(income_type)?;
                }
            }

            let view = service.set_for_current_type(amount)?;
            println!(
                "Income set: {} ({})",
                view.effective_monthly_income.format_with_symbol(symbol),
                view.income_type
            );
        }

        IncomeCommands::Type { income_type } => {
            let view = service.set_type(parse_income_type(&income_type)?)?;
            println!("Income type set to {}", view.income_type);
            println!(
                "Monthly total: {}",
                view.effective_monthly_income.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}

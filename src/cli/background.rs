//! Background CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::error::BudgetResult;
use crate::services::background::describe_background;
use crate::services::BackgroundService;
use crate::storage::{BudgetStore, KeyValueStore};

/// Background subcommands
#[derive(Subcommand, Debug)]
pub enum BackgroundCommands {
    /// Show the stored background
    Show,
    /// Store a URL or path as the background (an empty value clears it)
    Set {
        /// URL or path
        reference: String,
    },
    /// Inline a local image file (png, jpg, gif, webp, bmp, svg; up to 5 MB)
    Image {
        /// Image file
        path: PathBuf,
    },
    /// Remove the background
    Clear,
}

/// Handle a background command
pub fn handle_background_command<S: KeyValueStore>(
    store: &mut BudgetStore<S>,
    cmd: BackgroundCommands,
) -> BudgetResult<()> {
    let mut service = BackgroundService::new(store);

    match cmd {
        BackgroundCommands::Show => match service.get()? {
            Some(value) => println!("Background: {}", describe_background(&value)),
            None => println!("Background: default (none)"),
        },

        BackgroundCommands::Set { reference } => match service.set_reference(&reference)? {
            Some(value) => println!("Background set to {}", value),
            None => println!("Background cleared"),
        },

        BackgroundCommands::Image { path } => {
            let value = service.set_image(&path)?;
            println!("Background set to {}", describe_background(&value));
        }

        BackgroundCommands::Clear => {
            service.clear()?;
            println!("Background cleared");
        }
    }

    Ok(())
}

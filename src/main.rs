use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use terminal_budget::audit::AuditLogger;
use terminal_budget::cli::{
    handle_background_command, handle_expense_command, handle_export_command,
    handle_goal_command, handle_history_command, handle_import_command, handle_income_command,
    handle_summary_command,
};
use terminal_budget::config::{BudgetPaths, Settings};
use terminal_budget::storage::{BudgetStore, FileStore, LoadOutcome};

#[derive(Parser)]
#[command(
    name = "tbudget",
    version,
    about = "Terminal-style personal budget tracker",
    long_about = "Track a monthly income, recurring expenses and savings goals from the \
                  terminal. Data is kept in a local store and can be exported to and \
                  imported from JSON."
)]
struct Cli {
    /// Diagnostic log level (overridden by RUST_LOG)
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// Show income, expense totals and goal progress
    Summary,

    /// Income commands
    #[command(subcommand)]
    Income(terminal_budget::cli::IncomeCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(terminal_budget::cli::ExpenseCommands),

    /// Goal commands
    #[command(subcommand)]
    Goal(terminal_budget::cli::GoalCommands),

    /// Export the budget as JSON
    Export {
        /// Output file (defaults to the configured export file name)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,
        /// Write to stdout instead of a file
        #[arg(long)]
        stdout: bool,
    },

    /// Replace the budget with the contents of a JSON export
    Import {
        /// File to import
        file: PathBuf,
    },

    /// Background commands
    #[command(subcommand)]
    Background(terminal_budget::cli::BackgroundCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level.to_string().to_lowercase());

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Open the store
    let (store, outcome) = BudgetStore::open(FileStore::new(paths.storage_dir()));
    if let LoadOutcome::Recovered { reason } = &outcome {
        warn!(%reason, "starting from an empty budget");
        eprintln!("Warning: stored budget could not be loaded ({}); starting empty.", reason);
    }

    let audit = AuditLogger::new(paths.audit_log());
    let mut store = if settings.audit_enabled {
        store.with_audit(audit.clone())
    } else {
        store
    };

    let symbol = settings.currency_symbol.as_str();

    match cli.command {
        Some(Commands::Tui) => {
            terminal_budget::tui::run_tui(store, &settings)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&store, symbol);
        }
        Some(Commands::Income(cmd)) => {
            handle_income_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Export { output, stdout }) => {
            handle_export_command(&store, &settings, output, stdout)?;
        }
        Some(Commands::Import { file }) => {
            handle_import_command(&mut store, &file)?;
        }
        Some(Commands::Background(cmd)) => {
            handle_background_command(&mut store, cmd)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&audit, limit)?;
        }
        Some(Commands::Config) => {
            println!("Terminal Budget Configuration");
            println!("=============================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Storage directory: {}", paths.storage_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Export file name: {}", settings.export_file_name);
            println!("  Audit enabled:    {}", settings.audit_enabled);
            println!(
                "  IP lookup:        {} ({}, {}s timeout)",
                if settings.ip_lookup.enabled { "on" } else { "off" },
                settings.ip_lookup.url,
                settings.ip_lookup.timeout_secs
            );
        }
        None => {
            handle_summary_command(&store, symbol);
            println!();
            println!("Run 'tbudget --help' for usage information.");
            println!("Run 'tbudget tui' to launch the interactive dashboard.");
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "terminal_budget={},{}={}",
            level,
            env!("CARGO_CRATE_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

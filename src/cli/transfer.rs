//! CLI commands for export and import

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_json, export_to_file};
use crate::services::ImportSession;
use crate::storage::{BudgetStore, KeyValueStore};

/// Handle the export command
///
/// Writes to stdout, to `output`, or to the configured file name in the
/// current directory.
pub fn handle_export_command<S: KeyValueStore>(
    store: &BudgetStore<S>,
    settings: &Settings,
    output: Option<PathBuf>,
    stdout: bool,
) -> BudgetResult<()> {
    if stdout {
        let mut handle = std::io::stdout().lock();
        export_json(store.document(), &mut handle, true)?;
        handle
            .flush()
            .map_err(|e| BudgetError::Export(e.to_string()))?;
        return Ok(());
    }

    let path = output.unwrap_or_else(|| PathBuf::from(&settings.export_file_name));
    let written = export_to_file(store.document(), &path)?;
    println!("Exported budget to {}", written.display());
    Ok(())
}

/// Handle the import command
pub fn handle_import_command<S: KeyValueStore>(
    store: &mut BudgetStore<S>,
    file: &Path,
) -> BudgetResult<()> {
    let mut session = ImportSession::new();
    session.select_file(file);

    let summary = session.run(store)?;
    println!("Imported budget from {}", file.display());
    println!("  {}", summary);
    Ok(())
}

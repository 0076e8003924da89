//! JSON export
//!
//! Writes the budget document in the same shape it is stored in, so an
//! export can be imported again unchanged.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetDocument;

/// Serialize the document to `writer`
pub fn export_json<W: Write>(
    document: &BudgetDocument,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, document)
    } else {
        serde_json::to_writer(&mut *writer, document)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

/// Pretty-printed export as a string
pub fn export_json_string(document: &BudgetDocument) -> BudgetResult<String> {
    serde_json::to_string_pretty(document).map_err(|e| BudgetError::Export(e.to_string()))
}

/// Write a pretty-printed export to `path`
pub fn export_to_file(document: &BudgetDocument, path: &Path) -> BudgetResult<PathBuf> {
    let file = File::create(path).map_err(|e| {
        BudgetError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    export_json(document, &mut writer, true)?;
    writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(path.to_path_buf())
}

//! Import service
//!
//! Replaces the whole document from an exported JSON file. Imports are
//! all-or-nothing: the file is parsed and migrated in full before the store
//! is touched, so a bad file leaves both the snapshot and the backend as
//! they were.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

use crate::audit::{EntityType, Operation};
use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetDocument;
use crate::storage::{migrate, BudgetStore, KeyValueStore};

/// What an import brought in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub expense_count: usize,
    pub goal_count: usize,
    pub completed_goal_count: usize,
    /// Schema version of the file before migration
    pub source_version: u32,
}

impl ImportSummary {
    fn of(document: &BudgetDocument, source_version: u32) -> Self {
        Self {
            expense_count: document.expenses.len(),
            goal_count: document.goals.len(),
            completed_goal_count: document.completed_goals.len(),
            source_version,
        }
    }
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} expenses, {} goals, {} completed goals",
            self.expense_count, self.goal_count, self.completed_goal_count
        )
    }
}

/// Parse and migrate import text
///
/// Every failure is reported as `InvalidFileFormat`.
pub fn parse_import(text: &str) -> BudgetResult<(BudgetDocument, u32)> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| BudgetError::InvalidFileFormat(e.to_string()))?;

    let source_version = value
        .get("schemaVersion")
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0);

    let document = migrate(value).map_err(|e| BudgetError::InvalidFileFormat(e.to_string()))?;
    Ok((document, source_version))
}

/// Service for document imports
pub struct ImportService<'a, S: KeyValueStore> {
    store: &'a mut BudgetStore<S>,
}

impl<'a, S: KeyValueStore> ImportService<'a, S> {
    /// Create a new import service
    pub fn new(store: &'a mut BudgetStore<S>) -> Self {
        Self { store }
    }

    /// Replace the document from JSON text
    pub fn import_str(&mut self, text: &str) -> BudgetResult<ImportSummary> {
        let (document, source_version) = parse_import(text)?;
        let summary = ImportSummary::of(&document, source_version);

        self.store.replace(document)?;

        info!(%summary, source_version, "budget imported");
        self.store.log_event(
            Operation::Import,
            EntityType::Document,
            "budget",
            None,
            summary.to_string(),
        );

        Ok(summary)
    }

    /// Replace the document from a file
    pub fn import_file(&mut self, path: &Path) -> BudgetResult<ImportSummary> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            BudgetError::InvalidFileFormat(format!("cannot read {}: {}", path.display(), e))
        })?;
        self.import_str(&text)
    }
}

/// Where an interactive import currently stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImportState {
    /// No file chosen
    #[default]
    Idle,
    /// A file was chosen but not read yet
    FileSelected { path: PathBuf },
    /// The file is being read and parsed
    Parsing { path: PathBuf },
    /// The document was replaced
    Replaced { path: PathBuf, summary: ImportSummary },
    /// The import was rejected; nothing changed
    Failed { reason: String },
}

/// One interactive import, from choosing a file to the outcome
#[derive(Debug, Clone, Default)]
pub struct ImportSession {
    state: ImportState,
}

impl ImportSession {
    /// Start in `Idle`
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> &ImportState {
        &self.state
    }

    /// Choose the file to import; replaces any earlier choice or outcome
    pub fn select_file(&mut self, path: impl Into<PathBuf>) {
        self.state = ImportState::FileSelected { path: path.into() };
    }

    /// Read, parse and adopt the selected file
    pub fn run<S: KeyValueStore>(
        &mut self,
        store: &mut BudgetStore<S>,
    ) -> BudgetResult<ImportSummary> {
        let path = match std::mem::take(&mut self.state) {
            ImportState::FileSelected { path } => path,
            other => {
                self.state = other;
                return Err(BudgetError::Validation("No import file selected".into()));
            }
        };

        self.state = ImportState::Parsing { path: path.clone() };

        match ImportService::new(store).import_file(&path) {
            Ok(summary) => {
                self.state = ImportState::Replaced { path, summary };
                Ok(summary)
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "import rejected");
                self.state = ImportState::Failed {
                    reason: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// Return to `Idle`
    pub fn reset(&mut self) {
        self.state = ImportState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::INVALID_FILE_FORMAT;
    use crate::models::Money;
    use crate::storage::{MemoryStore, BUDGET_KEY};
    use tempfile::TempDir;

    fn create_test_store() -> BudgetStore<MemoryStore> {
        let (mut store, _) = BudgetStore::open(MemoryStore::new());
        store
            .update(|doc| doc.with_monthly_income(Money::new(100.0)))
            .unwrap();
        store
    }

    #[test]
    fn test_import_backfills_legacy_document() {
        let mut store = create_test_store();
        let summary = ImportService::new(&mut store)
            .import_str(r#"{"expenses":[{"id":"1","label":"x","amount":10}], "goals":[]}"#)
            .unwrap();

        assert_eq!(summary.expense_count, 1);
        assert_eq!(summary.source_version, 0);

        let doc = store.document();
        assert_eq!(doc.expenses[0].position, 0);
        assert!(doc.completed_goals.is_empty());
        assert!(doc.monthly_income.is_zero());
    }

    #[test]
    fn test_invalid_import_changes_nothing() {
        let mut store = create_test_store();
        let before = store.document().clone();
        let writes = store.backend().write_count();

        let err = ImportService::new(&mut store)
            .import_str("{ this is not json")
            .unwrap_err();

        assert!(err.is_invalid_file_format());
        assert!(err.to_string().starts_with(INVALID_FILE_FORMAT));
        assert_eq!(store.document(), &before);
        assert_eq!(store.backend().write_count(), writes);
    }

    #[test]
    fn test_structurally_invalid_import_is_rejected() {
        let mut store = create_test_store();
        let writes = store.backend().write_count();

        let err = ImportService::new(&mut store)
            .import_str(r#"{"expenses":"none","goals":[]}"#)
            .unwrap_err();

        assert!(err.is_invalid_file_format());
        assert_eq!(store.backend().write_count(), writes);
    }

    #[test]
    fn test_session_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget_export.json");
        std::fs::write(
            &path,
            r#"{"schemaVersion":2,"monthlyIncome":5000,"expenses":[],"goals":[],"completedGoals":[]}"#,
        )
        .unwrap();

        let mut store = create_test_store();
        let mut session = ImportSession::new();
        assert_eq!(session.state(), &ImportState::Idle);

        session.select_file(&path);
        assert!(matches!(session.state(), ImportState::FileSelected { .. }));

        let summary = session.run(&mut store).unwrap();
        assert_eq!(summary.source_version, 2);
        assert!(matches!(session.state(), ImportState::Replaced { .. }));
        assert_eq!(store.document().monthly_income, Money::new(5000.0));

        let stored = store.backend().get(BUDGET_KEY).unwrap().unwrap();
        assert!(stored.contains("5000"));
    }

    #[test]
    fn test_session_failure_and_reset() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = create_test_store();
        let writes = store.backend().write_count();

        let mut session = ImportSession::new();
        session.select_file(temp_dir.path().join("missing.json"));
        assert!(session.run(&mut store).is_err());

        match session.state() {
            ImportState::Failed { reason } => assert!(reason.starts_with(INVALID_FILE_FORMAT)),
            other => panic!("unexpected state {:?}", other),
        }
        assert_eq!(store.backend().write_count(), writes);

        session.reset();
        assert_eq!(session.state(), &ImportState::Idle);
    }

    #[test]
    fn test_run_without_selection() {
        let mut store = create_test_store();
        let mut session = ImportSession::new();
        assert!(session.run(&mut store).unwrap_err().is_validation());
        assert_eq!(session.state(), &ImportState::Idle);
    }
}

//! The budget state store
//!
//! Owns the current document snapshot and the backend it is persisted to.
//! All mutations go through [`BudgetStore::update`]: the next document is
//! serialized and written first, and only adopted once the write succeeded.

use serde::Serialize;
use tracing::{debug, warn};

use crate::audit::{AuditEntry, AuditLogger, EntityType, Operation};
use crate::error::BudgetResult;
use crate::models::BudgetDocument;

use super::backend::{KeyValueStore, BUDGET_KEY};
use super::migrate::migrate_str;

/// What `open` found in the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A stored document was read and migrated
    Loaded,
    /// Nothing was stored yet
    Empty,
    /// The stored value could not be used; an empty document was adopted
    Recovered { reason: String },
}

impl LoadOutcome {
    /// Whether the stored value was discarded
    pub fn is_recovered(&self) -> bool {
        matches!(self, Self::Recovered { .. })
    }
}

/// Owned container for the budget document
#[derive(Debug)]
pub struct BudgetStore<S: KeyValueStore> {
    backend: S,
    document: BudgetDocument,
    audit: Option<AuditLogger>,
}

impl<S: KeyValueStore> BudgetStore<S> {
    /// Load the document from `backend`
    ///
    /// Never fails: a missing value starts empty and an unreadable or
    /// malformed value starts empty and is reported as `Recovered`. The
    /// stored value is left alone until the first mutation.
    pub fn open(backend: S) -> (Self, LoadOutcome) {
        let (document, outcome) = match backend.get(BUDGET_KEY) {
            Ok(None) => (BudgetDocument::empty(), LoadOutcome::Empty),
            Ok(Some(text)) => match migrate_str(&text) {
                Ok(document) => (document, LoadOutcome::Loaded),
                Err(e) => {
                    warn!(error = %e, "stored budget is malformed, starting empty");
                    (
                        BudgetDocument::empty(),
                        LoadOutcome::Recovered {
                            reason: e.to_string(),
                        },
                    )
                }
            },
            Err(e) => {
                warn!(error = %e, "stored budget could not be read, starting empty");
                (
                    BudgetDocument::empty(),
                    LoadOutcome::Recovered {
                        reason: e.to_string(),
                    },
                )
            }
        };

        debug!(?outcome, "budget store opened");

        let store = Self {
            backend,
            document,
            audit: None,
        };
        (store, outcome)
    }

    /// Attach an audit logger
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Current document snapshot
    pub fn document(&self) -> &BudgetDocument {
        &self.document
    }

    /// Apply a transition and persist the result
    ///
    /// The write happens even when the transition changed nothing. If the
    /// write fails the previous snapshot stays current.
    pub fn update<F>(&mut self, f: F) -> BudgetResult<&BudgetDocument>
    where
        F: FnOnce(&BudgetDocument) -> BudgetDocument,
    {
        let next = f(&self.document);
        self.persist(next)
    }

    /// Replace the whole document and persist it
    pub fn replace(&mut self, document: BudgetDocument) -> BudgetResult<&BudgetDocument> {
        self.persist(document)
    }

    fn persist(&mut self, next: BudgetDocument) -> BudgetResult<&BudgetDocument> {
        let text = serde_json::to_string(&next)?;
        self.backend.set(BUDGET_KEY, &text)?;
        self.document = next;
        Ok(&self.document)
    }

    /// The persistence backend
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Mutable access to the backend, for keys other than the document
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// The attached audit logger, if any
    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record a creation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.log(AuditEntry::create(entity_type, entity_id, entity_name, entity));
    }

    /// Record an update in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) {
        self.log(AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
        ));
    }

    /// Record a deletion in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.log(AuditEntry::delete(entity_type, entity_id, entity_name, entity));
    }

    /// Record an operation described by a summary line
    pub fn log_event(
        &self,
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        summary: impl Into<String>,
    ) {
        self.log(AuditEntry::summary(
            operation,
            entity_type,
            entity_id,
            entity_name,
            summary,
        ));
    }

    /// The mutation is already persisted when this runs, so a failing audit
    /// write is logged and otherwise ignored.
    fn log(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!(error = %e, "failed to write audit entry");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BudgetError;
    use crate::models::{Expense, Money};
    use crate::storage::{FileStore, MemoryStore};
    use tempfile::TempDir;

    /// Backend whose writes always fail
    #[derive(Debug, Default)]
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> BudgetResult<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> BudgetResult<()> {
            Err(BudgetError::Storage("read-only".into()))
        }

        fn remove(&mut self, _key: &str) -> BudgetResult<()> {
            Err(BudgetError::Storage("read-only".into()))
        }
    }

    #[test]
    fn test_open_empty_backend() {
        let (store, outcome) = BudgetStore::open(MemoryStore::new());
        assert_eq!(outcome, LoadOutcome::Empty);
        assert_eq!(store.document(), &BudgetDocument::empty());
    }

    #[test]
    fn test_open_migrates_stored_document() {
        let backend = MemoryStore::with_value(
            BUDGET_KEY,
            r#"{"monthlyIncome":5000,"expenses":[{"id":"1","label":"rent","amount":1200}],"goals":[]}"#,
        );
        let (store, outcome) = BudgetStore::open(backend);

        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(store.document().monthly_income, Money::new(5000.0));
        assert_eq!(store.document().expenses[0].position, 0);
        assert!(store.document().completed_goals.is_empty());
    }

    #[test]
    fn test_open_recovers_from_corrupt_value() {
        let backend = MemoryStore::with_value(BUDGET_KEY, "{not json");
        let (store, outcome) = BudgetStore::open(backend);

        assert!(outcome.is_recovered());
        assert_eq!(store.document(), &BudgetDocument::empty());
        // The corrupt value is not overwritten until the first mutation
        assert_eq!(store.backend().write_count(), 0);
        assert_eq!(
            store.backend().get(BUDGET_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_update_persists_and_adopts() {
        let (mut store, _) = BudgetStore::open(MemoryStore::new());

        store
            .update(|doc| doc.with_monthly_income(Money::new(5000.0)))
            .unwrap();

        assert_eq!(store.document().monthly_income, Money::new(5000.0));
        assert_eq!(store.backend().write_count(), 1);

        let stored = store.backend().get(BUDGET_KEY).unwrap().unwrap();
        let reloaded = migrate_str(&stored).unwrap();
        assert_eq!(&reloaded, store.document());
    }

    #[test]
    fn test_noop_update_still_writes() {
        let (mut store, _) = BudgetStore::open(MemoryStore::new());
        store.update(|doc| doc.with_expense_deleted("missing")).unwrap();
        assert_eq!(store.backend().write_count(), 1);
    }

    #[test]
    fn test_failed_write_keeps_previous_snapshot() {
        let (mut store, _) = BudgetStore::open(ReadOnlyStore);

        let result = store.update(|doc| doc.with_expense_added(Expense::new(0)));
        assert!(result.is_err());
        assert!(store.document().expenses.is_empty());
    }

    #[test]
    fn test_file_backed_store_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("storage");

        let (mut store, _) = BudgetStore::open(FileStore::new(&dir));
        store
            .update(|doc| doc.with_expense_added(Expense::new(0)))
            .unwrap();
        let saved = store.document().clone();

        let (reopened, outcome) = BudgetStore::open(FileStore::new(&dir));
        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(reopened.document(), &saved);
    }

    #[test]
    fn test_audit_entries_are_written() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let (store, _) = BudgetStore::open(MemoryStore::new());
        let store = store.with_audit(logger);

        store.log_event(
            Operation::Import,
            EntityType::Document,
            "budget",
            None,
            "replaced from file",
        );

        let entries = store.audit_logger().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Import);
    }
}

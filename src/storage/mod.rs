//! Storage layer for Terminal Budget
//!
//! Provides the key/value backends the budget is persisted to, atomic file
//! writes, the schema migration chain, and the owned `BudgetStore`.

pub mod backend;
pub mod file_io;
pub mod migrate;
pub mod store;

pub use backend::{FileStore, KeyValueStore, MemoryStore, BACKGROUND_KEY, BUDGET_KEY};
pub use file_io::{read_text, write_text_atomic};
pub use migrate::{migrate, migrate_str};
pub use store::{BudgetStore, LoadOutcome};

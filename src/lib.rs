//! Terminal Budget - personal budget tracker for the terminal
//!
//! This library provides the core functionality for the `tbudget` binary:
//! a monthly income, recurring expenses, savings goals with progress, and
//! completed goals, persisted to a local key/value store and exportable as
//! JSON.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The budget document and its records
//! - `storage`: Key/value backends, migrations and the owned `BudgetStore`
//! - `services`: Business logic and derived metrics
//! - `audit`: Audit logging system
//! - `export`: JSON export
//! - `display`: Plain-text formatting for CLI output
//! - `cli`: CLI command handlers
//! - `tui`: Interactive terminal dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use terminal_budget::config::BudgetPaths;
//! use terminal_budget::storage::{BudgetStore, FileStore};
//!
//! let paths = BudgetPaths::new()?;
//! let (mut store, outcome) = BudgetStore::open(FileStore::new(paths.storage_dir()));
//! store.update(|doc| doc.with_monthly_income(5000.0.into()))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult};

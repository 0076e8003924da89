//! Core data models for Terminal Budget
//!
//! This module contains the budget document and the records it owns:
//! expenses, savings goals, and the ordering and money helpers they share.

pub mod document;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod money;
pub mod palette;
pub mod position;

pub use document::{BudgetDocument, IncomeType, ListKind, CURRENT_SCHEMA_VERSION};
pub use expense::Expense;
pub use goal::Goal;
pub use ids::{ExpenseId, GoalId};
pub use money::Money;
pub use position::{next_position, reorder, sorted_by_position, Positioned};

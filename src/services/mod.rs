//! Service layer for Terminal Budget
//!
//! The service layer provides business logic on top of the budget store:
//! validation, identifier resolution, audit logging and derived metrics.

pub mod background;
pub mod expense;
pub mod goal;
pub mod import;
pub mod income;
pub mod lookup;
pub mod metrics;
pub mod network;

pub use background::BackgroundService;
pub use expense::{ExpenseDraft, ExpenseService};
pub use goal::{GoalDraft, GoalService};
pub use import::{ImportService, ImportSession, ImportState, ImportSummary};
pub use income::{IncomeService, IncomeView};
pub use metrics::{BudgetSummary, GoalProgress};
pub use network::lookup_public_ip;

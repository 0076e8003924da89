//! Audit logging for budget mutations
//!
//! Every change that goes through the budget store can be appended to a
//! line-delimited JSON log with before/after values.
//!
//! - `AuditEntry`: one logged operation (timestamp, operation, entity, values)
//! - `AuditLogger`: appends entries to the log file and reads them back
//! - `summarize_changes`: field-level description of an update

mod diff;
mod entry;
mod logger;

pub use diff::summarize_changes;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;

//! Export module for Terminal Budget
//!
//! The budget is exported as pretty-printed JSON with the same top-level
//! shape as the stored document.

pub mod json;

pub use json::{export_json, export_json_string, export_to_file};

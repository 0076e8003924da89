//! Resolving user-supplied record identifiers
//!
//! Records can be named by full id, by label (case-insensitive) or by a
//! unique id prefix, tried in that order.

use crate::error::{BudgetError, BudgetResult};
use crate::models::Positioned;

/// A positioned record that also has a label
pub trait Labeled: Positioned {
    fn label(&self) -> &str;
}

impl Labeled for crate::models::Expense {
    fn label(&self) -> &str {
        &self.label
    }
}

impl Labeled for crate::models::Goal {
    fn label(&self) -> &str {
        &self.label
    }
}

/// Find the single record `identifier` refers to
pub fn resolve<'a, T: Labeled>(
    items: &'a [T],
    identifier: &str,
    entity_type: &'static str,
) -> BudgetResult<&'a T> {
    let identifier = identifier.trim();
    let not_found = || BudgetError::NotFound {
        entity_type,
        identifier: identifier.to_string(),
    };

    if identifier.is_empty() {
        return Err(not_found());
    }

    if let Some(item) = items.iter().find(|item| item.record_id() == identifier) {
        return Ok(item);
    }

    let by_label: Vec<&T> = items
        .iter()
        .filter(|item| item.label().eq_ignore_ascii_case(identifier))
        .collect();
    if let Some(item) = unique(&by_label, identifier, entity_type)? {
        return Ok(item);
    }

    let by_prefix: Vec<&T> = items
        .iter()
        .filter(|item| item.record_id().starts_with(identifier))
        .collect();
    unique(&by_prefix, identifier, entity_type)?.ok_or_else(not_found)
}

fn unique<'a, T>(
    matches: &[&'a T],
    identifier: &str,
    entity_type: &'static str,
) -> BudgetResult<Option<&'a T>> {
    match matches {
        [] => Ok(None),
        [only] => Ok(Some(*only)),
        _ => Err(BudgetError::Ambiguous {
            entity_type,
            identifier: identifier.to_string(),
            matches: matches.len(),
        }),
    }
}

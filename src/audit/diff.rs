//! Change summaries for audit entries
//!
//! Compares two serialized records field by field and describes what an
//! edit actually changed, e.g. `amount: 0.0 -> 1200.0, label: "new_expense" -> "rent"`.

use serde_json::Value;

/// Describe the top-level fields that differ between two JSON values
///
/// Returns `None` when nothing changed.
pub fn summarize_changes(before: &Value, after: &Value) -> Option<String> {
    let changes = match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        describe(before_val),
                        describe(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!("{}: {} -> (removed)", key, describe(before_val))),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, describe(after_val)));
                }
            }

            changes
        }
        _ if before != after => vec![format!("{} -> {}", describe(before), describe(after))],
        _ => Vec::new(),
    };

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Compact rendering of a JSON value
fn describe(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > 40 => {
            let head: String = s.chars().take(37).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_changed_fields_only() {
        let before = json!({"label": "new_expense", "amount": 0, "category": "general"});
        let after = json!({"label": "rent", "amount": 1200, "category": "general"});

        let summary = summarize_changes(&before, &after).unwrap();
        assert!(summary.contains("label: \"new_expense\" -> \"rent\""));
        assert!(summary.contains("amount: 0 -> 1200"));
        assert!(!summary.contains("category"));
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"label": "car", "description": "old"});
        let after = json!({"label": "car", "completedDate": "2025-01-01T00:00:00Z"});

        let summary = summarize_changes(&before, &after).unwrap();
        assert!(summary.contains("description: \"old\" -> (removed)"));
        assert!(summary.contains("completedDate: (added) -> \"2025-01-01T00:00:00Z\""));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"label": "car", "position": 2});
        assert!(summarize_changes(&value, &value).is_none());
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(
            summarize_changes(&json!(5000), &json!(6000)).as_deref(),
            Some("5000 -> 6000")
        );
    }

    #[test]
    fn test_long_strings_are_truncated() {
        let before = json!({"description": "é".repeat(100)});
        let after = json!({"description": "short"});

        let summary = summarize_changes(&before, &after).unwrap();
        assert!(summary.contains("...\""));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&json!(null)), "null");
        assert_eq!(describe(&json!(true)), "true");
        assert_eq!(describe(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(describe(&json!({"a": 1})), "{1 fields}");
    }
}

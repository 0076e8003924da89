//! Versioned document migrations
//!
//! Documents carry a `schemaVersion`; documents written before the field
//! existed are version 0. Each step takes the raw JSON object from version
//! `n` to `n + 1` and only fills in what is missing, so running a step on a
//! document that already has the field changes nothing.
//!
//! | Step | Adds |
//! |------|------|
//! | 0 → 1 | `position` on every list record, `completedGoals`, empty lists, `monthlyIncome` |
//! | 1 → 2 | `incomeType`, `biMonthlyIncome` |

use serde_json::{Map, Value};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetDocument, CURRENT_SCHEMA_VERSION};

type Migration = fn(&mut Map<String, Value>);

/// Migration steps, indexed by the version they upgrade from
const MIGRATIONS: [Migration; CURRENT_SCHEMA_VERSION as usize] =
    [backfill_positions_and_lists, backfill_income_type];

const SCHEMA_VERSION_KEY: &str = "schemaVersion";

/// Parse document text and bring it up to the current schema
pub fn migrate_str(text: &str) -> BudgetResult<BudgetDocument> {
    let value: Value = serde_json::from_str(text)?;
    migrate(value)
}

/// Bring a raw JSON document up to the current schema and type it
pub fn migrate(value: Value) -> BudgetResult<BudgetDocument> {
    let Value::Object(mut root) = value else {
        return Err(BudgetError::Migration(
            "document root must be a JSON object".into(),
        ));
    };

    let version = schema_version(&root)?;
    if version > CURRENT_SCHEMA_VERSION {
        return Err(BudgetError::Migration(format!(
            "document schema version {} is newer than supported version {}",
            version, CURRENT_SCHEMA_VERSION
        )));
    }

    for step in &MIGRATIONS[version as usize..] {
        step(&mut root);
    }
    root.insert(SCHEMA_VERSION_KEY.into(), Value::from(CURRENT_SCHEMA_VERSION));

    serde_json::from_value(Value::Object(root))
        .map_err(|e| BudgetError::Migration(format!("document does not match schema: {}", e)))
}

fn schema_version(root: &Map<String, Value>) -> BudgetResult<u32> {
    match root.get(SCHEMA_VERSION_KEY) {
        None | Some(Value::Null) => Ok(0),
        Some(value) => value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| {
                BudgetError::Migration(format!("invalid schemaVersion: {}", value))
            }),
    }
}

/// 0 → 1: positions default to the array index; missing lists become empty
fn backfill_positions_and_lists(root: &mut Map<String, Value>) {
    for key in ["expenses", "goals", "completedGoals"] {
        let list = root
            .entry(key)
            .or_insert_with(|| Value::Array(Vec::new()));

        if list.is_null() {
            *list = Value::Array(Vec::new());
        }

        if let Value::Array(items) = list {
            for (index, item) in items.iter_mut().enumerate() {
                if let Value::Object(record) = item {
                    let position = record.entry("position").or_insert(Value::Null);
                    if position.is_null() {
                        *position = Value::from(index);
                    }
                }
            }
        }
    }

    let income = root.entry("monthlyIncome").or_insert(Value::Null);
    if income.is_null() {
        *income = Value::from(0);
    }
}

/// 1 → 2: income type selector and the per-period amount
fn backfill_income_type(root: &mut Map<String, Value>) {
    root.entry("incomeType")
        .or_insert_with(|| Value::from("monthly"));
    root.entry("biMonthlyIncome").or_insert_with(|| Value::from(0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncomeType, Money};
    use serde_json::json;

    #[test]
    fn test_backfills_positions_and_completed_goals() {
        let doc = migrate_str(
            r#"{"expenses":[{"id":"1","label":"x","amount":10}], "goals":[]}"#,
        )
        .unwrap();

        assert_eq!(doc.expenses[0].position, 0);
        assert!(doc.completed_goals.is_empty());
        assert!(doc.monthly_income.is_zero());
        assert_eq!(doc.income_type, IncomeType::Monthly);
        assert_eq!(doc.schema_version, CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn test_existing_positions_are_kept() {
        let doc = migrate(json!({
            "monthlyIncome": 5000,
            "expenses": [
                {"id": "a", "label": "a", "amount": 1, "position": 7},
                {"id": "b", "label": "b", "amount": 2},
                {"id": "c", "label": "c", "amount": 3, "position": null}
            ],
            "goals": [
                {"id": "g", "label": "g", "targetAmount": 10, "currentAmount": 1,
                 "color": "#00FF00", "description": ""}
            ]
        }))
        .unwrap();

        let positions: Vec<i64> = doc.expenses.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![7, 1, 2]);
        assert_eq!(doc.goals[0].position, 0);
        assert_eq!(doc.monthly_income, Money::new(5000.0));
    }

    #[test]
    fn test_legacy_income_type_is_preserved() {
        let doc = migrate(json!({
            "monthlyIncome": 0,
            "biMonthlyIncome": 2000,
            "incomeType": "bimonthly",
            "expenses": [],
            "goals": []
        }))
        .unwrap();

        assert_eq!(doc.income_type, IncomeType::Bimonthly);
        assert_eq!(doc.effective_monthly_income(), Money::new(4000.0));
    }

    #[test]
    fn test_current_version_is_untouched() {
        let original = BudgetDocument::empty().with_monthly_income(Money::new(10.0));
        let value = serde_json::to_value(&original).unwrap();
        assert_eq!(migrate(value).unwrap(), original);
    }

    #[test]
    fn test_rejects_newer_schema() {
        let err = migrate(json!({"schemaVersion": 99})).unwrap_err();
        assert!(matches!(err, BudgetError::Migration(_)));
    }

    #[test]
    fn test_rejects_non_object_root() {
        assert!(migrate(json!([1, 2, 3])).is_err());
        assert!(migrate_str("\"budget\"").is_err());
    }

    #[test]
    fn test_rejects_structurally_invalid_records() {
        let err = migrate(json!({"expenses": [{"id": "1", "amount": "ten"}]})).unwrap_err();
        assert!(matches!(err, BudgetError::Migration(_)));
    }

    #[test]
    fn test_invalid_json_text() {
        assert!(matches!(
            migrate_str("{not json").unwrap_err(),
            BudgetError::Json(_)
        ));
    }
}

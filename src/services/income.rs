//! Income service
//!
//! Income is entered either as one monthly amount or as the amount of each
//! of two pay periods; the income type decides which field is authoritative.

use crate::audit::EntityType;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetDocument, IncomeType, Money};
use crate::storage::{BudgetStore, KeyValueStore};

/// Entity id used for income audit entries
const INCOME_ENTITY_ID: &str = "income";

/// Snapshot of the income fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncomeView {
    pub income_type: IncomeType,
    pub monthly_income: Money,
    pub bi_monthly_income: Money,
    /// Monthly income after applying the income type
    pub effective_monthly_income: Money,
}

/// Service for income management
pub struct IncomeService<'a, S: KeyValueStore> {
    store: &'a mut BudgetStore<S>,
}

impl<'a, S: KeyValueStore> IncomeService<'a, S> {
    /// Create a new income service
    pub fn new(store: &'a mut BudgetStore<S>) -> Self {
        Self { store }
    }

    /// Current income fields
    pub fn view(&self) -> IncomeView {
        let doc = self.store.document();
        IncomeView {
            income_type: doc.income_type,
            monthly_income: doc.monthly_income,
            bi_monthly_income: doc.bi_monthly_income,
            effective_monthly_income: doc.effective_monthly_income(),
        }
    }

    /// Set the monthly income
    pub fn set_monthly(&mut self, amount: Money) -> BudgetResult<IncomeView> {
        check_amount(amount)?;
        self.apply(|doc| doc.with_monthly_income(amount))
    }

    /// Set the per-period amount used by the bi-monthly income type
    pub fn set_bi_monthly(&mut self, amount: Money) -> BudgetResult<IncomeView> {
        check_amount(amount)?;
        self.apply(|doc| doc.with_bi_monthly_income(amount))
    }

    /// Set the amount of whichever field the current income type uses
    pub fn set_for_current_type(&mut self, amount: Money) -> BudgetResult<IncomeView> {
        match self.store.document().income_type {
            IncomeType::Monthly => self.set_monthly(amount),
            IncomeType::Bimonthly => self.set_bi_monthly(amount),
        }
    }

    /// Switch the income type
    pub fn set_type(&mut self, income_type: IncomeType) -> BudgetResult<IncomeView> {
        self.apply(|doc| doc.with_income_type(income_type))
    }

    /// Switch between monthly and bi-monthly
    pub fn toggle_type(&mut self) -> BudgetResult<IncomeView> {
        let next = match self.store.document().income_type {
            IncomeType::Monthly => IncomeType::Bimonthly,
            IncomeType::Bimonthly => IncomeType::Monthly,
        };
        self.set_type(next)
    }

    fn apply<F>(&mut self, f: F) -> BudgetResult<IncomeView>
    where
        F: FnOnce(&BudgetDocument) -> BudgetDocument,
    {
        let before = self.view();
        self.store.update(f)?;
        let after = self.view();

        self.store.log_update(
            EntityType::Income,
            INCOME_ENTITY_ID,
            None,
            &income_json(&before),
            &income_json(&after),
        );

        Ok(after)
    }
}

/// Parse an income type as typed on the command line or shown in the UI
pub fn parse_income_type(s: &str) -> BudgetResult<IncomeType> {
    match s.trim().to_lowercase().as_str() {
        "monthly" => Ok(IncomeType::Monthly),
        "bimonthly" | "bi_monthly" | "bi-monthly" => Ok(IncomeType::Bimonthly),
        other => Err(BudgetError::Validation(format!(
            "Unknown income type '{}' (expected monthly or bimonthly)",
            other
        ))),
    }
}

fn check_amount(amount: Money) -> BudgetResult<()> {
    if amount.amount().is_finite() {
        Ok(())
    } else {
        Err(BudgetError::Validation("Income must be a finite number".into()))
    }
}

fn income_json(view: &IncomeView) -> serde_json::Value {
    serde_json::json!({
        "incomeType": view.income_type,
        "monthlyIncome": view.monthly_income,
        "biMonthlyIncome": view.bi_monthly_income,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn create_test_store() -> BudgetStore<MemoryStore> {
        BudgetStore::open(MemoryStore::new()).0
    }

    #[test]
    fn test_set_monthly_income() {
        let mut store = create_test_store();
        let view = IncomeService::new(&mut store)
            .set_monthly(Money::new(5000.0))
            .unwrap();

        assert_eq!(view.effective_monthly_income, Money::new(5000.0));
        assert_eq!(store.document().monthly_income, Money::new(5000.0));
        assert_eq!(store.backend().write_count(), 1);
    }

    #[test]
    fn test_bimonthly_income_doubles() {
        let mut store = create_test_store();
        let mut service = IncomeService::new(&mut store);
        service.set_monthly(Money::new(5000.0)).unwrap();
        service.set_type(IncomeType::Bimonthly).unwrap();
        let view = service.set_for_current_type(Money::new(2100.0)).unwrap();

        assert_eq!(view.bi_monthly_income, Money::new(2100.0));
        assert_eq!(view.monthly_income, Money::new(5000.0));
        assert_eq!(view.effective_monthly_income, Money::new(4200.0));
    }

    #[test]
    fn test_toggle_type() {
        let mut store = create_test_store();
        let mut service = IncomeService::new(&mut store);
        assert_eq!(service.toggle_type().unwrap().income_type, IncomeType::Bimonthly);
        assert_eq!(service.toggle_type().unwrap().income_type, IncomeType::Monthly);
    }

    #[test]
    fn test_rejects_non_finite_income() {
        let mut store = create_test_store();
        let err = IncomeService::new(&mut store)
            .set_monthly(Money::new(f64::NAN))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_parse_income_type() {
        assert_eq!(parse_income_type("Monthly").unwrap(), IncomeType::Monthly);
        assert_eq!(parse_income_type("bi_monthly").unwrap(), IncomeType::Bimonthly);
        let shown = IncomeType::Bimonthly.to_string();
        assert_eq!(parse_income_type(&shown).unwrap(), IncomeType::Bimonthly);
        assert_eq!(parse_income_type("bimonthly").unwrap(), IncomeType::Bimonthly);
        assert!(parse_income_type("weekly").is_err());
    }
}

//! Expense service
//!
//! Add, edit, delete and reorder expenses. Every operation is a single
//! document replacement through the store.

use crate::audit::{EntityType, Operation};
use crate::error::{BudgetError, BudgetResult};
use crate::models::palette::resolve_color;
use crate::models::{Expense, ListKind, Money};
use crate::storage::{BudgetStore, KeyValueStore};

use super::lookup::resolve;
use super::metrics::{expense_shares, ExpenseShare};

/// Field changes for an expense; `None` leaves a field as it is
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub label: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub color: Option<String>,
}

impl ExpenseDraft {
    /// Whether the draft changes nothing
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.color.is_none()
    }

    /// Copy of `expense` with the draft applied
    pub fn apply_to(&self, expense: &Expense) -> BudgetResult<Expense> {
        let mut next = expense.clone();

        if let Some(label) = &self.label {
            next.label = label.trim().to_string();
        }
        if let Some(amount) = self.amount {
            next.amount = amount;
        }
        if let Some(category) = &self.category {
            next.category = category.trim().to_string();
        }
        if let Some(color) = &self.color {
            next.color = resolve_color(color).ok_or_else(|| {
                BudgetError::Validation(format!("'{}' is not a palette color", color))
            })?;
        }

        next.validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;
        Ok(next)
    }
}

/// Service for expense management
pub struct ExpenseService<'a, S: KeyValueStore> {
    store: &'a mut BudgetStore<S>,
}

impl<'a, S: KeyValueStore> ExpenseService<'a, S> {
    /// Create a new expense service
    pub fn new(store: &'a mut BudgetStore<S>) -> Self {
        Self { store }
    }

    /// Expenses in display order
    pub fn list(&self) -> Vec<Expense> {
        self.store.document().expenses_sorted()
    }

    /// Expenses in display order with their share of the total
    pub fn list_with_shares(&self) -> Vec<ExpenseShare> {
        expense_shares(self.store.document())
    }

    /// Find an expense by id, label or id prefix
    pub fn find(&self, identifier: &str) -> BudgetResult<Expense> {
        resolve(&self.store.document().expenses, identifier, "Expense").cloned()
    }

    /// Append a placeholder expense
    pub fn add(&mut self) -> BudgetResult<Expense> {
        self.add_with(&ExpenseDraft::default())
    }

    /// Append an expense, starting from the placeholder values
    pub fn add_with(&mut self, draft: &ExpenseDraft) -> BudgetResult<Expense> {
        let expense = draft.apply_to(&Expense::new(0))?;
        let id = expense.id.clone();

        let doc = self.store.update(|doc| doc.with_expense_added(expense))?;
        let created = doc
            .expense(id.as_str())
            .cloned()
            .ok_or_else(|| BudgetError::expense_not_found(id.as_str()))?;

        self.store.log_create(
            EntityType::Expense,
            created.id.to_string(),
            Some(created.label.clone()),
            &created,
        );

        Ok(created)
    }

    /// Replace the expense with the same id
    pub fn update(&mut self, expense: Expense) -> BudgetResult<Expense> {
        expense
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let before = self
            .store
            .document()
            .expense(expense.id.as_str())
            .cloned()
            .ok_or_else(|| BudgetError::expense_not_found(expense.id.as_str()))?;

        self.store
            .update(|doc| doc.with_expense_updated(expense.clone()))?;

        self.store.log_update(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.label.clone()),
            &before,
            &expense,
        );

        Ok(expense)
    }

    /// Apply a draft to the expense `identifier` refers to
    pub fn edit(&mut self, identifier: &str, draft: &ExpenseDraft) -> BudgetResult<Expense> {
        let current = self.find(identifier)?;
        let next = draft.apply_to(&current)?;
        self.update(next)
    }

    /// Delete by exact id
    ///
    /// Unknown ids leave the list unchanged and return `None`.
    pub fn delete(&mut self, id: &str) -> BudgetResult<Option<Expense>> {
        let removed = self.store.document().expense(id).cloned();

        self.store.update(|doc| doc.with_expense_deleted(id))?;

        if let Some(expense) = &removed {
            self.store.log_delete(
                EntityType::Expense,
                expense.id.to_string(),
                Some(expense.label.clone()),
                expense,
            );
        }

        Ok(removed)
    }

    /// Move an expense to `target_index` in display order
    pub fn move_to(&mut self, id: &str, target_index: usize) -> BudgetResult<Vec<Expense>> {
        let label = self.store.document().expense(id).map(|e| e.label.clone());

        let doc = self
            .store
            .update(|doc| doc.with_reordered(ListKind::Expenses, id, target_index))?;
        let ordered = doc.expenses_sorted();

        if label.is_some() {
            self.store.log_event(
                Operation::Reorder,
                EntityType::Expense,
                id,
                label,
                format!("moved to index {}", target_index),
            );
        }

        Ok(ordered)
    }
}

//! The budget document
//!
//! The whole persisted state: income, expenses, active goals and completed
//! goals. Every edit is a pure transition from one document to the next;
//! the store decides when a new document is adopted and persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::Expense;
use super::goal::Goal;
use super::money::Money;
use super::position::{next_position, reorder, sorted_by_position, Positioned};

/// Schema version written by this build
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// How income is entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IncomeType {
    /// One monthly amount
    #[default]
    Monthly,
    /// Two pay periods per month
    Bimonthly,
}

impl fmt::Display for IncomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Bimonthly => write!(f, "bimonthly"),
        }
    }
}

/// Which ordered list an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Expenses,
    Goals,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expenses => write!(f, "expenses"),
            Self::Goals => write!(f, "goals"),
        }
    }
}

/// Root persisted entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetDocument {
    /// Schema version of this document
    pub schema_version: u32,

    /// Gross monthly income
    pub monthly_income: Money,

    /// Whether `monthly_income` or `bi_monthly_income` is authoritative
    #[serde(default)]
    pub income_type: IncomeType,

    /// Income per half-month pay period
    #[serde(default)]
    pub bi_monthly_income: Money,

    /// Recurring expenses
    pub expenses: Vec<Expense>,

    /// Active savings goals
    pub goals: Vec<Goal>,

    /// Goals moved out of `goals` once fulfilled
    pub completed_goals: Vec<Goal>,
}

impl Default for BudgetDocument {
    fn default() -> Self {
        Self::empty()
    }
}

impl BudgetDocument {
    /// Document with zero income and no records
    pub fn empty() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            monthly_income: Money::zero(),
            income_type: IncomeType::Monthly,
            bi_monthly_income: Money::zero(),
            expenses: Vec::new(),
            goals: Vec::new(),
            completed_goals: Vec::new(),
        }
    }

    /// Monthly income after applying the income type
    pub fn effective_monthly_income(&self) -> Money {
        match self.income_type {
            IncomeType::Monthly => self.monthly_income,
            IncomeType::Bimonthly => self.bi_monthly_income * 2.0,
        }
    }

    /// Expenses in display order
    pub fn expenses_sorted(&self) -> Vec<Expense> {
        sorted_by_position(&self.expenses)
    }

    /// Active goals in display order
    pub fn goals_sorted(&self) -> Vec<Goal> {
        sorted_by_position(&self.goals)
    }

    /// Look up an expense by id
    pub fn expense(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id.as_str() == id)
    }

    /// Look up an active goal by id
    pub fn goal(&self, id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id.as_str() == id)
    }

    /// Look up a completed goal by id
    pub fn completed_goal(&self, id: &str) -> Option<&Goal> {
        self.completed_goals.iter().find(|g| g.id.as_str() == id)
    }

    /// Append an expense after the current last position
    pub fn with_expense_added(&self, mut expense: Expense) -> Self {
        expense.position = next_position(&self.expenses);
        let mut next = self.clone();
        next.expenses.push(expense);
        next
    }

    /// Replace the expense with the same id
    pub fn with_expense_updated(&self, expense: Expense) -> Self {
        let mut next = self.clone();
        next.expenses = replace_by_id(&self.expenses, expense);
        next
    }

    /// Remove the expense with `id`; positions are left as they are
    pub fn with_expense_deleted(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.expenses.retain(|e| e.id.as_str() != id);
        next
    }

    /// Append a goal after the current last position
    pub fn with_goal_added(&self, mut goal: Goal) -> Self {
        goal.position = next_position(&self.goals);
        let mut next = self.clone();
        next.goals.push(goal);
        next
    }

    /// Replace the active goal with the same id
    pub fn with_goal_updated(&self, goal: Goal) -> Self {
        let mut next = self.clone();
        next.goals = replace_by_id(&self.goals, goal);
        next
    }

    /// Remove the active goal with `id`
    pub fn with_goal_deleted(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.goals.retain(|g| g.id.as_str() != id);
        next
    }

    /// Move a record to `target_index` and renumber the whole list
    pub fn with_reordered(&self, kind: ListKind, dragged_id: &str, target_index: usize) -> Self {
        let mut next = self.clone();
        match kind {
            ListKind::Expenses => {
                next.expenses = reorder(&self.expenses, dragged_id, target_index);
            }
            ListKind::Goals => {
                next.goals = reorder(&self.goals, dragged_id, target_index);
            }
        }
        next
    }

    /// Move an active goal to the completed list, stamped with `at`
    ///
    /// Unknown ids leave the document unchanged.
    pub fn with_goal_completed(&self, id: &str, at: DateTime<Utc>) -> Self {
        let mut next = self.clone();
        if let Some(index) = next.goals.iter().position(|g| g.id.as_str() == id) {
            let goal = next.goals.remove(index);
            next.completed_goals.push(goal.completed_at(at));
        }
        next
    }

    /// Set the monthly income
    pub fn with_monthly_income(&self, amount: Money) -> Self {
        Self {
            monthly_income: amount,
            ..self.clone()
        }
    }

    /// Set the per-period income used by the bi-monthly income type
    pub fn with_bi_monthly_income(&self, amount: Money) -> Self {
        Self {
            bi_monthly_income: amount,
            ..self.clone()
        }
    }

    /// Switch the income type
    pub fn with_income_type(&self, income_type: IncomeType) -> Self {
        Self {
            income_type,
            ..self.clone()
        }
    }
}

fn replace_by_id<T: Positioned>(items: &[T], replacement: T) -> Vec<T> {
    items
        .iter()
        .map(|item| {
            if item.record_id() == replacement.record_id() {
                replacement.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}

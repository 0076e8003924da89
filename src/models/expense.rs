//! Expense model
//!
//! A recurring monthly expense.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;
use super::palette::random_color;
use super::position::Positioned;

/// Placeholder label for new expenses
pub const DEFAULT_EXPENSE_LABEL: &str = "new_expense";

/// Placeholder category for new expenses
pub const DEFAULT_EXPENSE_CATEGORY: &str = "general";

/// A recurring monthly expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Display label
    pub label: String,

    /// Monthly amount (non-negative by convention)
    pub amount: Money,

    /// Free-form category
    #[serde(default = "default_category")]
    pub category: String,

    /// Palette color
    #[serde(default)]
    pub color: String,

    /// Manual ordering key
    pub position: i64,
}

fn default_category() -> String {
    DEFAULT_EXPENSE_CATEGORY.to_string()
}

impl Expense {
    /// Create a placeholder expense at the given position
    pub fn new(position: i64) -> Self {
        Self {
            id: ExpenseId::new(),
            label: DEFAULT_EXPENSE_LABEL.to_string(),
            amount: Money::zero(),
            category: default_category(),
            color: random_color(),
            position,
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.label.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyLabel);
        }

        if !self.amount.amount().is_finite() {
            return Err(ExpenseValidationError::InvalidAmount);
        }

        Ok(())
    }
}

impl Positioned for Expense {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }

    fn position(&self) -> i64 {
        self.position
    }

    fn set_position(&mut self, position: i64) {
        self.position = position;
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyLabel,
    InvalidAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "Expense label cannot be empty"),
            Self::InvalidAmount => write!(f, "Expense amount must be a finite number"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

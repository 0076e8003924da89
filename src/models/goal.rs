//! Savings goal model
//!
//! Goals live in the active list until they are completed, at which point
//! they are moved to the completed list with a completion timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;
use super::palette::random_color;
use super::position::Positioned;

/// Placeholder label for new goals
pub const DEFAULT_GOAL_LABEL: &str = "new_goal";

/// A savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Display label
    pub label: String,

    /// Amount to reach
    pub target_amount: Money,

    /// Amount saved so far
    pub current_amount: Money,

    /// Palette color
    #[serde(default)]
    pub color: String,

    /// Free-form notes
    #[serde(default)]
    pub description: String,

    /// Manual ordering key
    pub position: i64,

    /// When the goal was completed (only set on completed goals)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
}

impl Goal {
    /// Create a placeholder goal at the given position
    pub fn new(position: i64) -> Self {
        Self {
            id: GoalId::new(),
            label: DEFAULT_GOAL_LABEL.to_string(),
            target_amount: Money::zero(),
            current_amount: Money::zero(),
            color: random_color(),
            description: String::new(),
            position,
            completed_date: None,
        }
    }

    /// Amount still missing (negative once the goal is overfunded)
    pub fn remaining(&self) -> Money {
        self.target_amount - self.current_amount
    }

    /// Whether the goal has been completed
    pub fn is_completed(&self) -> bool {
        self.completed_date.is_some()
    }

    /// Copy of this goal stamped as completed at `at`
    pub fn completed_at(&self, at: DateTime<Utc>) -> Self {
        Self {
            completed_date: Some(at),
            ..self.clone()
        }
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.label.trim().is_empty() {
            return Err(GoalValidationError::EmptyLabel);
        }

        if !self.target_amount.amount().is_finite() || !self.current_amount.amount().is_finite() {
            return Err(GoalValidationError::InvalidAmount);
        }

        Ok(())
    }
}

impl Positioned for Goal {
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

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} / {})",
            self.label, self.current_amount, self.target_amount
        )
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyLabel,
    InvalidAmount,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "Goal label cannot be empty"),
            Self::InvalidAmount => write!(f, "Goal amounts must be finite numbers"),
        }
    }
}

impl std::error::Error for GoalValidationError {}

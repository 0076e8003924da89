//! Goal service
//!
//! Manages active savings goals and moves them to the completed list.

use chrono::Utc;

use crate::audit::{EntityType, Operation};
use crate::error::{BudgetError, BudgetResult};
use crate::models::palette::resolve_color;
use crate::models::{Goal, ListKind, Money};
use crate::storage::{BudgetStore, KeyValueStore};

use super::lookup::resolve;

/// Field changes for a goal; `None` leaves a field as it is
#[derive(Debug, Clone, Default)]
pub struct GoalDraft {
    pub label: Option<String>,
    pub target_amount: Option<Money>,
    pub current_amount: Option<Money>,
    pub color: Option<String>,
    pub description: Option<String>,
}

impl GoalDraft {
    /// Whether the draft changes nothing
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.target_amount.is_none()
            && self.current_amount.is_none()
            && self.color.is_none()
            && self.description.is_none()
    }

    /// Copy of `goal` with the draft applied
    pub fn apply_to(&self, goal: &Goal) -> BudgetResult<Goal> {
        let mut next = goal.clone();

        if let Some(label) = &self.label {
            next.label = label.trim().to_string();
        }
        if let Some(target) = self.target_amount {
            next.target_amount = target;
        }
        if let Some(current) = self.current_amount {
            next.current_amount = current;
        }
        if let Some(color) = &self.color {
            next.color = resolve_color(color).ok_or_else(|| {
                BudgetError::Validation(format!("'{}' is not a palette color", color))
            })?;
        }
        if let Some(description) = &self.description {
            next.description = description.clone();
        }

        next.validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;
        Ok(next)
    }
}

/// Service for goal management
pub struct GoalService<'a, S: KeyValueStore> {
    store: &'a mut BudgetStore<S>,
}

impl<'a, S: KeyValueStore> GoalService<'a, S> {
    /// Create a new goal service
    pub fn new(store: &'a mut BudgetStore<S>) -> Self {
        Self { store }
    }

    /// Active goals in display order
    pub fn list(&self) -> Vec<Goal> {
        self.store.document().goals_sorted()
    }

    /// Completed goals, in completion order
    pub fn completed(&self) -> Vec<Goal> {
        self.store.document().completed_goals.clone()
    }

    /// Find an active goal by id, label or id prefix
    pub fn find(&self, identifier: &str) -> BudgetResult<Goal> {
        resolve(&self.store.document().goals, identifier, "Goal").cloned()
    }

    /// Find a completed goal by id, label or id prefix
    pub fn find_completed(&self, identifier: &str) -> BudgetResult<Goal> {
        resolve(&self.store.document().completed_goals, identifier, "Goal").cloned()
    }

    /// Append a placeholder goal
    pub fn add(&mut self) -> BudgetResult<Goal> {
        self.add_with(&GoalDraft::default())
    }

    /// Append a goal, starting from the placeholder values
    pub fn add_with(&mut self, draft: &GoalDraft) -> BudgetResult<Goal> {
        let goal = draft.apply_to(&Goal::new(0))?;
        let id = goal.id.clone();

        let doc = self.store.update(|doc| doc.with_goal_added(goal))?;
        let created = doc
            .goal(id.as_str())
            .cloned()
            .ok_or_else(|| BudgetError::goal_not_found(id.as_str()))?;

        self.store.log_create(
            EntityType::Goal,
            created.id.to_string(),
            Some(created.label.clone()),
            &created,
        );

        Ok(created)
    }

    /// Replace the active goal with the same id
    pub fn update(&mut self, goal: Goal) -> BudgetResult<Goal> {
        goal.validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let before = self
            .store
            .document()
            .goal(goal.id.as_str())
            .cloned()
            .ok_or_else(|| BudgetError::goal_not_found(goal.id.as_str()))?;

        self.store.update(|doc| doc.with_goal_updated(goal.clone()))?;

        self.store.log_update(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.label.clone()),
            &before,
            &goal,
        );

        Ok(goal)
    }

    /// Apply a draft to the active goal `identifier` refers to
    pub fn edit(&mut self, identifier: &str, draft: &GoalDraft) -> BudgetResult<Goal> {
        let current = self.find(identifier)?;
        let next = draft.apply_to(&current)?;
        self.update(next)
    }

    /// Delete an active goal by exact id
    ///
    /// Unknown ids leave the list unchanged and return `None`.
    pub fn delete(&mut self, id: &str) -> BudgetResult<Option<Goal>> {
        let removed = self.store.document().goal(id).cloned();

        self.store.update(|doc| doc.with_goal_deleted(id))?;

        if let Some(goal) = &removed {
            self.store.log_delete(
                EntityType::Goal,
                goal.id.to_string(),
                Some(goal.label.clone()),
                goal,
            );
        }

        Ok(removed)
    }

    /// Move a goal to `target_index` in display order
    pub fn move_to(&mut self, id: &str, target_index: usize) -> BudgetResult<Vec<Goal>> {
        let label = self.store.document().goal(id).map(|g| g.label.clone());

        let doc = self
            .store
            .update(|doc| doc.with_reordered(ListKind::Goals, id, target_index))?;
        let ordered = doc.goals_sorted();

        if label.is_some() {
            self.store.log_event(
                Operation::Reorder,
                EntityType::Goal,
                id,
                label,
                format!("moved to index {}", target_index),
            );
        }

        Ok(ordered)
    }

    /// Move an active goal to the completed list, stamped with the current time
    pub fn complete(&mut self, id: &str) -> BudgetResult<Goal> {
        if self.store.document().goal(id).is_none() {
            return Err(BudgetError::goal_not_found(id));
        }

        let now = Utc::now();
        let doc = self.store.update(|doc| doc.with_goal_completed(id, now))?;
        let completed = doc
            .completed_goal(id)
            .cloned()
            .ok_or_else(|| BudgetError::goal_not_found(id))?;

        self.store.log_event(
            Operation::Complete,
            EntityType::Goal,
            id,
            Some(completed.label.clone()),
            "moved to completed goals",
        );

        Ok(completed)
    }
}

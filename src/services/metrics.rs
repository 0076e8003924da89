//! Derived budget metrics
//!
//! Everything here is a pure function of the document and is recomputed on
//! every render; nothing is cached or persisted.

use crate::models::{BudgetDocument, Expense, Goal, Money};

/// Progress towards a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    /// Unclamped percentage (`current / target * 100`, or 0 without a target)
    pub percent: f64,
}

impl GoalProgress {
    /// Progress of `current` towards `target`
    pub fn of(current: Money, target: Money) -> Self {
        let percent = if target.amount() > 0.0 {
            current.amount() / target.amount() * 100.0
        } else {
            0.0
        };
        Self { percent }
    }

    /// Progress of a single goal
    pub fn for_goal(goal: &Goal) -> Self {
        Self::of(goal.current_amount, goal.target_amount)
    }

    /// Width of a progress bar, clamped to `0..=100`
    pub fn bar_percent(&self) -> f64 {
        self.percent.clamp(0.0, 100.0)
    }

    /// Bar width as a `0.0..=1.0` ratio
    pub fn ratio(&self) -> f64 {
        self.bar_percent() / 100.0
    }

    /// Rounded percentage label; not clamped, so overfunded goals show e.g. `150%`
    pub fn label(&self) -> String {
        // Round half up
        format!("{}%", (self.percent + 0.5).floor() as i64)
    }
}

/// An expense and its share of total monthly expenses
#[derive(Debug, Clone)]
pub struct ExpenseShare {
    pub expense: Expense,
    /// Percentage of total expenses (0 when the total is not positive)
    pub percent: f64,
}

/// All derived figures for one document
#[derive(Debug, Clone)]
pub struct BudgetSummary {
    /// Monthly income after applying the income type
    pub monthly_income: Money,
    pub total_monthly_expenses: Money,
    pub quarterly_expenses: Money,
    pub annual_expenses: Money,
    /// Income minus expenses; negative when over budget
    pub monthly_free: Money,
    pub total_goal_target: Money,
    pub total_goal_current: Money,
    pub goal_progress: GoalProgress,
    pub total_completed_goal_cost: Money,
    pub active_goal_count: usize,
    pub completed_goal_count: usize,
}

impl BudgetSummary {
    /// Compute every metric for `doc`
    pub fn from_document(doc: &BudgetDocument) -> Self {
        let total_monthly_expenses = total_monthly_expenses(doc);
        let monthly_income = doc.effective_monthly_income();
        let total_goal_target: Money = doc.goals.iter().map(|g| g.target_amount).sum();
        let total_goal_current: Money = doc.goals.iter().map(|g| g.current_amount).sum();

        Self {
            monthly_income,
            total_monthly_expenses,
            quarterly_expenses: total_monthly_expenses * 3.0,
            annual_expenses: total_monthly_expenses * 12.0,
            monthly_free: monthly_income - total_monthly_expenses,
            total_goal_target,
            total_goal_current,
            goal_progress: GoalProgress::of(total_goal_current, total_goal_target),
            total_completed_goal_cost: total_completed_goal_cost(doc),
            active_goal_count: doc.goals.len(),
            completed_goal_count: doc.completed_goals.len(),
        }
    }

    /// Whether expenses exceed income
    pub fn is_over_budget(&self) -> bool {
        self.monthly_free.is_negative()
    }
}

/// Sum of all expense amounts
pub fn total_monthly_expenses(doc: &BudgetDocument) -> Money {
    doc.expenses.iter().map(|e| e.amount).sum()
}

/// Sum of the targets of all completed goals
pub fn total_completed_goal_cost(doc: &BudgetDocument) -> Money {
    doc.completed_goals.iter().map(|g| g.target_amount).sum()
}

/// Each expense with its share of the total, in display order
pub fn expense_shares(doc: &BudgetDocument) -> Vec<ExpenseShare> {
    let total = total_monthly_expenses(doc).amount();
    doc.expenses_sorted()
        .into_iter()
        .map(|expense| {
            let percent = if total > 0.0 {
                expense.amount.amount() / total * 100.0
            } else {
                0.0
            };
            ExpenseShare { expense, percent }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IncomeType;

    fn expense(label: &str, amount: f64) -> Expense {
        Expense {
            label: label.into(),
            amount: Money::new(amount),
            ..Expense::new(0)
        }
    }

    fn goal(target: f64, current: f64) -> Goal {
        Goal {
            target_amount: Money::new(target),
            current_amount: Money::new(current),
            ..Goal::new(0)
        }
    }

    #[test]
    fn test_income_and_expense_totals() {
        let doc = BudgetDocument::empty()
            .with_monthly_income(Money::new(5000.0))
            .with_expense_added(expense("rent", 1200.0))
            .with_expense_added(expense("food", 300.0));

        let summary = BudgetSummary::from_document(&doc);
        assert_eq!(summary.total_monthly_expenses, Money::new(1500.0));
        assert_eq!(summary.quarterly_expenses, Money::new(4500.0));
        assert_eq!(summary.annual_expenses, Money::new(18000.0));
        assert_eq!(summary.monthly_free, Money::new(3500.0));
        assert!(!summary.is_over_budget());
    }

    #[test]
    fn test_monthly_free_can_be_negative() {
        let doc = BudgetDocument::empty()
            .with_monthly_income(Money::new(100.0))
            .with_expense_added(expense("rent", 1200.0));

        let summary = BudgetSummary::from_document(&doc);
        assert_eq!(summary.monthly_free, Money::new(-1100.0));
        assert!(summary.is_over_budget());
    }

    #[test]
    fn test_bimonthly_income_is_doubled() {
        let doc = BudgetDocument::empty()
            .with_monthly_income(Money::new(9999.0))
            .with_bi_monthly_income(Money::new(2000.0))
            .with_income_type(IncomeType::Bimonthly);

        let summary = BudgetSummary::from_document(&doc);
        assert_eq!(summary.monthly_income, Money::new(4000.0));
        assert_eq!(summary.monthly_free, Money::new(4000.0));
    }

    #[test]
    fn test_goal_progress() {
        let progress = GoalProgress::for_goal(&goal(1000.0, 250.0));
        assert_eq!(progress.percent, 25.0);
        assert_eq!(progress.label(), "25%");
        assert_eq!(progress.bar_percent(), 25.0);
    }

    #[test]
    fn test_zero_target_progress() {
        let progress = GoalProgress::for_goal(&goal(0.0, 50.0));
        assert_eq!(progress.percent, 0.0);
        assert_eq!(progress.label(), "0%");
    }

    #[test]
    fn test_overfunded_goal_label_is_not_clamped() {
        let progress = GoalProgress::for_goal(&goal(100.0, 150.0));
        assert_eq!(progress.label(), "150%");
        assert_eq!(progress.bar_percent(), 100.0);
        assert_eq!(progress.ratio(), 1.0);
    }

    #[test]
    fn test_negative_progress_bar_is_clamped() {
        let progress = GoalProgress::for_goal(&goal(100.0, -20.0));
        assert_eq!(progress.bar_percent(), 0.0);
        assert_eq!(progress.label(), "-20%");
    }

    #[test]
    fn test_label_rounds_half_up() {
        assert_eq!(GoalProgress::of(Money::new(1.0), Money::new(8.0)).label(), "13%");
        assert_eq!(GoalProgress::of(Money::new(1.0), Money::new(3.0)).label(), "33%");
    }

    #[test]
    fn test_aggregate_goal_progress_and_completed_cost() {
        let doc = BudgetDocument::empty()
            .with_goal_added(goal(1000.0, 500.0))
            .with_goal_added(goal(1000.0, 0.0));
        let done = doc.goals[1].id.clone();
        let doc = doc
            .with_goal_added(goal(400.0, 400.0))
            .with_goal_completed(done.as_str(), chrono::Utc::now());

        let summary = BudgetSummary::from_document(&doc);
        assert_eq!(summary.total_goal_target, Money::new(1400.0));
        assert_eq!(summary.total_goal_current, Money::new(900.0));
        assert_eq!(summary.goal_progress.label(), "64%");
        assert_eq!(summary.total_completed_goal_cost, Money::new(1000.0));
        assert_eq!(summary.active_goal_count, 2);
        assert_eq!(summary.completed_goal_count, 1);
    }

    #[test]
    fn test_expense_shares() {
        let doc = BudgetDocument::empty()
            .with_expense_added(expense("rent", 750.0))
            .with_expense_added(expense("food", 250.0));

        let shares = expense_shares(&doc);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].expense.label, "rent");
        assert_eq!(shares[0].percent, 75.0);
        assert_eq!(shares[1].percent, 25.0);
    }

    #[test]
    fn test_empty_document() {
        let summary = BudgetSummary::from_document(&BudgetDocument::empty());
        assert!(summary.total_monthly_expenses.is_zero());
        assert_eq!(summary.goal_progress.label(), "0%");
        assert!(expense_shares(&BudgetDocument::empty()).is_empty());
    }
}

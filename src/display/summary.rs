//! Budget summary display formatting

use crate::services::income::IncomeView;
use crate::services::metrics::{BudgetSummary, GoalProgress};

/// Text progress bar, e.g. `[#####.....]`
pub fn progress_bar(progress: &GoalProgress, width: usize) -> String {
    let filled = (progress.ratio() * width as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled.min(width)),
        ".".repeat(width.saturating_sub(filled))
    )
}

/// Format the income section
pub fn format_income(view: &IncomeView, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Income type:        {}\n", view.income_type));
    output.push_str(&format!(
        "Monthly income:     {}\n",
        view.monthly_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Bi-monthly income:  {}\n",
        view.bi_monthly_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Monthly total:      {}\n",
        view.effective_monthly_income.format_with_symbol(symbol)
    ));
    output
}

/// Format all derived metrics
pub fn format_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("FINANCIAL_STATUS\n");
    output.push_str(&format!(
        "  Monthly income:      {:>14}\n",
        summary.monthly_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Monthly expenses:    {:>14}\n",
        summary.total_monthly_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Monthly free:        {:>14}{}\n",
        summary.monthly_free.format_with_symbol(symbol),
        if summary.is_over_budget() { "  (over budget)" } else { "" }
    ));
    output.push_str(&format!(
        "  Quarterly expenses:  {:>14}\n",
        summary.quarterly_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Annual expenses:     {:>14}\n",
        summary.annual_expenses.format_with_symbol(symbol)
    ));

    output.push_str("\nGOAL_SUMMARY\n");
    output.push_str(&format!(
        "  Active goals:        {:>14}\n",
        summary.active_goal_count
    ));
    output.push_str(&format!(
        "  Target total:        {:>14}\n",
        summary.total_goal_target.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Current total:       {:>14}\n",
        summary.total_goal_current.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Progress:            {} {}\n",
        progress_bar(&summary.goal_progress, 20),
        summary.goal_progress.label()
    ));
    output.push_str(&format!(
        "  Completed goals:     {:>14}\n",
        summary.completed_goal_count
    ));
    output.push_str(&format!(
        "  Completed cost:      {:>14}\n",
        summary.total_completed_goal_cost.format_with_symbol(symbol)
    ));

    output
}

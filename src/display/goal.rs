//! Goal display formatting

use crate::models::Goal;
use crate::services::metrics::GoalProgress;

use super::summary::progress_bar;

/// Format active goals with progress bars
pub fn format_goal_list(goals: &[Goal], symbol: &str) -> String {
    if goals.is_empty() {
        return "No goals found.".to_string();
    }

    let label_width = label_width(goals);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<8}  {:<label_width$}  {:>12}  {:>12}  {:<12}  {:>5}\n",
        "#",
        "ID",
        "Label",
        "Current",
        "Target",
        "Progress",
        "",
        label_width = label_width,
    ));
    output.push_str(&format!(
        "{:-<3}  {:-<8}  {:-<label_width$}  {:->12}  {:->12}  {:-<12}  {:->5}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        label_width = label_width,
    ));

    for (index, goal) in goals.iter().enumerate() {
        let progress = GoalProgress::for_goal(goal);
        output.push_str(&format!(
            "{:>3}  {:<8}  {:<label_width$}  {:>12}  {:>12}  {:<12}  {:>5}\n",
            index,
            goal.id.short(),
            goal.label,
            goal.current_amount.format_with_symbol(symbol),
            goal.target_amount.format_with_symbol(symbol),
            progress_bar(&progress, 10),
            progress.label(),
            label_width = label_width,
        ));
    }

    output
}

/// Format completed goals with their completion dates
pub fn format_completed_goals(goals: &[Goal], symbol: &str) -> String {
    if goals.is_empty() {
        return "No completed goals.".to_string();
    }

    let label_width = label_width(goals);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8}  {:<label_width$}  {:>12}  {}\n",
        "ID",
        "Label",
        "Cost",
        "Completed",
        label_width = label_width,
    ));

    for goal in goals {
        let completed = goal
            .completed_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "{:<8}  {:<label_width$}  {:>12}  {}\n",
            goal.id.short(),
            goal.label,
            goal.target_amount.format_with_symbol(symbol),
            completed,
            label_width = label_width,
        ));
    }

    output
}

/// Format a single goal's details
pub fn format_goal_details(goal: &Goal, symbol: &str) -> String {
    let progress = GoalProgress::for_goal(goal);

    let mut output = String::new();
    output.push_str(&format!("Goal: {}\n", goal.label));
    output.push_str(&format!("  ID:         {}\n", goal.id));
    output.push_str(&format!(
        "  Target:     {}\n",
        goal.target_amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Current:    {}\n",
        goal.current_amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Remaining:  {}\n",
        goal.remaining().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Progress:   {} {}\n",
        progress_bar(&progress, 20),
        progress.label()
    ));
    output.push_str(&format!("  Color:      {}\n", goal.color));
    if !goal.description.is_empty() {
        output.push_str(&format!("  Notes:      {}\n", goal.description));
    }
    if let Some(date) = goal.completed_date {
        output.push_str(&format!(
            "  Completed:  {}\n",
            date.format("%Y-%m-%d %H:%M UTC")
        ));
    }
    output
}

fn label_width(goals: &[Goal]) -> usize {
    goals
        .iter()
        .map(|g| g.label.chars().count())
        .max()
        .unwrap_or(5)
        .max(5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::{TimeZone, Utc};

    fn goal(label: &str, target: f64, current: f64) -> Goal {
        Goal {
            label: label.into(),
            target_amount: Money::new(target),
            current_amount: Money::new(current),
            ..Goal::new(0)
        }
    }

    #[test]
    fn test_goal_list_shows_progress() {
        let text = format_goal_list(&[goal("car", 1000.0, 250.0)], "$");
        assert!(text.contains("car"));
        assert!(text.contains("25%"));
        assert!(text.contains("[###.......]"));
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_goal_list(&[], "$"), "No goals found.");
        assert_eq!(format_completed_goals(&[], "$"), "No completed goals.");
    }

    #[test]
    fn test_completed_goals_show_date() {
        let done = goal("laptop", 1500.0, 1500.0)
            .completed_at(Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap());
        let text = format_completed_goals(&[done], "$");
        assert!(text.contains("2025-03-14"));
        assert!(text.contains("$1,500.00"));
    }

    #[test]
    fn test_details_include_remaining() {
        let text = format_goal_details(&goal("trip", 800.0, 1000.0), "$");
        assert!(text.contains("Remaining:  -$200.00"));
        assert!(text.contains("125%"));
    }
}

//! Expense display formatting
//!
//! Formats expenses for terminal output in table and detail views.

use crate::models::{Expense, Money};
use crate::services::metrics::ExpenseShare;

/// Format expenses with their share of the total as a table
pub fn format_expense_list(shares: &[ExpenseShare], symbol: &str) -> String {
    if shares.is_empty() {
        return "No expenses found.".to_string();
    }

    let label_width = shares
        .iter()
        .map(|s| s.expense.label.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let category_width = shares
        .iter()
        .map(|s| s.expense.category.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<8}  {:<label_width$}  {:<category_width$}  {:>12}  {:>6}  {}\n",
        "#",
        "ID",
        "Label",
        "Category",
        "Amount",
        "Share",
        "Color",
        label_width = label_width,
        category_width = category_width,
    ));
    output.push_str(&separator(label_width, category_width));

    for (index, share) in shares.iter().enumerate() {
        let expense = &share.expense;
        output.push_str(&format!(
            "{:>3}  {:<8}  {:<label_width$}  {:<category_width$}  {:>12}  {:>5.1}%  {}\n",
            index,
            expense.id.short(),
            expense.label,
            expense.category,
            expense.amount.format_with_symbol(symbol),
            share.percent,
            expense.color,
            label_width = label_width,
            category_width = category_width,
        ));
    }

    let total: Money = shares.iter().map(|s| s.expense.amount).sum();
    output.push_str(&separator(label_width, category_width));
    output.push_str(&format!(
        "{:>3}  {:<8}  {:<label_width$}  {:<category_width$}  {:>12}\n",
        "",
        "",
        "TOTAL",
        "",
        total.format_with_symbol(symbol),
        label_width = label_width,
        category_width = category_width,
    ));

    output
}

fn separator(label_width: usize, category_width: usize) -> String {
    format!(
        "{:-<3}  {:-<8}  {:-<label_width$}  {:-<category_width$}  {:->12}  {:->6}  {:-<7}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        label_width = label_width,
        category_width = category_width,
    )
}

/// Format a single expense's details
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense: {}\n", expense.label));
    output.push_str(&format!("  ID:        {}\n", expense.id));
    output.push_str(&format!(
        "  Amount:    {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Category:  {}\n", expense.category));
    output.push_str(&format!("  Color:     {}\n", expense.color));
    output.push_str(&format!("  Position:  {}\n", expense.position));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetDocument;
    use crate::services::metrics::expense_shares;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_expense_list(&[], "$"), "No expenses found.");
    }

    #[test]
    fn test_list_shows_rows_and_total() {
        let doc = BudgetDocument::empty()
            .with_expense_added(Expense {
                label: "rent".into(),
                amount: Money::new(1200.0),
                ..Expense::new(0)
            })
            .with_expense_added(Expense {
                label: "food".into(),
                amount: Money::new(300.0),
                ..Expense::new(0)
            });

        let text = format_expense_list(&expense_shares(&doc), "$");
        assert!(text.contains("rent"));
        assert!(text.contains("$1,200.00"));
        assert!(text.contains("80.0%"));
        assert!(text.contains("TOTAL"));
        assert!(text.contains("$1,500.00"));
    }

    #[test]
    fn test_details() {
        let expense = Expense {
            label: "gym".into(),
            amount: Money::new(40.0),
            ..Expense::new(3)
        };
        let text = format_expense_details(&expense, "€");
        assert!(text.contains("Expense: gym"));
        assert!(text.contains("€40.00"));
        assert!(text.contains("Position:  3"));
    }
}

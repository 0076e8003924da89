//! Expense edit dialog
//!
//! Edits label, amount, category and color of one expense. New expenses
//! are created as placeholders first, so this dialog only ever edits.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::form_hints;
use crate::models::{Expense, Money};
use crate::services::ExpenseDraft;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Label,
    Amount,
    Category,
    Color,
}

impl ExpenseField {
    /// Next field (Tab)
    pub fn next(self) -> Self {
        match self {
            Self::Label => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Color,
            Self::Color => Self::Label,
        }
    }

    /// Previous field (Shift+Tab)
    pub fn prev(self) -> Self {
        match self {
            Self::Label => Self::Color,
            Self::Amount => Self::Label,
            Self::Category => Self::Amount,
            Self::Color => Self::Category,
        }
    }
}

/// State for the expense form dialog
#[derive(Debug, Clone, Default)]
pub struct ExpenseFormState {
    pub focused_field: ExpenseField,
    pub label_input: TextInput,
    pub amount_input: TextInput,
    pub category_input: TextInput,
    pub color_input: TextInput,
    /// Id of the expense being edited
    pub editing_id: Option<String>,
    pub error_message: Option<String>,
    /// Amount and color text as loaded; unchanged fields are not re-sent
    loaded_amount: String,
    loaded_color: String,
}

impl ExpenseFormState {
    /// Form pre-populated from an existing expense
    pub fn from_expense(expense: &Expense) -> Self {
        let amount = expense.amount.amount().to_string();
        Self {
            focused_field: ExpenseField::Label,
            label_input: TextInput::new().label("Label").content(&expense.label),
            amount_input: TextInput::new()
                .label("Amount")
                .placeholder("0.00")
                .content(&amount),
            category_input: TextInput::new()
                .label("Category")
                .placeholder("general")
                .content(&expense.category),
            color_input: TextInput::new()
                .label("Color")
                .placeholder("palette hex or index")
                .content(&expense.color),
            editing_id: Some(expense.id.as_str().to_string()),
            error_message: None,
            loaded_amount: amount,
            loaded_color: expense.color.clone(),
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// The text input that receives typed characters
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            ExpenseField::Label => &mut self.label_input,
            ExpenseField::Amount => &mut self.amount_input,
            ExpenseField::Category => &mut self.category_input,
            ExpenseField::Color => &mut self.color_input,
        }
    }

    /// Convert the form into a draft
    ///
    /// Amount and color are only set when their text was edited, so a
    /// stored value the form cannot reproduce is kept as is. Record-level
    /// rules (empty label, negative amount) are left to `Expense::validate`
    /// through the service.
    pub fn to_draft(&self) -> Result<ExpenseDraft, String> {
        Ok(ExpenseDraft {
            label: Some(self.label_input.value().trim().to_string()),
            amount: edited_amount("amount", &self.amount_input, &self.loaded_amount)?,
            category: Some(self.category_input.value().trim().to_string()),
            color: edited_text(&self.color_input, &self.loaded_color),
        })
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Parsed amount, or `None` when the text still matches `loaded`
pub(crate) fn edited_amount(
    name: &str,
    input: &TextInput,
    loaded: &str,
) -> Result<Option<Money>, String> {
    let value = input.value().trim();
    if value == loaded {
        return Ok(None);
    }
    if value.is_empty() {
        return Ok(Some(Money::zero()));
    }
    Money::parse(value)
        .map(Some)
        .map_err(|e| format!("Invalid {}: {}", name, e))
}

/// Trimmed text, or `None` when it still matches `loaded`
pub(crate) fn edited_text(input: &TextInput, loaded: &str) -> Option<String> {
    let value = input.value().trim();
    (value != loaded).then(|| value.to_string())
}

/// Render the expense dialog
pub fn render(frame: &mut Frame, form: &ExpenseFormState) {
    let area = centered_rect_fixed(56, 11, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Edit Expense ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Label
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Color
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let fields = [
        (&form.label_input, ExpenseField::Label),
        (&form.amount_input, ExpenseField::Amount),
        (&form.category_input, ExpenseField::Category),
        (&form.color_input, ExpenseField::Color),
    ];
    for (row, (input, field)) in fields.into_iter().enumerate() {
        frame.render_widget(input.widget(form.focused_field == field), chunks[row]);
    }

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[5],
        );
    }

    frame.render_widget(Paragraph::new(form_hints()), chunks[6]);
}

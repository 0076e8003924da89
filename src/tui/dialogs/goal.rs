//! Goal edit dialog

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::expense::{edited_amount, edited_text};
use super::form_hints;
use crate::models::Goal;
use crate::services::GoalDraft;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the goal form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalField {
    #[default]
    Label,
    Target,
    Current,
    Color,
    Description,
}

impl GoalField {
    const ORDER: [GoalField; 5] = [
        GoalField::Label,
        GoalField::Target,
        GoalField::Current,
        GoalField::Color,
        GoalField::Description,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// State for the goal form dialog
#[derive(Debug, Clone, Default)]
pub struct GoalFormState {
    pub focused_field: GoalField,
    pub label_input: TextInput,
    pub target_input: TextInput,
    pub current_input: TextInput,
    pub color_input: TextInput,
    pub description_input: TextInput,
    pub editing_id: Option<String>,
    pub error_message: Option<String>,
    loaded_target: String,
    loaded_current: String,
    loaded_color: String,
}

impl GoalFormState {
    /// Form pre-populated from an existing goal
    pub fn from_goal(goal: &Goal) -> Self {
        let target = goal.target_amount.amount().to_string();
        let current = goal.current_amount.amount().to_string();
        Self {
            focused_field: GoalField::Label,
            label_input: TextInput::new().label("Label").content(&goal.label),
            target_input: TextInput::new()
                .label("Target")
                .placeholder("0.00")
                .content(&target),
            current_input: TextInput::new()
                .label("Saved")
                .placeholder("0.00")
                .content(&current),
            color_input: TextInput::new()
                .label("Color")
                .placeholder("palette hex or index")
                .content(&goal.color),
            description_input: TextInput::new()
                .label("Notes")
                .placeholder("optional")
                .content(&goal.description),
            editing_id: Some(goal.id.as_str().to_string()),
            error_message: None,
            loaded_target: target,
            loaded_current: current,
            loaded_color: goal.color.clone(),
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            GoalField::Label => &mut self.label_input,
            GoalField::Target => &mut self.target_input,
            GoalField::Current => &mut self.current_input,
            GoalField::Color => &mut self.color_input,
            GoalField::Description => &mut self.description_input,
        }
    }

    /// Convert the form into a draft; untouched amounts and color stay unset
    pub fn to_draft(&self) -> Result<GoalDraft, String> {
        Ok(GoalDraft {
            label: Some(self.label_input.value().trim().to_string()),
            target_amount: edited_amount("target", &self.target_input, &self.loaded_target)?,
            current_amount: edited_amount(
                "saved amount",
                &self.current_input,
                &self.loaded_current,
            )?,
            color: edited_text(&self.color_input, &self.loaded_color),
            description: Some(self.description_input.value().to_string()),
        })
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the goal dialog
pub fn render(frame: &mut Frame, form: &GoalFormState) {
    let area = centered_rect_fixed(56, 12, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Edit Goal ")
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
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let fields = [
        (&form.label_input, GoalField::Label),
        (&form.target_input, GoalField::Target),
        (&form.current_input, GoalField::Current),
        (&form.color_input, GoalField::Color),
        (&form.description_input, GoalField::Description),
    ];
    for (row, (input, field)) in fields.into_iter().enumerate() {
        frame.render_widget(input.widget(form.focused_field == field), chunks[row]);
    }

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[6],
        );
    }

    frame.render_widget(Paragraph::new(form_hints()), chunks[7]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_field_order_wraps() {
        assert_eq!(GoalField::Description.next(), GoalField::Label);
        assert_eq!(GoalField::Label.prev(), GoalField::Description);
        assert_eq!(GoalField::Target.next(), GoalField::Current);
    }

    #[test]
    fn test_to_draft_parses_amounts() {
        let mut goal = Goal::new(0);
        goal.label = "Car".into();
        goal.current_amount = Money::new(250.0);
        let mut form = GoalFormState::from_goal(&goal);
        form.target_input.set_value("1,000");
        form.current_input.set_value("");

        let draft = form.to_draft().unwrap();
        assert_eq!(draft.target_amount, Some(Money::new(1000.0)));
        assert_eq!(draft.current_amount, Some(Money::zero()));
        assert_eq!(draft.label.as_deref(), Some("Car"));
    }

    #[test]
    fn test_untouched_fields_keep_stored_values() {
        let mut goal = Goal::new(0);
        goal.target_amount = Money::new(999.999);
        goal.color = "#123456".into();
        let form = GoalFormState::from_goal(&goal);

        let draft = form.to_draft().unwrap();
        assert_eq!(draft.target_amount, None);
        assert_eq!(draft.current_amount, None);
        assert_eq!(draft.color, None);
    }

    #[test]
    fn test_invalid_target_is_reported() {
        let mut form = GoalFormState::from_goal(&Goal::new(0));
        form.target_input.set_value("lots");
        assert!(form.to_draft().unwrap_err().starts_with("Invalid target"));
    }
}

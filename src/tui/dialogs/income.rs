//! Income dialog
//!
//! Sets the amount for the active income type. `Tab` switches the type
//! before saving.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{IncomeType, Money};
use crate::services::IncomeView;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// State for the income dialog
#[derive(Debug, Clone, Default)]
pub struct IncomeFormState {
    pub income_type: IncomeType,
    pub amount_input: TextInput,
    pub error_message: Option<String>,
}

impl IncomeFormState {
    /// Form showing the stored amount for the active type
    pub fn from_view(view: &IncomeView) -> Self {
        let mut form = Self {
            income_type: view.income_type,
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            error_message: None,
        };
        form.load_amount(view);
        form
    }

    fn load_amount(&mut self, view: &IncomeView) {
        let amount = match self.income_type {
            IncomeType::Monthly => view.monthly_income,
            IncomeType::Bimonthly => view.bi_monthly_income,
        };
        self.amount_input.set_value(format!("{:.2}", amount.amount()));
    }

    /// Switch the type being edited and show its stored amount
    pub fn toggle_type(&mut self, view: &IncomeView) {
        self.income_type = match self.income_type {
            IncomeType::Monthly => IncomeType::Bimonthly,
            IncomeType::Bimonthly => IncomeType::Monthly,
        };
        self.load_amount(view);
        self.error_message = None;
    }

    pub fn amount(&self) -> Result<Money, String> {
        let value = self.amount_input.value().trim();
        if value.is_empty() {
            return Ok(Money::zero());
        }
        Money::parse(value).map_err(|e| format!("Invalid amount: {}", e))
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the income dialog
pub fn render(frame: &mut Frame, form: &IncomeFormState) {
    let area = centered_rect_fixed(50, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Income ")
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
            Constraint::Length(1), // Type
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let type_label = match form.income_type {
        IncomeType::Monthly => "monthly",
        IncomeType::Bimonthly => "bi-monthly (per pay period, x2)",
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Type: ", Style::default().fg(Color::Yellow)),
            Span::styled(type_label, Style::default().fg(Color::White)),
        ])),
        chunks[0],
    );

    frame.render_widget(form.amount_input.widget(true), chunks[1]);

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[3],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::White)),
        Span::raw(" Type  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> IncomeView {
        IncomeView {
            income_type: IncomeType::Monthly,
            monthly_income: Money::new(5000.0),
            bi_monthly_income: Money::new(2100.0),
            effective_monthly_income: Money::new(5000.0),
        }
    }

    #[test]
    fn test_toggle_loads_other_amount() {
        let view = view();
        let mut form = IncomeFormState::from_view(&view);
        assert_eq!(form.amount_input.value(), "5000.00");

        form.toggle_type(&view);
        assert_eq!(form.income_type, IncomeType::Bimonthly);
        assert_eq!(form.amount_input.value(), "2100.00");
    }

    #[test]
    fn test_amount_parsing() {
        let mut form = IncomeFormState::from_view(&view());
        form.amount_input.set_value("abc");
        assert!(form.amount().is_err());
        form.amount_input.set_value("");
        assert_eq!(form.amount().unwrap(), Money::zero());
    }
}

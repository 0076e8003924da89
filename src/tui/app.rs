//! Application state for the TUI
//!
//! The App owns the store for the lifetime of the dashboard, so every
//! edit goes through the same single writer as the CLI.

use chrono::{DateTime, Local};

use crate::config::settings::Settings;
use crate::models::{Expense, Goal};
use crate::services::metrics::{expense_shares, ExpenseShare};
use crate::services::network::FALLBACK_IP;
use crate::services::{BackgroundService, BudgetSummary};
use crate::storage::{BudgetStore, KeyValueStore};

use super::dialogs::{ExpenseFormState, GoalFormState, ImportFormState, IncomeFormState};

/// Shown in the header until the lookup answers
pub const IP_PENDING: &str = "resolving...";

/// Which list currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Expenses,
    Goals,
    Completed,
}

impl Panel {
    pub fn next(self) -> Self {
        match self {
            Self::Expenses => Self::Goals,
            Self::Goals => Self::Completed,
            Self::Completed => Self::Expenses,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Expenses => Self::Completed,
            Self::Goals => Self::Expenses,
            Self::Completed => Self::Goals,
        }
    }
}

/// A delete waiting for confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDelete {
    Expense { id: String, label: String },
    Goal { id: String, label: String },
}

impl PendingDelete {
    /// Question shown in the confirm dialog
    pub fn message(&self) -> String {
        match self {
            Self::Expense { label, .. } => format!("Delete expense '{}'?", label),
            Self::Goal { label, .. } => format!("Delete goal '{}'?", label),
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Confirm(PendingDelete),
    Expense,
    Goal,
    Income,
    Import,
}

/// Main application state
pub struct App<'a, S: KeyValueStore> {
    /// The budget store
    pub store: BudgetStore<S>,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which list is focused
    pub focused_panel: Panel,

    pub expense_index: usize,
    pub goal_index: usize,
    pub completed_index: usize,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status_message: Option<String>,

    /// Clock shown in the header, advanced on every tick
    pub now: DateTime<Local>,

    /// Public address shown in the header
    pub public_ip: String,

    /// Stored background reference, if any
    pub background: Option<String>,

    pub expense_form: ExpenseFormState,
    pub goal_form: GoalFormState,
    pub income_form: IncomeFormState,
    pub import_form: ImportFormState,
}

impl<'a, S: KeyValueStore> App<'a, S> {
    /// Create a new App around an opened store
    pub fn new(mut store: BudgetStore<S>, settings: &'a Settings) -> Self {
        let background = BackgroundService::new(&mut store).get().ok().flatten();
        let public_ip = if settings.ip_lookup.enabled {
            IP_PENDING
        } else {
            FALLBACK_IP
        };

        Self {
            store,
            settings,
            should_quit: false,
            focused_panel: Panel::default(),
            expense_index: 0,
            goal_index: 0,
            completed_index: 0,
            active_dialog: ActiveDialog::default(),
            status_message: None,
            now: Local::now(),
            public_ip: public_ip.to_string(),
            background,
            expense_form: ExpenseFormState::default(),
            goal_form: GoalFormState::default(),
            income_form: IncomeFormState::default(),
            import_form: ImportFormState::default(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Metrics for the current document
    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::from_document(self.store.document())
    }

    /// Expenses in display order with their share of the total
    pub fn expenses(&self) -> Vec<ExpenseShare> {
        expense_shares(self.store.document())
    }

    /// Active goals in display order
    pub fn goals(&self) -> Vec<Goal> {
        self.store.document().goals_sorted()
    }

    /// Completed goals in completion order
    pub fn completed(&self) -> &[Goal] {
        &self.store.document().completed_goals
    }

    fn panel_len(&self, panel: Panel) -> usize {
        let doc = self.store.document();
        match panel {
            Panel::Expenses => doc.expenses.len(),
            Panel::Goals => doc.goals.len(),
            Panel::Completed => doc.completed_goals.len(),
        }
    }

    fn index_mut(&mut self, panel: Panel) -> &mut usize {
        match panel {
            Panel::Expenses => &mut self.expense_index,
            Panel::Goals => &mut self.goal_index,
            Panel::Completed => &mut self.completed_index,
        }
    }

    /// Selected row of the focused list
    pub fn selected_index(&self) -> usize {
        match self.focused_panel {
            Panel::Expenses => self.expense_index,
            Panel::Goals => self.goal_index,
            Panel::Completed => self.completed_index,
        }
    }

    /// Point the focused list's selection at `index`, clamped
    pub fn select(&mut self, index: usize) {
        let panel = self.focused_panel;
        let max = self.panel_len(panel).saturating_sub(1);
        *self.index_mut(panel) = index.min(max);
    }

    pub fn move_up(&mut self) {
        let index = self.selected_index().saturating_sub(1);
        self.select(index);
    }

    pub fn move_down(&mut self) {
        let index = self.selected_index() + 1;
        self.select(index);
    }

    pub fn next_panel(&mut self) {
        self.focused_panel = self.focused_panel.next();
    }

    pub fn prev_panel(&mut self) {
        self.focused_panel = self.focused_panel.prev();
    }

    /// Keep every selection inside its list after the document changed
    pub fn clamp_selections(&mut self) {
        for panel in [Panel::Expenses, Panel::Goals, Panel::Completed] {
            let max = self.panel_len(panel).saturating_sub(1);
            let index = self.index_mut(panel);
            *index = (*index).min(max);
        }
    }

    pub fn selected_expense(&self) -> Option<Expense> {
        self.store
            .document()
            .expenses_sorted()
            .into_iter()
            .nth(self.expense_index)
    }

    pub fn selected_goal(&self) -> Option<Goal> {
        self.goals().into_iter().nth(self.goal_index)
    }

    /// Advance the header clock
    pub fn tick(&mut self, now: DateTime<Local>) {
        self.now = now;
    }

    pub fn set_public_ip(&mut self, ip: impl Into<String>) {
        self.public_ip = ip.into();
    }
}

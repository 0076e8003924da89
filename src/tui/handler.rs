//! Event handler for the TUI
//!
//! Routes key events to the dashboard or the active dialog. Service
//! errors are shown in the status bar or the dialog; they never end the
//! session.

use std::path::Path;

use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::export::export_to_file;
use crate::services::{ExpenseService, GoalService, IncomeService};
use crate::storage::KeyValueStore;
use crate::tui::widgets::TextInput;

use super::app::{ActiveDialog, App, Panel, PendingDelete};
use super::dialogs::{ExpenseFormState, GoalFormState, ImportFormState, IncomeFormState};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event<S: KeyValueStore>(app: &mut App<'_, S>, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick(Local::now());
            Ok(())
        }
        Event::IpResolved(ip) => {
            app.set_public_ip(ip);
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
pub fn handle_key_event<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }
    handle_normal_key(app, key)
}

fn handle_normal_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    // Any keypress replaces the previous message
    app.clear_status();

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Tab => app.next_panel(),
        KeyCode::BackTab => app.prev_panel(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char('i') => open_income_dialog(app),
        KeyCode::Char('t') => toggle_income_type(app),
        KeyCode::Char('x') => export(app),
        KeyCode::Char('I') => {
            app.import_form = ImportFormState::default();
            app.open_dialog(ActiveDialog::Import);
        }

        KeyCode::Char('a') => add_record(app),
        KeyCode::Char('e') | KeyCode::Enter => edit_selected(app),
        KeyCode::Char('d') | KeyCode::Delete => confirm_delete(app),
        KeyCode::Char('J') => move_selected(app, true),
        KeyCode::Char('K') => move_selected(app, false),
        KeyCode::Char('c') if app.focused_panel == Panel::Goals => complete_selected(app),

        _ => {}
    }

    Ok(())
}

fn add_record<S: KeyValueStore>(app: &mut App<'_, S>) {
    match app.focused_panel {
        Panel::Expenses => match ExpenseService::new(&mut app.store).add() {
            Ok(expense) => {
                app.select(app.store.document().expenses.len());
                app.expense_form = ExpenseFormState::from_expense(&expense);
                app.open_dialog(ActiveDialog::Expense);
            }
            Err(e) => app.set_status(format!("Error: {}", e)),
        },
        Panel::Goals => match GoalService::new(&mut app.store).add() {
            Ok(goal) => {
                app.select(app.store.document().goals.len());
                app.goal_form = GoalFormState::from_goal(&goal);
                app.open_dialog(ActiveDialog::Goal);
            }
            Err(e) => app.set_status(format!("Error: {}", e)),
        },
        Panel::Completed => app.set_status("Completed goals cannot be added"),
    }
}

fn edit_selected<S: KeyValueStore>(app: &mut App<'_, S>) {
    match app.focused_panel {
        Panel::Expenses => {
            if let Some(expense) = app.selected_expense() {
                app.expense_form = ExpenseFormState::from_expense(&expense);
                app.open_dialog(ActiveDialog::Expense);
            }
        }
        Panel::Goals => {
            if let Some(goal) = app.selected_goal() {
                app.goal_form = GoalFormState::from_goal(&goal);
                app.open_dialog(ActiveDialog::Goal);
            }
        }
        Panel::Completed => app.set_status("Completed goals are read-only"),
    }
}

fn confirm_delete<S: KeyValueStore>(app: &mut App<'_, S>) {
    let pending = match app.focused_panel {
        Panel::Expenses => app.selected_expense().map(|e| PendingDelete::Expense {
            id: e.id.as_str().to_string(),
            label: e.label,
        }),
        Panel::Goals => app.selected_goal().map(|g| PendingDelete::Goal {
            id: g.id.as_str().to_string(),
            label: g.label,
        }),
        Panel::Completed => None,
    };

    if let Some(pending) = pending {
        app.open_dialog(ActiveDialog::Confirm(pending));
    }
}

fn delete<S: KeyValueStore>(app: &mut App<'_, S>, pending: PendingDelete) {
    let result = match &pending {
        PendingDelete::Expense { id, .. } => {
            ExpenseService::new(&mut app.store).delete(id).map(|_| ())
        }
        PendingDelete::Goal { id, .. } => GoalService::new(&mut app.store).delete(id).map(|_| ()),
    };

    match result {
        Ok(()) => {
            let label = match pending {
                PendingDelete::Expense { label, .. } | PendingDelete::Goal { label, .. } => label,
            };
            app.clamp_selections();
            app.set_status(format!("Deleted '{}'", label));
        }
        Err(e) => app.set_status(format!("Error: {}", e)),
    }
}

/// Move the selected record one row down (or up) and keep it selected
fn move_selected<S: KeyValueStore>(app: &mut App<'_, S>, down: bool) {
    let index = app.selected_index();
    if !down && index == 0 {
        return;
    }
    let target = if down { index + 1 } else { index - 1 };

    let result = match app.focused_panel {
        Panel::Expenses => match app.selected_expense() {
            Some(expense) => ExpenseService::new(&mut app.store)
                .move_to(expense.id.as_str(), target)
                .map(|_| ()),
            None => return,
        },
        Panel::Goals => match app.selected_goal() {
            Some(goal) => GoalService::new(&mut app.store)
                .move_to(goal.id.as_str(), target)
                .map(|_| ()),
            None => return,
        },
        Panel::Completed => return,
    };

    match result {
        Ok(()) => app.select(target),
        Err(e) => app.set_status(format!("Error: {}", e)),
    }
}

fn complete_selected<S: KeyValueStore>(app: &mut App<'_, S>) {
    let Some(goal) = app.selected_goal() else {
        return;
    };

    match GoalService::new(&mut app.store).complete(goal.id.as_str()) {
        Ok(done) => {
            app.clamp_selections();
            app.set_status(format!("Goal '{}' completed", done.label));
        }
        Err(e) => app.set_status(format!("Error: {}", e)),
    }
}

fn open_income_dialog<S: KeyValueStore>(app: &mut App<'_, S>) {
    let view = IncomeService::new(&mut app.store).view();
    app.income_form = IncomeFormState::from_view(&view);
    app.open_dialog(ActiveDialog::Income);
}

fn toggle_income_type<S: KeyValueStore>(app: &mut App<'_, S>) {
    match IncomeService::new(&mut app.store).toggle_type() {
        Ok(view) => app.set_status(format!("Income type: {}", view.income_type)),
        Err(e) => app.set_status(format!("Error: {}", e)),
    }
}

fn export<S: KeyValueStore>(app: &mut App<'_, S>) {
    let path = Path::new(&app.settings.export_file_name);
    match export_to_file(app.store.document(), path) {
        Ok(written) => app.set_status(format!("Exported to {}", written.display())),
        Err(e) => app.set_status(format!("Error: {}", e)),
    }
}

fn handle_dialog_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    match app.active_dialog.clone() {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::Confirm(pending) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.close_dialog();
                delete(app, pending);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::Expense => handle_expense_dialog_key(app, key),
        ActiveDialog::Goal => handle_goal_dialog_key(app, key),
        ActiveDialog::Income => handle_income_dialog_key(app, key),
        ActiveDialog::Import => handle_import_dialog_key(app, key),
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Apply an editing key to a text input; returns false if the key was not used
fn edit_input(input: &mut TextInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}

fn handle_expense_dialog_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab | KeyCode::Down => app.expense_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.expense_form.prev_field(),
        KeyCode::Enter => save_expense(app),
        _ => {
            edit_input(app.expense_form.focused_input(), key);
        }
    }
}

fn save_expense<S: KeyValueStore>(app: &mut App<'_, S>) {
    let Some(id) = app.expense_form.editing_id.clone() else {
        app.close_dialog();
        return;
    };
    let draft = match app.expense_form.to_draft() {
        Ok(draft) => draft,
        Err(msg) => {
            app.expense_form.set_error(msg);
            return;
        }
    };

    match ExpenseService::new(&mut app.store).edit(&id, &draft) {
        Ok(expense) => {
            app.close_dialog();
            app.set_status(format!("Saved '{}'", expense.label));
        }
        Err(e) => app.expense_form.set_error(e.to_string()),
    }
}

fn handle_goal_dialog_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab | KeyCode::Down => app.goal_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.goal_form.prev_field(),
        KeyCode::Enter => save_goal(app),
        _ => {
            edit_input(app.goal_form.focused_input(), key);
        }
    }
}

fn save_goal<S: KeyValueStore>(app: &mut App<'_, S>) {
    let Some(id) = app.goal_form.editing_id.clone() else {
        app.close_dialog();
        return;
    };
    let draft = match app.goal_form.to_draft() {
        Ok(draft) => draft,
        Err(msg) => {
            app.goal_form.set_error(msg);
            return;
        }
    };

    match GoalService::new(&mut app.store).edit(&id, &draft) {
        Ok(goal) => {
            app.close_dialog();
            app.set_status(format!("Saved '{}'", goal.label));
        }
        Err(e) => app.goal_form.set_error(e.to_string()),
    }
}

fn handle_income_dialog_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab | KeyCode::BackTab => {
            let view = IncomeService::new(&mut app.store).view();
            app.income_form.toggle_type(&view);
        }
        KeyCode::Enter => save_income(app),
        _ => {
            edit_input(&mut app.income_form.amount_input, key);
        }
    }
}

fn save_income<S: KeyValueStore>(app: &mut App<'_, S>) {
    let amount = match app.income_form.amount() {
        Ok(amount) => amount,
        Err(msg) => {
            app.income_form.set_error(msg);
            return;
        }
    };
    let income_type = app.income_form.income_type;

    let mut service = IncomeService::new(&mut app.store);
    let result = if service.view().income_type == income_type {
        service.set_for_current_type(amount)
    } else {
        service
            .set_type(income_type)
            .and_then(|_| service.set_for_current_type(amount))
    };

    match result {
        Ok(view) => {
            app.close_dialog();
            app.set_status(format!(
                "Monthly income: {}",
                view.effective_monthly_income
                    .format_with_symbol(&app.settings.currency_symbol)
            ));
        }
        Err(e) => app.income_form.set_error(e.to_string()),
    }
}

fn handle_import_dialog_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => {
            let path = app.import_form.path();
            app.import_form.session.select_file(&path);
            if let Ok(summary) = app.import_form.session.run(&mut app.store) {
                app.close_dialog();
                app.clamp_selections();
                app.set_status(format!("Imported {}", summary));
            }
            // On failure the dialog stays open and shows the reason
        }
        _ => {
            if edit_input(&mut app.import_form.path_input, key) {
                app.import_form.session.reset();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::Money;
    use crate::storage::{BudgetStore, MemoryStore};
    use tempfile::TempDir;

    fn press(app: &mut App<'_, MemoryStore>, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_text(app: &mut App<'_, MemoryStore>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn clear_field(app: &mut App<'_, MemoryStore>) {
        press(app, KeyCode::End);
        for _ in 0..32 {
            press(app, KeyCode::Backspace);
        }
    }

    fn create_test_app(settings: &Settings) -> App<'_, MemoryStore> {
        let (store, _) = BudgetStore::open(MemoryStore::new());
        App::new(store, settings)
    }

    #[test]
    fn test_add_expense_through_dialog() {
        let settings = Settings::default();
        let mut app = create_test_app(&settings);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog, ActiveDialog::Expense);
        assert_eq!(app.store.document().expenses.len(), 1);

        clear_field(&mut app);
        type_text(&mut app, "Rent");
        press(&mut app, KeyCode::Tab);
        clear_field(&mut app);
        type_text(&mut app, "1200");
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        let expense = &app.store.document().expenses[0];
        assert_eq!(expense.label, "Rent");
        assert_eq!(expense.amount, Money::new(1200.0));
    }

    #[test]
    fn test_invalid_amount_keeps_dialog_open() {
        let settings = Settings::default();
        let mut app = create_test_app(&settings);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Tab);
        clear_field(&mut app);
        type_text(&mut app, "lots");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_dialog, ActiveDialog::Expense);
        assert!(app.expense_form.error_message.is_some());
        assert_eq!(app.store.document().expenses[0].amount, Money::zero());
    }

    #[test]
    fn test_edit_imported_expense_without_color() {
        let settings = Settings::default();
        let mut app = create_test_app(&settings);
        crate::services::ImportService::new(&mut app.store)
            .import_str(r#"{"expenses":[{"id":"1","label":"x","amount":10}],"goals":[]}"#)
            .unwrap();

        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::End);
        type_text(&mut app, "y");
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert_eq!(app.expense_form.error_message, None);
        let expense = &app.store.document().expenses[0];
        assert_eq!(expense.label, "xy");
        assert_eq!(expense.amount, Money::new(10.0));
        assert_eq!(expense.color, "");
    }

    #[test]
    fn test_label_edit_keeps_exact_amounts() {
        let settings = Settings::default();
        let mut app = create_test_app(&settings);
        crate::services::ImportService::new(&mut app.store)
            .import_str(
                r##"{"expenses":[{"id":"1","label":"x","amount":10.004,"color":"#123456"}],
                "goals":[{"id":"2","label":"Car","targetAmount":999.999,
                "currentAmount":0.125,"color":"#abcdef","description":""}]}"##,
            )
            .unwrap();

        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::End);
        type_text(&mut app, "z");
        press(&mut app, KeyCode::Enter);
        assert!(!app.has_dialog());

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.active_dialog, ActiveDialog::Goal);
        press(&mut app, KeyCode::End);
        type_text(&mut app, "!");
        press(&mut app, KeyCode::Enter);
        assert!(!app.has_dialog());

        let doc = app.store.document();
        assert_eq!(doc.expenses[0].label, "xz");
        assert_eq!(doc.expenses[0].amount, Money::new(10.004));
        assert_eq!(doc.expenses[0].color, "#123456");
        assert_eq!(doc.goals[0].label, "Car!");
        assert_eq!(doc.goals[0].target_amount, Money::new(999.999));
        assert_eq!(doc.goals[0].current_amount, Money::new(0.125));
        assert_eq!(doc.goals[0].color, "#abcdef");
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let settings = Settings::default();
        let mut app = create_test_app(&settings);
        ExpenseService::new(&mut app.store).add().unwrap();

        press(&mut app, KeyCode::Char('d'));
        assert!(matches!(app.active_dialog, ActiveDialog::Confirm(_)));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.store.document().expenses.len(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.store.document().expenses.is_empty());
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_reorder_keeps_selection_on_moved_record() {
        let settings = Settings::default();
        let mut app = create_test_app(&settings);
        let first = ExpenseService::new(&mut app.store).add().unwrap();
        ExpenseService::new(&mut app.store).add().unwrap();
        ExpenseService::new(&mut app.store).add().unwrap();

        press(&mut app, KeyCode::Char('J'));
        press(&mut app, KeyCode::Char('J'));
        assert_eq!(app.expense_index, 2);
        assert_eq!(app.selected_expense().unwrap().id, first.id);

        press(&mut app, KeyCode::Char('J'));
        assert_eq!(app.expense_index, 2);

        let positions: Vec<i64> = app
            .store
            .document()
            .expenses_sorted()
            .iter()
            .map(|e| e.position)
            .collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_complete_goal_moves_it() {
        let settings = Settings::default();
        let mut app = create_test_app(&settings);
        GoalService::new(&mut app.store).add().unwrap();

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('c'));

        let doc = app.store.document();
        assert!(doc.goals.is_empty());
        assert_eq!(doc.completed_goals.len(), 1);
        assert!(doc.completed_goals[0].completed_date.is_some());
    }

    #[test]
    fn test_income_dialog_switches_type() {
        let settings = Settings::default();
        let mut app = create_test_app(&settings);

        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Tab);
        clear_field(&mut app);
        type_text(&mut app, "2000");
        press(&mut app, KeyCode::Enter);

        let summary = app.summary();
        assert_eq!(summary.monthly_income, Money::new(4000.0));
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_failed_import_leaves_budget_and_dialog() {
        let settings = Settings::default();
        let mut app = create_test_app(&settings);
        ExpenseService::new(&mut app.store).add().unwrap();
        let before = app.store.document().clone();

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();

        press(&mut app, KeyCode::Char('I'));
        type_text(&mut app, path.to_str().unwrap());
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_dialog, ActiveDialog::Import);
        assert_eq!(app.store.document(), &before);
        assert!(matches!(
            app.import_form.session.state(),
            crate::services::ImportState::Failed { .. }
        ));
    }

    #[test]
    fn test_tick_and_ip_events() {
        let settings = Settings::default();
        let mut app = create_test_app(&settings);

        handle_event(&mut app, Event::IpResolved("203.0.113.7".into())).unwrap();
        assert_eq!(app.public_ip, "203.0.113.7");

        let before = app.now;
        handle_event(&mut app, Event::Tick).unwrap();
        assert!(app.now >= before);
    }

    #[test]
    fn test_quit_and_help() {
        let settings = Settings::default();
        let mut app = create_test_app(&settings);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert!(!app.has_dialog());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}

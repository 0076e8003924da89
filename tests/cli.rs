//! End-to-end tests for the `tbudget` binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tbudget(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tbudget").unwrap();
    cmd.env("TERMINAL_BUDGET_DATA_DIR", data_dir)
        .env_remove("RUST_LOG")
        .current_dir(data_dir);
    cmd
}

fn stored_document(data_dir: &Path) -> serde_json::Value {
    let text = fs::read_to_string(data_dir.join("storage").join("terminalBudget.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

fn seed_budget(data_dir: &Path) {
    tbudget(data_dir)
        .args(["income", "set", "5000"])
        .assert()
        .success();
    tbudget(data_dir)
        .args(["expense", "add", "--label", "Rent", "--amount", "1200"])
        .assert()
        .success();
    tbudget(data_dir)
        .args(["expense", "add", "--label", "Food", "--amount", "300"])
        .assert()
        .success();
}

#[test]
fn test_summary_arithmetic() {
    let temp_dir = TempDir::new().unwrap();
    seed_budget(temp_dir.path());

    tbudget(temp_dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("$1,500.00"))
        .stdout(predicate::str::contains("$3,500.00"))
        .stdout(predicate::str::contains("$4,500.00"))
        .stdout(predicate::str::contains("$18,000.00"));
}

#[test]
fn test_expense_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    seed_budget(temp_dir.path());

    tbudget(temp_dir.path())
        .args(["expense", "move", "food", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved expense 'Food' to index 0"));

    let doc = stored_document(temp_dir.path());
    let food = doc["expenses"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["label"] == "Food")
        .unwrap()
        .clone();
    assert_eq!(food["position"], 0);

    tbudget(temp_dir.path())
        .args(["expense", "edit", "Rent", "--amount", "1300"])
        .assert()
        .success();

    tbudget(temp_dir.path())
        .args(["expense", "delete", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense: Food"));

    tbudget(temp_dir.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("$1,300.00"))
        .stdout(predicate::str::contains("Food").not());
}

#[test]
fn test_unknown_expense_fails() {
    let temp_dir = TempDir::new().unwrap();
    seed_budget(temp_dir.path());

    tbudget(temp_dir.path())
        .args(["expense", "delete", "Holidays"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_goal_completion() {
    let temp_dir = TempDir::new().unwrap();

    tbudget(temp_dir.path())
        .args([
            "goal", "add", "--label", "Car", "--target", "1000", "--current", "250",
        ])
        .assert()
        .success();

    tbudget(temp_dir.path())
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("25%"));

    tbudget(temp_dir.path())
        .args(["goal", "complete", "car"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed goal: Car"));

    let doc = stored_document(temp_dir.path());
    assert_eq!(doc["goals"].as_array().unwrap().len(), 0);
    assert_eq!(doc["completedGoals"].as_array().unwrap().len(), 1);
    assert!(doc["completedGoals"][0]["completedDate"].is_string());

    tbudget(temp_dir.path())
        .args(["goal", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Car"));
}

#[test]
fn test_export_import_round_trip() {
    let source = TempDir::new().unwrap();
    seed_budget(source.path());

    let output = tbudget(source.path())
        .args(["export", "--stdout"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let exported: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(exported["monthlyIncome"], 5000.0);

    let target = TempDir::new().unwrap();
    let file = target.path().join("budget_export.json");
    fs::write(&file, &output.stdout).unwrap();

    tbudget(target.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 expenses, 0 goals, 0 completed goals"));

    assert_eq!(stored_document(target.path()), exported);
}

#[test]
fn test_export_to_default_file() {
    let temp_dir = TempDir::new().unwrap();
    seed_budget(temp_dir.path());

    tbudget(temp_dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("budget_export.json"));

    assert!(temp_dir.path().join("budget_export.json").exists());
}

#[test]
fn test_import_backfills_legacy_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("legacy.json");
    fs::write(
        &file,
        r#"{"monthlyIncome": 3000, "expenses": [{"id": "1718000000000", "label": "Rent", "amount": 900}]}"#,
    )
    .unwrap();

    tbudget(temp_dir.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success();

    let doc = stored_document(temp_dir.path());
    assert_eq!(doc["schemaVersion"], 2);
    assert_eq!(doc["expenses"][0]["position"], 0);
    assert_eq!(doc["incomeType"], "monthly");
    assert_eq!(doc["completedGoals"].as_array().unwrap().len(), 0);
}

#[test]
fn test_invalid_import_leaves_budget_untouched() {
    let temp_dir = TempDir::new().unwrap();
    seed_budget(temp_dir.path());
    let before = fs::read_to_string(
        temp_dir.path().join("storage").join("terminalBudget.json"),
    )
    .unwrap();

    let file = temp_dir.path().join("broken.json");
    fs::write(&file, "{ this is not json").unwrap();

    tbudget(temp_dir.path())
        .arg("import")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("ERROR: Invalid file format"));

    let after = fs::read_to_string(
        temp_dir.path().join("storage").join("terminalBudget.json"),
    )
    .unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_corrupt_storage_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    let storage = temp_dir.path().join("storage");
    fs::create_dir_all(&storage).unwrap();
    fs::write(storage.join("terminalBudget.json"), "{ corrupt").unwrap();

    tbudget(temp_dir.path())
        .arg("summary")
        .assert()
        .success()
        .stderr(predicate::str::contains("stored budget could not be loaded"))
        .stdout(predicate::str::contains("$0.00"));

    // Nothing is overwritten until the next change
    assert_eq!(
        fs::read_to_string(storage.join("terminalBudget.json")).unwrap(),
        "{ corrupt"
    );
}

#[test]
fn test_background_commands() {
    let temp_dir = TempDir::new().unwrap();

    tbudget(temp_dir.path())
        .args(["background", "set", "https://example.com/bg.png"])
        .assert()
        .success();

    tbudget(temp_dir.path())
        .args(["background", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://example.com/bg.png"));

    let not_an_image = temp_dir.path().join("notes.txt");
    fs::write(&not_an_image, "hello").unwrap();
    tbudget(temp_dir.path())
        .args(["background", "image"])
        .arg(&not_an_image)
        .assert()
        .failure();

    tbudget(temp_dir.path())
        .args(["background", "clear"])
        .assert()
        .success();

    tbudget(temp_dir.path())
        .args(["background", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default (none)"));
}

#[test]
fn test_history_records_changes() {
    let temp_dir = TempDir::new().unwrap();
    seed_budget(temp_dir.path());

    tbudget(temp_dir.path())
        .args(["history", "--limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"))
        .stdout(predicate::str::contains("Rent"));
}

#[test]
fn test_config_shows_paths() {
    let temp_dir = TempDir::new().unwrap();

    tbudget(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Storage directory"))
        .stdout(predicate::str::contains("budget_export.json"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BUDGET: &str = "Section,Name,Amount\n\
                      Income,Salary,2000\n\
                      Fixed,Rent,800\n\
                      Variable,Groceries,Predicted: 300, Spent: 250\n\
                      ,Actual Leftover,950\n";

fn leftover(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("leftover").unwrap();
    cmd.env("LEFTOVER_CLI_DATA_DIR", data_dir.path())
        .env_remove("LEFTOVER_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn budget_file(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("my_budget.csv");
    std::fs::write(&path, BUDGET).unwrap();
    path
}

#[test]
fn report_prints_tables_and_dashboard() {
    let dir = TempDir::new().unwrap();
    let file = budget_file(&dir);

    leftover(&dir)
        .args(["report", "--today", "2025-01-10", "--pay-day", "2025-01-20"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Budget Overview"))
        .stdout(predicate::str::contains("€120.00/day"));
}

#[test]
fn report_with_variable_rows() {
    let dir = TempDir::new().unwrap();
    let file = budget_file(&dir);

    leftover(&dir)
        .args(["report", "--today", "2025-01-10", "--with-variable", "--threshold", "1000"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("€950.00"))
        .stdout(predicate::str::contains("Below threshold (€1000.00)"));
}

#[test]
fn report_json_snapshot() {
    let dir = TempDir::new().unwrap();
    let file = budget_file(&dir);

    leftover(&dir)
        .args(["report", "--json", "--today", "2025-01-10"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema_version\": \"1.0.0\""))
        .stdout(predicate::str::contains("\"Salary\""));
}

#[test]
fn report_rejects_non_csv_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("budget.txt");
    std::fs::write(&file, BUDGET).unwrap();

    leftover(&dir)
        .arg("report")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import error"));
}

#[test]
fn report_rejects_bad_date() {
    let dir = TempDir::new().unwrap();
    let file = budget_file(&dir);

    leftover(&dir)
        .args(["report", "--today", "tomorrow"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn init_then_config() {
    let dir = TempDir::new().unwrap();

    leftover(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written to"));
    assert!(dir.path().join("config.json").exists());

    leftover(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    true"))
        .stdout(predicate::str::contains("Days mode:         payday"));
}

#[test]
fn session_over_stdin() {
    let dir = TempDir::new().unwrap();
    let export = dir.path().join("out.csv");

    let script = format!(
        "income set 1 name Salary\n\
         income set 1 amount 2000\n\
         fixed set 1 amount 800\n\
         income rm 1\n\
         export {}\n\
         quit\n",
        export.display()
    );

    leftover(&dir)
        .arg("session")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Predicted €1200.00"))
        .stdout(predicate::str::contains("The first Income row cannot be removed"))
        .stdout(predicate::str::contains("Exported budget to"));

    let csv = std::fs::read_to_string(export).unwrap();
    assert!(csv.starts_with("Section,Name,Amount\n"));
    assert!(csv.contains("Income,Salary,2000\n"));
}

#[test]
fn session_imports_at_start() {
    let dir = TempDir::new().unwrap();
    let file = budget_file(&dir);

    leftover(&dir)
        .arg("session")
        .arg("--import")
        .arg(&file)
        .write_stdin("income list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"));
}

#[test]
fn unreadable_import_is_logged_to_stderr() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.csv");

    leftover(&dir)
        .arg("session")
        .arg("--import")
        .arg(&missing)
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing imported."))
        .stderr(predicate::str::contains("could not read import file"));
}

#[test]
fn log_filter_from_environment() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.csv");

    leftover(&dir)
        .env("LEFTOVER_LOG", "off")
        .arg("session")
        .arg("--import")
        .arg(&missing)
        .write_stdin("quit\n")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

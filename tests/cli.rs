use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn payday(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("payday").expect("binary exists");
    cmd.env("PAYDAY_DATA_DIR", data_dir)
        .env_remove("PAYDAY_BLUEPRINT")
        .env_remove("RUST_LOG");
    cmd
}

fn write_blueprint(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("mine.json");
    std::fs::write(
        &path,
        r#"{
            "obligations": [{"id": 1, "name": "Rent", "amount": 8000, "priority": "high"}],
            "goals": [{"id": 1, "name": "Fund", "targetAmount": 0, "currentAmount": 0, "monthlyPlan": "1000"}]
        }"#,
    )
    .unwrap();
    path
}

#[test]
fn allocate_prints_checklist() {
    let temp = TempDir::new().unwrap();
    let blueprint = write_blueprint(temp.path());

    payday(temp.path())
        .arg("--blueprint")
        .arg(&blueprint)
        .args(["allocate", "20000", "--allowance", "2000"])
        .assert()
        .success()
        .stdout(contains("Bills & Loans"))
        .stdout(contains("Move ₱8,000 to Rent"))
        .stdout(contains("Move ₱1,000 to Fund"))
        .stdout(contains("Keep ₱11,000 for Daily Spending"));
}

#[test]
fn allocate_reports_shortfall() {
    let temp = TempDir::new().unwrap();
    let blueprint = write_blueprint(temp.path());

    payday(temp.path())
        .arg("--blueprint")
        .arg(&blueprint)
        .args(["allocate", "1000", "--allowance", "2000"])
        .assert()
        .success()
        .stdout(contains("Allowance exceeds income by ₱1,000"))
        .stdout(contains("Move").not());
}

#[test]
fn allocate_exports_csv_to_file() {
    let temp = TempDir::new().unwrap();
    let blueprint = write_blueprint(temp.path());
    let output = temp.path().join("worksheet.csv");

    payday(temp.path())
        .arg("--blueprint")
        .arg(&blueprint)
        .args(["allocate", "20000", "--allowance", "2000", "--format", "csv", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("Worksheet written to"));

    let csv = std::fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("id,name,category,priority,suggested,target"));
    assert!(csv.contains("goal-1,Fund,savings,medium,1000,1000"));
}

#[test]
fn allocate_rejects_conflicting_allowance_flags() {
    let temp = TempDir::new().unwrap();

    payday(temp.path())
        .args(["allocate", "20000", "--allowance", "2000", "--allowance-from-expenses"])
        .assert()
        .failure();
}

#[test]
fn init_creates_sample_blueprint() {
    let temp = TempDir::new().unwrap();

    payday(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Created sample blueprint"));

    assert!(temp.path().join("config.json").exists());
    assert!(temp.path().join("data").join("blueprint.json").exists());
    assert!(temp.path().join("audit.log").exists());

    payday(temp.path())
        .arg("items")
        .assert()
        .success()
        .stdout(contains("obligation-1"))
        .stdout(contains("Emergency Fund"));

    payday(temp.path())
        .arg("allowance")
        .assert()
        .success()
        .stdout(contains("Suggested weekly allowance: ₱2,000"));

    payday(temp.path())
        .arg("audit")
        .assert()
        .success()
        .stdout(contains("CREATE Settings config.json"))
        .stdout(contains("CREATE Blueprint"));
}

#[test]
fn audit_without_log() {
    let temp = TempDir::new().unwrap();

    payday(temp.path())
        .arg("audit")
        .assert()
        .success()
        .stdout(contains("No audit entries"));
}

#[test]
fn allocate_tolerates_malformed_rows() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("messy.json");
    std::fs::write(
        &path,
        r#"{
            "obligations": [{"id": 1, "name": "Rent", "amount": 8000, "priority": 1}, "oops"],
            "goals": [{"name": null, "monthlyPlan": 1000}]
        }"#,
    )
    .unwrap();

    payday(temp.path())
        .arg("--blueprint")
        .arg(&path)
        .args(["allocate", "20000", "--allowance", "2000"])
        .assert()
        .success()
        .stdout(contains("Move ₱8,000 to Rent"))
        .stdout(contains("Keep ₱11,000 for Daily Spending"));
}

#[test]
fn config_shows_paths() {
    let temp = TempDir::new().unwrap();

    payday(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Currency symbol:   ₱"))
        .stdout(contains("(missing)"));
}

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::cargo_bin("takeoff-sim").expect("takeoff-sim bin")
}

#[test]
fn run_preset_prints_field_length() {
    bin()
        .args(["run", "--preset", "c17_stol_scaled"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TAKEOFF PERFORMANCE"))
        .stdout(predicate::str::contains("Total:"));
}

#[test]
fn run_scenario_writes_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("roll.csv");
    let json = dir.path().join("summary.json");

    bin()
        .args(["run", "--scenario", "configs/c17_stol.toml", "--csv"])
        .arg(&csv)
        .arg("--json")
        .arg(&json)
        .assert()
        .success();

    let csv_text = std::fs::read_to_string(&csv).unwrap();
    assert!(csv_text.starts_with("time,velocity,distance,lift,drag"));
    assert!(csv_text.lines().count() > 100);

    let summary: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(summary["name"], "C-17 STOL");
    assert_eq!(summary["performance"]["status"], "validated");
}

#[test]
fn simplified_method_warns_lower_bound() {
    bin()
        .args(["run", "--preset", "c17_stol", "--method", "simplified"])
        .assert()
        .success()
        .stderr(predicate::str::contains("lower bound"));
}

#[test]
fn infeasible_thrust_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weak.toml");
    let text = std::fs::read_to_string("configs/c17_stol.toml")
        .unwrap()
        .replace("thrust_per_engine_lbf = 40400.0", "thrust_per_engine_lbf = 100.0");
    std::fs::write(&path, text).unwrap();

    bin()
        .args(["run", "--scenario"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("infeasible"));
}

#[test]
fn sweep_tabulates_every_point() {
    bin()
        .args([
            "sweep", "--preset", "c17_stol", "--parameter", "thrust", "--start", "600000", "--end",
            "1200000", "--count", "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1200000.000"));
}

#[test]
fn size_reports_required_thrust() {
    bin()
        .args(["size", "--preset", "c17_stol", "--runway", "600"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Required thrust"));
}

#[test]
fn unknown_preset_is_rejected() {
    bin()
        .args(["run", "--preset", "b52"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown preset"));
}

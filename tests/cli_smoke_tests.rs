use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn food_tracker() -> Command {
    Command::cargo_bin("food_tracker").expect("binary builds")
}

#[test]
fn list_on_empty_home_reports_no_meals() {
    let home = tempdir().unwrap();
    food_tracker()
        .arg("list")
        .env("FOOD_TRACKER_HOME", home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No meals"));
}

#[test]
fn list_prints_archived_meals() {
    let home = tempdir().unwrap();
    fs::write(
        home.path().join("items"),
        r#"[{"name": "Soup", "creation time": "noon"}, {"creation time": "orphan"}]"#,
    )
    .unwrap();

    food_tracker()
        .arg("list")
        .env("FOOD_TRACKER_HOME", home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Soup").and(predicate::str::contains("noon")))
        .stdout(predicate::str::contains("orphan").not());
}

#[test]
fn version_flag_prints_version() {
    food_tracker()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_argument_fails_with_usage() {
    food_tracker()
        .arg("export")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: food_tracker"));
}

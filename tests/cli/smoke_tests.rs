// tests/cli/smoke_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{MIXED, ROUND_TRIP, TempWorkspace};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_customer_importer"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("customer_importer"))
        .stdout(predicate::str::contains("--delimiter"));
}

#[test]
fn no_arguments_prints_usage_and_succeeds() {
    bin()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn single_argument_prints_usage_and_succeeds() {
    bin()
        .arg("customers.csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn processes_file_and_reports_completion() {
    let ws = TempWorkspace::new("cli_round_trip");
    let input = ws.create_file("customers.csv", ROUND_TRIP);
    let output = ws.path().join("domains.txt");

    bin()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing completed. Results written to"));

    assert_eq!(ws.read("domains.txt").lines().collect::<Vec<_>>(), vec!["example.com: 2"]);
}

#[test]
fn quiet_suppresses_completion_message() {
    let ws = TempWorkspace::new("cli_quiet");
    let input = ws.create_file("customers.csv", ROUND_TRIP);

    bin()
        .arg("--quiet")
        .arg(&input)
        .arg(ws.path().join("domains.txt"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn dash_writes_report_to_stdout() {
    let ws = TempWorkspace::new("cli_stdout");
    let input = ws.create_file("customers.csv", MIXED);

    bin()
        .arg(&input)
        .arg("-")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("360.cn: 1"))
        .stdout(predicate::str::contains("github.io: 2"))
        .stdout(predicate::str::contains("Processing completed").not());
}

#[test]
fn count_order_flag() {
    let ws = TempWorkspace::new("cli_order");
    let input = ws.create_file("customers.csv", MIXED);

    bin()
        .args(["--order", "count"])
        .arg(&input)
        .arg("-")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("cyberchimps.com: 2"));
}

#[test]
fn missing_input_fails_with_error_message() {
    let ws = TempWorkspace::new("cli_missing");

    bin()
        .arg(ws.path().join("absent.csv"))
        .arg(ws.path().join("out.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("absent.csv"));
}

#[test]
fn unknown_order_is_rejected_by_parser() {
    bin()
        .args(["--order", "size", "in.csv", "out.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("size"));
}

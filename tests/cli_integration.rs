//! Integration tests for the trinum binary
//!
//! Runs the built executable and checks stdout, stderr and exit status.

use serde_json::Value;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trinum"))
        .args(args)
        .args(["--log-level", "off"])
        .output()
        .expect("trinum binary should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_json_output() {
    let output = run(&["--date", "1990-05-15", "--json"]);
    assert!(output.status.success());

    let json: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["result"]["inner"]["O"], 3);
    assert!(json.get("analysis").is_none());
}

#[test]
fn test_json_output_with_analysis() {
    let output = run(&["--query", "year=1990&month=5&day=15", "--json", "--analysis"]);
    assert!(output.status.success());

    let json: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["analysis"]["sections"].as_array().unwrap().len(), 4);
}

#[test]
fn test_plain_output() {
    let output = run(&["-y", "1990", "-m", "5", "-d", "15", "--no-color"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("date=1990-05-15 | main=3"));
}

#[test]
fn test_invalid_date_exits_with_2() {
    let output = run(&["--date", "2023-02-29"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("DAY_OUT_OF_RANGE"));
}

#[test]
fn test_partial_fields_exit_with_2() {
    let output = run(&["--year", "1990", "--month", "5"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("INCOMPLETE_DATE"));
}

#[test]
fn test_no_date_uses_today() {
    let output = run(&["--json"]);
    assert!(output.status.success());

    let json: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert!(json["result"]["birth_date"]["year"].is_number());
}

#[test]
fn test_days_listing() {
    let output = run(&["--days", "2024-2", "--json"]);
    assert!(output.status.success());

    let json: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["days"].as_array().unwrap().len(), 29);
}

#[test]
fn test_days_year_out_of_range_exits_with_2() {
    let output = run(&["--days", "50000-2"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("YEAR_OUT_OF_RANGE"));
}

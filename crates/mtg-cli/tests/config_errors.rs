//! Configuration is validated before the terminal is touched, so these all
//! fail fast even though stdout is not a TTY under the test harness.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_unsupported_currency_fails_before_start() {
    cargo_bin_cmd!("mtg")
        .args(["--currency", "XXX"])
        .env_remove("MTG_LOG")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unsupported currency 'XXX'"));
}

#[test]
fn test_zero_hours_rejected() {
    cargo_bin_cmd!("mtg")
        .args(["-t", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "hours worked per day must be a positive integer",
        ));
}

#[test]
fn test_zero_participants_rejected() {
    cargo_bin_cmd!("mtg")
        .args(["--number-of-participants", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "number of participants must be a positive integer",
        ));
}

#[test]
fn test_currency_from_env_is_validated() {
    cargo_bin_cmd!("mtg")
        .env("MTG_CURRENCY", "zzz")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported currency 'ZZZ'"));
}

#[test]
fn test_invalid_salary_rejected_by_parser() {
    cargo_bin_cmd!("mtg")
        .args(["--annual-salary", "a lot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid annual salary"));
}

#[test]
fn test_valid_config_without_terminal_is_refused() {
    cargo_bin_cmd!("mtg")
        .args(["--currency", "usd", "-n", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}

#[test]
fn test_oversized_salary_rejected() {
    cargo_bin_cmd!("mtg")
        .args(["-s", "79228162514264337593543950335"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is too large"));
}

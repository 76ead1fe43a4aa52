use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_salary_options() {
    cargo_bin_cmd!("mtg")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--annual-salary"))
        .stdout(predicate::str::contains("--currency"))
        .stdout(predicate::str::contains("--hours-worked-per-day"))
        .stdout(predicate::str::contains("--days-worked-per-month"))
        .stdout(predicate::str::contains("--number-of-participants"))
        .stdout(predicate::str::contains("currencies"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("mtg")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_currencies_lists_table() {
    cargo_bin_cmd!("mtg")
        .arg("currencies")
        .assert()
        .success()
        .stdout(predicate::str::contains("JPY"))
        .stdout(predicate::str::contains("USD"))
        .stdout(predicate::str::contains("EUR"));
}

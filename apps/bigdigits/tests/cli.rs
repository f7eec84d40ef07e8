use assert_cmd::Command;
use predicates::prelude::*;

fn bigdigits() -> Command {
    Command::cargo_bin("bigdigits").unwrap()
}

#[test]
fn missing_argument_prints_usage_and_fails() {
    bigdigits()
        .assert()
        .code(1)
        .stdout("usage: bigdigits <whole-number>\n");
}

#[test]
fn renders_seven_rows() {
    let output = bigdigits().arg("1234").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    let rows: Vec<&str> = text.lines().collect();

    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0], " 1    222    333      4    ");
    assert_eq!(rows[6], "111  22222   333      4    ");
}

#[test]
fn invalid_digit_prints_no_rows() {
    bigdigits()
        .arg("12a")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("'a' at position 2 is not a digit"));
}

#[test]
fn leading_minus_is_an_invalid_digit() {
    bigdigits()
        .arg("-12")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("'-' at position 0 is not a digit"));
}

#[test]
fn help_names_the_argument() {
    bigdigits().arg("--help").assert().success().stdout(predicate::str::contains("whole-number"));
}

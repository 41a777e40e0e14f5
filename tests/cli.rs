// Command-line tests for the freqcrack binary

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::cargo_bin("freqcrack").unwrap()
}

#[test]
fn test_shift_command() {
    bin()
        .args(["shift", "OVDTHUFWVZZPISLRLFZHYLAOLYL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("howmanypossiblekeysarethere"))
        .stdout(predicate::str::contains("key: 7"));
}

#[test]
fn test_shift_command_from_stdin_with_clean() {
    bin()
        .args(["shift", "--clean"])
        .write_stdin("ovdth ufwvz zpisl rlfzh ylaol yl\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("howmanypossiblekeysarethere"));
}

#[test]
fn test_encrypt_then_decrypt() {
    bin()
        .args(["encrypt", "attackatdawn", "--key", "lemon"])
        .assert()
        .success()
        .stdout("LXFOPVEFRNHR\n");

    bin()
        .args(["decrypt", "LXFOPVEFRNHR", "--key", "lemon"])
        .assert()
        .success()
        .stdout("attackatdawn\n");

    bin()
        .args(["encrypt", "howmanypossiblekeysarethere", "--shift", "7"])
        .assert()
        .success()
        .stdout("OVDTHUFWVZZPISLRLFZHYLAOLYL\n");
}

#[test]
fn test_encrypt_with_random_key() {
    bin()
        .args(["encrypt", "attackatdawn", "--random-key", "4"])
        .assert()
        .success()
        .stderr(predicate::str::is_match("^key: [a-z]{4}\n$").unwrap())
        .stdout(predicate::str::is_match("^[A-Z]{12}\n$").unwrap());
}

#[test]
fn test_encrypt_requires_a_key() {
    bin().args(["encrypt", "abc"]).assert().failure();
    bin()
        .args(["encrypt", "abc", "--key", "k", "--shift", "1"])
        .assert()
        .failure();
}

#[test]
fn test_period_and_break_on_file() {
    let dir = std::env::temp_dir().join(format!("freqcrack-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("cipher.txt");

    let output = bin()
        .args(["encrypt", freqcrack::samples::SCIENCE_PLAINTEXT, "--key", "queen"])
        .output()
        .unwrap();
    assert!(output.status.success());
    std::fs::write(&path, &output.stdout).unwrap();

    bin()
        .args(["period", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("5\n");

    bin()
        .args(["break", "--max-period", "10", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("period: 5"))
        .stdout(predicate::str::contains("key: queen"))
        .stdout(predicate::str::starts_with(freqcrack::samples::SCIENCE_PLAINTEXT));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_invalid_symbol_is_reported() {
    bin()
        .args(["shift", "HELLO WORLD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not in the alphabet"));
}

#[test]
fn test_custom_frequency_table() {
    bin()
        .args(["shift", "ABC", "--freq-table", "/nonexistent/table.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read frequency table"));
}

#[test]
fn test_demo() {
    bin()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("howmanypossiblekeysarethere"))
        .stdout(predicate::str::contains("Recovered period: 5"))
        .stdout(predicate::str::contains("Recovered key: queen"))
        .stdout(predicate::str::contains("Plaintext recovered: true"));
}

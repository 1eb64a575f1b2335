//! Integration tests for the bonscan binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn bonscan() -> Command {
    Command::cargo_bin("bonscan").unwrap()
}

#[test]
fn scan_extracts_all_fields_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "REWE Supermarkt\nBrot 2,50\nMilch 1,20\nTotal: 12,99 EUR\n23.07.2025"
    )
    .unwrap();

    bonscan()
        .arg("scan")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("12.99"))
        .stdout(predicate::str::contains("2025-07-23"))
        .stdout(predicate::str::contains("food"));
}

#[test]
fn scan_reads_stdin() {
    bonscan()
        .arg("scan")
        .write_stdin("DB Fahrkarte Berlin\n8,90 €")
        .assert()
        .success()
        .stdout(predicate::str::contains("8.90"))
        .stdout(predicate::str::contains("transport"));
}

#[test]
fn scan_without_amount_warns() {
    bonscan()
        .arg("scan")
        .write_stdin("Danke fuer Ihren Einkauf")
        .assert()
        .success()
        .stderr(predicate::str::contains("nothing to save"));
}

#[test]
fn scan_text_format() {
    bonscan()
        .args(["scan", "--format", "text"])
        .write_stdin("Apotheke\nSumme 7,45 EUR\n01.02.2024")
        .assert()
        .success()
        .stdout(predicate::str::contains("7.45 EUR"))
        .stdout(predicate::str::contains("2024-02-01"))
        .stdout(predicate::str::contains("Health"));
}

#[test]
fn scan_missing_file_fails() {
    bonscan()
        .arg("scan")
        .arg("does-not-exist.txt")
        .assert()
        .failure();
}

#[test]
fn config_show_prints_defaults() {
    bonscan()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unmarked_fallback"));
}

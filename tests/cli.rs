use assert_cmd::Command;
use chrono::{TimeDelta, Utc};
use predicates::prelude::*;

fn bin() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("credent"))
}

/// Run `credent hash` and capture the record it prints.
fn hash_record(password: &str, work: &str) -> String {
    let output = bin()
        .env("CREDENT_PASSWORD", password)
        .args(["hash", "--work", work])
        .output()
        .unwrap();

    assert!(output.status.success(), "hash failed: {output:?}");
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

#[test]
fn hash_emits_self_describing_record() {
    bin()
        .env("CREDENT_PASSWORD", "swordfish")
        .env_remove("CREDENT_WORK")
        .env_remove("CREDENT_KEY_LENGTH")
        .arg("hash")
        .assert()
        .success()
        .stdout(predicate::str::contains("pbkdf2-sha512"))
        .stdout(predicate::str::contains("\"keyLength\":66"))
        .stdout(predicate::str::contains("\"iterations\":32768"));
}

#[test]
fn hash_then_verify_roundtrip() {
    let record = hash_record("swordfish", "4096");

    bin()
        .env("CREDENT_PASSWORD", "swordfish")
        .args(["verify", &record])
        .assert()
        .success()
        .stdout(predicate::str::contains("password verified"));
}

#[test]
fn wrong_password_is_rejected() {
    let record = hash_record("swordfish", "4096");

    bin()
        .env("CREDENT_PASSWORD", "marlin")
        .args(["verify", &record])
        .assert()
        .failure()
        .stdout(predicate::str::contains("password does not match"));
}

#[test]
fn piped_password_works() {
    let record = hash_record("swordfish", "4096");

    bin()
        .env_remove("CREDENT_PASSWORD")
        .args(["verify", &record])
        .write_stdin("swordfish\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("password verified"));
}

#[test]
fn missing_password_fails() {
    bin()
        .env_remove("CREDENT_PASSWORD")
        .arg("hash")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no password provided"));
}

#[test]
fn sub_minimum_work_is_rejected() {
    bin()
        .env("CREDENT_PASSWORD", "swordfish")
        .args(["hash", "--work", "1024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below the minimum"));
}

#[test]
fn weak_record_is_reported_expired() {
    let record = hash_record("swordfish", "4096");

    // Default policy wants 32768 iterations.
    bin()
        .env_remove("CREDENT_WORK")
        .args(["expired", &record])
        .assert()
        .failure()
        .stdout(predicate::str::contains("expired"));

    bin()
        .args(["expired", &record, "--work", "4096"])
        .assert()
        .success()
        .stdout(predicate::str::contains("current"));
}

#[test]
fn old_record_is_reported_expired_by_age() {
    let record = hash_record("swordfish", "4096");
    let four_months_ago = (Utc::now() - TimeDelta::days(120)).to_rfc3339();
    let just_now = Utc::now().to_rfc3339();

    bin()
        .args([
            "expired",
            &record,
            "--work",
            "4096",
            "--days",
            "90",
            "--created-at",
            &four_months_ago,
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("expired"));

    bin()
        .args([
            "expired",
            &record,
            "--work",
            "4096",
            "--days",
            "90",
            "--created-at",
            &just_now,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("current"));
}

#[test]
fn malformed_record_fails() {
    bin()
        .env("CREDENT_PASSWORD", "swordfish")
        .args(["verify", "not-a-valid-record"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed hash record"));
}

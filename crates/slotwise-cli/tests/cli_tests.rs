//! Integration tests for the `slots` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the find, free,
//! and busy subcommands through the actual binary, including stdin/stdout
//! piping, file I/O, error handling, and the mandatory-only fallback.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the team_day.json fixture.
///
/// Three events: ana 09:00-10:00, ana+bo 12:00-13:00, and carmen booked for
/// the entire day.
fn team_day_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/team_day.json")
}

/// Helper: read the team_day.json fixture as a string.
fn team_day_json() -> String {
    std::fs::read_to_string(team_day_path()).expect("team_day.json fixture must exist")
}

// ─────────────────────────────────────────────────────────────────────────────
// Find subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn find_stdin_to_stdout() {
    // Ana is busy 09:00-10:00 and 12:00-13:00; three gaps fit an hour.
    Command::cargo_bin("slots")
        .unwrap()
        .args(["find", "--duration", "60", "--mandatory", "ana"])
        .write_stdin(team_day_json())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"start\": 0"))
        .stdout(predicate::str::contains("\"start\": 600"))
        .stdout(predicate::str::contains("\"start\": 780"));
}

#[test]
fn find_file_to_stdout() {
    Command::cargo_bin("slots")
        .unwrap()
        .args([
            "find",
            "-i",
            team_day_path(),
            "--duration",
            "60",
            "--mandatory",
            "ana,bo",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"end\": 540"))
        .stdout(predicate::str::contains("\"end\": 1440"));
}

#[test]
fn find_file_to_file() {
    let output_path = "/tmp/slots-test-find-output.json";

    // Clean up from any prior run
    let _ = std::fs::remove_file(output_path);

    Command::cargo_bin("slots")
        .unwrap()
        .args([
            "find",
            "-i",
            team_day_path(),
            "-o",
            output_path,
            "--duration",
            "60",
            "--mandatory",
            "ana",
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    assert!(
        content.contains("\"start\": 600"),
        "output should contain the 10:00-12:00 gap"
    );

    // Clean up
    let _ = std::fs::remove_file(output_path);
}

#[test]
fn find_falls_back_when_optional_attendee_is_overbooked() {
    // Carmen (optional) is booked all day; without the fallback this query
    // would return nothing.
    Command::cargo_bin("slots")
        .unwrap()
        .args([
            "find",
            "-i",
            team_day_path(),
            "--duration",
            "60",
            "--mandatory",
            "ana",
            "--optional",
            "carmen",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"start\": 600"));
}

#[test]
fn find_with_overbooked_mandatory_attendee_prints_empty_array() {
    Command::cargo_bin("slots")
        .unwrap()
        .args([
            "find",
            "-i",
            team_day_path(),
            "--duration",
            "60",
            "--mandatory",
            "carmen",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn find_clock_output_renders_wall_times() {
    Command::cargo_bin("slots")
        .unwrap()
        .args([
            "find",
            "-i",
            team_day_path(),
            "--duration",
            "60",
            "--mandatory",
            "ana",
            "--clock",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("00:00-09:00"))
        .stdout(predicate::str::contains("10:00-12:00"))
        .stdout(predicate::str::contains("13:00-24:00"));
}

#[test]
fn find_zero_duration_fails() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["find", "--duration", "0", "--mandatory", "ana"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid request"));
}

#[test]
fn find_invalid_json_fails() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["find", "--duration", "30", "--mandatory", "ana"])
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode events JSON"));
}

#[test]
fn find_rejects_inverted_event_interval() {
    // The bounds are validated during decoding; an inverted range never
    // reaches the engine.
    Command::cargo_bin("slots")
        .unwrap()
        .args(["find", "--duration", "30", "--mandatory", "ana"])
        .write_stdin(r#"[{"start": 600, "end": 540, "attendees": ["ana"]}]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode events JSON"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Free subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn free_lists_gaps_for_a_fixed_attendee_set() {
    // Bo only attends the 12:00-13:00 event.
    Command::cargo_bin("slots")
        .unwrap()
        .args([
            "free",
            "-i",
            team_day_path(),
            "--attendees",
            "bo",
            "--min-duration",
            "30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"end\": 720"))
        .stdout(predicate::str::contains("\"start\": 780"));
}

#[test]
fn free_without_attendees_is_the_whole_day() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["free", "-i", team_day_path(), "--clock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00:00-24:00"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Busy subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn busy_prints_the_merged_cover() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["busy", "-i", team_day_path(), "--attendees", "ana,bo", "--clock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("09:00-10:00"))
        .stdout(predicate::str::contains("12:00-13:00"));
}

#[test]
fn busy_with_no_attendees_is_empty() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["busy", "-i", team_day_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

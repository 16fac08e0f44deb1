use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn furiyomi(data: &Path) -> Command {
    let mut cmd = Command::cargo_bin("furiyomi").unwrap();
    cmd.env("FURIYOMI_DATA", data).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_queue_take_advances_cursor() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("queue.txt"),
        "a\n\nb\n\n***\n\nc\n\nd\n",
    )
    .unwrap();

    furiyomi(temp_dir.path())
        .args(["queue", "count"])
        .assert()
        .success()
        .stdout("2\n");

    furiyomi(temp_dir.path())
        .args(["queue", "take"])
        .assert()
        .success()
        .stdout("c\n");

    let queue = fs::read_to_string(temp_dir.path().join("queue.txt")).unwrap();
    assert_eq!(queue, "a\n\nb\n\nc\n\n***\n\nd\n");

    furiyomi(temp_dir.path())
        .args(["queue", "count"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_queue_take_on_empty_queue() {
    let temp_dir = tempfile::tempdir().unwrap();

    furiyomi(temp_dir.path())
        .args(["queue", "take"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Queue is empty"));
    assert!(!temp_dir.path().join("queue.txt").exists());
}

#[test]
fn test_highlight_summary_of_empty_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("data");
    let first = temp_dir.path().join("first.txt");
    let second = temp_dir.path().join("second.txt");
    fs::write(&first, "").unwrap();
    fs::write(&second, "\n\n").unwrap();

    furiyomi(&data)
        .arg("highlight")
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("100% {}", first.display())))
        .stdout(predicate::str::contains(format!("100% {}", second.display())));
}

#[test]
fn test_missing_analyzer_reports_64_bit_hint() {
    let temp_dir = tempfile::tempdir().unwrap();

    furiyomi(temp_dir.path())
        .args(["config", "mecab.program", "/nonexistent/furiyomi-mecab"])
        .assert()
        .success();

    furiyomi(temp_dir.path())
        .args(["furigana", "漢字"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to start /nonexistent/furiyomi-mecab"))
        .stderr(predicate::str::contains("64-bit binary support"));
}

#[test]
fn test_config_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();

    furiyomi(temp_dir.path())
        .args(["config", "kakasi.encoding", "sjis"])
        .assert()
        .success()
        .stderr(predicate::str::contains("kakasi.encoding set to Shift_JIS"));

    furiyomi(temp_dir.path())
        .args(["config", "kakasi.encoding"])
        .assert()
        .success()
        .stdout("Shift_JIS\n");

    assert!(temp_dir.path().join("config.json").exists());
}

#[test]
fn test_paths_lists_data_files() {
    let temp_dir = tempfile::tempdir().unwrap();

    furiyomi(temp_dir.path())
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains("anki.txt"))
        .stdout(predicate::str::contains("marked.trimmed.txt"))
        .stdout(predicate::str::contains("config.json"));
}

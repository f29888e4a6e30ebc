//! End-to-end CLI tests for chatview.
//!
//! These tests run the actual binary against export fixtures on disk and
//! check the generated page and the status output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

/// Creates an export directory: transcript, two media files, one sidecar.
fn setup_export() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let chat = "\
20/06/2025, 23:28 - Messages and calls are end-to-end encrypted.
20/06/2025, 23:29 - Bob: hello Ana
20/06/2025, 23:30 - Ana: photo.jpg (file attached)
20/06/2025, 23:31 - Ana: voice.opus (file attached)
and a second line
";
    fs::write(dir.path().join("chat.txt"), chat).unwrap();
    fs::write(dir.path().join("photo.jpg"), b"jpegdata").unwrap();
    fs::write(dir.path().join("voice.opus"), b"oggdata").unwrap();
    fs::write(dir.path().join("voice.opus.txt"), "transcribed words").unwrap();

    dir
}

fn chatview() -> Command {
    Command::cargo_bin("chatview").expect("binary builds")
}

#[test]
fn generates_page_with_defaults() {
    let dir = setup_export();

    chatview()
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("4 messages read"))
        .stdout(predicate::str::contains("2 media files indexed"))
        .stdout(predicate::str::contains("1 transcriptions loaded"));

    let html = fs::read_to_string(dir.path().join("output.html")).unwrap();
    assert!(html.contains("<img src=\"photo.jpg\""));
    assert!(html.contains("transcribed words"));
    assert!(html.contains(">System<"));
}

#[test]
fn me_flag_right_aligns_viewer() {
    let dir = setup_export();

    chatview()
        .arg("--dir")
        .arg(dir.path())
        .arg("--me")
        .arg("Bob")
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("output.html")).unwrap();
    let bob = html.find("hello Ana").unwrap();
    assert!(html[..bob].contains("message sent"));
}

#[test]
fn missing_chat_file_fails_with_error() {
    let dir = tempdir().unwrap();

    chatview()
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn missing_media_dir_warns_and_degrades() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("chat.txt"),
        "20/06/2025, 23:29 - Bob: photo.jpg (file attached)\n",
    )
    .unwrap();

    chatview()
        .arg(dir.path().join("chat.txt"))
        .arg(dir.path().join("no-such-media"))
        .arg(dir.path().join("output.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("generating text only"));

    let html = fs::read_to_string(dir.path().join("output.html")).unwrap();
    assert!(!html.contains("<img"));
}

#[test]
fn custom_title_appears_in_header() {
    let dir = setup_export();

    chatview()
        .arg("--dir")
        .arg(dir.path())
        .arg("--title")
        .arg("Trip planning")
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("output.html")).unwrap();
    assert!(html.contains("<div class=\"title\">Trip planning</div>"));
}

#[test]
fn continuation_folds_into_previous_bubble() {
    let dir = setup_export();

    chatview().arg("--dir").arg(dir.path()).assert().success();

    let html = fs::read_to_string(dir.path().join("output.html")).unwrap();
    // "and a second line" belongs to Ana's voice message bubble, after the
    // audio block (the attachment notice is stripped).
    assert!(html.contains("and a second line"));
    assert!(!html.contains("(file attached)"));
}

#[test]
fn version_flag_works() {
    chatview()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("chatview"));
}

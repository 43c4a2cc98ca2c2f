#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::fs::File;
use tempfile::TempDir;
use zip::ZipArchive;

fn filedesk_cmd() -> Command {
    Command::new(cargo_bin("filedesk"))
}

#[test]
fn file_mode_create_and_read_scenario() {
    let temp = TempDir::new().unwrap();

    filedesk_cmd()
        .current_dir(temp.path())
        .write_stdin("2\ncreate\nnotes.txt\nhello\nread\nnotes.txt\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("File created: notes.txt"))
        .stdout(predicate::str::contains("hello"));

    assert_eq!(
        fs::read_to_string(temp.path().join("notes.txt")).unwrap(),
        "hello\n"
    );
}

#[test]
fn zip_mode_create_and_inspect_scenario() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("data.txt"), "archive me\n").unwrap();

    filedesk_cmd()
        .current_dir(temp.path())
        .write_stdin("5\ncreate\na.zip\ndata.txt\nread\na.zip\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ZIP archive created: a.zip"))
        .stdout(predicate::str::contains("File: a.zip"))
        .stdout(predicate::str::contains(" bytes"));

    let archive = File::open(temp.path().join("a.zip")).unwrap();
    let zip = ZipArchive::new(archive).unwrap();
    assert_eq!(zip.file_names().collect::<Vec<_>>(), vec!["data.txt"]);
}

#[test]
fn invalid_choice_redisplays_the_menu() {
    filedesk_cmd()
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice."));
}

#[test]
fn unknown_command_is_reported_and_loop_continues() {
    filedesk_cmd()
        .write_stdin("3\nfrobnicate\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command."))
        .stdout(predicate::str::contains("Exiting..."));
}

#[test]
fn delete_of_a_missing_file_is_nonfatal() {
    let temp = TempDir::new().unwrap();

    filedesk_cmd()
        .current_dir(temp.path())
        .write_stdin("2\ndelete\nno-such-file.txt\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error:"));
}

#[test]
fn disk_info_reports_the_root_mount_point() {
    filedesk_cmd()
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Disk usage for /:"));
}

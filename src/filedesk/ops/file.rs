//! Plain-file operations: create, append, read, delete.

use crate::error::Result;
use crate::ops::{CmdMessage, CmdResult};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Create an empty file, truncating any existing one.
pub fn create(path: &Path) -> Result<CmdResult> {
    File::create(path)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "File created: {}",
        path.display()
    )));
    Ok(result)
}

/// Append one line of content. The file is created if it does not exist.
pub fn append(path: &Path, content: &str) -> Result<CmdResult> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    writeln!(file, "{}", content)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Written to file: {}", content)));
    Ok(result)
}

/// Read the whole file and echo it line by line. An unopenable path is
/// an error; no distinction is made between missing and unreadable.
pub fn read(path: &Path) -> Result<CmdResult> {
    let content = fs::read_to_string(path)?;
    let mut result =
        CmdResult::default().with_lines(content.lines().map(str::to_string).collect());
    result.messages.insert(
        0,
        CmdMessage::info(format!("Contents of {}:", path.display())),
    );
    Ok(result)
}

/// Remove the file. Removal of an absent path is a reported failure,
/// not a panic.
pub fn delete(path: &Path) -> Result<CmdResult> {
    fs::remove_file(path)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "File deleted: {}",
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_then_append_then_read_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");

        create(&path).unwrap();
        append(&path, "hello").unwrap();

        let result = read(&path).unwrap();
        assert_eq!(result.lines, vec!["hello".to_string()]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn create_truncates_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");

        fs::write(&path, "old content\n").unwrap();
        create(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn append_creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("fresh.txt");

        append(&path, "first line").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first line\n");
    }

    #[test]
    fn read_missing_file_fails_with_no_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.txt");

        assert!(read(&path).is_err());
    }

    #[test]
    fn second_delete_fails_without_panicking() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("once.txt");
        fs::write(&path, "x").unwrap();

        assert!(delete(&path).is_ok());
        assert!(delete(&path).is_err());
    }
}

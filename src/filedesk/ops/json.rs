//! JSON-mode operations: write a [`Record`] with 4-space indentation,
//! read back and pretty-print arbitrary JSON.

use crate::error::{DeskError, Result};
use crate::model::Record;
use crate::ops::{CmdMessage, CmdResult};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::fs;
use std::path::Path;

fn to_pretty<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|_| DeskError::Malformed("non-UTF-8 JSON output".to_string()))
}

/// Serialize the record with 4-space indentation, overwriting the file.
pub fn create(path: &Path, record: &Record) -> Result<CmdResult> {
    let mut content = to_pretty(record)?;
    content.push('\n');
    fs::write(path, content)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "JSON file created: {}",
        path.display()
    )));
    Ok(result)
}

/// Parse the file as JSON and echo it pretty-printed. Open failure and
/// parse failure both fail the read.
pub fn read(path: &Path) -> Result<CmdResult> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    let pretty = to_pretty(&value)?;

    let mut result = CmdResult::default().with_lines(pretty.lines().map(str::to_string).collect());
    result.messages.insert(
        0,
        CmdMessage::info(format!("Contents of {}:", path.display())),
    );
    Ok(result)
}

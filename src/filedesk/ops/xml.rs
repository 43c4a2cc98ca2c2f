//! XML-mode operations: build a `<Root><Example>…</Example></Root>`
//! document, read one back as an indented element/text dump.

use crate::error::{DeskError, Result};
use crate::ops::{CmdMessage, CmdResult};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::fs;
use std::path::Path;

const ROOT_TAG: &str = "Root";
const CHILD_TAG: &str = "Example";

/// Write the document with an XML declaration, one root element and one
/// child element carrying the given text.
pub fn create(path: &Path, text: &str) -> Result<CmdResult> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new(ROOT_TAG)))?;
    writer.write_event(Event::Start(BytesStart::new(CHILD_TAG)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(CHILD_TAG)))?;
    writer.write_event(Event::End(BytesEnd::new(ROOT_TAG)))?;

    fs::write(path, writer.into_inner())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "XML file created: {}",
        path.display()
    )));
    Ok(result)
}

/// Stream the document and echo every element tag (indented by depth)
/// and every non-blank text value, in document order.
pub fn read(path: &Path) -> Result<CmdResult> {
    let mut reader = Reader::from_file(path)?;
    let mut buf = Vec::new();
    let mut lines = Vec::new();
    let mut depth = 0usize;
    let mut saw_element = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(start) => {
                saw_element = true;
                lines.push(format!(
                    "{}Element: {}",
                    "  ".repeat(depth),
                    String::from_utf8_lossy(start.name().as_ref())
                ));
                depth += 1;
            }
            Event::Empty(empty) => {
                saw_element = true;
                lines.push(format!(
                    "{}Element: {}",
                    "  ".repeat(depth),
                    String::from_utf8_lossy(empty.name().as_ref())
                ));
            }
            Event::Text(text) => {
                let value = text
                    .unescape()
                    .map_err(|e| DeskError::Malformed(e.to_string()))?;
                let value = value.trim();
                if !value.is_empty() {
                    // Text belongs at its enclosing element's depth
                    lines.push(format!(
                        "{}Text: {}",
                        "  ".repeat(depth.saturating_sub(1)),
                        value
                    ));
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !saw_element {
        return Err(DeskError::Malformed(format!(
            "no root element in {}",
            path.display()
        )));
    }

    let mut result = CmdResult::default().with_lines(lines);
    result.messages.insert(
        0,
        CmdMessage::info(format!("Contents of {}:", path.display())),
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn element_text_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doc.xml");

        create(&path, "hello world").unwrap();
        let result = read(&path).unwrap();

        assert_eq!(
            result.lines,
            vec![
                "Element: Root".to_string(),
                "  Element: Example".to_string(),
                "  Text: hello world".to_string(),
            ]
        );
    }

    #[test]
    fn reserved_characters_survive_the_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doc.xml");

        create(&path, "a < b & c").unwrap();
        let result = read(&path).unwrap();

        assert!(result.lines.contains(&"  Text: a < b & c".to_string()));
    }

    #[test]
    fn created_file_carries_a_declaration() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doc.xml");

        create(&path, "x").unwrap();
        let raw = fs::read_to_string(&path).unwrap();

        assert!(raw.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(raw.contains("<Root>"));
        assert!(raw.contains("<Example>x</Example>"));
    }

    #[test]
    fn read_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        assert!(read(&temp.path().join("absent.xml")).is_err());
    }

    #[test]
    fn empty_document_reports_missing_root() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.xml");
        fs::write(&path, "").unwrap();

        assert!(matches!(read(&path), Err(DeskError::Malformed(_))));
    }
}

use crate::error::{DeskError, Result};
use crate::ops::{CmdResult, MessageLevel};
use colored::Colorize;
use std::io::Write;

pub(super) fn render<W: Write>(out: &mut W, result: &CmdResult) -> Result<()> {
    for message in &result.messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    for line in &result.lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub(super) fn render_error<W: Write>(out: &mut W, err: &DeskError) -> Result<()> {
    writeln!(out, "{}", format!("Error: {}", err).red())?;
    Ok(())
}

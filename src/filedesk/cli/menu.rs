//! The interactive dispatcher: a top menu selecting a mode, then a
//! command loop routing create/read/delete to the matching operation.
//!
//! The top menu has no exit command; the program runs until stdin is
//! exhausted or the process is killed. Reaching end of input at any
//! prompt unwinds cleanly, so piping a script in terminates with exit
//! code 0.

use super::console::Console;
use super::print;
use crate::error::{DeskError, Result};
use crate::model::{Command, Mode, Record};
use crate::ops;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const TOP_PROMPT: &str = "Choose option (1 - Disk Info, 2 - File Operations, \
                          3 - JSON Operations, 4 - XML Operations, 5 - ZIP Operations): ";
const COMMAND_PROMPT: &str = "Enter command (create, read, delete, exit): ";

/// Run the top menu until end of input.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    loop {
        let Some(choice) = console.prompt(TOP_PROMPT)? else {
            return Ok(());
        };

        if choice == "1" {
            let report = ops::disk::report(&ops::disk::MOUNT_POINTS);
            print::render(console.writer(), &report)?;
            continue;
        }

        match mode_for_choice(&choice) {
            Some(mode) => {
                console.say(format!("Entering {} operations mode...", mode.label()))?;
                // `exit` comes back to the top menu; end of input does not
                if command_loop(console, mode)?.is_none() {
                    return Ok(());
                }
            }
            None => console.say("Invalid choice.")?,
        }
    }
}

fn mode_for_choice(choice: &str) -> Option<Mode> {
    match choice {
        "2" => Some(Mode::File),
        "3" => Some(Mode::Json),
        "4" => Some(Mode::Xml),
        "5" => Some(Mode::Zip),
        _ => None,
    }
}

/// One command per iteration; `exit` returns `Some(())` to hand control
/// back to the top menu, end of input returns `None`. Operation failures
/// are rendered and the loop keeps going.
fn command_loop<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mode: Mode,
) -> Result<Option<()>> {
    loop {
        let Some(token) = console.prompt(COMMAND_PROMPT)? else {
            return Ok(None);
        };
        let Ok(command) = token.parse::<Command>() else {
            console.say("Unknown command.")?;
            continue;
        };

        let flow = match command {
            Command::Exit => {
                console.say("Exiting...")?;
                return Ok(Some(()));
            }
            Command::Create => run_create(console, mode)?,
            Command::Read => run_read(console, mode)?,
            Command::Delete => run_delete(console, mode)?,
        };
        if flow.is_none() {
            return Ok(None);
        }
    }
}

fn prompt_path<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Option<PathBuf>> {
    Ok(console.prompt("Enter filename: ")?.map(PathBuf::from))
}

fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    outcome: Result<ops::CmdResult>,
) -> Result<()> {
    match outcome {
        Ok(result) => print::render(console.writer(), &result),
        Err(err) => print::render_error(console.writer(), &err),
    }
}

fn run_create<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mode: Mode,
) -> Result<Option<()>> {
    let Some(path) = prompt_path(console)? else {
        return Ok(None);
    };

    match mode {
        Mode::File => {
            let Some(content) = console.prompt("Enter content to write: ")? else {
                return Ok(None);
            };
            // Two independent steps, as two independently reported results
            report(console, ops::file::create(&path))?;
            report(console, ops::file::append(&path, &content))?;
        }
        Mode::Json => match prompt_record(console) {
            Ok(Some(record)) => report(console, ops::json::create(&path, &record))?,
            Ok(None) => return Ok(None),
            Err(err @ DeskError::Input(_)) => print::render_error(console.writer(), &err)?,
            Err(err) => return Err(err),
        },
        Mode::Xml => {
            let Some(text) = console.prompt("Enter the text for the element: ")? else {
                return Ok(None);
            };
            report(console, ops::xml::create(&path, &text))?;
        }
        Mode::Zip => {
            let Some(source) = console.prompt("Enter the filename to add to the ZIP archive: ")?
            else {
                return Ok(None);
            };
            report(console, ops::archive::create(&path, Path::new(&source)))?;
        }
    }
    Ok(Some(()))
}

fn run_read<R: BufRead, W: Write>(console: &mut Console<R, W>, mode: Mode) -> Result<Option<()>> {
    let Some(path) = prompt_path(console)? else {
        return Ok(None);
    };

    let outcome = match mode {
        Mode::File => ops::file::read(&path),
        Mode::Json => ops::json::read(&path),
        Mode::Xml => ops::xml::read(&path),
        Mode::Zip => ops::archive::info(&path),
    };
    report(console, outcome)?;
    Ok(Some(()))
}

fn run_delete<R: BufRead, W: Write>(console: &mut Console<R, W>, mode: Mode) -> Result<Option<()>> {
    let Some(path) = prompt_path(console)? else {
        return Ok(None);
    };

    let outcome = match mode {
        Mode::Zip => ops::archive::delete(&path),
        _ => ops::file::delete(&path),
    };
    report(console, outcome)?;
    Ok(Some(()))
}

/// Interactive assembly of a JSON record. An unparseable age or
/// student flag aborts the command with an invalid-input error.
fn prompt_record<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Option<Record>> {
    let Some(name) = console.prompt("Enter your name: ")? else {
        return Ok(None);
    };
    let Some(age_raw) = console.prompt("Enter your age: ")? else {
        return Ok(None);
    };
    let age = age_raw
        .parse::<u32>()
        .map_err(|_| DeskError::Input(format!("not a valid age: {}", age_raw)))?;
    let Some(flag) = console.prompt("Are you a student (1 for yes, 0 for no): ")? else {
        return Ok(None);
    };
    let is_student = match flag.as_str() {
        "1" => true,
        "0" => false,
        _ => {
            return Err(DeskError::Input(format!(
                "expected 1 or 0, got: {}",
                flag
            )))
        }
    };

    Ok(Some(Record {
        name,
        age,
        is_student,
    }))
}

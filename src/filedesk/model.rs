use crate::error::DeskError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The operation set the inner command loop dispatches to.
///
/// Carried as a plain parameter through the loop; nothing stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    File,
    Json,
    Xml,
    Zip,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::File => "file",
            Mode::Json => "JSON",
            Mode::Xml => "XML",
            Mode::Zip => "ZIP",
        }
    }
}

/// One command token of the inner loop. Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Create,
    Read,
    Delete,
    Exit,
}

impl FromStr for Command {
    type Err = DeskError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "create" => Ok(Command::Create),
            "read" => Ok(Command::Read),
            "delete" => Ok(Command::Delete),
            "exit" => Ok(Command::Exit),
            _ => Err(DeskError::Input(format!("unknown command: {}", token))),
        }
    }
}

/// The JSON-mode value: one person-shaped record, written wholesale and
/// destroyed with its file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub age: u32,
    pub is_student: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_tokens_are_exact_and_case_sensitive() {
        assert_eq!("create".parse::<Command>().unwrap(), Command::Create);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Exit);
        assert!("Create".parse::<Command>().is_err());
        assert!("create ".parse::<Command>().is_err());
        assert!("quit".parse::<Command>().is_err());
    }
}

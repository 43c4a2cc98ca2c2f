use crate::error::Result;
use std::fmt::Display;
use std::io::{BufRead, Write};

/// The interactive I/O port. Production wires this to locked
/// stdin/stdout; tests wire it to a `Cursor` and a `Vec<u8>`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print the prompt (no newline), then read one line. Returns `None`
    /// on end of input, which unwinds the menu cleanly.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

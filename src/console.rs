//! Terminal I/O collaborator.
//!
//! Prompting, parsing, and the re-prompt loop for malformed numeric input
//! all live here, so the model layer never sees a parse failure. Generic
//! over the reader and writer so tests can script a session with `Cursor`
//! input and a `Vec<u8>` sink.

use crate::error::{FinanceError, Result};
use crate::money::Money;
use log::debug;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Line-oriented console over a buffered reader and a writer.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Console { reader, writer }
    }

    /// Writes a line of text to the console.
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Prompts and reads one raw line of text, possibly empty.
    ///
    /// Returns [`FinanceError::InputClosed`] when the input stream has ended.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(FinanceError::InputClosed);
        }
        Ok(line.trim_end().to_string())
    }

    /// Prompts until a syntactically valid integer is entered.
    pub fn read_integer(&mut self, prompt: &str) -> Result<i64> {
        self.read_number(prompt)
    }

    /// Prompts until a syntactically valid decimal amount is entered.
    pub fn read_decimal(&mut self, prompt: &str) -> Result<Money> {
        self.read_number(prompt)
    }

    /// Re-prompts indefinitely until the entered line parses as `T`.
    fn read_number<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    debug!("Rejected non-numeric input {:?}", line);
                    self.write_line("Invalid input. Please enter a number.")?;
                }
            }
        }
    }
}

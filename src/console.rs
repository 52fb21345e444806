//! Line-oriented terminal I/O shared by the menu and the features.

use std::{
    fmt::Display,
    io::{BufRead, Write},
};

use anyhow::{Context, Result, bail};

use crate::signal::{Interrupted, is_interrupt};

/// Owns the input and output streams for the whole run.
///
/// Generic over the streams so tests can drive the program from a
/// `Cursor` and capture everything written into a `Vec<u8>`.
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I, O> Console<I, O>
where
    I: BufRead,
    O: Write,
{
    #[must_use]
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Prints `text` without a newline, then reads one line of input.
    ///
    /// Parameters:
    ///   - `text`: prompt shown before the cursor
    ///
    /// Returns: the line with its trailing newline removed. Fails with
    /// [`Interrupted`] on Ctrl+C and with a plain error at end of input.
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;
        self.read_line()
    }

    /// Prints one line of output.
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}").context("Failed to write to standard output")
    }

    /// Prints an empty line.
    pub fn blank(&mut self) -> Result<()> {
        self.say("")
    }

    /// Gives back the output stream, e.g. to inspect what a test run printed.
    pub fn into_output(self) -> O {
        self.output
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = match self.input.read_line(&mut line) {
            Ok(read) => read,
            Err(e) if is_interrupt(&e) => return Err(Interrupted.into()),
            Err(e) => return Err(e).context("Failed to read from standard input"),
        };

        if read == 0 {
            bail!("Standard input closed");
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

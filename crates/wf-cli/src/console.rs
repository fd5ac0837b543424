//! Line-based console over any reader and writer

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::CliError;
use crate::palette::{self, Palette};

/// Prompted line input plus colored output
pub struct Console<R, W> {
    input: R,
    output: W,
    palette: Palette,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, palette: Palette) -> Self {
        Self {
            input,
            output,
            palette,
        }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{}", self.palette.paint(palette::FG_BLUE, prompt))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn println(&mut self, text: impl Display) -> Result<(), CliError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn println_colored(&mut self, color: &str, text: impl Display) -> Result<(), CliError> {
        let painted = self.palette.paint(color, text);
        self.println(painted)
    }

    pub fn success(&mut self, text: impl Display) -> Result<(), CliError> {
        self.println_colored(palette::FG_GREEN, text)
    }

    pub fn hint(&mut self, text: impl Display) -> Result<(), CliError> {
        self.println_colored(palette::FG_GRAY, text)
    }

    pub fn error(&mut self, error: impl Display) -> Result<(), CliError> {
        self.println_colored(palette::FG_RED, format!("error: {error}"))
    }
}

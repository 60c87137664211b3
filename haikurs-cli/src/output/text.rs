//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use haikurs_core::Haiku;
use std::io::{self, Write};

/// Plain text formatter - three lines per haiku, separated by a blank line
pub struct TextFormatter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_haiku(&mut self, haiku: &Haiku, _source: &str) -> Result<()> {
        if self.written > 0 {
            writeln!(self.writer)?;
        }
        for line in haiku.lines() {
            writeln!(self.writer, "{line}")?;
        }
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

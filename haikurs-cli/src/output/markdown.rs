//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use haikurs_core::Haiku;
use std::io::Write;

/// Markdown formatter - one blockquote per haiku
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    haiku_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            haiku_count: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn format_haiku(&mut self, haiku: &Haiku, source: &str) -> Result<()> {
        self.haiku_count += 1;
        writeln!(self.writer, "### {}. `{}`", self.haiku_count, source)?;
        writeln!(self.writer)?;
        // Two trailing spaces force a line break inside the quote
        writeln!(self.writer, "> {}  ", haiku.line0)?;
        writeln!(self.writer, "> {}  ", haiku.line1)?;
        writeln!(self.writer, "> {}", haiku.line2)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total haiku: {}*", self.haiku_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::pond;

    #[test]
    fn test_numbered_blockquotes() {
        let mut formatter = MarkdownFormatter::new(Vec::new());
        formatter.format_haiku(&pond(), "pond.txt").unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        assert!(output.starts_with("### 1. `pond.txt`\n"));
        assert!(output.contains("> An old silent pond  \n"));
        assert!(output.contains("> with a splash of sound.\n"));
        assert!(output.ends_with("*Total haiku: 1*\n"));
    }
}

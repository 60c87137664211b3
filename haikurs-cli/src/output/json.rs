//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use haikurs_core::Haiku;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs haiku as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<HaikuRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct HaikuRecord {
    /// File the haiku was found in
    pub source: String,
    #[serde(flatten)]
    pub haiku: Haiku,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_haiku(&mut self, haiku: &Haiku, source: &str) -> Result<()> {
        self.records.push(HaikuRecord {
            source: source.to_string(),
            haiku: haiku.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

//! Output formatting module

use std::io::Write;

use anyhow::Result;
use haikurs_core::Haiku;
use serde::{Deserialize, Serialize};

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output one accepted haiku found in `source`
    fn format_haiku(&mut self, haiku: &Haiku, source: &str) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Three lines per haiku, blank line between
    #[default]
    Text,
    /// JSON array of haiku with their source file
    Json,
    /// Markdown blockquotes
    Markdown,
}

/// Box the formatter for `format` around `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use haikurs_core::{Fingerprint, Haiku};

    pub(crate) const POND: &str =
        "An old silent pond sees a frog jump into it with a splash of sound.";

    pub(crate) fn pond() -> Haiku {
        Haiku {
            line0: "An old silent pond".to_string(),
            line1: "sees a frog jump into it".to_string(),
            line2: "with a splash of sound.".to_string(),
            source_sentence: POND.to_string(),
            fingerprint: Fingerprint::of(POND),
        }
    }

    /// Writer whose bytes stay readable after the formatter takes ownership
    #[derive(Clone, Default)]
    pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}

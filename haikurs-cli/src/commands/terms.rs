//! Terms command implementation

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use haikurs_core::HaikuPipeline;

use super::init_logging;
use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};

/// Arguments for the terms command
#[derive(Debug, Args)]
pub struct TermsArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Syllable override CSV
    #[arg(long, value_name = "FILE")]
    pub overrides: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl TermsArgs {
    /// Execute the terms command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let mut settings = CliConfig::load(self.config.as_deref())?;
        if let Some(path) = &self.overrides {
            settings.resources.overrides = Some(path.clone());
            settings.resources.disable_overrides = false;
        }
        let pipeline = HaikuPipeline::with_config(settings.core_config()?)
            .context("Failed to initialize haiku pipeline")?;

        let files = resolve_patterns(&self.input)?;
        let mut out = io::stdout().lock();

        for path in &files {
            if files.len() > 1 {
                writeln!(out, "==> {} <==", path.display())?;
            }
            let body = FileReader::read_text(path)?;
            write_terms(&pipeline, &body, &mut out)?;
        }
        out.flush()?;

        Ok(())
    }
}

/// Each sentence of `body`, then one `term<TAB>count` line per term
///
/// Unresolvable terms print `?` instead of a count.
pub fn write_terms<W: Write>(pipeline: &HaikuPipeline, body: &str, out: &mut W) -> Result<()> {
    let detector = pipeline.detector();
    let extractor = detector.extractor();

    for sentence in detector.segmenter().segment(body) {
        let annotated = extractor.annotate(sentence);
        let total: Option<u32> = annotated.iter().map(|(_, count)| count.as_ref().ok()).sum();

        match total {
            Some(total) => writeln!(out, "{sentence} [{total}]")?,
            None => writeln!(out, "{sentence} [?]")?,
        }
        for (surface, count) in annotated {
            match count {
                Ok(n) => writeln!(out, "  {surface}\t{n}")?,
                Err(e) => {
                    log::debug!("{e}");
                    writeln!(out, "  {surface}\t?")?
                }
            }
        }
    }

    Ok(())
}

//! Overrides command implementation

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use haikurs_core::{HaikuPipeline, SyllableCounter};

use super::init_logging;
use crate::config::CliConfig;

/// Arguments for the overrides command
#[derive(Debug, Args)]
pub struct OverridesArgs {
    /// Override CSV to audit (default: the embedded table)
    #[arg(long, value_name = "FILE")]
    pub overrides: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress the summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl OverridesArgs {
    /// Execute the overrides command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let mut settings = CliConfig::load(self.config.as_deref())?;
        if let Some(path) = &self.overrides {
            settings.resources.overrides = Some(path.clone());
        }
        settings.resources.disable_overrides = false;

        let pipeline = HaikuPipeline::with_config(settings.core_config()?)
            .context("Failed to initialize haiku pipeline")?;
        let counter = pipeline.detector().counter();

        let mut out = io::stdout().lock();
        let redundant = write_redundant(counter, &mut out)?;
        out.flush()?;

        if !self.quiet {
            eprintln!(
                "{redundant} of {} override(s) are redundant",
                counter.overrides().len()
            );
        }

        Ok(())
    }
}

/// Write redundant entries as `term,count` lines; returns how many
pub fn write_redundant<W: Write>(counter: &SyllableCounter, out: &mut W) -> Result<usize> {
    let redundant = counter.redundant_overrides();
    for (term, count) in &redundant {
        writeln!(out, "{term},{count}")?;
    }
    Ok(redundant.len())
}

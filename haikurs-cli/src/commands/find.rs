//! Find command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use haikurs_core::{ArticleReport, HaikuPipeline};
use rayon::prelude::*;

use super::init_logging;
use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the find command
#[derive(Debug, Args)]
pub struct FindArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text, or the config file's choice]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding lexicon lists
    #[arg(long, value_name = "DIR")]
    pub lexicons: Option<PathBuf>,

    /// Syllable override CSV
    #[arg(long, value_name = "FILE")]
    pub overrides: Option<PathBuf>,

    /// Print every candidate without moderation
    #[arg(long)]
    pub no_moderation: bool,

    /// Report rejected candidates on stderr
    #[arg(long)]
    pub explain: bool,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short = 't', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl FindArgs {
    /// Execute the find command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting haiku search");
        log::debug!("Arguments: {:?}", self);

        let settings = self.settings()?;
        let pipeline = HaikuPipeline::with_config(settings.core_config()?)
            .context("Failed to initialize haiku pipeline")?;

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} article(s) to scan", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let threads = self.thread_count();
        log::debug!("Using {threads} worker thread(s)");
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build worker pool")?;

        let moderate = settings.moderation.enabled;
        let reports = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let report = scan_article(&pipeline, path, moderate)?;
                    progress.file_completed(&path.display().to_string());
                    Ok(report)
                })
                .collect::<Result<Vec<_>>>()
        })?;
        progress.finish();

        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };
        let format = self.format.unwrap_or(settings.output.default_format);
        let mut formatter = create_formatter(format, writer, settings.output.pretty_json);

        let mut accepted = 0;
        for (path, report) in files.iter().zip(&reports) {
            let source = path.display().to_string();
            for haiku in &report.accepted {
                formatter.format_haiku(haiku, &source)?;
            }
            accepted += report.accepted.len();

            if settings.moderation.explain {
                explain(&source, report);
            }
        }
        formatter.finish()?;

        log::info!(
            "Found {accepted} haiku in {} article(s), {} rejected",
            files.len(),
            reports.iter().map(|r| r.rejected.len()).sum::<usize>()
        );

        Ok(())
    }

    /// Config file settings with command-line flags applied on top
    fn settings(&self) -> Result<CliConfig> {
        let mut settings = CliConfig::load(self.config.as_deref())?;

        if let Some(dir) = &self.lexicons {
            settings.resources.lexicons = Some(dir.clone());
        }
        if let Some(path) = &self.overrides {
            settings.resources.overrides = Some(path.clone());
            settings.resources.disable_overrides = false;
        }
        if self.no_moderation {
            settings.moderation.enabled = false;
        }
        if self.explain {
            settings.moderation.explain = true;
        }

        Ok(settings)
    }

    fn thread_count(&self) -> usize {
        self.threads
            .filter(|&n| n > 0)
            .unwrap_or_else(num_cpus::get)
    }
}

/// Detect (and optionally moderate) the haiku of one article file
fn scan_article(pipeline: &HaikuPipeline, path: &Path, moderate: bool) -> Result<ArticleReport> {
    let body = FileReader::read_text(path)?;

    if !moderate {
        return Ok(ArticleReport {
            accepted: pipeline.find_haikus(body.as_str()).collect(),
            ..Default::default()
        });
    }

    let meta = FileReader::read_meta(path)?;
    Ok(pipeline.process_article(&meta, &body))
}

fn explain(source: &str, report: &ArticleReport) {
    if let Some(reason) = &report.screened {
        eprintln!("{source}: skipped article ({reason})");
    }
    for (haiku, reason) in &report.rejected {
        eprintln!("{source}: rejected ({reason}): {}", haiku.source_sentence);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const POND: &str = "An old silent pond sees a frog jump into it with a splash of sound.";
    const MURDER: &str = "An old silent pond sees a frog murdered by it with a splash of sound.";

    fn args(input: &str) -> FindArgs {
        FindArgs {
            input: vec![input.to_string()],
            output: None,
            format: None,
            config: None,
            lexicons: None,
            overrides: None,
            no_moderation: false,
            explain: false,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("haikurs.toml");
        fs::write(
            &config_path,
            "[resources]\ndisable_overrides = true\n\n[output]\ndefault_format = \"json\"\n",
        )
        .unwrap();

        let mut args = args("a.txt");
        args.config = Some(config_path);
        args.overrides = Some(PathBuf::from("custom.csv"));
        args.no_moderation = true;

        let settings = args.settings().unwrap();
        assert_eq!(settings.output.default_format, OutputFormat::Json);
        assert!(!settings.resources.disable_overrides);
        assert_eq!(
            settings.resources.overrides,
            Some(PathBuf::from("custom.csv"))
        );
        assert!(!settings.moderation.enabled);
    }

    #[test]
    fn test_thread_count() {
        let mut args = args("a.txt");
        assert_eq!(args.thread_count(), num_cpus::get());
        args.threads = Some(3);
        assert_eq!(args.thread_count(), 3);
        args.threads = Some(0);
        assert_eq!(args.thread_count(), num_cpus::get());
    }

    #[test]
    fn test_scan_article_moderation() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("story.txt");
        fs::write(&path, format!("{POND} {MURDER}")).unwrap();
        let pipeline = HaikuPipeline::new().unwrap();

        let moderated = scan_article(&pipeline, &path, true).unwrap();
        assert_eq!(moderated.accepted.len(), 1);
        assert_eq!(moderated.rejected.len(), 1);

        let raw = scan_article(&pipeline, &path, false).unwrap();
        assert_eq!(raw.accepted.len(), 2);
        assert!(raw.rejected.is_empty());
    }

    #[test]
    fn test_scan_article_sidecar_screens() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("story.txt");
        fs::write(&path, POND).unwrap();
        fs::write(FileReader::meta_path(&path), r#"{"tags": ["Looting"]}"#).unwrap();
        let pipeline = HaikuPipeline::new().unwrap();

        let report = scan_article(&pipeline, &path, true).unwrap();
        assert!(report.screened.is_some());
        assert!(report.accepted.is_empty());
    }
}

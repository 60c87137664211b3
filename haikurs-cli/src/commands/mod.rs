//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod find;
pub mod overrides;
pub mod terms;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find publishable haiku in article files
    Find(find::FindArgs),

    /// Show the syllable count of every term, sentence by sentence
    Terms(terms::TermsArgs),

    /// List override entries the counter already gets right
    Overrides(overrides::OverridesArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Find(args) => args.execute(),
            Commands::Terms(args) => args.execute(),
            Commands::Overrides(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the `-v` count.
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        let env = env_logger::Env::default().default_filter_or(log_level);
        // A second initialization only happens under test harnesses
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_parse_find() {
        let argv = "haikurs find -i a.txt -i news/*.txt -f json -t 2 --explain -vv";
        let cli = TestCli::try_parse_from(argv.split_whitespace()).unwrap();

        match cli.command {
            Commands::Find(args) => {
                assert_eq!(args.input, ["a.txt", "news/*.txt"]);
                assert_eq!(args.format, Some(crate::output::OutputFormat::Json));
                assert_eq!(args.threads, Some(2));
                assert!(args.explain);
                assert!(!args.no_moderation);
                assert_eq!(args.verbose, 2);
            }
            other => panic!("expected find, got {other:?}"),
        }
    }

    #[test]
    fn test_find_requires_input() {
        assert!(TestCli::try_parse_from(["haikurs", "find"]).is_err());
    }

    #[test]
    fn test_parse_overrides() {
        let argv = "haikurs overrides --overrides x.csv";
        let cli = TestCli::try_parse_from(argv.split_whitespace()).unwrap();
        assert!(matches!(cli.command, Commands::Overrides(_)));
    }

    #[test]
    fn test_parse_terms() {
        let cli = TestCli::try_parse_from(["haikurs", "terms", "-i", "a.txt"]).unwrap();
        assert!(matches!(cli.command, Commands::Terms(_)));
    }
}

//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{check::CheckArgs, completions::CompletionsArgs};

#[derive(Parser)]
#[command(name = "cardiag")]
#[command(author, version, about = "Vehicle record diagnostics")]
#[command(long_about = "Vehicle record diagnostics\n\nChecks vehicle records for missing identifying fields, missing required parts and parts in non-working condition.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose (debug) logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Diagnose one or more vehicle records
    Check(CheckArgs),

    /// Show required part quotas and working conditions
    Quotas,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable messages
    #[default]
    Text,
    /// JSON format (for programming)
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Parse a format name from configuration, case-insensitively
    pub fn from_config(value: &str) -> Option<Self> {
        <OutputFormat as ValueEnum>::from_str(value, true).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_format_from_config() {
        assert_eq!(OutputFormat::from_config("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_config("yaml"), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::from_config("xml"), None);
    }

    #[test]
    fn test_parse_check_args() {
        let cli = Cli::try_parse_from(["cardiag", "check", "a.yaml", "fleet", "--keep-going", "-f", "json"])
            .unwrap();
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.paths.len(), 2);
                assert!(args.keep_going);
                assert_eq!(args.format, Some(OutputFormat::Json));
            }
            _ => panic!("expected check command"),
        }
    }
}

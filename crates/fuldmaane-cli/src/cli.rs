//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use fuldmaane_domain::{CalendarDate, Locale};
use std::path::PathBuf;

/// Fuldmåne - Is it full moon tonight?
#[derive(Debug, Parser)]
#[command(name = "fuldmaane")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// IANA timezone that decides the current date (e.g. Europe/Copenhagen)
    #[arg(short, long, global = true, env = "FULDMAANE_TIMEZONE")]
    pub timezone: Option<String>,

    /// Language of the output (da, en)
    #[arg(short, long, global = true)]
    pub locale: Option<Locale>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Terminal text (default)
    Text,
    /// JSON view model
    Json,
    /// HTML fragment
    Html,
    /// Verdict only
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show tonight's moon (default)
    Show(ShowArgs),

    /// List the next full moons
    Upcoming(UpcomingArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the show command.
#[derive(Debug, Default, Parser)]
pub struct ShowArgs {
    /// Date to report on instead of today (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<CalendarDate>,
}

/// Arguments for the upcoming command.
#[derive(Debug, Parser)]
pub struct UpcomingArgs {
    /// Number of full moons to list
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Start searching from this date instead of today (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<CalendarDate>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Html => crate::config::OutputFormat::Html,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

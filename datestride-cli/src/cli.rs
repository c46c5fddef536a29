//! Command-line interface definitions using Clap

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// datestride - generate calendar date sequences
#[derive(Parser)]
#[command(name = "datestride")]
#[command(version, about = "Generate sequences of calendar dates at a fixed interval", long_about = None)]
pub struct Cli {
    /// Enable verbose output (debug logging and error chains)
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Ignore DATESTRIDE_* environment variables
    #[arg(long = "args-only", global = true)]
    pub args_only: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand)]
pub enum Command {
    /// Print the dates of a sequence (aliases: ls)
    #[command(name = "list", aliases = &["ls"])]
    List(ListArgs),

    /// Check whether a date is part of a sequence
    #[command(name = "contains")]
    Contains(ContainsArgs),

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion(CompletionArgs),

    /// Show help for various topics
    #[command(name = "help-topic")]
    HelpTopic(HelpTopicArgs),
}

impl Command {
    pub fn command_name(&self) -> &'static str {
        match self {
            Command::List(_) => "list",
            Command::Contains(_) => "contains",
            Command::Completion(_) => "completion",
            Command::HelpTopic(_) => "help-topic",
        }
    }
}

/// Start, bound and step shared by the sequence commands
#[derive(Args)]
pub struct RangeArgs {
    /// First date of the sequence (YYYY-MM-DD)
    pub start: String,

    /// Stop before this date (exclusive end)
    #[arg(long = "to", conflicts_with = "through")]
    pub to: Option<String>,

    /// Stop at this date (inclusive end)
    #[arg(long = "through")]
    pub through: Option<String>,

    /// Step between dates, e.g. "7 days", "1 month", "2w"
    #[arg(long = "every", short = 'e')]
    pub every: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Print at most this many dates (required for unbounded sequences)
    #[arg(long = "limit", short = 'n')]
    pub limit: Option<usize>,

    /// Print the dates last first (bounded sequences only)
    #[arg(long = "reverse", short = 'r')]
    pub reverse: bool,

    /// Print the dates as a JSON array
    #[arg(long = "json", conflicts_with = "separator")]
    pub json: bool,

    /// Separator between dates (default: newline)
    #[arg(long = "separator", short = 's')]
    pub separator: Option<String>,
}

#[derive(Args)]
pub struct ContainsArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Date to look for (YYYY-MM-DD)
    pub date: String,
}

#[derive(Args)]
pub struct CompletionArgs {
    /// Shell to generate completion for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Output directory for completion files
    #[arg(long = "output-dir")]
    pub output_dir: Option<String>,
}

#[derive(Args)]
pub struct HelpTopicArgs {
    /// Help topic (dates, intervals, bounds, environment)
    #[arg(default_value = "general")]
    pub topic: String,
}

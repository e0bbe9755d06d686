//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Dashboard value formatter.
#[derive(Parser, Debug)]
#[command(name = "dashfmt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // === Global flags ===
    /// Output format [default: human]
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Shorthand for --format json
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log level
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Emit JSONL logs to stderr
    #[arg(long, global = true)]
    pub json_output: bool,

    /// Verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, colored on a terminal.
    Human,
    /// JSON envelope.
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Abbreviated currency (R$ 1,50M)
    Currency(CurrencyArgs),

    /// Abbreviated number (12,3M)
    Number(ValueArgs),

    /// Percentage (5,00%)
    Percent(PercentArgs),

    /// Full currency (R$ 1.234.567,89)
    FullCurrency(ValueArgs),

    /// Full number (1.234.567)
    FullNumber(ValueArgs),

    /// Chart-axis value, dispatched by kind
    Chart(KindArgs),

    /// Variance with sign, class and icon
    Variance(KindArgs),

    /// Persisted sidebar state
    Sidebar(SidebarArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// A single raw value. Non-numeric text, `null` and `NaN` are accepted and
/// format to the fallback.
#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Value to format
    #[arg(allow_hyphen_values = true, value_name = "VALUE")]
    pub value: String,
}

/// Arguments for the `currency` command.
#[derive(Args, Debug)]
pub struct CurrencyArgs {
    /// Value to format
    #[arg(allow_hyphen_values = true, value_name = "VALUE")]
    pub value: String,

    /// Show cents for values below one thousand
    #[arg(long)]
    pub cents: bool,
}

/// Arguments for the `percent` command.
#[derive(Args, Debug)]
pub struct PercentArgs {
    /// Value to format
    #[arg(allow_hyphen_values = true, value_name = "VALUE")]
    pub value: String,

    /// Fixed decimal places (default: 2 below 10, otherwise 1)
    #[arg(long, value_name = "N")]
    pub places: Option<usize>,
}

/// Arguments for the `chart` and `variance` commands.
#[derive(Args, Debug)]
pub struct KindArgs {
    /// Value to format
    #[arg(allow_hyphen_values = true, value_name = "VALUE")]
    pub value: String,

    /// Kind: moeda, numero, percentual (unknown kinds print the raw value)
    #[arg(long, value_name = "KIND")]
    pub kind: Option<String>,

    /// Reject unknown kinds instead of printing the raw value
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `sidebar` command.
#[derive(Args, Debug)]
pub struct SidebarArgs {
    #[command(subcommand)]
    pub action: SidebarCommand,

    /// State file (overrides config and DASHFMT_STATE_FILE)
    #[arg(long, value_name = "FILE", global = true)]
    pub state_file: Option<PathBuf>,
}

/// Sidebar actions.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarCommand {
    /// Show whether the sidebar is collapsed
    Status,
    /// Flip the collapsed state and persist it
    Toggle,
    /// Expand the sidebar and persist it
    Reset,
}

/// Config actions.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the resolved configuration
    Show,
    /// Print the config file path
    Path,
}

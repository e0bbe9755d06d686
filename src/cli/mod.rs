//! CLI commands.

pub mod args;
pub mod config;
pub mod format;
pub mod sidebar;

pub use args::{Cli, Commands, OutputFormat};

use crate::error::Result;
use crate::storage::ResolvedConfig;

/// Run one command and return its rendered output.
///
/// # Errors
/// Returns the command's error.
pub fn execute(command: &Commands, config: &ResolvedConfig) -> Result<String> {
    match command {
        Commands::Currency(args) => format::currency(args, config),
        Commands::Number(args) => format::number(args, config),
        Commands::Percent(args) => format::percent(args, config),
        Commands::FullCurrency(args) => format::full_currency(args, config),
        Commands::FullNumber(args) => format::full_number(args, config),
        Commands::Chart(args) => format::chart(args, config),
        Commands::Variance(args) => format::variance(args, config),
        Commands::Sidebar(args) => sidebar::execute(args, config),
        Commands::Config(command) => config::execute(*command, config),
    }
}

//! `dashfmt config`.

use serde::Serialize;

use crate::cli::args::{ConfigCommand, OutputFormat};
use crate::error::Result;
use crate::render::{human, robot};
use crate::storage::{DisplayConfig, ResolvedConfig};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigReport<'a> {
    config_file: String,
    config_file_exists: bool,
    display: &'a DisplayConfig,
    state_file: String,
    no_color: bool,
    pretty: bool,
}

/// Run a config action.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn execute(command: ConfigCommand, config: &ResolvedConfig) -> Result<String> {
    match command {
        ConfigCommand::Path => Ok(config.config_path.display().to_string()),
        ConfigCommand::Show => match config.format {
            OutputFormat::Human => Ok(human::render_config(config)),
            OutputFormat::Json => {
                let report = ConfigReport {
                    config_file: config.config_path.display().to_string(),
                    config_file_exists: config.config_path.exists(),
                    display: &config.display,
                    state_file: config.state_file.display().to_string(),
                    no_color: config.no_color,
                    pretty: config.pretty,
                };
                robot::render_envelope("config", report, config.pretty)
            }
        },
    }
}

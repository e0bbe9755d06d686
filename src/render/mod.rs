//! Output rendering for human and robot modes.

pub mod error;
pub mod human;
pub mod robot;

use crate::cli::args::OutputFormat;
use crate::core::models::{FormattedValue, SidebarReport, VarianceReport};
use crate::error::Result;

/// Render a formatted value.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render_value(
    command: &str,
    value: &FormattedValue,
    format: OutputFormat,
    pretty: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human::render_value(value)),
        OutputFormat::Json => robot::render_envelope(command, value, pretty),
    }
}

/// Render a variance.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render_variance(
    report: &VarianceReport,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human::render_variance(report, no_color)),
        OutputFormat::Json => robot::render_envelope("variance", report, pretty),
    }
}

/// Render sidebar state.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render_sidebar(
    report: &SidebarReport,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human::render_sidebar(report, no_color)),
        OutputFormat::Json => robot::render_envelope("sidebar", report, pretty),
    }
}

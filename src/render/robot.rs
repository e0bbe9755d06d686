//! Robot-mode output (JSON).
//!
//! Provides stable, token-efficient output for scripts.

use serde::Serialize;

use crate::core::models::RobotOutput;
use crate::error::Result;

/// Render any serializable value as JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_json<T: Serialize>(output: &T) -> Result<String> {
    Ok(serde_json::to_string(output)?)
}

/// Render any serializable value as pretty JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_json_pretty<T: Serialize>(output: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(output)?)
}

/// Wrap `data` in the envelope for `command` and render it.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_envelope<T: Serialize>(command: &str, data: T, pretty: bool) -> Result<String> {
    let output = RobotOutput::new(command, data);
    if pretty {
        render_json_pretty(&output)
    } else {
        render_json(&output)
    }
}

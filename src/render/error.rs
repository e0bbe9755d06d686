//! Error rendering for human and robot modes.

use colored::Colorize;
use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::DashError;

/// JSON shape of an error.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorJson<'a> {
    error_code: &'a str,
    category: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<String>,
}

impl<'a> ErrorJson<'a> {
    fn from_error(error: &'a DashError) -> Self {
        Self {
            error_code: error.error_code(),
            category: error.category().to_string(),
            message: error.to_string(),
            hint: error.hint(),
        }
    }
}

/// Render an error for stderr.
#[must_use]
pub fn render_error(
    error: &DashError,
    format: OutputFormat,
    no_color: bool,
    pretty: bool,
) -> String {
    match format {
        OutputFormat::Json => render_error_json(error, pretty),
        OutputFormat::Human => render_simple(error, no_color),
    }
}

/// Render error as structured JSON.
#[must_use]
pub fn render_error_json(error: &DashError, pretty: bool) -> String {
    let error_json = ErrorJson::from_error(error);
    let rendered = if pretty {
        serde_json::to_string_pretty(&error_json)
    } else {
        serde_json::to_string(&error_json)
    };
    rendered.unwrap_or_else(|_| render_simple(error, true))
}

fn render_simple(error: &DashError, no_color: bool) -> String {
    let label = format!("error[{}]", error.error_code());
    let label = if no_color {
        label
    } else {
        label.red().bold().to_string()
    };

    let mut out = format!("{label}: {error}");
    if let Some(hint) = error.hint() {
        out.push_str("\n  hint: ");
        out.push_str(&hint);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_error_has_code_and_hint() {
        let err = DashError::UnknownKind("bytes".into());
        let out = render_error(&err, OutputFormat::Human, true, false);
        assert!(out.starts_with("error[DASH-I001]: unknown value kind: bytes"));
        assert!(out.contains("hint: Valid kinds"));
    }

    #[test]
    fn json_error_fields() {
        let err = DashError::Config("bad".into());
        let out = render_error(&err, OutputFormat::Json, true, false);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["errorCode"], "DASH-C003");
        assert_eq!(json["category"], "Configuration error");
        assert!(json.get("hint").is_none());
    }
}

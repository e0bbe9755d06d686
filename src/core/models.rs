//! Output payloads and the JSON envelope for robot mode.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::format::{SignClass, TrendIcon, Variance};

/// Schema identifier written into every JSON envelope.
pub const SCHEMA_VERSION: &str = "dashfmt.v1";

/// Top-level JSON envelope for robot mode output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotOutput<T> {
    pub schema_version: String,
    pub generated_at: DateTime<Utc>,
    pub command: String,
    pub data: T,
}

impl<T> RobotOutput<T> {
    /// Create a new robot output envelope.
    pub fn new(command: impl Into<String>, data: T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            command: command.into(),
            data,
        }
    }
}

/// A single formatted value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedValue {
    /// Input as parsed; `None` for absent or non-numeric input.
    pub input: Option<f64>,
    /// Kind or formatter name used.
    pub kind: String,
    pub text: String,
}

/// A formatted variance with its display classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VarianceReport {
    pub kind: String,
    pub text: String,
    pub sign_class: SignClass,
    pub css_class: String,
    pub icon: TrendIcon,
    pub icon_class: String,
}

impl VarianceReport {
    #[must_use]
    pub fn new(kind: &str, variance: Variance) -> Self {
        Self {
            kind: kind.to_string(),
            css_class: variance.sign_class.css_class().to_string(),
            icon_class: variance.icon.css_class().to_string(),
            text: variance.text,
            sign_class: variance.sign_class,
            icon: variance.icon,
        }
    }
}

/// Sidebar state after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarReport {
    pub collapsed: bool,
    pub state_file: String,
}

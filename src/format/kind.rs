//! Value kinds and chart-axis dispatch.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::abbreviate::{abbreviate_currency, abbreviate_number, format_percentage};
use crate::error::DashError;

/// Kind used by [`format_for_chart`] when templates do not name one.
pub const DEFAULT_CHART_KIND: &str = "moeda";

/// Display kind of a dashboard value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Monetary value, abbreviated with the currency marker.
    Currency,
    /// Plain number, abbreviated.
    Number,
    /// Percentage.
    Percentage,
}

impl ValueKind {
    /// All kinds.
    pub const ALL: &'static [Self] = &[Self::Currency, Self::Number, Self::Percentage];

    /// Look up a kind by template name (case-insensitive).
    ///
    /// Accepts `moeda`, `numero`, `percentual` and English aliases.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "moeda" | "currency" | "monetary" => Some(Self::Currency),
            "numero" | "número" | "number" | "numeric" => Some(Self::Number),
            "percentual" | "percentage" | "percent" => Some(Self::Percentage),
            _ => None,
        }
    }

    /// Template name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Currency => "moeda",
            Self::Number => "numero",
            Self::Percentage => "percentual",
        }
    }

    /// Format with this kind's abbreviated formatter and default options.
    #[must_use]
    pub fn format(self, value: Option<f64>) -> String {
        match self {
            Self::Currency => abbreviate_currency(value, false),
            Self::Number => abbreviate_number(value),
            Self::Percentage => format_percentage(value, None),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueKind {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DashError::UnknownKind(s.to_string()))
    }
}

/// Magnitudes in `[RAW_DECIMAL_MIN, RAW_DECIMAL_MAX)` print in positional form.
const RAW_DECIMAL_MIN: f64 = 1e-6;
const RAW_DECIMAL_MAX: f64 = 1e21;

/// Plain string conversion of a raw value, with no rounding or locale.
///
/// Follows the dashboard's number-to-string rules: shortest round-trip
/// digits, exponent form (`1e+21`, `1e-7`) outside the positional range,
/// `NaN`/`Infinity` spelled out, and no sign on zero.
#[must_use]
pub fn raw_string(value: Option<f64>) -> String {
    let Some(v) = value else {
        return String::new();
    };

    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let magnitude = v.abs();
    if (RAW_DECIMAL_MIN..RAW_DECIMAL_MAX).contains(&magnitude) {
        return v.to_string();
    }

    let exponent_form = format!("{v:e}");
    match exponent_form.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => exponent_form,
    }
}

/// Format a value for a chart axis.
///
/// Unrecognized kinds fall back to [`raw_string`].
#[must_use]
pub fn format_for_chart(value: Option<f64>, kind: &str) -> String {
    ValueKind::from_name(kind).map_or_else(|| raw_string(value), |kind| kind.format(value))
}

//! Variance display: signed text plus sign class and trend icon.

use serde::Serialize;

use super::kind::{ValueKind, raw_string};

/// Kind used by [`format_variance`] when templates do not name one.
pub const DEFAULT_VARIANCE_KIND: &str = "percentual";

/// Semantic sign of a value, driving display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignClass {
    Positive,
    Negative,
    Neutral,
}

impl SignClass {
    /// Classify a value. Absent and NaN are neutral.
    #[must_use]
    pub fn of(value: Option<f64>) -> Self {
        match value {
            Some(v) if v > 0.0 => Self::Positive,
            Some(v) if v < 0.0 => Self::Negative,
            _ => Self::Neutral,
        }
    }

    /// Display class used by the dashboard templates.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Positive => "text-success",
            Self::Negative => "text-danger",
            Self::Neutral => "text-muted",
        }
    }

    /// Trend icon matching this sign.
    #[must_use]
    pub const fn icon(self) -> TrendIcon {
        match self {
            Self::Positive => TrendIcon::Up,
            Self::Negative => TrendIcon::Down,
            Self::Neutral => TrendIcon::Dash,
        }
    }
}

/// Directional icon tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendIcon {
    Up,
    Down,
    Dash,
}

impl TrendIcon {
    /// Icon class used by the dashboard templates.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Up => "fa-arrow-up",
            Self::Down => "fa-arrow-down",
            Self::Dash => "fa-minus",
        }
    }

    /// Terminal glyph.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Dash => "−",
        }
    }
}

/// Formatted variance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variance {
    pub text: String,
    pub sign_class: SignClass,
    pub icon: TrendIcon,
}

/// Format a variance with an explicit `+` for positive values.
///
/// `kind` is a template name (see [`ValueKind::from_name`]); unrecognized
/// kinds render the raw value.
///
/// ```
/// use dashfmt::format::{SignClass, TrendIcon, format_variance};
///
/// let v = format_variance(Some(7.0), "percentual");
/// assert_eq!(v.text, "+7,00%");
/// assert_eq!(v.sign_class, SignClass::Positive);
/// assert_eq!(v.icon, TrendIcon::Up);
/// ```
#[must_use]
pub fn format_variance(value: Option<f64>, kind: &str) -> Variance {
    let mut text =
        ValueKind::from_name(kind).map_or_else(|| raw_string(value), |k| k.format(value));

    let sign_class = SignClass::of(value);
    if sign_class == SignClass::Positive && !text.starts_with('+') {
        text.insert(0, '+');
    }

    Variance {
        text,
        sign_class,
        icon: sign_class.icon(),
    }
}

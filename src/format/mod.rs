//! Dashboard value formatting.
//!
//! Every formatter here is a total, pure function: absent (`None`),
//! non-numeric (`NaN`) and infinite inputs map to a fixed fallback instead of
//! failing. Output follows the pt-BR convention used by the dashboard:
//! `R$` marker, `,` decimal separator and, for full values, `.` grouping.
//!
//! | Function | Example |
//! |---|---|
//! | [`abbreviate_currency`] | `R$ 1,50M`, `R$ 125,0k`, `-R$ 12,00` |
//! | [`abbreviate_number`] | `1,50k`, `12,3M` |
//! | [`format_percentage`] | `5,00%`, `15,0%` |
//! | [`format_full_currency`] | `R$ 1.234.567,89` |
//! | [`format_full_number`] | `1.234.567` |
//! | [`format_for_chart`] | dispatch by kind name |
//! | [`format_variance`] | `+7,00%` with sign class and icon |

pub mod abbreviate;
pub mod fixed;
pub mod full;
pub mod kind;
pub mod scale;
pub mod variance;

pub use abbreviate::{
    CURRENCY_FALLBACK, CURRENCY_MARKER, NUMBER_FALLBACK, PERCENTAGE_FALLBACK,
    abbreviate_currency, abbreviate_number, format_percentage,
};
pub use full::{format_full_currency, format_full_number};
pub use kind::{DEFAULT_CHART_KIND, ValueKind, format_for_chart, raw_string};
pub use scale::Scale;
pub use variance::{DEFAULT_VARIANCE_KIND, SignClass, TrendIcon, Variance, format_variance};

/// Parse a raw template/CLI value into the formatter input.
///
/// Empty text, `null`, `undefined` and anything that is not a number become
/// `None`; `NaN` parses to `NaN` and is treated as invalid downstream.
#[must_use]
pub fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    match trimmed.to_lowercase().as_str() {
        "" | "null" | "undefined" | "none" => None,
        _ => trimmed.parse::<f64>().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_value_sentinels() {
        assert_eq!(parse_value("1500000"), Some(1_500_000.0));
        assert_eq!(parse_value(" -3.5 "), Some(-3.5));
        assert_eq!(parse_value("null"), None);
        assert_eq!(parse_value("undefined"), None);
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("abc"), None);
        assert!(parse_value("NaN").is_some_and(f64::is_nan));
    }

    #[test]
    fn fallbacks_are_idempotent() {
        for input in [None, Some(f64::NAN)] {
            for _ in 0..3 {
                assert_eq!(abbreviate_currency(input, false), CURRENCY_FALLBACK);
                assert_eq!(abbreviate_currency(input, true), CURRENCY_FALLBACK);
                assert_eq!(abbreviate_number(input), NUMBER_FALLBACK);
                assert_eq!(format_percentage(input, None), PERCENTAGE_FALLBACK);
            }
        }
    }
}

//! Abbreviated currency, number and percentage formatting.

use super::fixed::to_fixed_comma;
use super::scale::{Scale, auto_places};

/// Currency marker.
pub const CURRENCY_MARKER: &str = "R$";

/// Fallback for invalid input to [`abbreviate_currency`].
pub const CURRENCY_FALLBACK: &str = "R$ 0";
/// Fallback for invalid input to [`abbreviate_number`].
pub const NUMBER_FALLBACK: &str = "0";
/// Fallback for invalid input to [`format_percentage`].
pub const PERCENTAGE_FALLBACK: &str = "0%";

/// Keep only usable numbers: absent, NaN and infinite inputs are invalid.
pub(crate) fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

pub(crate) fn sign_prefix(value: f64) -> &'static str {
    if value < 0.0 { "-" } else { "" }
}

/// Render a magnitude with its k/M/B suffix. `unit_places` applies when the
/// magnitude is below one thousand.
fn abbreviate_magnitude(magnitude: f64, unit_places: usize) -> String {
    let scale = Scale::for_magnitude(magnitude);
    if scale == Scale::Unit {
        return to_fixed_comma(magnitude, unit_places);
    }

    let scaled = magnitude / scale.divisor();
    format!(
        "{}{}",
        to_fixed_comma(scaled, auto_places(scaled)),
        scale.suffix()
    )
}

/// Format a monetary value with k/M/B abbreviation.
///
/// `show_cents` only affects values below one thousand.
///
/// ```
/// use dashfmt::format::abbreviate_currency;
///
/// assert_eq!(abbreviate_currency(Some(1_500_000.0), false), "R$ 1,50M");
/// assert_eq!(abbreviate_currency(Some(125_000.0), false), "R$ 125,0k");
/// assert_eq!(abbreviate_currency(Some(-12.0), true), "-R$ 12,00");
/// assert_eq!(abbreviate_currency(None, false), "R$ 0");
/// ```
#[must_use]
pub fn abbreviate_currency(value: Option<f64>, show_cents: bool) -> String {
    let Some(value) = usable(value) else {
        return CURRENCY_FALLBACK.to_string();
    };

    let unit_places = if show_cents { 2 } else { 0 };
    format!(
        "{}{CURRENCY_MARKER} {}",
        sign_prefix(value),
        abbreviate_magnitude(value.abs(), unit_places)
    )
}

/// Format a plain number with k/M/B abbreviation.
///
/// Values below one thousand are rounded to an integer.
#[must_use]
pub fn abbreviate_number(value: Option<f64>) -> String {
    let Some(value) = usable(value) else {
        return NUMBER_FALLBACK.to_string();
    };

    format!(
        "{}{}",
        sign_prefix(value),
        abbreviate_magnitude(value.abs(), 0)
    )
}

/// Format a percentage.
///
/// With `decimal_places` unset, uses 2 places below 10 and 1 otherwise.
/// Positive values never get a leading `+`.
#[must_use]
pub fn format_percentage(value: Option<f64>, decimal_places: Option<usize>) -> String {
    let Some(value) = usable(value) else {
        return PERCENTAGE_FALLBACK.to_string();
    };

    let magnitude = value.abs();
    let places = decimal_places.unwrap_or_else(|| auto_places(magnitude));
    format!("{}{}%", sign_prefix(value), to_fixed_comma(magnitude, places))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_scales() {
        assert_eq!(abbreviate_currency(Some(1_500_000.0), false), "R$ 1,50M");
        assert_eq!(abbreviate_currency(Some(125_000.0), false), "R$ 125,0k");
        assert_eq!(abbreviate_currency(Some(9_800_000_000.0), false), "R$ 9,80B");
        assert_eq!(abbreviate_currency(Some(12_300_000.0), false), "R$ 12,3M");
        assert_eq!(abbreviate_currency(Some(1_230.0), false), "R$ 1,23k");
        assert_eq!(abbreviate_currency(Some(1_000.0), false), "R$ 1,00k");
    }

    #[test]
    fn currency_unscaled_cents() {
        assert_eq!(abbreviate_currency(Some(12.0), false), "R$ 12");
        assert_eq!(abbreviate_currency(Some(12.0), true), "R$ 12,00");
        assert_eq!(abbreviate_currency(Some(999.456), true), "R$ 999,46");
        assert_eq!(abbreviate_currency(Some(0.0), false), "R$ 0");
    }

    #[test]
    fn currency_cents_do_not_affect_scaled_values() {
        assert_eq!(
            abbreviate_currency(Some(2_500.0), true),
            abbreviate_currency(Some(2_500.0), false)
        );
    }

    #[test]
    fn currency_negative() {
        assert_eq!(abbreviate_currency(Some(-12.0), true), "-R$ 12,00");
        assert_eq!(abbreviate_currency(Some(-1_500_000.0), false), "-R$ 1,50M");
        assert_eq!(abbreviate_currency(Some(-0.0), false), "R$ 0");
    }

    #[test]
    fn currency_invalid() {
        assert_eq!(abbreviate_currency(None, false), "R$ 0");
        assert_eq!(abbreviate_currency(Some(f64::NAN), true), "R$ 0");
        assert_eq!(abbreviate_currency(Some(f64::INFINITY), false), "R$ 0");
    }

    #[test]
    fn number_scales() {
        assert_eq!(abbreviate_number(Some(1_500.0)), "1,50k");
        assert_eq!(abbreviate_number(Some(12_300_000.0)), "12,3M");
        assert_eq!(abbreviate_number(Some(999.6)), "1000");
        assert_eq!(abbreviate_number(Some(42.4)), "42");
        assert_eq!(abbreviate_number(Some(-2_000_000_000.0)), "-2,00B");
    }

    #[test]
    fn number_invalid() {
        assert_eq!(abbreviate_number(None), "0");
        assert_eq!(abbreviate_number(Some(f64::NAN)), "0");
    }

    #[test]
    fn percentage_auto_places() {
        assert_eq!(format_percentage(Some(5.0), None), "5,00%");
        assert_eq!(format_percentage(Some(15.0), None), "15,0%");
        assert_eq!(format_percentage(Some(-3.0), None), "-3,00%");
        assert_eq!(format_percentage(Some(-12.34), None), "-12,3%");
        assert_eq!(format_percentage(Some(0.0), None), "0,00%");
    }

    #[test]
    fn percentage_explicit_places() {
        assert_eq!(format_percentage(Some(5.0), Some(0)), "5%");
        assert_eq!(format_percentage(Some(15.0), Some(3)), "15,000%");
    }

    #[test]
    fn percentage_never_adds_plus() {
        assert!(!format_percentage(Some(7.0), None).starts_with('+'));
    }

    #[test]
    fn percentage_invalid() {
        assert_eq!(format_percentage(None, None), "0%");
        assert_eq!(format_percentage(Some(f64::NAN), Some(2)), "0%");
    }
}

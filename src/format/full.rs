//! Full (non-abbreviated) currency and number formatting.

use super::abbreviate::{CURRENCY_MARKER, sign_prefix};
use super::fixed::to_grouped;

/// Decimal places for [`format_full_currency`].
pub const FULL_CURRENCY_PLACES: usize = 2;
/// Decimal places for [`format_full_number`].
pub const FULL_NUMBER_PLACES: usize = 0;

/// Absent and non-finite values count as zero here, not as invalid.
fn or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Format a monetary value in full, e.g. `R$ 1.234.567,89`.
#[must_use]
pub fn format_full_currency(value: Option<f64>) -> String {
    let value = or_zero(value);
    format!(
        "{}{CURRENCY_MARKER} {}",
        sign_prefix(value),
        to_grouped(value.abs(), FULL_CURRENCY_PLACES)
    )
}

/// Format a number in full, e.g. `1.234.567`.
#[must_use]
pub fn format_full_number(value: Option<f64>) -> String {
    let value = or_zero(value);
    format!(
        "{}{}",
        sign_prefix(value),
        to_grouped(value.abs(), FULL_NUMBER_PLACES)
    )
}

//! Fixed-point rendering in the pt-BR convention.
//!
//! Rounding works on the exact binary value of the input, and exact ties
//! round away from zero (`2.5` becomes `3`, `0.125` becomes `0.13`).

/// Decimal separator.
pub const DECIMAL_SEPARATOR: char = ',';
/// Thousands separator used by the full (non-abbreviated) formatters.
pub const GROUP_SEPARATOR: char = '.';
/// Upper bound on requested decimal places.
pub const MAX_DECIMAL_PLACES: usize = 100;

/// Largest magnitude at which every integer is representable in an `f64`.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Render a non-negative magnitude with `places` decimals and a `.` point.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn to_fixed(magnitude: f64, places: usize) -> String {
    let places = places.min(MAX_DECIMAL_PLACES);

    if is_exact_tie(magnitude, places) {
        let factor = 10f64.powi(places as i32);
        let scaled = magnitude * factor;
        if scaled < EXACT_INTEGER_LIMIT {
            let rounded = (scaled.floor() + 1.0) / factor;
            return format!("{rounded:.places$}");
        }
    }

    format!("{magnitude:.places$}")
}

/// Like [`to_fixed`], with the decimal separator swapped to a comma.
#[must_use]
pub fn to_fixed_comma(magnitude: f64, places: usize) -> String {
    to_fixed(magnitude, places).replacen('.', &DECIMAL_SEPARATOR.to_string(), 1)
}

/// Like [`to_fixed_comma`], with `.` inserted every three integer digits.
#[must_use]
pub fn to_grouped(magnitude: f64, places: usize) -> String {
    let fixed = to_fixed(magnitude, places);
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut out = group_digits(integer);
    if let Some(fraction) = fraction {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(fraction);
    }
    out
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// True when `value * 10^places` lies exactly halfway between two integers.
///
/// That happens iff the binary denominator of `value` is exactly
/// `2^(places + 1)`; multiplying by powers of two is exact.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn is_exact_tie(value: f64, places: usize) -> bool {
    if !value.is_finite() {
        return false;
    }
    let half = value * 2f64.powi(places as i32);
    let full = value * 2f64.powi(places as i32 + 1);
    half.is_finite() && full.is_finite() && half.fract() != 0.0 && full.fract() == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(1.5, 0), "2");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.25, 1), "0.3");
    }

    #[test]
    fn non_ties_use_exact_value() {
        // 1.005 is stored slightly below the midpoint.
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(1.5, 2), "1.50");
        assert_eq!(to_fixed(125.0, 1), "125.0");
        assert_eq!(to_fixed(9.8, 2), "9.80");
    }

    #[test]
    fn comma_separator() {
        assert_eq!(to_fixed_comma(1.5, 2), "1,50");
        assert_eq!(to_fixed_comma(12.0, 0), "12");
    }

    #[test]
    fn grouping() {
        assert_eq!(to_grouped(0.0, 2), "0,00");
        assert_eq!(to_grouped(999.0, 0), "999");
        assert_eq!(to_grouped(1_000.0, 0), "1.000");
        assert_eq!(to_grouped(1_234_567.891, 2), "1.234.567,89");
        assert_eq!(to_grouped(100_000.0, 2), "100.000,00");
    }

    #[test]
    fn places_are_clamped() {
        let s = to_fixed(1.0, 500);
        assert_eq!(s.len(), 2 + MAX_DECIMAL_PLACES);
    }
}

//! Magnitude thresholds for abbreviated values.

/// Values at or above this are shown in thousands (`k`).
pub const THOUSAND: f64 = 1e3;
/// Values at or above this are shown in millions (`M`).
pub const MILLION: f64 = 1e6;
/// Values at or above this are shown in billions (`B`).
pub const BILLION: f64 = 1e9;

/// Scaled magnitudes below this get an extra decimal place.
///
/// Keeps three significant digits for small scaled values (`1,23M`) and
/// two-plus-one for larger ones (`12,3M`).
pub const PRECISION_PIVOT: f64 = 10.0;

/// Decimal places for a scaled magnitude below [`PRECISION_PIVOT`].
pub const FINE_PLACES: usize = 2;
/// Decimal places for a scaled magnitude at or above [`PRECISION_PIVOT`].
pub const COARSE_PLACES: usize = 1;

/// Abbreviation scale, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scale {
    /// No scaling.
    Unit,
    /// Thousands.
    Thousand,
    /// Millions.
    Million,
    /// Billions.
    Billion,
}

impl Scale {
    /// Pick the scale for a non-negative magnitude.
    #[must_use]
    pub fn for_magnitude(magnitude: f64) -> Self {
        if magnitude >= BILLION {
            Self::Billion
        } else if magnitude >= MILLION {
            Self::Million
        } else if magnitude >= THOUSAND {
            Self::Thousand
        } else {
            Self::Unit
        }
    }

    /// Divisor applied to the magnitude.
    #[must_use]
    pub const fn divisor(self) -> f64 {
        match self {
            Self::Unit => 1.0,
            Self::Thousand => THOUSAND,
            Self::Million => MILLION,
            Self::Billion => BILLION,
        }
    }

    /// Suffix appended after the number.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Unit => "",
            Self::Thousand => "k",
            Self::Million => "M",
            Self::Billion => "B",
        }
    }
}

/// Decimal places for a scaled magnitude (or any value using the same rule).
#[must_use]
pub fn auto_places(magnitude: f64) -> usize {
    if magnitude < PRECISION_PIVOT {
        FINE_PLACES
    } else {
        COARSE_PLACES
    }
}

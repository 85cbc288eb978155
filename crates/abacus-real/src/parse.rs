use std::str::FromStr;

use abacus_core::{ExactInteger, Exactness, ParseNumberError, Radix};
use abacus_frac::Fraction;

use crate::float;
use crate::real::Real;

impl Real {
    /// Parses a literal body at the given radix and exactness.
    ///
    /// Bodies are integers, fractions, and, at radix ten only, decimal
    /// floats and the signed sentinels. [`Exactness::Exact`] refuses bodies
    /// that are naturally inexact; [`Exactness::Inexact`] converts exact
    /// bodies through the closest double.
    pub fn parse_radix(text: &str, radix: Radix, exactness: Exactness) -> Option<Self> {
        match exactness {
            Exactness::Exact => Self::parse_exact_body(text, radix),
            Exactness::Inexact => Self::parse_body(text, radix).map(|value| value.inexact()),
            Exactness::Unspecified => Self::parse_body(text, radix),
        }
    }

    fn parse_body(text: &str, radix: Radix) -> Option<Self> {
        if let Some(value) = Self::parse_exact_body(text, radix) {
            return Some(value);
        }
        if radix == Radix::Decimal {
            return float::parse_decimal(text).map(Real::float);
        }
        None
    }

    fn parse_exact_body(text: &str, radix: Radix) -> Option<Self> {
        if let Some(value) = ExactInteger::parse_radix(text, radix) {
            return Some(Real::integer(value));
        }
        Fraction::parse_radix(text, radix).map(Real::fraction)
    }
}

impl FromStr for Real {
    type Err = ParseNumberError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Real::parse_radix(text, Radix::Decimal, Exactness::Unspecified)
            .ok_or_else(|| ParseNumberError::malformed(text))
    }
}

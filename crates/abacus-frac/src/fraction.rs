use std::fmt;
use std::str::FromStr;

use abacus_core::{ExactInteger, ParseNumberError, Radix};

/// An exact rational number kept in lowest terms.
///
/// The denominator is always strictly positive and the sign lives on the
/// numerator. A zero numerator forces the denominator to 1, so every value
/// has exactly one representation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    pub(crate) numerator: ExactInteger,
    pub(crate) denominator: ExactInteger,
}

impl Fraction {
    /// Creates a fraction from the given parts, reduced to lowest terms.
    ///
    /// # Panics
    ///
    /// Panics when `denominator` is zero.
    pub fn new(numerator: ExactInteger, denominator: ExactInteger) -> Self {
        assert!(
            !denominator.is_zero(),
            "denominator must be a nonzero exact integer"
        );
        let (numerator, denominator) = reduce(numerator, denominator);
        Self {
            numerator,
            denominator,
        }
    }

    /// Creates a whole-number fraction with denominator 1.
    pub fn from_integer(value: ExactInteger) -> Self {
        Self {
            numerator: value,
            denominator: ExactInteger::from(1),
        }
    }

    /// Returns the signed numerator.
    pub fn numerator(&self) -> &ExactInteger {
        &self.numerator
    }

    /// Returns the strictly positive denominator.
    pub fn denominator(&self) -> &ExactInteger {
        &self.denominator
    }

    /// Returns `true` when the fraction is zero.
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns `true` when the fraction is less than zero.
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Returns `true` when the fraction is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    /// Returns `true` when the denominator is 1.
    pub fn is_integer(&self) -> bool {
        self.denominator == ExactInteger::from(1)
    }

    /// Returns the numerator of a whole-number fraction.
    ///
    /// # Panics
    ///
    /// Panics when the denominator is not 1.
    pub fn to_exact_integer(&self) -> ExactInteger {
        assert!(self.is_integer(), "{self} is not an exact integer");
        self.numerator.clone()
    }

    /// Converts to the nearest `f64` by dividing the parts in doubles.
    pub fn to_f64(&self) -> f64 {
        self.numerator.to_f64() / self.denominator.to_f64()
    }

    /// Parses `<numerator>/<denominator>` in the given radix.
    ///
    /// The numerator may carry a sign; the denominator must be positive or
    /// unsigned and nonzero. Text without a `/` parses as a whole number.
    pub fn parse_radix(text: &str, radix: Radix) -> Option<Self> {
        match text.split_once('/') {
            Some((numerator_text, denominator_text)) => {
                if denominator_text.starts_with('-') {
                    return None;
                }
                let numerator = ExactInteger::parse_radix(numerator_text, radix)?;
                let denominator = ExactInteger::parse_radix(denominator_text, radix)?;
                if denominator.is_zero() {
                    return None;
                }
                Some(Self::new(numerator, denominator))
            }
            None => ExactInteger::parse_radix(text, radix).map(Self::from_integer),
        }
    }
}

fn reduce(
    mut numerator: ExactInteger,
    mut denominator: ExactInteger,
) -> (ExactInteger, ExactInteger) {
    if denominator == ExactInteger::from(1) {
        return (numerator, denominator);
    }
    if denominator.is_negative() {
        numerator = -numerator;
        denominator = -denominator;
    }
    if numerator.is_zero() {
        return (numerator, ExactInteger::from(1));
    }
    let divisor = numerator.gcd(&denominator);
    if divisor == ExactInteger::from(1) {
        (numerator, denominator)
    } else {
        (
            numerator.quotient(&divisor),
            denominator.quotient(&divisor),
        )
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = ParseNumberError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse_radix(text, Radix::Decimal).ok_or_else(|| ParseNumberError::malformed(text))
    }
}

impl From<ExactInteger> for Fraction {
    fn from(value: ExactInteger) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Self::from_integer(ExactInteger::from(value))
    }
}

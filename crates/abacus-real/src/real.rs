use std::fmt;

use abacus_core::ExactInteger;
use abacus_frac::Fraction;
use num_bigint::BigInt;
use num_traits::{One, ToPrimitive, Zero};

use crate::float;

/// A real number in one of three representations.
///
/// The representation is the exactness: integer and fraction values are
/// exact, doubles are inexact. Fractions with denominator one collapse to
/// the integer representation on construction, so the fraction arm always
/// carries a denominator greater than one.
#[derive(Clone)]
pub struct Real(pub(crate) Repr);

#[derive(Clone)]
pub(crate) enum Repr {
    Integer(ExactInteger),
    Fraction(Fraction),
    Float(f64),
}

impl Real {
    /// The not-a-number double.
    pub const NAN: Real = Real(Repr::Float(f64::NAN));

    /// Positive infinity.
    pub const INFINITY: Real = Real(Repr::Float(f64::INFINITY));

    /// Negative infinity.
    pub const NEG_INFINITY: Real = Real(Repr::Float(f64::NEG_INFINITY));

    pub(crate) fn integer(value: ExactInteger) -> Self {
        Real(Repr::Integer(value))
    }

    // Keeps denominator-one out of the fraction arm.
    pub(crate) fn fraction(value: Fraction) -> Self {
        if value.is_integer() {
            Real(Repr::Integer(value.to_exact_integer()))
        } else {
            Real(Repr::Fraction(value))
        }
    }

    pub(crate) fn float(value: f64) -> Self {
        Real(Repr::Float(value))
    }

    /// Builds the reduced ratio of two exact integers.
    ///
    /// # Panics
    /// Panics when `denominator` is zero.
    pub fn rational(numerator: ExactInteger, denominator: ExactInteger) -> Self {
        Self::fraction(Fraction::new(numerator, denominator))
    }

    /// True when the value carries no representation error.
    pub fn is_exact(&self) -> bool {
        !matches!(self.0, Repr::Float(_))
    }

    /// True when the value is represented in floating point.
    pub fn is_inexact(&self) -> bool {
        matches!(self.0, Repr::Float(_))
    }

    /// True for integer values, including floats whose checked machine-word
    /// conversion round-trips exactly.
    pub fn is_integer(&self) -> bool {
        match &self.0 {
            Repr::Integer(_) => true,
            Repr::Fraction(_) => false,
            Repr::Float(value) => float::is_integral(*value),
        }
    }

    /// True for every exact value and for finite floats.
    pub fn is_rational(&self) -> bool {
        match &self.0 {
            Repr::Integer(_) | Repr::Fraction(_) => true,
            Repr::Float(value) => value.is_finite(),
        }
    }

    /// False only for infinite and NaN floats.
    pub fn is_finite(&self) -> bool {
        match &self.0 {
            Repr::Integer(_) | Repr::Fraction(_) => true,
            Repr::Float(value) => value.is_finite(),
        }
    }

    /// True when the value is the not-a-number double.
    pub fn is_nan(&self) -> bool {
        match &self.0 {
            Repr::Float(value) => value.is_nan(),
            _ => false,
        }
    }

    /// True for zero of either exactness.
    pub fn is_zero(&self) -> bool {
        match &self.0 {
            Repr::Integer(value) => value.is_zero(),
            Repr::Fraction(value) => value.is_zero(),
            Repr::Float(value) => *value == 0.0,
        }
    }

    /// True when strictly below zero; negative zero does not qualify.
    pub fn is_negative(&self) -> bool {
        match &self.0 {
            Repr::Integer(value) => value.is_negative(),
            Repr::Fraction(value) => value.is_negative(),
            Repr::Float(value) => *value < 0.0,
        }
    }

    /// True when strictly above zero.
    pub fn is_positive(&self) -> bool {
        match &self.0 {
            Repr::Integer(value) => value.is_positive(),
            Repr::Fraction(value) => value.is_positive(),
            Repr::Float(value) => *value > 0.0,
        }
    }

    /// Converts to the exact domain.
    ///
    /// Integers and fractions are already exact; a finite float reconstructs
    /// the exact binary value it denotes, so `exact(2.5)` is `5/2` and
    /// `exact(2.0)` is `2`.
    ///
    /// # Panics
    /// Panics when the value is not a rational number.
    pub fn exact(&self) -> Real {
        match &self.0 {
            Repr::Float(value) if value.is_finite() => float::to_exact(*value),
            Repr::Float(_) => panic!("{self} is not a rational number"),
            _ => self.clone(),
        }
    }

    /// Converts to the inexact domain through the closest double.
    pub fn inexact(&self) -> Real {
        Real::float(self.to_f64())
    }

    /// Numerator of the value viewed as a reduced ratio.
    ///
    /// Floats answer with the numerator of their exact reconstruction,
    /// converted back to floating point.
    ///
    /// # Panics
    /// Panics when the value is not a rational number.
    pub fn numerator(&self) -> Real {
        match &self.0 {
            Repr::Integer(_) => self.clone(),
            Repr::Fraction(value) => Real::integer(value.numerator().clone()),
            Repr::Float(value) if value.is_finite() => {
                Real::float(float::to_exact(*value).numerator().to_f64())
            }
            Repr::Float(_) => panic!("{self} is not a rational number"),
        }
    }

    /// Denominator of the value viewed as a reduced ratio; integers answer
    /// exact one.
    ///
    /// # Panics
    /// Panics when the value is not a rational number.
    pub fn denominator(&self) -> Real {
        match &self.0 {
            Repr::Integer(_) => Real::integer(ExactInteger::from(1)),
            Repr::Fraction(value) => Real::integer(value.denominator().clone()),
            Repr::Float(value) if value.is_finite() => {
                Real::float(float::to_exact(*value).denominator().to_f64())
            }
            Repr::Float(_) => panic!("{self} is not a rational number"),
        }
    }

    /// Closest double-precision value.
    pub fn to_f64(&self) -> f64 {
        match &self.0 {
            Repr::Integer(value) => value.to_f64(),
            Repr::Fraction(value) => value.to_f64(),
            Repr::Float(value) => *value,
        }
    }

    /// Closest single-precision value.
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }
}

macro_rules! checked_conversions {
    ($($(#[$doc:meta])* $name:ident -> $ty:ty),* $(,)?) => {
        impl Real {
            $(
                $(#[$doc])*
                pub fn $name(&self) -> Option<$ty> {
                    match &self.0 {
                        Repr::Integer(value) => value.$name(),
                        Repr::Fraction(value) => value.truncate().$name(),
                        Repr::Float(value) => value.$name(),
                    }
                }
            )*
        }
    };
}

checked_conversions! {
    /// Truncated value as `i8` when it fits.
    to_i8 -> i8,
    /// Truncated value as `i16` when it fits.
    to_i16 -> i16,
    /// Truncated value as `i32` when it fits.
    to_i32 -> i32,
    /// Truncated value as `i64` when it fits.
    to_i64 -> i64,
    /// Truncated value as `u8` when it fits.
    to_u8 -> u8,
    /// Truncated value as `u16` when it fits.
    to_u16 -> u16,
    /// Truncated value as `u32` when it fits.
    to_u32 -> u32,
    /// Truncated value as `u64` when it fits.
    to_u64 -> u64,
}

macro_rules! from_integer_primitive {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Real {
                fn from(value: $ty) -> Self {
                    Real::integer(ExactInteger::from(value))
                }
            }
        )*
    };
}

from_integer_primitive!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl From<BigInt> for Real {
    fn from(value: BigInt) -> Self {
        Real::integer(ExactInteger::from(value))
    }
}

impl From<ExactInteger> for Real {
    fn from(value: ExactInteger) -> Self {
        Real::integer(value)
    }
}

impl From<Fraction> for Real {
    fn from(value: Fraction) -> Self {
        Real::fraction(value)
    }
}

impl From<f64> for Real {
    fn from(value: f64) -> Self {
        Real::float(value)
    }
}

impl From<f32> for Real {
    fn from(value: f32) -> Self {
        Real::float(f64::from(value))
    }
}

impl Zero for Real {
    fn zero() -> Self {
        Real::integer(ExactInteger::zero())
    }

    fn is_zero(&self) -> bool {
        Real::is_zero(self)
    }
}

impl One for Real {
    fn one() -> Self {
        Real::integer(ExactInteger::one())
    }
}

impl Default for Real {
    fn default() -> Self {
        Zero::zero()
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Integer(value) => write!(f, "{value}"),
            Repr::Fraction(value) => write!(f, "{value}"),
            Repr::Float(value) => f.write_str(&float::render(*value)),
        }
    }
}

impl fmt::Debug for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Integer(value) => write!(f, "Real(integer: {value})"),
            Repr::Fraction(value) => write!(f, "Real(fraction: {value})"),
            Repr::Float(value) => write!(f, "Real(float: {})", float::render(*value)),
        }
    }
}

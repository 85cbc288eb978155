use std::fmt;

use abacus_core::ExactInteger;
use abacus_cplx::Complex;
use abacus_frac::Fraction;
use abacus_real::Real;
use num_bigint::BigInt;

/// A number of the tower: real or complex.
///
/// This is a dispatch wrapper, not a representation of its own. Every
/// operation forwards to the real or complex path, promoting a real operand
/// to complex when the other side is.
#[derive(Clone)]
pub struct Number(pub(crate) Repr);

#[derive(Clone)]
pub(crate) enum Repr {
    Real(Real),
    Complex(Complex),
}

impl Number {
    /// Builds the reduced ratio of two exact integers.
    ///
    /// # Panics
    /// Panics when `denominator` is zero.
    pub fn rational(numerator: ExactInteger, denominator: ExactInteger) -> Self {
        Number(Repr::Real(Real::rational(numerator, denominator)))
    }

    /// Builds a complex number from rectangular parts, reconciling their
    /// exactness.
    pub fn complex(real: Real, imaginary: Real) -> Self {
        Number(Repr::Complex(Complex::new(real, imaginary)))
    }

    /// Builds the inexact complex number at the given magnitude and angle.
    pub fn polar(magnitude: &Real, angle: &Real) -> Self {
        Number(Repr::Complex(Complex::from_polar(magnitude, angle)))
    }

    /// True when the value lives on the real path.
    pub fn is_real(&self) -> bool {
        matches!(self.0, Repr::Real(_))
    }

    /// True when the value carries a complex representation, even one with
    /// a zero imaginary part.
    pub fn is_complex(&self) -> bool {
        matches!(self.0, Repr::Complex(_))
    }

    /// Collapses a complex value with a zero imaginary part to its real
    /// part; everything else is unchanged.
    pub fn simplified(&self) -> Number {
        match &self.0 {
            Repr::Complex(value) => match value.to_real() {
                Some(real) => Number(Repr::Real(real)),
                None => self.clone(),
            },
            Repr::Real(_) => self.clone(),
        }
    }

    /// Real-line view backing ordering and the integer-domain operations.
    ///
    /// # Panics
    /// Panics when the value has a nonzero imaginary part.
    pub(crate) fn as_real(&self) -> Real {
        match &self.0 {
            Repr::Real(value) => value.clone(),
            Repr::Complex(value) => value
                .to_real()
                .unwrap_or_else(|| panic!("{self} is not a real number")),
        }
    }

    /// Complex view used when either operand of a binary op is complex.
    pub(crate) fn to_complex(&self) -> Complex {
        match &self.0 {
            Repr::Real(value) => Complex::from_real(value.clone()),
            Repr::Complex(value) => value.clone(),
        }
    }

    /// True when the value carries no representation error.
    pub fn is_exact(&self) -> bool {
        match &self.0 {
            Repr::Real(value) => value.is_exact(),
            Repr::Complex(value) => value.is_exact(),
        }
    }

    /// True when the value is represented in floating point.
    pub fn is_inexact(&self) -> bool {
        !self.is_exact()
    }

    /// True for real-valued integers, under the real layer's predicate.
    pub fn is_integer(&self) -> bool {
        match &self.0 {
            Repr::Real(value) => value.is_integer(),
            Repr::Complex(value) => value.to_real().is_some_and(|real| real.is_integer()),
        }
    }

    /// True for real-valued rationals: exact values and finite floats.
    pub fn is_rational(&self) -> bool {
        match &self.0 {
            Repr::Real(value) => value.is_rational(),
            Repr::Complex(value) => value.to_real().is_some_and(|real| real.is_rational()),
        }
    }

    /// True when every part is finite.
    pub fn is_finite(&self) -> bool {
        match &self.0 {
            Repr::Real(value) => value.is_finite(),
            Repr::Complex(value) => value.is_finite(),
        }
    }

    /// True when any part is NaN.
    pub fn is_nan(&self) -> bool {
        match &self.0 {
            Repr::Real(value) => value.is_nan(),
            Repr::Complex(value) => value.is_nan(),
        }
    }

    /// True for zero of either kind and exactness.
    pub fn is_zero(&self) -> bool {
        match &self.0 {
            Repr::Real(value) => value.is_zero(),
            Repr::Complex(value) => value.is_zero(),
        }
    }

    /// True when strictly below zero.
    ///
    /// # Panics
    /// Panics when the value has a nonzero imaginary part.
    pub fn is_negative(&self) -> bool {
        self.as_real().is_negative()
    }

    /// True when strictly above zero.
    ///
    /// # Panics
    /// Panics when the value has a nonzero imaginary part.
    pub fn is_positive(&self) -> bool {
        self.as_real().is_positive()
    }

    /// True when the integer value is even.
    ///
    /// # Panics
    /// Panics when the value is not an integer or is genuinely complex.
    pub fn is_even(&self) -> bool {
        self.as_real().is_even()
    }

    /// True when the integer value is odd.
    ///
    /// # Panics
    /// Panics when the value is not an integer or is genuinely complex.
    pub fn is_odd(&self) -> bool {
        self.as_real().is_odd()
    }

    /// True when `self` orders strictly below `other`.
    ///
    /// # Panics
    /// Panics when either operand has a nonzero imaginary part.
    pub fn is_less(&self, other: &Number) -> bool {
        self.as_real() < other.as_real()
    }

    /// True when `self` orders at or below `other`.
    ///
    /// # Panics
    /// Panics when either operand has a nonzero imaginary part.
    pub fn is_less_or_equal(&self, other: &Number) -> bool {
        self.as_real() <= other.as_real()
    }

    /// True when `self` orders strictly above `other`.
    ///
    /// # Panics
    /// Panics when either operand has a nonzero imaginary part.
    pub fn is_greater(&self, other: &Number) -> bool {
        self.as_real() > other.as_real()
    }

    /// True when `self` orders at or above `other`.
    ///
    /// # Panics
    /// Panics when either operand has a nonzero imaginary part.
    pub fn is_greater_or_equal(&self, other: &Number) -> bool {
        self.as_real() >= other.as_real()
    }

    /// Real part; a real number answers itself.
    pub fn real_part(&self) -> Real {
        match &self.0 {
            Repr::Real(value) => value.clone(),
            Repr::Complex(value) => value.real_part(),
        }
    }

    /// Imaginary part; a real number answers a zero of its exactness.
    pub fn imaginary_part(&self) -> Real {
        match &self.0 {
            Repr::Real(value) => {
                if value.is_exact() {
                    Real::from(0)
                } else {
                    Real::from(0.0)
                }
            }
            Repr::Complex(value) => value.imaginary_part(),
        }
    }

    /// Distance from zero; real values keep their exactness.
    pub fn magnitude(&self) -> Number {
        match &self.0 {
            Repr::Real(value) => Number(Repr::Real(value.abs())),
            Repr::Complex(value) => Number(Repr::Real(value.magnitude())),
        }
    }

    /// Polar angle: zero or π on the real line, the two-argument
    /// arctangent in the plane.
    pub fn angle(&self) -> Number {
        match &self.0 {
            Repr::Real(value) => Number(Repr::Real(value.angle())),
            Repr::Complex(value) => Number(Repr::Real(value.angle())),
        }
    }

    /// Converts every part to the exact domain.
    ///
    /// # Panics
    /// Panics when any part is not finite.
    pub fn exact(&self) -> Number {
        match &self.0 {
            Repr::Real(value) => Number(Repr::Real(value.exact())),
            Repr::Complex(value) => Number(Repr::Complex(value.exact())),
        }
    }

    /// Converts every part to floating point.
    pub fn inexact(&self) -> Number {
        match &self.0 {
            Repr::Real(value) => Number(Repr::Real(value.inexact())),
            Repr::Complex(value) => Number(Repr::Complex(value.inexact())),
        }
    }

    /// Numerator of the value viewed as a reduced ratio.
    ///
    /// # Panics
    /// Panics when the value is not rational or is genuinely complex.
    pub fn numerator(&self) -> Number {
        Number(Repr::Real(self.as_real().numerator()))
    }

    /// Denominator of the value viewed as a reduced ratio.
    ///
    /// # Panics
    /// Panics when the value is not rational or is genuinely complex.
    pub fn denominator(&self) -> Number {
        Number(Repr::Real(self.as_real().denominator()))
    }

    /// Closest double of the real-line view.
    ///
    /// # Panics
    /// Panics when the value has a nonzero imaginary part.
    pub fn to_f64(&self) -> f64 {
        self.as_real().to_f64()
    }

    /// Closest single-precision value of the real-line view.
    ///
    /// # Panics
    /// Panics when the value has a nonzero imaginary part.
    pub fn to_f32(&self) -> f32 {
        self.as_real().to_f32()
    }
}

macro_rules! rounding_family {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        impl Number {
            $(
                $(#[$doc])*
                pub fn $name(&self) -> Number {
                    Number(Repr::Real(self.as_real().$name()))
                }
            )*
        }
    };
}

rounding_family! {
    /// Smallest integral value not below the real-line view.
    ///
    /// # Panics
    /// Panics when the value has a nonzero imaginary part.
    ceiling,
    /// Largest integral value not above the real-line view.
    ///
    /// # Panics
    /// Panics when the value has a nonzero imaginary part.
    floor,
    /// Nearest integral value; exact ties go to the even neighbor.
    ///
    /// # Panics
    /// Panics when the value has a nonzero imaginary part.
    round,
    /// Integral value toward zero.
    ///
    /// # Panics
    /// Panics when the value has a nonzero imaginary part.
    truncate,
}

macro_rules! integer_domain {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        impl Number {
            $(
                $(#[$doc])*
                pub fn $name(&self, other: &Number) -> Number {
                    Number(Repr::Real(self.as_real().$name(&other.as_real())))
                }
            )*
        }
    };
}

integer_domain! {
    /// Truncating integer division.
    ///
    /// # Panics
    /// Panics when either operand is not an integer, is genuinely complex,
    /// or when `other` is zero.
    quotient,
    /// Remainder of truncating division; the sign follows the dividend.
    ///
    /// # Panics
    /// Panics when either operand is not an integer, is genuinely complex,
    /// or when `other` is zero.
    remainder,
    /// Remainder of flooring division; the sign follows the divisor.
    ///
    /// # Panics
    /// Panics when either operand is not an integer, is genuinely complex,
    /// or when `other` is zero.
    modulo,
    /// Greatest common divisor, never negative.
    ///
    /// # Panics
    /// Panics when either operand is not an integer or is genuinely complex.
    gcd,
    /// Least common multiple, never negative.
    ///
    /// # Panics
    /// Panics when either operand is not an integer or is genuinely complex.
    lcm,
    /// Shifts the integer value left by `other` bits; a negative count
    /// shifts right.
    ///
    /// # Panics
    /// Panics when either value is not an integer or is genuinely complex.
    shift_left,
    /// Shifts the integer value right by `other` bits; a negative count
    /// shifts left.
    ///
    /// # Panics
    /// Panics when either value is not an integer or is genuinely complex.
    shift_right,
}

macro_rules! checked_conversions {
    ($($(#[$doc:meta])* $name:ident -> $ty:ty),* $(,)?) => {
        impl Number {
            $(
                $(#[$doc])*
                pub fn $name(&self) -> Option<$ty> {
                    match &self.0 {
                        Repr::Real(value) => value.$name(),
                        Repr::Complex(value) => {
                            value.to_real().and_then(|real| real.$name())
                        }
                    }
                }
            )*
        }
    };
}

checked_conversions! {
    /// Truncated value as `i8` when real-valued and in range.
    to_i8 -> i8,
    /// Truncated value as `i16` when real-valued and in range.
    to_i16 -> i16,
    /// Truncated value as `i32` when real-valued and in range.
    to_i32 -> i32,
    /// Truncated value as `i64` when real-valued and in range.
    to_i64 -> i64,
    /// Truncated value as `u8` when real-valued and in range.
    to_u8 -> u8,
    /// Truncated value as `u16` when real-valued and in range.
    to_u16 -> u16,
    /// Truncated value as `u32` when real-valued and in range.
    to_u32 -> u32,
    /// Truncated value as `u64` when real-valued and in range.
    to_u64 -> u64,
}

macro_rules! from_real_convertible {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number(Repr::Real(Real::from(value)))
                }
            }
        )*
    };
}

from_real_convertible!(
    i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64, BigInt, ExactInteger, Fraction
);

impl From<Real> for Number {
    fn from(value: Real) -> Self {
        Number(Repr::Real(value))
    }
}

impl From<Complex> for Number {
    fn from(value: Complex) -> Self {
        Number(Repr::Complex(value))
    }
}

impl Default for Number {
    fn default() -> Self {
        Number(Repr::Real(Real::default()))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Real(value) => write!(f, "{value}"),
            Repr::Complex(value) => write!(f, "{value}"),
        }
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Real(value) => write!(f, "Number(real: {value})"),
            Repr::Complex(value) => write!(f, "Number(complex: {value})"),
        }
    }
}

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};

/// Exact signed integer of unbounded range.
///
/// Values start on a machine-word representation and promote to arbitrary
/// precision the moment an operation would overflow. Promotion is one-way:
/// arithmetic never demotes a promoted value back to the machine word, even
/// when the numeric result would fit.
#[derive(Clone)]
pub struct ExactInteger(pub(crate) Repr);

#[derive(Clone)]
pub(crate) enum Repr {
    Small(i64),
    Large(BigInt),
}

impl ExactInteger {
    pub(crate) fn small(value: i64) -> Self {
        Self(Repr::Small(value))
    }

    pub(crate) fn large(value: BigInt) -> Self {
        Self(Repr::Large(value))
    }

    /// Runs a binary operation on the machine-word path, falling back to
    /// arbitrary precision when either operand is already promoted or the
    /// checked operation reports overflow.
    pub(crate) fn widen_binary(
        &self,
        other: &Self,
        small_op: impl Fn(i64, i64) -> Option<i64>,
        large_op: impl Fn(&BigInt, &BigInt) -> BigInt,
    ) -> Self {
        match (&self.0, &other.0) {
            (Repr::Small(a), Repr::Small(b)) => match small_op(*a, *b) {
                Some(value) => Self::small(value),
                None => Self::large(large_op(&BigInt::from(*a), &BigInt::from(*b))),
            },
            _ => Self::large(large_op(&self.to_bigint(), &other.to_bigint())),
        }
    }

    /// Copy of the value in arbitrary precision.
    pub fn to_bigint(&self) -> BigInt {
        match &self.0 {
            Repr::Small(value) => BigInt::from(*value),
            Repr::Large(value) => value.clone(),
        }
    }

    /// Converts an integral finite float; `None` for NaN, infinities, and
    /// values with a fractional part.
    pub fn try_from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value.trunc() != value {
            return None;
        }
        match value.to_i64() {
            Some(small) => Some(Self::small(small)),
            None => BigInt::from_f64(value).map(Self::large),
        }
    }

    /// Closest double-precision value, saturating to an infinity when the
    /// magnitude exceeds the float range.
    pub fn to_f64(&self) -> f64 {
        match &self.0 {
            Repr::Small(value) => *value as f64,
            Repr::Large(value) => value.to_f64().unwrap_or_else(|| {
                if value.is_negative() {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            }),
        }
    }

    /// Closest single-precision value, saturating like [`Self::to_f64`].
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    /// True when the value is zero.
    pub fn is_zero(&self) -> bool {
        match &self.0 {
            Repr::Small(value) => *value == 0,
            Repr::Large(value) => Zero::is_zero(value),
        }
    }

    /// True when the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        match &self.0 {
            Repr::Small(value) => *value < 0,
            Repr::Large(value) => Signed::is_negative(value),
        }
    }

    /// True when the value is strictly positive.
    pub fn is_positive(&self) -> bool {
        match &self.0 {
            Repr::Small(value) => *value > 0,
            Repr::Large(value) => Signed::is_positive(value),
        }
    }

    /// True when the value is divisible by two.
    pub fn is_even(&self) -> bool {
        match &self.0 {
            Repr::Small(value) => value.is_even(),
            Repr::Large(value) => value.is_even(),
        }
    }

    /// True when the value is not divisible by two.
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }
}

macro_rules! checked_conversions {
    ($($(#[$doc:meta])* $name:ident -> $ty:ty),* $(,)?) => {
        impl ExactInteger {
            $(
                $(#[$doc])*
                pub fn $name(&self) -> Option<$ty> {
                    match &self.0 {
                        Repr::Small(value) => <$ty>::try_from(*value).ok(),
                        Repr::Large(value) => value.$name(),
                    }
                }
            )*
        }
    };
}

checked_conversions! {
    /// Value as `i8` when it fits.
    to_i8 -> i8,
    /// Value as `i16` when it fits.
    to_i16 -> i16,
    /// Value as `i32` when it fits.
    to_i32 -> i32,
    /// Value as `i64` when it fits.
    to_i64 -> i64,
    /// Value as `u8` when it fits.
    to_u8 -> u8,
    /// Value as `u16` when it fits.
    to_u16 -> u16,
    /// Value as `u32` when it fits.
    to_u32 -> u32,
    /// Value as `u64` when it fits.
    to_u64 -> u64,
}

macro_rules! from_fitting_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ExactInteger {
                fn from(value: $ty) -> Self {
                    Self::small(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ExactInteger {
                fn from(value: $ty) -> Self {
                    match i64::try_from(value) {
                        Ok(small) => Self::small(small),
                        Err(_) => Self::large(BigInt::from(value)),
                    }
                }
            }
        )*
    };
}

from_fitting_int!(i8, i16, i32, i64, u8, u16, u32);
from_wide_int!(u64, i128, u128, usize, isize);

impl From<BigInt> for ExactInteger {
    fn from(value: BigInt) -> Self {
        match value.to_i64() {
            Some(small) => Self::small(small),
            None => Self::large(value),
        }
    }
}

impl From<ExactInteger> for BigInt {
    fn from(value: ExactInteger) -> Self {
        match value.0 {
            Repr::Small(small) => BigInt::from(small),
            Repr::Large(large) => large,
        }
    }
}

impl PartialEq for ExactInteger {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ExactInteger {}

impl PartialOrd for ExactInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExactInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Repr::Small(a), Repr::Small(b)) => a.cmp(b),
            (Repr::Large(a), Repr::Large(b)) => a.cmp(b),
            (Repr::Small(a), Repr::Large(b)) => match b.to_i64() {
                Some(b) => a.cmp(&b),
                None if Signed::is_negative(b) => Ordering::Greater,
                None => Ordering::Less,
            },
            (Repr::Large(a), Repr::Small(b)) => match a.to_i64() {
                Some(a) => a.cmp(b),
                None if Signed::is_negative(a) => Ordering::Less,
                None => Ordering::Greater,
            },
        }
    }
}

impl Hash for ExactInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.0 {
            Repr::Small(value) => value.hash(state),
            Repr::Large(value) => match value.to_i64() {
                Some(small) => small.hash(state),
                None => value.hash(state),
            },
        }
    }
}

impl Zero for ExactInteger {
    fn zero() -> Self {
        Self::small(0)
    }

    fn is_zero(&self) -> bool {
        ExactInteger::is_zero(self)
    }
}

impl One for ExactInteger {
    fn one() -> Self {
        Self::small(1)
    }
}

impl Default for ExactInteger {
    fn default() -> Self {
        Self::small(0)
    }
}

impl fmt::Display for ExactInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Small(value) => write!(f, "{value}"),
            Repr::Large(value) => write!(f, "{value}"),
        }
    }
}

impl fmt::Debug for ExactInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Small(value) => write!(f, "ExactInteger(small: {value})"),
            Repr::Large(value) => write!(f, "ExactInteger(large: {value})"),
        }
    }
}

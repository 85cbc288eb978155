use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Signed;

use crate::integer::{ExactInteger, Repr};

impl ExactInteger {
    /// Absolute value, promoting when negating the most negative word.
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// Truncating division quotient, taking the sign of the dividend pair.
    ///
    /// # Panics
    /// Panics when `other` is zero.
    pub fn quotient(&self, other: &Self) -> Self {
        assert!(!other.is_zero(), "exact integer division by zero");
        self.widen_binary(other, i64::checked_div, |a, b| a / b)
    }

    /// Truncating division remainder; the result takes the sign of the
    /// dividend.
    ///
    /// # Panics
    /// Panics when `other` is zero.
    pub fn remainder(&self, other: &Self) -> Self {
        assert!(!other.is_zero(), "exact integer division by zero");
        self.widen_binary(other, i64::checked_rem, |a, b| a % b)
    }

    /// Flooring modulo; the result takes the sign of the divisor.
    ///
    /// # Panics
    /// Panics when `other` is zero.
    pub fn modulo(&self, other: &Self) -> Self {
        assert!(!other.is_zero(), "exact integer division by zero");
        self.widen_binary(
            other,
            |a, b| a.checked_rem(b).map(|_| a.mod_floor(&b)),
            |a, b| a.mod_floor(b),
        )
    }

    /// Truncating quotient and remainder in one call.
    ///
    /// # Panics
    /// Panics when `other` is zero.
    pub fn quotient_remainder(&self, other: &Self) -> (Self, Self) {
        (self.quotient(other), self.remainder(other))
    }

    /// Greatest common divisor of the absolute values; `gcd(0, 0)` is zero.
    pub fn gcd(&self, other: &Self) -> Self {
        match (&self.0, &other.0) {
            (Repr::Small(a), Repr::Small(b)) => {
                let g = num_integer::gcd(a.unsigned_abs(), b.unsigned_abs());
                match i64::try_from(g) {
                    Ok(small) => Self::small(small),
                    Err(_) => Self::large(BigInt::from(g)),
                }
            }
            _ => Self::large(self.to_bigint().gcd(&other.to_bigint())),
        }
    }

    /// Least common multiple of the absolute values; zero when either
    /// operand is zero.
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::small(0);
        }
        match (&self.0, &other.0) {
            (Repr::Small(a), Repr::Small(b)) => {
                let (a, b) = (a.unsigned_abs(), b.unsigned_abs());
                let g = num_integer::gcd(a, b);
                match (a / g).checked_mul(b) {
                    Some(wide) => match i64::try_from(wide) {
                        Ok(small) => Self::small(small),
                        Err(_) => Self::large(BigInt::from(wide)),
                    },
                    None => Self::large(BigInt::from(a / g) * BigInt::from(b)),
                }
            }
            _ => {
                let a = self.to_bigint().abs();
                let b = other.to_bigint().abs();
                let g = a.gcd(&b);
                Self::large(a / g * b)
            }
        }
    }

    /// True when `self` is an integral multiple of `other`; zero is a
    /// multiple only of zero.
    pub fn is_multiple_of(&self, other: &Self) -> bool {
        if other.is_zero() {
            self.is_zero()
        } else {
            self.remainder(other).is_zero()
        }
    }
}

impl Add for ExactInteger {
    type Output = ExactInteger;

    fn add(self, rhs: ExactInteger) -> ExactInteger {
        self.widen_binary(&rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Sub for ExactInteger {
    type Output = ExactInteger;

    fn sub(self, rhs: ExactInteger) -> ExactInteger {
        self.widen_binary(&rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl Mul for ExactInteger {
    type Output = ExactInteger;

    fn mul(self, rhs: ExactInteger) -> ExactInteger {
        self.widen_binary(&rhs, i64::checked_mul, |a, b| a * b)
    }
}

impl Neg for ExactInteger {
    type Output = ExactInteger;

    fn neg(self) -> ExactInteger {
        match self.0 {
            Repr::Small(value) => match value.checked_neg() {
                Some(negated) => ExactInteger::small(negated),
                None => ExactInteger::large(-BigInt::from(value)),
            },
            Repr::Large(value) => ExactInteger::large(-value),
        }
    }
}

impl Add for &ExactInteger {
    type Output = ExactInteger;

    fn add(self, rhs: &ExactInteger) -> ExactInteger {
        self.widen_binary(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Sub for &ExactInteger {
    type Output = ExactInteger;

    fn sub(self, rhs: &ExactInteger) -> ExactInteger {
        self.widen_binary(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl Mul for &ExactInteger {
    type Output = ExactInteger;

    fn mul(self, rhs: &ExactInteger) -> ExactInteger {
        self.widen_binary(rhs, i64::checked_mul, |a, b| a * b)
    }
}

impl Neg for &ExactInteger {
    type Output = ExactInteger;

    fn neg(self) -> ExactInteger {
        -self.clone()
    }
}

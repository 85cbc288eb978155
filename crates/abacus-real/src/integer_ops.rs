use std::ops::{BitAnd, BitOr, BitXor, Not};

use abacus_core::ExactInteger;

use crate::float;
use crate::real::{Real, Repr};

/// Integer view of an operand to a lifted op, plus whether the result must
/// convert back to floating point.
///
/// A finite float passes through its nearest integer; fractions and
/// non-finite floats have no integer view.
fn exact_operand(value: &Real) -> (ExactInteger, bool) {
    match &value.0 {
        Repr::Integer(whole) => (whole.clone(), false),
        Repr::Fraction(_) => panic!("{value} is not an integer"),
        Repr::Float(inexact) => match ExactInteger::try_from_f64(inexact.round()) {
            Some(nearest) => (nearest, true),
            None => panic!("{value} is not an integer"),
        },
    }
}

fn lifted(
    lhs: &Real,
    rhs: &Real,
    op: impl FnOnce(&ExactInteger, &ExactInteger) -> ExactInteger,
) -> Real {
    let (a, lhs_inexact) = exact_operand(lhs);
    let (b, rhs_inexact) = exact_operand(rhs);
    let result = op(&a, &b);
    if lhs_inexact || rhs_inexact {
        Real::float(result.to_f64())
    } else {
        Real::integer(result)
    }
}

impl Real {
    /// Truncating integer division.
    ///
    /// # Panics
    /// Panics when either operand is not an integer or when `other` is zero.
    pub fn quotient(&self, other: &Real) -> Real {
        lifted(self, other, |a, b| a.quotient(b))
    }

    /// Remainder of truncating division; the sign follows the dividend.
    ///
    /// # Panics
    /// Panics when either operand is not an integer or when `other` is zero.
    pub fn remainder(&self, other: &Real) -> Real {
        lifted(self, other, |a, b| a.remainder(b))
    }

    /// Remainder of flooring division; the sign follows the divisor.
    ///
    /// # Panics
    /// Panics when either operand is not an integer or when `other` is zero.
    pub fn modulo(&self, other: &Real) -> Real {
        lifted(self, other, |a, b| a.modulo(b))
    }

    /// Greatest common divisor, never negative.
    ///
    /// # Panics
    /// Panics when either operand is not an integer.
    pub fn gcd(&self, other: &Real) -> Real {
        lifted(self, other, |a, b| a.gcd(b))
    }

    /// Least common multiple, never negative.
    ///
    /// # Panics
    /// Panics when either operand is not an integer.
    pub fn lcm(&self, other: &Real) -> Real {
        lifted(self, other, |a, b| a.lcm(b))
    }

    /// Shifts the integer value left by `count` bits; a negative count
    /// shifts right.
    ///
    /// # Panics
    /// Panics when either value is not an integer.
    pub fn shift_left(&self, count: &Real) -> Real {
        lifted(self, count, |a, b| a.shift_left(b))
    }

    /// Shifts the integer value right by `count` bits; a negative count
    /// shifts left.
    ///
    /// # Panics
    /// Panics when either value is not an integer.
    pub fn shift_right(&self, count: &Real) -> Real {
        lifted(self, count, |a, b| a.shift_right(b))
    }

    /// True when the integer value is even.
    ///
    /// # Panics
    /// Panics when the value is not an integer.
    pub fn is_even(&self) -> bool {
        match &self.0 {
            Repr::Integer(value) => value.is_even(),
            Repr::Fraction(_) => panic!("{self} is not an integer"),
            Repr::Float(value) => match float::as_integral(*value) {
                Some(whole) => whole % 2 == 0,
                None => panic!("{self} is not an integer"),
            },
        }
    }

    /// True when the integer value is odd.
    ///
    /// # Panics
    /// Panics when the value is not an integer.
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }
}

impl BitAnd for &Real {
    type Output = Real;

    fn bitand(self, rhs: &Real) -> Real {
        lifted(self, rhs, |a, b| a & b)
    }
}

impl BitOr for &Real {
    type Output = Real;

    fn bitor(self, rhs: &Real) -> Real {
        lifted(self, rhs, |a, b| a | b)
    }
}

impl BitXor for &Real {
    type Output = Real;

    fn bitxor(self, rhs: &Real) -> Real {
        lifted(self, rhs, |a, b| a ^ b)
    }
}

impl Not for &Real {
    type Output = Real;

    fn not(self) -> Real {
        let (value, inexact) = exact_operand(self);
        let result = !value;
        if inexact {
            Real::float(result.to_f64())
        } else {
            Real::integer(result)
        }
    }
}

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

use abacus_core::ExactInteger;
use abacus_frac::Fraction;

use crate::real::{Real, Repr};

/// A pair of operands widened to the higher of their two representations.
pub(crate) enum Coerced {
    Integers(ExactInteger, ExactInteger),
    Fractions(Fraction, Fraction),
    Floats(f64, f64),
}

/// Widens along `integer < fraction < float`.
///
/// An integer meeting a fraction wraps with denominator one; anything
/// meeting a float converts through the closest double.
pub(crate) fn coerce(lhs: &Real, rhs: &Real) -> Coerced {
    match (&lhs.0, &rhs.0) {
        (Repr::Integer(a), Repr::Integer(b)) => Coerced::Integers(a.clone(), b.clone()),
        (Repr::Fraction(a), Repr::Fraction(b)) => Coerced::Fractions(a.clone(), b.clone()),
        (Repr::Integer(a), Repr::Fraction(b)) => {
            Coerced::Fractions(Fraction::from_integer(a.clone()), b.clone())
        }
        (Repr::Fraction(a), Repr::Integer(b)) => {
            Coerced::Fractions(a.clone(), Fraction::from_integer(b.clone()))
        }
        _ => Coerced::Floats(lhs.to_f64(), rhs.to_f64()),
    }
}

impl Add for &Real {
    type Output = Real;

    fn add(self, rhs: &Real) -> Real {
        match coerce(self, rhs) {
            Coerced::Integers(a, b) => Real::integer(a + b),
            Coerced::Fractions(a, b) => Real::fraction(a + b),
            Coerced::Floats(a, b) => Real::float(a + b),
        }
    }
}

impl Sub for &Real {
    type Output = Real;

    fn sub(self, rhs: &Real) -> Real {
        match coerce(self, rhs) {
            Coerced::Integers(a, b) => Real::integer(a - b),
            Coerced::Fractions(a, b) => Real::fraction(a - b),
            Coerced::Floats(a, b) => Real::float(a - b),
        }
    }
}

impl Mul for &Real {
    type Output = Real;

    fn mul(self, rhs: &Real) -> Real {
        match coerce(self, rhs) {
            Coerced::Integers(a, b) => Real::integer(a * b),
            Coerced::Fractions(a, b) => Real::fraction(a * b),
            Coerced::Floats(a, b) => Real::float(a * b),
        }
    }
}

impl Div for &Real {
    type Output = Real;

    /// Exact division of two integers yields an integer when evenly
    /// divisible and a fraction otherwise; floats follow IEEE.
    ///
    /// # Panics
    ///
    /// Panics when dividing an exact value by exact zero, through the
    /// denominator precondition.
    fn div(self, rhs: &Real) -> Real {
        match coerce(self, rhs) {
            Coerced::Integers(a, b) => Real::fraction(Fraction::new(a, b)),
            Coerced::Fractions(a, b) => Real::fraction(a / b),
            Coerced::Floats(a, b) => Real::float(a / b),
        }
    }
}

impl Neg for &Real {
    type Output = Real;

    fn neg(self) -> Real {
        match &self.0 {
            Repr::Integer(value) => Real::integer(-value),
            Repr::Fraction(value) => Real::fraction(-value.clone()),
            Repr::Float(value) => Real::float(-*value),
        }
    }
}

macro_rules! forward_owned_binop {
    ($($trait:ident :: $method:ident),* $(,)?) => {
        $(
            impl $trait for Real {
                type Output = Real;

                fn $method(self, rhs: Real) -> Real {
                    $trait::$method(&self, &rhs)
                }
            }
        )*
    };
}

forward_owned_binop!(Add::add, Sub::sub, Mul::mul, Div::div);

impl Neg for Real {
    type Output = Real;

    fn neg(self) -> Real {
        -&self
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Real) -> bool {
        match coerce(self, other) {
            Coerced::Integers(a, b) => a == b,
            Coerced::Fractions(a, b) => a == b,
            Coerced::Floats(a, b) => a == b,
        }
    }
}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Real) -> Option<Ordering> {
        match coerce(self, other) {
            Coerced::Integers(a, b) => Some(a.cmp(&b)),
            Coerced::Fractions(a, b) => Some(a.cmp(&b)),
            Coerced::Floats(a, b) => a.partial_cmp(&b),
        }
    }
}

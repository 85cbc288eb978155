use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

use abacus_cplx::Complex;
use abacus_real::Real;

use crate::number::{Number, Repr};

/// Runs a binary operator on the real path when both operands are real,
/// otherwise promotes the real side to complex and runs the complex path.
fn binary(
    lhs: &Number,
    rhs: &Number,
    real_op: impl FnOnce(&Real, &Real) -> Real,
    complex_op: impl FnOnce(&Complex, &Complex) -> Complex,
) -> Number {
    match (&lhs.0, &rhs.0) {
        (Repr::Real(a), Repr::Real(b)) => Number(Repr::Real(real_op(a, b))),
        _ => Number(Repr::Complex(complex_op(
            &lhs.to_complex(),
            &rhs.to_complex(),
        ))),
    }
}

impl Add for &Number {
    type Output = Number;

    fn add(self, rhs: &Number) -> Number {
        binary(self, rhs, |a, b| a + b, |a, b| a + b)
    }
}

impl Sub for &Number {
    type Output = Number;

    fn sub(self, rhs: &Number) -> Number {
        binary(self, rhs, |a, b| a - b, |a, b| a - b)
    }
}

impl Mul for &Number {
    type Output = Number;

    fn mul(self, rhs: &Number) -> Number {
        binary(self, rhs, |a, b| a * b, |a, b| a * b)
    }
}

impl Div for &Number {
    type Output = Number;

    /// Real division keeps the exactness rules of the real layer; complex
    /// division computes in double precision.
    ///
    /// # Panics
    /// Panics when dividing an exact real by exact real zero.
    fn div(self, rhs: &Number) -> Number {
        binary(self, rhs, |a, b| a / b, |a, b| a / b)
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Number {
        match &self.0 {
            Repr::Real(value) => Number(Repr::Real(-value)),
            Repr::Complex(value) => Number(Repr::Complex(-value)),
        }
    }
}

macro_rules! forward_owned_binop {
    ($($trait:ident :: $method:ident),* $(,)?) => {
        $(
            impl $trait for Number {
                type Output = Number;

                fn $method(self, rhs: Number) -> Number {
                    $trait::$method(&self, &rhs)
                }
            }
        )*
    };
}

forward_owned_binop!(Add::add, Sub::sub, Mul::mul, Div::div);

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        -&self
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        match (&self.0, &other.0) {
            (Repr::Real(a), Repr::Real(b)) => a == b,
            _ => self.to_complex() == other.to_complex(),
        }
    }
}

impl BitAnd for &Number {
    type Output = Number;

    fn bitand(self, rhs: &Number) -> Number {
        Number(Repr::Real(&self.as_real() & &rhs.as_real()))
    }
}

impl BitOr for &Number {
    type Output = Number;

    fn bitor(self, rhs: &Number) -> Number {
        Number(Repr::Real(&self.as_real() | &rhs.as_real()))
    }
}

impl BitXor for &Number {
    type Output = Number;

    fn bitxor(self, rhs: &Number) -> Number {
        Number(Repr::Real(&self.as_real() ^ &rhs.as_real()))
    }
}

impl Not for &Number {
    type Output = Number;

    fn not(self) -> Number {
        Number(Repr::Real(!&self.as_real()))
    }
}

macro_rules! dispatch_unary {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        impl Number {
            $(
                $(#[$doc])*
                pub fn $name(&self) -> Number {
                    match &self.0 {
                        Repr::Real(value) => Number(Repr::Real(value.$name())),
                        Repr::Complex(value) => Number(Repr::Complex(value.$name())),
                    }
                }
            )*
        }
    };
}

dispatch_unary! {
    /// Natural exponential.
    exp,
    /// Two raised to the value.
    exp2,
    /// Ten raised to the value.
    exp10,
    /// Natural logarithm on the matching path.
    ln,
    /// Base-two logarithm.
    log2,
    /// Base-ten logarithm.
    log10,
    /// Sine.
    sin,
    /// Cosine.
    cos,
    /// Tangent.
    tan,
    /// Inverse sine.
    asin,
    /// Inverse cosine.
    acos,
    /// Inverse tangent.
    atan,
    /// Hyperbolic sine.
    sinh,
    /// Hyperbolic cosine.
    cosh,
    /// Hyperbolic tangent.
    tanh,
    /// Inverse hyperbolic sine.
    asinh,
    /// Inverse hyperbolic cosine.
    acosh,
    /// Inverse hyperbolic tangent.
    atanh,
}

impl Number {
    /// Square root; a negative real operand upgrades to the complex path,
    /// so `sqrt(-4)` is `2i` rather than NaN.
    pub fn sqrt(&self) -> Number {
        match &self.0 {
            Repr::Real(value) if value.is_negative() => {
                Number(Repr::Complex(Complex::from_real(value.clone()).sqrt()))
            }
            Repr::Real(value) => Number(Repr::Real(value.sqrt())),
            Repr::Complex(value) => Number(Repr::Complex(value.sqrt())),
        }
    }

    /// `self` raised to `exponent` on the matching path.
    pub fn pow(&self, exponent: &Number) -> Number {
        binary(
            self,
            exponent,
            |a, b| a.pow(b),
            |a, b| a.pow(b),
        )
    }

    /// Logarithm at an explicit base on the matching path.
    pub fn log(&self, base: &Number) -> Number {
        binary(self, base, |a, b| a.log(b), |a, b| a.log(b))
    }
}

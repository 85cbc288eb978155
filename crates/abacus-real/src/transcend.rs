use abacus_core::ExactInteger;

use crate::real::Real;

macro_rules! through_double {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        impl Real {
            $(
                $(#[$doc])*
                pub fn $name(&self) -> Real {
                    Real::float(self.to_f64().$name())
                }
            )*
        }
    };
}

through_double! {
    /// Sine, in double precision like every transcendental here.
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
    /// Natural exponential.
    exp,
    /// Two raised to the value.
    exp2,
    /// Natural logarithm.
    ln,
    /// Base-two logarithm.
    log2,
    /// Base-ten logarithm.
    log10,
    /// Square root; negative input answers NaN.
    sqrt,
}

impl Real {
    /// Ten raised to the value.
    pub fn exp10(&self) -> Real {
        Real::float(10f64.powf(self.to_f64()))
    }

    /// Logarithm at an explicit base, as a ratio of natural logarithms.
    pub fn log(&self, base: &Real) -> Real {
        Real::float(self.to_f64().ln() / base.to_f64().ln())
    }

    /// `self` raised to `exponent`, always through double precision.
    pub fn pow(&self, exponent: &Real) -> Real {
        Real::float(self.to_f64().powf(exponent.to_f64()))
    }

    /// Two-argument arctangent of `self` over `other`.
    pub fn atan2(&self, other: &Real) -> Real {
        Real::float(self.to_f64().atan2(other.to_f64()))
    }

    /// Hypotenuse of `self` and `other` without intermediate overflow.
    pub fn hypot(&self, other: &Real) -> Real {
        Real::float(self.to_f64().hypot(other.to_f64()))
    }

    /// Magnitude, keeping the operand's exactness.
    pub fn abs(&self) -> Real {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// The larger operand, or `self` when the comparison is undecided.
    pub fn max(&self, other: &Real) -> Real {
        if self < other {
            other.clone()
        } else {
            self.clone()
        }
    }

    /// The smaller operand, or `self` when the comparison is undecided.
    pub fn min(&self, other: &Real) -> Real {
        if self > other {
            other.clone()
        } else {
            self.clone()
        }
    }

    /// Polar angle on the real line.
    ///
    /// Negative values answer inexact π; everything else answers a zero of
    /// the operand's exactness.
    pub fn angle(&self) -> Real {
        if self.is_negative() {
            Real::float(std::f64::consts::PI)
        } else if self.is_exact() {
            Real::integer(ExactInteger::from(0))
        } else {
            Real::float(0.0)
        }
    }
}

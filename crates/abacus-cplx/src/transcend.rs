use std::f64::consts::{LN_10, LN_2};

use crate::complex::Complex;

macro_rules! through_backend {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        impl Complex {
            $(
                $(#[$doc])*
                pub fn $name(&self) -> Complex {
                    Complex::from_backend(self.to_backend().$name())
                }
            )*
        }
    };
}

through_backend! {
    /// Principal square root, in double precision like everything here.
    sqrt,
    /// Natural exponential.
    exp,
    /// Principal natural logarithm.
    ln,
    /// Sine.
    sin,
    /// Cosine.
    cos,
    /// Tangent.
    tan,
    /// Inverse sine on the principal branch.
    asin,
    /// Inverse cosine on the principal branch.
    acos,
    /// Inverse tangent on the principal branch.
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

impl Complex {
    /// Two raised to the value.
    pub fn exp2(&self) -> Complex {
        Complex::from_backend((self.to_backend() * LN_2).exp())
    }

    /// Ten raised to the value.
    pub fn exp10(&self) -> Complex {
        Complex::from_backend((self.to_backend() * LN_10).exp())
    }

    /// Base-two logarithm on the principal branch.
    pub fn log2(&self) -> Complex {
        Complex::from_backend(self.to_backend().ln() / LN_2)
    }

    /// Base-ten logarithm on the principal branch.
    pub fn log10(&self) -> Complex {
        Complex::from_backend(self.to_backend().ln() / LN_10)
    }

    /// Logarithm at an explicit complex base, as a ratio of natural
    /// logarithms.
    pub fn log(&self, base: &Complex) -> Complex {
        Complex::from_backend(self.to_backend().ln() / base.to_backend().ln())
    }

    /// `self` raised to a complex exponent on the principal branch.
    pub fn pow(&self, exponent: &Complex) -> Complex {
        Complex::from_backend(self.to_backend().powc(exponent.to_backend()))
    }
}

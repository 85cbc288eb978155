use std::fmt;

use abacus_real::Real;
use num_complex::Complex64;

/// A complex number as a rectangular pair of reals.
///
/// The two parts always agree on exactness: constructing from a mismatched
/// pair converts both to floating point. A pair of NaNs is the undefined
/// value that division by complex zero produces.
#[derive(Clone)]
pub struct Complex {
    pub(crate) real: Real,
    pub(crate) imaginary: Real,
}

impl Complex {
    /// The undefined value: NaN in both parts.
    pub const UNDEFINED: Complex = Complex {
        real: Real::NAN,
        imaginary: Real::NAN,
    };

    /// Builds a complex value, reconciling the parts' exactness.
    pub fn new(real: Real, imaginary: Real) -> Self {
        if real.is_exact() == imaginary.is_exact() {
            Complex { real, imaginary }
        } else {
            Complex {
                real: real.inexact(),
                imaginary: imaginary.inexact(),
            }
        }
    }

    /// Lifts a real number; the zero imaginary part matches its exactness.
    pub fn from_real(value: Real) -> Self {
        let imaginary = if value.is_exact() {
            Real::from(0)
        } else {
            Real::from(0.0)
        };
        Complex {
            real: value,
            imaginary,
        }
    }

    /// Builds the inexact value at the given magnitude and angle.
    ///
    /// Polar coordinates only exist in double precision, so the result is
    /// inexact even for exact arguments.
    pub fn from_polar(magnitude: &Real, angle: &Real) -> Self {
        Self::from_backend(Complex64::from_polar(magnitude.to_f64(), angle.to_f64()))
    }

    pub(crate) fn from_backend(value: Complex64) -> Self {
        Complex {
            real: Real::from(value.re),
            imaginary: Real::from(value.im),
        }
    }

    pub(crate) fn to_backend(&self) -> Complex64 {
        Complex64::new(self.real.to_f64(), self.imaginary.to_f64())
    }

    /// Real part; NaN when the value is not finite.
    pub fn real_part(&self) -> Real {
        if self.is_finite() {
            self.real.clone()
        } else {
            Real::NAN
        }
    }

    /// Imaginary part; NaN when the value is not finite.
    pub fn imaginary_part(&self) -> Real {
        if self.is_finite() {
            self.imaginary.clone()
        } else {
            Real::NAN
        }
    }

    /// The value as a real number, when the imaginary part is zero.
    pub fn to_real(&self) -> Option<Real> {
        if self.imaginary.is_zero() {
            Some(self.real.clone())
        } else {
            None
        }
    }

    /// Distance from the origin, as an overflow-safe hypotenuse.
    pub fn magnitude(&self) -> Real {
        self.real.hypot(&self.imaginary)
    }

    /// Polar angle via the two-argument arctangent.
    ///
    /// NaN when both parts are zero or either part is not finite.
    pub fn angle(&self) -> Real {
        if self.is_zero() || !self.is_finite() {
            Real::NAN
        } else {
            self.imaginary.atan2(&self.real)
        }
    }

    /// Mirror image across the real axis.
    pub fn conjugate(&self) -> Complex {
        Complex {
            real: self.real.clone(),
            imaginary: -&self.imaginary,
        }
    }

    /// True when both parts carry no representation error.
    pub fn is_exact(&self) -> bool {
        self.real.is_exact()
    }

    /// True when both parts are represented in floating point.
    pub fn is_inexact(&self) -> bool {
        self.real.is_inexact()
    }

    /// True when both parts are zero, of either exactness.
    pub fn is_zero(&self) -> bool {
        self.real.is_zero() && self.imaginary.is_zero()
    }

    /// True when both parts are finite.
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imaginary.is_finite()
    }

    /// True when either part is NaN; in particular for [`Self::UNDEFINED`].
    pub fn is_nan(&self) -> bool {
        self.real.is_nan() || self.imaginary.is_nan()
    }

    /// True when the imaginary part is zero.
    pub fn is_real_valued(&self) -> bool {
        self.imaginary.is_zero()
    }

    /// Converts both parts to the exact domain.
    ///
    /// # Panics
    /// Panics when either part is not finite.
    pub fn exact(&self) -> Complex {
        Complex {
            real: self.real.exact(),
            imaginary: self.imaginary.exact(),
        }
    }

    /// Converts both parts to floating point.
    pub fn inexact(&self) -> Complex {
        Complex {
            real: self.real.inexact(),
            imaginary: self.imaginary.inexact(),
        }
    }
}

impl From<Real> for Complex {
    fn from(value: Real) -> Self {
        Complex::from_real(value)
    }
}

impl From<Complex64> for Complex {
    fn from(value: Complex64) -> Self {
        Complex::from_backend(value)
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Complex) -> bool {
        self.real == other.real && self.imaginary == other.imaginary
    }
}

impl fmt::Display for Complex {
    /// Renders `re+imi`, folding the separator into the imaginary part's
    /// own sign when it prints one, so the output parses back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let imaginary = self.imaginary.to_string();
        if imaginary.starts_with(['+', '-']) {
            write!(f, "{}{imaginary}i", self.real)
        } else {
            write!(f, "{}+{imaginary}i", self.real)
        }
    }
}

impl fmt::Debug for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Complex(real: {:?}, imaginary: {:?})",
            self.real, self.imaginary
        )
    }
}

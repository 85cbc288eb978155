use crate::real::{Real, Repr};

impl Real {
    /// Smallest integral value not below `self`; floats stay inexact.
    pub fn ceiling(&self) -> Real {
        match &self.0 {
            Repr::Integer(_) => self.clone(),
            Repr::Fraction(value) => Real::integer(value.ceiling()),
            Repr::Float(value) => Real::float(value.ceil()),
        }
    }

    /// Largest integral value not above `self`; floats stay inexact.
    pub fn floor(&self) -> Real {
        match &self.0 {
            Repr::Integer(_) => self.clone(),
            Repr::Fraction(value) => Real::integer(value.floor()),
            Repr::Float(value) => Real::float(value.floor()),
        }
    }

    /// Nearest integral value.
    ///
    /// Fractions resolve ties toward the even neighbor; floats follow the
    /// double-precision rule and resolve ties away from zero.
    pub fn round(&self) -> Real {
        match &self.0 {
            Repr::Integer(_) => self.clone(),
            Repr::Fraction(value) => Real::integer(value.round()),
            Repr::Float(value) => Real::float(value.round()),
        }
    }

    /// Integral value toward zero; floats stay inexact.
    pub fn truncate(&self) -> Real {
        match &self.0 {
            Repr::Integer(_) => self.clone(),
            Repr::Fraction(value) => Real::integer(value.truncate()),
            Repr::Float(value) => Real::float(value.trunc()),
        }
    }
}

use abacus_core::ExactInteger;

use crate::Fraction;

impl Fraction {
    /// Returns the smallest integer not less than the fraction.
    pub fn ceiling(&self) -> ExactInteger {
        let quotient = self.numerator.quotient(&self.denominator);
        if self.numerator.is_negative() || self.numerator.is_multiple_of(&self.denominator) {
            quotient
        } else {
            quotient + ExactInteger::from(1)
        }
    }

    /// Returns the largest integer not greater than the fraction.
    pub fn floor(&self) -> ExactInteger {
        let quotient = self.numerator.quotient(&self.denominator);
        if self.numerator.is_positive() || self.numerator.is_multiple_of(&self.denominator) {
            quotient
        } else {
            quotient - ExactInteger::from(1)
        }
    }

    /// Rounds to the nearest integer, breaking ties toward the even neighbor.
    pub fn round(&self) -> ExactInteger {
        let mut quotient = self.numerator.quotient(&self.denominator);
        let half = self.denominator.quotient(&ExactInteger::from(2));
        let delta = if self.numerator.is_negative() {
            &quotient * &self.denominator - self.numerator.clone()
        } else {
            self.numerator.clone() - &quotient * &self.denominator
        };
        // A tie is only representable when the denominator is even.
        let past_half = if self.denominator.is_even() && delta == half {
            quotient.is_odd()
        } else {
            delta > half
        };
        if past_half {
            quotient = if self.numerator.is_negative() {
                quotient - ExactInteger::from(1)
            } else {
                quotient + ExactInteger::from(1)
            };
        }
        quotient
    }

    /// Discards the fractional part, rounding toward zero.
    pub fn truncate(&self) -> ExactInteger {
        self.numerator.quotient(&self.denominator)
    }
}

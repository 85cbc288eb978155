use std::ops::{BitAnd, BitOr, BitXor, Not};

use num_bigint::BigInt;
use num_traits::One;

use crate::integer::{ExactInteger, Repr};

impl ExactInteger {
    /// Shifts left by `count` bits; a negative count shifts right instead.
    /// Left shifts off the machine word promote rather than wrap.
    ///
    /// # Panics
    /// Panics when the count itself exceeds the machine-word range.
    pub fn shift_left(&self, count: &Self) -> Self {
        match count.to_i64() {
            None => panic!("shift count {count} out of range"),
            Some(bits) if bits < 0 => self.shr_by(bits.unsigned_abs()),
            Some(bits) => self.shl_by(bits as u64),
        }
    }

    /// Shifts right arithmetically by `count` bits; a negative count shifts
    /// left instead.
    ///
    /// # Panics
    /// Panics when the count itself exceeds the machine-word range.
    pub fn shift_right(&self, count: &Self) -> Self {
        match count.to_i64() {
            None => panic!("shift count {count} out of range"),
            Some(bits) if bits < 0 => self.shl_by(bits.unsigned_abs()),
            Some(bits) => self.shr_by(bits as u64),
        }
    }

    fn shl_by(&self, count: u64) -> Self {
        if count == 0 {
            return self.clone();
        }
        if let Repr::Small(value) = &self.0 {
            // 2^count fits the word for counts below 63, so the checked
            // multiply catches any overflow of the shifted value.
            if count < 63 {
                if let Some(shifted) = value.checked_mul(1i64 << count) {
                    return Self::small(shifted);
                }
            }
        }
        let count = usize::try_from(count).unwrap_or(usize::MAX);
        Self::large(self.to_bigint() << count)
    }

    fn shr_by(&self, count: u64) -> Self {
        match &self.0 {
            Repr::Small(value) => Self::small(value >> count.min(63)),
            Repr::Large(value) => {
                let count = usize::try_from(count).unwrap_or(usize::MAX);
                Self::large(value >> count)
            }
        }
    }
}

impl BitAnd for ExactInteger {
    type Output = ExactInteger;

    fn bitand(self, rhs: ExactInteger) -> ExactInteger {
        self.widen_binary(&rhs, |a, b| Some(a & b), |a, b| a & b)
    }
}

impl BitOr for ExactInteger {
    type Output = ExactInteger;

    fn bitor(self, rhs: ExactInteger) -> ExactInteger {
        self.widen_binary(&rhs, |a, b| Some(a | b), |a, b| a | b)
    }
}

impl BitXor for ExactInteger {
    type Output = ExactInteger;

    fn bitxor(self, rhs: ExactInteger) -> ExactInteger {
        self.widen_binary(&rhs, |a, b| Some(a ^ b), |a, b| a ^ b)
    }
}

impl Not for ExactInteger {
    type Output = ExactInteger;

    fn not(self) -> ExactInteger {
        match self.0 {
            Repr::Small(value) => ExactInteger::small(!value),
            // Two's-complement complement in unbounded precision.
            Repr::Large(value) => ExactInteger::large(-(value + BigInt::one())),
        }
    }
}

impl BitAnd for &ExactInteger {
    type Output = ExactInteger;

    fn bitand(self, rhs: &ExactInteger) -> ExactInteger {
        self.widen_binary(rhs, |a, b| Some(a & b), |a, b| a & b)
    }
}

impl BitOr for &ExactInteger {
    type Output = ExactInteger;

    fn bitor(self, rhs: &ExactInteger) -> ExactInteger {
        self.widen_binary(rhs, |a, b| Some(a | b), |a, b| a | b)
    }
}

impl BitXor for &ExactInteger {
    type Output = ExactInteger;

    fn bitxor(self, rhs: &ExactInteger) -> ExactInteger {
        self.widen_binary(rhs, |a, b| Some(a ^ b), |a, b| a ^ b)
    }
}

use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::Num;

use crate::errors::ParseNumberError;
use crate::integer::ExactInteger;
use crate::radix::Radix;

impl ExactInteger {
    /// Parses an optionally signed run of digits in the given radix.
    /// Returns `None` for anything else, including empty input.
    pub fn parse_radix(text: &str, radix: Radix) -> Option<Self> {
        if let Ok(value) = i64::from_str_radix(text, radix.base()) {
            return Some(Self::small(value));
        }
        // Overflow of the fast path lands here along with genuine junk;
        // the arbitrary-precision parser sorts one from the other.
        BigInt::from_str_radix(text, radix.base()).ok().map(Self::large)
    }
}

impl FromStr for ExactInteger {
    type Err = ParseNumberError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse_radix(text, Radix::Decimal).ok_or_else(|| ParseNumberError::malformed(text))
    }
}

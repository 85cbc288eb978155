use std::str::FromStr;

use abacus_core::{Exactness, ParseNumberError, Radix};
use abacus_real::Real;

use crate::complex::Complex;

impl Complex {
    /// Parses a complex literal body at the given radix and exactness.
    ///
    /// The polar form `magnitude@angle` is tried first, then the
    /// rectangular form `re±imi`. Both component tokens go through the
    /// real-number grammar at the same radix and exactness.
    pub fn parse_radix(text: &str, radix: Radix, exactness: Exactness) -> Option<Self> {
        Self::parse_polar(text, radix, exactness)
            .or_else(|| Self::parse_rectangular(text, radix, exactness))
    }

    // The polar form is inherently inexact, so forcing the exact domain
    // refuses it outright, like a decimal float body.
    fn parse_polar(text: &str, radix: Radix, exactness: Exactness) -> Option<Self> {
        let (magnitude_text, angle_text) = text.split_once('@')?;
        if exactness == Exactness::Exact {
            return None;
        }
        let magnitude = Real::parse_radix(magnitude_text, radix, Exactness::Unspecified)?;
        let angle = Real::parse_radix(angle_text, radix, Exactness::Unspecified)?;
        Some(Self::from_polar(&magnitude, &angle))
    }

    // Tries each sign position right to left as the real/imaginary split
    // and takes the first where both components parse. The split sign
    // belongs to the imaginary token, so a bare `3i` or a signless `3+i`
    // never matches.
    fn parse_rectangular(text: &str, radix: Radix, exactness: Exactness) -> Option<Self> {
        let body = text.strip_suffix(['i', 'I'])?;
        for (index, letter) in body.char_indices().rev() {
            if index == 0 || (letter != '+' && letter != '-') {
                continue;
            }
            let (real_text, imaginary_text) = body.split_at(index);
            if let (Some(real), Some(imaginary)) = (
                Real::parse_radix(real_text, radix, exactness),
                Real::parse_radix(imaginary_text, radix, exactness),
            ) {
                return Some(Self::new(real, imaginary));
            }
        }
        None
    }
}

impl FromStr for Complex {
    type Err = ParseNumberError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse_radix(text, Radix::Decimal, Exactness::Unspecified)
            .ok_or_else(|| ParseNumberError::malformed(text))
    }
}

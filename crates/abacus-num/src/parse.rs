use std::str::FromStr;

use abacus_core::{Exactness, ParseNumberError, Radix};
use abacus_cplx::Complex;
use abacus_real::Real;
use serde::{Deserialize, Serialize};

use crate::number::{Number, Repr};
use crate::prefix;

/// Ambient parsing defaults, overridden by explicit prefixes in the text.
///
/// A prefix that merely restates an option default is fine; only textual
/// repeats within one literal are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ScanOptions {
    /// Radix assumed when the literal carries no radix prefix.
    pub radix: Radix,
    /// Exactness assumed when the literal carries no exactness prefix.
    pub exactness: Exactness,
}

impl Number {
    /// Parses a prefixed numeric literal with the stock defaults: radix
    /// ten, natural exactness.
    pub fn parse(text: &str) -> Result<Self, ParseNumberError> {
        Self::parse_with(text, ScanOptions::default())
    }

    /// Parses a prefixed numeric literal, reading unprefixed aspects from
    /// `options`.
    ///
    /// After the prefix scan the body is matched case-insensitively,
    /// trying the polar complex form, then the rectangular complex form,
    /// then the real grammar. The first match wins; any leftover or
    /// malformed text fails the whole literal.
    pub fn parse_with(text: &str, options: ScanOptions) -> Result<Self, ParseNumberError> {
        let scan = prefix::scan(text)?;
        let radix = scan.radix.unwrap_or(options.radix);
        let exactness = scan.exactness.unwrap_or(options.exactness);
        let body = scan.body.to_ascii_lowercase();
        Self::parse_body(&body, radix, exactness).ok_or_else(|| ParseNumberError::malformed(text))
    }

    fn parse_body(body: &str, radix: Radix, exactness: Exactness) -> Option<Self> {
        if let Some(value) = Complex::parse_radix(body, radix, exactness) {
            return Some(Number(Repr::Complex(value)));
        }
        Real::parse_radix(body, radix, exactness).map(|value| Number(Repr::Real(value)))
    }
}

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Number::parse(text)
    }
}

use abacus_core::ExactInteger;
use num_bigint::BigInt;
use num_traits::{Float, One, ToPrimitive};

use crate::real::Real;

/// Renders a double the way the tower prints inexact values.
///
/// The sentinels carry an explicit sign, zero drops its sign, and every
/// other finite value keeps a visible fractional marker or exponent.
pub(crate) fn render(value: f64) -> String {
    if value.is_nan() {
        "+nan.0".to_owned()
    } else if value == f64::INFINITY {
        "+inf.0".to_owned()
    } else if value == f64::NEG_INFINITY {
        "-inf.0".to_owned()
    } else if value == 0.0 {
        "0.0".to_owned()
    } else {
        format!("{value:?}")
    }
}

/// Checked view of a double as a machine integer.
///
/// `None` for non-integral values and for anything at or past the `i64`
/// range, mathematically whole or not.
pub(crate) fn as_integral(value: f64) -> Option<i64> {
    value.to_i64().filter(|whole| *whole as f64 == value)
}

pub(crate) fn is_integral(value: f64) -> bool {
    as_integral(value).is_some()
}

/// Exact reconstruction of a finite double from its mantissa and exponent.
///
/// The result is an integer when the exponent is nonnegative, otherwise a
/// reduced dyadic fraction.
pub(crate) fn to_exact(value: f64) -> Real {
    let (mantissa, exponent, sign) = Float::integer_decode(value);
    let mut numerator = BigInt::from(mantissa);
    if sign < 0 {
        numerator = -numerator;
    }
    if exponent >= 0 {
        Real::integer(ExactInteger::from(numerator << exponent as usize))
    } else {
        let denominator = BigInt::one() << (-exponent) as usize;
        Real::rational(ExactInteger::from(numerator), ExactInteger::from(denominator))
    }
}

/// Parses a radix-ten inexact body: a signed sentinel or a decimal float.
pub(crate) fn parse_decimal(text: &str) -> Option<f64> {
    if let Some(value) = parse_sentinel(text) {
        return Some(value);
    }
    if is_decimal_shape(text) {
        return text.parse().ok();
    }
    None
}

// The sign is part of the sentinel; bare `inf.0` is not a number.
fn parse_sentinel(text: &str) -> Option<f64> {
    const FORMS: [(&str, f64); 4] = [
        ("+inf.0", f64::INFINITY),
        ("-inf.0", f64::NEG_INFINITY),
        ("+nan.0", f64::NAN),
        ("-nan.0", f64::NAN),
    ];
    FORMS
        .iter()
        .find(|(form, _)| text.eq_ignore_ascii_case(form))
        .map(|(_, value)| *value)
}

/// Accepts `.d+`, `d+.d*`, and `d+` with an exponent; a bare digit run
/// without dot or exponent is an integer, not a float.
fn is_decimal_shape(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };
    if let Some(exponent) = exponent {
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }
    match mantissa.split_once('.') {
        Some((whole, fractional)) => {
            !(whole.is_empty() && fractional.is_empty())
                && whole.bytes().all(|b| b.is_ascii_digit())
                && fractional.bytes().all(|b| b.is_ascii_digit())
        }
        None => {
            exponent.is_some()
                && !mantissa.is_empty()
                && mantissa.bytes().all(|b| b.is_ascii_digit())
        }
    }
}

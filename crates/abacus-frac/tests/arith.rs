use abacus_core::ExactInteger;
use abacus_frac::Fraction;

fn ei(value: i64) -> ExactInteger {
    ExactInteger::from(value)
}

fn fr(numerator: i64, denominator: i64) -> Fraction {
    Fraction::new(ei(numerator), ei(denominator))
}

#[test]
fn addition_reduces_over_the_common_denominator() {
    assert_eq!(fr(1, 2) + fr(1, 6), fr(2, 3));
    assert_eq!(fr(1, 2) + fr(-1, 2), fr(0, 1));
    assert_eq!(fr(1, 3) + fr(2, 3), Fraction::from_integer(ei(1)));
}

#[test]
fn subtraction_reduces_over_the_common_denominator() {
    assert_eq!(fr(2, 3) - fr(1, 6), fr(1, 2));
    assert_eq!(fr(1, 6) - fr(2, 3), fr(-1, 2));
}

#[test]
fn multiplication_cancels_common_factors() {
    assert_eq!(fr(2, 3) * fr(1, 6), fr(1, 9));
    assert_eq!(fr(-2, 3) * fr(3, 2), fr(-1, 1));
}

#[test]
fn division_multiplies_by_the_reciprocal() {
    let quotient = fr(2, 3) / fr(1, 6);
    assert_eq!(quotient, fr(4, 1));
    assert!(quotient.is_integer());
    assert_eq!(fr(1, 2) / fr(-1, 4), fr(-2, 1));
}

#[test]
#[should_panic(expected = "nonzero exact integer")]
fn division_by_zero_is_fatal() {
    let _ = fr(1, 2) / fr(0, 1);
}

#[test]
fn negation_flips_the_numerator_sign() {
    assert_eq!(-fr(1, 2), fr(-1, 2));
    assert_eq!(-(-fr(3, 7)), fr(3, 7));
    assert_eq!(-fr(0, 1), fr(0, 1));
}

#[test]
fn ordering_compares_by_cross_multiplication() {
    assert!(fr(5, 8) < fr(3, 4));
    assert!(fr(-1, 2) < fr(1, 3));
    assert!(fr(-3, 4) < fr(-5, 8));
    assert_eq!(fr(1, 2).cmp(&fr(2, 4)), std::cmp::Ordering::Equal);

    let mut values = vec![fr(3, 4), fr(-1, 2), fr(2, 3), fr(0, 1)];
    values.sort();
    assert_eq!(values, vec![fr(-1, 2), fr(0, 1), fr(2, 3), fr(3, 4)]);
}

#[test]
fn arithmetic_survives_promotion() {
    let wide = Fraction::new(ei(i64::MAX), ei(2)) + Fraction::new(ei(i64::MAX), ei(2));
    assert!(wide.is_integer());
    assert_eq!(wide.numerator().to_string(), "9223372036854775807");

    let squared = Fraction::new(ei(i64::MAX), ei(3)) * Fraction::new(ei(i64::MAX), ei(5));
    assert_eq!(
        squared.numerator().to_string(),
        "85070591730234615847396907784232501249"
    );
    assert_eq!(squared.denominator(), &ei(15));
}

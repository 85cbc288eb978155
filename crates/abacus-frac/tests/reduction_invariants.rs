use abacus_core::{ExactInteger, Radix};
use abacus_frac::Fraction;
use proptest::prelude::*;

fn ei(value: i64) -> ExactInteger {
    ExactInteger::from(value)
}

fn fr(numerator: i64, denominator: i64) -> Fraction {
    Fraction::new(ei(numerator), ei(denominator))
}

#[test]
fn construction_reduces_to_lowest_terms() {
    assert_eq!(fr(2, 4).to_string(), "1/2");
    assert_eq!(fr(6, -4).to_string(), "-3/2");
    assert_eq!(fr(-6, -4).to_string(), "3/2");
    assert_eq!(fr(0, 5).to_string(), "0/1");
    assert_eq!(fr(5, 1).to_string(), "5/1");
    assert_eq!(fr(i64::MIN, i64::MIN).to_string(), "1/1");
}

#[test]
fn whole_number_fractions_expose_their_integer() {
    assert!(fr(4, 2).is_integer());
    assert_eq!(fr(4, 2).to_exact_integer(), ei(2));
    assert!(!fr(1, 2).is_integer());
    assert!(Fraction::from_integer(ei(-7)).is_integer());
}

#[test]
#[should_panic(expected = "not an exact integer")]
fn integer_access_on_a_proper_fraction_is_fatal() {
    let _ = fr(1, 2).to_exact_integer();
}

#[test]
#[should_panic(expected = "nonzero exact integer")]
fn zero_denominator_is_fatal() {
    let _ = Fraction::new(ei(1), ei(0));
}

#[test]
fn sign_predicates_follow_the_numerator() {
    assert!(fr(0, 9).is_zero());
    assert!(fr(-1, 2).is_negative());
    assert!(fr(1, -2).is_negative());
    assert!(fr(-1, -2).is_positive());
}

#[test]
fn double_conversion_divides_the_parts() {
    assert_eq!(fr(1, 2).to_f64(), 0.5);
    assert_eq!(fr(-7, 4).to_f64(), -1.75);
    assert_eq!(fr(1, 3).to_f64(), 1.0 / 3.0);
    assert_eq!(Fraction::from_integer(ei(0)).to_f64(), 0.0);
}

#[test]
fn parse_accepts_signed_numerator_and_bare_denominator() {
    assert_eq!(Fraction::parse_radix("2/3", Radix::Decimal), Some(fr(2, 3)));
    assert_eq!(Fraction::parse_radix("-2/4", Radix::Decimal), Some(fr(-1, 2)));
    assert_eq!(Fraction::parse_radix("+6/4", Radix::Decimal), Some(fr(3, 2)));
    assert_eq!(Fraction::parse_radix("5", Radix::Decimal), Some(fr(5, 1)));
    assert_eq!(Fraction::parse_radix("1/+2", Radix::Decimal), Some(fr(1, 2)));
    assert_eq!(Fraction::parse_radix("ff/10", Radix::Hexadecimal), Some(fr(255, 16)));
    assert_eq!(Fraction::parse_radix("101/10", Radix::Binary), Some(fr(5, 2)));
}

#[test]
fn parse_rejects_malformed_fractions() {
    for text in ["1/0", "1/-2", "2/3/4", "/3", "3/", "", "a/b", "1.5/2"] {
        assert_eq!(
            Fraction::parse_radix(text, Radix::Decimal),
            None,
            "`{text}` should not parse"
        );
    }
}

#[test]
fn serializes_as_the_rendered_string() {
    let value = fr(-3, 2);
    assert_eq!(serde_json::to_string(&value).expect("serializes"), "\"-3/2\"");
    let back: Fraction = serde_json::from_str("\"-3/2\"").expect("deserializes");
    assert_eq!(back, value);
    assert!(serde_json::from_str::<Fraction>("\"1/0\"").is_err());
}

proptest! {
    #[test]
    fn reduced_form_is_canonical(numerator in any::<i64>(), denominator in any::<i64>()) {
        prop_assume!(denominator != 0);
        let value = Fraction::new(ei(numerator), ei(denominator));
        prop_assert!(value.denominator().is_positive());
        prop_assert_eq!(value.numerator().gcd(value.denominator()), ei(1));
        prop_assert_eq!(
            value.numerator() * &ei(denominator),
            &ei(numerator) * value.denominator()
        );
        if numerator == 0 {
            prop_assert_eq!(value.denominator(), &ei(1));
        }
    }

    #[test]
    fn rendered_fractions_parse_back(numerator in any::<i64>(), denominator in any::<i64>()) {
        prop_assume!(denominator != 0);
        let value = Fraction::new(ei(numerator), ei(denominator));
        let text = value.to_string();
        prop_assert_eq!(Fraction::parse_radix(&text, Radix::Decimal), Some(value));
    }

    #[test]
    fn addition_and_subtraction_invert(a in -10_000i64..10_000, b in 1i64..1_000, c in -10_000i64..10_000, d in 1i64..1_000) {
        let left = Fraction::new(ei(a), ei(b));
        let right = Fraction::new(ei(c), ei(d));
        prop_assert_eq!(left.clone() + right.clone() - right, left);
    }
}

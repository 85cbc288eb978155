use abacus_core::ExactInteger;
use abacus_real::Real;
use proptest::prelude::*;

fn int(value: i64) -> Real {
    Real::from(value)
}

fn rat(numerator: i64, denominator: i64) -> Real {
    Real::rational(ExactInteger::from(numerator), ExactInteger::from(denominator))
}

// One strategy spanning all three representations.
fn reals() -> impl Strategy<Value = Real> {
    prop_oneof![
        (-1_000_000i64..1_000_000).prop_map(int),
        (-1_000i64..1_000, 1i64..1_000).prop_map(|(n, d)| rat(n, d)),
        (-1.0e9..1.0e9f64).prop_map(Real::from),
    ]
}

proptest! {
    #[test]
    fn addition_commutes_with_matching_exactness(a in reals(), b in reals()) {
        let left = &a + &b;
        let right = &b + &a;
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(left.is_inexact(), a.is_inexact() || b.is_inexact());
    }

    #[test]
    fn multiplication_commutes(a in reals(), b in reals()) {
        prop_assert_eq!(&(&a * &b), &(&b * &a));
    }

    #[test]
    fn exact_addition_inverts_by_subtraction(a in reals(), b in reals()) {
        prop_assume!(a.is_exact() && b.is_exact());
        let sum = &a + &b;
        prop_assert_eq!(&(&sum - &b), &a);
    }

    #[test]
    fn rendering_parses_back(value in reals()) {
        let rendered = value.to_string();
        let reparsed: Real = rendered.parse().unwrap();
        prop_assert_eq!(&reparsed, &value);
    }

    #[test]
    fn equality_ignores_representation(whole in -10_000i64..10_000) {
        let as_int = int(whole);
        let as_float = Real::from(whole as f64);
        prop_assert_eq!(&as_int, &as_float);
        prop_assert_eq!(as_int.partial_cmp(&as_float), Some(std::cmp::Ordering::Equal));
    }

    #[test]
    fn collapse_keeps_denominators_above_one(n in -1_000i64..1_000, d in 1i64..1_000) {
        let value = rat(n, d);
        if value.is_integer() {
            prop_assert_eq!(&value.denominator(), &int(1));
        } else {
            prop_assert!(value.denominator() > int(1));
        }
    }

    #[test]
    fn division_exactness_follows_divisibility(a in -1_000i64..1_000, b in 1i64..1_000) {
        let quotient = &int(a) / &int(b);
        prop_assert!(quotient.is_exact());
        prop_assert_eq!(quotient.is_integer(), a % b == 0);
        prop_assert_eq!(&(&quotient * &int(b)), &int(a));
    }

    #[test]
    fn exact_reconstruction_round_trips(value in -1.0e12..1.0e12f64) {
        let exact = Real::from(value).exact();
        prop_assert!(exact.is_exact());
        prop_assert_eq!(exact.to_f64(), value);
    }
}

use abacus_core::ExactInteger;
use abacus_real::Real;

fn int(value: i64) -> Real {
    Real::from(value)
}

fn rat(numerator: i64, denominator: i64) -> Real {
    Real::rational(ExactInteger::from(numerator), ExactInteger::from(denominator))
}

fn flo(value: f64) -> Real {
    Real::from(value)
}

#[test]
fn integers_are_rounding_fixed_points() {
    for value in [int(-7), int(0), int(42)] {
        assert_eq!(value.ceiling(), value);
        assert_eq!(value.floor(), value);
        assert_eq!(value.round(), value);
        assert_eq!(value.truncate(), value);
    }
}

#[test]
fn fractions_round_to_exact_integers() {
    assert_eq!(rat(7, 3).ceiling(), int(3));
    assert_eq!(rat(7, 3).floor(), int(2));
    assert_eq!(rat(7, 3).truncate(), int(2));
    assert_eq!(rat(-7, 3).ceiling(), int(-2));
    assert_eq!(rat(-7, 3).floor(), int(-3));
    assert_eq!(rat(-7, 3).truncate(), int(-2));
    assert!(rat(7, 3).round().is_exact());
    assert!(rat(7, 3).round().is_integer());
}

#[test]
fn fraction_ties_resolve_toward_even() {
    assert_eq!(rat(5, 2).round(), int(2));
    assert_eq!(rat(7, 2).round(), int(4));
    assert_eq!(rat(-5, 2).round(), int(-2));
    assert_eq!(rat(-7, 2).round(), int(-4));
}

#[test]
fn floats_stay_floats_and_round_half_away() {
    assert_eq!(flo(2.5).round(), flo(3.0));
    assert_eq!(flo(-2.5).round(), flo(-3.0));
    assert_eq!(flo(2.5).ceiling(), flo(3.0));
    assert_eq!(flo(2.5).floor(), flo(2.0));
    assert_eq!(flo(-2.5).truncate(), flo(-2.0));
    assert!(flo(2.5).round().is_inexact());
    assert!(Real::INFINITY.ceiling().to_f64().is_infinite());
    assert!(Real::NAN.round().is_nan());
}

#[test]
fn tie_rules_differ_between_representations() {
    // Same magnitude, opposite tie decisions.
    assert_eq!(rat(5, 2).round(), int(2));
    assert_eq!(flo(2.5).round(), flo(3.0));
}

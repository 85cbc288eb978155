use std::f64::consts::{E, FRAC_PI_2};

use abacus_cplx::Complex;
use abacus_real::Real;

fn int(value: i64) -> Real {
    Real::from(value)
}

fn cplx(real: i64, imaginary: i64) -> Complex {
    Complex::new(int(real), int(imaginary))
}

fn close(value: &Complex, real: f64, imaginary: f64) -> bool {
    let re = value.real_part().to_f64();
    let im = value.imaginary_part().to_f64();
    (re - real).abs() < 1.0e-12 && (im - imaginary).abs() < 1.0e-12
}

#[test]
fn square_root_of_a_negative_real_lands_on_the_imaginary_axis() {
    assert!(close(&cplx(-4, 0).sqrt(), 0.0, 2.0));
    assert!(close(&cplx(-1, 0).sqrt(), 0.0, 1.0));
    assert!(close(&cplx(0, 2).sqrt(), 1.0, 1.0));
    assert!(cplx(-4, 0).sqrt().is_inexact());
}

#[test]
fn exponential_and_logarithm_invert_each_other() {
    let value = Complex::new(Real::from(0.5), Real::from(1.25));
    assert!(close(&value.exp().ln(), 0.5, 1.25));
    assert!(close(&cplx(1, 0).exp(), E, 0.0));

    // e^(iπ/2) = i
    let quarter_turn = Complex::new(Real::from(0.0), Real::from(FRAC_PI_2));
    assert!(close(&quarter_turn.exp(), 0.0, 1.0));
}

#[test]
fn scaled_exponentials_agree_with_their_logarithms() {
    assert!(close(&cplx(3, 0).exp2(), 8.0, 0.0));
    assert!(close(&cplx(8, 0).log2(), 3.0, 0.0));
    assert!(close(&cplx(2, 0).exp10(), 100.0, 0.0));
    assert!(close(&cplx(100, 0).log10(), 2.0, 0.0));
    assert!(close(&cplx(8, 0).log(&cplx(2, 0)), 3.0, 0.0));
}

#[test]
fn complex_power_handles_the_classic_identity() {
    // i^i = e^(-π/2), a real number.
    let result = cplx(0, 1).pow(&cplx(0, 1));
    assert!(close(&result, (-FRAC_PI_2).exp(), 0.0));
}

#[test]
fn trigonometry_round_trips_through_inverses() {
    let value = Complex::new(Real::from(0.25), Real::from(0.5));
    assert!(close(&value.sin().asin(), 0.25, 0.5));
    assert!(close(&value.tan().atan(), 0.25, 0.5));
    assert!(close(&value.sinh().asinh(), 0.25, 0.5));
    assert!(close(&value.cosh().acosh(), 0.25, 0.5));
    assert!(close(&value.tanh().atanh(), 0.25, 0.5));
    assert!(close(&value.cos().acos(), 0.25, 0.5));
}

#[test]
fn transcendental_results_are_always_inexact() {
    assert!(cplx(1, 0).exp().is_inexact());
    assert!(cplx(4, 0).sqrt().is_inexact());
    assert!(cplx(1, 1).sin().is_inexact());
}

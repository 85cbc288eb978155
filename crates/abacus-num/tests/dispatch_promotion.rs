use abacus_cplx::Complex;
use abacus_num::Number;
use abacus_real::Real;

fn int(value: i64) -> Number {
    Number::from(value)
}

fn flo(value: f64) -> Number {
    Number::from(value)
}

fn cplx(real: i64, imaginary: i64) -> Number {
    Number::complex(Real::from(real), Real::from(imaginary))
}

#[test]
fn same_kind_operands_delegate_directly() {
    let sum = &int(2) + &int(3);
    assert!(sum.is_real());
    assert_eq!(sum, int(5));

    let product = &cplx(1, 2) * &cplx(3, 4);
    assert!(product.is_complex());
    assert_eq!(product, cplx(-5, 10));
}

#[test]
fn a_real_operand_promotes_to_the_complex_path() {
    let sum = &int(1) + &cplx(2, 3);
    assert!(sum.is_complex());
    assert_eq!(sum, cplx(3, 3));
    assert!(sum.is_exact());

    let difference = &cplx(2, 3) - &int(1);
    assert_eq!(difference, cplx(1, 3));

    // The imaginary zero of the promotion matches the real's exactness.
    let inexact = &flo(1.0) + &cplx(2, 3);
    assert!(inexact.is_inexact());
}

#[test]
fn equality_follows_the_same_promotion() {
    assert_eq!(int(3), cplx(3, 0));
    assert_eq!(cplx(3, 0), int(3));
    assert_ne!(int(3), cplx(3, 1));
    assert_eq!(int(2), flo(2.0));
}

#[test]
fn division_dispatches_by_kind() {
    let exact = &int(6) / &int(3);
    assert!(exact.is_real());
    assert!(exact.is_exact());
    assert_eq!(exact, int(2));

    let fractional = &int(1) / &int(3);
    assert_eq!(fractional.denominator(), int(3));

    let complex = &cplx(-5, 10) / &cplx(3, 4);
    assert!(complex.is_complex());
    assert!(complex.is_inexact());
    assert_eq!(complex, Number::complex(Real::from(1.0), Real::from(2.0)));
}

#[test]
fn square_root_of_a_negative_real_goes_complex() {
    let root = int(-4).sqrt();
    assert!(root.is_complex());
    assert!((root.imaginary_part().to_f64() - 2.0).abs() < 1.0e-12);
    assert!(root.real_part().to_f64().abs() < 1.0e-12);

    let real_root = int(4).sqrt();
    assert!(real_root.is_real());
    assert_eq!(real_root, flo(2.0));

    assert!(Number::from(Real::NAN).sqrt().is_real());
}

#[test]
fn transcendentals_dispatch_by_kind() {
    assert!(int(1).exp().is_real());
    assert!(cplx(1, 1).exp().is_complex());
    assert_eq!(int(8).log2(), flo(3.0));
    assert_eq!(int(2).pow(&int(10)), flo(1024.0));
    assert!(int(2).pow(&cplx(0, 1)).is_complex());
    assert!((cplx(8, 0).log(&int(2)).real_part().to_f64() - 3.0).abs() < 1.0e-12);
}

#[test]
fn magnitude_and_angle_depend_on_the_kind() {
    assert_eq!(int(-5).magnitude(), int(5));
    assert!(int(-5).magnitude().is_exact());
    assert_eq!(cplx(3, 4).magnitude(), flo(5.0));

    assert_eq!(int(2).angle(), int(0));
    let pi = int(-2).angle();
    assert!(pi.is_inexact());
    assert_eq!(pi.to_f64(), std::f64::consts::PI);
    assert!((cplx(0, 1).angle().to_f64() - std::f64::consts::FRAC_PI_2).abs() < 1.0e-12);
}

#[test]
fn parts_of_a_real_number_match_its_exactness() {
    assert_eq!(int(3).real_part(), Real::from(3));
    assert_eq!(int(3).imaginary_part(), Real::from(0));
    assert!(int(3).imaginary_part().is_exact());
    assert!(flo(3.0).imaginary_part().is_inexact());
    assert_eq!(cplx(3, 4).real_part(), Real::from(3));
}

#[test]
fn simplified_collapses_a_zero_imaginary_part() {
    let collapsed = cplx(3, 0).simplified();
    assert!(collapsed.is_real());
    assert_eq!(collapsed, int(3));

    assert!(cplx(3, 1).simplified().is_complex());
    assert!(int(3).simplified().is_real());
}

#[test]
fn integer_domain_ops_project_through_the_real_layer() {
    assert_eq!(int(-13).modulo(&int(4)), int(3));
    assert_eq!(int(-13).remainder(&int(4)), int(-1));
    assert_eq!(int(32).gcd(&int(-36)), int(4));
    assert_eq!(int(32).lcm(&int(-36)), int(288));
    assert_eq!(&int(0b1100) & &int(0b1010), int(0b1000));
    assert_eq!(int(1).shift_left(&int(10)), int(1024));

    // A complex with zero imaginary part projects to its real part.
    assert_eq!(cplx(-13, 0).modulo(&int(4)), int(3));
    assert_eq!(cplx(7, 0).to_i64(), Some(7));
    assert_eq!(cplx(7, 1).to_i64(), None);
}

#[test]
fn rounding_family_projects_likewise() {
    let half = Number::rational(5.into(), 2.into());
    assert_eq!(half.round(), int(2));
    assert_eq!(half.ceiling(), int(3));
    assert_eq!(half.floor(), int(2));
    assert_eq!(half.truncate(), int(2));
}

#[test]
fn exactness_conversions_cover_both_kinds() {
    assert_eq!(int(3).inexact(), flo(3.0));
    assert_eq!(flo(2.5).exact(), Number::rational(5.into(), 2.into()));
    let inexact_complex = cplx(1, 2).inexact();
    assert!(inexact_complex.is_complex());
    assert!(inexact_complex.is_inexact());
    assert_eq!(inexact_complex.exact(), cplx(1, 2));
}

#[test]
fn conversion_from_complex_values_keeps_the_kind() {
    let from_complex = Number::from(Complex::new(Real::from(1), Real::from(2)));
    assert!(from_complex.is_complex());
    let from_real = Number::from(Real::from(1));
    assert!(from_real.is_real());
}

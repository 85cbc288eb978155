use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::complex::Complex;

impl Add for &Complex {
    type Output = Complex;

    fn add(self, rhs: &Complex) -> Complex {
        Complex::new(&self.real + &rhs.real, &self.imaginary + &rhs.imaginary)
    }
}

impl Sub for &Complex {
    type Output = Complex;

    fn sub(self, rhs: &Complex) -> Complex {
        Complex::new(&self.real - &rhs.real, &self.imaginary - &rhs.imaginary)
    }
}

impl Mul for &Complex {
    type Output = Complex;

    /// Component-wise product; exact operands never touch floating point.
    fn mul(self, rhs: &Complex) -> Complex {
        let real = &self.real * &rhs.real - &self.imaginary * &rhs.imaginary;
        let imaginary = &self.real * &rhs.imaginary + &self.imaginary * &rhs.real;
        Complex::new(real, imaginary)
    }
}

impl Div for &Complex {
    type Output = Complex;

    /// Division always computes in double precision; dividing by complex
    /// zero answers [`Complex::UNDEFINED`] rather than trapping.
    fn div(self, rhs: &Complex) -> Complex {
        if rhs.is_zero() {
            return Complex::UNDEFINED;
        }
        Complex::from_backend(self.to_backend() / rhs.to_backend())
    }
}

impl Neg for &Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-&self.real, -&self.imaginary)
    }
}

macro_rules! forward_owned_binop {
    ($($trait:ident :: $method:ident),* $(,)?) => {
        $(
            impl $trait for Complex {
                type Output = Complex;

                fn $method(self, rhs: Complex) -> Complex {
                    $trait::$method(&self, &rhs)
                }
            }
        )*
    };
}

forward_owned_binop!(Add::add, Sub::sub, Mul::mul, Div::div);

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        -&self
    }
}

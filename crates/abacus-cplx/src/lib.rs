#![deny(missing_docs)]
#![doc = "Complex numbers over Abacus reals, with joint exactness and a double-precision backend."]

mod complex;
mod ops;
mod parse;
mod serde;
mod transcend;

pub use complex::Complex;

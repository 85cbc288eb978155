#![deny(missing_docs)]
#![doc = "Unified number facade and prefixed literal grammar for the Abacus numeric tower."]

mod dispatch;
mod number;
mod parse;
mod prefix;
mod serde;

pub use number::Number;
pub use parse::ScanOptions;

// The tower layers, re-exported so embedders need only this crate.
pub use abacus_core::{ExactInteger, Exactness, ParseNumberError, Radix};
pub use abacus_cplx::Complex;
pub use abacus_frac::Fraction;
pub use abacus_real::Real;

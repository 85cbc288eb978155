#![deny(missing_docs)]
#![doc = "Real numbers mixing exact integers, fractions, and doubles."]

mod coerce;
mod float;
mod integer_ops;
mod parse;
mod real;
mod rounding;
mod serde;
mod transcend;

pub use real::Real;

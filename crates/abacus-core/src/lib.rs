#![deny(missing_docs)]
#![doc = "Exact integer arithmetic and shared literal vocabulary for the Abacus numeric tower."]

mod arith;
mod bits;
mod errors;
mod integer;
mod parse;
mod radix;
mod serde;

pub use errors::ParseNumberError;
pub use integer::ExactInteger;
pub use radix::{Exactness, Radix};

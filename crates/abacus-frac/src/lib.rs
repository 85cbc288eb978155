#![deny(missing_docs)]
#![doc = "Reduced fractions over the Abacus exact integers."]

mod fraction;
mod ops;
mod rounding;
mod serde;

pub use fraction::Fraction;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recoverable failure raised when numeric text does not parse.
///
/// Every variant carries the offending input. Domain violations (zero
/// denominators, integer ops on non-integers) are preconditions and panic
/// instead of surfacing here.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "kebab-case")]
pub enum ParseNumberError {
    /// A second radix prefix appeared in the literal.
    #[error("duplicate radix prefix in numeric literal `{0}`")]
    DuplicateRadix(String),
    /// A second exactness prefix appeared in the literal.
    #[error("duplicate exactness prefix in numeric literal `{0}`")]
    DuplicateExactness(String),
    /// The literal body matched no numeric form.
    #[error("malformed numeric literal `{0}`")]
    Malformed(String),
}

impl ParseNumberError {
    /// Wraps input that matched no numeric form.
    pub fn malformed(text: impl Into<String>) -> Self {
        ParseNumberError::Malformed(text.into())
    }
}

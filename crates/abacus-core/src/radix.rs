use serde::{Deserialize, Serialize};

/// Literal base selected by a radix prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    /// Base 2, prefix `#b`.
    Binary,
    /// Base 8, prefix `#o`.
    Octal,
    /// Base 10, prefix `#d`; the default when no prefix appears.
    #[default]
    Decimal,
    /// Base 16, prefix `#h` or `#x`.
    Hexadecimal,
}

impl Radix {
    /// Numeric base of the radix.
    pub fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Maps a lowercased prefix letter to its radix.
    pub fn from_prefix(letter: char) -> Option<Self> {
        match letter {
            'b' => Some(Radix::Binary),
            'o' => Some(Radix::Octal),
            'd' => Some(Radix::Decimal),
            'h' | 'x' => Some(Radix::Hexadecimal),
            _ => None,
        }
    }
}

/// Exactness requested by a literal prefix.
///
/// `Unspecified` keeps the natural exactness of the matched body: integer
/// and fraction bodies stay exact, decimal and sentinel bodies inexact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exactness {
    /// Force the exact domain, prefix `#e`.
    Exact,
    /// Force the inexact domain, prefix `#i`.
    Inexact,
    /// No forcing; the literal's shape decides.
    #[default]
    Unspecified,
}

impl Exactness {
    /// Maps a lowercased prefix letter to its exactness.
    pub fn from_prefix(letter: char) -> Option<Self> {
        match letter {
            'e' => Some(Exactness::Exact),
            'i' => Some(Exactness::Inexact),
            _ => None,
        }
    }
}

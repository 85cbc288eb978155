use abacus_core::{Exactness, ParseNumberError, Radix};

/// Outcome of the prefix scan: the explicitly requested radix and
/// exactness, plus the remaining literal body.
pub(crate) struct Scan<'a> {
    pub(crate) radix: Option<Radix>,
    pub(crate) exactness: Option<Exactness>,
    pub(crate) body: &'a str,
}

/// Strips `#`-prefixes off the front of a literal.
///
/// At most one radix and one exactness prefix may appear, in either order;
/// a textual repeat of either kind is an error even when it restates the
/// same choice. A `#` followed by an unknown letter is left in place for
/// the body grammar to reject.
pub(crate) fn scan(text: &str) -> Result<Scan<'_>, ParseNumberError> {
    let mut radix = None;
    let mut exactness = None;
    let mut rest = text;
    while let Some(tail) = rest.strip_prefix('#') {
        let mut letters = tail.chars();
        let Some(letter) = letters.next() else { break };
        if let Some(parsed) = Radix::from_prefix(letter.to_ascii_lowercase()) {
            if radix.replace(parsed).is_some() {
                return Err(ParseNumberError::DuplicateRadix(text.to_owned()));
            }
        } else if let Some(parsed) = Exactness::from_prefix(letter.to_ascii_lowercase()) {
            if exactness.replace(parsed).is_some() {
                return Err(ParseNumberError::DuplicateExactness(text.to_owned()));
            }
        } else {
            break;
        }
        rest = letters.as_str();
    }
    Ok(Scan {
        radix,
        exactness,
        body: rest,
    })
}

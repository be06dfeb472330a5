//! Base-36 numeral codec between sequential identifiers and short codes.
//!
//! Short codes are positional numerals over [`ALPHABET`], most significant
//! symbol first. Identifier `0` encodes to `"a"`, `35` to `"9"`, `36` to `"ba"`.

/// Ordered digit symbols. A symbol's index is its digit value.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

const SYMBOLS: &[u8] = ALPHABET.as_bytes();

/// Numeral base, equal to the alphabet length.
pub const BASE: u64 = SYMBOLS.len() as u64;

/// Errors that can occur while decoding a short code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Short code is empty")]
    Empty,

    #[error("Character {0:?} is not part of the short code alphabet")]
    InvalidCharacter(char),

    #[error("Short code is too long to be an identifier")]
    Overflow,
}

/// Encodes an identifier as a short code.
///
/// # Examples
///
/// ```
/// use url_shortener::utils::numeral_codec::encode;
///
/// assert_eq!(encode(0), "a");
/// assert_eq!(encode(35), "9");
/// assert_eq!(encode(36), "ba");
/// ```
pub fn encode(id: u64) -> String {
    if id == 0 {
        return (SYMBOLS[0] as char).to_string();
    }

    let mut digits = Vec::new();
    let mut rest = id;

    while rest > 0 {
        digits.push(SYMBOLS[(rest % BASE) as usize]);
        rest /= BASE;
    }

    digits.iter().rev().map(|&b| b as char).collect()
}

/// Decodes a short code back into its identifier.
///
/// Leading `a` symbols are zero digits, so `"ab"` and `"b"` both decode to `1`.
///
/// # Errors
///
/// - [`DecodeError::Empty`] for an empty input
/// - [`DecodeError::InvalidCharacter`] for any symbol outside [`ALPHABET`]
/// - [`DecodeError::Overflow`] if the value does not fit in a `u64`
pub fn decode(code: &str) -> Result<u64, DecodeError> {
    if code.is_empty() {
        return Err(DecodeError::Empty);
    }

    code.chars().try_fold(0u64, |acc, c| {
        let digit = digit_value(c).ok_or(DecodeError::InvalidCharacter(c))?;

        acc.checked_mul(BASE)
            .and_then(|v| v.checked_add(digit))
            .ok_or(DecodeError::Overflow)
    })
}

fn digit_value(c: char) -> Option<u64> {
    ALPHABET.find(c).map(|index| index as u64)
}

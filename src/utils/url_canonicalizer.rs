//! URL canonicalization used to decide when two inputs are the same link.
//!
//! Two raw inputs share a short code exactly when they canonicalize to the
//! same string.

use url::Url;

/// Scheme assumed when the input carries none.
const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Characters that must be escaped in a well-formed URL and are therefore
/// rejected when they appear literally in the input.
const UNSAFE_CHARACTERS: &[char] = &['"', '<', '>', '\\', '^', '`', '{', '|', '}'];

/// Errors that can occur during URL canonicalization.
#[derive(Debug, thiserror::Error)]
pub enum CanonicalizeError {
    #[error("Input consists only of digits")]
    NumericOnly,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL is not well formed")]
    NotWellFormed,

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Canonicalizes a raw, non-blank URL.
///
/// # Canonicalization Rules
///
/// 1. **Digits only**: Rejected, bare numbers are never treated as hostnames
/// 2. **Scheme**: `http://` is prepended unless the input starts with `http`
/// 3. **Well-formedness**: Whitespace, control and unescaped unsafe characters are rejected,
///    as is any `%` not followed by two hex digits
/// 4. **Protocol**: Only HTTP and HTTPS are allowed
/// 5. **Scheme and host**: Lowercased, default ports dropped, empty path becomes `/`
/// 6. **Trailing `?` / `#`**: Stripped, so empty queries and fragments collapse onto the bare URL
/// 7. **Path, query, fragment**: Otherwise preserved as-is
///
/// # Errors
///
/// Returns [`CanonicalizeError::NumericOnly`] for inputs made only of digits,
/// [`CanonicalizeError::InvalidFormat`] when parsing fails,
/// [`CanonicalizeError::NotWellFormed`] for inputs that need escaping and
/// [`CanonicalizeError::UnsupportedProtocol`] for non-HTTP(S) schemes.
///
/// # Examples
///
/// ```
/// use url_shortener::utils::url_canonicalizer::canonicalize;
///
/// assert_eq!(canonicalize("nintex.com").unwrap(), "http://nintex.com/");
/// assert_eq!(canonicalize("https://www.nintex.com/?").unwrap(), "https://www.nintex.com/");
/// ```
pub fn canonicalize(input: &str) -> Result<String, CanonicalizeError> {
    if input.chars().all(char::is_numeric) {
        return Err(CanonicalizeError::NumericOnly);
    }

    if input
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || UNSAFE_CHARACTERS.contains(&c))
    {
        return Err(CanonicalizeError::NotWellFormed);
    }

    if !has_valid_percent_escapes(input) {
        return Err(CanonicalizeError::NotWellFormed);
    }

    let prefixed = if input.starts_with("http") {
        input.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{input}")
    };

    let url =
        Url::parse(&prefixed).map_err(|e| CanonicalizeError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(CanonicalizeError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(CanonicalizeError::NotWellFormed);
    }

    Ok(url
        .as_str()
        .trim_end_matches('?')
        .trim_end_matches('#')
        .to_string())
}

/// Every `%` must start a two hex digit escape.
fn has_valid_percent_escapes(input: &str) -> bool {
    let bytes = input.as_bytes();

    bytes.iter().enumerate().all(|(i, &b)| {
        b != b'%'
            || bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    })
}

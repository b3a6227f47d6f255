//! Byte classification for the lexer.
//!
//! Ember only classifies ASCII: letters, digits and a fixed set of
//! whitespace bytes. Everything else is left to the dispatcher, which turns
//! unrecognized input into illegal tokens.

/// Returns true if `byte` may appear in an identifier.
///
/// Identifiers are runs of ASCII letters and underscores; digits are not
/// part of identifiers, so `x1` lexes as `x` followed by `1`.
///
/// # Example
///
/// ```
/// use emberc_lex::chars::is_letter;
///
/// assert!(is_letter(b'a'));
/// assert!(is_letter(b'_'));
/// assert!(!is_letter(b'1'));
/// ```
#[inline]
pub fn is_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Returns true if `byte` is an ASCII decimal digit.
#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Returns true if `byte` is whitespace skipped between tokens.
///
/// Only space, tab, carriage return and newline count.
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

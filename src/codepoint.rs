//! Codepoint text conversions
//!
//! A codepoint here is the hexadecimal text rendering of a scalar value's
//! ordinal, uppercase and zero-padded to 8 digits by default (the maximum
//! codepoint width). Parsing is case-insensitive.

use crate::error::{FormatError, RangeError, Result};

/// Default zero-padding width for codepoint text
pub const CODEPOINT_ZFILL: usize = 8;

/// Render an ordinal as codepoint text, zero-padded to 8 digits
///
/// ```
/// assert_eq!(rexlit::ord_to_codepoint(0x1F436), "0001F436");
/// ```
pub fn ord_to_codepoint(ordinal: u32) -> String {
    ord_to_codepoint_zfill(ordinal, CODEPOINT_ZFILL)
}

/// Render an ordinal as codepoint text with a caller-chosen padding width
///
/// A `zfill` of 0 disables padding and yields the minimal hex form.
///
/// ```
/// assert_eq!(rexlit::ord_to_codepoint_zfill(0x1F436, 0), "1F436");
/// ```
pub fn ord_to_codepoint_zfill(ordinal: u32, zfill: usize) -> String {
    format!("{ordinal:0zfill$X}")
}

/// Parse codepoint text back into an ordinal
///
/// Accepts upper- or lowercase hex digits, with or without padding.
///
/// # Errors
///
/// [`FormatError::NonHexCodepoint`] if the text is empty or contains a
/// non-hex character; [`RangeError::OrdinalOverflow`] if the value does
/// not fit in a 32-bit ordinal.
pub fn codepoint_to_ord(cpoint: &str) -> Result<u32> {
    if cpoint.is_empty() || !cpoint.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(FormatError::NonHexCodepoint(cpoint.to_string()).into());
    }
    u32::from_str_radix(cpoint, 16)
        .map_err(|_| RangeError::OrdinalOverflow(cpoint.to_string()).into())
}

/// Parse codepoint text into the character it names
///
/// # Errors
///
/// Everything [`codepoint_to_ord`] rejects, plus
/// [`FormatError::NotAScalar`] when the ordinal is a surrogate or above
/// U+10FFFF.
pub fn codepoint_to_char(cpoint: &str) -> Result<char> {
    let ordinal = codepoint_to_ord(cpoint)?;
    char::from_u32(ordinal).ok_or_else(|| FormatError::NotAScalar(ordinal).into())
}

/// Render a character's ordinal as codepoint text, zero-padded to 8 digits
///
/// ```
/// assert_eq!(rexlit::char_to_codepoint('🐶'), "0001F436");
/// ```
pub fn char_to_codepoint(ch: char) -> String {
    ord_to_codepoint(ch as u32)
}

/// Render a character's ordinal as codepoint text with a caller-chosen
/// padding width
pub fn char_to_codepoint_zfill(ch: char, zfill: usize) -> String {
    ord_to_codepoint_zfill(ch as u32, zfill)
}

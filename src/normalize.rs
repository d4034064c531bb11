//! Unicode normalization pass-through

use unicode_normalization::UnicodeNormalization;

/// Normalize a string to NFC (canonical composed form)
///
/// A thin wrapper over the `unicode-normalization` crate, provided so
/// callers can canonicalize input before synthesizing patterns from it.
///
/// ```
/// assert_eq!(rexlit::to_nfc("e\u{301}"), "é");
/// ```
pub fn to_nfc(text: &str) -> String {
    text.nfc().collect()
}

//! Error types for pattern synthesis
//!
//! This module provides error handling using the `thiserror` crate.
//! Errors are categorized by kind: format, range, or value.

use thiserror::Error;

/// The main error type for pattern synthesis
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Malformed codepoint text or a non-scalar ordinal
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// An ordinal outside the representable range
    #[error("range error: {0}")]
    Range(#[from] RangeError),

    /// An invalid regex flavor tag
    #[error("value error: {0}")]
    Value(#[from] ValueError),
}

/// Malformed input text or ordinals
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Codepoint text that is empty or contains a non-hex character
    #[error("invalid hexadecimal codepoint text '{0}'")]
    NonHexCodepoint(String),

    /// An ordinal that is a surrogate or above U+10FFFF
    #[error("ordinal {0:#x} is not a Unicode scalar value")]
    NotAScalar(u32),
}

/// Ordinals outside the representable range
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Codepoint text whose value does not fit in a 32-bit ordinal
    #[error("codepoint text '{0}' overflows the ordinal range")]
    OrdinalOverflow(String),
}

/// Invalid configuration values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An integer tag that names no known regex flavor
    #[error("invalid regex flavor tag: {0}")]
    UnknownFlavor(u8),
}

/// Result type alias for pattern synthesis operations
pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display() {
        let err = PatternError::Format(FormatError::NonHexCodepoint("00zz".to_string()));
        assert_eq!(
            err.to_string(),
            "format error: invalid hexadecimal codepoint text '00zz'"
        );
    }

    #[test]
    fn test_not_a_scalar_display() {
        let err = FormatError::NotAScalar(0xD800);
        assert_eq!(err.to_string(), "ordinal 0xd800 is not a Unicode scalar value");
    }

    #[test]
    fn test_range_error_display() {
        let err = PatternError::Range(RangeError::OrdinalOverflow("FFFFFFFFF".to_string()));
        assert_eq!(
            err.to_string(),
            "range error: codepoint text 'FFFFFFFFF' overflows the ordinal range"
        );
    }

    #[test]
    fn test_value_error_from_kind() {
        let err: PatternError = ValueError::UnknownFlavor(3).into();
        assert_eq!(err.to_string(), "value error: invalid regex flavor tag: 3");
    }
}

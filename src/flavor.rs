//! Regex flavor selection
//!
//! Two target dialects are supported: a backtracking-capable one and a
//! linear-time one without backreferences or lookaround. A process-wide
//! default can be configured once at startup and is read by callers that
//! omit an explicit flavor.

use std::sync::OnceLock;

use crate::error::ValueError;

/// A target regex dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RegexFlavor {
    /// Backtracking-capable dialect (tag 1)
    Backtracking = 1,
    /// Linear-time dialect without backreferences or lookaround (tag 2)
    LinearTime = 2,
}

impl RegexFlavor {
    /// The integer tag of this flavor
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Resolve an optional flavor against the process default
    ///
    /// `Some(flavor)` is returned as-is; `None` reads the configured
    /// default (see [`set_default_flavor`]), falling back to
    /// [`RegexFlavor::Backtracking`].
    pub fn resolve(flavor: Option<RegexFlavor>) -> RegexFlavor {
        flavor.unwrap_or_else(default_flavor)
    }
}

impl TryFrom<u8> for RegexFlavor {
    type Error = ValueError;

    fn try_from(tag: u8) -> Result<Self, ValueError> {
        match tag {
            1 => Ok(RegexFlavor::Backtracking),
            2 => Ok(RegexFlavor::LinearTime),
            other => Err(ValueError::UnknownFlavor(other)),
        }
    }
}

static DEFAULT_FLAVOR: OnceLock<RegexFlavor> = OnceLock::new();

/// Configure the process-wide default flavor
///
/// Single-writer-at-startup: the first call wins and later calls fail,
/// returning the flavor that was rejected. Reconfiguring at runtime is
/// deliberately impossible.
pub fn set_default_flavor(flavor: RegexFlavor) -> Result<(), RegexFlavor> {
    DEFAULT_FLAVOR.set(flavor)
}

/// The process-wide default flavor
///
/// [`RegexFlavor::Backtracking`] unless [`set_default_flavor`] was called.
pub fn default_flavor() -> RegexFlavor {
    DEFAULT_FLAVOR
        .get()
        .copied()
        .unwrap_or(RegexFlavor::Backtracking)
}

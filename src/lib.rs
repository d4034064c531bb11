//! Rexlit
//!
//! A literal-to-pattern expression synthesizer: given raw characters or
//! strings, rexlit produces regex source text that matches those inputs
//! exactly, escaped for one of two dialects — a backtracking-capable one
//! and a linear-time one without backreferences or lookaround. It also
//! compacts character sets into minimal class bodies and splices text by
//! index spans.
//!
//! Rexlit only emits pattern text; compiling and executing it is the job
//! of a regex engine.
//!
//! ```
//! use rexlit::{alternation, class_body, escape, RegexFlavor};
//!
//! assert_eq!(escape('.', RegexFlavor::Backtracking), "\\.");
//! assert_eq!(escape('/', RegexFlavor::LinearTime), "\\x{2f}");
//! assert_eq!(alternation(["a", "ab"], RegexFlavor::Backtracking), "ab|a");
//!
//! let body = class_body("abcxyz".chars(), RegexFlavor::Backtracking);
//! assert_eq!(format!("[{body}]"), "[a-cx-z]");
//! ```

pub mod classes;
pub mod codepoint;
pub mod error;
pub mod escape;
pub mod flavor;
pub mod mask;
pub mod normalize;
pub mod pattern;
pub mod range;

pub use classes::class_body;
pub use codepoint::{
    char_to_codepoint, char_to_codepoint_zfill, codepoint_to_char, codepoint_to_ord,
    ord_to_codepoint, ord_to_codepoint_zfill, CODEPOINT_ZFILL,
};
pub use error::{FormatError, PatternError, RangeError, Result, ValueError};
pub use escape::escape;
pub use flavor::{default_flavor, set_default_flavor, RegexFlavor};
pub use mask::{mask_span, mask_spans, Span};
pub use normalize::to_nfc;
pub use pattern::{alternation, sort_by_len_and_alpha, string_pattern};
pub use range::{char_range, iter_char_range, CharRange};

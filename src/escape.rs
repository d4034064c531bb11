//! Dialect-aware character escaping
//!
//! Each dialect defines its own notion of a safe literal. The backtracking
//! dialect backslash-escapes a fixed reserved set and leaves everything
//! else verbatim; the linear-time dialect rewrites every non-alphanumeric
//! character to its codepoint-literal form `\x{..}`.

use crate::flavor::RegexFlavor;

/// Characters the backtracking dialect requires a preceding backslash for:
/// its metacharacters plus the whitespace controls. Everything outside
/// this set must be left verbatim, so the output never fabricates a
/// reserved escape form such as `\d`, `\s`, `\w`, or `\1`.
pub(crate) fn is_reserved(ch: char) -> bool {
    matches!(
        ch,
        '(' | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '?'
            | '*'
            | '+'
            | '-'
            | '|'
            | '^'
            | '$'
            | '\\'
            | '.'
            | '&'
            | '~'
            | '#'
            | ' '
            | '\t'
            | '\n'
            | '\r'
            | '\u{B}'
            | '\u{C}'
    )
}

pub(crate) fn push_escaped(out: &mut String, ch: char, flavor: RegexFlavor) {
    match flavor {
        RegexFlavor::Backtracking => {
            if is_reserved(ch) {
                out.push('\\');
            }
            out.push(ch);
        }
        RegexFlavor::LinearTime => {
            if ch.is_ascii_alphanumeric() {
                out.push(ch);
            } else {
                // Codepoint-literal form, lowercase and unpadded.
                out.push_str(&format!("\\x{{{:x}}}", ch as u32));
            }
        }
    }
}

/// Build a pattern fragment that matches exactly one character
///
/// The fragment is unanchored and also safe inside a character class:
/// `-`, `]`, and `^` come out escaped in both dialects.
///
/// ```
/// use rexlit::{escape, RegexFlavor};
///
/// assert_eq!(escape('a', RegexFlavor::Backtracking), "a");
/// assert_eq!(escape('.', RegexFlavor::Backtracking), "\\.");
/// assert_eq!(escape('/', RegexFlavor::Backtracking), "/");
/// assert_eq!(escape('/', RegexFlavor::LinearTime), "\\x{2f}");
/// ```
pub fn escape(ch: char, flavor: RegexFlavor) -> String {
    let mut out = String::new();
    push_escaped(&mut out, ch, flavor);
    out
}

//! Exact-match expression synthesis
//!
//! Strings become concatenations of escaped characters; collections of
//! strings become alternations ordered so that no alternative can starve
//! a longer one that it prefixes.

use crate::escape::push_escaped;
use crate::flavor::RegexFlavor;

/// Fragment that can never match, used for empty alternations. Valid in
/// both dialects and free of backreferences and lookaround.
const NEVER_MATCH: &str = r"[^\s\S]";

/// Build a pattern fragment that matches exactly one string
///
/// The empty string yields the empty fragment.
///
/// ```
/// use rexlit::{string_pattern, RegexFlavor};
///
/// assert_eq!(
///     string_pattern("a.b", RegexFlavor::Backtracking),
///     "a\\.b"
/// );
/// assert_eq!(
///     string_pattern("a/b", RegexFlavor::LinearTime),
///     "a\\x{2f}b"
/// );
/// ```
pub fn string_pattern(text: &str, flavor: RegexFlavor) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        push_escaped(&mut out, ch, flavor);
    }
    out
}

/// Build a pattern fragment that matches exactly any one of the strings
///
/// Duplicates are removed and the alternatives are ordered longest first
/// (lexicographic tiebreak), so a short alternative that prefixes a longer
/// one is never tried before it. An empty collection yields a fragment
/// that matches nothing; callers may rely on "cannot match" but not on
/// its encoding.
///
/// ```
/// use rexlit::{alternation, RegexFlavor};
///
/// assert_eq!(
///     alternation(["a", "ab"], RegexFlavor::Backtracking),
///     "ab|a"
/// );
/// ```
pub fn alternation<I, S>(texts: I, flavor: RegexFlavor) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut unique: Vec<String> = texts
        .into_iter()
        .map(|text| text.as_ref().to_string())
        .collect();
    unique.sort_unstable();
    unique.dedup();
    if unique.is_empty() {
        return NEVER_MATCH.to_string();
    }
    unique.sort_by(len_and_alpha);
    let escaped: Vec<String> = unique
        .iter()
        .map(|text| string_pattern(text, flavor))
        .collect();
    escaped.join("|")
}

/// Sort strings by length (longest first), then alphabetically
///
/// The ordering the alternation builder uses, exposed for callers that
/// assemble alternations themselves. `reverse` inverts the whole order.
///
/// ```
/// let sorted = rexlit::sort_by_len_and_alpha(["z", "a", "aa"], false);
/// assert_eq!(sorted, vec!["aa", "a", "z"]);
/// ```
pub fn sort_by_len_and_alpha<I, S>(texts: I, reverse: bool) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sorted: Vec<String> = texts
        .into_iter()
        .map(|text| text.as_ref().to_string())
        .collect();
    sorted.sort_by(len_and_alpha);
    if reverse {
        sorted.reverse();
    }
    sorted
}

/// Longest first, by scalar-value count, then lexicographic.
fn len_and_alpha(a: &String, b: &String) -> std::cmp::Ordering {
    b.chars()
        .count()
        .cmp(&a.chars().count())
        .then_with(|| a.cmp(b))
}

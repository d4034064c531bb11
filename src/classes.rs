//! Character-class compaction
//!
//! Collapses a set of discrete characters into the minimal sequence of
//! singles and ranges for a character class body.

use crate::escape::push_escaped;
use crate::flavor::RegexFlavor;

/// Build the body of a character class matching exactly the given
/// characters
///
/// Duplicates are removed, the characters are ordered by ascending
/// ordinal, and maximal runs of consecutive ordinals are collapsed to
/// `first-last` ranges. A run of two is left as two singles, since the
/// range form would be no shorter. The result carries no enclosing
/// brackets; callers wrap it themselves.
///
/// ```
/// use rexlit::{class_body, RegexFlavor};
///
/// let body = class_body("abczyx".chars(), RegexFlavor::Backtracking);
/// assert_eq!(format!("[{body}]"), "[a-cx-z]");
/// ```
pub fn class_body<I>(chars: I, flavor: RegexFlavor) -> String
where
    I: IntoIterator<Item = char>,
{
    let mut unique: Vec<char> = chars.into_iter().collect();
    unique.sort_unstable();
    unique.dedup();

    let mut out = String::new();
    let mut run: Option<(char, char)> = None;
    for ch in unique {
        match run {
            Some((first, last)) if ch as u32 == last as u32 + 1 => {
                run = Some((first, ch));
            }
            Some((first, last)) => {
                push_run(&mut out, first, last, flavor);
                run = Some((ch, ch));
            }
            None => {
                run = Some((ch, ch));
            }
        }
    }
    if let Some((first, last)) = run {
        push_run(&mut out, first, last, flavor);
    }
    out
}

/// Render one run of consecutive ordinals: a range for three or more,
/// singles otherwise.
fn push_run(out: &mut String, first: char, last: char, flavor: RegexFlavor) {
    if last as u32 - first as u32 >= 2 {
        push_escaped(out, first, flavor);
        out.push('-');
        push_escaped(out, last, flavor);
    } else {
        let mut ch = first;
        loop {
            push_escaped(out, ch, flavor);
            if ch == last {
                break;
            }
            // A run never crosses the surrogate block, so the next
            // ordinal is always a scalar value.
            ch = char::from_u32(ch as u32 + 1).unwrap();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(class_body([], RegexFlavor::Backtracking), "");
    }

    #[test]
    fn test_single_character() {
        assert_eq!(class_body(['a'], RegexFlavor::Backtracking), "a");
        assert_eq!(class_body(['.'], RegexFlavor::Backtracking), "\\.");
    }

    #[test]
    fn test_two_run_stays_singles() {
        assert_eq!(class_body(['a', 'b'], RegexFlavor::Backtracking), "ab");
    }

    #[test]
    fn test_three_run_becomes_range() {
        assert_eq!(class_body(['a', 'b', 'c'], RegexFlavor::Backtracking), "a-c");
    }

    #[test]
    fn test_mixed_runs() {
        assert_eq!(
            class_body("abcxyz".chars(), RegexFlavor::Backtracking),
            "a-cx-z"
        );
        assert_eq!(
            class_body("abce".chars(), RegexFlavor::Backtracking),
            "a-ce"
        );
    }

    #[test]
    fn test_order_and_duplicates_irrelevant() {
        let canonical = class_body("abc".chars(), RegexFlavor::Backtracking);
        assert_eq!(class_body("cab".chars(), RegexFlavor::Backtracking), canonical);
        assert_eq!(
            class_body("abbc".chars(), RegexFlavor::Backtracking),
            canonical
        );
    }

    #[test]
    fn test_class_metacharacters_escaped() {
        assert_eq!(
            class_body(['-', ']', '^'], RegexFlavor::Backtracking),
            "\\-\\]\\^"
        );
    }

    #[test]
    fn test_linear_time_boundaries_use_codepoint_form() {
        assert_eq!(
            class_body(['!', '"', '#', '$'], RegexFlavor::LinearTime),
            "\\x{21}-\\x{24}"
        );
    }

    #[test]
    fn test_non_ascii_range() {
        assert_eq!(
            class_body(['🐶', '🐷', '🐸'], RegexFlavor::Backtracking),
            "🐶-🐸"
        );
    }
}

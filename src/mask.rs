//! Span-based text masking
//!
//! Replaces half-open index ranges of a string with substitute text.
//! Independent of the regex-facing modules; indices are byte offsets into
//! the `&str` and must fall on character boundaries.

use std::ops::Range;

/// A half-open byte interval `[start, end)` over a string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Span { start, end }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span {
            start: range.start,
            end: range.end,
        }
    }
}

/// Replace one span of a string with a mask
///
/// With no mask the span is simply cut out. An empty span inserts the
/// mask without removing anything. Indices must be in bounds, on
/// character boundaries, and `start <= end`; this is a caller contract,
/// checked only by `debug_assert!`.
///
/// ```
/// use rexlit::mask_span;
///
/// assert_eq!(
///     mask_span("This is an example", (8, 8).into(), Some("not ")),
///     "This is not an example"
/// );
/// assert_eq!(mask_span("abcdef", (1, 5).into(), None), "af");
/// ```
pub fn mask_span(text: &str, span: Span, mask: Option<&str>) -> String {
    debug_assert!(span.start <= span.end && span.end <= text.len());
    let mut out = String::with_capacity(text.len() + mask.map_or(0, str::len));
    out.push_str(&text[..span.start]);
    if let Some(mask) = mask {
        out.push_str(mask);
    }
    out.push_str(&text[span.end..]);
    out
}

/// Replace multiple spans of a string in one left-to-right pass
///
/// `masks`, when given, pairs up with `spans` positionally and must have
/// the same length. Spans must be sorted ascending and non-overlapping —
/// a caller contract, checked only by `debug_assert!`; violating it
/// yields unspecified output.
///
/// ```
/// use rexlit::{mask_spans, Span};
///
/// let spans = [Span::new(9, 10), Span::new(11, 18)];
/// assert_eq!(
///     mask_spans("This is an example", &spans, Some(&[" good", "sample"])),
///     "This is a good sample"
/// );
/// ```
pub fn mask_spans(text: &str, spans: &[Span], masks: Option<&[&str]>) -> String {
    if let Some(masks) = masks {
        debug_assert_eq!(spans.len(), masks.len());
    }
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (index, span) in spans.iter().enumerate() {
        debug_assert!(cursor <= span.start && span.start <= span.end);
        debug_assert!(span.end <= text.len());
        out.push_str(&text[cursor..span.start]);
        if let Some(masks) = masks {
            out.push_str(masks[index]);
        }
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

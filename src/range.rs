//! Character range generation
//!
//! Produces every scalar value between two endpoint characters, both ends
//! inclusive. Direction is inferred from the ordinals: ranges ascend when
//! the first endpoint is not above the last, and descend otherwise, so
//! swapping the endpoints reverses the sequence rather than failing.

/// Lazy iterator over an inclusive character range
///
/// Restartable by cloning before iteration. Ordinals inside the surrogate
/// block `U+D800..=U+DFFF` are not scalar values and are skipped.
#[derive(Debug, Clone)]
pub struct CharRange {
    next: u32,
    last: u32,
    descending: bool,
    exhausted: bool,
}

impl CharRange {
    fn new(first: char, last: char) -> Self {
        CharRange {
            next: first as u32,
            last: last as u32,
            descending: first > last,
            exhausted: false,
        }
    }
}

impl Iterator for CharRange {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        while !self.exhausted {
            let current = self.next;
            if current == self.last {
                self.exhausted = true;
            } else if self.descending {
                self.next -= 1;
            } else {
                self.next += 1;
            }
            // None only for surrogate ordinals, which are skipped.
            if let Some(ch) = char::from_u32(current) {
                return Some(ch);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        let remaining = self.next.abs_diff(self.last) as usize + 1;
        // The lower bound discounts a possible pass through the
        // surrogate block.
        (remaining.saturating_sub(0x800), Some(remaining))
    }
}

impl std::iter::FusedIterator for CharRange {}

/// Iterate all characters between two endpoints, inclusive
///
/// ```
/// let range: Vec<char> = rexlit::iter_char_range('a', 'd').collect();
/// assert_eq!(range, vec!['a', 'b', 'c', 'd']);
/// ```
pub fn iter_char_range(first: char, last: char) -> CharRange {
    CharRange::new(first, last)
}

/// Collect all characters between two endpoints, inclusive
///
/// ```
/// assert_eq!(rexlit::char_range('d', 'a'), vec!['d', 'c', 'b', 'a']);
/// ```
pub fn char_range(first: char, last: char) -> Vec<char> {
    iter_char_range(first, last).collect()
}

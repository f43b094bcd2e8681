//! Byte-offset source spans.
//!
//! A `Span` is a half-open `[start, end)` range of byte offsets into one
//! source file. Spans never refer to the file by name; the owning diagnostic
//! or syntax node carries the file association.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` within a single source file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start position (byte offset, inclusive)
    pub start: u32,
    /// End position (byte offset, exclusive)
    pub end: u32,
}

impl Span {
    /// Create a new span from start/end byte offsets.
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Span { start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers zero bytes.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether `offset` falls inside the span.
    pub fn contains(&self, offset: u32) -> bool {
        self.start <= offset && offset < self.end
    }

    /// The source text the span covers.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        let start = self.start as usize;
        let end = self.end as usize;
        if end <= source.len() && start <= end {
            &source[start..end]
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_len_and_contains() {
        let span = Span::new(4, 10);
        assert_eq!(span.len(), 6);
        assert!(!span.is_empty());
        assert!(span.contains(4));
        assert!(span.contains(9));
        assert!(!span.contains(10));
        assert!(!span.contains(3));
    }

    #[test]
    fn span_text_slices_source() {
        let source = "throw new Exception(\"Oh no!\");";
        let span = Span::new(6, 29);
        assert_eq!(span.text(source), "new Exception(\"Oh no!\")");
    }

    #[test]
    fn span_text_out_of_bounds_is_empty() {
        let span = Span::new(10, 50);
        assert_eq!(span.text("short"), "");
    }
}

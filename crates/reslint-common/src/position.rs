//! Line/column positions and the line map that produces them.
//!
//! Diagnostics are stored with byte offsets; hosts and the verification
//! harness convert them to 1-based line/column pairs through a `LineMap`
//! built once per source file.

use serde::{Deserialize, Serialize};

/// A 1-based line/column pair within one source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// Byte offsets of every line start in a source file.
///
/// Built once per file; lookups are a binary search over the line starts.
#[derive(Clone, Debug)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Build the line map for `source`.
    pub fn build(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for nl in memchr::memchr_iter(b'\n', source.as_bytes()) {
            line_starts.push((nl + 1) as u32);
        }
        LineMap { line_starts }
    }

    /// Number of lines in the file (a trailing newline opens a final empty line).
    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32
    }

    /// Convert a byte offset to a 1-based line/column position.
    ///
    /// Offsets past the end of the file clamp to the last line. Columns count
    /// bytes from the line start; multi-byte characters are not expanded.
    pub fn position(&self, offset: u32) -> Position {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        // line_starts always holds at least offset 0, so line_idx is in range.
        let line_start = self.line_starts[line_idx];
        Position {
            line: (line_idx + 1) as u32,
            column: offset - line_start + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_positions() {
        let map = LineMap::build("abc\ndef\n");
        assert_eq!(map.position(0), Position { line: 1, column: 1 });
        assert_eq!(map.position(2), Position { line: 1, column: 3 });
    }

    #[test]
    fn later_line_positions() {
        let map = LineMap::build("abc\ndef\nghi");
        assert_eq!(map.position(4), Position { line: 2, column: 1 });
        assert_eq!(map.position(9), Position { line: 3, column: 2 });
    }

    #[test]
    fn offset_at_newline_belongs_to_its_line() {
        let map = LineMap::build("ab\ncd");
        // The '\n' at offset 2 is still on line 1.
        assert_eq!(map.position(2), Position { line: 1, column: 3 });
    }

    #[test]
    fn empty_source_has_one_line() {
        let map = LineMap::build("");
        assert_eq!(map.line_count(), 1);
        assert_eq!(map.position(0), Position { line: 1, column: 1 });
    }
}

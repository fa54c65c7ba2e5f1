//! Zero-based document coordinates shared by every analysis phase.
//!
//! Columns count UTF-16 code units, which is what editor hosts use for
//! their own positions.

use serde::{Deserialize, Serialize};

/// A single character cell in a document.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }

    /// The position immediately after `ch`, when `ch` starts at `self`.
    pub fn advance(self, ch: char) -> Self {
        if ch == '\n' {
            Self::new(self.line + 1, 0)
        } else {
            Self::new(self.line, self.character + ch.len_utf16() as u32)
        }
    }

    /// Advance over every character of `text`.
    pub fn advance_str(self, text: &str) -> Self {
        text.chars().fold(self, Position::advance)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

/// Half-open span between two positions (`end` exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Build a range; the endpoints are reordered if given backwards.
    pub fn new(start: Position, end: Position) -> Self {
        if end < start {
            Self { start: end, end: start }
        } else {
            Self { start, end }
        }
    }

    pub fn from_coords(start_line: u32, start_char: u32, end_line: u32, end_char: u32) -> Self {
        Self::new(
            Position::new(start_line, start_char),
            Position::new(end_line, end_char),
        )
    }

    /// Zero-length range at `pos`.
    pub const fn point(pos: Position) -> Self {
        Self { start: pos, end: pos }
    }
}

/// Line-start table for one document.
///
/// Built once per validation run; converting a byte offset is a binary
/// search over line starts plus a UTF-16 count within the line.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { text, line_starts }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset of the first character of `line`.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Text of `line` without its terminator.
    pub fn line_text(&self, line: usize) -> Option<&'a str> {
        let start = self.line_start(line)?;
        let end = self
            .line_start(line + 1)
            .map(|next| next - 1)
            .unwrap_or(self.text.len());
        let raw = &self.text[start..end];
        Some(raw.strip_suffix('\r').unwrap_or(raw))
    }

    /// Convert a byte offset into a position. Offsets past the end clamp
    /// to the end of the document.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let start = self.line_starts[line];
        let character = self.text[start..offset].encode_utf16().count();
        Position::new(line as u32, character as u32)
    }

    pub fn range(&self, start: usize, end: usize) -> Range {
        Range::new(self.position(start), self.position(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_ordering_is_line_major() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
    }

    #[test]
    fn range_new_reorders_backwards_endpoints() {
        let r = Range::new(Position::new(3, 4), Position::new(1, 0));
        assert_eq!(r.start, Position::new(1, 0));
        assert_eq!(r.end, Position::new(3, 4));
    }

    #[test]
    fn advance_handles_newlines_and_wide_chars() {
        let p = Position::default().advance_str("ab\ncd");
        assert_eq!(p, Position::new(1, 2));
        let p = Position::default().advance('😀');
        assert_eq!(p, Position::new(0, 2));
    }

    #[test]
    fn line_index_maps_offsets() {
        let text = "version: '2.0'\nworkflows:\n  wf1:\n";
        let index = LineIndex::new(text);
        assert_eq!(index.line_count(), 4);
        assert_eq!(index.position(0), Position::new(0, 0));
        assert_eq!(index.position(15), Position::new(1, 0));
        assert_eq!(index.position(28), Position::new(2, 2));
        assert_eq!(index.position(10_000), Position::new(3, 0));
    }

    #[test]
    fn line_text_strips_crlf() {
        let index = LineIndex::new("a: 1\r\nb: 2");
        assert_eq!(index.line_text(0), Some("a: 1"));
        assert_eq!(index.line_text(1), Some("b: 2"));
        assert_eq!(index.line_text(2), None);
    }

    #[test]
    fn utf16_columns() {
        let index = LineIndex::new("é😀x");
        // 'é' is 2 bytes / 1 unit, '😀' is 4 bytes / 2 units
        assert_eq!(index.position(6), Position::new(0, 3));
    }
}

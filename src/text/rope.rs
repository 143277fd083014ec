//! Rope wrapper using the ropey crate.
//!
//! The rope is built without ropey's Unicode and CR line-break features, so
//! `\n` is the only terminator and the line count is always the number of
//! `\n` runes plus one.

use ropey::{Rope, RopeSlice};
use std::ops::Range;

/// Wrapper around `ropey::Rope` addressing text by (line, column).
#[derive(Clone, Debug, Default)]
pub struct RopeWrapper {
    rope: Rope,
}

impl RopeWrapper {
    /// Create a rope from a string.
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Get the number of lines.
    #[must_use]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get a line by index, without its terminator.
    #[must_use]
    pub fn line(&self, idx: usize) -> Option<RopeSlice<'_>> {
        let line = self.rope.get_line(idx)?;
        let len = Self::content_len(line);
        Some(line.slice(..len))
    }

    /// Number of characters in a line, terminator excluded.
    #[must_use]
    pub fn line_len(&self, idx: usize) -> Option<usize> {
        self.rope.get_line(idx).map(Self::content_len)
    }

    /// Absolute char index of `(line, col)`.
    ///
    /// Callers validate `col` against [`line_len`](Self::line_len) first.
    #[must_use]
    pub fn char_index(&self, line: usize, col: usize) -> usize {
        self.rope.line_to_char(line) + col
    }

    /// Insert a character at an absolute char index.
    pub fn insert_char(&mut self, char_idx: usize, ch: char) {
        self.rope.insert_char(char_idx, ch);
    }

    /// Insert text at an absolute char index.
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        self.rope.insert(char_idx, text);
    }

    /// Remove an absolute char range.
    pub fn remove(&mut self, range: Range<usize>) {
        if range.start < range.end {
            self.rope.remove(range);
        }
    }

    /// Iterate over all lines, terminators excluded.
    pub fn lines(&self) -> impl Iterator<Item = RopeSlice<'_>> {
        self.rope.lines().map(|line| {
            let len = Self::content_len(line);
            line.slice(..len)
        })
    }

    /// Convert to string.
    #[must_use]
    pub fn to_string(&self) -> String {
        self.rope.to_string()
    }

    fn content_len(line: RopeSlice<'_>) -> usize {
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rope_basic() {
        let rope = RopeWrapper::from_str("Hello, world!");
        assert_eq!(rope.len_lines(), 1);
        assert_eq!(rope.line_len(0), Some(13));
    }

    #[test]
    fn test_rope_multiline() {
        let rope = RopeWrapper::from_str("Line 1\nLine 2\nLine 3");
        assert_eq!(rope.len_lines(), 3);
        assert_eq!(rope.line(0).unwrap().to_string(), "Line 1");
        assert_eq!(rope.line(2).unwrap().to_string(), "Line 3");
        assert_eq!(rope.line_len(1), Some(6));
        assert!(rope.line(3).is_none());
    }

    #[test]
    fn test_rope_only_lf_breaks() {
        let rope = RopeWrapper::from_str("a\rb\u{2028}c");
        assert_eq!(rope.len_lines(), 1);
        assert_eq!(rope.line_len(0), Some(5));
    }

    #[test]
    fn test_rope_insert_remove() {
        let mut rope = RopeWrapper::from_str("Hello!");
        rope.insert(5, ", world");
        assert_eq!(rope.to_string(), "Hello, world!");
        rope.remove(5..12);
        assert_eq!(rope.to_string(), "Hello!");
        rope.remove(3..3);
        assert_eq!(rope.to_string(), "Hello!");
    }

    #[test]
    fn test_rope_char_index() {
        let rope = RopeWrapper::from_str("ab\ncd");
        assert_eq!(rope.char_index(1, 1), 4);
    }

    #[test]
    fn test_rope_lines_iter() {
        let rope = RopeWrapper::from_str("x\n\ny");
        let lines: Vec<String> = rope.lines().map(|l| l.to_string()).collect();
        assert_eq!(lines, vec!["x", "", "y"]);
    }
}

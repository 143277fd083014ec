//! Logical lines as rune sequences.

use crate::unicode::{WidthMethod, display_width_chars, display_width_chars_with_method};
use std::fmt;
use std::ops::Deref;

/// One logical line of a document.
///
/// A line is a sequence of Unicode scalar values, never bytes, and never
/// contains the `\n` terminator. Columns everywhere in this crate index into
/// this sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Line {
    runes: Vec<char>,
}

impl Line {
    /// Create an empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of runes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.runes.len()
    }

    /// Check if the line is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    /// The runes of this line.
    #[must_use]
    pub fn as_chars(&self) -> &[char] {
        &self.runes
    }

    /// Rune at `col`, if any.
    #[must_use]
    pub fn rune(&self, col: usize) -> Option<char> {
        self.runes.get(col).copied()
    }

    /// Display width of the whole line (global method).
    #[must_use]
    pub fn display_width(&self) -> usize {
        display_width_chars(&self.runes)
    }

    /// Display width of the whole line using a specific method.
    #[must_use]
    pub fn display_width_with_method(&self, method: WidthMethod) -> usize {
        display_width_chars_with_method(&self.runes, method)
    }

}

impl Deref for Line {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.runes
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.runes {
            fmt::Write::write_char(f, *c)?;
        }
        Ok(())
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl From<Vec<char>> for Line {
    fn from(runes: Vec<char>) -> Self {
        Self { runes }
    }
}

impl FromIterator<char> for Line {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            runes: iter.into_iter().collect(),
        }
    }
}

//! Line-oriented document storage and point edits.
//!
//! [`Document`] owns the ordered logical lines of one editing session. Every
//! operation addresses text by `(row, col)` where `col` counts runes, and
//! every out-of-range index is reported as an error rather than clamped.
//!
//! # Examples
//!
//! ```
//! use ge_text::Document;
//!
//! let mut doc = Document::load(b"ab\ncd").unwrap();
//! doc.insert_rune('X', 0, 1).unwrap();
//! assert_eq!(doc.line(0).unwrap().to_string(), "aXb");
//!
//! doc.split_line(1, 1).unwrap();
//! assert_eq!(doc.height(), 3);
//! assert_eq!(doc.text(), "aXb\nc\nd");
//! ```

use crate::error::{Error, Result};
use crate::text::Line;
use crate::text::rope::RopeWrapper;
use crate::unicode::{WidthMethod, display_width_char_with_method, width_method};
use std::ops::Range;
use tracing::{debug, trace};

/// The line terminator; inserting it splits a line.
pub const LINE_TERMINATOR: char = '\n';

/// An ordered, mutable sequence of logical lines.
///
/// A document always holds at least one (possibly empty) line.
#[derive(Clone, Debug, Default)]
pub struct Document {
    rope: RopeWrapper,
}

impl Document {
    /// Create a document with a single empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode raw bytes into a document.
    ///
    /// Lines are split on `\n` and a final terminator does not open an extra
    /// empty line. A `\r` is dropped only when it directly precedes `\n`; a
    /// lone `\r`, or one ending the unterminated tail, stays as content. Decoding is strict UTF-8: the first invalid
    /// sequence fails the whole load and nothing partial is returned.
    pub fn load(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            let err = Error::from(e);
            debug!(%err, len = bytes.len(), "document load rejected");
            err
        })?;

        let mut normalized = String::with_capacity(text.len());
        let mut segments = text.split('\n').enumerate().peekable();
        while let Some((i, segment)) = segments.next() {
            let terminated = segments.peek().is_some();
            if i > 0 {
                // Empty tail after the final terminator
                if !terminated && segment.is_empty() {
                    break;
                }
                normalized.push(LINE_TERMINATOR);
            }
            // Only a CRLF terminator loses its `\r`
            let line = if terminated {
                segment.strip_suffix('\r').unwrap_or(segment)
            } else {
                segment
            };
            normalized.push_str(line);
        }

        let doc = Self {
            rope: RopeWrapper::from_str(&normalized),
        };
        debug!(
            bytes = bytes.len(),
            lines = doc.height(),
            "document loaded"
        );
        Ok(doc)
    }

    /// Build a document from already-decoded text, using the same line rules
    /// as [`load`](Self::load).
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        // A &str is valid UTF-8, so decoding cannot fail.
        Self::load(text.as_bytes()).unwrap_or_default()
    }

    /// Number of logical lines.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rope.len_lines()
    }

    /// Rune length of line `row`.
    pub fn line_len(&self, row: usize) -> Result<usize> {
        self.rope
            .line_len(row)
            .ok_or(Error::RowOutOfBounds {
                row,
                height: self.height(),
            })
    }

    /// Snapshot of line `row`.
    pub fn line(&self, row: usize) -> Result<Line> {
        self.rope
            .line(row)
            .map(|slice| slice.chars().collect())
            .ok_or(Error::RowOutOfBounds {
                row,
                height: self.height(),
            })
    }

    /// Iterate over every line in order.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.rope.lines().map(|slice| slice.chars().collect())
    }

    /// Insert `r` at `(row, col)`.
    ///
    /// Inserting the line terminator behaves exactly like
    /// [`split_line`](Self::split_line).
    pub fn insert_rune(&mut self, r: char, row: usize, col: usize) -> Result<()> {
        if r == LINE_TERMINATOR {
            return self.split_line(row, col);
        }
        let idx = self.checked_index(row, col)?;
        self.rope.insert_char(idx, r);
        trace!(row, col, rune = ?r, "rune inserted");
        Ok(())
    }

    /// Insert a run of runes at `(row, col)`. Terminators split lines.
    pub fn insert_str(&mut self, text: &str, row: usize, col: usize) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        self.rope.insert(idx, text);
        trace!(row, col, len = text.len(), "text inserted");
        Ok(())
    }

    /// Split line `row` at `col`; the tail becomes line `row + 1`.
    ///
    /// The caller moves its cursor to `(row + 1, 0)`.
    pub fn split_line(&mut self, row: usize, col: usize) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        self.rope.insert_char(idx, LINE_TERMINATOR);
        trace!(row, col, height = self.height(), "line split");
        Ok(())
    }

    /// Append line `row` to line `row - 1` and remove it.
    ///
    /// Returns the former length of line `row - 1`, which is where the caller
    /// puts its cursor on row `row - 1`. Row 0 has nothing above it and
    /// yields `None` without touching the document.
    pub fn merge_line_above(&mut self, row: usize) -> Result<Option<usize>> {
        self.line_len(row)?;
        if row == 0 {
            return Ok(None);
        }
        let col = self.line_len(row - 1)?;
        let idx = self.rope.char_index(row - 1, col);
        self.rope.remove(idx..idx + 1);
        trace!(row, col, "merged line above");
        Ok(Some(col))
    }

    /// Append line `row + 1` to line `row` and remove it.
    ///
    /// Returns `false` without touching the document when `row` is the last
    /// line.
    pub fn merge_line_below(&mut self, row: usize) -> Result<bool> {
        let len = self.line_len(row)?;
        if row + 1 >= self.height() {
            return Ok(false);
        }
        let idx = self.rope.char_index(row, len);
        self.rope.remove(idx..idx + 1);
        trace!(row, "merged line below");
        Ok(true)
    }

    /// Remove the rune at `(row, col)`, returning it.
    pub fn remove_rune(&mut self, row: usize, col: usize) -> Result<char> {
        let len = self.line_len(row)?;
        if col >= len {
            return Err(Error::ColumnOutOfBounds { row, col, len });
        }
        let line = self.line(row)?;
        let idx = self.rope.char_index(row, col);
        self.rope.remove(idx..idx + 1);
        Ok(line.as_chars()[col])
    }

    /// Remove runes `range` from line `row`.
    pub fn remove_range(&mut self, row: usize, range: Range<usize>) -> Result<()> {
        let len = self.line_len(row)?;
        if range.start > range.end || range.end > len {
            return Err(Error::ColumnOutOfBounds {
                row,
                col: range.end.max(range.start),
                len,
            });
        }
        let start = self.rope.char_index(row, range.start);
        let end = self.rope.char_index(row, range.end);
        self.rope.remove(start..end);
        trace!(row, start = range.start, end = range.end, "range removed");
        Ok(())
    }

    /// Delete everything from `col` to the end of line `row`.
    pub fn truncate_line(&mut self, row: usize, col: usize) -> Result<()> {
        let len = self.line_len(row)?;
        self.remove_range(row, col..len)
    }

    /// Delete the first `col` runes of line `row`.
    pub fn drain_line_head(&mut self, row: usize, col: usize) -> Result<()> {
        self.remove_range(row, 0..col)
    }

    /// Sum of every line's display width (global method).
    #[must_use]
    pub fn total_display_width(&self) -> usize {
        self.total_display_width_with_method(width_method())
    }

    /// Sum of every line's display width using a specific method.
    #[must_use]
    pub fn total_display_width_with_method(&self, method: WidthMethod) -> usize {
        self.rope
            .lines()
            .map(|line| {
                line.chars()
                    .map(|c| display_width_char_with_method(c, method))
                    .sum::<usize>()
            })
            .sum()
    }

    /// Lines joined with the terminator, the form handed to a highlighter.
    #[must_use]
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        let len = self.line_len(row)?;
        if col > len {
            return Err(Error::ColumnOutOfBounds { row, col, len });
        }
        Ok(self.rope.char_index(row, col))
    }
}

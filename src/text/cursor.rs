//! Mapping logical cursor positions into soft-wrapped visual space.

use crate::error::Result;
use crate::text::Document;
use crate::text::wrap::{VisualLine, wrap_with_method};
use crate::unicode::{WidthMethod, display_width_chars_with_method, width_method};

/// Logical cursor position: a document row and a rune column in that row.
///
/// `col` may equal the line length (the append position).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CursorPosition {
    pub row: usize,
    pub col: usize,
}

impl CursorPosition {
    /// Create a cursor position.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Where a cursor sits within the visual lines of its row.
///
/// Derived on demand from `(document, position, width)`; never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineInfo {
    /// Rune count of the visual line holding the cursor.
    pub width: usize,
    /// Display width of the visual line holding the cursor.
    pub char_width: usize,
    /// Number of visual lines the row wraps into.
    pub height: usize,
    /// Rune column of the row at which the cursor's visual line starts.
    pub start_column: usize,
    /// Display columns between the start of the visual line and the cursor.
    pub column_offset: usize,
    /// Index of the cursor's visual line within the row.
    pub row_offset: usize,
    /// Runes between the start of the visual line and the cursor.
    pub char_offset: usize,
}

/// Locate rune column `col` of `line` wrapped at `width`.
///
/// A cursor exactly on a soft-wrap boundary with more visual lines below is
/// reported at the start of the following visual line, not at the end of the
/// current one. A column past the end of the line yields the default
/// `LineInfo`.
#[must_use]
pub fn locate_in_line(line: &[char], col: usize, width: usize, method: WidthMethod) -> LineInfo {
    let grid = wrap_with_method(line, width, method);
    let height = grid.len();
    let mut counter = 0usize;

    for (i, vline) in grid.iter().enumerate() {
        let end = counter + vline.len();

        if end == col {
            if let Some(next) = grid.get(i + 1) {
                return LineInfo {
                    width: next.len(),
                    char_width: next.display_width(),
                    height,
                    start_column: col,
                    column_offset: 0,
                    row_offset: i + 1,
                    char_offset: 0,
                };
            }
        }

        if end >= col {
            let char_offset = col - counter;
            return LineInfo {
                width: vline.len(),
                char_width: vline.display_width(),
                height,
                start_column: counter,
                column_offset: display_width_chars_with_method(
                    &vline.as_chars()[..char_offset],
                    method,
                ),
                row_offset: i,
                char_offset,
            };
        }

        counter = end;
    }

    LineInfo::default()
}

/// Read-only view mapping a document's cursor positions to wrapped geometry.
pub struct CursorMapper<'a> {
    document: &'a Document,
    width: usize,
    width_method: WidthMethod,
}

impl<'a> CursorMapper<'a> {
    /// Create a mapper wrapping at `width` columns with the global method.
    #[must_use]
    pub fn new(document: &'a Document, width: usize) -> Self {
        Self {
            document,
            width,
            width_method: width_method(),
        }
    }

    /// Set the width method.
    #[must_use]
    pub fn width_method(mut self, method: WidthMethod) -> Self {
        self.width_method = method;
        self
    }

    /// Visual lines of `row`.
    pub fn visual_lines(&self, row: usize) -> Result<Vec<VisualLine>> {
        let line = self.document.line(row)?;
        Ok(wrap_with_method(&line, self.width, self.width_method))
    }

    /// Number of visual lines `row` wraps into.
    pub fn visual_line_count(&self, row: usize) -> Result<usize> {
        self.visual_lines(row).map(|lines| lines.len())
    }

    /// Total number of visual lines in the document.
    #[must_use]
    pub fn total_visual_lines(&self) -> usize {
        self.document
            .lines()
            .map(|line| wrap_with_method(&line, self.width, self.width_method).len())
            .sum()
    }

    /// Locate `position` in its row's visual lines.
    pub fn locate(&self, position: CursorPosition) -> Result<LineInfo> {
        let line = self.document.line(position.row)?;
        Ok(locate_in_line(
            &line,
            position.col,
            self.width,
            self.width_method,
        ))
    }

    /// Screen line of `position` counting every visual line of the rows
    /// above it.
    pub fn absolute_screen_line(&self, position: CursorPosition) -> Result<usize> {
        let info = self.locate(position)?;
        let above: usize = self
            .document
            .lines()
            .take(position.row)
            .map(|line| wrap_with_method(&line, self.width, self.width_method).len())
            .sum();
        Ok(above + info.row_offset)
    }
}

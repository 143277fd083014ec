//! Editing session: one document, one cursor, one viewport.
//!
//! [`EditSession`] is what a UI driver holds. It routes each keystroke-level
//! command to the [`Document`], keeps the cursor valid, and after every
//! cursor-affecting command scrolls the [`Viewport`] so the cursor's screen
//! line stays visible.
//!
//! Vertical movement works on visual lines: moving down from the first half
//! of a soft-wrapped row lands on its second half, not on the next row. The
//! display column the cursor had when vertical movement began is remembered
//! so that passing through short lines does not lose it.
//!
//! # Examples
//!
//! ```
//! use ge_text::{EditSession, EditorOptions};
//!
//! let options = EditorOptions::default().width(8).show_line_numbers(false);
//! let mut session = EditSession::from_bytes(b"hello world", "notes.txt", options).unwrap();
//!
//! // "hello " | "world " at 8 columns
//! assert_eq!(session.line_info().height, 2);
//! session.cursor_down();
//! assert_eq!(session.cursor().col, 6);
//! assert_eq!(session.cursor_line_number(), 1);
//! ```

use crate::error::Result;
use crate::highlight::{Highlighter, HighlighterRegistry, PlainHighlighter};
use crate::text::cursor::{CursorMapper, CursorPosition, LineInfo};
use crate::text::viewport::Viewport;
use crate::text::wrap::VisualLine;
use crate::text::{Document, LINE_TERMINATOR, Line};
use crate::unicode::{WidthMethod, display_width_char_with_method};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace, warn};

const MIN_HEIGHT: usize = 1;
const MIN_WIDTH: usize = 2;
const DEFAULT_HEIGHT: usize = 6;
const DEFAULT_WIDTH: usize = 40;
const MAX_HEIGHT: usize = 99;
const MAX_WIDTH: usize = 500;
/// Columns taken by the `"%2v "` line-number gutter.
const LINE_NUMBER_GUTTER: usize = 3;

/// Session layout options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorOptions {
    /// Total columns available, gutter included.
    pub width: usize,
    /// Visible lines.
    pub height: usize,
    /// Reserve a line-number gutter, narrowing the text area.
    pub show_line_numbers: bool,
    /// Width method used to measure runes.
    pub width_method: WidthMethod,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            show_line_numbers: true,
            width_method: WidthMethod::default(),
        }
    }
}

impl EditorOptions {
    /// Set the total width.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the visible height.
    #[must_use]
    pub fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Enable or disable the line-number gutter.
    #[must_use]
    pub fn show_line_numbers(mut self, enabled: bool) -> Self {
        self.show_line_numbers = enabled;
        self
    }

    /// Set the width method.
    #[must_use]
    pub fn width_method(mut self, method: WidthMethod) -> Self {
        self.width_method = method;
        self
    }

    /// Columns available to text after the gutter, clamped to `2..=500`.
    #[must_use]
    pub fn text_width(&self) -> usize {
        let gutter = if self.show_line_numbers {
            LINE_NUMBER_GUTTER
        } else {
            0
        };
        self.width
            .saturating_sub(gutter)
            .clamp(MIN_WIDTH, MAX_WIDTH)
    }

    /// Visible lines, clamped to `1..=99`.
    #[must_use]
    pub fn visible_height(&self) -> usize {
        self.height.clamp(MIN_HEIGHT, MAX_HEIGHT)
    }
}

/// Document size and cursor summary for a status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionStatus {
    pub lines: usize,
    pub total_display_width: usize,
    pub cursor: CursorPosition,
    pub screen_line: usize,
}

/// An editing session over a single document.
pub struct EditSession {
    document: Document,
    cursor: CursorPosition,
    /// Display column to aim for on vertical moves; 0 once the cursor moves
    /// horizontally or the text changes.
    last_char_offset: usize,
    viewport: Viewport,
    options: EditorOptions,
    file_id: String,
    highlighter: Arc<dyn Highlighter>,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}

impl EditSession {
    /// Create a session over an empty document.
    #[must_use]
    pub fn new(options: EditorOptions) -> Self {
        Self {
            document: Document::new(),
            cursor: CursorPosition::default(),
            last_char_offset: 0,
            viewport: Viewport::new(options.visible_height()),
            options,
            file_id: String::new(),
            highlighter: Arc::new(PlainHighlighter),
        }
    }

    /// Create a session from raw file contents.
    ///
    /// `file_id` only selects the highlighter.
    pub fn from_bytes(bytes: &[u8], file_id: &str, options: EditorOptions) -> Result<Self> {
        let mut session = Self::new(options);
        session.load(bytes, file_id)?;
        Ok(session)
    }

    /// Read a file and open a session on it.
    pub fn open(path: impl AsRef<Path>, options: EditorOptions) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).inspect_err(|err| {
            warn!(path = %path.display(), %err, "could not read file");
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "opening file");
        Self::from_bytes(&bytes, &path.to_string_lossy(), options)
    }

    /// Replace the document with decoded `bytes`.
    ///
    /// On a decode error the current document, cursor and highlighter are
    /// left exactly as they were.
    pub fn load(&mut self, bytes: &[u8], file_id: &str) -> Result<()> {
        let document = Document::load(bytes).inspect_err(|err| {
            warn!(file_id, %err, "load failed, keeping current document");
        })?;
        self.highlighter = HighlighterRegistry::with_builtins().for_file(file_id);
        self.file_id = file_id.to_string();
        debug!(
            file_id,
            lines = document.height(),
            highlighter = self.highlighter.name(),
            "document attached"
        );
        self.set_document(document);
        Ok(())
    }

    /// Swap in a document and reset cursor and scroll.
    pub fn set_document(&mut self, document: Document) {
        self.document = document;
        self.reset();
    }

    /// Use a specific highlighter for rendering.
    pub fn set_highlighter(&mut self, highlighter: Arc<dyn Highlighter>) {
        self.highlighter = highlighter;
    }

    /// Move the cursor to the top of the document and scroll to the top.
    pub fn reset(&mut self) {
        self.cursor = CursorPosition::default();
        self.last_char_offset = 0;
        self.viewport.goto_top();
    }

    /// The document being edited.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Current cursor position.
    #[must_use]
    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> EditorOptions {
        self.options
    }

    /// Identifier of the loaded file; empty for an unnamed buffer.
    #[must_use]
    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    /// Wrap width of the text area.
    #[must_use]
    pub fn text_width(&self) -> usize {
        self.options.text_width()
    }

    /// Change the total width and re-scroll.
    pub fn set_width(&mut self, width: usize) {
        self.options.width = width;
        self.reposition();
    }

    /// Change the visible height and re-scroll.
    pub fn set_height(&mut self, height: usize) {
        self.options.height = height;
        self.viewport.resize(self.options.visible_height());
        self.reposition();
    }

    fn mapper(&self) -> CursorMapper<'_> {
        CursorMapper::new(&self.document, self.text_width()).width_method(self.options.width_method)
    }

    /// Wrapped geometry of the cursor's row.
    #[must_use]
    pub fn line_info(&self) -> LineInfo {
        // The cursor row is always valid, so this never takes the default.
        self.mapper().locate(self.cursor).unwrap_or_default()
    }

    /// Screen line of the cursor, counting soft-wrapped rows above it.
    #[must_use]
    pub fn cursor_line_number(&self) -> usize {
        self.mapper()
            .absolute_screen_line(self.cursor)
            .unwrap_or_default()
    }

    /// Visual lines of `row` at the current width.
    pub fn visual_lines(&self, row: usize) -> Result<Vec<VisualLine>> {
        self.mapper().visual_lines(row)
    }

    /// Flattened document text passed through the highlighter.
    #[must_use]
    pub fn render_text(&self) -> String {
        self.highlighter
            .highlight(&self.document.text(), &self.file_id)
    }

    /// Size and cursor summary.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            lines: self.document.height(),
            total_display_width: self
                .document
                .total_display_width_with_method(self.options.width_method),
            cursor: self.cursor,
            screen_line: self.cursor_line_number(),
        }
    }

    fn current_line(&self) -> Line {
        self.document.line(self.cursor.row).unwrap_or_default()
    }

    fn current_row_len(&self) -> usize {
        self.document.line_len(self.cursor.row).unwrap_or(0)
    }

    fn reposition(&mut self) {
        let line = self.cursor_line_number();
        self.viewport.reposition(line);
    }

    // ---------------------------------------------------------------------
    // Horizontal movement
    // ---------------------------------------------------------------------

    /// Move to `col` on the current row, clamped to the row.
    pub fn set_cursor(&mut self, col: usize) {
        self.cursor.col = col.min(self.current_row_len());
        self.last_char_offset = 0;
        self.reposition();
    }

    /// Move to the start of the row.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Move to the end of the row.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.current_row_len());
    }

    /// Move one rune left, onto the end of the previous row from column 0.
    pub fn character_left(&mut self) {
        if self.cursor.col > 0 {
            self.set_cursor(self.cursor.col - 1);
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.cursor_end();
        }
    }

    /// Move one rune right, onto the start of the next row from the end.
    pub fn character_right(&mut self) {
        if self.cursor.col < self.current_row_len() {
            self.set_cursor(self.cursor.col + 1);
        } else if self.cursor.row + 1 < self.document.height() {
            self.cursor.row += 1;
            self.cursor_start();
        }
    }

    /// Move to the start of the previous word, crossing rows.
    pub fn word_left(&mut self) {
        loop {
            if self.cursor.col == 0 {
                if self.cursor.row == 0 {
                    self.set_cursor(0);
                    return;
                }
                self.cursor.row -= 1;
                self.cursor.col = self.current_row_len();
                continue;
            }
            self.cursor.col -= 1;
            if self
                .current_line()
                .rune(self.cursor.col)
                .is_some_and(|c| !c.is_whitespace())
            {
                break;
            }
        }
        let line = self.current_line();
        let mut col = self.cursor.col;
        while col > 0 && !line[col - 1].is_whitespace() {
            col -= 1;
        }
        self.set_cursor(col);
    }

    /// Move past the end of the next word, crossing rows.
    pub fn word_right(&mut self) {
        let mut line = self.current_line();
        loop {
            match line.rune(self.cursor.col) {
                Some(c) if !c.is_whitespace() => break,
                Some(_) => self.cursor.col += 1,
                None if self.cursor.row + 1 < self.document.height() => {
                    self.cursor.row += 1;
                    self.cursor.col = 0;
                    line = self.current_line();
                }
                None => {
                    self.set_cursor(self.cursor.col);
                    return;
                }
            }
        }
        let mut col = self.cursor.col;
        while line.rune(col).is_some_and(|c| !c.is_whitespace()) {
            col += 1;
        }
        self.set_cursor(col);
    }

    // ---------------------------------------------------------------------
    // Vertical movement
    // ---------------------------------------------------------------------

    /// Move up one visual line.
    pub fn cursor_up(&mut self) {
        let info = self.line_info();
        let target = self.last_char_offset.max(info.column_offset);
        self.last_char_offset = target;

        let (row, grid, index) = if info.row_offset > 0 {
            let grid = self.visual_lines(self.cursor.row).unwrap_or_default();
            (self.cursor.row, grid, info.row_offset - 1)
        } else if self.cursor.row > 0 {
            let row = self.cursor.row - 1;
            let grid = self.visual_lines(row).unwrap_or_default();
            let last = grid.len().saturating_sub(1);
            (row, grid, last)
        } else {
            return;
        };
        self.place_on_visual_line(row, &grid, index, target);
    }

    /// Move down one visual line.
    pub fn cursor_down(&mut self) {
        let info = self.line_info();
        let target = self.last_char_offset.max(info.column_offset);
        self.last_char_offset = target;

        let (row, index) = if info.row_offset + 1 < info.height {
            (self.cursor.row, info.row_offset + 1)
        } else if self.cursor.row + 1 < self.document.height() {
            (self.cursor.row + 1, 0)
        } else {
            return;
        };
        let grid = self.visual_lines(row).unwrap_or_default();
        self.place_on_visual_line(row, &grid, index, target);
    }

    /// Put the cursor on visual line `index` of `row`, as close to display
    /// column `target` as the runes allow without passing it.
    ///
    /// The last rune slot of a visual line is its trailing whitespace; one
    /// further would be the start of the next visual line.
    fn place_on_visual_line(
        &mut self,
        row: usize,
        grid: &[VisualLine],
        index: usize,
        target: usize,
    ) {
        let Some(vline) = grid.get(index) else {
            return;
        };
        let line = self.document.line(row).unwrap_or_default();
        let start: usize = grid[..index].iter().map(VisualLine::len).sum();
        let limit = (start + vline.len())
            .saturating_sub(1)
            .max(start)
            .min(line.len());

        let mut col = start;
        let mut offset = 0usize;
        while col < limit {
            let w = display_width_char_with_method(line[col], self.options.width_method);
            if offset + w > target {
                break;
            }
            offset += w;
            col += 1;
        }

        self.cursor = CursorPosition::new(row, col);
        trace!(row, col, target, "cursor moved vertically");
        self.reposition();
    }

    // ---------------------------------------------------------------------
    // Editing
    // ---------------------------------------------------------------------

    /// Insert a rune at the cursor; the terminator splits the row.
    pub fn insert_rune(&mut self, r: char) -> Result<()> {
        if r == LINE_TERMINATOR {
            return self.insert_newline();
        }
        self.document
            .insert_rune(r, self.cursor.row, self.cursor.col)?;
        self.set_cursor(self.cursor.col + 1);
        Ok(())
    }

    /// Insert text at the cursor. `\r` is dropped, so pasted CRLF text
    /// splits rows the same way LF text does.
    pub fn insert_str(&mut self, text: &str) -> Result<()> {
        for r in text.chars().filter(|&c| c != '\r') {
            self.insert_rune(r)?;
        }
        Ok(())
    }

    /// Split the row at the cursor and move to the start of the new row.
    pub fn insert_newline(&mut self) -> Result<()> {
        self.document
            .split_line(self.cursor.row, self.cursor.col)?;
        self.cursor = CursorPosition::new(self.cursor.row + 1, 0);
        self.last_char_offset = 0;
        self.reposition();
        Ok(())
    }

    /// Backspace: delete the rune before the cursor, or join with the row
    /// above from column 0.
    pub fn delete_character_backward(&mut self) -> Result<()> {
        let CursorPosition { row, col } = self.cursor;
        if col > 0 {
            self.document.remove_rune(row, col - 1)?;
            self.set_cursor(col - 1);
        } else if let Some(joined_at) = self.document.merge_line_above(row)? {
            self.cursor.row = row - 1;
            self.set_cursor(joined_at);
        }
        Ok(())
    }

    /// Delete the rune under the cursor, or join the row below at the end.
    pub fn delete_character_forward(&mut self) -> Result<()> {
        let CursorPosition { row, col } = self.cursor;
        if col < self.current_row_len() {
            self.document.remove_rune(row, col)?;
        } else {
            self.document.merge_line_below(row)?;
        }
        self.set_cursor(col);
        Ok(())
    }

    /// Delete from the start of the row up to the cursor.
    pub fn delete_before_cursor(&mut self) -> Result<()> {
        self.document
            .drain_line_head(self.cursor.row, self.cursor.col)?;
        self.set_cursor(0);
        Ok(())
    }

    /// Delete from the cursor to the end of the row.
    pub fn delete_after_cursor(&mut self) -> Result<()> {
        self.document
            .truncate_line(self.cursor.row, self.cursor.col)?;
        self.set_cursor(self.cursor.col);
        Ok(())
    }

    /// Delete the word before the cursor along with the whitespace between.
    pub fn delete_word_backward(&mut self) -> Result<()> {
        let CursorPosition { row, col } = self.cursor;
        let line = self.current_line();
        let mut start = col;
        while start > 0 && line[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !line[start - 1].is_whitespace() {
            start -= 1;
        }
        if start < col {
            self.document.remove_range(row, start..col)?;
            self.set_cursor(start);
        }
        Ok(())
    }

    /// Delete the whitespace and word after the cursor.
    pub fn delete_word_forward(&mut self) -> Result<()> {
        let CursorPosition { row, col } = self.cursor;
        let line = self.current_line();
        let mut end = col;
        while line.rune(end).is_some_and(char::is_whitespace) {
            end += 1;
        }
        while line.rune(end).is_some_and(|c| !c.is_whitespace()) {
            end += 1;
        }
        if end > col {
            self.document.remove_range(row, col..end)?;
            self.set_cursor(col);
        }
        Ok(())
    }
}

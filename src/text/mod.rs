//! Text storage, soft wrapping and cursor geometry.
//!
//! A [`Document`] holds logical lines in a rope. [`wrap`] breaks a single line
//! into [`VisualLine`]s for a given display width, and [`CursorMapper`] answers
//! where a `(row, col)` cursor lands on screen. [`EditSession`] ties these
//! together with a [`Viewport`] for interactive editing.
//!
//! Key types:
//!
//! - [`Document`]: Ordered logical lines with rune-level editing
//! - [`VisualLine`]: One screen line produced by soft wrapping
//! - [`LineInfo`]: Wrapped geometry of a cursor's row
//! - [`EditSession`]: Cursor, viewport and edit commands over a document
//!
//! # Examples
//!
//! ```
//! use ge_text::text::{CursorMapper, CursorPosition, Document};
//!
//! let doc = Document::from_text("one two three\nfour");
//! let mapper = CursorMapper::new(&doc, 8);
//!
//! // "one two " | "three "
//! assert_eq!(mapper.visual_line_count(0).unwrap(), 2);
//! assert_eq!(mapper.absolute_screen_line(CursorPosition::new(1, 0)).unwrap(), 2);
//! ```

mod cursor;
mod document;
mod line;
mod rope;
mod session;
mod viewport;
mod wrap;

pub use cursor::{CursorMapper, CursorPosition, LineInfo, locate_in_line};
pub use document::{Document, LINE_TERMINATOR};
pub use line::Line;
pub use session::{EditSession, EditorOptions, SessionStatus};
pub use viewport::Viewport;
pub use wrap::{VisualLine, wrap, wrap_with_method};

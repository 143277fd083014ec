//! `ge_text` - Line-oriented text buffer for terminal editors
//!
//! Stores a document as logical lines, soft-wraps them at word boundaries by
//! terminal display width, and maps cursor positions to screen geometry so a
//! UI can scroll and move vertically through wrapped text.

// Crate-level lint configuration
#![allow(clippy::cast_possible_wrap)] // Viewport deltas are signed line counts
#![allow(clippy::module_name_repetitions)] // Allow text::TextAttributes etc
#![allow(clippy::missing_errors_doc)] // Error variants are documented on Error
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::inherent_to_string)] // to_string methods are convenient
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod error;
pub mod highlight;
pub mod style;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use highlight::{Highlighter, HighlighterRegistry, MarkdownHighlighter, PlainHighlighter};
pub use style::TextAttributes;
pub use text::{
    CursorMapper, CursorPosition, Document, EditSession, EditorOptions, Line, LineInfo,
    SessionStatus, Viewport, VisualLine, wrap,
};
pub use unicode::{WidthMethod, display_width, set_width_method};

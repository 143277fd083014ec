//! Text attributes and their ANSI SGR encoding.
//!
//! Highlighters decorate flattened document text with these sequences; the
//! engine itself never interprets them.
//!
//! ```
//! use ge_text::style::{TextAttributes, paint};
//!
//! let s = paint("title", TextAttributes::BOLD | TextAttributes::UNDERLINE);
//! assert_eq!(s, "\x1b[1;4mtitle\x1b[0m");
//! ```

use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes (bold, italic, underline, etc.).
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD          = 0x01;
        /// Dim/decreased intensity.
        const DIM           = 0x02;
        /// Italic (not widely supported).
        const ITALIC        = 0x04;
        /// Underlined text.
        const UNDERLINE     = 0x08;
        /// Swapped foreground/background.
        const INVERSE       = 0x10;
        /// Strikethrough text.
        const STRIKETHROUGH = 0x20;
    }
}

/// SGR sequence that resets every attribute.
pub const RESET: &str = "\x1b[0m";

/// SGR sequence selecting `attrs`; empty when no attribute is set.
#[must_use]
pub fn sgr(attrs: TextAttributes) -> String {
    const CODES: [(TextAttributes, &str); 6] = [
        (TextAttributes::BOLD, "1"),
        (TextAttributes::DIM, "2"),
        (TextAttributes::ITALIC, "3"),
        (TextAttributes::UNDERLINE, "4"),
        (TextAttributes::INVERSE, "7"),
        (TextAttributes::STRIKETHROUGH, "9"),
    ];

    let codes: Vec<&str> = CODES
        .iter()
        .filter(|(flag, _)| attrs.contains(*flag))
        .map(|(_, code)| *code)
        .collect();
    if codes.is_empty() {
        String::new()
    } else {
        format!("\x1b[{}m", codes.join(";"))
    }
}

/// Wrap `text` in the SGR sequence for `attrs` followed by a reset.
///
/// Empty text or empty attributes return `text` unchanged.
#[must_use]
pub fn paint(text: &str, attrs: TextAttributes) -> String {
    let mut out = String::with_capacity(text.len() + 12);
    paint_into(&mut out, text, attrs);
    out
}

/// Append `text` painted with `attrs` to `out`.
pub fn paint_into(out: &mut String, text: &str, attrs: TextAttributes) {
    if text.is_empty() || attrs.is_empty() {
        out.push_str(text);
        return;
    }
    out.push_str(&sgr(attrs));
    out.push_str(text);
    out.push_str(RESET);
}

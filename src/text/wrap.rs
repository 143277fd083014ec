//! Width-aware word wrapping of a logical line into visual lines.
//!
//! Widths are terminal columns, not rune counts: a wide CJK rune costs two
//! columns, a combining mark none.
//!
//! The line is consumed as a series of items, each a word followed by the
//! whitespace run after it. An item goes on the current visual line when the
//! line is still empty or the item fits in what is left of `width`;
//! otherwise it opens a new visual line. Words are never split, so a word
//! wider than `width` sits alone on an overflowing visual line.
//!
//! After the last item one synthetic space is appended to the final visual
//! line. Every earlier visual line already ends in whitespace, so the end of
//! the line gets a column of its own just like each soft-wrap boundary does
//! (see [`CursorMapper`](crate::text::CursorMapper)).
//!
//! # Example
//!
//! ```
//! use ge_text::text::wrap;
//!
//! let lines: Vec<String> = wrap(&['h', 'i', ' ', 'y', 'o', 'u'], 3)
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(lines, vec!["hi ", "you "]);
//! ```

use crate::unicode::{WidthMethod, display_width_chars_with_method, width_method};
use std::fmt;
use tracing::trace;

/// One soft-wrapped segment of a logical line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisualLine {
    runes: Vec<char>,
    width: usize,
}

impl VisualLine {
    /// Runes on this visual line, trailing whitespace included.
    #[must_use]
    pub fn as_chars(&self) -> &[char] {
        &self.runes
    }

    /// Rune count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.runes.len()
    }

    /// Check if the visual line holds no runes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    /// Display width in columns.
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.width
    }

    fn push(&mut self, runes: &[char], width: usize) {
        self.runes.extend_from_slice(runes);
        self.width += width;
    }
}

impl fmt::Display for VisualLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.runes {
            fmt::Write::write_char(f, *c)?;
        }
        Ok(())
    }
}

/// Wrap `line` to `width` columns using the global width method.
#[must_use]
pub fn wrap(line: &[char], width: usize) -> Vec<VisualLine> {
    wrap_with_method(line, width, width_method())
}

/// Wrap `line` to `width` columns using a specific width method.
///
/// A `width` of 0 is treated as 1. An empty line yields exactly one empty
/// visual line; any other line yields visual lines whose concatenation is
/// `line` followed by one space.
#[must_use]
pub fn wrap_with_method(line: &[char], width: usize, method: WidthMethod) -> Vec<VisualLine> {
    let width = width.max(1);
    if line.is_empty() {
        return vec![VisualLine::default()];
    }

    let mut lines = vec![VisualLine::default()];
    let mut item_start = 0usize;
    let mut in_spaces = false;

    for (i, &c) in line.iter().enumerate() {
        if c.is_whitespace() {
            in_spaces = true;
        } else if in_spaces {
            place_item(&mut lines, &line[item_start..i], width, method);
            item_start = i;
            in_spaces = false;
        }
    }
    place_item(&mut lines, &line[item_start..], width, method);

    if let Some(last) = lines.last_mut() {
        last.push(&[' '], 1);
    }

    trace!(
        runes = line.len(),
        width,
        visual_lines = lines.len(),
        "line wrapped"
    );
    lines
}

fn place_item(lines: &mut Vec<VisualLine>, item: &[char], width: usize, method: WidthMethod) {
    if item.is_empty() {
        return;
    }
    let item_width = display_width_chars_with_method(item, method);
    let needs_break = lines
        .last()
        .is_some_and(|current| !current.is_empty() && current.width + item_width > width);
    if needs_break {
        lines.push(VisualLine::default());
    }
    if let Some(current) = lines.last_mut() {
        current.push(item, item_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn wrapped(s: &str, width: usize) -> Vec<String> {
        wrap_with_method(&chars(s), width, WidthMethod::WcWidth)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_wrap_hello_world() {
        assert_eq!(wrapped("hello world", 5), vec!["hello ", "world "]);
    }

    #[test]
    fn test_wrap_fitting_line_is_single() {
        assert_eq!(wrapped("ab cd", 5), vec!["ab cd "]);
        assert_eq!(wrapped("hello world", 11), vec!["hello world "]);
    }

    #[test]
    fn test_wrap_empty_line() {
        let lines = wrap_with_method(&[], 10, WidthMethod::WcWidth);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_empty());
        assert_eq!(lines[0].display_width(), 0);
    }

    #[test]
    fn test_wrap_greedy_fill() {
        assert_eq!(wrapped("ab cd ef", 5), vec!["ab ", "cd ef "]);
        assert_eq!(
            wrapped("the quick brown fox", 10),
            vec!["the quick ", "brown fox "]
        );
    }

    #[test]
    fn test_wrap_oversized_word_not_split() {
        assert_eq!(wrapped("a abcdefgh b", 4), vec!["a ", "abcdefgh ", "b "]);
        assert_eq!(wrapped("abcdefgh", 3), vec!["abcdefgh "]);
    }

    #[test]
    fn test_wrap_leading_and_trailing_spaces() {
        assert_eq!(wrapped("  ab", 10), vec!["  ab "]);
        assert_eq!(wrapped("ab   ", 4), vec!["ab    "]);
        assert_eq!(wrapped("   ", 1), vec!["    "]);
    }

    #[test]
    fn test_wrap_wide_runes() {
        // Each ideograph is two columns, so two of them fill width 4
        assert_eq!(wrapped("漢字 漢字", 4), vec!["漢字 ", "漢字 "]);
        let lines = wrap_with_method(&chars("漢字 漢字"), 10, WidthMethod::WcWidth);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].display_width(), 10);
    }

    #[test]
    fn test_wrap_zero_width_treated_as_one() {
        assert_eq!(wrapped("a b", 0), vec!["a ", "b "]);
    }

    #[test]
    fn test_wrap_rune_wider_than_width() {
        assert_eq!(wrapped("漢 a", 1), vec!["漢 ", "a "]);
    }

    #[test]
    fn test_wrap_preserves_tabs() {
        assert_eq!(wrapped("a\tb", 10), vec!["a\tb "]);
    }

    #[test]
    fn test_visual_line_widths() {
        let lines = wrap_with_method(&chars("hello world"), 5, WidthMethod::WcWidth);
        assert_eq!(lines[0].len(), 6);
        assert_eq!(lines[0].display_width(), 6);
        assert_eq!(lines[1].len(), 6);
    }
}

//! Rune display width in terminal columns.
//!
//! Every rune measures 0, 1 or 2 columns. Widths are per rune: a combining
//! mark is 0 on its own, and a sequence is the sum of its runes.
//!
//! The `*_with_method` functions take the [`WidthMethod`] explicitly; the
//! plain ones read a process-wide default set with [`set_width_method`].

use std::sync::atomic::{AtomicU8, Ordering};
use unicode_width::UnicodeWidthChar;

/// How runes of ambiguous East Asian width are measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// wcwidth rules: ambiguous runes are narrow.
    #[default]
    WcWidth,
    /// CJK rules: ambiguous runes are wide.
    Unicode,
}

impl WidthMethod {
    const fn to_bits(self) -> u8 {
        match self {
            Self::WcWidth => 0,
            Self::Unicode => 1,
        }
    }

    const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::Unicode,
            _ => Self::WcWidth,
        }
    }

    /// Columns taken by `c`.
    ///
    /// Control runes (tab included) take none; the terminal, not the line,
    /// decides how far they advance.
    #[inline]
    #[must_use]
    pub fn char_width(self, c: char) -> usize {
        match c {
            ' '..='~' => 1,
            '\0'..='\x1f' | '\x7f' => 0,
            _ => match self {
                Self::WcWidth => c.width(),
                Self::Unicode => c.width_cjk(),
            }
            .unwrap_or(0),
        }
    }

    /// Columns taken by a rune slice.
    #[must_use]
    pub fn chars_width(self, chars: &[char]) -> usize {
        chars.iter().map(|&c| self.char_width(c)).sum()
    }

    /// Columns taken by a string.
    #[must_use]
    pub fn str_width(self, s: &str) -> usize {
        s.chars().map(|c| self.char_width(c)).sum()
    }
}

static DEFAULT_METHOD: AtomicU8 = AtomicU8::new(WidthMethod::WcWidth.to_bits());

/// Set the process-wide width method.
pub fn set_width_method(method: WidthMethod) {
    DEFAULT_METHOD.store(method.to_bits(), Ordering::Relaxed);
}

/// The process-wide width method.
#[must_use]
pub fn width_method() -> WidthMethod {
    WidthMethod::from_bits(DEFAULT_METHOD.load(Ordering::Relaxed))
}

/// Display width of a string under the process-wide method.
#[must_use]
pub fn display_width(s: &str) -> usize {
    width_method().str_width(s)
}

/// Display width of a rune under the process-wide method.
#[must_use]
pub fn display_width_char(c: char) -> usize {
    width_method().char_width(c)
}

/// Display width of a rune slice under the process-wide method.
#[must_use]
pub fn display_width_chars(chars: &[char]) -> usize {
    width_method().chars_width(chars)
}

/// Display width of a string under `method`.
#[must_use]
pub fn display_width_with_method(s: &str, method: WidthMethod) -> usize {
    method.str_width(s)
}

/// Display width of a rune under `method`.
#[inline]
#[must_use]
pub fn display_width_char_with_method(c: char, method: WidthMethod) -> usize {
    method.char_width(c)
}

/// Display width of a rune slice under `method`.
#[must_use]
pub fn display_width_chars_with_method(chars: &[char], method: WidthMethod) -> usize {
    method.chars_width(chars)
}

/// Whether `c` takes no columns under the process-wide method.
#[must_use]
pub fn is_zero_width(c: char) -> bool {
    display_width_char(c) == 0
}

/// Whether `c` takes two columns under the process-wide method.
#[must_use]
pub fn is_wide(c: char) -> bool {
    display_width_char(c) == 2
}

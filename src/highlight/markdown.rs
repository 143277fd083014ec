use crate::highlight::Highlighter;
use crate::style::{TextAttributes, paint_into};

const HEADING: TextAttributes = TextAttributes::BOLD;
const QUOTE: TextAttributes = TextAttributes::DIM;
const CODE_BLOCK: TextAttributes = TextAttributes::DIM;
const CODE_INLINE: TextAttributes = TextAttributes::INVERSE;
const STRONG: TextAttributes = TextAttributes::BOLD;
const EMPHASIS: TextAttributes = TextAttributes::ITALIC;
const LIST_MARKER: TextAttributes = TextAttributes::BOLD;
const RULE: TextAttributes = TextAttributes::DIM;

/// Line-oriented Markdown highlighter emitting ANSI SGR sequences.
///
/// Output has exactly as many lines as the input, so screen geometry computed
/// on the plain text still applies.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkdownHighlighter;

impl MarkdownHighlighter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn is_fence(trimmed: &str) -> bool {
        trimmed.starts_with("```") || trimmed.starts_with("~~~")
    }

    fn is_hr(trimmed: &str) -> bool {
        let bytes = trimmed.as_bytes();
        if bytes.len() < 3 {
            return false;
        }
        let first = bytes[0];
        if first != b'-' && first != b'*' && first != b'_' {
            return false;
        }
        bytes.iter().all(|&b| b == first)
    }

    fn is_heading(trimmed: &str) -> bool {
        let hashes = trimmed.bytes().take_while(|&b| b == b'#').count();
        (1..=6).contains(&hashes) && trimmed[hashes..].starts_with(' ')
    }

    /// Byte length of a list marker plus its following space, if any.
    fn list_marker_len(trimmed: &str) -> Option<usize> {
        if trimmed.starts_with("- ") || trimmed.starts_with("* ") || trimmed.starts_with("+ ") {
            return Some(2);
        }
        let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 && trimmed[digits..].starts_with(". ") {
            return Some(digits + 2);
        }
        None
    }

    fn is_escaped(bytes: &[u8], idx: usize) -> bool {
        idx > 0 && bytes[idx - 1] == b'\\'
    }

    fn find_closer(bytes: &[u8], from: usize, delim: &[u8]) -> Option<usize> {
        (from..bytes.len()).find(|&i| bytes[i..].starts_with(delim) && !Self::is_escaped(bytes, i))
    }

    /// Inline spans: code first, then strong, then single-star emphasis.
    ///
    /// Every delimiter is ASCII, so each split lands on a char boundary.
    fn highlight_inline(line: &str, out: &mut String) {
        let bytes = line.as_bytes();
        let mut plain_start = 0usize;
        let mut i = 0usize;

        while i < bytes.len() {
            if Self::is_escaped(bytes, i) {
                i += 1;
                continue;
            }

            let span = if bytes[i] == b'`' {
                Self::find_closer(bytes, i + 1, b"`").map(|close| (close + 1, CODE_INLINE))
            } else if bytes[i..].starts_with(b"**") {
                Self::find_closer(bytes, i + 2, b"**")
                    .filter(|&close| close > i + 2)
                    .map(|close| (close + 2, STRONG))
            } else if bytes[i] == b'*' && bytes.get(i + 1).is_some_and(|b| !b.is_ascii_whitespace())
            {
                Self::find_closer(bytes, i + 1, b"*").map(|close| (close + 1, EMPHASIS))
            } else {
                None
            };

            if let Some((end, attrs)) = span {
                out.push_str(&line[plain_start..i]);
                paint_into(out, &line[i..end], attrs);
                i = end;
                plain_start = end;
            } else {
                i += 1;
            }
        }
        out.push_str(&line[plain_start..]);
    }
}

impl Highlighter for MarkdownHighlighter {
    fn name(&self) -> &'static str {
        "Markdown"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["md", "markdown", "mkd", "mkdn"]
    }

    fn highlight(&self, text: &str, _file_id: &str) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 4);
        let mut in_fence = false;

        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let trimmed = line.trim_start();
            let indent = line.len() - trimmed.len();

            if Self::is_fence(trimmed) {
                in_fence = !in_fence;
                paint_into(&mut out, line, CODE_BLOCK);
            } else if in_fence || line.starts_with("    ") || line.starts_with('\t') {
                paint_into(&mut out, line, CODE_BLOCK);
            } else if Self::is_heading(trimmed) {
                paint_into(&mut out, line, HEADING);
            } else if trimmed.starts_with('>') {
                paint_into(&mut out, line, QUOTE);
            } else if Self::is_hr(trimmed) {
                paint_into(&mut out, line, RULE);
            } else if let Some(marker) = Self::list_marker_len(trimmed) {
                out.push_str(&line[..indent]);
                paint_into(&mut out, &trimmed[..marker], LIST_MARKER);
                Self::highlight_inline(&trimmed[marker..], &mut out);
            } else {
                Self::highlight_inline(line, &mut out);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::RESET;

    fn hl(text: &str) -> String {
        MarkdownHighlighter::new().highlight(text, "doc.md")
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(hl("just words here"), "just words here");
        assert_eq!(hl(""), "");
    }

    #[test]
    fn test_heading_is_bold() {
        assert_eq!(hl("# Title"), format!("\x1b[1m# Title{RESET}"));
        assert_eq!(hl("#hashtag"), "#hashtag");
    }

    #[test]
    fn test_fenced_block_state() {
        let out = hl("```\nlet x = 1;\n```\nafter");
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("\x1b[2m"));
        assert_eq!(lines[3], "after");
    }

    #[test]
    fn test_inline_spans() {
        assert_eq!(
            hl("use `cargo` now"),
            format!("use \x1b[7m`cargo`{RESET} now")
        );
        assert_eq!(hl("a **b** c"), format!("a \x1b[1m**b**{RESET} c"));
        assert_eq!(hl("an *em* word"), format!("an \x1b[3m*em*{RESET} word"));
        assert_eq!(hl("2 * 3 * 4"), "2 * 3 * 4");
        assert_eq!(hl("unclosed `tick"), "unclosed `tick");
    }

    #[test]
    fn test_list_marker() {
        assert_eq!(hl("- item"), format!("\x1b[1m- {RESET}item"));
        assert_eq!(hl("  12. item"), format!("  \x1b[1m12. {RESET}item"));
    }

    #[test]
    fn test_line_count_preserved() {
        let text = "# a\n\n> q\n---\n- x\n    code";
        assert_eq!(hl(text).split('\n').count(), text.split('\n').count());
    }

    #[test]
    fn test_multibyte_inline() {
        assert_eq!(hl("日本 **語**"), format!("日本 \x1b[1m**語**{RESET}"));
    }
}

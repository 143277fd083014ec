//! Syntax highlighting collaborators.
//!
//! The engine hands a highlighter the flattened document text (lines joined
//! with `\n`) and the file identifier, and displays whatever string comes
//! back verbatim. It never parses or validates the result.
//!
//! Highlighters are picked per file by extension through a
//! [`HighlighterRegistry`]; unknown extensions fall back to
//! [`PlainHighlighter`], which returns the text untouched.

mod markdown;

pub use markdown::MarkdownHighlighter;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Turns flattened document text into display text.
pub trait Highlighter: Send + Sync {
    /// Human-readable name of this highlighter.
    fn name(&self) -> &'static str;

    /// File extensions this highlighter handles (e.g. `md`).
    fn extensions(&self) -> &'static [&'static str] {
        &[]
    }

    /// Produce display text for `text`, which was loaded from `file_id`.
    fn highlight(&self, text: &str, file_id: &str) -> String;
}

/// Highlighter that returns its input unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn name(&self) -> &'static str {
        "Plain"
    }

    fn highlight(&self, text: &str, _file_id: &str) -> String {
        text.to_string()
    }
}

/// Registry for highlighter lookup by file extension.
pub struct HighlighterRegistry {
    highlighters: Vec<Arc<dyn Highlighter>>,
    by_extension: HashMap<String, usize>,
    fallback: Arc<dyn Highlighter>,
}

impl Default for HighlighterRegistry {
    fn default() -> Self {
        Self {
            highlighters: Vec::new(),
            by_extension: HashMap::new(),
            fallback: Arc::new(PlainHighlighter),
        }
    }
}

impl HighlighterRegistry {
    /// Create an empty registry; every file maps to [`PlainHighlighter`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in highlighters.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(MarkdownHighlighter::new()));
        registry
    }

    /// Register a highlighter. Later registrations override existing lookups.
    pub fn register(&mut self, highlighter: Box<dyn Highlighter>) {
        let highlighter: Arc<dyn Highlighter> = Arc::from(highlighter);
        let index = self.highlighters.len();
        for ext in highlighter.extensions() {
            let key = ext.trim_start_matches('.').to_ascii_lowercase();
            if !key.is_empty() {
                self.by_extension.insert(key, index);
            }
        }
        self.highlighters.push(highlighter);
    }

    /// Get a highlighter by extension (case-insensitive, with or without dot).
    #[must_use]
    pub fn for_extension(&self, ext: &str) -> Option<Arc<dyn Highlighter>> {
        let key = ext.trim_start_matches('.').to_ascii_lowercase();
        let index = self.by_extension.get(&key)?;
        self.highlighters.get(*index).cloned()
    }

    /// Get the highlighter for a file identifier, falling back to plain text.
    #[must_use]
    pub fn for_file(&self, file_id: &str) -> Arc<dyn Highlighter> {
        Path::new(file_id)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.for_extension(ext))
            .unwrap_or_else(|| Arc::clone(&self.fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Highlighter for Upper {
        fn name(&self) -> &'static str {
            "Upper"
        }

        fn extensions(&self) -> &'static [&'static str] {
            &[".TXT"]
        }

        fn highlight(&self, text: &str, _file_id: &str) -> String {
            text.to_uppercase()
        }
    }

    #[test]
    fn test_plain_is_identity() {
        assert_eq!(PlainHighlighter.highlight("a\nb", "x.rs"), "a\nb");
    }

    #[test]
    fn test_registry_builtins() {
        let registry = HighlighterRegistry::with_builtins();
        assert_eq!(registry.for_file("README.md").name(), "Markdown");
        assert_eq!(registry.for_file("notes.MARKDOWN").name(), "Markdown");
        assert_eq!(registry.for_file("main.rs").name(), "Plain");
        assert_eq!(registry.for_file("").name(), "Plain");
        assert_eq!(registry.for_file("Makefile").name(), "Plain");
    }

    #[test]
    fn test_registry_custom_override() {
        let mut registry = HighlighterRegistry::new();
        registry.register(Box::new(Upper));
        assert!(registry.for_extension("txt").is_some());
        assert!(registry.for_extension(".txt").is_some());
        let h = registry.for_file("a.txt");
        assert_eq!(h.highlight("hi", "a.txt"), "HI");
    }
}

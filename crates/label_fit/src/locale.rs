//! Locale word delimiters
//!
//! The word-safe pass needs to split label text into words. Only scripts
//! that separate words with a single character are supported; the table maps
//! a locale identifier (e.g. "en-US") to that character. Unknown locales
//! fall back to a plain space.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Delimiter used when the locale has no entry
pub const DEFAULT_WORD_DELIMITER: char = ' ';

/// Mapping from locale identifier to word delimiter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleDelimiterTable {
    delimiters: HashMap<String, char>,
}

impl Default for LocaleDelimiterTable {
    fn default() -> Self {
        Self::empty().with_delimiter("en-US", ' ')
    }
}

impl LocaleDelimiterTable {
    /// Create a table with no entries (every locale falls back)
    pub fn empty() -> Self {
        Self {
            delimiters: HashMap::new(),
        }
    }

    /// Add or replace the delimiter for a locale
    pub fn with_delimiter(mut self, locale: impl Into<String>, delimiter: char) -> Self {
        self.insert(locale, delimiter);
        self
    }

    pub fn insert(&mut self, locale: impl Into<String>, delimiter: char) {
        self.delimiters.insert(locale.into(), delimiter);
    }

    pub fn len(&self) -> usize {
        self.delimiters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delimiters.is_empty()
    }

    /// Delimiter for `locale`, or [`DEFAULT_WORD_DELIMITER`] if absent
    pub fn resolve(&self, locale: &str) -> char {
        self.delimiters
            .get(locale)
            .copied()
            .unwrap_or(DEFAULT_WORD_DELIMITER)
    }

    /// Split `text` on the locale's delimiter. Adjacent delimiters yield
    /// empty words.
    pub fn split_words<'t>(&self, text: &'t str, locale: &str) -> Vec<&'t str> {
        text.split(self.resolve(locale)).collect()
    }

    /// Longest word of `text` by grapheme count, keeping the first on ties.
    ///
    /// Text that does not split into several non-empty words is returned
    /// whole.
    pub fn longest_word<'t>(&self, text: &'t str, locale: &str) -> &'t str {
        let words = self.split_words(text, locale);
        if words.len() <= 1 {
            return text;
        }

        let mut longest = "";
        let mut longest_len = 0;
        for word in words {
            let len = word.graphemes(true).count();
            if len > longest_len {
                longest = word;
                longest_len = len;
            }
        }

        if longest_len == 0 {
            return text;
        }
        longest
    }
}

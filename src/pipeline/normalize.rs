//! Token normalization and filtering

use regex::Regex;

use crate::core::model::FrequencyTable;

/// Turns raw words into tokens and keeps the ones long enough to count
#[derive(Debug, Clone)]
pub struct Normalizer<'a> {
    pattern: &'a Regex,
    minimum_word_length: i64,
}

impl<'a> Normalizer<'a> {
    pub fn new(pattern: &'a Regex, minimum_word_length: i64) -> Self {
        Self {
            pattern,
            minimum_word_length,
        }
    }

    /// Strip pattern matches, lower-case and trim a single raw word.
    /// Returns `None` when the token is rejected.
    pub fn normalize(&self, word: &str) -> Option<String> {
        let stripped = self.pattern.replace_all(word, "");
        let lowered = stripped.to_lowercase();
        let token = lowered.trim();

        if token.is_empty() || !self.long_enough(token) {
            return None;
        }
        Some(token.to_string())
    }

    fn long_enough(&self, token: &str) -> bool {
        if self.minimum_word_length <= 0 {
            return true;
        }
        // Length is in UTF-8 bytes; saturate rather than wrap
        let len = i64::try_from(token.len()).unwrap_or(i64::MAX);
        len >= self.minimum_word_length
    }

    /// Build the frequency table for a whole document
    pub fn count(&self, text: &str) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for word in text.split(' ') {
            if let Some(token) = self.normalize(word) {
                table.add(token);
            }
        }
        table
    }
}

//! Search configuration module.
//!
//! This module defines the settings that shape how patterns are preprocessed:
//! the declared alphabet, the bad character table layout, and size limits.

use super::{ConfigResult, Validate};
use crate::data_structures::boyer_moore_matcher::{
    Alphabet, BoyerMooreError, MatcherOptions, TableLayout, DEFAULT_ALPHABET,
    DEFAULT_DENSE_ALPHABET_LIMIT, MAX_PATTERN_LENGTH,
};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Alphabet symbols, in order; every character is one symbol
    pub alphabet: String,

    /// Bad character table layout
    pub layout: TableLayout,

    /// Largest alphabet for which the `auto` layout stays dense
    pub dense_alphabet_limit: usize,

    /// Longest pattern accepted
    pub max_pattern_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_string(),
            layout: TableLayout::default(),
            dense_alphabet_limit: DEFAULT_DENSE_ALPHABET_LIMIT,
            max_pattern_length: MAX_PATTERN_LENGTH,
        }
    }
}

impl SearchConfig {
    /// Builds the configured alphabet.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet is empty or repeats a symbol.
    pub fn alphabet(&self) -> Result<Alphabet<char>, BoyerMooreError> {
        Alphabet::from_chars(&self.alphabet)
    }

    /// Matcher options derived from this configuration.
    pub fn matcher_options(&self) -> MatcherOptions {
        MatcherOptions::new()
            .layout(self.layout)
            .dense_alphabet_limit(self.dense_alphabet_limit)
            .max_pattern_length(self.max_pattern_length)
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Validate alphabet
        self.alphabet()
            .map_err(|e| ConfigError::ValidationError(format!("Invalid alphabet: {e}")))?;

        // Validate dense_alphabet_limit
        if self.dense_alphabet_limit == 0 {
            return Err(ConfigError::ValidationError(
                "dense_alphabet_limit must be greater than 0".to_string(),
            ));
        }

        // Validate max_pattern_length
        if self.max_pattern_length == 0 || self.max_pattern_length > MAX_PATTERN_LENGTH {
            return Err(ConfigError::ValueOutOfRange {
                key: "search.max_pattern_length".to_string(),
                message: format!("must be between 1 and {MAX_PATTERN_LENGTH}"),
            });
        }

        Ok(())
    }
}

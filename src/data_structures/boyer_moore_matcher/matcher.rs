// Copyright (c) 2025 Kilo Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore string matching algorithm implementation.
//!
//! This module contains the matcher itself, the three shift-rule queries it
//! exposes, and the lazy iterator that drives the right-to-left scan.

use std::iter::FusedIterator;

use serde::Serialize;
use tracing::{debug, trace};

use super::alphabet::{Alphabet, Symbol};
use super::error::{BoyerMooreError, Result};
use super::preprocess::{PreprocessedPattern, MAX_PATTERN_LENGTH};
use super::tables::{TableLayout, DEFAULT_DENSE_ALPHABET_LIMIT};

/// Options for configuring the Boyer-Moore matcher behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherOptions {
    /// Storage strategy for the bad character table
    pub layout: TableLayout,

    /// Largest alphabet for which `TableLayout::Auto` picks the dense table
    pub dense_alphabet_limit: usize,

    /// Longest pattern accepted by the matcher
    pub max_pattern_length: usize,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            layout: TableLayout::Auto,
            dense_alphabet_limit: DEFAULT_DENSE_ALPHABET_LIMIT,
            max_pattern_length: MAX_PATTERN_LENGTH,
        }
    }
}

impl MatcherOptions {
    /// Creates a new options object with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bad character table layout.
    pub fn layout(mut self, layout: TableLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the alphabet size threshold used by `TableLayout::Auto`.
    pub fn dense_alphabet_limit(mut self, limit: usize) -> Self {
        self.dense_alphabet_limit = limit;
        self
    }

    /// Sets the maximum accepted pattern length.
    pub fn max_pattern_length(mut self, max: usize) -> Self {
        self.max_pattern_length = max;
        self
    }
}

/// Outcome of scanning one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Start offsets of every occurrence, in increasing order
    pub occurrences: Vec<usize>,

    /// Number of alignments attempted
    pub alignments: usize,

    /// Number of symbol comparisons performed
    pub comparisons: usize,
}

/// Read-only view of a matcher's tables for external tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSnapshot<S> {
    /// `(symbol, index)` pairs in alphabet order
    pub alphabet: Vec<(S, usize)>,

    /// Layout backing the bad character table
    pub layout: TableLayout,

    /// Bad character table, one row per pattern offset
    pub bad_character: Vec<Vec<usize>>,

    /// The `L` array (empty for single-symbol patterns)
    pub big_l: Vec<usize>,

    /// The smeared `l'` array (empty for single-symbol patterns)
    pub small_l_prime: Vec<usize>,
}

/// Lazy iterator over the occurrences of a pattern in a text.
///
/// Alignment and comparison counters keep accumulating as the iterator is
/// advanced, so a caller that stops early only pays for what it consumed.
#[derive(Debug)]
pub struct MatchIterator<'a, S: Symbol> {
    /// The matcher instance
    matcher: &'a BoyerMooreMatcher<S>,

    /// The text being searched
    text: &'a [S],

    /// Current alignment offset in the text
    position: usize,

    /// Alignments attempted so far
    alignments: usize,

    /// Comparisons performed so far
    comparisons: usize,
}

impl<S: Symbol> MatchIterator<'_, S> {
    /// Alignments attempted so far.
    pub fn alignments(&self) -> usize {
        self.alignments
    }

    /// Symbol comparisons performed so far.
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }
}

impl<S: Symbol> Iterator for MatchIterator<'_, S> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let pattern = &self.matcher.pattern.pattern;
        let m = pattern.len();

        while self.position + m <= self.text.len() {
            let i = self.position;
            self.alignments += 1;

            let mut mismatch = None;
            for j in (0..m).rev() {
                self.comparisons += 1;
                if pattern[j] != self.text[i + j] {
                    mismatch = Some(j);
                    break;
                }
            }

            match mismatch {
                Some(j) => {
                    let symbol = self.text[i + j];
                    let bad_char = self.matcher.bad_character_shift(j, symbol);
                    let good_suffix = self.matcher.good_suffix_rule(j);
                    let shift = bad_char.max(good_suffix).max(1);
                    trace!(
                        alignment = i,
                        mismatch = j,
                        symbol = ?symbol,
                        bad_char,
                        good_suffix,
                        shift,
                        "Mismatch"
                    );
                    self.position += shift;
                }
                None => {
                    let shift = self.matcher.match_skip().max(1);
                    trace!(alignment = i, shift, "Match");
                    self.position += shift;
                    return Some(i);
                }
            }
        }

        None
    }
}

impl<S: Symbol> FusedIterator for MatchIterator<'_, S> {}

/// Boyer-Moore pattern matcher over a declared alphabet.
///
/// The matcher is immutable after construction and can be shared by
/// reference across threads scanning different texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoyerMooreMatcher<S: Symbol> {
    /// The preprocessed pattern
    pattern: PreprocessedPattern<S>,
}

impl<S: Symbol> BoyerMooreMatcher<S> {
    /// Creates a new Boyer-Moore matcher with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty, too long, or contains a
    /// symbol outside `alphabet`.
    pub fn new(pattern: &[S], alphabet: Alphabet<S>) -> Result<Self> {
        Self::with_options(pattern, alphabet, &MatcherOptions::default())
    }

    /// Creates a new Boyer-Moore matcher with custom options.
    ///
    /// # Errors
    ///
    /// Same as [`BoyerMooreMatcher::new`].
    pub fn with_options(
        pattern: &[S],
        alphabet: Alphabet<S>,
        options: &MatcherOptions,
    ) -> Result<Self> {
        let pattern = PreprocessedPattern::new(
            pattern,
            alphabet,
            options.layout,
            options.dense_alphabet_limit,
            options.max_pattern_length,
        )?;

        Ok(Self { pattern })
    }

    /// The pattern this matcher searches for.
    pub fn pattern(&self) -> &[S] {
        &self.pattern.pattern
    }

    /// The alphabet the tables are built over.
    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.pattern.alphabet
    }

    /// Pattern length in symbols.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Always `false`; empty patterns are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Shift given by the bad character rule for a mismatch of `symbol` at
    /// pattern `offset`.
    ///
    /// The table only records occurrences strictly before `offset`, so the
    /// shift is always at least 1.
    ///
    /// # Errors
    ///
    /// Returns `AlphabetMismatch` if `symbol` is not in the alphabet.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not a valid pattern offset.
    pub fn bad_character_rule(&self, offset: usize, symbol: S) -> Result<usize> {
        if !self.pattern.alphabet.contains(symbol) {
            return Err(BoyerMooreError::AlphabetMismatch {
                symbol: format!("{symbol:?}"),
                position: offset,
            });
        }
        Ok(self.bad_character_shift(offset, symbol))
    }

    /// Bad character shift for a symbol already known to be in the alphabet.
    fn bad_character_shift(&self, offset: usize, symbol: S) -> usize {
        let Some(index) = self.pattern.alphabet.index_of(symbol) else {
            unreachable!("text symbols are validated before scanning");
        };
        offset + 1 - self.pattern.bad_char_table.entry(offset, index)
    }

    /// Shift given by the strong good suffix rule for a mismatch at pattern
    /// `offset`. Zero when nothing has matched yet.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not a valid pattern offset.
    pub fn good_suffix_rule(&self, offset: usize) -> usize {
        match &self.pattern.good_suffix_table {
            Some(table) => table.shift(offset),
            None => {
                assert!(offset < self.len(), "Invalid offset: {offset}");
                0
            }
        }
    }

    /// Shift to apply after a full match.
    pub fn match_skip(&self) -> usize {
        self.pattern
            .good_suffix_table
            .as_ref()
            .map_or(1, |table| table.match_shift())
    }

    /// Returns a lazy iterator over all occurrences of the pattern in `text`.
    ///
    /// # Errors
    ///
    /// Returns `AlphabetMismatch` if any text symbol is outside the alphabet.
    pub fn find_iter<'a>(&'a self, text: &'a [S]) -> Result<MatchIterator<'a, S>> {
        self.pattern.alphabet.check(text)?;

        Ok(MatchIterator {
            matcher: self,
            text,
            position: 0,
            alignments: 0,
            comparisons: 0,
        })
    }

    /// Finds the first occurrence of the pattern in `text`.
    ///
    /// # Errors
    ///
    /// Returns `AlphabetMismatch` if any text symbol is outside the alphabet.
    pub fn find_first(&self, text: &[S]) -> Result<Option<usize>> {
        Ok(self.find_iter(text)?.next())
    }

    /// Locates every occurrence of the pattern in `text`.
    ///
    /// # Errors
    ///
    /// Returns `AlphabetMismatch` if any text symbol is outside the alphabet.
    pub fn locate_all(&self, text: &[S]) -> Result<ScanReport> {
        let mut iter = self.find_iter(text)?;
        let occurrences: Vec<usize> = iter.by_ref().collect();
        let report = ScanReport {
            occurrences,
            alignments: iter.alignments(),
            comparisons: iter.comparisons(),
        };

        debug!(
            text_len = text.len(),
            pattern_len = self.len(),
            occurrences = report.occurrences.len(),
            alignments = report.alignments,
            comparisons = report.comparisons,
            "Scan complete"
        );

        Ok(report)
    }

    /// Exports the preprocessing tables for inspection.
    pub fn tables(&self) -> TableSnapshot<S> {
        let (big_l, small_l_prime) = match &self.pattern.good_suffix_table {
            Some(table) => (table.big_l().to_vec(), table.small_l_prime().to_vec()),
            None => (Vec::new(), Vec::new()),
        };

        TableSnapshot {
            alphabet: self.pattern.alphabet.to_map(),
            layout: self.pattern.bad_char_table.layout(),
            bad_character: self.pattern.bad_char_table.rows(),
            big_l,
            small_l_prime,
        }
    }
}

impl BoyerMooreMatcher<char> {
    /// Creates a character matcher from string slices.
    ///
    /// # Errors
    ///
    /// Same as [`Alphabet::new`] and [`BoyerMooreMatcher::with_options`].
    pub fn from_str_with_options(
        pattern: &str,
        alphabet: &str,
        options: &MatcherOptions,
    ) -> Result<Self> {
        let pattern: Vec<char> = pattern.chars().collect();
        Self::with_options(&pattern, Alphabet::from_chars(alphabet)?, options)
    }

    /// [`BoyerMooreMatcher::locate_all`] over the characters of a string.
    ///
    /// Offsets are character offsets, not byte offsets.
    ///
    /// # Errors
    ///
    /// Returns `AlphabetMismatch` if any text character is outside the alphabet.
    pub fn locate_str(&self, text: &str) -> Result<ScanReport> {
        let text: Vec<char> = text.chars().collect();
        self.locate_all(&text)
    }

    /// [`BoyerMooreMatcher::find_first`] over the characters of a string.
    ///
    /// # Errors
    ///
    /// Returns `AlphabetMismatch` if any text character is outside the alphabet.
    pub fn find_first_str(&self, text: &str) -> Result<Option<usize>> {
        let text: Vec<char> = text.chars().collect();
        self.find_first(&text)
    }
}

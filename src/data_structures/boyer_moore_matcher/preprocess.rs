// Copyright (c) 2025 Kilo Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Pattern preprocessing for the Boyer-Moore algorithm.
//!
//! This module contains the fundamental preprocessing passes (the Z-array and
//! the N-array derived from it) and the `PreprocessedPattern` aggregate that
//! holds every lookup table the search phase needs.

use tracing::debug;

use super::alphabet::{Alphabet, Symbol};
use super::error::{BoyerMooreError, Result};
use super::tables::{BadCharTable, GoodSuffixTable, TableLayout};

/// Maximum allowed pattern length to prevent excessive memory usage
pub const MAX_PATTERN_LENGTH: usize = 1024 * 32;

/// Counts how many symbols match when comparing `sequence[a..]` against
/// `sequence[b..]` position by position.
#[inline]
fn common_run<S: PartialEq>(sequence: &[S], a: usize, b: usize) -> usize {
    sequence[a..]
        .iter()
        .zip(&sequence[b..])
        .take_while(|(x, y)| x == y)
        .count()
}

/// Computes the Z-array of `sequence` with Gusfield's linear-time algorithm.
///
/// `Z[i]` is the length of the longest substring starting at `i` that is
/// also a prefix of `sequence`; `Z[0]` is the sequence length by convention.
///
/// # Errors
///
/// Returns `InvalidPatternLength` for sequences shorter than two symbols.
pub fn z_array<S: PartialEq>(sequence: &[S]) -> Result<Vec<usize>> {
    let len = sequence.len();
    if len < 2 {
        return Err(BoyerMooreError::InvalidPatternLength {
            length: len,
            required: 2,
        });
    }

    let mut z = vec![0; len];
    z[0] = len;
    z[1] = common_run(sequence, 1, 0);

    // Rightmost Z-box seen so far, as the inclusive interval [left, right].
    let (mut left, mut right) = (0, 0);
    if z[1] > 0 {
        left = 1;
        right = z[1];
    }

    for k in 2..len {
        if k > right {
            // Outside every known box: compare from scratch.
            z[k] = common_run(sequence, k, 0);
            if z[k] > 0 {
                left = k;
                right = k + z[k] - 1;
            }
        } else {
            let beta = right - k + 1;
            let mirrored = z[k - left];
            if beta > mirrored {
                z[k] = mirrored;
            } else {
                // The first `beta` symbols are known to match; only look past the box.
                let extra = common_run(sequence, right + 1, beta);
                left = k;
                right += extra;
                z[k] = right - k + 1;
            }
        }
    }

    Ok(z)
}

/// Computes the N-array: the Z-array of the reversed sequence, reversed.
///
/// `N[i]` is the length of the longest suffix of `sequence[..=i]` that is
/// also a suffix of the whole sequence, so `N[len - 1] == len`.
///
/// # Errors
///
/// Returns `InvalidPatternLength` for sequences shorter than two symbols.
pub fn n_array<S: PartialEq + Clone>(sequence: &[S]) -> Result<Vec<usize>> {
    let reversed: Vec<S> = sequence.iter().rev().cloned().collect();
    let mut n = z_array(&reversed)?;
    n.reverse();
    Ok(n)
}

/// Result of the preprocessing step containing all necessary lookup tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessedPattern<S: Symbol> {
    /// The pattern being searched for
    pub pattern: Vec<S>,

    /// The declared alphabet the tables are indexed by
    pub alphabet: Alphabet<S>,

    /// Bad character rule table
    pub bad_char_table: BadCharTable,

    /// Good suffix rule table, absent for single-symbol patterns
    pub good_suffix_table: Option<GoodSuffixTable>,
}

impl<S: Symbol> PreprocessedPattern<S> {
    /// Preprocesses a pattern for use in the Boyer-Moore algorithm.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The pattern to preprocess.
    /// * `alphabet` - The alphabet every pattern symbol must belong to.
    /// * `layout` - Storage strategy for the bad character table.
    /// * `dense_limit` - Largest alphabet for which `TableLayout::Auto` stays dense.
    /// * `max_len` - Upper bound on the pattern length.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty, exceeds `max_len`, or uses
    /// a symbol outside the alphabet.
    pub fn new(
        pattern: &[S],
        alphabet: Alphabet<S>,
        layout: TableLayout,
        dense_limit: usize,
        max_len: usize,
    ) -> Result<Self> {
        if pattern.is_empty() {
            return Err(BoyerMooreError::EmptyPattern);
        }

        if pattern.len() > max_len {
            return Err(BoyerMooreError::PatternTooLarge {
                length: pattern.len(),
                max: max_len,
            });
        }

        let bad_char_table = BadCharTable::build(pattern, &alphabet, layout, dense_limit)?;

        // A lone symbol has no proper suffix, so the good suffix rule is vacuous.
        let good_suffix_table = if pattern.len() > 1 {
            Some(GoodSuffixTable::new(pattern)?)
        } else {
            None
        };

        debug!(
            pattern_len = pattern.len(),
            alphabet_len = alphabet.len(),
            layout = ?bad_char_table.layout(),
            "Preprocessed pattern"
        );

        Ok(Self {
            pattern: pattern.to_vec(),
            alphabet,
            bad_char_table,
            good_suffix_table,
        })
    }

    /// The length of the pattern in symbols
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Always `false`; empty patterns are rejected during preprocessing.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}

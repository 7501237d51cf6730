// Copyright (c) 2025 Kilo Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tables for the Boyer-Moore string matching algorithm.
//!
//! This module contains the data structures for the lookup tables used by
//! the Boyer-Moore algorithm to achieve efficient string matching:
//!
//! 1. Bad Character Table: for every pattern offset and alphabet symbol, the
//!    rightmost occurrence of that symbol strictly before the offset.
//!
//! 2. Good Suffix Table: the strong good suffix arrays `L` and `l'`, derived
//!    from the N-array of the pattern.
//!
//! These tables are built once during preprocessing and are read-only after.

use serde::{Deserialize, Serialize};

use super::alphabet::{Alphabet, Symbol};
use super::error::Result;
use super::preprocess::n_array;

/// Alphabet size up to which `TableLayout::Auto` chooses the dense layout.
pub const DEFAULT_DENSE_ALPHABET_LIMIT: usize = 256;

/// Storage strategy for the bad character table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableLayout {
    /// One row of `k` entries per pattern offset
    Dense,
    /// Per-symbol occurrence lists, searched on lookup
    Sparse,
    /// Dense for small alphabets, sparse otherwise
    #[default]
    Auto,
}

impl TableLayout {
    /// Resolves `Auto` against an alphabet size.
    pub fn resolve(self, alphabet_len: usize, dense_limit: usize) -> Self {
        match self {
            Self::Auto if alphabet_len <= dense_limit => Self::Dense,
            Self::Auto => Self::Sparse,
            other => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum BadCharStorage {
    /// Row-major `[m][k]` entries
    Dense(Vec<usize>),
    /// Ascending pattern positions for each symbol index
    Sparse(Vec<Vec<usize>>),
}

/// Represents the bad character table for the Boyer-Moore algorithm.
///
/// `entry(i, c)` is `1 +` the index of the rightmost occurrence of symbol
/// `c` in `pattern[..i]`, or `0` when `c` does not occur before `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadCharTable {
    storage: BadCharStorage,
    pattern_len: usize,
    alphabet_len: usize,
}

impl BadCharTable {
    /// Builds the table for `pattern` over `alphabet`.
    ///
    /// `TableLayout::Auto` picks the dense layout when the alphabet has at
    /// most `dense_limit` symbols.
    ///
    /// # Errors
    ///
    /// Returns `AlphabetMismatch` if a pattern symbol is not in `alphabet`.
    pub fn build<S: Symbol>(
        pattern: &[S],
        alphabet: &Alphabet<S>,
        layout: TableLayout,
        dense_limit: usize,
    ) -> Result<Self> {
        let encoded = alphabet.encode(pattern)?;
        let sparse = layout.resolve(alphabet.len(), dense_limit) == TableLayout::Sparse;
        Ok(Self::from_encoded(&encoded, alphabet.len(), sparse))
    }

    fn from_encoded(encoded: &[usize], alphabet_len: usize, sparse: bool) -> Self {
        let storage = if sparse {
            let mut positions = vec![Vec::new(); alphabet_len];
            for (i, &c) in encoded.iter().enumerate() {
                positions[c].push(i);
            }
            BadCharStorage::Sparse(positions)
        } else {
            let mut rows = Vec::with_capacity(encoded.len() * alphabet_len);
            let mut next = vec![0; alphabet_len];
            for (i, &c) in encoded.iter().enumerate() {
                rows.extend_from_slice(&next);
                next[c] = i + 1;
            }
            BadCharStorage::Dense(rows)
        };

        Self {
            storage,
            pattern_len: encoded.len(),
            alphabet_len,
        }
    }

    /// Returns the table entry for a pattern offset and symbol index.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not a valid pattern offset or `symbol` is not a
    /// valid alphabet index.
    #[inline]
    pub fn entry(&self, offset: usize, symbol: usize) -> usize {
        assert!(offset < self.pattern_len, "Invalid offset: {offset}");
        assert!(symbol < self.alphabet_len, "Invalid symbol index: {symbol}");

        match &self.storage {
            BadCharStorage::Dense(rows) => rows[offset * self.alphabet_len + symbol],
            BadCharStorage::Sparse(positions) => {
                let occurrences = &positions[symbol];
                match occurrences.partition_point(|&p| p < offset) {
                    0 => 0,
                    before => occurrences[before - 1] + 1,
                }
            }
        }
    }

    /// Materializes the row for `offset`, one entry per alphabet symbol.
    pub fn row(&self, offset: usize) -> Vec<usize> {
        (0..self.alphabet_len).map(|c| self.entry(offset, c)).collect()
    }

    /// Materializes the whole `[m][k]` table.
    pub fn rows(&self) -> Vec<Vec<usize>> {
        (0..self.pattern_len).map(|i| self.row(i)).collect()
    }

    /// The concrete layout backing this table.
    pub fn layout(&self) -> TableLayout {
        match self.storage {
            BadCharStorage::Dense(_) => TableLayout::Dense,
            BadCharStorage::Sparse(_) => TableLayout::Sparse,
        }
    }
}

/// The three good suffix arrays, including the intermediate `L'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoodSuffixArrays {
    /// `L'[i]`: largest `j < m` such that `N[j] == m - i`, as a 1-based end position
    pub big_l_prime: Vec<usize>,
    /// `L[i] = max(L[i-1], L'[i])`
    pub big_l: Vec<usize>,
    /// `l'[i]`: length of the longest border of the pattern no longer than `m - i`
    pub small_l_prime: Vec<usize>,
}

impl GoodSuffixArrays {
    /// Builds `L'`, `L` and `l'` for `pattern`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPatternLength` for patterns shorter than two symbols.
    pub fn build<S: PartialEq + Clone>(pattern: &[S]) -> Result<Self> {
        let n = n_array(pattern)?;
        let big_l_prime = big_l_prime_array(&n);
        let big_l = big_l_array(&big_l_prime);
        let small_l_prime = small_l_prime_array(&n);

        Ok(Self {
            big_l_prime,
            big_l,
            small_l_prime,
        })
    }
}

fn big_l_prime_array(n: &[usize]) -> Vec<usize> {
    let m = n.len();
    let mut l_prime = vec![0; m];

    // Increasing j with unconditional overwrite: the largest j wins.
    for (j, &suffix_len) in n.iter().enumerate().take(m - 1) {
        let i = m - suffix_len;
        if i < m {
            l_prime[i] = j + 1;
        }
    }

    l_prime
}

fn big_l_array(l_prime: &[usize]) -> Vec<usize> {
    let mut l = vec![0; l_prime.len()];
    l[1] = l_prime[1];

    for i in 2..l_prime.len() {
        l[i] = l[i - 1].max(l_prime[i]);
    }

    l
}

fn small_l_prime_array(n: &[usize]) -> Vec<usize> {
    let m = n.len();
    let mut small = vec![0; m];

    for (i, &suffix_len) in n.iter().enumerate() {
        if suffix_len == i + 1 {
            small[m - i - 1] = i + 1;
        }
    }

    // Smear
    for i in (0..m - 1).rev() {
        if small[i] == 0 {
            small[i] = small[i + 1];
        }
    }

    small
}

/// Represents the good suffix table for the Boyer-Moore algorithm.
///
/// Only `L` and `l'` are retained; `L'` is an intermediate of the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoodSuffixTable {
    big_l: Vec<usize>,
    small_l_prime: Vec<usize>,
}

impl GoodSuffixTable {
    /// Creates a new good suffix table for the given pattern.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPatternLength` for patterns shorter than two symbols.
    pub fn new<S: PartialEq + Clone>(pattern: &[S]) -> Result<Self> {
        Ok(GoodSuffixArrays::build(pattern)?.into())
    }

    /// Shift after a mismatch at `offset`.
    ///
    /// Zero when the mismatch is at the last pattern position, since nothing
    /// has matched yet.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not a valid pattern offset.
    pub fn shift(&self, offset: usize) -> usize {
        let m = self.big_l.len();
        assert!(offset < m, "Invalid offset: {offset}");

        if offset == m - 1 {
            return 0;
        }

        // Leftmost position of the matched suffix
        let start = offset + 1;
        if self.big_l[start] > 0 {
            m - self.big_l[start]
        } else {
            m - self.small_l_prime[start]
        }
    }

    /// Shift after a full match: slide past the longest proper border.
    pub fn match_shift(&self) -> usize {
        self.big_l.len() - self.small_l_prime[1]
    }

    /// The `L` array.
    pub fn big_l(&self) -> &[usize] {
        &self.big_l
    }

    /// The smeared `l'` array.
    pub fn small_l_prime(&self) -> &[usize] {
        &self.small_l_prime
    }
}

impl From<GoodSuffixArrays> for GoodSuffixTable {
    fn from(arrays: GoodSuffixArrays) -> Self {
        Self {
            big_l: arrays.big_l,
            small_l_prime: arrays.small_l_prime,
        }
    }
}

// Copyright (c) 2025 Kilo Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore Pattern Matcher for exact search over a declared alphabet.
//!
//! This module implements the Boyer-Moore string search algorithm with the
//! bad character rule and the strong good suffix rule. The good suffix tables
//! are derived from the Z-algorithm (Gusfield's construction) rather than
//! from a suffix automaton.
//!
//! # Features
//!
//! - Generic over the symbol type (`char`, `u8`, or any `Copy + Eq + Hash` type)
//! - Dense or sparse bad character tables, chosen by alphabet size
//! - Lazy iterator interface for callers that only need the first hit
//! - Alignment and comparison counters for instrumentation
//! - Read-only export of every preprocessing table
//!
//! # Example
//!
//! ```
//! use kilo_search_lib::data_structures::boyer_moore_matcher::{Alphabet, BoyerMooreMatcher};
//!
//! let alphabet = Alphabet::from_chars("abcdefghijklmnopqrstuvwxyz").unwrap();
//! let pattern: Vec<char> = "ana".chars().collect();
//! let matcher = BoyerMooreMatcher::new(&pattern, alphabet).unwrap();
//!
//! let report = matcher.locate_str("banana").unwrap();
//! assert_eq!(report.occurrences, vec![1, 3]);
//! ```
//!
//! # Performance Characteristics
//!
//! - Preprocessing time: O(m) for the good suffix tables, O(m * σ) for the
//!   dense bad character table (O(m + σ) for the sparse one)
//! - Best case: O(n/m) comparisons (where n is the text length)
//! - Every shift is at least 1, so a scan always terminates

mod alphabet;
mod error;
mod matcher;
mod preprocess;
mod tables;

#[cfg(test)]
mod tests;

// Re-exports
pub use alphabet::{Alphabet, Symbol, DEFAULT_ALPHABET};
pub use error::{BoyerMooreError, Result};
pub use matcher::{BoyerMooreMatcher, MatchIterator, MatcherOptions, ScanReport, TableSnapshot};
pub use preprocess::{n_array, z_array, MAX_PATTERN_LENGTH};
pub use tables::{
    BadCharTable, GoodSuffixArrays, GoodSuffixTable, TableLayout, DEFAULT_DENSE_ALPHABET_LIMIT,
};

// Copyright (c) 2025 Kilo Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Boyer-Moore Pattern Matcher.

/// Error types for Boyer-Moore Pattern Matcher operations
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum BoyerMooreError {
    /// Empty pattern provided
    #[error("Pattern cannot be empty")]
    EmptyPattern,

    /// Pattern is too large
    #[error("Pattern length {length} exceeds maximum allowed length of {max}")]
    PatternTooLarge {
        /// Length of the rejected pattern.
        length: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A table builder was handed a sequence it is not defined for
    #[error("Invalid sequence length {length}: at least {required} symbols are required")]
    InvalidPatternLength {
        /// Length of the offending sequence.
        length: usize,
        /// Minimum length the builder accepts.
        required: usize,
    },

    /// Alphabet declared without symbols
    #[error("Alphabet cannot be empty")]
    EmptyAlphabet,

    /// Alphabet lists the same symbol twice
    #[error("Duplicate symbol {symbol} at alphabet position {position}")]
    DuplicateSymbol {
        /// Debug rendering of the repeated symbol.
        symbol: String,
        /// Position of the second occurrence.
        position: usize,
    },

    /// A pattern or text symbol is missing from the declared alphabet
    #[error("Symbol {symbol} at position {position} not found in alphabet")]
    AlphabetMismatch {
        /// Debug rendering of the unknown symbol.
        symbol: String,
        /// Position of the symbol in the offending sequence.
        position: usize,
    },
}

/// Result type for Boyer-Moore Pattern Matcher operations
pub type Result<T> = std::result::Result<T, BoyerMooreError>;

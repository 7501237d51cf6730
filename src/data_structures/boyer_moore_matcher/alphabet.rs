// Copyright (c) 2025 Kilo Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Declared alphabets and the dense symbol index they induce.
//!
//! Every table built by the matcher is indexed by a symbol's position in
//! the alphabet rather than by the symbol itself, so the alphabet is the
//! single place where symbols are validated.

use std::fmt::Debug;
use std::hash::Hash;

use fnv::FnvHashMap;

use super::error::{BoyerMooreError, Result};

/// Trait alias for the symbol types the matcher accepts.
pub trait Symbol: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> Symbol for T {}

/// An ordered, duplicate-free set of symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet<S: Symbol> {
    /// Symbols in declaration order
    symbols: Vec<S>,

    /// Maps each symbol to its declaration index
    index: FnvHashMap<S, usize>,
}

impl<S: Symbol> Alphabet<S> {
    /// Creates an alphabet from symbols in their declared order.
    ///
    /// # Errors
    ///
    /// Returns `EmptyAlphabet` when no symbols are given and
    /// `DuplicateSymbol` when a symbol appears more than once.
    pub fn new<I: IntoIterator<Item = S>>(symbols: I) -> Result<Self> {
        let symbols: Vec<S> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(BoyerMooreError::EmptyAlphabet);
        }

        let mut index =
            FnvHashMap::with_capacity_and_hasher(symbols.len(), Default::default());
        for (position, &symbol) in symbols.iter().enumerate() {
            if index.insert(symbol, position).is_some() {
                return Err(BoyerMooreError::DuplicateSymbol {
                    symbol: format!("{symbol:?}"),
                    position,
                });
            }
        }

        Ok(Self { symbols, index })
    }

    /// Returns the dense index of `symbol`, if it is part of the alphabet.
    #[inline]
    pub fn index_of(&self, symbol: S) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    /// Returns whether `symbol` belongs to the alphabet.
    pub fn contains(&self, symbol: S) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Symbols in declaration order.
    pub fn symbols(&self) -> &[S] {
        &self.symbols
    }

    /// Number of symbols (the alphabet cardinality).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; an alphabet cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Translates a sequence into dense symbol indices.
    ///
    /// # Errors
    ///
    /// Returns `AlphabetMismatch` for the first symbol not in the alphabet.
    pub fn encode(&self, sequence: &[S]) -> Result<Vec<usize>> {
        sequence
            .iter()
            .enumerate()
            .map(|(position, &symbol)| {
                self.index_of(symbol)
                    .ok_or_else(|| BoyerMooreError::AlphabetMismatch {
                        symbol: format!("{symbol:?}"),
                        position,
                    })
            })
            .collect()
    }

    /// Verifies that every symbol of `sequence` belongs to the alphabet.
    ///
    /// # Errors
    ///
    /// Returns `AlphabetMismatch` for the first symbol not in the alphabet.
    pub fn check(&self, sequence: &[S]) -> Result<()> {
        match sequence.iter().position(|&symbol| !self.contains(symbol)) {
            Some(position) => Err(BoyerMooreError::AlphabetMismatch {
                symbol: format!("{:?}", sequence[position]),
                position,
            }),
            None => Ok(()),
        }
    }

    /// Ordered `(symbol, index)` pairs, for diagnostics.
    pub fn to_map(&self) -> Vec<(S, usize)> {
        self.symbols.iter().copied().zip(0..).collect()
    }
}

impl Alphabet<char> {
    /// Creates a character alphabet from the characters of `symbols`.
    ///
    /// # Errors
    ///
    /// Same as [`Alphabet::new`].
    pub fn from_chars(symbols: &str) -> Result<Self> {
        Self::new(symbols.chars())
    }

    /// Lowercase ASCII letters plus the space character.
    pub fn lowercase_with_space() -> Self {
        Self::from_chars(DEFAULT_ALPHABET)
            .unwrap_or_else(|e| unreachable!("default alphabet is well formed: {e}"))
    }
}

impl Alphabet<u8> {
    /// All 256 byte values in ascending order.
    pub fn bytes() -> Self {
        let symbols: Vec<u8> = (0..=u8::MAX).collect();
        let index = symbols.iter().map(|&b| (b, b as usize)).collect();
        Self { symbols, index }
    }
}

/// Alphabet used when none is configured.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz ";

//! Data structures for Kilo Search.
//!
//! This module contains the search data structures. All implementations
//! adhere to the project requirements:
//! - No unsafe code
//! - Immutable after construction, shareable across threads without locking
//! - No allocation in the scan loop

pub mod boyer_moore_matcher;

// Re-export common data structures
pub use boyer_moore_matcher::{Alphabet, BoyerMooreError, BoyerMooreMatcher, ScanReport};

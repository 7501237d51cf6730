//! Kilo Search Library
//!
//! Exact pattern search over a declared alphabet using the Boyer-Moore
//! algorithm with the bad character rule and the strong good suffix rule.
//! The library holds the matcher and its preprocessing engine together with
//! the configuration and error layers used by the `kilo` binary.
//!
//! # Architecture
//!
//! - Preprocessing flows one way: pattern and alphabet, then the Z and N
//!   arrays, then the good suffix and bad character tables
//! - Matchers are immutable once built and safe to share across threads
//! - Explicit error types, propagated rather than panicking
//! - `tracing` events only; subscribers are installed by the binary

pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Kilo Search.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

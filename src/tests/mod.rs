//! Test modules for Kilo Search.
//!
//! This module contains the crate-level tests, including:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Shared fixtures and proptest strategies
//!
//! Matcher unit and property tests live next to the matcher in
//! `data_structures::boyer_moore_matcher::tests`.


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{create_test_dir, symbol_string_strategy, TestFixture};

//! Error module for Kilo Search.
//!
//! This module ties the matcher's own error type together with the
//! configuration, I/O and serialization failures the binary can hit, and
//! provides a small reporting layer that routes errors to `tracing`.

use std::fmt::{Display, Formatter};
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::data_structures::boyer_moore_matcher::BoyerMooreError;

pub mod config;

/// Result type alias used throughout Kilo Search.
pub type KiloResult<T> = Result<T, KiloError>;

/// Core error enum for Kilo Search.
#[derive(Error, Debug)]
pub enum KiloError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by pattern preprocessing or scanning.
    #[error("Search error: {0}")]
    Search(#[from] BoyerMooreError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: KiloError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: KiloError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// An error reporter that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Global error reporter accessor.
#[derive(Debug, Default)]
pub struct ErrorReporting {
    reporter: Option<Arc<dyn ErrorReporter>>,
}

impl ErrorReporting {
    /// Set the error reporter.
    pub fn set_reporter(&mut self, reporter: Arc<dyn ErrorReporter>) {
        self.reporter = Some(reporter);
    }

    /// Report an error with context.
    pub fn report(&self, context: ErrorContext) {
        if let Some(reporter) = &self.reporter {
            reporter.report(context);
        } else {
            // No reporter installed yet
            eprintln!("Error: {context}");
        }
    }
}

static ERROR_REPORTING: Lazy<RwLock<ErrorReporting>> =
    Lazy::new(|| RwLock::new(ErrorReporting::default()));

/// Report an error through the global reporter.
pub fn report_error(context: ErrorContext) {
    let reporting = ERROR_REPORTING
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    reporting.report(context);
}

/// Set the global error reporter.
///
/// # Arguments
///
/// * `reporter` - The error reporter to use
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    ERROR_REPORTING
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .set_reporter(reporter);
}

//! Error types for performance measurement analysis
//!
//! Provides a unified error type for all perfsift crates.

use thiserror::Error;

/// Core error type for measurement aggregation and simulation
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} observations, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Analyser name not present in the registry
    #[error("Unknown analyser: {0}")]
    UnknownAnalyser(String),

    /// IO error (for population file reads)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a sequence left empty after outlier stripping
    pub fn empty_after_strip(expected: usize, actual: usize) -> Self {
        Self::InsufficientData { expected, actual }
    }

    /// Create an error for a series token that does not parse as a number
    pub fn non_numeric(token: &str) -> Self {
        Self::InvalidInput(format!("observation {token:?} is not numeric"))
    }

    /// Create an error for a parameter outside its valid range
    pub fn out_of_range(name: &str, value: impl std::fmt::Display, range: &str) -> Self {
        Self::InvalidParameter(format!("{name} {value} outside {range}"))
    }
}

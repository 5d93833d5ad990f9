//! Error types for the diodyne batch evaluator.
//!
//! This module provides a unified error type [`DiodyneError`] that covers
//! all error conditions that can occur during table parsing, case
//! construction, and numeric evaluation.

use thiserror::Error;

/// Result type alias using [`DiodyneError`].
pub type Result<T> = std::result::Result<T, DiodyneError>;

/// Unified error type for all diodyne operations.
#[derive(Error, Debug)]
pub enum DiodyneError {
    // ============ Table Parsing Errors ============
    /// Malformed input row
    #[error("Parse error at row {line}: {message}")]
    Parse { line: usize, message: String },

    /// Unrecognized problem-type tag
    #[error("Unknown problem type '{tag}' at row {line}")]
    InvalidCase { tag: String, line: usize },

    /// Diode-resistor case with zero resistance
    #[error("Invalid case at row {line}: diode_resistor requires R != 0")]
    ZeroResistance { line: usize },

    // ============ Evaluation Errors ============
    /// Saturation current outside the model's domain
    #[error("Saturation current Is = {is:.3e} is not positive")]
    NonPositiveSaturation { is: f64 },

    /// Logarithm argument fell outside its domain
    #[error("Log argument I/Is + 1 = {argument:.3e} is not positive")]
    LogDomain { argument: f64 },

    /// Derivative denominator vanished
    #[error("Derivative undefined: I + Is = 0")]
    ZeroDenominator,

    // ============ I/O Errors ============
    /// Error reading the input table
    #[error("Failed to read input table '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing results
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DiodyneError {
    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid-case error
    pub fn invalid_case(tag: impl Into<String>, line: usize) -> Self {
        Self::InvalidCase {
            tag: tag.into(),
            line,
        }
    }
}

//! Error types for the Child Care Subsidy engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading the rate table or
//! estimating a subsidy.

use thiserror::Error;

/// The main error type for the Child Care Subsidy engine.
///
/// The calculation produces [`EngineError::InvalidInput`] for rejected
/// input and [`EngineError::AmountOverflow`] when a figure exceeds the
/// decimal range. The configuration variants come from loading the rate table.
///
/// # Example
///
/// ```
/// use ccs_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     message: "Hourly rate must be greater than zero".to_string(),
/// };
/// assert_eq!(error.to_string(), "Hourly rate must be greater than zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The calculation input failed validation.
    #[error("{message}")]
    InvalidInput {
        /// The human-readable reason the input was rejected.
        message: String,
    },

    /// A derived figure does not fit in a `Decimal`.
    #[error("Amount too large to calculate: {figure}")]
    AmountOverflow {
        /// The figure being derived when the overflow occurred.
        figure: String,
    },

    /// A rate table or scheme file is missing.
    #[error("Rate table file missing: {path}")]
    ConfigNotFound {
        /// Location of the missing file.
        path: String,
    },

    /// A rate table or scheme file is unreadable, malformed or inconsistent.
    #[error("Invalid rate table in {path}: {message}")]
    ConfigParseError {
        /// Location of the offending file.
        path: String,
        /// What was wrong with it.
        message: String,
    },
}

impl EngineError {
    /// Creates an [`EngineError::InvalidInput`] with the given reason.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Result of any fallible engine operation.
pub type EngineResult<T> = Result<T, EngineError>;

// ============================================================================
// Numeric Errors
// Error types for decimal string arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing or operating on decimal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string could not be parsed as a decimal value
    Parse { input: String },
    /// Attempted division by zero
    DivisionByZero,
    /// Result does not fit the target representation
    Overflow,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Configuration rejected by validation
    InvalidConfig(String),
}

impl NumericError {
    pub(crate) fn parse(input: &str) -> Self {
        NumericError::Parse {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Parse { input } => {
                write!(f, "invalid input: could not parse {:?} as a decimal", input)
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

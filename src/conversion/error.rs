//! Conversion error types

use thiserror::Error;

/// Errors raised by the conversion core and the state built on it
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Unknown unit pair: '{0}'")]
    UnknownUnitPair(String),

    #[error("Invalid conversion factor: {0}")]
    InvalidFactor(f64),

    #[error("Value must be a finite number, got {0}")]
    InvalidValue(f64),

    #[error("Converting {0} overflows")]
    Overflow(f64),

    #[error("No unit pairs registered")]
    EmptyRegistry,

    #[error("Unit pair '{0}' is registered more than once")]
    DuplicateUnitPair(String),

    #[error("Not a number: '{0}'")]
    InvalidInput(String),
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConversionError>;

//! Conversion core
//!
//! The static unit-pair registry and the pure conversion service built on it.

pub mod converter;
pub mod error;
pub mod units;

pub use converter::{
    convert, validate_registry, ConversionRequest, ConversionResult, ConversionService,
    Direction,
};
pub use error::{ConversionError, ConvertResult};
pub use units::{Unit, UnitPair, ARROW_FROM_IMAGE, ARROW_TO_IMAGE, EMPTY_IMAGE, UNIT_PAIRS};

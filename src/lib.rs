//! Units Converter Library
//!
//! Converts between a fixed set of unit pairs and models the converter
//! window's state for presentation layers.

pub mod build_info;
pub mod config;
pub mod conversion;
pub mod mcp;
pub mod models;
pub mod tools;

//! Presentation state
//!
//! State owned by a presentation layer. The conversion core never reads it.

mod converter_state;

pub use converter_state::{window_title, ConverterState, ConverterView, Field};

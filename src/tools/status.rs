//! Converter Status Tool
//!
//! Provides runtime status information about the converter service.

use serde::Serialize;
use std::time::Instant;

use crate::build_info::BuildInfo;

/// Usage instructions for AI assistants
pub const CONVERTER_INSTRUCTIONS: &str = r#"
# Units Converter Instructions

## Unit Pairs

| id         | forward                | factor  |
|------------|------------------------|---------|
| `in to cm` | Inches → Centimeters   | 2.54    |
| `lb to kg` | Pounds → Kilograms     | 1 / 2.2 |
| `ft to in` | Feet → Inches          | 12      |

Call `list_unit_pairs` for the authoritative list. Identifiers are matched
exactly (surrounding whitespace is ignored).

## One-off conversions

Use `convert` with `unit_pair`, `value` and optionally `reversed`.
- `reversed: false` multiplies by the factor (Inches → Centimeters)
- `reversed: true` divides by the factor (Centimeters → Inches)

## Working like the converter window

The server keeps one converter session:
1. `select_unit_pair` - pick a pair (both values reset to 0)
2. `set_reversed` - flip direction; the output field resets to 0
3. `run_conversion` - optionally pass `input`, then convert the input field
4. `get_converter_state` - read labels, values and pictures

## Errors

- Unknown unit pair: the identifier is not registered
- Not a number: input text could not be parsed
- Value must be a finite number: NaN or infinity was given
- Converting ... overflows: the result does not fit in a finite number
"#;

/// Converter status information
#[derive(Debug, Serialize)]
pub struct ConverterStatus {
    pub name: &'static str,
    pub version: &'static str,
    pub build_timestamp: &'static str,
    pub profile: &'static str,
    pub target: &'static str,
    pub unit_pairs: usize,
    pub uptime_seconds: u64,
    pub process_id: u32,
}

/// Tracks server runtime for status reporting
pub struct StatusTracker {
    start_time: Instant,
    unit_pairs: usize,
}

impl StatusTracker {
    pub fn new(unit_pairs: usize) -> Self {
        Self {
            start_time: Instant::now(),
            unit_pairs,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> ConverterStatus {
        let build_info = BuildInfo::current();

        ConverterStatus {
            name: build_info.name,
            version: build_info.version,
            build_timestamp: build_info.build_timestamp,
            profile: build_info.profile,
            target: build_info.target,
            unit_pairs: self.unit_pairs,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: std::process::id(),
        }
    }
}

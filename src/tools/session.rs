//! Session Tools
//!
//! Tools that drive a `ConverterState` the way a window's controls would.

use crate::conversion::ConversionService;
use crate::models::{ConverterState, ConverterView};

pub fn get_state(state: &ConverterState) -> ConverterView {
    state.view()
}

/// Pick a pair from the selection list
pub fn select_unit_pair(
    service: &ConversionService,
    state: &mut ConverterState,
    id: &str,
) -> Result<ConverterView, String> {
    state.select_pair(service, id).map_err(|e| e.to_string())?;
    tracing::debug!(unit_pair = state.pair().id, "Unit pair selected");
    Ok(state.view())
}

/// Flip the reverse toggle
pub fn set_reversed(state: &mut ConverterState, reversed: bool) -> ConverterView {
    state.set_reversed(reversed);
    state.view()
}

/// Type into whichever field is accepting input
pub fn set_input(state: &mut ConverterState, text: &str) -> Result<ConverterView, String> {
    state.set_input(text).map_err(|e| e.to_string())?;
    Ok(state.view())
}

/// Press "Convert"
///
/// When `input` is given it is typed into the input field first.
pub fn run_conversion(
    service: &ConversionService,
    state: &mut ConverterState,
    input: Option<&str>,
) -> Result<ConverterView, String> {
    if let Some(text) = input {
        state.set_input(text).map_err(|e| e.to_string())?;
    }
    let output = state.run_conversion(service).map_err(|e| e.to_string())?;
    tracing::debug!(
        unit_pair = state.pair().id,
        reversed = state.is_reversed(),
        output,
        "Session conversion"
    );
    Ok(state.view())
}

//! Converter state
//!
//! Everything a converter window shows: the selected pair, the direction
//! toggle, the two value fields with their labels, and the three pictures.

use serde::Serialize;

use crate::conversion::{
    ConversionError, ConversionService, ConvertResult, UnitPair, ARROW_FROM_IMAGE,
    ARROW_TO_IMAGE,
};

/// Width the field labels are right-aligned to
const LABEL_WIDTH: usize = 12;

/// One of the two value fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    From,
    To,
}

/// Mutable converter state for one session
#[derive(Debug, Clone)]
pub struct ConverterState {
    pair: &'static UnitPair,
    reversed: bool,
    from_value: f64,
    to_value: f64,
}

/// Serializable snapshot of a `ConverterState`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConverterView {
    pub title: String,
    pub unit_pair: &'static str,
    pub reversed: bool,
    pub reverse_toggle: &'static str,
    pub from_label: String,
    pub to_label: String,
    pub from_value: f64,
    pub to_value: f64,
    /// Field the user types into; the other one shows the result
    pub input_field: Field,
    /// Left picture, arrow, right picture
    pub images: [&'static str; 3],
}

/// Format a field label the way the window shows it ("      Feet: ")
fn field_label(label: &str) -> String {
    format!("{:>width$}", format!("{}: ", label), width = LABEL_WIDTH)
}

/// Window title for this build
pub fn window_title() -> String {
    format!("Units Converter v{}", crate::build_info::VERSION)
}

impl ConverterState {
    /// Start with the given pair selected, converting forward from zero
    pub fn new(pair: &'static UnitPair) -> Self {
        Self {
            pair,
            reversed: false,
            from_value: 0.0,
            to_value: 0.0,
        }
    }

    /// Start with the service's default pair selected
    pub fn with_default(service: &ConversionService) -> Self {
        Self::new(service.default_pair())
    }

    pub fn pair(&self) -> &'static UnitPair {
        self.pair
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn from_value(&self) -> f64 {
        self.from_value
    }

    pub fn to_value(&self) -> f64 {
        self.to_value
    }

    /// The field that currently accepts input
    pub fn input_field(&self) -> Field {
        if self.reversed {
            Field::To
        } else {
            Field::From
        }
    }

    /// Switch to another pair. Both values go back to zero.
    ///
    /// An unknown identifier leaves the state untouched.
    pub fn select_pair(&mut self, service: &ConversionService, id: &str) -> ConvertResult<()> {
        self.pair = service.resolve_unit_pair(id)?;
        self.from_value = 0.0;
        self.to_value = 0.0;
        Ok(())
    }

    /// Set the direction. The field that becomes the output is cleared.
    pub fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
        if reversed {
            self.from_value = 0.0;
        } else {
            self.to_value = 0.0;
        }
    }

    /// Text shown next to the reverse toggle
    pub fn reverse_toggle_text(&self) -> &'static str {
        if self.reversed {
            "ON "
        } else {
            "OFF"
        }
    }

    /// Parse text typed into the input field and store it
    pub fn set_input(&mut self, text: &str) -> ConvertResult<f64> {
        let value: f64 = text
            .trim()
            .parse()
            .map_err(|_| ConversionError::InvalidInput(text.to_string()))?;
        if !value.is_finite() {
            return Err(ConversionError::InvalidValue(value));
        }

        match self.input_field() {
            Field::From => self.from_value = value,
            Field::To => self.to_value = value,
        }
        Ok(value)
    }

    /// Convert the input field into the output field and return the result
    pub fn run_conversion(&mut self, service: &ConversionService) -> ConvertResult<f64> {
        if self.reversed {
            self.from_value = service.convert(self.to_value, self.pair.id, true)?;
            Ok(self.from_value)
        } else {
            self.to_value = service.convert(self.from_value, self.pair.id, false)?;
            Ok(self.to_value)
        }
    }

    /// Pictures for the left slot, the arrow and the right slot
    pub fn images(&self) -> [&'static str; 3] {
        let arrow = if self.reversed {
            ARROW_FROM_IMAGE
        } else {
            ARROW_TO_IMAGE
        };
        [self.pair.from.image(), arrow, self.pair.to.image()]
    }

    pub fn view(&self) -> ConverterView {
        let (from, to) = self.pair.labels();
        ConverterView {
            title: window_title(),
            unit_pair: self.pair.id,
            reversed: self.reversed,
            reverse_toggle: self.reverse_toggle_text(),
            from_label: field_label(from),
            to_label: field_label(to),
            from_value: self.from_value,
            to_value: self.to_value,
            input_field: self.input_field(),
            images: self.images(),
        }
    }
}

//! Units and the static unit-pair registry
//!
//! Provides the units the converter knows about and the fixed set of pairs
//! it converts between.

use serde::{Deserialize, Serialize};

/// Image shown in a unit slot that has no picture
pub const EMPTY_IMAGE: &str = "empty150x150.png";
/// Arrow shown between the unit images when converting forward
pub const ARROW_TO_IMAGE: &str = "to75x75.png";
/// Arrow shown between the unit images when converting in reverse
pub const ARROW_FROM_IMAGE: &str = "from75x75.png";

/// A physical unit that appears on one side of a unit pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Inches,
    Centimeters,
    Pounds,
    Kilograms,
    Feet,
}

impl Unit {
    /// Human-readable label ("Inches")
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Inches => "Inches",
            Unit::Centimeters => "Centimeters",
            Unit::Pounds => "Pounds",
            Unit::Kilograms => "Kilograms",
            Unit::Feet => "Feet",
        }
    }

    /// Short symbol used in pair identifiers ("in")
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Inches => "in",
            Unit::Centimeters => "cm",
            Unit::Pounds => "lb",
            Unit::Kilograms => "kg",
            Unit::Feet => "ft",
        }
    }

    /// Picture asset shown for this unit
    pub fn image(&self) -> &'static str {
        match self {
            Unit::Inches => "paperclip150x150.png",
            Unit::Centimeters => "pin150x150.png",
            Unit::Pounds => "1pound150x150.png",
            Unit::Kilograms => "1kilogram150x150.png",
            Unit::Feet => EMPTY_IMAGE,
        }
    }
}

/// A registered conversion between two units
///
/// `to = from * factor`; the reversed direction divides instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitPair {
    /// Identifier shown in the selection list (e.g., "in to cm")
    pub id: &'static str,
    /// Multiplier taking a `from` quantity to a `to` quantity
    pub factor: f64,
    pub from: Unit,
    pub to: Unit,
}

impl UnitPair {
    /// Labels for the source and target quantities
    pub fn labels(&self) -> (&'static str, &'static str) {
        (self.from.label(), self.to.label())
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Centimeters per inch
pub const CM_PER_IN: f64 = 2.54;
/// Kilograms per pound, as the converter has always rounded it
pub const KG_PER_LB: f64 = 1.0 / 2.2;
/// Inches per foot
pub const IN_PER_FT: f64 = 12.0;

/// Every unit pair, in display order. The first entry is the default selection.
pub static UNIT_PAIRS: &[UnitPair] = &[
    UnitPair {
        id: "in to cm",
        factor: CM_PER_IN,
        from: Unit::Inches,
        to: Unit::Centimeters,
    },
    UnitPair {
        id: "lb to kg",
        factor: KG_PER_LB,
        from: Unit::Pounds,
        to: Unit::Kilograms,
    },
    UnitPair {
        id: "ft to in",
        factor: IN_PER_FT,
        from: Unit::Feet,
        to: Unit::Inches,
    },
];

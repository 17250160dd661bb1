//! Conversion service
//!
//! Pure numeric conversion between the two units of a registered pair.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::error::{ConversionError, ConvertResult};
use super::units::{UnitPair, UNIT_PAIRS};

/// Direction of a conversion within a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `from` quantity to `to` quantity (multiply)
    #[default]
    Forward,
    /// `to` quantity back to `from` quantity (divide)
    Reversed,
}

impl Direction {
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Reversed)
    }
}

impl From<bool> for Direction {
    fn from(reversed: bool) -> Self {
        if reversed {
            Direction::Reversed
        } else {
            Direction::Forward
        }
    }
}

/// A single conversion asked for by a presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub unit_pair: String,
    pub value: f64,
    #[serde(default)]
    pub reversed: bool,
}

impl ConversionRequest {
    pub fn new(unit_pair: impl Into<String>, value: f64, reversed: bool) -> Self {
        Self {
            unit_pair: unit_pair.into(),
            value,
            reversed,
        }
    }
}

/// Outcome of a conversion, with the labels needed to present it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub unit_pair: &'static str,
    pub direction: Direction,
    pub input: f64,
    pub output: f64,
    /// Label of the quantity that was entered
    pub input_label: &'static str,
    /// Label of the quantity that was produced
    pub output_label: &'static str,
}

/// Convert `value` by `factor`, dividing instead of multiplying when reversed
///
/// Fails with `InvalidFactor` for a zero or non-finite factor, with
/// `InvalidValue` for a non-finite value and with `Overflow` when the result
/// leaves the finite range.
pub fn convert(value: f64, factor: f64, reversed: bool) -> ConvertResult<f64> {
    if factor == 0.0 || !factor.is_finite() {
        return Err(ConversionError::InvalidFactor(factor));
    }
    if !value.is_finite() {
        return Err(ConversionError::InvalidValue(value));
    }

    let output = if reversed { value / factor } else { value * factor };
    if !output.is_finite() {
        return Err(ConversionError::Overflow(value));
    }
    Ok(output)
}

/// Check a registry once before it is used
///
/// The registry must not be empty, every factor must be non-zero and
/// finite, and every identifier unique.
pub fn validate_registry(pairs: &[UnitPair]) -> ConvertResult<()> {
    if pairs.is_empty() {
        return Err(ConversionError::EmptyRegistry);
    }

    let mut seen = HashSet::new();

    for pair in pairs {
        if pair.factor == 0.0 || !pair.factor.is_finite() {
            tracing::error!(pair = pair.id, factor = pair.factor, "Invalid conversion factor");
            return Err(ConversionError::InvalidFactor(pair.factor));
        }
        if !seen.insert(pair.id) {
            return Err(ConversionError::DuplicateUnitPair(pair.id.to_string()));
        }
    }

    Ok(())
}

/// Stateless conversion service over a validated, immutable registry
#[derive(Debug, Clone, Copy)]
pub struct ConversionService {
    pairs: &'static [UnitPair],
    default: &'static UnitPair,
}

impl ConversionService {
    /// Create a service over the built-in registry
    pub fn new() -> ConvertResult<Self> {
        Self::with_pairs(UNIT_PAIRS)
    }

    /// Create a service over a caller-supplied registry
    pub fn with_pairs(pairs: &'static [UnitPair]) -> ConvertResult<Self> {
        validate_registry(pairs)?;
        let default = pairs.first().ok_or(ConversionError::EmptyRegistry)?;
        tracing::debug!(count = pairs.len(), "Unit pair registry validated");
        Ok(Self { pairs, default })
    }

    /// All registered pairs, in display order
    pub fn unit_pairs(&self) -> &'static [UnitPair] {
        self.pairs
    }

    /// The pair selected when nothing else has been chosen
    pub fn default_pair(&self) -> &'static UnitPair {
        self.default
    }

    /// Look up a pair by identifier (surrounding whitespace is ignored)
    pub fn resolve_unit_pair(&self, id: &str) -> ConvertResult<&'static UnitPair> {
        let wanted = id.trim();
        self.pairs
            .iter()
            .find(|p| p.id == wanted)
            .ok_or_else(|| ConversionError::UnknownUnitPair(wanted.to_string()))
    }

    /// Source and target labels for a pair
    pub fn labels_for(&self, id: &str) -> ConvertResult<(&'static str, &'static str)> {
        Ok(self.resolve_unit_pair(id)?.labels())
    }

    /// Convert `value` using the factor registered for `id`
    pub fn convert(&self, value: f64, id: &str, reversed: bool) -> ConvertResult<f64> {
        let pair = self.resolve_unit_pair(id)?;
        convert(value, pair.factor, reversed)
    }

    /// Run a request and describe the outcome
    pub fn execute(&self, request: &ConversionRequest) -> ConvertResult<ConversionResult> {
        let pair = self.resolve_unit_pair(&request.unit_pair)?;
        let output = convert(request.value, pair.factor, request.reversed)?;
        let (from_label, to_label) = pair.labels();

        tracing::debug!(
            pair = pair.id,
            reversed = request.reversed,
            input = request.value,
            output,
            "Converted"
        );

        let (input_label, output_label) = if request.reversed {
            (to_label, from_label)
        } else {
            (from_label, to_label)
        };

        Ok(ConversionResult {
            unit_pair: pair.id,
            direction: Direction::from(request.reversed),
            input: request.value,
            output,
            input_label,
            output_label,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::units::Unit;

    const EPS: f64 = 1e-9;

    fn service() -> ConversionService {
        ConversionService::new().unwrap()
    }

    #[test]
    fn test_inches_to_centimeters() {
        assert_eq!(convert(1.0, 2.54, false).unwrap(), 2.54);
    }

    #[test]
    fn test_centimeters_to_inches() {
        assert_eq!(convert(2.54, 2.54, true).unwrap(), 1.0);
    }

    #[test]
    fn test_pounds_to_kilograms() {
        let kg = convert(2.2, 1.0 / 2.2, false).unwrap();
        assert!((kg - 1.0).abs() < EPS);
    }

    #[test]
    fn test_inches_to_feet() {
        assert_eq!(convert(12.0, 12.0, true).unwrap(), 1.0);
    }

    #[test]
    fn test_zero_factor_rejected() {
        for x in [0.0, 1.0, -3.5, 1e12] {
            assert_eq!(
                convert(x, 0.0, false),
                Err(ConversionError::InvalidFactor(0.0))
            );
        }
        assert!(matches!(
            convert(1.0, 0.0, true),
            Err(ConversionError::InvalidFactor(_))
        ));
    }

    #[test]
    fn test_non_finite_factor_rejected() {
        assert!(matches!(
            convert(1.0, f64::NAN, false),
            Err(ConversionError::InvalidFactor(_))
        ));
        assert!(matches!(
            convert(1.0, f64::INFINITY, true),
            Err(ConversionError::InvalidFactor(_))
        ));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        assert!(matches!(
            convert(f64::NAN, 2.54, false),
            Err(ConversionError::InvalidValue(_))
        ));
        assert!(matches!(
            convert(f64::NEG_INFINITY, 2.54, true),
            Err(ConversionError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_overflowing_result_rejected() {
        assert_eq!(
            convert(1e308, 2.54, false),
            Err(ConversionError::Overflow(1e308))
        );
        assert_eq!(
            convert(f64::MAX, 1.0 / 2.2, true),
            Err(ConversionError::Overflow(f64::MAX))
        );

        let svc = service();
        let err = svc
            .execute(&ConversionRequest::new("in to cm", 1e308, false))
            .unwrap_err();
        assert_eq!(err, ConversionError::Overflow(1e308));
    }

    #[test]
    fn test_round_trip_every_pair() {
        let svc = service();
        for pair in svc.unit_pairs() {
            for x in [0.0, 1.0, -1.0, 0.3, 72.0, 2.2, 1234.5678, -98.6] {
                let forward = svc.convert(x, pair.id, false).unwrap();
                let back = svc.convert(forward, pair.id, true).unwrap();
                assert!(
                    (back - x).abs() <= EPS * x.abs().max(1.0),
                    "{}: {} -> {} -> {}",
                    pair.id,
                    x,
                    forward,
                    back
                );
            }
        }
    }

    #[test]
    fn test_resolve_unit_pair() {
        let pair = service().resolve_unit_pair("in to cm").unwrap();
        assert_eq!(pair.factor, 2.54);
        assert_eq!(pair.from, Unit::Inches);
        assert_eq!(pair.to, Unit::Centimeters);
    }

    #[test]
    fn test_resolve_trims_whitespace() {
        assert!(service().resolve_unit_pair("  lb to kg ").is_ok());
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(
            service().resolve_unit_pair("unknown"),
            Err(ConversionError::UnknownUnitPair("unknown".to_string()))
        );
        // Matching is exact apart from whitespace
        assert!(service().resolve_unit_pair("IN TO CM").is_err());
    }

    #[test]
    fn test_labels_for() {
        let svc = service();
        assert_eq!(svc.labels_for("in to cm").unwrap(), ("Inches", "Centimeters"));
        assert_eq!(svc.labels_for("lb to kg").unwrap(), ("Pounds", "Kilograms"));
        assert!(matches!(
            svc.labels_for("mi to km"),
            Err(ConversionError::UnknownUnitPair(_))
        ));
    }

    #[test]
    fn test_service_convert_by_id() {
        let svc = service();
        assert_eq!(svc.convert(1.0, "in to cm", false).unwrap(), 2.54);
        assert_eq!(svc.convert(24.0, "ft to in", true).unwrap(), 2.0);
        assert!(matches!(
            svc.convert(1.0, "yd to m", false),
            Err(ConversionError::UnknownUnitPair(_))
        ));
    }

    #[test]
    fn test_execute_reports_labels_by_direction() {
        let svc = service();

        let forward = svc.execute(&ConversionRequest::new("in to cm", 2.0, false)).unwrap();
        assert_eq!(forward.output, 5.08);
        assert_eq!(forward.direction, Direction::Forward);
        assert_eq!(forward.input_label, "Inches");
        assert_eq!(forward.output_label, "Centimeters");

        let reversed = svc.execute(&ConversionRequest::new("ft to in", 36.0, true)).unwrap();
        assert_eq!(reversed.output, 3.0);
        assert_eq!(reversed.direction, Direction::Reversed);
        assert_eq!(reversed.input_label, "Inches");
        assert_eq!(reversed.output_label, "Feet");
    }

    #[test]
    fn test_request_reversed_defaults_to_false() {
        let req: ConversionRequest =
            serde_json::from_str(r#"{"unit_pair": "lb to kg", "value": 11.0}"#).unwrap();
        assert!(!req.reversed);
    }

    static ZERO_FACTOR: &[UnitPair] = &[UnitPair {
        id: "in to cm",
        factor: 0.0,
        from: Unit::Inches,
        to: Unit::Centimeters,
    }];

    static DUPLICATED: &[UnitPair] = &[
        UnitPair {
            id: "in to cm",
            factor: 2.54,
            from: Unit::Inches,
            to: Unit::Centimeters,
        },
        UnitPair {
            id: "in to cm",
            factor: 2.5,
            from: Unit::Inches,
            to: Unit::Centimeters,
        },
    ];

    #[test]
    fn test_registry_with_zero_factor_rejected() {
        assert_eq!(
            ConversionService::with_pairs(ZERO_FACTOR).unwrap_err(),
            ConversionError::InvalidFactor(0.0)
        );
    }

    #[test]
    fn test_empty_registry_rejected() {
        assert_eq!(validate_registry(&[]), Err(ConversionError::EmptyRegistry));
        assert_eq!(
            ConversionService::with_pairs(&[]).unwrap_err(),
            ConversionError::EmptyRegistry
        );
    }

    #[test]
    fn test_registry_with_duplicate_rejected() {
        assert_eq!(
            ConversionService::with_pairs(DUPLICATED).unwrap_err(),
            ConversionError::DuplicateUnitPair("in to cm".to_string())
        );
    }

    #[test]
    fn test_builtin_registry_is_valid() {
        assert!(validate_registry(UNIT_PAIRS).is_ok());
        assert_eq!(service().default_pair().id, "in to cm");
    }
}

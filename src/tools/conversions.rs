//! Conversion Tools
//!
//! Stateless tools: registry listing, lookup and one-off conversions.

use serde::Serialize;

use crate::conversion::{ConversionRequest, ConversionResult, ConversionService, Unit};

/// One entry of the unit pair listing
#[derive(Debug, Serialize)]
pub struct UnitPairSummary {
    pub id: &'static str,
    pub factor: f64,
    pub from: Unit,
    pub to: Unit,
    pub from_label: &'static str,
    pub to_label: &'static str,
}

/// Response for list_unit_pairs
#[derive(Debug, Serialize)]
pub struct ListUnitPairsResponse {
    pub unit_pairs: Vec<UnitPairSummary>,
    pub default: &'static str,
}

/// Response for labels_for
#[derive(Debug, Serialize)]
pub struct LabelsResponse {
    pub unit_pair: String,
    pub from_label: &'static str,
    pub to_label: &'static str,
}

pub fn list_unit_pairs(service: &ConversionService) -> ListUnitPairsResponse {
    let unit_pairs = service
        .unit_pairs()
        .iter()
        .map(|p| UnitPairSummary {
            id: p.id,
            factor: p.factor,
            from: p.from,
            to: p.to,
            from_label: p.from.label(),
            to_label: p.to.label(),
        })
        .collect();

    ListUnitPairsResponse {
        unit_pairs,
        default: service.default_pair().id,
    }
}

/// Look up one pair
pub fn resolve_unit_pair(service: &ConversionService, id: &str) -> Result<UnitPairSummary, String> {
    let p = service.resolve_unit_pair(id).map_err(|e| e.to_string())?;
    Ok(UnitPairSummary {
        id: p.id,
        factor: p.factor,
        from: p.from,
        to: p.to,
        from_label: p.from.label(),
        to_label: p.to.label(),
    })
}

pub fn labels_for(service: &ConversionService, id: &str) -> Result<LabelsResponse, String> {
    let (from_label, to_label) = service.labels_for(id).map_err(|e| e.to_string())?;
    Ok(LabelsResponse {
        unit_pair: id.trim().to_string(),
        from_label,
        to_label,
    })
}

/// Convert a value without touching any session state
pub fn convert(
    service: &ConversionService,
    unit_pair: &str,
    value: f64,
    reversed: bool,
) -> Result<ConversionResult, String> {
    let request = ConversionRequest::new(unit_pair, value, reversed);
    service.execute(&request).map_err(|e| {
        tracing::warn!(unit_pair, value, reversed, "Conversion rejected: {}", e);
        e.to_string()
    })
}

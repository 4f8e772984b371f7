//! Punch/blade clearance recommendation from cutting-material hardness.

use serde::{Deserialize, Serialize};

use crate::materials::CUTTING_MATERIALS;

/// Recommended die clearance band (per side).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearanceRecommendation {
    pub optimal_mm: f64,
    pub minimum_mm: f64,
    pub maximum_mm: f64,
    /// Optimal clearance as % of thickness
    pub percentage: f64,
}

/// Optimal clearance for a cutting material and sheet thickness.
///
/// Harder materials need a wider gap: optimal = t · (0.04 + HB/5000), with a
/// ±20% working band. Returns `None` when the material key is unknown or
/// when the thickness is not a positive finite number.
pub fn optimize_clearance(material: &str, thickness_mm: f64) -> Option<ClearanceRecommendation> {
    let material = CUTTING_MATERIALS.get(material)?;
    if !(thickness_mm > 0.0 && thickness_mm.is_finite()) {
        return None;
    }

    let optimal_mm = thickness_mm * (0.04 + material.hardness_hb / 5000.0);

    Some(ClearanceRecommendation {
        optimal_mm,
        minimum_mm: optimal_mm * 0.8,
        maximum_mm: optimal_mm * 1.2,
        percentage: optimal_mm / thickness_mm * 100.0,
    })
}

//! # Shared Calculation Helpers
//!
//! Small pieces used by every process calculator: registry lookup,
//! the recommendation reducer, result rounding and temperature derating.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Reference temperature (°C) at which registry strengths are tabulated
pub const REFERENCE_TEMPERATURE_C: f64 = 20.0;

/// Lowest fraction of room-temperature strength a derated value may fall to
const MIN_STRENGTH_FRACTION: f64 = 0.1;

/// Fallback recommendation when no threshold check fires
pub const OPTIMAL_RANGE_MESSAGE: &str = "Process parameters are within optimal range";

/// A material table keyed by material identifier
pub type Registry<M> = HashMap<&'static str, M>;

/// Look up `key` in `registry`, failing with `MaterialNotFound` when absent.
///
/// ```rust
/// use mfg_core::materials::FORMING_MATERIALS;
/// use mfg_core::shared::validate_material;
///
/// let steel = validate_material(&FORMING_MATERIALS, "steel-low-carbon").unwrap();
/// assert!(steel.yield_strength_mpa > 0.0);
/// assert!(validate_material(&FORMING_MATERIALS, "unobtainium").is_err());
/// ```
pub fn validate_material<'a, M>(registry: &'a Registry<M>, key: &str) -> CalcResult<&'a M> {
    registry
        .get(key)
        .ok_or_else(|| CalcError::material_not_found(key))
}

/// One threshold rule: the message is emitted when `condition` holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Check {
    pub condition: bool,
    pub message: String,
}

impl Check {
    pub fn new(condition: bool, message: impl Into<String>) -> Self {
        Self {
            condition,
            message: message.into(),
        }
    }
}

/// Collect the messages of all firing checks in input order, or `[fallback]`
/// when none fire.
pub fn generate_recommendations(checks: Vec<Check>, fallback: &str) -> Vec<String> {
    let fired: Vec<String> = checks
        .into_iter()
        .filter(|check| check.condition)
        .map(|check| check.message)
        .collect();

    if fired.is_empty() {
        vec![fallback.to_string()]
    } else {
        fired
    }
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Linear strength derate above the reference temperature.
///
/// Returns the multiplier `1 - rate * (T - 20)`, never above 1.0 and never
/// below 0.1.
pub fn temperature_factor(temperature_c: f64, rate_per_c: f64) -> f64 {
    let excess = (temperature_c - REFERENCE_TEMPERATURE_C).max(0.0);
    (1.0 - rate_per_c * excess).max(MIN_STRENGTH_FRACTION)
}

/// Bounded edge-quality classification for cutting operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CutQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl CutQuality {
    pub const ALL: [CutQuality; 4] = [
        CutQuality::Excellent,
        CutQuality::Good,
        CutQuality::Fair,
        CutQuality::Poor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CutQuality::Excellent => "Excellent",
            CutQuality::Good => "Good",
            CutQuality::Fair => "Fair",
            CutQuality::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for CutQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reject values that are not strictly positive
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be a positive number",
        ))
    }
}

/// Reject negative or non-finite values
pub(crate) fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be a non-negative number",
        ))
    }
}

/// Reject NaN and infinities
pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"))
    }
}

/// Reject values outside the closed range `[min, max]`
pub(crate) fn require_range(field: &str, value: f64, min: f64, max: f64) -> CalcResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ))
    }
}

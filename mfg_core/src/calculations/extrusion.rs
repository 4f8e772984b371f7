//! # Extrusion Calculation
//!
//! Ram pressure for round-bar extrusion through a conical die:
//! p = σ_f·ln(R)·(1 + 2α/3)·(1 + μ·ln R)·k_type, where R is the area ratio
//! and k_type discounts container friction for indirect (backward)
//! extrusion. Outputs are rounded the same way as wire drawing.
//!
//! ## Example
//!
//! ```rust
//! use mfg_core::calculations::extrusion::{calculate, ExtrusionInput, ExtrusionType};
//!
//! let input = ExtrusionInput {
//!     material: "aluminum".to_string(),
//!     billet_diameter_mm: 100.0,
//!     extruded_diameter_mm: 20.0,
//!     billet_length_mm: 300.0,
//!     extrusion_speed_mm_s: 10.0,
//!     die_angle_deg: 45.0,
//!     temperature_c: 450.0,
//!     extrusion_type: ExtrusionType::Direct,
//!     lubrication: true,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.extrusion_ratio, 25.0);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::materials::DRAWING_MATERIALS;
use crate::shared::{
    generate_recommendations, require_finite, require_positive, round_to, temperature_factor,
    validate_material, Check, OPTIMAL_RANGE_MESSAGE,
};

/// Flow stress loss per °C above room temperature
const FLOW_STRESS_DERATE_PER_C: f64 = 0.002;
const LUBRICATED_FRICTION: f64 = 0.05;
const DRY_FRICTION: f64 = 0.15;
const MAX_EFFICIENCY_PCT: f64 = 90.0;
/// Minimum billet temperature (°C) for hot extrusion of steel
const STEEL_HOT_EXTRUSION_C: f64 = 900.0;

/// Direction of metal flow relative to the ram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtrusionType {
    /// Billet slides along the container (forward extrusion)
    Direct,
    /// Die moves into a stationary billet (backward extrusion)
    Indirect,
}

impl ExtrusionType {
    fn pressure_multiplier(&self) -> f64 {
        match self {
            ExtrusionType::Direct => 1.0,
            ExtrusionType::Indirect => 0.8,
        }
    }
}

/// Input parameters for an extrusion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtrusionInput {
    /// Drawing registry key
    pub material: String,
    pub billet_diameter_mm: f64,
    pub extruded_diameter_mm: f64,
    pub billet_length_mm: f64,
    /// Ram speed (mm/s)
    pub extrusion_speed_mm_s: f64,
    /// Included die angle (degrees); above 90 a dead-metal zone forms
    pub die_angle_deg: f64,
    /// Billet temperature (°C)
    pub temperature_c: f64,
    pub extrusion_type: ExtrusionType,
    pub lubrication: bool,
}

impl ExtrusionInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("billet_diameter_mm", self.billet_diameter_mm)?;
        require_positive("extruded_diameter_mm", self.extruded_diameter_mm)?;
        if self.extruded_diameter_mm >= self.billet_diameter_mm {
            return Err(CalcError::invalid_input(
                "extruded_diameter_mm",
                self.extruded_diameter_mm.to_string(),
                "Extruded diameter must be less than billet diameter",
            ));
        }
        require_positive("billet_length_mm", self.billet_length_mm)?;
        require_positive("extrusion_speed_mm_s", self.extrusion_speed_mm_s)?;
        if !(self.die_angle_deg > 0.0 && self.die_angle_deg < 180.0) {
            return Err(CalcError::invalid_input(
                "die_angle_deg",
                self.die_angle_deg.to_string(),
                "Die angle must be between 0 and 180 degrees",
            ));
        }
        require_finite("temperature_c", self.temperature_c)?;
        Ok(())
    }
}

/// Results from an extrusion calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtrusionResult {
    /// Billet area / extruded area
    pub extrusion_ratio: f64,
    /// Temperature-derated flow stress (MPa)
    pub flow_stress_mpa: f64,
    pub extrusion_pressure_mpa: f64,
    pub extrusion_force_n: f64,
    pub extrusion_power_kw: f64,
    /// Time to push the full billet (s)
    pub extrusion_time_s: f64,
    /// Exit velocity of the extruded product (mm/s)
    pub material_flow_mm_s: f64,
    pub work_done_kj: f64,
    /// Ideal work over actual work (%), capped at 90
    pub efficiency_pct: f64,
    pub recommendations: Vec<String>,
}

/// Calculate an extrusion.
pub fn calculate(input: &ExtrusionInput) -> CalcResult<ExtrusionResult> {
    let material = validate_material(&DRAWING_MATERIALS, &input.material)?;
    input.validate()?;

    let billet_area_mm2 = PI * (input.billet_diameter_mm / 2.0).powi(2);
    let extruded_area_mm2 = PI * (input.extruded_diameter_mm / 2.0).powi(2);
    let extrusion_ratio = billet_area_mm2 / extruded_area_mm2;
    let log_ratio = extrusion_ratio.ln();

    let flow_stress_mpa = material.flow_stress(log_ratio)
        * temperature_factor(input.temperature_c, FLOW_STRESS_DERATE_PER_C);

    let angle_factor = 1.0 + 2.0 * input.die_angle_deg.to_radians() / 3.0;
    let friction_factor = if input.lubrication {
        LUBRICATED_FRICTION
    } else {
        DRY_FRICTION
    };
    let friction_effect = 1.0 + friction_factor * log_ratio;

    let extrusion_pressure_mpa = flow_stress_mpa
        * log_ratio
        * angle_factor
        * friction_effect
        * input.extrusion_type.pressure_multiplier();
    let extrusion_force_n = extrusion_pressure_mpa * billet_area_mm2;

    // N · mm/s -> kW
    let extrusion_power_kw = extrusion_force_n * input.extrusion_speed_mm_s / 1.0e6;
    let extrusion_time_s = input.billet_length_mm / input.extrusion_speed_mm_s;
    let material_flow_mm_s = input.extrusion_speed_mm_s * extrusion_ratio;

    let work_done_kj = extrusion_force_n * input.billet_length_mm / 1.0e6;
    let ideal_work_kj = flow_stress_mpa * log_ratio * billet_area_mm2 * input.billet_length_mm / 1.0e6;
    let efficiency_pct = (ideal_work_kj / work_done_kj * 100.0).min(MAX_EFFICIENCY_PCT);

    let is_steel = input.material.contains("steel");
    let recommendations = generate_recommendations(
        vec![
            Check::new(
                extrusion_ratio > 50.0,
                format!(
                    "Extrusion ratio of {:.1} is very high; consider extruding in multiple steps",
                    extrusion_ratio
                ),
            ),
            Check::new(
                is_steel && input.temperature_c < STEEL_HOT_EXTRUSION_C,
                "Steel extrusion typically requires billet temperatures above 900°C",
            ),
            Check::new(
                input.die_angle_deg > 90.0,
                "Die angle above 90° promotes a dead-metal zone; use a conical die",
            ),
            Check::new(
                extrusion_pressure_mpa > 1000.0,
                "Extrusion pressure exceeds 1000 MPa; raise the temperature or reduce the ratio",
            ),
            Check::new(
                !input.lubrication && input.extrusion_type == ExtrusionType::Direct,
                "Direct extrusion without lubrication causes high container friction; lubricate or switch to indirect",
            ),
            Check::new(
                efficiency_pct < 60.0,
                "Low process efficiency; review die angle and lubrication",
            ),
            Check::new(
                input.extrusion_speed_mm_s > 50.0 && input.temperature_c < 300.0,
                "High ram speed at low temperature may cause surface cracking",
            ),
        ],
        OPTIMAL_RANGE_MESSAGE,
    );

    debug!(
        material = %input.material,
        extrusion_type = ?input.extrusion_type,
        extrusion_pressure_mpa,
        "extrusion calculation complete"
    );

    Ok(ExtrusionResult {
        extrusion_ratio: round_to(extrusion_ratio, 2),
        flow_stress_mpa: round_to(flow_stress_mpa, 2),
        extrusion_pressure_mpa: round_to(extrusion_pressure_mpa, 2),
        extrusion_force_n: round_to(extrusion_force_n, 2),
        extrusion_power_kw: round_to(extrusion_power_kw, 3),
        extrusion_time_s: round_to(extrusion_time_s, 2),
        material_flow_mm_s: round_to(material_flow_mm_s, 2),
        work_done_kj: round_to(work_done_kj, 3),
        efficiency_pct: round_to(efficiency_pct, 2),
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_billet() -> ExtrusionInput {
        ExtrusionInput {
            material: "aluminum".to_string(),
            billet_diameter_mm: 100.0,
            extruded_diameter_mm: 20.0,
            billet_length_mm: 300.0,
            extrusion_speed_mm_s: 10.0,
            die_angle_deg: 45.0,
            temperature_c: 450.0,
            extrusion_type: ExtrusionType::Direct,
            lubrication: true,
        }
    }

    #[test]
    fn test_ratio_time_and_flow() {
        let result = calculate(&test_billet()).unwrap();
        assert_eq!(result.extrusion_ratio, 25.0);
        assert_eq!(result.extrusion_time_s, 30.0);
        assert_eq!(result.material_flow_mm_s, 250.0);
    }

    #[test]
    fn test_pressure_and_force() {
        let result = calculate(&test_billet()).unwrap();
        // σ = 205 · ln(25)^0.2 · 0.14 ≈ 36.3 MPa
        assert!((result.flow_stress_mpa - 36.27).abs() < 0.2);
        // p ≈ 36.3 · 3.219 · 1.524 · 1.161 ≈ 206.6 MPa
        assert!((result.extrusion_pressure_mpa - 206.6).abs() < 2.0);
        assert!(result.extrusion_force_n > 1.5e6 && result.extrusion_force_n < 1.7e6);
        assert!(result.work_done_kj > 0.0);
    }

    #[test]
    fn test_indirect_needs_less_pressure() {
        let direct = calculate(&test_billet()).unwrap();
        let indirect = calculate(&ExtrusionInput {
            extrusion_type: ExtrusionType::Indirect,
            ..test_billet()
        })
        .unwrap();
        let ratio = indirect.extrusion_pressure_mpa / direct.extrusion_pressure_mpa;
        assert!((ratio - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_efficiency_capped() {
        let indirect = calculate(&ExtrusionInput {
            extrusion_type: ExtrusionType::Indirect,
            die_angle_deg: 5.0,
            ..test_billet()
        })
        .unwrap();
        assert!(indirect.efficiency_pct <= 90.0);
    }

    #[test]
    fn test_recommendations() {
        let result = calculate(&test_billet()).unwrap();
        // 1 / (1.524 · 1.161) ≈ 56.5% efficiency
        assert!(result.recommendations.iter().any(|r| r.contains("efficiency")));

        let cold_steel = calculate(&ExtrusionInput {
            material: "steel-low-carbon".to_string(),
            temperature_c: 400.0,
            lubrication: false,
            ..test_billet()
        })
        .unwrap();
        assert!(cold_steel.recommendations.iter().any(|r| r.contains("900°C")));
        assert!(cold_steel.recommendations.iter().any(|r| r.contains("without lubrication")));
    }

    #[test]
    fn test_invalid_inputs() {
        let bigger = ExtrusionInput { extruded_diameter_mm: 120.0, ..test_billet() };
        assert!(matches!(calculate(&bigger), Err(CalcError::InvalidInput { .. })));

        let stopped = ExtrusionInput { extrusion_speed_mm_s: 0.0, ..test_billet() };
        assert!(calculate(&stopped).is_err());
    }

    #[test]
    fn test_nan_temperature_rejected() {
        let input = ExtrusionInput { temperature_c: f64::NAN, ..test_billet() };
        assert!(matches!(calculate(&input), Err(CalcError::InvalidInput { .. })));
    }

    #[test]
    fn test_unknown_material() {
        let input = ExtrusionInput { material: "mithril".to_string(), ..test_billet() };
        assert!(matches!(calculate(&input), Err(CalcError::MaterialNotFound { .. })));
    }
}

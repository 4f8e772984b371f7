//! # Turning Calculation
//!
//! Single-point turning of a cylindrical workpiece. Cutting force comes
//! from the specific cutting force k_c = 3.5·UTS acting on the uncut chip
//! section f·a_p; tool life from Taylor's equation.
//!
//! ## Example
//!
//! ```rust
//! use mfg_core::calculations::turning::{calculate, TurningInput};
//! use mfg_core::materials::ToolMaterial;
//!
//! let input = TurningInput {
//!     material: "aluminum-6061".to_string(),
//!     diameter_mm: 50.0,
//!     length_mm: 120.0,
//!     cutting_speed_m_min: 500.0,
//!     feed_mm_rev: 0.15,
//!     depth_of_cut_mm: 1.5,
//!     tool_material: ToolMaterial::Carbide,
//!     coolant: true,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.cutting_force_n > 0.0);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

use crate::calculations::tool_life::{
    operation_cost, speed_checks, TaylorConstants, SPECIFIC_FORCE_FACTOR,
};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{ToolMaterial, MACHINING_MATERIALS};
use crate::shared::{
    generate_recommendations, require_positive, validate_material, Check, OPTIMAL_RANGE_MESSAGE,
};

/// Tool nose radius (mm)
const NOSE_RADIUS_MM: f64 = 0.8;
const FEED_RANGE_MM_REV: (f64, f64) = (0.05, 0.5);
const MIN_TOOL_LIFE_MIN: f64 = 15.0;
const MAX_SPINDLE_POWER_KW: f64 = 15.0;

/// Input parameters for a turning pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurningInput {
    /// Machining registry key
    pub material: String,
    /// Workpiece diameter (mm)
    pub diameter_mm: f64,
    /// Length of cut (mm)
    pub length_mm: f64,
    pub cutting_speed_m_min: f64,
    pub feed_mm_rev: f64,
    pub depth_of_cut_mm: f64,
    pub tool_material: ToolMaterial,
    pub coolant: bool,
}

impl TurningInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("diameter_mm", self.diameter_mm)?;
        require_positive("length_mm", self.length_mm)?;
        require_positive("cutting_speed_m_min", self.cutting_speed_m_min)?;
        require_positive("feed_mm_rev", self.feed_mm_rev)?;
        require_positive("depth_of_cut_mm", self.depth_of_cut_mm)?;
        if self.depth_of_cut_mm >= self.diameter_mm / 2.0 {
            return Err(CalcError::invalid_input(
                "depth_of_cut_mm",
                self.depth_of_cut_mm.to_string(),
                "Depth of cut must be less than the workpiece radius",
            ));
        }
        Ok(())
    }
}

/// Results from a turning calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurningResult {
    pub spindle_speed_rpm: f64,
    /// Tool traverse rate f·N (mm/min)
    pub feed_rate_mm_min: f64,
    pub material_removal_rate_mm3_min: f64,
    /// k_c (MPa)
    pub specific_cutting_force_mpa: f64,
    pub cutting_force_n: f64,
    pub cutting_power_kw: f64,
    pub machining_time_min: f64,
    pub tool_life_min: f64,
    pub cost_per_part: f64,
    /// Theoretical Ra = f²/(32·r) (µm)
    pub surface_roughness_um: f64,
    pub recommendations: Vec<String>,
}

/// Calculate a turning pass.
pub fn calculate(input: &TurningInput) -> CalcResult<TurningResult> {
    let material = validate_material(&MACHINING_MATERIALS, &input.material)?;
    input.validate()?;

    let v = input.cutting_speed_m_min;
    let f = input.feed_mm_rev;

    let spindle_speed_rpm = 1000.0 * v / (PI * input.diameter_mm);
    let feed_rate_mm_min = f * spindle_speed_rpm;
    let material_removal_rate_mm3_min = v * 1000.0 * f * input.depth_of_cut_mm;

    let specific_cutting_force_mpa = SPECIFIC_FORCE_FACTOR * material.tensile_strength_mpa;
    let cutting_force_n = specific_cutting_force_mpa * f * input.depth_of_cut_mm;
    let cutting_power_kw = cutting_force_n * v / 60_000.0;

    let machining_time_min = input.length_mm / feed_rate_mm_min;
    let tool_life_min = TaylorConstants::new(input.tool_material, material.machinability_rating)
        .tool_life_min(v);
    let cost_per_part = operation_cost(
        machining_time_min,
        input.tool_material,
        machining_time_min / tool_life_min,
    );

    let surface_roughness_um = f.powi(2) / (32.0 * NOSE_RADIUS_MM) * 1000.0;

    let (min_feed, max_feed) = FEED_RANGE_MM_REV;
    let mut checks = speed_checks(material, input.tool_material, v);
    checks.extend([
        Check::new(
            f < min_feed,
            format!("Feed below {} mm/rev rubs rather than cuts; increase feed", min_feed),
        ),
        Check::new(
            f > max_feed,
            format!("Feed above {} mm/rev degrades surface finish; reduce feed", max_feed),
        ),
        Check::new(
            !input.coolant,
            "Use coolant to control cutting temperature and tool wear",
        ),
        Check::new(
            tool_life_min < MIN_TOOL_LIFE_MIN,
            format!(
                "Predicted tool life of {:.1} min is short; reduce cutting speed",
                tool_life_min
            ),
        ),
        Check::new(
            cutting_power_kw > MAX_SPINDLE_POWER_KW,
            "Cutting power is high; check spindle capacity or reduce depth of cut",
        ),
    ]);
    let recommendations = generate_recommendations(checks, OPTIMAL_RANGE_MESSAGE);

    debug!(
        material = %input.material,
        tool = %input.tool_material,
        cutting_force_n,
        tool_life_min,
        "turning calculation complete"
    );

    Ok(TurningResult {
        spindle_speed_rpm,
        feed_rate_mm_min,
        material_removal_rate_mm3_min,
        specific_cutting_force_mpa,
        cutting_force_n,
        cutting_power_kw,
        machining_time_min,
        tool_life_min,
        cost_per_part,
        surface_roughness_um,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_pass() -> TurningInput {
        TurningInput {
            material: "steel-mild".to_string(),
            diameter_mm: 10.0,
            length_mm: 50.0,
            cutting_speed_m_min: 100.0,
            feed_mm_rev: 0.2,
            depth_of_cut_mm: 2.0,
            tool_material: ToolMaterial::Hss,
            coolant: true,
        }
    }

    #[test]
    fn test_kinematics() {
        let result = calculate(&test_pass()).unwrap();
        // 100000 / (π · 10) = 3183.1 rpm
        assert!((result.spindle_speed_rpm - 3183.1).abs() < 0.1);
        assert!((result.material_removal_rate_mm3_min - 40_000.0).abs() < 1e-6);
        // 50 mm at 636.6 mm/min
        assert!((result.machining_time_min - 0.07854).abs() < 1e-5);
    }

    #[test]
    fn test_force_and_power() {
        let result = calculate(&test_pass()).unwrap();
        // k_c = 3.5 · 440 = 1540 MPa; F = 1540 · 0.2 · 2 = 616 N
        assert!((result.specific_cutting_force_mpa - 1540.0).abs() < 1e-9);
        assert!((result.cutting_force_n - 616.0).abs() < 1e-9);
        assert!((result.cutting_power_kw - 1.02667).abs() < 1e-4);
    }

    #[test]
    fn test_tool_life_and_cost() {
        let result = calculate(&test_pass()).unwrap();
        // C = 120 · 0.7 = 84; T = 0.84^8
        assert!((result.tool_life_min - 0.84_f64.powi(8)).abs() < 1e-9);
        let expected_cost = result.machining_time_min * 2.25
            + 15.0 * result.machining_time_min / result.tool_life_min;
        assert!((result.cost_per_part - expected_cost).abs() < 1e-9);
    }

    #[test]
    fn test_surface_roughness() {
        let result = calculate(&test_pass()).unwrap();
        // 0.04 / 25.6 mm = 1.5625 µm
        assert!((result.surface_roughness_um - 1.5625).abs() < 1e-9);
    }

    #[test]
    fn test_recommendations() {
        let result = calculate(&test_pass()).unwrap();
        assert!(result.recommendations[0].contains("well above the recommended 30 m/min"));
        assert!(result.recommendations.iter().any(|r| r.contains("tool life")));
        assert!(!result.recommendations.iter().any(|r| r.contains("coolant")));

        let dry = calculate(&TurningInput { coolant: false, ..test_pass() }).unwrap();
        assert!(dry.recommendations.iter().any(|r| r.contains("Use coolant")));
    }

    #[test]
    fn test_optimal_carbide_pass() {
        let result = calculate(&TurningInput {
            material: "aluminum-6061".to_string(),
            diameter_mm: 50.0,
            cutting_speed_m_min: 300.0,
            tool_material: ToolMaterial::Carbide,
            ..test_pass()
        })
        .unwrap();
        // C = 360; T = 1.2^4 = 2.07 min, still short
        assert_eq!(result.recommendations.len(), 1);
        assert!(result.recommendations[0].contains("tool life"));
    }

    #[test]
    fn test_zero_diameter_rejected() {
        let input = TurningInput { diameter_mm: 0.0, ..test_pass() };
        assert!(matches!(calculate(&input), Err(CalcError::InvalidInput { .. })));
    }

    #[test]
    fn test_depth_exceeds_radius() {
        let input = TurningInput { depth_of_cut_mm: 5.0, ..test_pass() };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_unknown_material() {
        let input = TurningInput { material: "mithril".to_string(), ..test_pass() };
        assert!(matches!(calculate(&input), Err(CalcError::MaterialNotFound { .. })));
    }
}

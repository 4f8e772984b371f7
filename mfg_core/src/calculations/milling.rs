//! # Milling Calculation
//!
//! Peripheral or face milling with a multi-tooth cutter. Power follows from
//! the specific cutting force and the removal rate a_e·a_p·v_f; tangential
//! force and spindle torque are backed out of the power.
//!
//! ## Example
//!
//! ```rust
//! use mfg_core::calculations::milling::{calculate, MillingInput};
//! use mfg_core::materials::ToolMaterial;
//!
//! let input = MillingInput {
//!     material: "aluminum-6061".to_string(),
//!     tool_diameter_mm: 12.0,
//!     number_of_teeth: 3,
//!     cutting_speed_m_min: 400.0,
//!     feed_per_tooth_mm: 0.08,
//!     axial_depth_mm: 6.0,
//!     radial_width_mm: 3.0,
//!     cut_length_mm: 200.0,
//!     tool_material: ToolMaterial::Carbide,
//!     coolant: true,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.table_feed_mm_min > 0.0);
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

const FEED_PER_TOOTH_RANGE_MM: (f64, f64) = (0.02, 0.3);
const MIN_TOOL_LIFE_MIN: f64 = 15.0;
const MAX_SPINDLE_POWER_KW: f64 = 15.0;

/// Input parameters for a milling pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MillingInput {
    /// Machining registry key
    pub material: String,
    pub tool_diameter_mm: f64,
    pub number_of_teeth: u32,
    pub cutting_speed_m_min: f64,
    /// Chip load f_z (mm/tooth)
    pub feed_per_tooth_mm: f64,
    /// a_p (mm)
    pub axial_depth_mm: f64,
    /// a_e (mm), at most the tool diameter
    pub radial_width_mm: f64,
    pub cut_length_mm: f64,
    pub tool_material: ToolMaterial,
    pub coolant: bool,
}

impl MillingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("tool_diameter_mm", self.tool_diameter_mm)?;
        if self.number_of_teeth == 0 {
            return Err(CalcError::invalid_input(
                "number_of_teeth",
                "0",
                "Cutter must have at least one tooth",
            ));
        }
        require_positive("cutting_speed_m_min", self.cutting_speed_m_min)?;
        require_positive("feed_per_tooth_mm", self.feed_per_tooth_mm)?;
        require_positive("axial_depth_mm", self.axial_depth_mm)?;
        require_positive("radial_width_mm", self.radial_width_mm)?;
        if self.radial_width_mm > self.tool_diameter_mm {
            return Err(CalcError::invalid_input(
                "radial_width_mm",
                self.radial_width_mm.to_string(),
                "Radial width cannot exceed the tool diameter",
            ));
        }
        require_positive("cut_length_mm", self.cut_length_mm)?;
        Ok(())
    }
}

/// Results from a milling calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MillingResult {
    pub spindle_speed_rpm: f64,
    /// v_f = f_z·z·N (mm/min)
    pub table_feed_mm_min: f64,
    pub material_removal_rate_mm3_min: f64,
    pub specific_cutting_force_mpa: f64,
    /// Mean tangential force at the cutter periphery (N)
    pub cutting_force_n: f64,
    pub cutting_power_kw: f64,
    pub torque_nm: f64,
    pub machining_time_min: f64,
    pub tool_life_min: f64,
    pub cost_per_part: f64,
    pub recommendations: Vec<String>,
}

/// Calculate a milling pass.
pub fn calculate(input: &MillingInput) -> CalcResult<MillingResult> {
    let material = validate_material(&MACHINING_MATERIALS, &input.material)?;
    input.validate()?;

    let v = input.cutting_speed_m_min;
    let fz = input.feed_per_tooth_mm;

    let spindle_speed_rpm = 1000.0 * v / (PI * input.tool_diameter_mm);
    let table_feed_mm_min = fz * input.number_of_teeth as f64 * spindle_speed_rpm;
    let material_removal_rate_mm3_min =
        input.radial_width_mm * input.axial_depth_mm * table_feed_mm_min;

    // MPa · mm³/min = N·mm/min -> kW
    let specific_cutting_force_mpa = SPECIFIC_FORCE_FACTOR * material.tensile_strength_mpa;
    let cutting_power_kw = specific_cutting_force_mpa * material_removal_rate_mm3_min / 6.0e7;
    let cutting_force_n = cutting_power_kw * 1000.0 / (v / 60.0);
    let torque_nm = cutting_force_n * input.tool_diameter_mm / 2.0 / 1000.0;

    let machining_time_min = input.cut_length_mm / table_feed_mm_min;
    let tool_life_min = TaylorConstants::new(input.tool_material, material.machinability_rating)
        .tool_life_min(v);
    let cost_per_part = operation_cost(
        machining_time_min,
        input.tool_material,
        machining_time_min / tool_life_min,
    );

    let (min_fz, max_fz) = FEED_PER_TOOTH_RANGE_MM;
    let mut checks = speed_checks(material, input.tool_material, v);
    checks.extend([
        Check::new(
            fz < min_fz,
            format!("Chip load below {} mm/tooth causes rubbing and work hardening; increase feed", min_fz),
        ),
        Check::new(
            fz > max_fz,
            format!("Chip load above {} mm/tooth risks edge chipping; reduce feed", max_fz),
        ),
        Check::new(
            !input.coolant,
            "Use coolant or air blast to clear chips and control temperature",
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
            "Cutting power is high; reduce axial depth or radial engagement",
        ),
    ]);
    let recommendations = generate_recommendations(checks, OPTIMAL_RANGE_MESSAGE);

    debug!(
        material = %input.material,
        tool = %input.tool_material,
        cutting_power_kw,
        tool_life_min,
        "milling calculation complete"
    );

    Ok(MillingResult {
        spindle_speed_rpm,
        table_feed_mm_min,
        material_removal_rate_mm3_min,
        specific_cutting_force_mpa,
        cutting_force_n,
        cutting_power_kw,
        torque_nm,
        machining_time_min,
        tool_life_min,
        cost_per_part,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_slot() -> MillingInput {
        MillingInput {
            material: "steel-mild".to_string(),
            tool_diameter_mm: 20.0,
            number_of_teeth: 4,
            cutting_speed_m_min: 150.0,
            feed_per_tooth_mm: 0.1,
            axial_depth_mm: 5.0,
            radial_width_mm: 10.0,
            cut_length_mm: 100.0,
            tool_material: ToolMaterial::Carbide,
            coolant: true,
        }
    }

    #[test]
    fn test_feeds_and_removal() {
        let result = calculate(&test_slot()).unwrap();
        // 150000 / (π · 20) = 2387.3 rpm
        assert!((result.spindle_speed_rpm - 2387.3).abs() < 0.1);
        // 0.1 · 4 · 2387.3 = 954.9 mm/min
        assert!((result.table_feed_mm_min - 954.93).abs() < 0.01);
        assert!((result.material_removal_rate_mm3_min - 47_746.5).abs() < 0.5);
    }

    #[test]
    fn test_power_force_torque_consistent() {
        let result = calculate(&test_slot()).unwrap();
        assert!((result.cutting_power_kw - 1.2255).abs() < 1e-3);
        assert!((result.cutting_force_n - 490.2).abs() < 0.5);

        // T·ω recovers the cutting power
        let omega = result.spindle_speed_rpm * 2.0 * PI / 60.0;
        let power_w = result.torque_nm * omega;
        assert!((power_w - result.cutting_power_kw * 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_tool_life() {
        let result = calculate(&test_slot()).unwrap();
        // C = 280; T = (280/150)^4 = 12.14 min
        assert!((result.tool_life_min - 12.141).abs() < 0.01);
        assert!((result.machining_time_min - 100.0 / result.table_feed_mm_min).abs() < 1e-12);
        assert!(result.cost_per_part > 0.0);
        assert_eq!(result.recommendations.len(), 1);
        assert!(result.recommendations[0].contains("tool life"));
    }

    #[test]
    fn test_more_teeth_faster_feed() {
        let four = calculate(&test_slot()).unwrap();
        let six = calculate(&MillingInput { number_of_teeth: 6, ..test_slot() }).unwrap();
        assert!(six.table_feed_mm_min > four.table_feed_mm_min);
        assert!(six.machining_time_min < four.machining_time_min);
    }

    #[test]
    fn test_feed_recommendations() {
        let light = calculate(&MillingInput { feed_per_tooth_mm: 0.01, ..test_slot() }).unwrap();
        assert!(light.recommendations.iter().any(|r| r.contains("rubbing")));

        let heavy = calculate(&MillingInput { feed_per_tooth_mm: 0.4, ..test_slot() }).unwrap();
        assert!(heavy.recommendations.iter().any(|r| r.contains("chipping")));
    }

    #[test]
    fn test_invalid_inputs() {
        let wide = MillingInput { radial_width_mm: 25.0, ..test_slot() };
        assert!(matches!(calculate(&wide), Err(CalcError::InvalidInput { .. })));

        let toothless = MillingInput { number_of_teeth: 0, ..test_slot() };
        assert!(calculate(&toothless).is_err());

        let no_feed = MillingInput { feed_per_tooth_mm: 0.0, ..test_slot() };
        assert!(calculate(&no_feed).is_err());
    }

    #[test]
    fn test_unknown_material() {
        let input = MillingInput { material: "orichalcum".to_string(), ..test_slot() };
        assert!(matches!(calculate(&input), Err(CalcError::MaterialNotFound { .. })));
    }
}

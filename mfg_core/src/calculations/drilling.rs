//! # Drilling Calculation
//!
//! Twist drilling into solid material. Thrust and torque use empirical
//! coefficients on tensile strength:
//!
//! - Thrust: F = 2.5 · UTS · f · D (N)
//! - Torque: M = 0.9 · UTS · f · D² / 1000 (N·m)
//!
//! Tool life is counted in holes rather than minutes, scaled from a
//! per-tool base by machinability, relative speed and coolant.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

use crate::calculations::tool_life::{operation_cost, speed_checks};
use crate::errors::CalcResult;
use crate::materials::{ToolMaterial, MACHINING_MATERIALS};
use crate::shared::{
    generate_recommendations, require_positive, validate_material, Check, OPTIMAL_RANGE_MESSAGE,
};

const THRUST_COEFFICIENT: f64 = 2.5;
const TORQUE_COEFFICIENT: f64 = 0.9;
const COOLANT_LIFE_MULTIPLIER: f64 = 1.5;
const FEED_RANGE_MM_REV: (f64, f64) = (0.05, 0.5);
/// Depth-to-diameter ratio beyond which chips pack in the flutes
const DEEP_HOLE_RATIO: f64 = 5.0;
const MIN_TOOL_LIFE_HOLES: f64 = 100.0;
const MAX_SPINDLE_POWER_KW: f64 = 10.0;

/// Holes per drill at the recommended speed, machinability 100, dry
fn base_tool_life_holes(tool: ToolMaterial) -> f64 {
    match tool {
        ToolMaterial::Hss => 500.0,
        ToolMaterial::Carbide => 2000.0,
        ToolMaterial::Ceramic => 1500.0,
        ToolMaterial::Diamond => 5000.0,
    }
}

/// Input parameters for drilling one hole.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillingInput {
    /// Machining registry key
    pub material: String,
    pub drill_diameter_mm: f64,
    pub hole_depth_mm: f64,
    pub cutting_speed_m_min: f64,
    pub feed_mm_rev: f64,
    pub tool_material: ToolMaterial,
    pub coolant: bool,
}

impl DrillingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("drill_diameter_mm", self.drill_diameter_mm)?;
        require_positive("hole_depth_mm", self.hole_depth_mm)?;
        require_positive("cutting_speed_m_min", self.cutting_speed_m_min)?;
        require_positive("feed_mm_rev", self.feed_mm_rev)?;
        Ok(())
    }
}

/// Results from a drilling calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillingResult {
    pub spindle_speed_rpm: f64,
    /// Penetration rate f·N (mm/min)
    pub feed_rate_mm_min: f64,
    pub material_removal_rate_mm3_min: f64,
    pub thrust_force_n: f64,
    pub torque_nm: f64,
    pub drilling_power_kw: f64,
    /// Cutting time per hole (min)
    pub drilling_time_min: f64,
    pub tool_life_holes: f64,
    pub cost_per_hole: f64,
    pub recommendations: Vec<String>,
}

/// Calculate drilling of a single hole.
pub fn calculate(input: &DrillingInput) -> CalcResult<DrillingResult> {
    let material = validate_material(&MACHINING_MATERIALS, &input.material)?;
    input.validate()?;

    let d = input.drill_diameter_mm;
    let f = input.feed_mm_rev;
    let v = input.cutting_speed_m_min;
    let uts = material.tensile_strength_mpa;

    let spindle_speed_rpm = 1000.0 * v / (PI * d);
    let feed_rate_mm_min = f * spindle_speed_rpm;
    let material_removal_rate_mm3_min = PI * d.powi(2) / 4.0 * feed_rate_mm_min;

    let thrust_force_n = THRUST_COEFFICIENT * uts * f * d;
    let torque_nm = TORQUE_COEFFICIENT * uts * f * d.powi(2) / 1000.0;
    let drilling_power_kw = torque_nm * 2.0 * PI * spindle_speed_rpm / 60.0 / 1000.0;

    let drilling_time_min = input.hole_depth_mm / feed_rate_mm_min;

    let recommended_speed = material.recommended_speed(input.tool_material);
    let coolant_multiplier = if input.coolant { COOLANT_LIFE_MULTIPLIER } else { 1.0 };
    let tool_life_holes = base_tool_life_holes(input.tool_material)
        * material.machinability_rating
        / 100.0
        * (recommended_speed / v)
        * coolant_multiplier;
    let cost_per_hole = operation_cost(drilling_time_min, input.tool_material, 1.0 / tool_life_holes);

    let (min_feed, max_feed) = FEED_RANGE_MM_REV;
    let mut checks = speed_checks(material, input.tool_material, v);
    checks.extend([
        Check::new(
            f < min_feed,
            format!("Feed below {} mm/rev work-hardens the hole bottom; increase feed", min_feed),
        ),
        Check::new(
            f > max_feed,
            format!("Feed above {} mm/rev overloads the drill point; reduce feed", max_feed),
        ),
        Check::new(
            !input.coolant,
            "Use coolant to flush chips and extend drill life",
        ),
        Check::new(
            input.hole_depth_mm / d > DEEP_HOLE_RATIO,
            "Hole depth exceeds 5× diameter; use peck drilling to clear chips",
        ),
        Check::new(
            tool_life_holes < MIN_TOOL_LIFE_HOLES,
            format!(
                "Predicted drill life of {:.0} holes is short; reduce speed or improve cooling",
                tool_life_holes
            ),
        ),
        Check::new(
            drilling_power_kw > MAX_SPINDLE_POWER_KW,
            "Drilling power is high; check spindle capacity or reduce feed",
        ),
    ]);
    let recommendations = generate_recommendations(checks, OPTIMAL_RANGE_MESSAGE);

    debug!(
        material = %input.material,
        tool = %input.tool_material,
        thrust_force_n,
        tool_life_holes,
        "drilling calculation complete"
    );

    Ok(DrillingResult {
        spindle_speed_rpm,
        feed_rate_mm_min,
        material_removal_rate_mm3_min,
        thrust_force_n,
        torque_nm,
        drilling_power_kw,
        drilling_time_min,
        tool_life_holes,
        cost_per_hole,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    fn test_hole() -> DrillingInput {
        DrillingInput {
            material: "steel-mild".to_string(),
            drill_diameter_mm: 10.0,
            hole_depth_mm: 30.0,
            cutting_speed_m_min: 30.0,
            feed_mm_rev: 0.2,
            tool_material: ToolMaterial::Hss,
            coolant: true,
        }
    }

    #[test]
    fn test_thrust_and_torque() {
        let result = calculate(&test_hole()).unwrap();
        // 2.5 · 440 · 0.2 · 10 = 2200 N
        assert!((result.thrust_force_n - 2200.0).abs() < 1e-9);
        // 0.9 · 440 · 0.2 · 100 / 1000 = 7.92 N·m
        assert!((result.torque_nm - 7.92).abs() < 1e-9);
    }

    #[test]
    fn test_power_and_time() {
        let result = calculate(&test_hole()).unwrap();
        // N = 954.9 rpm; P = 7.92 · 100 rad/s = 0.792 kW
        assert!((result.spindle_speed_rpm - 954.93).abs() < 0.01);
        assert!((result.drilling_power_kw - 0.792).abs() < 1e-9);
        // 30 mm at 190.99 mm/min
        assert!((result.drilling_time_min - 0.15708).abs() < 1e-5);
    }

    #[test]
    fn test_tool_life_holes() {
        let result = calculate(&test_hole()).unwrap();
        // 500 · 0.7 · (30/30) · 1.5 = 525 holes
        assert!((result.tool_life_holes - 525.0).abs() < 1e-9);
        let expected_cost = result.drilling_time_min * 2.25 + 15.0 / 525.0;
        assert!((result.cost_per_hole - expected_cost).abs() < 1e-9);
        assert_eq!(result.recommendations, vec![OPTIMAL_RANGE_MESSAGE.to_string()]);
    }

    #[test]
    fn test_dry_fast_drilling() {
        let result = calculate(&DrillingInput {
            cutting_speed_m_min: 60.0,
            coolant: false,
            ..test_hole()
        })
        .unwrap();
        // 500 · 0.7 · 0.5 · 1.0
        assert!((result.tool_life_holes - 175.0).abs() < 1e-9);
        assert!(result.recommendations[0].contains("well above"));
        assert!(result.recommendations.iter().any(|r| r.contains("Use coolant")));
    }

    #[test]
    fn test_deep_hole() {
        let result = calculate(&DrillingInput { hole_depth_mm: 80.0, ..test_hole() }).unwrap();
        assert!(result.recommendations.iter().any(|r| r.contains("peck drilling")));
    }

    #[test]
    fn test_invalid_inputs() {
        let no_drill = DrillingInput { drill_diameter_mm: 0.0, ..test_hole() };
        assert!(matches!(calculate(&no_drill), Err(CalcError::InvalidInput { .. })));

        let no_depth = DrillingInput { hole_depth_mm: -1.0, ..test_hole() };
        assert!(calculate(&no_depth).is_err());
    }

    #[test]
    fn test_unknown_material() {
        let input = DrillingInput { material: "kryptonite".to_string(), ..test_hole() };
        assert!(matches!(calculate(&input), Err(CalcError::MaterialNotFound { .. })));
    }
}

//! # Punching Calculation
//!
//! Blanking/piercing force from shear strength over the cut perimeter,
//! plus stripping force, stroke energy, a clearance-based edge quality
//! bucket and an empirical punch wear model.
//!
//! ## Example
//!
//! ```rust
//! use mfg_core::calculations::punching::{calculate, PunchingInput};
//! use mfg_core::shared::CutQuality;
//!
//! let input = PunchingInput {
//!     material: "steel-mild".to_string(),
//!     thickness_mm: 2.0,
//!     hole_diameter_mm: 20.0,
//!     punch_diameter_mm: 19.8,
//!     clearance_pct: 5.0,
//!     punch_speed_spm: 60.0,
//!     temperature_c: 20.0,
//!     lubrication: true,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.cut_quality, CutQuality::Excellent);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::materials::CUTTING_MATERIALS;
use crate::shared::{
    generate_recommendations, require_finite, require_positive, require_range, temperature_factor,
    validate_material, Check, CutQuality, OPTIMAL_RANGE_MESSAGE,
};

/// Shear strength loss per °C above room temperature
const SHEAR_DERATE_PER_C: f64 = 0.002;
/// Reference clearance as a fraction of thickness (5%)
const REFERENCE_CLEARANCE_FRACTION: f64 = 0.05;
/// Strokes a punch survives at unit wear rate, in thousands
const BASE_TOOL_LIFE_KSTROKES: f64 = 250.0;

/// Input parameters for a punching operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchingInput {
    /// Cutting registry key
    pub material: String,
    /// Sheet thickness (mm)
    pub thickness_mm: f64,
    /// Die opening / finished hole diameter (mm)
    pub hole_diameter_mm: f64,
    pub punch_diameter_mm: f64,
    /// Radial clearance as % of sheet thickness
    pub clearance_pct: f64,
    /// Press speed (strokes per minute)
    pub punch_speed_spm: f64,
    /// Sheet temperature (°C)
    pub temperature_c: f64,
    pub lubrication: bool,
}

impl PunchingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("thickness_mm", self.thickness_mm)?;
        require_positive("hole_diameter_mm", self.hole_diameter_mm)?;
        require_positive("punch_diameter_mm", self.punch_diameter_mm)?;
        if self.punch_diameter_mm > self.hole_diameter_mm {
            return Err(CalcError::invalid_input(
                "punch_diameter_mm",
                self.punch_diameter_mm.to_string(),
                "Punch diameter cannot exceed hole diameter",
            ));
        }
        require_range("clearance_pct", self.clearance_pct, 0.0, 50.0)?;
        require_positive("punch_speed_spm", self.punch_speed_spm)?;
        require_finite("temperature_c", self.temperature_c)?;
        Ok(())
    }
}

/// Results from a punching calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchingResult {
    /// Shear strength after temperature derate (MPa)
    pub adjusted_shear_strength_mpa: f64,
    /// Radial clearance (mm)
    pub clearance_mm: f64,
    /// Half the punch/die diameter difference (mm)
    pub die_gap_mm: f64,
    /// Cut perimeter × thickness (mm²)
    pub shear_area_mm2: f64,
    pub punching_force_n: f64,
    pub stripping_force_n: f64,
    pub total_force_n: f64,
    /// Energy per stroke (J)
    pub punching_energy_j: f64,
    pub punching_power_kw: f64,
    pub shear_stress_mpa: f64,
    /// Clearance relative to the 5% reference
    pub clearance_ratio: f64,
    pub cut_quality: CutQuality,
    pub tool_wear_rate: f64,
    /// Expected punch life (strokes)
    pub expected_tool_life_strokes: u64,
    pub recommendations: Vec<String>,
}

/// Classify edge quality from the clearance ratio.
///
/// Bands are inclusive and checked tightest first.
pub fn classify_clearance(clearance_ratio: f64) -> CutQuality {
    if (0.8..=1.2).contains(&clearance_ratio) {
        CutQuality::Excellent
    } else if (0.6..=1.5).contains(&clearance_ratio) {
        CutQuality::Good
    } else if (0.4..=2.0).contains(&clearance_ratio) {
        CutQuality::Fair
    } else {
        CutQuality::Poor
    }
}

/// Calculate a punching operation.
pub fn calculate(input: &PunchingInput) -> CalcResult<PunchingResult> {
    let material = validate_material(&CUTTING_MATERIALS, &input.material)?;
    input.validate()?;

    let t = input.thickness_mm;

    let adjusted_shear_strength_mpa =
        material.shear_strength_mpa * temperature_factor(input.temperature_c, SHEAR_DERATE_PER_C);
    let clearance_mm = input.clearance_pct * t / 100.0;
    let die_gap_mm = (input.hole_diameter_mm - input.punch_diameter_mm) / 2.0;

    // === Forces ===
    let shear_area_mm2 = PI * input.hole_diameter_mm * t;
    let punching_force_n = adjusted_shear_strength_mpa * shear_area_mm2;
    let stripping_factor = 0.08 + (t / input.hole_diameter_mm) * 0.02;
    let stripping_force_n = punching_force_n * stripping_factor;
    let total_force_n = punching_force_n + stripping_force_n;

    // Stroke works through the sheet plus 2 mm of approach; N·mm -> J
    let punching_energy_j = total_force_n * (t + 2.0) / 1000.0;
    let punching_power_kw = punching_energy_j * input.punch_speed_spm / 60.0 / 1000.0;
    let shear_stress_mpa = punching_force_n / shear_area_mm2;

    // === Quality and wear ===
    let clearance_ratio = clearance_mm / (t * REFERENCE_CLEARANCE_FRACTION);
    let cut_quality = classify_clearance(clearance_ratio);

    let lubrication_factor = if input.lubrication { 0.7 } else { 1.0 };
    let tool_wear_rate = (material.hardness_hb / 100.0)
        * (input.punch_speed_spm / 100.0).powf(0.3)
        * ((1.0 - clearance_ratio).abs() + 1.0)
        * lubrication_factor
        * 2.5;
    let expected_tool_life_strokes =
        (BASE_TOOL_LIFE_KSTROKES / tool_wear_rate * 1000.0).round() as u64;

    let recommendations = generate_recommendations(
        vec![
            Check::new(
                clearance_ratio < 0.8,
                "Clearance is too small; increase toward 5% of thickness to reduce punch load and wear",
            ),
            Check::new(
                clearance_ratio > 1.2,
                "Clearance is too large; reduce toward 5% of thickness to limit burr height and rollover",
            ),
            Check::new(
                input.punch_speed_spm > 200.0,
                "High punching speed accelerates tool wear; consider reducing speed",
            ),
            Check::new(
                !input.lubrication,
                "Apply lubrication to extend punch life and improve edge quality",
            ),
            Check::new(
                input.temperature_c > 50.0,
                "Elevated sheet temperature; allow parts to cool to keep dimensions stable",
            ),
        ],
        OPTIMAL_RANGE_MESSAGE,
    );

    debug!(
        material = %input.material,
        total_force_n,
        cut_quality = %cut_quality,
        "punching calculation complete"
    );

    Ok(PunchingResult {
        adjusted_shear_strength_mpa,
        clearance_mm,
        die_gap_mm,
        shear_area_mm2,
        punching_force_n,
        stripping_force_n,
        total_force_n,
        punching_energy_j,
        punching_power_kw,
        shear_stress_mpa,
        clearance_ratio,
        cut_quality,
        tool_wear_rate,
        expected_tool_life_strokes,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_hole() -> PunchingInput {
        PunchingInput {
            material: "steel-mild".to_string(),
            thickness_mm: 2.0,
            hole_diameter_mm: 20.0,
            punch_diameter_mm: 19.8,
            clearance_pct: 5.0,
            punch_speed_spm: 100.0,
            temperature_c: 20.0,
            lubrication: true,
        }
    }

    #[test]
    fn test_punching_force() {
        let result = calculate(&test_hole()).unwrap();
        // A = π · 20 · 2 = 125.66 mm², F = 310 · 125.66 ≈ 38.96 kN
        assert!((result.shear_area_mm2 - 125.66).abs() < 0.01);
        assert!((result.punching_force_n - 38_956.0).abs() < 5.0);
        // Stripping factor 0.08 + 0.1 · 0.02 = 0.082
        assert!((result.stripping_force_n / result.punching_force_n - 0.082).abs() < 1e-9);
        assert!((result.shear_stress_mpa - 310.0).abs() < 1e-9);
        assert!((result.die_gap_mm - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_energy_and_power() {
        let result = calculate(&test_hole()).unwrap();
        let expected_energy = result.total_force_n * 4.0 / 1000.0;
        assert!((result.punching_energy_j - expected_energy).abs() < 1e-9);
        assert!((result.punching_power_kw - expected_energy * 100.0 / 60_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_optimal_clearance_quality_and_life() {
        let result = calculate(&test_hole()).unwrap();
        assert!((result.clearance_ratio - 1.0).abs() < 1e-9);
        assert_eq!(result.cut_quality, CutQuality::Excellent);
        // wear = 1.26 · 1 · 1 · 0.7 · 2.5 = 2.205, life = 250 / 2.205 · 1000
        assert!((result.tool_wear_rate - 2.205).abs() < 1e-9);
        assert_eq!(result.expected_tool_life_strokes, 113_379);
        assert_eq!(result.recommendations, vec![OPTIMAL_RANGE_MESSAGE.to_string()]);
    }

    #[test]
    fn test_quality_buckets() {
        assert_eq!(classify_clearance(1.0), CutQuality::Excellent);
        assert_eq!(classify_clearance(0.8), CutQuality::Excellent);
        assert_eq!(classify_clearance(1.4), CutQuality::Good);
        assert_eq!(classify_clearance(0.5), CutQuality::Fair);
        assert_eq!(classify_clearance(2.0), CutQuality::Fair);
        assert_eq!(classify_clearance(0.2), CutQuality::Poor);
        assert_eq!(classify_clearance(6.0), CutQuality::Poor);
    }

    #[test]
    fn test_quality_always_bounded() {
        for pct in [0.0, 1.0, 3.0, 5.0, 8.0, 12.0, 25.0, 50.0] {
            let result = calculate(&PunchingInput { clearance_pct: pct, ..test_hole() }).unwrap();
            assert!(CutQuality::ALL.contains(&result.cut_quality));
        }
    }

    #[test]
    fn test_recommendations_fire_in_order() {
        let result = calculate(&PunchingInput {
            clearance_pct: 12.0,
            punch_speed_spm: 250.0,
            lubrication: false,
            temperature_c: 80.0,
            ..test_hole()
        })
        .unwrap();

        assert_eq!(result.recommendations.len(), 4);
        assert!(result.recommendations[0].starts_with("Clearance is too large"));
        assert!(result.recommendations[1].starts_with("High punching speed"));
        assert!(result.recommendations[2].starts_with("Apply lubrication"));
        assert!(result.recommendations[3].starts_with("Elevated sheet temperature"));
    }

    #[test]
    fn test_hot_sheet_is_weaker() {
        let hot = calculate(&PunchingInput { temperature_c: 120.0, ..test_hole() }).unwrap();
        assert!((hot.adjusted_shear_strength_mpa - 248.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs() {
        let oversize_punch = PunchingInput { punch_diameter_mm: 21.0, ..test_hole() };
        assert!(matches!(calculate(&oversize_punch), Err(CalcError::InvalidInput { .. })));

        let wide_clearance = PunchingInput { clearance_pct: 60.0, ..test_hole() };
        assert!(calculate(&wide_clearance).is_err());
    }

    #[test]
    fn test_nan_temperature_rejected() {
        let input = PunchingInput { temperature_c: f64::NAN, ..test_hole() };
        assert!(matches!(calculate(&input), Err(CalcError::InvalidInput { .. })));
    }

    #[test]
    fn test_unknown_material() {
        let input = PunchingInput { material: "unobtainium".to_string(), ..test_hole() };
        assert!(matches!(calculate(&input), Err(CalcError::MaterialNotFound { .. })));
    }
}

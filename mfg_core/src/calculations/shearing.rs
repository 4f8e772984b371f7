//! # Guillotine Shearing Calculation
//!
//! Straight-line shearing of sheet with a raked upper blade. Force scales
//! with shear area, blade rake (1/sin θ) and clearance; the result also
//! reports hold-down pressure, blade wear, the fracture cut angle and a
//! distortion index.
//!
//! ## Example
//!
//! ```rust
//! use mfg_core::calculations::shearing::{calculate, ShearingInput};
//!
//! let input = ShearingInput {
//!     material: "aluminum-5052".to_string(),
//!     thickness_mm: 2.0,
//!     shear_length_mm: 1000.0,
//!     blade_angle_deg: 3.0,
//!     clearance_pct: 8.0,
//!     shear_speed_spm: 30.0,
//!     hold_down_force_n: 10_000.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.shearing_force_n > 0.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::materials::CUTTING_MATERIALS;
use crate::shared::{
    generate_recommendations, require_non_negative, require_positive, require_range,
    validate_material, Check, CutQuality, OPTIMAL_RANGE_MESSAGE,
};

/// Width of the hold-down pad strip along the cut line (mm)
const HOLD_DOWN_PAD_WIDTH_MM: f64 = 25.0;
/// Minimum hold-down pressure that keeps the sheet from lifting (N/cm²)
const MIN_HOLD_DOWN_PRESSURE: f64 = 10.0;

/// Input parameters for a shearing operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShearingInput {
    /// Cutting registry key
    pub material: String,
    pub thickness_mm: f64,
    /// Length of the cut (mm)
    pub shear_length_mm: f64,
    /// Rake angle of the upper blade (degrees)
    pub blade_angle_deg: f64,
    /// Blade clearance as % of thickness
    pub clearance_pct: f64,
    /// Strokes per minute
    pub shear_speed_spm: f64,
    pub hold_down_force_n: f64,
}

impl ShearingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("thickness_mm", self.thickness_mm)?;
        require_positive("shear_length_mm", self.shear_length_mm)?;
        if !(self.blade_angle_deg > 0.0 && self.blade_angle_deg <= 10.0) {
            return Err(CalcError::invalid_input(
                "blade_angle_deg",
                self.blade_angle_deg.to_string(),
                "Blade angle must be greater than 0 and at most 10 degrees",
            ));
        }
        require_range("clearance_pct", self.clearance_pct, 0.0, 30.0)?;
        require_positive("shear_speed_spm", self.shear_speed_spm)?;
        require_non_negative("hold_down_force_n", self.hold_down_force_n)?;
        Ok(())
    }
}

/// Results from a shearing calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShearingResult {
    pub shear_area_mm2: f64,
    pub clearance_mm: f64,
    /// 1 / sin θ
    pub angle_factor: f64,
    pub clearance_factor: f64,
    pub shearing_force_n: f64,
    /// Pad pressure on the sheet (N/cm²)
    pub hold_down_pressure_n_cm2: f64,
    pub total_force_n: f64,
    pub shearing_energy_j: f64,
    pub shearing_power_kw: f64,
    /// Relative blade wear index
    pub blade_wear: f64,
    /// Fracture angle through the thickness (degrees)
    pub cut_angle_deg: f64,
    /// Relative distortion index of the sheared edge
    pub distortion: f64,
    pub cut_quality: CutQuality,
    pub recommendations: Vec<String>,
}

/// Classify sheared-edge quality from clearance (% of thickness).
pub fn classify_shear_clearance(clearance_pct: f64) -> CutQuality {
    if (5.0..=10.0).contains(&clearance_pct) {
        CutQuality::Excellent
    } else if (3.0..=15.0).contains(&clearance_pct) {
        CutQuality::Good
    } else if (1.0..=25.0).contains(&clearance_pct) {
        CutQuality::Fair
    } else {
        CutQuality::Poor
    }
}

/// Calculate a shearing operation.
pub fn calculate(input: &ShearingInput) -> CalcResult<ShearingResult> {
    let material = validate_material(&CUTTING_MATERIALS, &input.material)?;
    input.validate()?;

    let t = input.thickness_mm;

    let shear_area_mm2 = input.shear_length_mm * t;
    let angle_factor = 1.0 / input.blade_angle_deg.to_radians().sin();
    let clearance_mm = input.clearance_pct * t / 100.0;
    let clearance_factor = 1.0 + (clearance_mm / t) * 0.3;

    let shearing_force_n =
        material.shear_strength_mpa * shear_area_mm2 * angle_factor * clearance_factor;

    let hold_down_area_cm2 = input.shear_length_mm * HOLD_DOWN_PAD_WIDTH_MM / 100.0;
    let hold_down_pressure_n_cm2 = input.hold_down_force_n / hold_down_area_cm2;
    let total_force_n = shearing_force_n + input.hold_down_force_n;

    // Blade travels through the thickness; N·mm -> J
    let shearing_energy_j = shearing_force_n * t / 1000.0;
    let shearing_power_kw = shearing_energy_j * input.shear_speed_spm / 60.0 / 1000.0;

    let blade_wear = (material.hardness_hb / 200.0) * (input.shear_speed_spm / 100.0) * 15.0;
    let cut_angle_deg = (clearance_mm / t).atan().to_degrees();
    let distortion = (shearing_force_n / 1000.0 / material.tensile_strength_mpa) * t;
    let cut_quality = classify_shear_clearance(input.clearance_pct);

    let recommendations = generate_recommendations(
        vec![
            Check::new(
                input.blade_angle_deg < 2.0,
                "Blade angle below 2° raises the cutting load; increase the rake angle",
            ),
            Check::new(
                input.blade_angle_deg > 6.0,
                "Blade angle above 6° causes twist and bow in the strip; reduce the rake angle",
            ),
            Check::new(
                input.clearance_pct < 5.0,
                "Clearance below 5% causes secondary shear and blade wear; open the gap",
            ),
            Check::new(
                input.clearance_pct > 15.0,
                "Clearance above 15% produces heavy burrs and rollover; close the gap",
            ),
            Check::new(
                hold_down_pressure_n_cm2 < MIN_HOLD_DOWN_PRESSURE,
                "Hold-down pressure is too low to keep the sheet flat; increase hold-down force",
            ),
        ],
        OPTIMAL_RANGE_MESSAGE,
    );

    debug!(
        material = %input.material,
        shearing_force_n,
        cut_quality = %cut_quality,
        "shearing calculation complete"
    );

    Ok(ShearingResult {
        shear_area_mm2,
        clearance_mm,
        angle_factor,
        clearance_factor,
        shearing_force_n,
        hold_down_pressure_n_cm2,
        total_force_n,
        shearing_energy_j,
        shearing_power_kw,
        blade_wear,
        cut_angle_deg,
        distortion,
        cut_quality,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cut() -> ShearingInput {
        ShearingInput {
            material: "steel-mild".to_string(),
            thickness_mm: 3.0,
            shear_length_mm: 1000.0,
            blade_angle_deg: 3.0,
            clearance_pct: 8.0,
            shear_speed_spm: 20.0,
            hold_down_force_n: 10_000.0,
        }
    }

    #[test]
    fn test_factors() {
        let result = calculate(&test_cut()).unwrap();
        assert!((result.shear_area_mm2 - 3000.0).abs() < 1e-9);
        // 1 / sin(3°) = 19.107
        assert!((result.angle_factor - 19.107).abs() < 0.001);
        // 1 + 0.08 · 0.3 = 1.024
        assert!((result.clearance_factor - 1.024).abs() < 1e-9);
        assert!((result.clearance_mm - 0.24).abs() < 1e-9);
    }

    #[test]
    fn test_forces() {
        let result = calculate(&test_cut()).unwrap();
        let expected = 310.0 * 3000.0 * result.angle_factor * 1.024;
        assert!((result.shearing_force_n - expected).abs() < 1e-6 * expected);
        assert!((result.total_force_n - result.shearing_force_n - 10_000.0).abs() < 1e-6);
        // 10 kN over 1000 mm × 25 mm = 250 cm² → 40 N/cm²
        assert!((result.hold_down_pressure_n_cm2 - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_wear_and_geometry() {
        let result = calculate(&test_cut()).unwrap();
        // (126 / 200) · 0.2 · 15 = 1.89
        assert!((result.blade_wear - 1.89).abs() < 1e-9);
        // atan(0.08) = 4.574°
        assert!((result.cut_angle_deg - 4.574).abs() < 0.001);
        assert!(result.distortion > 0.0);
        assert_eq!(result.cut_quality, CutQuality::Excellent);
        assert_eq!(result.recommendations, vec![OPTIMAL_RANGE_MESSAGE.to_string()]);
    }

    #[test]
    fn test_recommendations() {
        let result = calculate(&ShearingInput {
            blade_angle_deg: 8.0,
            clearance_pct: 20.0,
            hold_down_force_n: 1000.0,
            ..test_cut()
        })
        .unwrap();

        assert_eq!(result.recommendations.len(), 3);
        assert!(result.recommendations[0].contains("above 6°"));
        assert!(result.recommendations[1].contains("above 15%"));
        assert!(result.recommendations[2].contains("Hold-down"));
        assert_eq!(result.cut_quality, CutQuality::Fair);
    }

    #[test]
    fn test_shallow_rake_raises_force() {
        let steep = calculate(&test_cut()).unwrap();
        let shallow = calculate(&ShearingInput { blade_angle_deg: 1.0, ..test_cut() }).unwrap();
        assert!(shallow.shearing_force_n > steep.shearing_force_n);
        assert!(shallow.recommendations[0].contains("below 2°"));
    }

    #[test]
    fn test_invalid_inputs() {
        let flat_blade = ShearingInput { blade_angle_deg: 0.0, ..test_cut() };
        assert!(matches!(calculate(&flat_blade), Err(CalcError::InvalidInput { .. })));

        let wide_gap = ShearingInput { clearance_pct: 35.0, ..test_cut() };
        assert!(calculate(&wide_gap).is_err());
    }

    #[test]
    fn test_hold_down_force_must_be_finite() {
        let nan_hold = ShearingInput { hold_down_force_n: f64::NAN, ..test_cut() };
        assert!(matches!(
            calculate(&nan_hold),
            Err(CalcError::InvalidInput { ref field, .. }) if field == "hold_down_force_n"
        ));

        let negative = ShearingInput { hold_down_force_n: -1.0, ..test_cut() };
        assert!(calculate(&negative).is_err());

        let unclamped = ShearingInput { hold_down_force_n: 0.0, ..test_cut() };
        assert!(calculate(&unclamped).is_ok());
    }

    #[test]
    fn test_unknown_material() {
        let input = ShearingInput { material: "unobtainium".to_string(), ..test_cut() };
        assert!(matches!(calculate(&input), Err(CalcError::MaterialNotFound { .. })));
    }
}

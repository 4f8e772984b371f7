//! # Flat Rolling Calculation
//!
//! Estimates roll force, torque and power for a single flat rolling pass
//! using the slab approximation: force is the mean flow stress acting over
//! the projected arc of contact.
//!
//! ## Units
//!
//! Thickness, width and roll diameter in mm; rolling speed in m/s; stresses
//! in MPa; forces in N; torque in N·m; power in kW.
//!
//! ## Example
//!
//! ```rust
//! use mfg_core::calculations::rolling::{calculate, RollingInput};
//!
//! let input = RollingInput {
//!     material: "steel-low-carbon".to_string(),
//!     initial_thickness_mm: 20.0,
//!     final_thickness_mm: 10.0,
//!     width_mm: 100.0,
//!     roll_diameter_mm: 300.0,
//!     rolling_speed_m_s: 2.0,
//!     friction_coefficient: 0.2,
//!     temperature_c: 20.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.rolling_force_n > 0.0);
//! assert!(result.rolling_power_kw > 0.0);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::materials::FORMING_MATERIALS;
use crate::shared::{
    require_finite, require_non_negative, require_positive, validate_material,
};

/// Fraction of plastic work converted to heat
pub(crate) const HEAT_CONVERSION_FRACTION: f64 = 0.9;

/// Input parameters for a flat rolling pass.
///
/// ## JSON Example
///
/// ```json
/// {
///   "material": "steel-low-carbon",
///   "initial_thickness_mm": 20.0,
///   "final_thickness_mm": 10.0,
///   "width_mm": 100.0,
///   "roll_diameter_mm": 300.0,
///   "rolling_speed_m_s": 2.0,
///   "friction_coefficient": 0.2,
///   "temperature_c": 20.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollingInput {
    /// Forming registry key
    pub material: String,
    pub initial_thickness_mm: f64,
    pub final_thickness_mm: f64,
    /// Strip width (mm)
    pub width_mm: f64,
    pub roll_diameter_mm: f64,
    /// Peripheral roll speed (m/s)
    pub rolling_speed_m_s: f64,
    /// Coulomb friction coefficient between roll and strip
    pub friction_coefficient: f64,
    /// Strip entry temperature (°C)
    pub temperature_c: f64,
}

impl RollingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("initial_thickness_mm", self.initial_thickness_mm)?;
        require_positive("final_thickness_mm", self.final_thickness_mm)?;
        if self.final_thickness_mm >= self.initial_thickness_mm {
            return Err(CalcError::invalid_input(
                "final_thickness_mm",
                self.final_thickness_mm.to_string(),
                "Final thickness must be less than initial thickness",
            ));
        }
        require_positive("width_mm", self.width_mm)?;
        require_positive("roll_diameter_mm", self.roll_diameter_mm)?;
        require_positive("rolling_speed_m_s", self.rolling_speed_m_s)?;
        require_non_negative("friction_coefficient", self.friction_coefficient)?;
        require_finite("temperature_c", self.temperature_c)?;
        Ok(())
    }
}

/// Results from a rolling calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollingResult {
    /// Thickness reduction as % of initial thickness
    pub reduction_ratio_pct: f64,
    /// ln(h0/h1)
    pub true_strain: f64,
    /// Projected arc of contact L = √(R·Δh) (mm)
    pub contact_length_mm: f64,
    /// Bite angle α = √(Δh/R) (rad)
    pub contact_angle_rad: f64,
    /// Mean flow stress K·εⁿ (MPa)
    pub average_flow_stress_mpa: f64,
    pub rolling_force_n: f64,
    /// Torque per roll (N·m)
    pub torque_nm: f64,
    /// Power per roll (kW)
    pub rolling_power_kw: f64,
    /// Vertical separating component F·sin α (N)
    pub separating_force_n: f64,
    /// Mean contact pressure (MPa)
    pub roll_pressure_mpa: f64,
    /// Strip exit velocity from volume constancy (m/s)
    pub exit_velocity_m_s: f64,
    /// (v_exit - v_roll) / v_roll (%)
    pub forward_slip_pct: f64,
    /// Strip temperature after adiabatic heating (°C)
    pub exit_temperature_c: f64,
}

/// Calculate a flat rolling pass.
///
/// # Returns
///
/// * `Ok(RollingResult)` - Calculation results
/// * `Err(CalcError)` - Unknown material or invalid geometry
pub fn calculate(input: &RollingInput) -> CalcResult<RollingResult> {
    let material = validate_material(&FORMING_MATERIALS, &input.material)?;
    input.validate()?;

    let h0 = input.initial_thickness_mm;
    let h1 = input.final_thickness_mm;

    // === Geometry ===
    let reduction_mm = h0 - h1;
    let reduction_ratio_pct = reduction_mm / h0 * 100.0;
    let true_strain = (h0 / h1).ln();

    let roll_radius_mm = input.roll_diameter_mm / 2.0;
    let contact_length_mm = (roll_radius_mm * reduction_mm).sqrt();
    let contact_angle_rad = (reduction_mm / roll_radius_mm).sqrt();

    // === Force ===
    let average_flow_stress_mpa = material.flow_stress(true_strain);
    // MPa · mm² = N
    let rolling_force_n = average_flow_stress_mpa * input.width_mm * contact_length_mm;

    // === Torque and power ===
    // Force acts at half the contact length; N·mm -> N·m
    let torque_nm = rolling_force_n * contact_length_mm / 2.0 / 1000.0;
    let roll_circumference_m = PI * input.roll_diameter_mm / 1000.0;
    let roll_rpm = input.rolling_speed_m_s * 60.0 / roll_circumference_m;
    let angular_velocity_rad_s = roll_rpm * 2.0 * PI / 60.0;
    let rolling_power_kw = torque_nm * angular_velocity_rad_s / 1000.0;

    // === Secondary quantities ===
    let separating_force_n = rolling_force_n * contact_angle_rad.sin();
    let roll_pressure_mpa = rolling_force_n / (input.width_mm * contact_length_mm);
    let exit_velocity_m_s = input.rolling_speed_m_s * (h0 / h1);
    let forward_slip_pct =
        (exit_velocity_m_s - input.rolling_speed_m_s) / input.rolling_speed_m_s * 100.0;

    let exit_temperature_c = input.temperature_c
        + adiabatic_temperature_rise(
            average_flow_stress_mpa,
            true_strain,
            material.density_kg_m3,
            material.specific_heat,
        );

    debug!(
        material = %input.material,
        rolling_force_n,
        rolling_power_kw,
        "rolling calculation complete"
    );

    Ok(RollingResult {
        reduction_ratio_pct,
        true_strain,
        contact_length_mm,
        contact_angle_rad,
        average_flow_stress_mpa,
        rolling_force_n,
        torque_nm,
        rolling_power_kw,
        separating_force_n,
        roll_pressure_mpa,
        exit_velocity_m_s,
        forward_slip_pct,
        exit_temperature_c,
    })
}

/// Temperature rise (°C) when a fraction of the plastic work σ·ε stays in the
/// workpiece: ΔT = η·σ·ε / (ρ·c).
pub(crate) fn adiabatic_temperature_rise(
    flow_stress_mpa: f64,
    true_strain: f64,
    density_kg_m3: f64,
    specific_heat: f64,
) -> f64 {
    // MPa -> Pa gives J/m³
    HEAT_CONVERSION_FRACTION * flow_stress_mpa * 1.0e6 * true_strain / (density_kg_m3 * specific_heat)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_pass() -> RollingInput {
        RollingInput {
            material: "steel-low-carbon".to_string(),
            initial_thickness_mm: 20.0,
            final_thickness_mm: 10.0,
            width_mm: 100.0,
            roll_diameter_mm: 300.0,
            rolling_speed_m_s: 2.0,
            friction_coefficient: 0.2,
            temperature_c: 20.0,
        }
    }

    #[test]
    fn test_geometry() {
        let result = calculate(&test_pass()).unwrap();

        assert!((result.reduction_ratio_pct - 50.0).abs() < 1e-9);
        assert!((result.true_strain - 2f64.ln()).abs() < 1e-9);
        // L = √(150 · 10) = 38.73 mm
        assert!((result.contact_length_mm - 38.73).abs() < 0.01);
        // α = √(10 / 150) = 0.258 rad
        assert!((result.contact_angle_rad - 0.2582).abs() < 0.001);
    }

    #[test]
    fn test_force_and_power() {
        let result = calculate(&test_pass()).unwrap();

        // σ = 530 · 0.693^0.26 ≈ 482 MPa, F = σ · 100 · 38.73 ≈ 1.87 MN
        assert!((result.average_flow_stress_mpa - 482.0).abs() < 2.0);
        assert!((result.rolling_force_n - 1.867e6).abs() < 1.0e4);
        assert!(result.rolling_power_kw > 0.0);
        assert!(result.separating_force_n < result.rolling_force_n);
        assert!((result.roll_pressure_mpa - result.average_flow_stress_mpa).abs() < 1e-6);
    }

    #[test]
    fn test_exit_velocity_and_slip() {
        let result = calculate(&test_pass()).unwrap();
        assert!((result.exit_velocity_m_s - 4.0).abs() < 1e-9);
        assert!((result.forward_slip_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_strip_heats_up() {
        let result = calculate(&test_pass()).unwrap();
        assert!(result.exit_temperature_c > 20.0);
        assert!(result.exit_temperature_c < 200.0);
    }

    #[test]
    fn test_heavier_reduction_needs_more_force() {
        let light = calculate(&RollingInput { final_thickness_mm: 18.0, ..test_pass() }).unwrap();
        let heavy = calculate(&test_pass()).unwrap();
        assert!(heavy.rolling_force_n > light.rolling_force_n);
    }

    #[test]
    fn test_invalid_geometry() {
        let thicker = RollingInput { final_thickness_mm: 20.0, ..test_pass() };
        assert!(matches!(calculate(&thicker), Err(CalcError::InvalidInput { .. })));

        let no_width = RollingInput { width_mm: 0.0, ..test_pass() };
        assert!(calculate(&no_width).is_err());

        let no_roll = RollingInput { roll_diameter_mm: -300.0, ..test_pass() };
        assert!(calculate(&no_roll).is_err());
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        let nan_temp = RollingInput { temperature_c: f64::NAN, ..test_pass() };
        assert!(matches!(
            calculate(&nan_temp),
            Err(CalcError::InvalidInput { ref field, .. }) if field == "temperature_c"
        ));

        let nan_friction = RollingInput { friction_coefficient: f64::NAN, ..test_pass() };
        assert!(matches!(
            calculate(&nan_friction),
            Err(CalcError::InvalidInput { ref field, .. }) if field == "friction_coefficient"
        ));
    }

    #[test]
    fn test_unknown_material() {
        let input = RollingInput { material: "unobtainium".to_string(), ..test_pass() };
        assert_eq!(
            calculate(&input).unwrap_err(),
            CalcError::material_not_found("unobtainium")
        );
    }
}

//! # Open-Die Upset Forging Calculation
//!
//! Upsetting of a cylindrical billet between two dies. Friction at the die
//! faces raises the required force through a geometric friction factor that
//! grows with the diameter-to-height ratio of the forged part.
//!
//! ## Example
//!
//! ```rust
//! use mfg_core::calculations::forging::{calculate, DieType, ForgingInput};
//!
//! let input = ForgingInput {
//!     material: "aluminum-6061".to_string(),
//!     initial_height_mm: 100.0,
//!     final_height_mm: 60.0,
//!     diameter_mm: 50.0,
//!     friction_coefficient: 0.1,
//!     temperature_c: 20.0,
//!     die_type: DieType::Flat,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.forging_force_n > 0.0);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

use crate::calculations::rolling::adiabatic_temperature_rise;
use crate::errors::{CalcError, CalcResult};
use crate::materials::FORMING_MATERIALS;
use crate::shared::{
    require_finite, require_non_negative, require_positive, validate_material,
};

/// Press mechanical efficiency
const FORGING_EFFICIENCY: f64 = 0.85;

/// Die face geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieType {
    Flat,
    Grooved,
}

impl DieType {
    /// Divisor of the μ·d/h term in the friction factor
    fn friction_divisor(&self) -> f64 {
        match self {
            DieType::Flat => 3.0,
            DieType::Grooved => 4.0,
        }
    }
}

/// Input parameters for an upset forging operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgingInput {
    /// Forming registry key
    pub material: String,
    pub initial_height_mm: f64,
    pub final_height_mm: f64,
    /// Billet diameter (mm)
    pub diameter_mm: f64,
    pub friction_coefficient: f64,
    /// Billet temperature (°C)
    pub temperature_c: f64,
    pub die_type: DieType,
}

impl ForgingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("initial_height_mm", self.initial_height_mm)?;
        require_positive("final_height_mm", self.final_height_mm)?;
        if self.final_height_mm >= self.initial_height_mm {
            return Err(CalcError::invalid_input(
                "final_height_mm",
                self.final_height_mm.to_string(),
                "Final height must be less than initial height",
            ));
        }
        require_positive("diameter_mm", self.diameter_mm)?;
        require_non_negative("friction_coefficient", self.friction_coefficient)?;
        require_finite("temperature_c", self.temperature_c)?;
        Ok(())
    }
}

/// Results from a forging calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgingResult {
    /// Height reduction as % of initial height
    pub reduction_ratio_pct: f64,
    pub true_strain: f64,
    /// Flow stress K·εⁿ at the final strain (MPa)
    pub average_flow_stress_mpa: f64,
    /// 1 + μ·d / (c·h), c = 3 flat, 4 grooved
    pub friction_factor: f64,
    pub forging_force_n: f64,
    /// Power assuming the stroke completes in one second (kW)
    pub forging_power_kw: f64,
    pub work_done_kj: f64,
    pub efficiency: f64,
    /// Billet temperature after adiabatic heating (°C)
    pub exit_temperature_c: f64,
}

/// Calculate an upset forging operation.
pub fn calculate(input: &ForgingInput) -> CalcResult<ForgingResult> {
    let material = validate_material(&FORMING_MATERIALS, &input.material)?;
    input.validate()?;

    let h0 = input.initial_height_mm;
    let h1 = input.final_height_mm;
    let reduction_mm = h0 - h1;

    let reduction_ratio_pct = reduction_mm / h0 * 100.0;
    let true_strain = (h0 / h1).ln();
    let average_flow_stress_mpa = material.flow_stress(true_strain);

    let area_mm2 = PI * (input.diameter_mm / 2.0).powi(2);
    let friction_factor = 1.0
        + input.friction_coefficient * input.diameter_mm
            / (input.die_type.friction_divisor() * h1);

    let forging_force_n = average_flow_stress_mpa * area_mm2 * friction_factor;

    // N·mm -> kJ
    let work_done_kj = forging_force_n * reduction_mm / 1.0e6;
    let forging_power_kw = work_done_kj;

    let exit_temperature_c = input.temperature_c
        + adiabatic_temperature_rise(
            average_flow_stress_mpa,
            true_strain,
            material.density_kg_m3,
            material.specific_heat,
        );

    debug!(
        material = %input.material,
        die_type = ?input.die_type,
        forging_force_n,
        "forging calculation complete"
    );

    Ok(ForgingResult {
        reduction_ratio_pct,
        true_strain,
        average_flow_stress_mpa,
        friction_factor,
        forging_force_n,
        forging_power_kw,
        work_done_kj,
        efficiency: FORGING_EFFICIENCY,
        exit_temperature_c,
    })
}

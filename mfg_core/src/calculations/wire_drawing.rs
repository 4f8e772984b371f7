//! # Wire Drawing Calculation
//!
//! Drawing stress follows the Sachs-type expression
//! σ_d = σ_y·(1 + μ/tan(α/2))·ln(A₀/A₁) with a linear yield derate for warm
//! drawing. Numeric outputs are rounded: strain to 3 places, power and work
//! to 3 places, everything else to 2.
//!
//! Ideal work σ_y·A₁·ε is taken over the draw length, the same length as
//! the actual work, so efficiency is a ratio of like quantities.
//!
//! ## Example
//!
//! ```rust
//! use mfg_core::calculations::wire_drawing::{calculate, WireDrawingInput};
//!
//! let input = WireDrawingInput {
//!     material: "copper".to_string(),
//!     initial_diameter_mm: 3.0,
//!     final_diameter_mm: 2.6,
//!     drawing_speed_m_min: 60.0,
//!     die_angle_deg: 12.0,
//!     number_of_passes: 1,
//!     lubrication: true,
//!     temperature_c: 20.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.drawing_force_n > 0.0);
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

/// Yield strength loss per °C above room temperature
const YIELD_DERATE_PER_C: f64 = 0.001;
const MAX_EFFICIENCY_PCT: f64 = 95.0;
const OPTIMAL_DIE_ANGLE_DEG: (f64, f64) = (6.0, 20.0);

/// Input parameters for wire drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireDrawingInput {
    /// Drawing registry key
    pub material: String,
    pub initial_diameter_mm: f64,
    pub final_diameter_mm: f64,
    /// Exit wire speed (m/min)
    pub drawing_speed_m_min: f64,
    /// Included die angle (degrees)
    pub die_angle_deg: f64,
    pub number_of_passes: u32,
    pub lubrication: bool,
    /// Wire temperature (°C)
    pub temperature_c: f64,
}

impl WireDrawingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("initial_diameter_mm", self.initial_diameter_mm)?;
        require_positive("final_diameter_mm", self.final_diameter_mm)?;
        if self.final_diameter_mm >= self.initial_diameter_mm {
            return Err(CalcError::invalid_input(
                "final_diameter_mm",
                self.final_diameter_mm.to_string(),
                "Final diameter must be less than initial diameter",
            ));
        }
        require_positive("drawing_speed_m_min", self.drawing_speed_m_min)?;
        if !(self.die_angle_deg > 0.0 && self.die_angle_deg < 90.0) {
            return Err(CalcError::invalid_input(
                "die_angle_deg",
                self.die_angle_deg.to_string(),
                "Die angle must be between 0 and 90 degrees",
            ));
        }
        if self.number_of_passes == 0 {
            return Err(CalcError::invalid_input(
                "number_of_passes",
                "0",
                "At least one pass is required",
            ));
        }
        require_finite("temperature_c", self.temperature_c)?;
        Ok(())
    }
}

/// Results from a wire drawing calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireDrawingResult {
    /// Area reduction (%)
    pub reduction_ratio_pct: f64,
    pub reduction_per_pass_pct: f64,
    /// ln(A₀/A₁)
    pub true_strain: f64,
    /// Yield strength after temperature derate (MPa)
    pub adjusted_yield_strength_mpa: f64,
    /// (1 + sin α) / (1 + cos α)
    pub angle_factor: f64,
    pub friction_factor: f64,
    pub drawing_stress_mpa: f64,
    pub drawing_force_n: f64,
    pub drawing_power_kw: f64,
    pub die_stress_mpa: f64,
    pub work_done_kj: f64,
    /// Ideal work over actual work (%), capped at 95
    pub efficiency_pct: f64,
    pub recommendations: Vec<String>,
}

/// Calculate a wire drawing operation.
pub fn calculate(input: &WireDrawingInput) -> CalcResult<WireDrawingResult> {
    let material = validate_material(&DRAWING_MATERIALS, &input.material)?;
    input.validate()?;

    let d0 = input.initial_diameter_mm;
    let d1 = input.final_diameter_mm;
    let initial_area_mm2 = PI * (d0 / 2.0).powi(2);
    let final_area_mm2 = PI * (d1 / 2.0).powi(2);
    let area_log_ratio = (initial_area_mm2 / final_area_mm2).ln();

    let reduction_ratio_pct = (initial_area_mm2 - final_area_mm2) / initial_area_mm2 * 100.0;
    let reduction_per_pass_pct = reduction_ratio_pct / input.number_of_passes as f64;
    let true_strain = area_log_ratio;

    let adjusted_yield_strength_mpa =
        material.yield_strength_mpa * temperature_factor(input.temperature_c, YIELD_DERATE_PER_C);

    let die_angle_rad = input.die_angle_deg.to_radians();
    let angle_factor = (1.0 + die_angle_rad.sin()) / (1.0 + die_angle_rad.cos());
    let friction_factor = if input.lubrication {
        material.friction_coefficient * 0.5
    } else {
        material.friction_coefficient
    };

    // === Stress, force, power ===
    let drawing_stress_mpa = adjusted_yield_strength_mpa
        * (1.0 + friction_factor / (die_angle_rad / 2.0).tan())
        * area_log_ratio;
    let drawing_force_n = drawing_stress_mpa * final_area_mm2;
    let drawing_power_kw = drawing_force_n * input.drawing_speed_m_min / 60_000.0;
    let die_stress_mpa = drawing_stress_mpa * angle_factor;

    // === Work and efficiency over the same draw length ===
    let draw_length_mm = d0 - d1;
    let work_done_kj = drawing_force_n * draw_length_mm / 1.0e6;
    let ideal_work_kj = adjusted_yield_strength_mpa * final_area_mm2 * true_strain * draw_length_mm / 1.0e6;
    let efficiency_pct = (ideal_work_kj / work_done_kj * 100.0).min(MAX_EFFICIENCY_PCT);

    let (min_angle, max_angle) = OPTIMAL_DIE_ANGLE_DEG;
    let recommendations = generate_recommendations(
        vec![
            Check::new(
                reduction_per_pass_pct > material.reduction_limit_pct,
                format!(
                    "Reduction per pass ({:.1}%) exceeds the {:.0}% limit for {}; increase the number of passes",
                    reduction_per_pass_pct, material.reduction_limit_pct, material.name
                ),
            ),
            Check::new(
                input.die_angle_deg < min_angle || input.die_angle_deg > max_angle,
                format!(
                    "Die angle of {}° is outside the optimal {}°-{}° range",
                    input.die_angle_deg, min_angle, max_angle
                ),
            ),
            Check::new(
                !input.lubrication,
                "Use lubrication to reduce friction and die wear",
            ),
            Check::new(
                die_stress_mpa > 3.0 * material.ultimate_strength_mpa,
                "Die stress is excessive; reduce the reduction per pass or the die angle",
            ),
            Check::new(
                efficiency_pct < 70.0,
                "Drawing efficiency is low; optimize die angle and lubrication",
            ),
            Check::new(
                input.drawing_speed_m_min > 100.0,
                "High drawing speed; ensure adequate cooling and lubrication",
            ),
        ],
        OPTIMAL_RANGE_MESSAGE,
    );

    debug!(
        material = %input.material,
        drawing_force_n,
        efficiency_pct,
        "wire drawing calculation complete"
    );

    Ok(WireDrawingResult {
        reduction_ratio_pct: round_to(reduction_ratio_pct, 2),
        reduction_per_pass_pct: round_to(reduction_per_pass_pct, 2),
        true_strain: round_to(true_strain, 3),
        adjusted_yield_strength_mpa: round_to(adjusted_yield_strength_mpa, 2),
        angle_factor: round_to(angle_factor, 3),
        friction_factor: round_to(friction_factor, 3),
        drawing_stress_mpa: round_to(drawing_stress_mpa, 2),
        drawing_force_n: round_to(drawing_force_n, 2),
        drawing_power_kw: round_to(drawing_power_kw, 3),
        die_stress_mpa: round_to(die_stress_mpa, 2),
        work_done_kj: round_to(work_done_kj, 3),
        efficiency_pct: round_to(efficiency_pct, 2),
        recommendations,
    })
}

//! Drawing and Extrusion Materials

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use crate::shared::Registry;

/// Material properties needed by wire drawing and extrusion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawingMaterial {
    pub name: &'static str,
    /// Yield strength (MPa)
    pub yield_strength_mpa: f64,
    /// Ultimate tensile strength (MPa)
    pub ultimate_strength_mpa: f64,
    /// Largest area reduction a single pass should take (%)
    pub reduction_limit_pct: f64,
    /// Die friction coefficient (dry)
    pub friction_coefficient: f64,
    pub work_hardening_exponent: f64,
    /// Strength coefficient K in σ = K·εⁿ (MPa)
    pub flow_stress_coefficient_mpa: f64,
}

impl DrawingMaterial {
    /// Flow stress at the given true strain (MPa)
    pub fn flow_stress(&self, true_strain: f64) -> f64 {
        self.flow_stress_coefficient_mpa * true_strain.powf(self.work_hardening_exponent)
    }
}

pub static DRAWING_MATERIALS: Lazy<Registry<DrawingMaterial>> = Lazy::new(|| {
    let mut db = HashMap::new();

    db.insert("steel-low-carbon", DrawingMaterial {
        name: "Low Carbon Steel Wire Rod",
        yield_strength_mpa: 250.0,
        ultimate_strength_mpa: 400.0,
        reduction_limit_pct: 30.0,
        friction_coefficient: 0.10,
        work_hardening_exponent: 0.26,
        flow_stress_coefficient_mpa: 530.0,
    });

    db.insert("steel-high-carbon", DrawingMaterial {
        name: "High Carbon Steel Wire Rod",
        yield_strength_mpa: 450.0,
        ultimate_strength_mpa: 750.0,
        reduction_limit_pct: 20.0,
        friction_coefficient: 0.12,
        work_hardening_exponent: 0.18,
        flow_stress_coefficient_mpa: 1150.0,
    });

    db.insert("stainless-steel", DrawingMaterial {
        name: "Stainless Steel 304",
        yield_strength_mpa: 215.0,
        ultimate_strength_mpa: 505.0,
        reduction_limit_pct: 25.0,
        friction_coefficient: 0.12,
        work_hardening_exponent: 0.45,
        flow_stress_coefficient_mpa: 1275.0,
    });

    db.insert("copper", DrawingMaterial {
        name: "Copper ETP",
        yield_strength_mpa: 70.0,
        ultimate_strength_mpa: 220.0,
        reduction_limit_pct: 40.0,
        friction_coefficient: 0.08,
        work_hardening_exponent: 0.54,
        flow_stress_coefficient_mpa: 315.0,
    });

    db.insert("aluminum", DrawingMaterial {
        name: "Aluminum 1350",
        yield_strength_mpa: 55.0,
        ultimate_strength_mpa: 125.0,
        reduction_limit_pct: 35.0,
        friction_coefficient: 0.10,
        work_hardening_exponent: 0.20,
        flow_stress_coefficient_mpa: 205.0,
    });

    db.insert("brass", DrawingMaterial {
        name: "Brass 70-30",
        yield_strength_mpa: 105.0,
        ultimate_strength_mpa: 330.0,
        reduction_limit_pct: 35.0,
        friction_coefficient: 0.09,
        work_hardening_exponent: 0.49,
        flow_stress_coefficient_mpa: 895.0,
    });

    db
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction_limits_in_range() {
        for (key, mat) in DRAWING_MATERIALS.iter() {
            assert!(
                mat.reduction_limit_pct > 0.0 && mat.reduction_limit_pct < 50.0,
                "{} has an implausible reduction limit",
                key
            );
        }
    }
}

//! Forming Materials (rolling, forging)
//!
//! Room-temperature properties of annealed stock. Flow stress follows the
//! Hollomon power law σ = K·εⁿ with the tabulated `strength_coefficient_mpa`
//! and `strain_hardening_exponent`.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use crate::shared::Registry;

/// Material properties needed by bulk forming calculations
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormingMaterial {
    pub name: &'static str,
    /// Density (kg/m³)
    pub density_kg_m3: f64,
    /// Yield strength (MPa)
    pub yield_strength_mpa: f64,
    /// Ultimate tensile strength (MPa)
    pub ultimate_strength_mpa: f64,
    /// Young's modulus (GPa)
    pub youngs_modulus_gpa: f64,
    pub poisson_ratio: f64,
    /// Thermal conductivity (W/m·K)
    pub thermal_conductivity: f64,
    /// Specific heat (J/kg·K)
    pub specific_heat: f64,
    /// Strength coefficient K in σ = K·εⁿ (MPa)
    pub strength_coefficient_mpa: f64,
    /// Strain-hardening exponent n in σ = K·εⁿ
    pub strain_hardening_exponent: f64,
}

impl FormingMaterial {
    /// Flow stress at the given true strain (MPa)
    pub fn flow_stress(&self, true_strain: f64) -> f64 {
        self.strength_coefficient_mpa * true_strain.powf(self.strain_hardening_exponent)
    }
}

pub static FORMING_MATERIALS: Lazy<Registry<FormingMaterial>> = Lazy::new(|| {
    let mut db = HashMap::new();

    // STEELS
    db.insert("steel-low-carbon", FormingMaterial {
        name: "Low Carbon Steel (AISI 1010)",
        density_kg_m3: 7870.0,
        yield_strength_mpa: 250.0,
        ultimate_strength_mpa: 400.0,
        youngs_modulus_gpa: 200.0,
        poisson_ratio: 0.29,
        thermal_conductivity: 51.9,
        specific_heat: 486.0,
        strength_coefficient_mpa: 530.0,
        strain_hardening_exponent: 0.26,
    });

    db.insert("steel-medium-carbon", FormingMaterial {
        name: "Medium Carbon Steel (AISI 1045)",
        density_kg_m3: 7850.0,
        yield_strength_mpa: 310.0,
        ultimate_strength_mpa: 565.0,
        youngs_modulus_gpa: 205.0,
        poisson_ratio: 0.29,
        thermal_conductivity: 49.8,
        specific_heat: 486.0,
        strength_coefficient_mpa: 950.0,
        strain_hardening_exponent: 0.12,
    });

    db.insert("stainless-steel-304", FormingMaterial {
        name: "Stainless Steel 304",
        density_kg_m3: 8000.0,
        yield_strength_mpa: 215.0,
        ultimate_strength_mpa: 505.0,
        youngs_modulus_gpa: 193.0,
        poisson_ratio: 0.29,
        thermal_conductivity: 16.2,
        specific_heat: 500.0,
        strength_coefficient_mpa: 1275.0,
        strain_hardening_exponent: 0.45,
    });

    // ALUMINUM
    db.insert("aluminum-1100", FormingMaterial {
        name: "Aluminum 1100-O",
        density_kg_m3: 2710.0,
        yield_strength_mpa: 34.0,
        ultimate_strength_mpa: 90.0,
        youngs_modulus_gpa: 69.0,
        poisson_ratio: 0.33,
        thermal_conductivity: 222.0,
        specific_heat: 904.0,
        strength_coefficient_mpa: 180.0,
        strain_hardening_exponent: 0.20,
    });

    db.insert("aluminum-6061", FormingMaterial {
        name: "Aluminum 6061-O",
        density_kg_m3: 2700.0,
        yield_strength_mpa: 55.0,
        ultimate_strength_mpa: 125.0,
        youngs_modulus_gpa: 69.0,
        poisson_ratio: 0.33,
        thermal_conductivity: 167.0,
        specific_heat: 896.0,
        strength_coefficient_mpa: 205.0,
        strain_hardening_exponent: 0.20,
    });

    // COPPER ALLOYS
    db.insert("copper", FormingMaterial {
        name: "Copper (annealed)",
        density_kg_m3: 8960.0,
        yield_strength_mpa: 70.0,
        ultimate_strength_mpa: 220.0,
        youngs_modulus_gpa: 117.0,
        poisson_ratio: 0.34,
        thermal_conductivity: 391.0,
        specific_heat: 385.0,
        strength_coefficient_mpa: 315.0,
        strain_hardening_exponent: 0.54,
    });

    db.insert("brass", FormingMaterial {
        name: "Brass 70-30 (annealed)",
        density_kg_m3: 8530.0,
        yield_strength_mpa: 105.0,
        ultimate_strength_mpa: 330.0,
        youngs_modulus_gpa: 110.0,
        poisson_ratio: 0.35,
        thermal_conductivity: 120.0,
        specific_heat: 375.0,
        strength_coefficient_mpa: 895.0,
        strain_hardening_exponent: 0.49,
    });

    // TITANIUM
    db.insert("titanium-grade-2", FormingMaterial {
        name: "Titanium Grade 2 (CP)",
        density_kg_m3: 4510.0,
        yield_strength_mpa: 275.0,
        ultimate_strength_mpa: 345.0,
        youngs_modulus_gpa: 105.0,
        poisson_ratio: 0.37,
        thermal_conductivity: 16.4,
        specific_heat: 523.0,
        strength_coefficient_mpa: 600.0,
        strain_hardening_exponent: 0.15,
    });

    db
});

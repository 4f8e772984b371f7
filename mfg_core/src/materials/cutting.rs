//! Cutting Materials (punching, shearing)
//!
//! Sheet and plate stock properties. Shear strength drives the press
//! force; Brinell hardness drives tool wear and clearance selection.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use crate::shared::Registry;

/// Material properties needed by sheet cutting calculations
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CuttingMaterial {
    pub name: &'static str,
    /// Ultimate shear strength (MPa)
    pub shear_strength_mpa: f64,
    /// Ultimate tensile strength (MPa)
    pub tensile_strength_mpa: f64,
    /// Brinell hardness (HB)
    pub hardness_hb: f64,
    /// Density (kg/m³)
    pub density_kg_m3: f64,
    /// Thermal conductivity (W/m·K)
    pub thermal_conductivity: f64,
    /// Specific heat (J/kg·K)
    pub specific_heat: f64,
    pub work_hardening_exponent: f64,
    pub friction_coefficient: f64,
}

pub static CUTTING_MATERIALS: Lazy<Registry<CuttingMaterial>> = Lazy::new(|| {
    let mut db = HashMap::new();

    db.insert("steel-mild", CuttingMaterial {
        name: "Mild Steel (AISI 1018)",
        shear_strength_mpa: 310.0,
        tensile_strength_mpa: 440.0,
        hardness_hb: 126.0,
        density_kg_m3: 7870.0,
        thermal_conductivity: 51.9,
        specific_heat: 486.0,
        work_hardening_exponent: 0.26,
        friction_coefficient: 0.15,
    });

    db.insert("steel-high-strength", CuttingMaterial {
        name: "High Strength Low Alloy Steel",
        shear_strength_mpa: 450.0,
        tensile_strength_mpa: 600.0,
        hardness_hb: 180.0,
        density_kg_m3: 7850.0,
        thermal_conductivity: 45.0,
        specific_heat: 475.0,
        work_hardening_exponent: 0.20,
        friction_coefficient: 0.14,
    });

    db.insert("stainless-steel-304", CuttingMaterial {
        name: "Stainless Steel 304",
        shear_strength_mpa: 390.0,
        tensile_strength_mpa: 515.0,
        hardness_hb: 170.0,
        density_kg_m3: 8000.0,
        thermal_conductivity: 16.2,
        specific_heat: 500.0,
        work_hardening_exponent: 0.45,
        friction_coefficient: 0.18,
    });

    db.insert("aluminum-5052", CuttingMaterial {
        name: "Aluminum 5052-H32",
        shear_strength_mpa: 138.0,
        tensile_strength_mpa: 228.0,
        hardness_hb: 60.0,
        density_kg_m3: 2680.0,
        thermal_conductivity: 138.0,
        specific_heat: 880.0,
        work_hardening_exponent: 0.13,
        friction_coefficient: 0.25,
    });

    db.insert("aluminum-6061", CuttingMaterial {
        name: "Aluminum 6061-T6",
        shear_strength_mpa: 207.0,
        tensile_strength_mpa: 310.0,
        hardness_hb: 95.0,
        density_kg_m3: 2700.0,
        thermal_conductivity: 167.0,
        specific_heat: 896.0,
        work_hardening_exponent: 0.05,
        friction_coefficient: 0.20,
    });

    db.insert("copper", CuttingMaterial {
        name: "Copper C110 (half hard)",
        shear_strength_mpa: 150.0,
        tensile_strength_mpa: 250.0,
        hardness_hb: 50.0,
        density_kg_m3: 8960.0,
        thermal_conductivity: 391.0,
        specific_heat: 385.0,
        work_hardening_exponent: 0.54,
        friction_coefficient: 0.20,
    });

    db.insert("brass", CuttingMaterial {
        name: "Brass C260 (half hard)",
        shear_strength_mpa: 240.0,
        tensile_strength_mpa: 340.0,
        hardness_hb: 80.0,
        density_kg_m3: 8530.0,
        thermal_conductivity: 120.0,
        specific_heat: 375.0,
        work_hardening_exponent: 0.49,
        friction_coefficient: 0.18,
    });

    db
});

//! Machining Materials (turning, milling, drilling)
//!
//! Workpiece properties plus recommended surface speeds per cutting tool
//! material. Machinability is a 0-100 relative rating used to scale Taylor
//! tool-life constants.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::shared::Registry;

/// Cutting tool material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolMaterial {
    /// High speed steel
    Hss,
    Carbide,
    Ceramic,
    /// Polycrystalline diamond
    Diamond,
}

impl ToolMaterial {
    pub const ALL: [ToolMaterial; 4] = [
        ToolMaterial::Hss,
        ToolMaterial::Carbide,
        ToolMaterial::Ceramic,
        ToolMaterial::Diamond,
    ];
}

impl std::fmt::Display for ToolMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolMaterial::Hss => write!(f, "HSS"),
            ToolMaterial::Carbide => write!(f, "Carbide"),
            ToolMaterial::Ceramic => write!(f, "Ceramic"),
            ToolMaterial::Diamond => write!(f, "Diamond"),
        }
    }
}

/// Recommended cutting speed (m/min) by tool material
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecommendedSpeeds {
    pub hss: f64,
    pub carbide: f64,
    pub ceramic: f64,
    pub diamond: f64,
}

impl RecommendedSpeeds {
    pub fn for_tool(&self, tool: ToolMaterial) -> f64 {
        match tool {
            ToolMaterial::Hss => self.hss,
            ToolMaterial::Carbide => self.carbide,
            ToolMaterial::Ceramic => self.ceramic,
            ToolMaterial::Diamond => self.diamond,
        }
    }
}

/// Material properties needed by machining calculations
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MachiningMaterial {
    pub name: &'static str,
    /// Brinell hardness (HB)
    pub hardness_hb: f64,
    /// Ultimate tensile strength (MPa)
    pub tensile_strength_mpa: f64,
    /// Thermal conductivity (W/m·K)
    pub thermal_conductivity: f64,
    /// Specific heat (J/kg·K)
    pub specific_heat: f64,
    /// Density (kg/m³)
    pub density_kg_m3: f64,
    /// Relative machinability, 0-100
    pub machinability_rating: f64,
    /// Iron-based; diamond tooling is unsuitable
    pub ferrous: bool,
    pub recommended_speed_m_min: RecommendedSpeeds,
}

impl MachiningMaterial {
    /// Recommended cutting speed (m/min) for the given tool
    pub fn recommended_speed(&self, tool: ToolMaterial) -> f64 {
        self.recommended_speed_m_min.for_tool(tool)
    }
}

pub static MACHINING_MATERIALS: Lazy<Registry<MachiningMaterial>> = Lazy::new(|| {
    let mut db = HashMap::new();

    // FERROUS
    db.insert("steel-mild", MachiningMaterial {
        name: "Mild Steel (AISI 1018)",
        hardness_hb: 126.0,
        tensile_strength_mpa: 440.0,
        thermal_conductivity: 51.9,
        specific_heat: 486.0,
        density_kg_m3: 7870.0,
        machinability_rating: 70.0,
        ferrous: true,
        recommended_speed_m_min: RecommendedSpeeds {
            hss: 30.0,
            carbide: 150.0,
            ceramic: 400.0,
            diamond: 100.0,
        },
    });

    db.insert("steel-alloy-4140", MachiningMaterial {
        name: "Alloy Steel 4140 (annealed)",
        hardness_hb: 197.0,
        tensile_strength_mpa: 655.0,
        thermal_conductivity: 42.6,
        specific_heat: 473.0,
        density_kg_m3: 7850.0,
        machinability_rating: 55.0,
        ferrous: true,
        recommended_speed_m_min: RecommendedSpeeds {
            hss: 20.0,
            carbide: 120.0,
            ceramic: 300.0,
            diamond: 80.0,
        },
    });

    db.insert("stainless-steel-304", MachiningMaterial {
        name: "Stainless Steel 304",
        hardness_hb: 170.0,
        tensile_strength_mpa: 515.0,
        thermal_conductivity: 16.2,
        specific_heat: 500.0,
        density_kg_m3: 8000.0,
        machinability_rating: 45.0,
        ferrous: true,
        recommended_speed_m_min: RecommendedSpeeds {
            hss: 15.0,
            carbide: 100.0,
            ceramic: 250.0,
            diamond: 60.0,
        },
    });

    db.insert("cast-iron-gray", MachiningMaterial {
        name: "Gray Cast Iron (Class 30)",
        hardness_hb: 200.0,
        tensile_strength_mpa: 250.0,
        thermal_conductivity: 46.0,
        specific_heat: 460.0,
        density_kg_m3: 7200.0,
        machinability_rating: 65.0,
        ferrous: true,
        recommended_speed_m_min: RecommendedSpeeds {
            hss: 25.0,
            carbide: 120.0,
            ceramic: 500.0,
            diamond: 100.0,
        },
    });

    // NON-FERROUS
    db.insert("aluminum-6061", MachiningMaterial {
        name: "Aluminum 6061-T6",
        hardness_hb: 95.0,
        tensile_strength_mpa: 310.0,
        thermal_conductivity: 167.0,
        specific_heat: 896.0,
        density_kg_m3: 2700.0,
        machinability_rating: 90.0,
        ferrous: false,
        recommended_speed_m_min: RecommendedSpeeds {
            hss: 120.0,
            carbide: 600.0,
            ceramic: 1000.0,
            diamond: 1500.0,
        },
    });

    db.insert("brass-360", MachiningMaterial {
        name: "Free-Cutting Brass C360",
        hardness_hb: 100.0,
        tensile_strength_mpa: 385.0,
        thermal_conductivity: 115.0,
        specific_heat: 380.0,
        density_kg_m3: 8500.0,
        machinability_rating: 100.0,
        ferrous: false,
        recommended_speed_m_min: RecommendedSpeeds {
            hss: 90.0,
            carbide: 300.0,
            ceramic: 600.0,
            diamond: 900.0,
        },
    });

    db.insert("titanium-ti6al4v", MachiningMaterial {
        name: "Titanium Ti-6Al-4V",
        hardness_hb: 334.0,
        tensile_strength_mpa: 950.0,
        thermal_conductivity: 6.7,
        specific_heat: 526.0,
        density_kg_m3: 4430.0,
        machinability_rating: 20.0,
        ferrous: false,
        recommended_speed_m_min: RecommendedSpeeds {
            hss: 10.0,
            carbide: 60.0,
            ceramic: 100.0,
            diamond: 150.0,
        },
    });

    db
});

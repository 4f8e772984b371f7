//! # Tool Life and Machining Economics
//!
//! Taylor's tool-life equation V·Tⁿ = C and the cost model shared by the
//! turning, milling and drilling calculators.
//!
//! | Tool     | n     | C (m/min, at machinability 100) | Cost per edge |
//! |----------|-------|---------------------------------|---------------|
//! | HSS      | 0.125 | 120                             | 15            |
//! | Carbide  | 0.25  | 400                             | 25            |
//! | Ceramic  | 0.5   | 1000                            | 40            |
//! | Diamond  | 0.6   | 1500                            | 150           |

use crate::materials::{MachiningMaterial, ToolMaterial};
use crate::shared::Check;

/// Machine cost per minute of cutting time
pub const MACHINE_COST_PER_MIN: f64 = 1.50;
/// Operator cost per minute of cutting time
pub const LABOR_COST_PER_MIN: f64 = 0.75;
/// Specific cutting force as a multiple of tensile strength
pub const SPECIFIC_FORCE_FACTOR: f64 = 3.5;

/// Recommended speed bounds as fractions of the tabulated speed
const SPEED_HIGH_RATIO: f64 = 1.2;
const SPEED_LOW_RATIO: f64 = 0.5;

/// Taylor constants for a tool/workpiece pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaylorConstants {
    /// Exponent n
    pub n: f64,
    /// Speed for one minute of tool life (m/min)
    pub c: f64,
}

impl TaylorConstants {
    /// Constants for `tool`, with C scaled by machinability (0-100).
    pub fn new(tool: ToolMaterial, machinability_rating: f64) -> Self {
        let (n, base_c) = match tool {
            ToolMaterial::Hss => (0.125, 120.0),
            ToolMaterial::Carbide => (0.25, 400.0),
            ToolMaterial::Ceramic => (0.5, 1000.0),
            ToolMaterial::Diamond => (0.6, 1500.0),
        };
        TaylorConstants {
            n,
            c: base_c * machinability_rating / 100.0,
        }
    }

    /// Tool life T = (C/V)^(1/n) in minutes.
    pub fn tool_life_min(&self, cutting_speed_m_min: f64) -> f64 {
        (self.c / cutting_speed_m_min).powf(1.0 / self.n)
    }
}

/// Replacement cost of one cutting edge.
pub fn tool_cost_per_edge(tool: ToolMaterial) -> f64 {
    match tool {
        ToolMaterial::Hss => 15.0,
        ToolMaterial::Carbide => 25.0,
        ToolMaterial::Ceramic => 40.0,
        ToolMaterial::Diamond => 150.0,
    }
}

/// Cost of one operation: machine and labor time plus the share of tool
/// edge consumed. `tool_share` is the fraction of one edge used.
pub fn operation_cost(machining_time_min: f64, tool: ToolMaterial, tool_share: f64) -> f64 {
    machining_time_min * (MACHINE_COST_PER_MIN + LABOR_COST_PER_MIN)
        + tool_cost_per_edge(tool) * tool_share
}

/// Checks of cutting speed against the material's tabulated speed, plus
/// tool/workpiece compatibility.
pub fn speed_checks(
    material: &MachiningMaterial,
    tool: ToolMaterial,
    cutting_speed_m_min: f64,
) -> Vec<Check> {
    let recommended = material.recommended_speed(tool);
    vec![
        Check::new(
            cutting_speed_m_min > recommended * SPEED_HIGH_RATIO,
            format!(
                "Cutting speed of {} m/min is well above the recommended {} m/min for {} tooling; reduce speed to extend tool life",
                cutting_speed_m_min, recommended, tool
            ),
        ),
        Check::new(
            cutting_speed_m_min < recommended * SPEED_LOW_RATIO,
            format!(
                "Cutting speed of {} m/min is well below the recommended {} m/min for {} tooling; increase speed for productivity",
                cutting_speed_m_min, recommended, tool
            ),
        ),
        Check::new(
            material.ferrous && tool == ToolMaterial::Diamond,
            "Diamond tooling reacts with iron at cutting temperatures; use carbide or ceramic for ferrous work",
        ),
    ]
}

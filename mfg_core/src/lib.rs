//! # mfg_core - Manufacturing Process Calculation Engine
//!
//! `mfg_core` computes forces, power, stresses, tool life, cut quality and
//! rule-based recommendations for metal forming, sheet cutting and
//! machining operations. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Fully Resolved Inputs**: Calculators never apply defaults; see [`defaults`]
//!
//! ## Quick Start
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
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("rolling_force_n"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Process calculators and the [`ProcessInput`] envelope
//! - [`materials`] - Forming, cutting, drawing and machining material registries
//! - [`shared`] - Material lookup, recommendations, rounding, temperature derating
//! - [`units`] - Length, force, power, pressure and temperature conversion
//! - [`defaults`] - Caller-side defaults for optional process settings
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod defaults;
pub mod errors;
pub mod materials;
pub mod shared;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{optimize_clearance, ClearanceRecommendation, ProcessInput, ProcessOutput};
pub use defaults::ProcessDefaults;
pub use errors::{CalcError, CalcResult};
pub use materials::{MaterialFamily, ToolMaterial};
pub use shared::{generate_recommendations, validate_material, Check, CutQuality};

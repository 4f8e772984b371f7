//! # Process Calculations
//!
//! This module contains all manufacturing process calculators. Each
//! calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Every calculator looks up its material first, then validates the numeric
//! inputs. No calculator calls another; chaining operations is left to the
//! caller.
//!
//! ## Available Calculations
//!
//! Metal forming:
//! - [`rolling`] - Flat rolling of strip
//! - [`forging`] - Open-die upset forging
//! - [`wire_drawing`] - Wire drawing through a conical die
//! - [`extrusion`] - Direct and indirect rod extrusion
//!
//! Sheet cutting:
//! - [`punching`] - Hole punching with clearance-based quality
//! - [`shearing`] - Guillotine shearing
//! - [`clearance`] - Optimal die clearance lookup
//!
//! Machining:
//! - [`turning`], [`milling`], [`drilling`]
//! - [`tool_life`] - Taylor tool life and cost model shared by the above

pub mod clearance;
pub mod drilling;
pub mod extrusion;
pub mod forging;
pub mod milling;
pub mod punching;
pub mod rolling;
pub mod shearing;
pub mod tool_life;
pub mod turning;
pub mod wire_drawing;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use clearance::{optimize_clearance, ClearanceRecommendation};
pub use drilling::{DrillingInput, DrillingResult};
pub use extrusion::{ExtrusionInput, ExtrusionResult, ExtrusionType};
pub use forging::{DieType, ForgingInput, ForgingResult};
pub use milling::{MillingInput, MillingResult};
pub use punching::{PunchingInput, PunchingResult};
pub use rolling::{RollingInput, RollingResult};
pub use shearing::{ShearingInput, ShearingResult};
pub use turning::{TurningInput, TurningResult};
pub use wire_drawing::{WireDrawingInput, WireDrawingResult};

/// Enum wrapper for all process inputs.
///
/// Lets JSON callers submit any calculation as one document, selected by the
/// `process` field:
///
/// ```json
/// { "process": "forging", "material": "copper", "initial_height_mm": 40.0, ... }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "process", rename_all = "snake_case")]
pub enum ProcessInput {
    Rolling(RollingInput),
    Forging(ForgingInput),
    WireDrawing(WireDrawingInput),
    Extrusion(ExtrusionInput),
    Punching(PunchingInput),
    Shearing(ShearingInput),
    Turning(TurningInput),
    Milling(MillingInput),
    Drilling(DrillingInput),
}

/// Result of a [`ProcessInput`], tagged with the same `process` name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "process", rename_all = "snake_case")]
pub enum ProcessOutput {
    Rolling(RollingResult),
    Forging(ForgingResult),
    WireDrawing(WireDrawingResult),
    Extrusion(ExtrusionResult),
    Punching(PunchingResult),
    Shearing(ShearingResult),
    Turning(TurningResult),
    Milling(MillingResult),
    Drilling(DrillingResult),
}

impl ProcessInput {
    /// Run the matching calculator.
    pub fn calculate(&self) -> CalcResult<ProcessOutput> {
        Ok(match self {
            ProcessInput::Rolling(i) => ProcessOutput::Rolling(rolling::calculate(i)?),
            ProcessInput::Forging(i) => ProcessOutput::Forging(forging::calculate(i)?),
            ProcessInput::WireDrawing(i) => ProcessOutput::WireDrawing(wire_drawing::calculate(i)?),
            ProcessInput::Extrusion(i) => ProcessOutput::Extrusion(extrusion::calculate(i)?),
            ProcessInput::Punching(i) => ProcessOutput::Punching(punching::calculate(i)?),
            ProcessInput::Shearing(i) => ProcessOutput::Shearing(shearing::calculate(i)?),
            ProcessInput::Turning(i) => ProcessOutput::Turning(turning::calculate(i)?),
            ProcessInput::Milling(i) => ProcessOutput::Milling(milling::calculate(i)?),
            ProcessInput::Drilling(i) => ProcessOutput::Drilling(drilling::calculate(i)?),
        })
    }

    /// Get the process name as used in the `process` tag
    pub fn process_name(&self) -> &'static str {
        match self {
            ProcessInput::Rolling(_) => "rolling",
            ProcessInput::Forging(_) => "forging",
            ProcessInput::WireDrawing(_) => "wire_drawing",
            ProcessInput::Extrusion(_) => "extrusion",
            ProcessInput::Punching(_) => "punching",
            ProcessInput::Shearing(_) => "shearing",
            ProcessInput::Turning(_) => "turning",
            ProcessInput::Milling(_) => "milling",
            ProcessInput::Drilling(_) => "drilling",
        }
    }

    /// Get the material registry key
    pub fn material(&self) -> &str {
        match self {
            ProcessInput::Rolling(i) => &i.material,
            ProcessInput::Forging(i) => &i.material,
            ProcessInput::WireDrawing(i) => &i.material,
            ProcessInput::Extrusion(i) => &i.material,
            ProcessInput::Punching(i) => &i.material,
            ProcessInput::Shearing(i) => &i.material,
            ProcessInput::Turning(i) => &i.material,
            ProcessInput::Milling(i) => &i.material,
            ProcessInput::Drilling(i) => &i.material,
        }
    }
}

impl ProcessOutput {
    /// Recommendations, for processes that produce them
    pub fn recommendations(&self) -> Option<&[String]> {
        match self {
            ProcessOutput::Rolling(_) | ProcessOutput::Forging(_) => None,
            ProcessOutput::WireDrawing(r) => Some(&r.recommendations),
            ProcessOutput::Extrusion(r) => Some(&r.recommendations),
            ProcessOutput::Punching(r) => Some(&r.recommendations),
            ProcessOutput::Shearing(r) => Some(&r.recommendations),
            ProcessOutput::Turning(r) => Some(&r.recommendations),
            ProcessOutput::Milling(r) => Some(&r.recommendations),
            ProcessOutput::Drilling(r) => Some(&r.recommendations),
        }
    }
}

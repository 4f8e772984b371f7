//! # Materials Database
//!
//! Static property tables for the four process families. Each family has its
//! own registry and its own record shape; the same key in two registries may
//! describe different materials (e.g. `aluminum-6061` is annealed stock in the
//! forming table and T6 in the cutting table).
//!
//! | Registry              | Record              | Used by                         |
//! |-----------------------|---------------------|---------------------------------|
//! | [`FORMING_MATERIALS`] | [`FormingMaterial`] | rolling, forging                |
//! | [`CUTTING_MATERIALS`] | [`CuttingMaterial`] | punching, shearing, clearance   |
//! | [`DRAWING_MATERIALS`] | [`DrawingMaterial`] | wire drawing, extrusion         |
//! | [`MACHINING_MATERIALS`] | [`MachiningMaterial`] | turning, milling, drilling  |
//!
//! Registries are built once on first access and are read-only afterwards,
//! so they can be shared freely between threads.
//!
//! ## Example
//!
//! ```rust
//! use mfg_core::materials::{MaterialFamily, FORMING_MATERIALS};
//!
//! let steel = &FORMING_MATERIALS["steel-low-carbon"];
//! println!("K = {} MPa, n = {}", steel.strength_coefficient_mpa, steel.strain_hardening_exponent);
//!
//! assert!(MaterialFamily::Forming.keys().contains(&"copper"));
//! ```

pub mod cutting;
pub mod drawing;
pub mod forming;
pub mod machining;

pub use cutting::{CuttingMaterial, CUTTING_MATERIALS};
pub use drawing::{DrawingMaterial, DRAWING_MATERIALS};
pub use forming::{FormingMaterial, FORMING_MATERIALS};
pub use machining::{MachiningMaterial, ToolMaterial, MACHINING_MATERIALS};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CalcError;
use crate::shared::Registry;

/// The four independent material tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialFamily {
    Forming,
    Cutting,
    Drawing,
    Machining,
}

impl MaterialFamily {
    pub const ALL: [MaterialFamily; 4] = [
        MaterialFamily::Forming,
        MaterialFamily::Cutting,
        MaterialFamily::Drawing,
        MaterialFamily::Machining,
    ];

    /// Sorted registry keys for this family
    pub fn keys(&self) -> Vec<&'static str> {
        match self {
            MaterialFamily::Forming => sorted_keys(&FORMING_MATERIALS),
            MaterialFamily::Cutting => sorted_keys(&CUTTING_MATERIALS),
            MaterialFamily::Drawing => sorted_keys(&DRAWING_MATERIALS),
            MaterialFamily::Machining => sorted_keys(&MACHINING_MATERIALS),
        }
    }

    /// `(key, display name)` pairs, sorted by key
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        self.keys()
            .into_iter()
            .filter_map(|key| self.display_name(key).map(|name| (key, name)))
            .collect()
    }

    /// Display name of `key` in this family's registry
    pub fn display_name(&self, key: &str) -> Option<&'static str> {
        match self {
            MaterialFamily::Forming => FORMING_MATERIALS.get(key).map(|m| m.name),
            MaterialFamily::Cutting => CUTTING_MATERIALS.get(key).map(|m| m.name),
            MaterialFamily::Drawing => DRAWING_MATERIALS.get(key).map(|m| m.name),
            MaterialFamily::Machining => MACHINING_MATERIALS.get(key).map(|m| m.name),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialFamily::Forming => "forming",
            MaterialFamily::Cutting => "cutting",
            MaterialFamily::Drawing => "drawing",
            MaterialFamily::Machining => "machining",
        }
    }
}

impl FromStr for MaterialFamily {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "forming" => Ok(MaterialFamily::Forming),
            "cutting" => Ok(MaterialFamily::Cutting),
            "drawing" | "extrusion" => Ok(MaterialFamily::Drawing),
            "machining" => Ok(MaterialFamily::Machining),
            other => Err(CalcError::invalid_input(
                "family",
                other,
                "Expected one of: forming, cutting, drawing, machining",
            )),
        }
    }
}

impl std::fmt::Display for MaterialFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn sorted_keys<M>(registry: &Registry<M>) -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = registry.keys().copied().collect();
    keys.sort_unstable();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registries_not_empty() {
        for family in MaterialFamily::ALL {
            assert!(!family.keys().is_empty(), "{} registry is empty", family);
        }
    }

    #[test]
    fn test_keys_sorted() {
        let keys = MaterialFamily::Machining.keys();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_same_key_different_records() {
        assert_ne!(
            MaterialFamily::Forming.display_name("aluminum-6061"),
            MaterialFamily::Cutting.display_name("aluminum-6061")
        );
    }

    #[test]
    fn test_family_parse() {
        assert_eq!("Forming".parse::<MaterialFamily>().unwrap(), MaterialFamily::Forming);
        assert_eq!("extrusion".parse::<MaterialFamily>().unwrap(), MaterialFamily::Drawing);
        assert!("casting".parse::<MaterialFamily>().is_err());
    }

    #[test]
    fn test_registry_keys_are_distinct() {
        // a repeated db.insert key would silently overwrite and shrink these
        assert_eq!(FORMING_MATERIALS.len(), 8);
        assert_eq!(CUTTING_MATERIALS.len(), 7);
        assert_eq!(DRAWING_MATERIALS.len(), 6);
        assert_eq!(MACHINING_MATERIALS.len(), 7);

        assert_eq!(
            MaterialFamily::Drawing.keys(),
            vec![
                "aluminum",
                "brass",
                "copper",
                "stainless-steel",
                "steel-high-carbon",
                "steel-low-carbon",
            ]
        );
        for key in ["titanium-grade-2", "aluminum-1100", "steel-medium-carbon"] {
            assert!(FORMING_MATERIALS.contains_key(key), "{}", key);
        }
        for key in ["steel-high-strength", "aluminum-5052"] {
            assert!(CUTTING_MATERIALS.contains_key(key), "{}", key);
        }
        for key in ["cast-iron-gray", "brass-360", "titanium-ti6al4v"] {
            assert!(MACHINING_MATERIALS.contains_key(key), "{}", key);
        }
    }

    #[test]
    fn test_entries_have_names() {
        let entries = MaterialFamily::Cutting.entries();
        assert_eq!(entries.len(), CUTTING_MATERIALS.len());
        assert!(entries.iter().all(|(_, name)| !name.is_empty()));
    }
}

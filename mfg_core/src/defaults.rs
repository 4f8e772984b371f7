//! # Process Defaults
//!
//! Caller-side defaults for optional process settings. Calculators always
//! take fully resolved inputs; this layer fills omitted keys in a raw JSON
//! document before it is deserialized into a [`ProcessInput`].
//!
//! ## Example
//!
//! ```rust
//! use mfg_core::defaults::ProcessDefaults;
//! use serde_json::json;
//!
//! let defaults = ProcessDefaults::from_toml_str("temperature_c = 25.0").unwrap();
//! let input = defaults
//!     .resolve(json!({
//!         "process": "rolling",
//!         "material": "aluminum-1100",
//!         "initial_thickness_mm": 4.0,
//!         "final_thickness_mm": 3.0,
//!         "width_mm": 200.0,
//!         "roll_diameter_mm": 250.0,
//!         "rolling_speed_m_s": 1.0
//!     }))
//!     .unwrap();
//!
//! assert_eq!(input.process_name(), "rolling");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::calculations::ProcessInput;
use crate::errors::{CalcError, CalcResult};
use crate::shared::REFERENCE_TEMPERATURE_C;

/// Default values for optional process settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessDefaults {
    /// Workpiece temperature (°C)
    pub temperature_c: f64,
    /// Tool/workpiece friction coefficient
    pub friction_coefficient: f64,
    pub lubrication: bool,
}

impl Default for ProcessDefaults {
    fn default() -> Self {
        Self {
            temperature_c: REFERENCE_TEMPERATURE_C,
            friction_coefficient: 0.1,
            lubrication: true,
        }
    }
}

/// Optional keys carried by each process
fn optional_keys(process: &str) -> &'static [&'static str] {
    match process {
        "rolling" | "forging" => &["temperature_c", "friction_coefficient"],
        "wire_drawing" | "extrusion" | "punching" => &["temperature_c", "lubrication"],
        _ => &[],
    }
}

impl ProcessDefaults {
    /// Parse defaults from TOML. Missing keys keep their built-in values.
    pub fn from_toml_str(s: &str) -> CalcResult<Self> {
        Ok(toml::from_str(s)?)
    }

    fn value_for(&self, key: &str) -> Value {
        match key {
            "temperature_c" => Value::from(self.temperature_c),
            "friction_coefficient" => Value::from(self.friction_coefficient),
            "lubrication" => Value::from(self.lubrication),
            _ => Value::Null,
        }
    }

    /// Fill omitted or null optional keys of a raw process document, then
    /// deserialize it.
    pub fn resolve(&self, mut raw: Value) -> CalcResult<ProcessInput> {
        let fields: &mut Map<String, Value> = raw
            .as_object_mut()
            .ok_or_else(|| CalcError::serialization("process input must be a JSON object"))?;

        let process = fields
            .get("process")
            .and_then(Value::as_str)
            .ok_or_else(|| CalcError::serialization("missing \"process\" field"))?
            .to_string();

        for key in optional_keys(&process) {
            if fields.get(*key).map_or(true, Value::is_null) {
                fields.insert((*key).to_string(), self.value_for(key));
            }
        }

        Ok(serde_json::from_value(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn punching_doc() -> Value {
        json!({
            "process": "punching",
            "material": "steel-mild",
            "thickness_mm": 2.0,
            "hole_diameter_mm": 20.0,
            "punch_diameter_mm": 19.8,
            "clearance_pct": 5.0,
            "punch_speed_spm": 100.0
        })
    }

    #[test]
    fn test_builtin_defaults() {
        let defaults = ProcessDefaults::default();
        assert_eq!(defaults.temperature_c, 20.0);
        assert_eq!(defaults.friction_coefficient, 0.1);
        assert!(defaults.lubrication);
    }

    #[test]
    fn test_partial_toml() {
        let defaults = ProcessDefaults::from_toml_str("lubrication = false\n").unwrap();
        assert!(!defaults.lubrication);
        assert_eq!(defaults.temperature_c, 20.0);
    }

    #[test]
    fn test_invalid_toml() {
        let err = ProcessDefaults::from_toml_str("temperature_c = \"hot\"").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_fills_missing_temperature() {
        let defaults = ProcessDefaults {
            temperature_c: 35.0,
            ..ProcessDefaults::default()
        };
        match defaults.resolve(punching_doc()).unwrap() {
            ProcessInput::Punching(p) => {
                assert_eq!(p.temperature_c, 35.0);
                assert!(p.lubrication);
            }
            other => panic!("unexpected input: {:?}", other),
        }
    }

    #[test]
    fn test_explicit_value_respected() {
        let mut doc = punching_doc();
        doc["temperature_c"] = json!(80.0);
        doc["lubrication"] = json!(false);

        match ProcessDefaults::default().resolve(doc).unwrap() {
            ProcessInput::Punching(p) => {
                assert_eq!(p.temperature_c, 80.0);
                assert!(!p.lubrication);
            }
            other => panic!("unexpected input: {:?}", other),
        }
    }

    #[test]
    fn test_null_is_filled() {
        let mut doc = punching_doc();
        doc["temperature_c"] = Value::Null;
        let input = ProcessDefaults::default().resolve(doc).unwrap();
        assert!(matches!(input, ProcessInput::Punching(p) if p.temperature_c == 20.0));
    }

    #[test]
    fn test_friction_default_for_forging() {
        let doc = json!({
            "process": "forging",
            "material": "copper",
            "initial_height_mm": 40.0,
            "final_height_mm": 30.0,
            "diameter_mm": 25.0,
            "die_type": "grooved"
        });
        match ProcessDefaults::default().resolve(doc).unwrap() {
            ProcessInput::Forging(f) => assert_eq!(f.friction_coefficient, 0.1),
            other => panic!("unexpected input: {:?}", other),
        }
    }

    #[test]
    fn test_machining_requires_all_fields() {
        let doc = json!({
            "process": "drilling",
            "material": "steel-mild",
            "drill_diameter_mm": 8.0
        });
        let err = ProcessDefaults::default().resolve(doc).unwrap_err();
        assert!(matches!(err, CalcError::SerializationError { .. }));
    }

    #[test]
    fn test_missing_process_tag() {
        let err = ProcessDefaults::default().resolve(json!({"material": "copper"})).unwrap_err();
        assert!(err.to_string().contains("process"));

        assert!(ProcessDefaults::default().resolve(json!([1, 2])).is_err());
    }
}

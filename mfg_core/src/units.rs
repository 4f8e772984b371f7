//! # Unit Conversion
//!
//! Scalar conversion helpers for the quantities the process calculators
//! report. The calculators themselves work in a fixed metric set (mm, N, MPa,
//! kW, °C); these helpers let callers present or accept other units.
//!
//! Each linear quantity is a table of factors to a base unit, so a conversion
//! is `value * from_factor / to_factor`. Temperature needs offsets and is
//! handled separately.
//!
//! ## Example
//!
//! ```rust
//! use mfg_core::units::{convert_force, convert_length};
//!
//! assert_eq!(convert_length(1000.0, "mm", "m").unwrap(), 1.0);
//! assert_eq!(convert_force(2.0, "kN", "N").unwrap(), 2000.0);
//! assert!(convert_length(1.0, "furlong", "m").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};

macro_rules! unit_table {
    (
        $(#[$meta:meta])*
        $name:ident, $quantity:literal {
            $( $variant:ident => $symbol:literal, $factor:expr; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $symbol)] $variant, )+
        }

        impl $name {
            /// All units of this quantity, in table order
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            /// Multiplier that takes a value in this unit to the base unit
            pub fn factor(self) -> f64 {
                match self {
                    $( $name::$variant => $factor, )+
                }
            }

            /// Unit symbol as accepted by `from_str`
            pub fn symbol(self) -> &'static str {
                match self {
                    $( $name::$variant => $symbol, )+
                }
            }

            /// Convert `value` from this unit to `to`
            pub fn convert(self, value: f64, to: $name) -> f64 {
                value * self.factor() / to.factor()
            }
        }

        impl FromStr for $name {
            type Err = CalcError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $( $symbol => Ok($name::$variant), )+
                    other => Err(CalcError::unknown_unit($quantity, other)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.symbol())
            }
        }
    };
}

// ============================================================================
// Length (base: millimetre)
// ============================================================================

unit_table! {
    /// Length units
    LengthUnit, "length" {
        Millimeter => "mm", 1.0;
        Centimeter => "cm", 10.0;
        Meter => "m", 1000.0;
        Inch => "in", 25.4;
        Foot => "ft", 304.8;
    }
}

// ============================================================================
// Force (base: newton)
// ============================================================================

unit_table! {
    /// Force units
    ForceUnit, "force" {
        Newton => "N", 1.0;
        Kilonewton => "kN", 1000.0;
        PoundForce => "lbf", 4.448_221_615_260_5;
        KilogramForce => "kgf", 9.806_65;
    }
}

// ============================================================================
// Power (base: watt)
// ============================================================================

unit_table! {
    /// Power units
    PowerUnit, "power" {
        Watt => "W", 1.0;
        Kilowatt => "kW", 1000.0;
        Horsepower => "hp", 745.699_871_582_270_2;
    }
}

// ============================================================================
// Pressure (base: pascal)
// ============================================================================

unit_table! {
    /// Pressure / stress units
    PressureUnit, "pressure" {
        Pascal => "Pa", 1.0;
        Kilopascal => "kPa", 1.0e3;
        Megapascal => "MPa", 1.0e6;
        Bar => "bar", 1.0e5;
        Psi => "psi", 6_894.757_293_168_4;
    }
}

// ============================================================================
// Temperature
// ============================================================================

/// Temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
    #[serde(rename = "K")]
    Kelvin,
}

impl TemperatureUnit {
    fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => value - 273.15,
        }
    }

    fn celsius_in(self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Kelvin => celsius + 273.15,
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "C" | "°C" => Ok(TemperatureUnit::Celsius),
            "F" | "°F" => Ok(TemperatureUnit::Fahrenheit),
            "K" => Ok(TemperatureUnit::Kelvin),
            other => Err(CalcError::unknown_unit("temperature", other)),
        }
    }
}

// ============================================================================
// String-keyed helpers
// ============================================================================

/// Convert a length between unit symbols (mm, cm, m, in, ft)
pub fn convert_length(value: f64, from: &str, to: &str) -> CalcResult<f64> {
    Ok(from.parse::<LengthUnit>()?.convert(value, to.parse()?))
}

/// Convert a force between unit symbols (N, kN, lbf, kgf)
pub fn convert_force(value: f64, from: &str, to: &str) -> CalcResult<f64> {
    Ok(from.parse::<ForceUnit>()?.convert(value, to.parse()?))
}

/// Convert a power between unit symbols (W, kW, hp)
pub fn convert_power(value: f64, from: &str, to: &str) -> CalcResult<f64> {
    Ok(from.parse::<PowerUnit>()?.convert(value, to.parse()?))
}

/// Convert a pressure between unit symbols (Pa, kPa, MPa, bar, psi)
pub fn convert_pressure(value: f64, from: &str, to: &str) -> CalcResult<f64> {
    Ok(from.parse::<PressureUnit>()?.convert(value, to.parse()?))
}

/// Convert a temperature between scale symbols (C, F, K)
pub fn convert_temperature(value: f64, from: &str, to: &str) -> CalcResult<f64> {
    let from: TemperatureUnit = from.parse()?;
    let to: TemperatureUnit = to.parse()?;
    Ok(to.celsius_in(from.to_celsius(value)))
}

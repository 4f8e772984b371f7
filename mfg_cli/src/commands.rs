//! Subcommand handlers.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use mfg_core::materials::MaterialFamily;
use mfg_core::units::{
    convert_force, convert_length, convert_power, convert_pressure, convert_temperature,
};
use mfg_core::{optimize_clearance, ProcessDefaults};
use tracing::{debug, info};

/// Physical quantity for `mfg convert`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quantity {
    Length,
    Force,
    Power,
    Pressure,
    Temperature,
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read input from stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_defaults(config: Option<&Path>) -> Result<ProcessDefaults> {
    let Some(path) = config else {
        return Ok(ProcessDefaults::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let defaults = ProcessDefaults::from_toml_str(&text)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    debug!(?defaults, "loaded process defaults");
    Ok(defaults)
}

/// `mfg calc`
pub fn calc(input: &Path, config: Option<&Path>, compact: bool) -> Result<()> {
    let defaults = load_defaults(config)?;
    let text = read_input(input)?;
    let raw: serde_json::Value =
        serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", input.display()))?;

    let process = defaults.resolve(raw).context("Invalid process input")?;
    info!(
        process = process.process_name(),
        material = process.material(),
        "running calculation"
    );

    let output = process
        .calculate()
        .with_context(|| format!("{} calculation failed", process.process_name()))?;

    let json = if compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    println!("{}", json);
    Ok(())
}

/// `mfg materials`
pub fn materials(family: MaterialFamily) -> Result<()> {
    for (key, name) in family.entries() {
        println!("{:<24} {}", key, name);
    }
    Ok(())
}

/// `mfg convert`
pub fn convert(quantity: Quantity, value: f64, from: &str, to: &str) -> Result<()> {
    let converted = match quantity {
        Quantity::Length => convert_length(value, from, to),
        Quantity::Force => convert_force(value, from, to),
        Quantity::Power => convert_power(value, from, to),
        Quantity::Pressure => convert_pressure(value, from, to),
        Quantity::Temperature => convert_temperature(value, from, to),
    }?;
    println!("{} {}", converted, to);
    Ok(())
}

/// `mfg clearance`
pub fn clearance(material: &str, thickness: f64) -> Result<()> {
    if thickness <= 0.0 {
        anyhow::bail!("Thickness must be positive, got {}", thickness);
    }
    match optimize_clearance(material, thickness) {
        Some(rec) => {
            println!("Material:  {}", material);
            println!("Thickness: {} mm", thickness);
            println!("Optimal:   {:.3} mm ({:.2}%)", rec.optimal_mm, rec.percentage);
            println!("Range:     {:.3} - {:.3} mm", rec.minimum_mm, rec.maximum_mm);
        }
        None => println!("Material '{}' not found in the cutting registry", material),
    }
    Ok(())
}

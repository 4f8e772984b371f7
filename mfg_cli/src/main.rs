//! # mfg CLI
//!
//! Command-line front end for the `mfg_core` process calculators. Inputs
//! and results are JSON so the tool can sit in scripts and pipelines.
//!
//! ```text
//! mfg calc punch.json --config defaults.toml
//! mfg materials machining
//! mfg convert force 10 lbf N
//! mfg clearance steel-mild 2.0
//! ```

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mfg_core::materials::MaterialFamily;
use mfg_core::CalcError;

use crate::commands::Quantity;

#[derive(Parser, Debug)]
#[command(name = "mfg", version, about = "Manufacturing process calculations: forming, cutting and machining")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a process calculation from a JSON input file
    Calc {
        /// JSON document with a "process" field (use "-" for stdin)
        input: PathBuf,

        /// TOML file with defaults for omitted optional settings
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// List the materials of a registry family
    Materials {
        /// forming, cutting, drawing or machining
        family: MaterialFamily,
    },

    /// Convert a value between units
    #[command(allow_negative_numbers = true)]
    Convert {
        quantity: Quantity,
        value: f64,
        from: String,
        to: String,
    },

    /// Recommend punch/blade clearance for a cutting material
    Clearance {
        /// Cutting registry key
        material: String,
        /// Sheet thickness (mm)
        thickness: f64,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Calc { input, config, compact } => {
            commands::calc(&input, config.as_deref(), compact)
        }
        Commands::Materials { family } => commands::materials(family),
        Commands::Convert { quantity, value, from, to } => {
            commands::convert(quantity, value, &from, &to)
        }
        Commands::Clearance { material, thickness } => commands::clearance(&material, thickness),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

/// Print an error to stderr, with the structured form for engine errors.
fn report(err: &anyhow::Error) {
    eprintln!("Error: {:#}", err);
    if let Some(calc_err) = err.downcast_ref::<CalcError>() {
        if let Ok(json) = serde_json::to_string_pretty(calc_err) {
            eprintln!("{}", json);
        }
    }
}

//! Command line interface for the odestep comparison driver

use clap::Parser;
use std::fmt;

use crate::config::RunConfig;
use crate::integrators::registry::IntegratorRegistry;

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be loaded
    ConfigLoad(String),
    /// Invalid integrator name provided
    InvalidIntegrator(String),
    /// Step size was zero, negative, or non-finite
    InvalidStepSize(f64),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigLoad(msg) => write!(f, "Failed to load configuration: {msg}"),
            CliError::InvalidIntegrator(msg) => write!(f, "Invalid integrator: {msg}"),
            CliError::InvalidStepSize(dt) => {
                write!(f, "Step size must be positive and finite, got {dt}")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Odestep - explicit one-step ODE integrator comparison driver
#[derive(Parser, Debug)]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_DATE"), ")"),
    about,
    long_about = None
)]
pub struct Args {
    /// Number of integration steps (overrides config file)
    #[arg(value_name = "STEPS")]
    pub steps: Option<usize>,

    /// Step size (overrides config file)
    #[arg(value_name = "DT")]
    pub dt: Option<f64>,

    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Integrator type (e.g., forward_euler, leapfrog, rk2, rk4)
    #[arg(short = 'i', long, value_name = "TYPE")]
    pub integrator: Option<String>,

    /// Skip the per-step comparison table
    #[arg(long)]
    pub no_table: bool,

    /// List available integrators and exit
    #[arg(long)]
    pub list_integrators: bool,
}

/// Handles the --list-integrators flag by printing available integrators and exiting
pub fn handle_list_integrators() {
    let registry = IntegratorRegistry::<f64>::new().with_standard_integrators();
    println!("Available integrators:");
    for name in registry.list_available() {
        println!("  - {name}");
    }

    let aliases = registry.list_aliases();
    if !aliases.is_empty() {
        println!("\nAliases:");
        for (alias, target) in aliases {
            println!("  - {alias} -> {target}");
        }
    }
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<RunConfig, CliError> {
    // Load configuration
    let mut config = if let Some(config_path) = &args.config {
        println!("Loading configuration from: {config_path}");
        RunConfig::load_or_default(config_path)
    } else {
        RunConfig::default()
    };

    // Apply command-line overrides
    if let Some(steps) = args.steps {
        config.steps = steps;
    }

    if let Some(dt) = args.dt {
        config.dt = dt;
    }

    if let Some(integrator_type) = &args.integrator {
        // Validate integrator name against registry
        let registry = IntegratorRegistry::<f64>::new().with_standard_integrators();
        registry
            .create(integrator_type)
            .map_err(CliError::InvalidIntegrator)?;

        println!("Using integrator: {integrator_type}");
        config.integrator = integrator_type.clone();
    }

    // Degenerate step sizes are a driver concern, not a stepper concern
    if !(config.dt.is_finite() && config.dt > 0.0) {
        return Err(CliError::InvalidStepSize(config.dt));
    }

    Ok(config)
}

//! Run configuration for the comparison driver

use serde::{Deserialize, Serialize};

/// Configuration for a single driver run
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Number of integration steps to take
    pub steps: usize,
    /// Step size, assumed strictly positive and finite
    pub dt: f64,
    /// Integrator name or alias, resolved through the registry
    pub integrator: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            steps: 1000,
            dt: 0.001,
            integrator: "forward_euler".to_string(),
        }
    }
}

impl RunConfig {
    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Failed to parse config file {path}: {e}. Using defaults.");
                    Self::default()
                }
            },
            Err(_) => {
                eprintln!("Config file {path} not found. Using defaults.");
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.steps, 1000);
        assert_eq!(config.dt, 0.001);
        assert_eq!(config.integrator, "forward_euler");
    }

    #[test]
    fn test_parse_from_toml() {
        let config: RunConfig = toml::from_str(
            r#"
            steps = 250
            dt = 0.01
            integrator = "rk4"
            "#,
        )
        .unwrap();

        assert_eq!(config.steps, 250);
        assert_eq!(config.dt, 0.01);
        assert_eq!(config.integrator, "rk4");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = RunConfig {
            steps: 42,
            dt: 0.125,
            integrator: "leapfrog".to_string(),
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: RunConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }
}

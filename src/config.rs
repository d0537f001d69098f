//! Benchmark configuration with YAML schema and validation.
//!
//! The fixed-scenario binaries never read configuration — their constants
//! are compiled in. The `numbench` harness CLI accepts an optional YAML
//! file to override step/digit counts, validated both structurally
//! (via `validator`) and semantically.

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{BenchError, BenchResult};

/// Top-level benchmark configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct BenchConfig {
    /// N-body kernel settings.
    #[validate(nested)]
    #[serde(default)]
    pub nbody: NbodyConfig,

    /// Pi-digit kernel settings.
    #[validate(nested)]
    #[serde(default)]
    pub pidigits: PidigitsConfig,
}

/// Settings for the n-body kernel.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NbodyConfig {
    /// Number of simulation steps.
    #[serde(default = "default_steps")]
    pub steps: u64,

    /// Integration timestep in days.
    #[serde(default = "default_dt")]
    pub dt: f64,

    /// Absolute tolerance when verifying against reference energies.
    #[serde(default = "default_energy_tolerance")]
    pub energy_tolerance: f64,
}

/// Settings for the pi-digit kernel.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PidigitsConfig {
    /// Number of digits to extract.
    #[serde(default = "default_digits")]
    pub digits: u64,
}

const fn default_steps() -> u64 {
    100_000
}

const fn default_dt() -> f64 {
    0.01
}

const fn default_energy_tolerance() -> f64 {
    1e-9
}

const fn default_digits() -> u64 {
    10_000
}

impl Default for NbodyConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            dt: default_dt(),
            energy_tolerance: default_energy_tolerance(),
        }
    }
}

impl Default for PidigitsConfig {
    fn default() -> Self {
        Self {
            digits: default_digits(),
        }
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            nbody: NbodyConfig::default(),
            pidigits: PidigitsConfig::default(),
        }
    }
}

impl BenchConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> BenchResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> BenchResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Validate semantic constraints beyond schema.
    fn validate_semantic(&self) -> BenchResult<()> {
        if self.nbody.dt <= 0.0 {
            return Err(BenchError::config("Timestep must be positive"));
        }
        if self.nbody.dt > 1.0 {
            return Err(BenchError::config("Timestep should not exceed 1 day"));
        }
        if self.nbody.energy_tolerance <= 0.0 {
            return Err(BenchError::config("Energy tolerance must be positive"));
        }
        Ok(())
    }
}

//! Configuration for the replenishment engine
//!
//! Supports hierarchical loading in the platform's usual order:
//! 1. Default policy constants in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with REPL_ prefix
//!
//! The defaults (30-day window, 5-day horizon, 7-day cover) match the
//! behavior the policy was calibrated against; deployments that need
//! different constants override them here rather than in code.

use config::{ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Replenishment policy constants
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ReplenishmentConfig {
    /// Trailing consumption window in days
    pub window_days: i64,

    /// Forecast-trigger lookahead: items predicted to empty within this many
    /// days are suggested even while still above their floor
    pub depletion_horizon_days: i64,

    /// Days of supply the consumption-based quantity should cover
    pub cover_target_days: i64,
}

impl Default for ReplenishmentConfig {
    fn default() -> Self {
        Self {
            window_days: 30,
            depletion_horizon_days: 5,
            cover_target_days: 7,
        }
    }
}

impl ReplenishmentConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("REPL_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            .set_default("window_days", 30)?
            .set_default("depletion_horizon_days", 5)?
            .set_default("cover_target_days", 7)?
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            .add_source(
                Environment::with_prefix("REPL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// All constants must be strictly positive
    pub fn validate(&self) -> EngineResult<()> {
        if self.window_days <= 0 {
            return Err(EngineError::Configuration(
                "window_days must be positive".to_string(),
            ));
        }
        if self.depletion_horizon_days <= 0 {
            return Err(EngineError::Configuration(
                "depletion_horizon_days must be positive".to_string(),
            ));
        }
        if self.cover_target_days <= 0 {
            return Err(EngineError::Configuration(
                "cover_target_days must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

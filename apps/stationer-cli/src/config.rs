//! CLI configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults.
//!
//! | Variable                          | Default | Meaning                         |
//! |-----------------------------------|---------|---------------------------------|
//! | `STATIONER_LOG`                   | `warn`  | tracing `EnvFilter` directive   |
//! | `STATIONER_COLORING_DISCOUNT_BPS` | `1000`  | coloring markdown (1000 = 10%)  |
//! | `STATIONER_SEED_CATALOG`          | `true`  | start with the sample catalog   |
//! | `STATIONER_JSON`                  | `false` | print checkouts as JSON         |

use std::env;

use stationer_core::validation::validate_discount_bps;
use stationer_core::{DiscountPolicy, COLORING_DISCOUNT_BPS};

/// Console driver configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Log filter directive (stderr).
    pub log_filter: String,

    /// Coloring markdown in basis points.
    pub coloring_discount_bps: u32,

    /// Seed the inventory with the sample catalog.
    pub seed_catalog: bool,

    /// Print checkout results as JSON instead of text.
    pub json_output: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_filter: "warn".to_string(),
            coloring_discount_bps: COLORING_DISCOUNT_BPS,
            seed_catalog: true,
            json_output: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CliConfig::default();

        let coloring_discount_bps = match lookup("STATIONER_COLORING_DISCOUNT_BPS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ConfigError::InvalidValue("STATIONER_COLORING_DISCOUNT_BPS".to_string())
            })?,
            None => defaults.coloring_discount_bps,
        };
        validate_discount_bps(coloring_discount_bps)
            .map_err(|e| ConfigError::OutOfRange("STATIONER_COLORING_DISCOUNT_BPS", e.to_string()))?;

        Ok(CliConfig {
            log_filter: lookup("STATIONER_LOG").unwrap_or(defaults.log_filter),
            coloring_discount_bps,
            seed_catalog: parse_flag(&lookup, "STATIONER_SEED_CATALOG", defaults.seed_catalog)?,
            json_output: parse_flag(&lookup, "STATIONER_JSON", defaults.json_output)?,
        })
    }

    pub fn discount_policy(&self) -> DiscountPolicy {
        DiscountPolicy::coloring(self.coloring_discount_bps)
    }
}

fn parse_flag<F>(lookup: &F, key: &str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidValue(key.to_string())),
        },
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("{0} out of range: {1}")]
    OutOfRange(&'static str, String),
}

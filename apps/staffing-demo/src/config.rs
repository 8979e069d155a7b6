//! Demo configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults that reproduce the classic walkthrough.
//!
//! | Variable               | Default  |
//! |------------------------|----------|
//! | `STAFFING_BOSS`        | `Boss`   |
//! | `STAFFING_CAPACITY`    | `2`      |
//! | `STAFFING_ACCUMULATOR` | `10`     |
//! | `STAFFING_OPERAND`     | `3`      |
//! | `STAFFING_PROGRAM`     | `+^%=n`  |
//! | `STAFFING_OUTPUT`      | `text`   |

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// How the walkthrough is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable staff dumps and calculator lines.
    #[default]
    Text,
    /// A single JSON report.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

/// Demo configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Name of the roster's boss
    pub boss: String,

    /// Number of staff slots
    pub capacity: usize,

    /// Calculator starting accumulator
    pub accumulator: f64,

    /// Calculator starting operand
    pub operand: f64,

    /// Opcode symbols applied in order
    pub program: String,

    pub output: OutputFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            boss: "Boss".to_string(),
            capacity: 2,
            accumulator: 10.0,
            operand: 3.0,
            program: "+^%=n".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl DemoConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DemoConfig::default();

        Ok(DemoConfig {
            boss: lookup("STAFFING_BOSS").unwrap_or(defaults.boss),

            capacity: parse_var(&lookup, "STAFFING_CAPACITY")?.unwrap_or(defaults.capacity),

            accumulator: parse_var(&lookup, "STAFFING_ACCUMULATOR")?
                .unwrap_or(defaults.accumulator),

            operand: parse_var(&lookup, "STAFFING_OPERAND")?.unwrap_or(defaults.operand),

            program: lookup("STAFFING_PROGRAM").unwrap_or(defaults.program),

            output: parse_var(&lookup, "STAFFING_OUTPUT")?.unwrap_or(defaults.output),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key.to_string()))
        })
        .transpose()
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for: {0}")]
    InvalidValue(String),
}

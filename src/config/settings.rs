//! Runtime settings loaded from environment variables
//!
//! # Environment Variables
//!
//! - `MODULE_TYPES_LOG_LEVEL`: Logging level - default: "info"
//! - `MODULE_TYPES_LOG_JSON`: Emit JSON logs (true|false) - default: "false"
//! - `MODULE_TYPES_UNKNOWN_POLICY`: What to do with modules whose type does not
//!   resolve (skip|warn|fail) - default: "warn"
//!
//! Command-line values in [`ConfigOverrides`] win over the environment; an
//! overridden variable is never read. Logging settings only affect stderr, so
//! an invalid value falls back to its default with a note. An invalid unknown
//! type policy is an error, raised only when the policy is actually loaded.

use std::collections::HashMap;
use std::env;
use std::fmt;
use thiserror::Error;
use tracing::Level;

use crate::classify::UnknownTypePolicy;
use crate::util::logging::{parse_level_or_default, LoggingConfig};

const ENV_LOG_LEVEL: &str = "MODULE_TYPES_LOG_LEVEL";
const ENV_LOG_JSON: &str = "MODULE_TYPES_LOG_JSON";
const ENV_UNKNOWN_POLICY: &str = "MODULE_TYPES_UNKNOWN_POLICY";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

/// Values supplied on the command line, applied before the environment is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub log_level: Option<Level>,
    pub log_json: Option<bool>,
    pub unknown_policy: Option<UnknownTypePolicy>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleTypesConfig {
    pub log_level: Level,

    pub log_json: bool,

    pub unknown_policy: UnknownTypePolicy,
}

impl Default for ModuleTypesConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            log_json: false,
            unknown_policy: UnknownTypePolicy::default(),
        }
    }
}

impl ModuleTypesConfig {
    /// Reads every `MODULE_TYPES_*` variable, using defaults for unset ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(&ConfigOverrides::default())
    }

    /// Full configuration: logging settings plus the unknown type policy.
    pub fn load(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = Self::logging_from_env(overrides);

        config.unknown_policy = match overrides.unknown_policy {
            Some(policy) => policy,
            None => match env::var(ENV_UNKNOWN_POLICY) {
                Ok(v) => v.parse::<UnknownTypePolicy>().map_err(|e| ConfigError::ParseError {
                    field: ENV_UNKNOWN_POLICY.to_string(),
                    error: e,
                })?,
                Err(_) => UnknownTypePolicy::default(),
            },
        };

        Ok(config)
    }

    /// Logging settings only. `MODULE_TYPES_UNKNOWN_POLICY` is not read and
    /// the policy keeps its default.
    pub fn logging_from_env(overrides: &ConfigOverrides) -> Self {
        let log_level = overrides.log_level.unwrap_or_else(|| {
            env::var(ENV_LOG_LEVEL)
                .map(|v| parse_level_or_default(&v))
                .unwrap_or(Level::INFO)
        });

        let log_json = overrides.log_json.unwrap_or_else(|| match env::var(ENV_LOG_JSON) {
            Ok(v) => parse_bool_or_default(ENV_LOG_JSON, &v, false),
            Err(_) => false,
        });

        Self {
            log_level,
            log_json,
            ..Default::default()
        }
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level,
            use_json: self.log_json,
            ..Default::default()
        }
    }

    pub fn to_display_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("log_level".to_string(), level_name(self.log_level));
        map.insert("log_json".to_string(), self.log_json.to_string());
        map.insert(
            "unknown_policy".to_string(),
            self.unknown_policy.to_string(),
        );
        map
    }
}

fn parse_bool_or_default(field: &str, value: &str, default: bool) -> bool {
    value.parse::<bool>().unwrap_or_else(|_| {
        eprintln!(
            "Invalid {} '{}', defaulting to {}. Valid values: true, false",
            field, value, default
        );
        default
    })
}

fn level_name(level: Level) -> String {
    level.as_str().to_lowercase()
}

impl fmt::Display for ModuleTypesConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Module Types Configuration:")?;
        writeln!(f, "  Log Level: {}", level_name(self.log_level))?;
        writeln!(f, "  JSON Logs: {}", self.log_json)?;
        writeln!(f, "  Unknown Type Policy: {}", self.unknown_policy)?;
        Ok(())
    }
}

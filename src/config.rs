//! Configuration management for devops-bootstrap
//!
//! Settings are read from environment variables with sensible defaults.
//!
//! # Environment Variables
//!
//! - `DEVOPS_BOOTSTRAP_LOG_LEVEL`: Logging level - default: "info"
//! - `DEVOPS_BOOTSTRAP_CONTAINER_TOOL`: Infrastructure entry that triggers the
//!   pipeline manifest - default: "Docker"
//! - `DEVOPS_BOOTSTRAP_PIPELINE_HEADER`: Prefix the manifest with a comment
//!   header (true|false) - default: "true"
//! - `DEVOPS_BOOTSTRAP_CONFIG_FILE`: File name of the configuration document -
//!   default: "devops-config.yaml"
//! - `DEVOPS_BOOTSTRAP_PIPELINE_FILE`: File name of the pipeline manifest -
//!   default: ".gitlab-ci.yml"
//!
//! # Example
//!
//! ```no_run
//! use devops_bootstrap::BootstrapConfig;
//!
//! let config = BootstrapConfig::default();
//! config.validate().expect("Invalid configuration");
//! println!("{}", config);
//! ```

use crate::catalog::CONTAINER_BUILD_TOOL;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_PIPELINE_HEADER: bool = true;
const DEFAULT_CONFIG_FILE: &str = "devops-config.yaml";
const DEFAULT_PIPELINE_FILE: &str = ".gitlab-ci.yml";

pub const ENV_LOG_LEVEL: &str = "DEVOPS_BOOTSTRAP_LOG_LEVEL";
pub const ENV_CONTAINER_TOOL: &str = "DEVOPS_BOOTSTRAP_CONTAINER_TOOL";
pub const ENV_PIPELINE_HEADER: &str = "DEVOPS_BOOTSTRAP_PIPELINE_HEADER";
pub const ENV_CONFIG_FILE: &str = "DEVOPS_BOOTSTRAP_CONFIG_FILE";
pub const ENV_PIPELINE_FILE: &str = "DEVOPS_BOOTSTRAP_PIPELINE_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Infrastructure entry that enables the pipeline manifest
    pub container_tool: String,

    /// Prefix the pipeline manifest with a comment header
    pub pipeline_header: bool,

    /// File name of the configuration document
    pub config_file: String,

    /// File name of the pipeline manifest
    pub pipeline_file: String,
}

fn parse_bool(field: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::ParseError {
            field: field.to_string(),
            error: format!("expected a boolean, got '{}'", other),
        }),
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl Default for BootstrapConfig {
    /// Loads from environment variables, ignoring values that do not parse
    fn default() -> Self {
        let pipeline_header = env::var(ENV_PIPELINE_HEADER)
            .ok()
            .and_then(|v| parse_bool(ENV_PIPELINE_HEADER, &v).ok())
            .unwrap_or(DEFAULT_PIPELINE_HEADER);

        Self {
            log_level: env_or(ENV_LOG_LEVEL, DEFAULT_LOG_LEVEL).to_lowercase(),
            container_tool: env_or(ENV_CONTAINER_TOOL, CONTAINER_BUILD_TOOL),
            pipeline_header,
            config_file: env_or(ENV_CONFIG_FILE, DEFAULT_CONFIG_FILE),
            pipeline_file: env_or(ENV_PIPELINE_FILE, DEFAULT_PIPELINE_FILE),
        }
    }
}

impl BootstrapConfig {
    /// Strict variant of `default()`: malformed values are errors
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(value) = env::var(ENV_PIPELINE_HEADER) {
            config.pipeline_header = parse_bool(ENV_PIPELINE_HEADER, &value)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        if self.container_tool.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Container tool cannot be empty".to_string(),
            ));
        }

        for (field, name) in [
            ("config file", &self.config_file),
            ("pipeline file", &self.pipeline_file),
        ] {
            if name.contains(['/', '\\']) {
                return Err(ConfigError::ValidationFailed(format!(
                    "The {} must be a plain file name, got '{}'",
                    field, name
                )));
            }
        }

        Ok(())
    }

    /// Path of the configuration document in `dir`; `json` swaps the extension
    pub fn config_path(&self, dir: &Path, json: bool) -> PathBuf {
        let path = dir.join(&self.config_file);
        if json {
            path.with_extension("json")
        } else {
            path
        }
    }

    pub fn pipeline_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.pipeline_file)
    }
}

impl fmt::Display for BootstrapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DevOps Bootstrap Configuration:")?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Container Tool: {}", self.container_tool)?;
        writeln!(f, "  Pipeline Header: {}", self.pipeline_header)?;
        writeln!(f, "  Config File: {}", self.config_file)?;
        writeln!(f, "  Pipeline File: {}", self.pipeline_file)?;
        Ok(())
    }
}

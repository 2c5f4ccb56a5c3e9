//! Structured logging setup for devops-bootstrap
//!
//! Initializes a `tracing` subscriber that writes to stderr, leaving stdout
//! for the rendered documents. `RUST_LOG` takes precedence over any level
//! configured here.
//!
//! # Example
//!
//! ```no_run
//! use devops_bootstrap::util::logging;
//!
//! // With environment: DEVOPS_BOOTSTRAP_LOG_LEVEL=debug
//! logging::init_from_env();
//!
//! tracing::info!("Application started");
//! ```

use crate::config::ENV_LOG_LEVEL;
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

pub const ENV_LOG_JSON: &str = "DEVOPS_BOOTSTRAP_LOG_JSON";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Emit JSON lines instead of human-readable output
    pub use_json: bool,

    /// Include the module target (e.g., devops_bootstrap::compiler) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Resolves the level from command line flags, falling back to the environment.
    ///
    /// An explicit `--log-level` wins over `--verbose`, which wins over `--quiet`.
    pub fn from_cli(log_level: Option<&str>, verbose: bool, quiet: bool) -> Self {
        let level = if let Some(level_str) = log_level {
            parse_level(level_str)
        } else if verbose {
            Level::DEBUG
        } else if quiet {
            Level::ERROR
        } else {
            level_from_env()
        };

        Self {
            level,
            use_json: json_from_env(),
            ..Default::default()
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("devops_bootstrap={}", self.level)))
    }
}

/// Parses a log level, case-insensitively; unknown values fall back to INFO
///
/// ```
/// use devops_bootstrap::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("WARN"), Level::WARN);
/// assert_eq!(parse_level("invalid"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

fn level_from_env() -> Level {
    let level_str = env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| "info".to_string());
    parse_level(&level_str)
}

fn json_from_env() -> bool {
    env::var(ENV_LOG_JSON)
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(false)
}

/// Installs the global subscriber; later calls are ignored
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.filter();

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}

/// Reads `DEVOPS_BOOTSTRAP_LOG_LEVEL` and `DEVOPS_BOOTSTRAP_LOG_JSON`
pub fn init_from_env() {
    init_logging(LoggingConfig::from_cli(None, false, false));
}

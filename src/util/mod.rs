//! Utility modules for devops-bootstrap

pub mod logging;

pub use logging::{init_from_env, init_logging, LoggingConfig};

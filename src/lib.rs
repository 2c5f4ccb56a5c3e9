//! devops-bootstrap - DevOps project configuration compiler
//!
//! Turns the answers of a project-bootstrap form into two documents: a
//! project configuration document and, when Docker is among the selected
//! infrastructure, a GitLab CI pipeline definition.
//!
//! # Core Concepts
//!
//! - **Option Catalog**: the legal values per language (frameworks, versions,
//!   dependency managers) and the form's fixed choice lists
//! - **Selection Record**: one set of form answers
//! - **Validation**: ordered required-field checks; the first missing field
//!   is reported with a user-facing message
//! - **Compilation**: a pure transformation from a validated record and a
//!   timestamp to the output documents
//!
//! Known languages are written to the configuration document in their
//! canonical display form, so `node` or `JS` in the input becomes
//! `JavaScript`. Languages outside the catalog keep the spelling they were
//! given, minus surrounding whitespace.
//!
//! # Example Usage
//!
//! ```no_run
//! use chrono::Utc;
//! use devops_bootstrap::{compile, load_selection, Validator};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let record = load_selection(Path::new("answers.yaml"))?;
//! let valid = Validator::new().accept(record)?;
//! let documents = compile(&valid, Utc::now());
//!
//! println!("{}", documents.config.to_yaml()?);
//! if let Some(pipeline) = documents.pipeline {
//!     println!("{}", pipeline.to_yaml()?);
//! }
//! # Ok(())
//! # }
//! ```

// Public modules
pub mod catalog;
pub mod cli;
pub mod compiler;
pub mod config;
pub mod error;
pub mod output;
pub mod selection;
pub mod util;
pub mod validation;

// Re-export key types for convenient access
pub use catalog::{LanguageId, OptionCatalog};
pub use compiler::{compile, CompiledDocuments, DocumentCompiler};
pub use config::{BootstrapConfig, ConfigError};
pub use error::{BootstrapError, BootstrapResult};
pub use output::{ConfigDocument, PipelineManifest};
pub use selection::{load_selection, SelectionRecord};
pub use util::{init_from_env, init_logging, LoggingConfig};
pub use validation::{ValidRecord, ValidationError, Validator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! Option catalog: legal values and per-language constraints.
//!
//! Pure lookup data. Each catalog language is a [`LanguageDefinition`]
//! registered in an [`OptionCatalog`]; the validator and compiler only ever go
//! through the catalog, so adding a language means writing one definition and
//! registering it.
//!
//! # Custom languages
//!
//! [`LanguageId`] carries a `Custom(String)` variant for languages outside the
//! catalog. Lookups for those return empty lists, meaning frameworks, version
//! and dependency manager are free text.
//!
//! # Example
//!
//! ```
//! use devops_bootstrap::catalog::{LanguageId, OptionCatalog};
//!
//! let catalog = OptionCatalog::with_defaults();
//! assert!(catalog.dependency_managers_for(&LanguageId::Python).contains(&"Poetry"));
//! assert!(catalog.frameworks_for(&LanguageId::Custom("Zig".into())).is_empty());
//! ```

#[macro_use]
pub mod id_enum_macro;

pub mod choices;
pub mod language;
pub mod language_id;
pub mod registry;
pub mod warnings;

pub use choices::{FormChoices, LanguageOptions};
pub use language::{LanguageDefinition, TestTemplate};
pub use language_id::LanguageId;
pub use registry::OptionCatalog;
pub use warnings::CatalogWarning;

/// Infrastructure tool whose selection triggers the pipeline manifest
pub const CONTAINER_BUILD_TOOL: &str = "Docker";

//! Per-language option sets
//!
//! Every catalog language is one `LanguageDefinition`. A definition only
//! answers lookups; it never validates anything itself.

mod dotnet;
mod java;
mod javascript;
mod python;

pub use dotnet::DotNetLanguage;
pub use java::JavaLanguage;
pub use javascript::{JavaScriptLanguage, TypeScriptLanguage};
pub use python::PythonLanguage;

use serde::Serialize;

use super::LanguageId;

/// CI test job template for a language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestTemplate {
    /// Image repository, tagged with the selected version (e.g. `python`)
    pub image_repository: String,
    pub script: Vec<String>,
}

impl TestTemplate {
    pub fn image_for(&self, version: &str) -> String {
        let tag = version.trim();
        let tag = if tag.is_empty() { "latest" } else { tag };
        format!("{}:{}", self.image_repository, tag)
    }
}

pub trait LanguageDefinition: Send + Sync {
    fn id(&self) -> LanguageId;

    fn frameworks(&self) -> &'static [&'static str];

    /// Ordered version enumeration, oldest first
    fn versions(&self) -> &'static [&'static str] {
        &[]
    }

    fn dependency_managers(&self) -> &'static [&'static str] {
        &[]
    }

    /// Key the config document stores the version under (e.g. `python_version`)
    fn version_key(&self) -> Option<&'static str> {
        None
    }

    fn test_template(&self) -> Option<TestTemplate> {
        None
    }
}

//! Selection record: the answers collected by the form for one project.
//!
//! A plain value object. Every field deserializes leniently (absent or `null`
//! becomes empty) so that an incomplete record loads and is then rejected by
//! the validator with a message naming the missing field.

pub mod loader;

pub use loader::load_selection;

use crate::catalog::LanguageId;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_language<'de, D>(deserializer: D) -> Result<Option<LanguageId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .filter(|s| !s.trim().is_empty())
        .map(|s| LanguageId::parse(&s)))
}

/// Target deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Environment {
    #[default]
    #[serde(alias = "development", alias = "DEV", alias = "dev")]
    Development,
    #[serde(alias = "staging", alias = "UAT", alias = "uat")]
    Staging,
    #[serde(alias = "production", alias = "PROD", alias = "prod")]
    Production,
}

impl Environment {
    pub fn all() -> &'static [Environment] {
        &[
            Environment::Development,
            Environment::Staging,
            Environment::Production,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "Development",
            Environment::Staging => "Staging",
            Environment::Production => "Production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProjectInfo {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub owner: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub team: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub environment: Environment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TechnologyStack {
    /// `None` when the form left the language empty
    #[serde(default, deserialize_with = "deserialize_language")]
    pub language: Option<LanguageId>,
    /// Required or not depending on the language; never checked by the validator
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub version: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub frameworks: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub project_type: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub databases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DependencySelection {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub manager: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub infrastructure: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub monitoring: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PipelineSelection {
    /// Execution order of the generated pipeline
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub stages: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub testing: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub code_quality: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub security: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SelectionRecord {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub project: ProjectInfo,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub technology: TechnologyStack,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub dependencies: DependencySelection,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub pipeline: PipelineSelection,
}

impl SelectionRecord {
    pub fn has_infrastructure(&self, tool: &str) -> bool {
        self.dependencies.infrastructure.iter().any(|t| t == tool)
    }

    pub fn has_stage(&self, stage: &str) -> bool {
        self.pipeline.stages.iter().any(|s| s == stage)
    }
}

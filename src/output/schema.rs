//! Generated document data structures
//!
//! Two documents come out of a compile: the `ConfigDocument`, a timestamped
//! copy of the selection record, and the optional `PipelineManifest`, a
//! GitLab CI definition. Field declaration order is the serialized key order.

use crate::catalog::LanguageId;
use crate::error::{BootstrapError, BootstrapResult};
use crate::selection::{DependencySelection, Environment, PipelineSelection};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

fn serialize_timestamp<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(timestamp))
}

/// RFC 3339 with whole seconds and a `Z` suffix
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigDocument {
    pub project: ProjectSection,
    pub technology: TechnologySection,
    pub dependencies: DependencySelection,
    pub pipeline: PipelineSelection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSection {
    pub name: String,
    pub description: String,
    pub owner: String,
    pub team: String,
    pub environment: Environment,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Version stored under a language-dependent key such as `python_version`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    pub key: String,
    pub value: String,
}

impl VersionEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnologySection {
    /// Canonical display name for catalog languages, input spelling otherwise
    pub language: LanguageId,
    /// `None` when the language has no dedicated key and no version was given
    pub version: Option<VersionEntry>,
    pub frameworks: Vec<String>,
    pub project_type: Vec<String>,
    pub databases: Vec<String>,
}

impl TechnologySection {
    pub fn version_value(&self) -> Option<&str> {
        self.version.as_ref().map(|v| v.value.as_str())
    }
}

impl Serialize for TechnologySection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = 4 + usize::from(self.version.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("language", &self.language)?;
        if let Some(ref version) = self.version {
            map.serialize_entry(&version.key, &version.value)?;
        }
        map.serialize_entry("frameworks", &self.frameworks)?;
        map.serialize_entry("project_type", &self.project_type)?;
        map.serialize_entry("databases", &self.databases)?;
        map.end()
    }
}

impl ConfigDocument {
    pub fn to_yaml(&self) -> BootstrapResult<String> {
        serde_yaml::to_string(self).map_err(|e| BootstrapError::Render {
            document: "configuration document",
            message: e.to_string(),
        })
    }

    pub fn to_json(&self) -> BootstrapResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| BootstrapError::Render {
            document: "configuration document",
            message: e.to_string(),
        })
    }
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

impl fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project Configuration")?;
        writeln!(f, "=====================")?;
        writeln!(f, "Name:        {}", self.project.name)?;
        if !self.project.description.is_empty() {
            writeln!(f, "Description: {}", self.project.description)?;
        }
        writeln!(f, "Environment: {}", self.project.environment)?;
        writeln!(f, "Created:     {}", format_timestamp(&self.project.created_at))?;
        writeln!(f)?;

        match self.technology.version_value() {
            Some(version) if !version.is_empty() => {
                writeln!(f, "Language:    {} {}", self.technology.language, version)?
            }
            _ => writeln!(f, "Language:    {}", self.technology.language)?,
        }
        writeln!(f, "Frameworks:  {}", join_or_dash(&self.technology.frameworks))?;
        writeln!(f, "Databases:   {}", join_or_dash(&self.technology.databases))?;
        writeln!(f, "Manager:     {}", self.dependencies.manager)?;
        writeln!(
            f,
            "Infra:       {}",
            join_or_dash(&self.dependencies.infrastructure)
        )?;
        writeln!(f)?;

        writeln!(f, "Pipeline Stages:")?;
        for stage in &self.pipeline.stages {
            writeln!(f, "  - {}", stage)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobEnvironment {
    pub name: String,
}

/// One GitLab CI job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub stage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
    pub script: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<JobEnvironment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineManifest {
    /// Copied verbatim from the selection, order preserved
    pub stages: Vec<String>,
    pub variables: BTreeMap<String, String>,
    pub build: Job,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<Job>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lint: Option<Job>,
    #[serde(
        rename = "deploy-dev",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub deploy_dev: Option<Job>,
}

impl PipelineManifest {
    /// Names of the jobs present, in serialized order
    pub fn job_names(&self) -> Vec<&'static str> {
        let mut names = vec!["build"];
        if self.test.is_some() {
            names.push("test");
        }
        if self.lint.is_some() {
            names.push("lint");
        }
        if self.deploy_dev.is_some() {
            names.push("deploy-dev");
        }
        names
    }

    pub fn to_yaml(&self) -> BootstrapResult<String> {
        serde_yaml::to_string(self).map_err(|e| BootstrapError::Render {
            document: "pipeline manifest",
            message: e.to_string(),
        })
    }

    pub fn to_json(&self) -> BootstrapResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| BootstrapError::Render {
            document: "pipeline manifest",
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn document(language: LanguageId, version: Option<VersionEntry>) -> ConfigDocument {
        ConfigDocument {
            project: ProjectSection {
                name: "demo".to_string(),
                description: "Demo service".to_string(),
                owner: "ana".to_string(),
                team: "platform".to_string(),
                environment: Environment::Staging,
                created_at: timestamp(),
            },
            technology: TechnologySection {
                language,
                version,
                frameworks: vec!["FastAPI".to_string()],
                project_type: vec!["Backend".to_string()],
                databases: vec!["PostgreSQL".to_string()],
            },
            dependencies: DependencySelection {
                manager: "Poetry".to_string(),
                infrastructure: vec!["Docker".to_string()],
                monitoring: vec!["Prometheus".to_string()],
            },
            pipeline: PipelineSelection {
                stages: vec!["build".to_string(), "test".to_string()],
                testing: vec!["pytest".to_string()],
                code_quality: vec!["Black".to_string()],
                security: vec!["Trivy".to_string()],
            },
        }
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(&timestamp()), "2024-05-01T12:00:00Z");
    }

    #[test]
    fn test_config_document_key_order() {
        let doc = document(
            LanguageId::Python,
            Some(VersionEntry::new("python_version", "3.11")),
        );
        let yaml = doc.to_yaml().unwrap();

        let project = yaml.find("project:").unwrap();
        let technology = yaml.find("technology:").unwrap();
        let dependencies = yaml.find("dependencies:").unwrap();
        let pipeline = yaml.find("pipeline:").unwrap();
        assert!(project < technology && technology < dependencies && dependencies < pipeline);

        assert!(yaml.contains("created_at:"));
        assert!(yaml.contains("2024-05-01T12:00:00Z"));
        assert!(yaml.contains("language: Python"));
        assert!(yaml.contains("python_version: '3.11'"));
        assert!(!yaml.contains("\n  version:"));
        assert!(yaml.contains("environment: Staging"));
    }

    #[test]
    fn test_technology_without_version_entry() {
        let doc = document(LanguageId::CSharp, None);
        let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        let technology = value["technology"].as_object().unwrap();

        let keys: Vec<&str> = technology.keys().map(String::as_str).collect();
        assert!(keys.contains(&"language"));
        assert!(!keys.contains(&"version"));
        assert_eq!(technology["language"], "C#");
    }

    #[test]
    fn test_manifest_skips_absent_jobs() {
        let manifest = PipelineManifest {
            stages: vec!["build".to_string()],
            variables: BTreeMap::from([("PROJECT_NAME".to_string(), "demo".to_string())]),
            build: Job {
                stage: "build".to_string(),
                image: Some("docker:latest".to_string()),
                services: vec!["docker:dind".to_string()],
                script: vec!["docker build .".to_string()],
                environment: None,
            },
            test: None,
            lint: None,
            deploy_dev: None,
        };

        let yaml = manifest.to_yaml().unwrap();
        assert!(yaml.contains("PROJECT_NAME: demo"));
        assert!(!yaml.contains("test:"));
        assert!(!yaml.contains("environment:"));
        assert_eq!(manifest.job_names(), vec!["build"]);

        let parsed: PipelineManifest = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_manifest_deploy_dev_key() {
        let manifest = PipelineManifest {
            stages: vec!["deploy-dev".to_string()],
            variables: BTreeMap::new(),
            build: Job {
                stage: "build".to_string(),
                image: None,
                services: vec![],
                script: vec![],
                environment: None,
            },
            test: None,
            lint: None,
            deploy_dev: Some(Job {
                stage: "deploy-dev".to_string(),
                image: None,
                services: vec![],
                script: vec!["echo deploy".to_string()],
                environment: Some(JobEnvironment {
                    name: "development".to_string(),
                }),
            }),
        };

        let yaml = manifest.to_yaml().unwrap();
        assert!(yaml.contains("deploy-dev:\n  stage: deploy-dev"));
        assert!(yaml.contains("environment:\n    name: development"));
        assert_eq!(manifest.job_names(), vec!["build", "deploy-dev"]);
    }

    #[test]
    fn test_display_summary() {
        let doc = document(
            LanguageId::Python,
            Some(VersionEntry::new("python_version", "3.11")),
        );
        let output = doc.to_string();
        assert!(output.contains("Name:        demo"));
        assert!(output.contains("Language:    Python 3.11"));
        assert!(output.contains("  - test"));
    }
}

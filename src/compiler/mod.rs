//! Document compiler
//!
//! Turns a validated selection into the configuration document and, when
//! the container-build tool is selected, a GitLab CI pipeline manifest.
//! Compilation is pure: the clock reading is passed in, so the same record
//! and timestamp always render to the same bytes.

pub mod jobs;

use crate::catalog::{LanguageId, OptionCatalog};
use crate::output::{
    ConfigDocument, PipelineManifest, ProjectSection, TechnologySection, VersionEntry,
};
use crate::selection::{SelectionRecord, TechnologyStack};
use crate::validation::ValidRecord;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::{debug, info};

pub const PROJECT_NAME_VARIABLE: &str = "PROJECT_NAME";

/// Generic key for languages without a dedicated version key
const GENERIC_VERSION_KEY: &str = "version";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledDocuments {
    pub config: ConfigDocument,
    pub pipeline: Option<PipelineManifest>,
}

pub struct DocumentCompiler<'a> {
    catalog: &'a OptionCatalog,
    container_tool: String,
}

impl<'a> DocumentCompiler<'a> {
    pub fn new(catalog: &'a OptionCatalog) -> Self {
        Self {
            catalog,
            container_tool: catalog.container_build_tool().to_string(),
        }
    }

    pub fn with_container_tool(mut self, tool: impl Into<String>) -> Self {
        self.container_tool = tool.into();
        self
    }

    pub fn container_tool(&self) -> &str {
        &self.container_tool
    }

    pub fn compile(&self, record: &ValidRecord, now: DateTime<Utc>) -> CompiledDocuments {
        let selection = record.record();
        let config = self.config_document(selection, now);
        let pipeline = self.pipeline_manifest(selection);

        info!(
            project = %selection.project.name,
            pipeline = pipeline.is_some(),
            "Compiled project configuration"
        );

        CompiledDocuments { config, pipeline }
    }

    fn config_document(&self, selection: &SelectionRecord, now: DateTime<Utc>) -> ConfigDocument {
        let project = &selection.project;
        ConfigDocument {
            project: ProjectSection {
                name: project.name.clone(),
                description: project.description.clone(),
                owner: project.owner.clone(),
                team: project.team.clone(),
                environment: project.environment,
                created_at: now,
            },
            technology: self.technology_section(&selection.technology),
            dependencies: selection.dependencies.clone(),
            pipeline: selection.pipeline.clone(),
        }
    }

    fn technology_section(&self, technology: &TechnologyStack) -> TechnologySection {
        // The validator guarantees a language; the fallback only keeps this total.
        let language = technology
            .language
            .clone()
            .unwrap_or_else(|| LanguageId::Custom(String::new()));

        let version = match self.catalog.version_key_for(&language) {
            Some(key) => Some(VersionEntry::new(key, technology.version.clone())),
            None if technology.version.trim().is_empty() => None,
            None => Some(VersionEntry::new(
                GENERIC_VERSION_KEY,
                technology.version.clone(),
            )),
        };

        TechnologySection {
            language,
            version,
            frameworks: technology.frameworks.clone(),
            project_type: technology.project_type.clone(),
            databases: technology.databases.clone(),
        }
    }

    fn pipeline_manifest(&self, selection: &SelectionRecord) -> Option<PipelineManifest> {
        if !selection.has_infrastructure(&self.container_tool) {
            debug!(
                tool = %self.container_tool,
                "Container build tool not selected, skipping pipeline manifest"
            );
            return None;
        }

        let mut variables = BTreeMap::new();
        variables.insert(
            PROJECT_NAME_VARIABLE.to_string(),
            selection.project.name.clone(),
        );

        let test = if selection.has_stage(jobs::STAGE_TEST) {
            let template = selection
                .technology
                .language
                .as_ref()
                .and_then(|language| self.catalog.test_template_for(language));
            if template.is_none() {
                debug!("No test template for the selected language, omitting test job");
            }
            template.map(|t| jobs::test_job(&t, &selection.technology.version))
        } else {
            None
        };

        let lint = selection
            .has_stage(jobs::STAGE_LINT)
            .then(jobs::lint_job);
        let deploy_dev = selection
            .has_stage(jobs::STAGE_DEPLOY_DEV)
            .then(jobs::deploy_dev_job);

        for stage in &selection.pipeline.stages {
            if !jobs::TEMPLATED_STAGES.contains(&stage.as_str()) {
                debug!(stage = %stage, "Stage has no job template");
            }
        }

        let manifest = PipelineManifest {
            stages: selection.pipeline.stages.clone(),
            variables,
            build: jobs::build_job(),
            test,
            lint,
            deploy_dev,
        };
        debug!(jobs = ?manifest.job_names(), "Pipeline jobs emitted");

        Some(manifest)
    }
}

/// Compiles with the shared catalog and its default container-build tool
pub fn compile(record: &ValidRecord, now: DateTime<Utc>) -> CompiledDocuments {
    DocumentCompiler::new(OptionCatalog::shared()).compile(record, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{DependencySelection, PipelineSelection, ProjectInfo};
    use crate::validation::Validator;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn record(language: LanguageId, version: &str, stages: &[&str]) -> SelectionRecord {
        SelectionRecord {
            project: ProjectInfo {
                name: "demo".to_string(),
                ..Default::default()
            },
            technology: TechnologyStack {
                language: Some(language),
                version: version.to_string(),
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
                stages: stages.iter().map(|s| s.to_string()).collect(),
                testing: vec!["pytest".to_string()],
                code_quality: vec!["Black".to_string()],
                security: vec!["Trivy".to_string()],
            },
        }
    }

    fn accept(record: SelectionRecord) -> ValidRecord {
        Validator::new().accept(record).unwrap()
    }

    #[test]
    fn test_python_document_and_manifest() {
        let valid = accept(record(LanguageId::Python, "3.11", &["build", "test", "lint"]));
        let docs = compile(&valid, now());

        let version = docs.config.technology.version.as_ref().unwrap();
        assert_eq!(version.key, "python_version");
        assert_eq!(version.value, "3.11");
        assert_eq!(docs.config.project.created_at, now());

        let manifest = docs.pipeline.unwrap();
        assert_eq!(manifest.stages, vec!["build", "test", "lint"]);
        assert_eq!(manifest.variables.get("PROJECT_NAME").map(String::as_str), Some("demo"));
        assert_eq!(manifest.build, jobs::build_job());

        let test = manifest.test.unwrap();
        assert_eq!(test.image.as_deref(), Some("python:3.11"));
        assert!(test.script.iter().any(|line| line.contains("pytest")));
        assert_eq!(manifest.lint, Some(jobs::lint_job()));
        assert!(manifest.deploy_dev.is_none());
    }

    #[test]
    fn test_no_manifest_without_container_tool() {
        let mut selection = record(LanguageId::Python, "3.11", &["build"]);
        selection.dependencies.infrastructure = vec!["Kubernetes".to_string()];

        let docs = compile(&accept(selection), now());
        assert!(docs.pipeline.is_none());
        assert_eq!(docs.config.dependencies.infrastructure, vec!["Kubernetes"]);
    }

    #[test]
    fn test_container_tool_is_case_sensitive() {
        let mut selection = record(LanguageId::Python, "3.11", &["build"]);
        selection.dependencies.infrastructure = vec!["docker".to_string()];
        assert!(compile(&accept(selection), now()).pipeline.is_none());
    }

    #[test]
    fn test_configured_container_tool() {
        let mut selection = record(LanguageId::Python, "3.11", &["build"]);
        selection.dependencies.infrastructure = vec!["Podman".to_string()];
        let valid = accept(selection);

        let catalog = OptionCatalog::with_defaults();
        let compiler = DocumentCompiler::new(&catalog).with_container_tool("Podman");
        assert_eq!(compiler.container_tool(), "Podman");
        assert!(compiler.compile(&valid, now()).pipeline.is_some());
    }

    #[test]
    fn test_node_test_job() {
        let valid = accept(record(LanguageId::TypeScript, "20", &["test"]));
        let docs = compile(&valid, now());

        assert_eq!(
            docs.config.technology.version,
            Some(VersionEntry::new("node_version", "20"))
        );
        let test = docs.pipeline.unwrap().test.unwrap();
        assert_eq!(test.image.as_deref(), Some("node:20"));
        assert_eq!(test.script, vec!["npm install", "npm test"]);
    }

    #[test]
    fn test_java_has_no_test_job() {
        let valid = accept(record(LanguageId::Java, "17", &["build", "test"]));
        let docs = compile(&valid, now());

        assert_eq!(
            docs.config.technology.version,
            Some(VersionEntry::new("java_version", "17"))
        );
        assert!(docs.pipeline.unwrap().test.is_none());
    }

    #[test]
    fn test_generic_version_key() {
        let valid = accept(record(LanguageId::CSharp, "8.0", &["build"]));
        let docs = compile(&valid, now());
        assert_eq!(
            docs.config.technology.version,
            Some(VersionEntry::new("version", "8.0"))
        );

        let valid = accept(record(LanguageId::CSharp, "", &["build"]));
        assert!(compile(&valid, now()).config.technology.version.is_none());
    }

    #[test]
    fn test_language_written_in_canonical_form() {
        let valid = accept(record(LanguageId::parse("node"), "20", &["build"]));
        let yaml = compile(&valid, now()).config.to_yaml().unwrap();
        assert!(yaml.contains("language: JavaScript"));
        assert!(yaml.contains("node_version: '20'"));

        let valid = accept(record(LanguageId::parse(" Elixir "), "1.16", &["build"]));
        let yaml = compile(&valid, now()).config.to_yaml().unwrap();
        assert!(yaml.contains("language: Elixir"));
        assert!(yaml.contains("version: '1.16'"));
    }

    #[test]
    fn test_language_key_kept_when_version_empty() {
        let valid = accept(record(LanguageId::Python, "", &["test"]));
        let docs = compile(&valid, now());

        assert_eq!(
            docs.config.technology.version,
            Some(VersionEntry::new("python_version", ""))
        );
        let test = docs.pipeline.unwrap().test.unwrap();
        assert_eq!(test.image.as_deref(), Some("python:latest"));
    }

    #[test]
    fn test_untemplated_stages_are_listed_without_jobs() {
        let stages = ["build", "security-scan", "deploy-dev", "deploy-prod"];
        let valid = accept(record(LanguageId::Python, "3.12", &stages));
        let manifest = compile(&valid, now()).pipeline.unwrap();

        assert_eq!(manifest.stages, stages);
        assert_eq!(manifest.job_names(), vec!["build", "deploy-dev"]);
        assert_eq!(manifest.deploy_dev, Some(jobs::deploy_dev_job()));
    }

    #[test]
    fn test_build_job_without_build_stage() {
        let valid = accept(record(LanguageId::Python, "3.12", &["lint"]));
        let manifest = compile(&valid, now()).pipeline.unwrap();
        assert_eq!(manifest.job_names(), vec!["build", "lint"]);
    }

    #[test]
    fn test_compile_is_deterministic() {
        let valid = accept(record(LanguageId::Python, "3.11", &["build", "test"]));
        let first = compile(&valid, now());
        let second = compile(&valid, now());

        assert_eq!(first, second);
        assert_eq!(
            first.config.to_yaml().unwrap(),
            second.config.to_yaml().unwrap()
        );
    }
}

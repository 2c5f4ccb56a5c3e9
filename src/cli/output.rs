//! Output formatting for the compiled documents and the catalog
//!
//! # Example
//!
//! ```ignore
//! use devops_bootstrap::cli::output::{OutputFormat, OutputFormatter};
//!
//! let formatter = OutputFormatter::new(OutputFormat::Yaml);
//! let output = formatter.format_documents(&documents)?;
//! println!("{}", output);
//! ```

use anyhow::{Context, Result};

use crate::catalog::{FormChoices, LanguageOptions};
use crate::compiler::CompiledDocuments;
use crate::output::{ConfigDocument, PipelineManifest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format (version-control friendly)
    Yaml,
    /// Human-readable summary
    Human,
}

impl OutputFormat {
    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

pub struct OutputFormatter {
    format: OutputFormat,
    pipeline_header: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pipeline_header: true,
        }
    }

    pub fn with_pipeline_header(mut self, enabled: bool) -> Self {
        self.pipeline_header = enabled;
        self
    }

    pub fn format_config(&self, document: &ConfigDocument) -> Result<String> {
        match self.format {
            OutputFormat::Json => document
                .to_json()
                .context("Failed to serialize configuration document to JSON"),
            OutputFormat::Yaml => document
                .to_yaml()
                .context("Failed to serialize configuration document to YAML"),
            OutputFormat::Human => Ok(document.to_string()),
        }
    }

    /// Pipeline manifests are always YAML unless JSON is requested
    pub fn format_pipeline(
        &self,
        manifest: &PipelineManifest,
        document: &ConfigDocument,
    ) -> Result<String> {
        if self.format.is_json() {
            return manifest
                .to_json()
                .context("Failed to serialize pipeline manifest to JSON");
        }

        let yaml = manifest
            .to_yaml()
            .context("Failed to serialize pipeline manifest to YAML")?;

        if self.pipeline_header {
            Ok(format!("{}\n{}", pipeline_header(document), yaml))
        } else {
            Ok(yaml)
        }
    }

    /// Both documents in one stream, for printing to stdout
    pub fn format_documents(&self, documents: &CompiledDocuments) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "config": documents.config,
                    "pipeline": documents.pipeline,
                });
                serde_json::to_string_pretty(&output)
                    .context("Failed to serialize documents to JSON")
            }
            OutputFormat::Yaml => {
                let mut output = self.format_config(&documents.config)?;
                if let Some(ref manifest) = documents.pipeline {
                    output.push_str("---\n");
                    output.push_str(&self.format_pipeline(manifest, &documents.config)?);
                }
                Ok(output)
            }
            OutputFormat::Human => Ok(self.format_human_summary(documents)),
        }
    }

    pub fn format_catalog(&self, choices: &FormChoices) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(choices).context("Failed to serialize catalog to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(choices).context("Failed to serialize catalog to YAML")
            }
            OutputFormat::Human => Ok(choices.to_string()),
        }
    }

    pub fn format_language(&self, options: &LanguageOptions) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(options)
                .context("Failed to serialize language options to JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(options)
                .context("Failed to serialize language options to YAML"),
            OutputFormat::Human => Ok(options.to_string()),
        }
    }

    fn format_human_summary(&self, documents: &CompiledDocuments) -> String {
        let mut output = documents.config.to_string();
        output.push('\n');
        match documents.pipeline {
            Some(ref manifest) => output.push_str(&format!(
                "GitLab CI:   generated (jobs: {})\n",
                manifest.job_names().join(", ")
            )),
            None => output.push_str("GitLab CI:   not generated\n"),
        }
        output
    }
}

/// Comment block placed above the pipeline YAML
///
/// Every line of a multi-line value gets its own `#` prefix, so user text
/// never leaks into the YAML data.
pub fn pipeline_header(document: &ConfigDocument) -> String {
    let technology = &document.technology;
    let language = match technology.version_value() {
        Some(version) if !version.is_empty() => format!("{} {}", technology.language, version),
        _ => technology.language.to_string(),
    };

    let mut header = String::new();
    push_comment(&mut header, "Project", &document.project.name);
    push_comment(&mut header, "Description", &document.project.description);
    push_comment(&mut header, "Language", &language);
    push_comment(&mut header, "Frameworks", &technology.frameworks.join(", "));
    push_comment(&mut header, "Database", &technology.databases.join(", "));
    push_comment(
        &mut header,
        "Environment",
        &document.project.environment.to_string(),
    );
    push_comment(
        &mut header,
        "Monitoring",
        &document.dependencies.monitoring.join(", "),
    );
    header
}

fn push_comment(header: &mut String, label: &str, value: &str) {
    // A lone CR is a line break to YAML as well
    let value = value.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = value.split('\n');
    header.push_str(&format!("# {}: {}\n", label, lines.next().unwrap_or_default()));
    for line in lines {
        header.push_str(&format!("#   {}\n", line));
    }
}

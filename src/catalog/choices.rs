//! Language-independent option lists offered by the form

use crate::selection::Environment;
use serde::Serialize;
use std::fmt;

pub const PROJECT_TYPES: &[&str] = &[
    "Backend",
    "Frontend",
    "Fullstack",
    "Mobile",
    "Library",
    "CLI",
    "Data Pipeline",
];

pub const DATABASES: &[&str] = &[
    "PostgreSQL",
    "MySQL",
    "SQL Server",
    "MongoDB",
    "Redis",
    "SQLite",
    "Oracle",
];

pub const INFRASTRUCTURE: &[&str] = &[
    "Docker",
    "Kubernetes",
    "Terraform",
    "Ansible",
    "Helm",
    "AWS",
    "Azure",
    "GCP",
];

pub const MONITORING: &[&str] = &[
    "Prometheus",
    "Grafana",
    "Datadog",
    "New Relic",
    "ELK Stack",
    "Sentry",
];

pub const PIPELINE_STAGES: &[&str] = &[
    "build",
    "test",
    "lint",
    "security-scan",
    "deploy-dev",
    "deploy-staging",
    "deploy-prod",
];

pub const TESTING: &[&str] = &[
    "pytest", "unittest", "Jest", "Mocha", "JUnit", "TestNG", "xUnit", "Cypress", "Selenium",
];

pub const CODE_QUALITY: &[&str] = &[
    "SonarQube",
    "ESLint",
    "Prettier",
    "Black",
    "Flake8",
    "Pylint",
    "Checkstyle",
    "StyleCop",
];

pub const SECURITY: &[&str] = &[
    "Trivy",
    "Snyk",
    "OWASP ZAP",
    "Bandit",
    "Dependabot",
    "GitLab SAST",
];

/// Every choice list the form renders, in form order
#[derive(Debug, Clone, Serialize)]
pub struct FormChoices {
    pub environments: Vec<String>,
    pub languages: Vec<String>,
    pub project_types: Vec<&'static str>,
    pub databases: Vec<&'static str>,
    pub infrastructure: Vec<&'static str>,
    pub monitoring: Vec<&'static str>,
    pub stages: Vec<&'static str>,
    pub testing: Vec<&'static str>,
    pub code_quality: Vec<&'static str>,
    pub security: Vec<&'static str>,
}

impl FormChoices {
    pub fn new(languages: Vec<String>) -> Self {
        Self {
            environments: Environment::all()
                .iter()
                .map(|e| e.to_string())
                .collect(),
            languages,
            project_types: PROJECT_TYPES.to_vec(),
            databases: DATABASES.to_vec(),
            infrastructure: INFRASTRUCTURE.to_vec(),
            monitoring: MONITORING.to_vec(),
            stages: PIPELINE_STAGES.to_vec(),
            testing: TESTING.to_vec(),
            code_quality: CODE_QUALITY.to_vec(),
            security: SECURITY.to_vec(),
        }
    }
}

impl fmt::Display for FormChoices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Environments:   {}", self.environments.join(", "))?;
        writeln!(f, "Languages:      {}", self.languages.join(", "))?;
        writeln!(f, "Project types:  {}", self.project_types.join(", "))?;
        writeln!(f, "Databases:      {}", self.databases.join(", "))?;
        writeln!(f, "Infrastructure: {}", self.infrastructure.join(", "))?;
        writeln!(f, "Monitoring:     {}", self.monitoring.join(", "))?;
        writeln!(f, "Stages:         {}", self.stages.join(", "))?;
        writeln!(f, "Testing:        {}", self.testing.join(", "))?;
        writeln!(f, "Code quality:   {}", self.code_quality.join(", "))?;
        write!(f, "Security:       {}", self.security.join(", "))
    }
}

/// Option lists of one catalog language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOptions {
    pub language: String,
    pub frameworks: Vec<&'static str>,
    pub versions: Vec<&'static str>,
    pub dependency_managers: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_key: Option<&'static str>,
}

fn join_or_free_text(values: &[&str]) -> String {
    if values.is_empty() {
        "(free text)".to_string()
    } else {
        values.join(", ")
    }
}

impl fmt::Display for LanguageOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Language:     {}", self.language)?;
        writeln!(f, "Frameworks:   {}", join_or_free_text(&self.frameworks))?;
        writeln!(f, "Versions:     {}", join_or_free_text(&self.versions))?;
        write!(
            f,
            "Dependencies: {}",
            join_or_free_text(&self.dependency_managers)
        )?;
        if let Some(key) = self.version_key {
            write!(f, "\nVersion key:  {}", key)?;
        }
        Ok(())
    }
}

//! Python language definition (pip, Poetry, Pipenv, Conda)

use super::{LanguageDefinition, TestTemplate};
use crate::catalog::LanguageId;

pub struct PythonLanguage;

impl LanguageDefinition for PythonLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::Python
    }

    fn frameworks(&self) -> &'static [&'static str] {
        &["Django", "Flask", "FastAPI", "Pyramid", "Tornado"]
    }

    fn versions(&self) -> &'static [&'static str] {
        &["3.7", "3.8", "3.9", "3.10", "3.11", "3.12"]
    }

    fn dependency_managers(&self) -> &'static [&'static str] {
        &["pip", "Poetry", "Pipenv", "Conda"]
    }

    fn version_key(&self) -> Option<&'static str> {
        Some("python_version")
    }

    fn test_template(&self) -> Option<TestTemplate> {
        Some(TestTemplate {
            image_repository: "python".to_string(),
            script: vec![
                "pip install -r requirements.txt".to_string(),
                "pytest".to_string(),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_managers() {
        assert_eq!(
            PythonLanguage.dependency_managers(),
            &["pip", "Poetry", "Pipenv", "Conda"]
        );
    }

    #[test]
    fn test_python_versions_ordered() {
        let versions = PythonLanguage.versions();
        assert_eq!(versions.first(), Some(&"3.7"));
        assert_eq!(versions.last(), Some(&"3.12"));
    }

    #[test]
    fn test_python_test_template_image() {
        let template = PythonLanguage.test_template().unwrap();
        assert_eq!(template.image_for("3.11"), "python:3.11");
        assert_eq!(template.image_for(""), "python:latest");
        assert!(template.script.iter().any(|line| line.contains("pytest")));
    }
}

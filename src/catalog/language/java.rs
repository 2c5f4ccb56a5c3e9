//! Java language definition (Maven, Gradle)

use super::LanguageDefinition;
use crate::catalog::LanguageId;

pub struct JavaLanguage;

impl LanguageDefinition for JavaLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::Java
    }

    fn frameworks(&self) -> &'static [&'static str] {
        &["Spring Boot", "Quarkus", "Micronaut", "Hibernate", "JUnit"]
    }

    fn versions(&self) -> &'static [&'static str] {
        &["8", "11", "17", "21"]
    }

    fn dependency_managers(&self) -> &'static [&'static str] {
        &["Maven", "Gradle"]
    }

    fn version_key(&self) -> Option<&'static str> {
        Some("java_version")
    }
}

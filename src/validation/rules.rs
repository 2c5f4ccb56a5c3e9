use super::ValidationError;
use crate::selection::SelectionRecord;

pub trait ValidationRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn validate(&self, record: &SelectionRecord) -> Result<(), ValidationError>;
}

/// Single-valued text field that must not be blank
pub struct RequiredText {
    name: &'static str,
    field: fn(&SelectionRecord) -> &str,
    error: ValidationError,
}

impl RequiredText {
    pub fn new(
        name: &'static str,
        field: fn(&SelectionRecord) -> &str,
        error: ValidationError,
    ) -> Self {
        Self { name, field, error }
    }
}

impl ValidationRule for RequiredText {
    fn name(&self) -> &'static str {
        self.name
    }

    fn validate(&self, record: &SelectionRecord) -> Result<(), ValidationError> {
        if (self.field)(record).trim().is_empty() {
            return Err(self.error);
        }
        Ok(())
    }
}

/// Multi-valued field that needs at least one non-blank entry
pub struct RequiredList {
    name: &'static str,
    field: fn(&SelectionRecord) -> &[String],
    error: ValidationError,
}

impl RequiredList {
    pub fn new(
        name: &'static str,
        field: fn(&SelectionRecord) -> &[String],
        error: ValidationError,
    ) -> Self {
        Self { name, field, error }
    }
}

impl ValidationRule for RequiredList {
    fn name(&self) -> &'static str {
        self.name
    }

    fn validate(&self, record: &SelectionRecord) -> Result<(), ValidationError> {
        if (self.field)(record).iter().all(|v| v.trim().is_empty()) {
            return Err(self.error);
        }
        Ok(())
    }
}

pub struct LanguageSelectedRule;

impl ValidationRule for LanguageSelectedRule {
    fn name(&self) -> &'static str {
        "LanguageSelected"
    }

    fn validate(&self, record: &SelectionRecord) -> Result<(), ValidationError> {
        match record.technology.language {
            Some(ref language) if !language.name().trim().is_empty() => Ok(()),
            _ => Err(ValidationError::MissingLanguage),
        }
    }
}

/// The canonical rule list, in the order the form surfaces errors
pub fn default_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(RequiredText::new(
            "ProjectName",
            |r| &r.project.name,
            ValidationError::MissingProjectName,
        )),
        Box::new(LanguageSelectedRule),
        Box::new(RequiredList::new(
            "Frameworks",
            |r| &r.technology.frameworks,
            ValidationError::MissingFrameworks,
        )),
        Box::new(RequiredList::new(
            "ProjectType",
            |r| &r.technology.project_type,
            ValidationError::MissingProjectType,
        )),
        Box::new(RequiredList::new(
            "Databases",
            |r| &r.technology.databases,
            ValidationError::MissingDatabases,
        )),
        Box::new(RequiredText::new(
            "DependencyManager",
            |r| &r.dependencies.manager,
            ValidationError::MissingDependencyManager,
        )),
        Box::new(RequiredList::new(
            "Infrastructure",
            |r| &r.dependencies.infrastructure,
            ValidationError::MissingInfrastructure,
        )),
        Box::new(RequiredList::new(
            "Monitoring",
            |r| &r.dependencies.monitoring,
            ValidationError::MissingMonitoring,
        )),
        Box::new(RequiredList::new(
            "Stages",
            |r| &r.pipeline.stages,
            ValidationError::MissingStages,
        )),
        Box::new(RequiredList::new(
            "Testing",
            |r| &r.pipeline.testing,
            ValidationError::MissingTesting,
        )),
        Box::new(RequiredList::new(
            "CodeQuality",
            |r| &r.pipeline.code_quality,
            ValidationError::MissingCodeQuality,
        )),
        Box::new(RequiredList::new(
            "Security",
            |r| &r.pipeline.security,
            ValidationError::MissingSecurity,
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LanguageId;

    #[test]
    fn test_required_text_rejects_blank() {
        let rule = RequiredText::new(
            "ProjectName",
            |r| &r.project.name,
            ValidationError::MissingProjectName,
        );
        let mut record = SelectionRecord::default();
        assert_eq!(rule.validate(&record), Err(ValidationError::MissingProjectName));

        record.project.name = "   ".to_string();
        assert_eq!(rule.validate(&record), Err(ValidationError::MissingProjectName));

        record.project.name = "demo".to_string();
        assert!(rule.validate(&record).is_ok());
    }

    #[test]
    fn test_required_list_rejects_blank_entries() {
        let rule = RequiredList::new(
            "Stages",
            |r| &r.pipeline.stages,
            ValidationError::MissingStages,
        );
        let mut record = SelectionRecord::default();
        assert_eq!(rule.validate(&record), Err(ValidationError::MissingStages));

        record.pipeline.stages = vec![String::new()];
        assert_eq!(rule.validate(&record), Err(ValidationError::MissingStages));

        record.pipeline.stages = vec!["build".to_string()];
        assert!(rule.validate(&record).is_ok());
    }

    #[test]
    fn test_language_rule() {
        let mut record = SelectionRecord::default();
        assert_eq!(
            LanguageSelectedRule.validate(&record),
            Err(ValidationError::MissingLanguage)
        );

        record.technology.language = Some(LanguageId::Custom(" ".to_string()));
        assert_eq!(
            LanguageSelectedRule.validate(&record),
            Err(ValidationError::MissingLanguage)
        );

        record.technology.language = Some(LanguageId::Custom("Elixir".to_string()));
        assert!(LanguageSelectedRule.validate(&record).is_ok());
    }

    #[test]
    fn test_default_rules_count_and_names() {
        let names: Vec<&str> = default_rules().iter().map(|r| r.name()).collect();
        assert_eq!(names.len(), 12);
        assert_eq!(names.first(), Some(&"ProjectName"));
        assert_eq!(names.last(), Some(&"Security"));
    }
}

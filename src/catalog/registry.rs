use super::language::{
    DotNetLanguage, JavaLanguage, JavaScriptLanguage, LanguageDefinition, PythonLanguage,
    TestTemplate, TypeScriptLanguage,
};
use super::warnings::{suggest, CatalogWarning};
use super::{FormChoices, LanguageId, LanguageOptions, CONTAINER_BUILD_TOOL};
use crate::selection::SelectionRecord;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Lookup table of legal values keyed by language.
///
/// Lookups never fail: an unknown or custom language yields empty results,
/// which callers treat as "free text allowed".
pub struct OptionCatalog {
    languages: HashMap<LanguageId, Arc<dyn LanguageDefinition>>,
    container_build_tool: String,
}

impl OptionCatalog {
    pub fn new() -> Self {
        Self {
            languages: HashMap::new(),
            container_build_tool: CONTAINER_BUILD_TOOL.to_string(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();

        catalog.register(Arc::new(PythonLanguage));
        catalog.register(Arc::new(JavaScriptLanguage));
        catalog.register(Arc::new(TypeScriptLanguage));
        catalog.register(Arc::new(JavaLanguage));
        catalog.register(Arc::new(DotNetLanguage));

        catalog
    }

    /// Process-wide catalog with the default languages
    pub fn shared() -> &'static OptionCatalog {
        static CATALOG: OnceLock<OptionCatalog> = OnceLock::new();
        CATALOG.get_or_init(OptionCatalog::with_defaults)
    }

    pub fn register(&mut self, definition: Arc<dyn LanguageDefinition>) {
        self.languages.insert(definition.id(), definition);
    }

    pub fn get_language(&self, language: &LanguageId) -> Option<&dyn LanguageDefinition> {
        self.languages.get(language).map(|l| l.as_ref())
    }

    /// Registered languages, known variants first in declaration order
    pub fn languages(&self) -> Vec<LanguageId> {
        let mut ids: Vec<LanguageId> = LanguageId::all_variants()
            .iter()
            .filter(|id| self.languages.contains_key(*id))
            .cloned()
            .collect();

        let mut custom: Vec<LanguageId> = self
            .languages
            .keys()
            .filter(|id| id.is_custom())
            .cloned()
            .collect();
        custom.sort_by(|a, b| a.name().cmp(b.name()));
        ids.extend(custom);

        ids
    }

    pub fn is_known(&self, language: &LanguageId) -> bool {
        self.languages.contains_key(language)
    }

    pub fn frameworks_for(&self, language: &LanguageId) -> &'static [&'static str] {
        self.get_language(language)
            .map(|l| l.frameworks())
            .unwrap_or(&[])
    }

    pub fn versions_for(&self, language: &LanguageId) -> &'static [&'static str] {
        self.get_language(language)
            .map(|l| l.versions())
            .unwrap_or(&[])
    }

    pub fn dependency_managers_for(&self, language: &LanguageId) -> &'static [&'static str] {
        self.get_language(language)
            .map(|l| l.dependency_managers())
            .unwrap_or(&[])
    }

    pub fn version_key_for(&self, language: &LanguageId) -> Option<&'static str> {
        self.get_language(language).and_then(|l| l.version_key())
    }

    pub fn test_template_for(&self, language: &LanguageId) -> Option<TestTemplate> {
        self.get_language(language).and_then(|l| l.test_template())
    }

    pub fn container_build_tool(&self) -> &str {
        &self.container_build_tool
    }

    pub fn with_container_build_tool(mut self, tool: impl Into<String>) -> Self {
        self.container_build_tool = tool.into();
        self
    }

    pub fn form_choices(&self) -> FormChoices {
        FormChoices::new(
            self.languages()
                .iter()
                .map(|id| id.name().to_string())
                .collect(),
        )
    }

    /// `None` for languages the catalog does not define
    pub fn language_options(&self, language: &LanguageId) -> Option<LanguageOptions> {
        let definition = self.get_language(language)?;
        Some(LanguageOptions {
            language: definition.id().name().to_string(),
            frameworks: definition.frameworks().to_vec(),
            versions: definition.versions().to_vec(),
            dependency_managers: definition.dependency_managers().to_vec(),
            version_key: definition.version_key(),
        })
    }

    /// Values in `record` that the catalog does not list for its language.
    ///
    /// Non-fatal: an empty result does not mean the record is valid, and a
    /// non-empty one does not block compilation.
    pub fn consistency_warnings(&self, record: &SelectionRecord) -> Vec<CatalogWarning> {
        let Some(language) = record.technology.language.as_ref() else {
            return Vec::new();
        };
        let Some(definition) = self.get_language(language) else {
            return Vec::new();
        };

        let mut warnings = Vec::new();

        let frameworks = definition.frameworks();
        if !frameworks.is_empty() {
            for framework in &record.technology.frameworks {
                if !frameworks.contains(&framework.as_str()) {
                    warnings.push(CatalogWarning::new(
                        "technology.frameworks",
                        framework,
                        language,
                        suggest(framework, frameworks),
                    ));
                }
            }
        }

        let version = record.technology.version.trim();
        let versions = definition.versions();
        if !version.is_empty() && !versions.is_empty() && !versions.contains(&version) {
            warnings.push(CatalogWarning::new(
                "technology.version",
                version,
                language,
                suggest(version, versions),
            ));
        }

        let manager = record.dependencies.manager.trim();
        let managers = definition.dependency_managers();
        if !manager.is_empty() && !managers.is_empty() && !managers.contains(&manager) {
            warnings.push(CatalogWarning::new(
                "dependencies.manager",
                manager,
                language,
                suggest(manager, managers),
            ));
        }

        warnings
    }
}

impl Default for OptionCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

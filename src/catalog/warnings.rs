use super::LanguageId;
use std::fmt;

const SUGGESTION_THRESHOLD: f64 = 0.7;

/// A selected value the catalog does not list for the chosen language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogWarning {
    pub field: &'static str,
    pub value: String,
    pub language: String,
    pub suggestion: Option<String>,
}

impl CatalogWarning {
    pub fn new(
        field: &'static str,
        value: &str,
        language: &LanguageId,
        suggestion: Option<String>,
    ) -> Self {
        Self {
            field,
            value: value.to_string(),
            language: language.name().to_string(),
            suggestion,
        }
    }
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' is not listed for {}",
            self.field, self.value, self.language
        )?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Closest catalog entry to `value`, if any is close enough
pub fn suggest(value: &str, candidates: &[&str]) -> Option<String> {
    let needle = value.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(exact) = candidates.iter().find(|c| c.to_lowercase() == needle) {
        return Some(exact.to_string());
    }

    candidates
        .iter()
        .map(|c| (c, strsim::normalized_levenshtein(&needle, &c.to_lowercase())))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(c, _)| c.to_string())
}

use crate::selection::SelectionRecord;
use crate::validation::rules::{default_rules, ValidationRule};
use crate::validation::ValidationError;
use tracing::debug;

/// A selection record that passed every required-field check.
///
/// Only [`Validator::accept`] builds one, so the compiler never sees
/// an incomplete record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRecord {
    record: SelectionRecord,
}

impl ValidRecord {
    pub fn record(&self) -> &SelectionRecord {
        &self.record
    }

    pub fn into_inner(self) -> SelectionRecord {
        self.record
    }
}

impl AsRef<SelectionRecord> for ValidRecord {
    fn as_ref(&self) -> &SelectionRecord {
        &self.record
    }
}

pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: Vec<Box<dyn ValidationRule>>) -> Self {
        Self { rules }
    }

    /// Runs the rules in order and stops at the first failure
    pub fn validate(&self, record: &SelectionRecord) -> Result<(), ValidationError> {
        for rule in &self.rules {
            if let Err(e) = rule.validate(record) {
                debug!(rule = rule.name(), field = e.field(), "Selection rejected");
                return Err(e);
            }
        }
        Ok(())
    }

    pub fn accept(&self, record: SelectionRecord) -> Result<ValidRecord, ValidationError> {
        self.validate(&record)?;
        Ok(ValidRecord { record })
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            rules: default_rules(),
        }
    }
}

/// Validates with the default rule set
pub fn validate(record: &SelectionRecord) -> Result<(), ValidationError> {
    Validator::default().validate(record)
}

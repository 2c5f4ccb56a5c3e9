use crate::validation::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

pub type BootstrapResult<T> = Result<T, BootstrapError>;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported input file {}: expected .yaml, .yml or .json", path.display())]
    UnsupportedInput { path: PathBuf },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to render {document}: {message}")]
    Render {
        document: &'static str,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_transparent() {
        let err: BootstrapError = ValidationError::MissingProjectName.into();
        assert_eq!(err.to_string(), ValidationError::MissingProjectName.to_string());
    }

    #[test]
    fn test_unsupported_input_display() {
        let err = BootstrapError::UnsupportedInput {
            path: PathBuf::from("answers.toml"),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported input file answers.toml: expected .yaml, .yml or .json"
        );
    }
}

use super::SelectionRecord;
use crate::error::{BootstrapError, BootstrapResult};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads a selection record from a `.yaml`, `.yml` or `.json` file
pub fn load_selection(path: &Path) -> BootstrapResult<SelectionRecord> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let parse: fn(&Path, &str) -> BootstrapResult<SelectionRecord> = match extension.as_deref() {
        Some("yaml") | Some("yml") => parse_yaml,
        Some("json") => parse_json,
        _ => {
            return Err(BootstrapError::UnsupportedInput {
                path: path.to_path_buf(),
            })
        }
    };

    let content = fs::read_to_string(path).map_err(|source| BootstrapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", content.len(), path.display());

    parse(path, &content)
}

fn parse_yaml(path: &Path, content: &str) -> BootstrapResult<SelectionRecord> {
    serde_yaml::from_str(content).map_err(|source| BootstrapError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_json(path: &Path, content: &str) -> BootstrapResult<SelectionRecord> {
    serde_json::from_str(content).map_err(|source| BootstrapError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LanguageId;
    use tempfile::TempDir;

    #[test]
    fn test_load_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("answers.yaml");
        fs::write(
            &path,
            "project:\n  name: demo\ntechnology:\n  language: Python\n  version: '3.11'\n",
        )
        .unwrap();

        let record = load_selection(&path).unwrap();
        assert_eq!(record.project.name, "demo");
        assert_eq!(record.technology.language, Some(LanguageId::Python));
        assert_eq!(record.technology.version, "3.11");
    }

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("answers.JSON");
        fs::write(
            &path,
            r#"{"project": {"name": "api"}, "pipeline": {"stages": ["build", "test"]}}"#,
        )
        .unwrap();

        let record = load_selection(&path).unwrap();
        assert_eq!(record.project.name, "api");
        assert_eq!(record.pipeline.stages, vec!["build", "test"]);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_selection(Path::new("answers.toml")).unwrap_err();
        assert!(matches!(err, BootstrapError::UnsupportedInput { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_selection(&dir.path().join("missing.yml")).unwrap_err();
        assert!(matches!(err, BootstrapError::Io { .. }));
    }

    #[test]
    fn test_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.yaml");
        fs::write(&path, "project: [unclosed").unwrap();

        let err = load_selection(&path).unwrap_err();
        assert!(matches!(err, BootstrapError::Yaml { .. }));
        assert!(err.to_string().contains("broken.yaml"));
    }
}

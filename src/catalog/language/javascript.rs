//! JavaScript and TypeScript definitions (npm, yarn, pnpm)
//!
//! Both run on Node, so they share versions, managers and the test job.

use super::{LanguageDefinition, TestTemplate};
use crate::catalog::LanguageId;

const NODE_VERSIONS: &[&str] = &["16", "18", "20", "22"];
const NODE_MANAGERS: &[&str] = &["npm", "yarn", "pnpm"];

fn node_test_template() -> TestTemplate {
    TestTemplate {
        image_repository: "node".to_string(),
        script: vec!["npm install".to_string(), "npm test".to_string()],
    }
}

pub struct JavaScriptLanguage;

impl LanguageDefinition for JavaScriptLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::JavaScript
    }

    fn frameworks(&self) -> &'static [&'static str] {
        &["Express", "NestJS", "Next.js", "React", "Vue.js", "Angular"]
    }

    fn versions(&self) -> &'static [&'static str] {
        NODE_VERSIONS
    }

    fn dependency_managers(&self) -> &'static [&'static str] {
        NODE_MANAGERS
    }

    fn version_key(&self) -> Option<&'static str> {
        Some("node_version")
    }

    fn test_template(&self) -> Option<TestTemplate> {
        Some(node_test_template())
    }
}

pub struct TypeScriptLanguage;

impl LanguageDefinition for TypeScriptLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::TypeScript
    }

    fn frameworks(&self) -> &'static [&'static str] {
        &["Express", "NestJS", "Next.js", "React", "Angular", "Fastify"]
    }

    fn versions(&self) -> &'static [&'static str] {
        NODE_VERSIONS
    }

    fn dependency_managers(&self) -> &'static [&'static str] {
        NODE_MANAGERS
    }

    fn version_key(&self) -> Option<&'static str> {
        Some("node_version")
    }

    fn test_template(&self) -> Option<TestTemplate> {
        Some(node_test_template())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_and_ts_share_node_axis() {
        assert_eq!(JavaScriptLanguage.versions(), TypeScriptLanguage.versions());
        assert_eq!(
            JavaScriptLanguage.dependency_managers(),
            TypeScriptLanguage.dependency_managers()
        );
        assert_eq!(JavaScriptLanguage.version_key(), Some("node_version"));
        assert_eq!(TypeScriptLanguage.version_key(), Some("node_version"));
    }

    #[test]
    fn test_node_test_template() {
        let template = TypeScriptLanguage.test_template().unwrap();
        assert_eq!(template.image_for("20"), "node:20");
        assert_eq!(template.script, vec!["npm install", "npm test"]);
    }
}

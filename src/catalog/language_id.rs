crate::define_id_enum! {
    /// Programming language identifier. Languages outside the catalog are kept
    /// as `Custom` and get free-text frameworks and managers.
    LanguageId {
        Python => "python" : "Python" | "py",
        JavaScript => "javascript" : "JavaScript" | "js" | "node" | "nodejs",
        TypeScript => "typescript" : "TypeScript" | "ts",
        Java => "java" : "Java",
        CSharp => "csharp" : "C#" | "dotnet" | ".net",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_id_serializes_display_name() {
        assert_eq!(
            serde_json::to_string(&LanguageId::Python).unwrap(),
            "\"Python\""
        );
        assert_eq!(serde_json::to_string(&LanguageId::CSharp).unwrap(), "\"C#\"");
    }

    #[test]
    fn test_language_id_deserializes_any_spelling() {
        let parsed: LanguageId = serde_json::from_str("\"python\"").unwrap();
        assert_eq!(parsed, LanguageId::Python);

        let parsed: LanguageId = serde_yaml::from_str("Node").unwrap();
        assert_eq!(parsed, LanguageId::JavaScript);

        let parsed: LanguageId = serde_yaml::from_str("TS").unwrap();
        assert_eq!(parsed, LanguageId::TypeScript);
    }

    #[test]
    fn test_custom_language_round_trip() {
        let parsed: LanguageId = serde_json::from_str("\"Elixir\"").unwrap();
        assert_eq!(parsed, LanguageId::Custom("Elixir".to_string()));
        assert!(parsed.is_custom());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"Elixir\"");
    }

    #[test]
    fn test_from_name_trims_whitespace() {
        assert_eq!(LanguageId::from_name("  Java "), Some(LanguageId::Java));
        assert_eq!(LanguageId::from_name("Cobol"), None);
    }

    #[test]
    fn test_slug_and_display() {
        assert_eq!(LanguageId::CSharp.slug(), "csharp");
        assert_eq!(LanguageId::CSharp.to_string(), "C#");
        assert_eq!(LanguageId::all_variants().len(), 5);
    }
}

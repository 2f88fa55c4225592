//! Unit tests for configuration loading.
use super::*;
use crate::types::{PrimitiveKind, TypeDescriptor};

#[test]
/// An empty document yields the built-in Go configuration.
fn test_empty_document() {
    let settings = Settings::from_json("{}").unwrap();
    assert_eq!(settings.target, TargetLanguage::Go);
    assert_eq!(settings.naming, NamingConfig::default());
    assert_eq!(settings.normalizer().normalize("map", false), "map_");
}

#[test]
/// Extra words extend the built-in tables.
fn test_extra_words() {
    let config = NamingConfig::from_json(
        r#"{ "extra_initialisms": ["GRPC"], "extra_reserved": ["context"] }"#,
    )
    .unwrap();
    assert!(config.is_initialism("grpc"));
    assert!(config.is_initialism("http"));
    assert!(config.is_reserved("context"));
    assert!(config.is_reserved("map"));

    let normalizer = Normalizer::new(config);
    assert_eq!(normalizer.normalize("grpc_client", true), "GRPCClient");
    assert_eq!(normalizer.normalize("context", false), "context_");
}

#[test]
/// Replacement lists drop the built-in tables.
fn test_replacement_lists() {
    let config =
        NamingConfig::from_json(r#"{ "initialisms": ["CSV"], "reserved": [] }"#).unwrap();
    assert!(config.is_initialism("csv"));
    assert!(!config.is_initialism("http"));
    assert!(config.reserved().is_empty());

    let normalizer = Normalizer::new(config);
    assert_eq!(normalizer.normalize("http_csv", true), "HttpCSV");
    assert_eq!(normalizer.normalize("map", false), "map");
}

#[test]
/// The target selects the reserved table and the type syntax.
fn test_target_and_charset() {
    let settings = Settings::from_json(r#"{ "target": "rust", "charset": "unicode" }"#).unwrap();
    assert_eq!(settings.target, TargetLanguage::Rust);
    assert_eq!(settings.naming.charset(), Charset::Unicode);
    assert!(settings.naming.is_reserved("fn"));
    assert!(!settings.naming.is_reserved("map"));

    let descriptor = TypeDescriptor::array_of(PrimitiveKind::Int64.into());
    assert_eq!(
        settings.type_resolver().type_name(&descriptor).unwrap(),
        "Vec<i64>"
    );
}

#[test]
/// Initialisms must be uppercase ASCII; reserved words ASCII letters and digits.
fn test_invalid_words() {
    assert_eq!(
        NamingConfig::from_json(r#"{ "extra_initialisms": ["Grpc"] }"#),
        Err(ConfigError::InvalidInitialism {
            word: "Grpc".to_string()
        })
    );
    assert_eq!(
        NamingConfig::from_json(r#"{ "initialisms": [""] }"#),
        Err(ConfigError::InvalidInitialism {
            word: String::new()
        })
    );
    assert_eq!(
        NamingConfig::from_json(r#"{ "extra_reserved": ["my-word"] }"#),
        Err(ConfigError::InvalidReservedWord {
            word: "my-word".to_string()
        })
    );
    assert_eq!(
        NamingConfig::from_json(r#"{ "extra_reserved": ["my_word"] }"#),
        Err(ConfigError::InvalidReservedWord {
            word: "my_word".to_string()
        })
    );
}

#[test]
/// Malformed JSON, unknown keys and unknown enum values are rejected.
fn test_malformed_documents() {
    for document in [
        "",
        "{",
        r#"{ "initialism": ["CSV"] }"#,
        r#"{ "target": "cobol" }"#,
        r#"{ "charset": "ebcdic" }"#,
    ] {
        assert!(
            matches!(
                NamingConfig::from_json(document),
                Err(ConfigError::Malformed { .. })
            ),
            "document {document:?}"
        );
    }
}

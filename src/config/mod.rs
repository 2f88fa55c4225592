//! Naming settings read from a JSON document.
//!
//! Every key is optional and unknown keys are rejected:
//! ```json
//! {
//!   "target": "go",
//!   "charset": "ascii",
//!   "extra_initialisms": ["GRPC"],
//!   "extra_reserved": ["context", "errors"]
//! }
//! ```
//! `initialisms` and `reserved` replace the built-in tables of the target;
//! `extra_initialisms` and `extra_reserved` extend whichever table is in use.
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::lexicon::WordSet;
use crate::naming::{Charset, NamingConfig, Normalizer};
use crate::target::{is_initialism_key, is_reserved_key, TargetLanguage};
use crate::types::TypeResolver;

//==================================================================================DOCUMENT
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
/// Raw shape of the configuration document.
struct ConfigDocument {
    #[serde(default)]
    target: TargetLanguage,
    #[serde(default)]
    charset: Charset,
    initialisms: Option<Vec<String>>,
    #[serde(default)]
    extra_initialisms: Vec<String>,
    reserved: Option<Vec<String>>,
    #[serde(default)]
    extra_reserved: Vec<String>,
}

//==================================================================================SETTINGS
/// Validated settings: the target language and the naming configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub target: TargetLanguage,
    pub naming: NamingConfig,
}

impl Settings {
    /// Parse and validate a configuration document.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let document: ConfigDocument =
            serde_json::from_str(document).map_err(|e| ConfigError::Malformed {
                message: e.to_string(),
            })?;

        let initialisms = build_word_set(
            WordSet::initialisms(),
            document.initialisms,
            document.extra_initialisms,
            is_initialism_key,
            |word| ConfigError::InvalidInitialism { word },
        )?;
        let reserved = build_word_set(
            WordSet::reserved(document.target),
            document.reserved,
            document.extra_reserved,
            is_reserved_key,
            |word| ConfigError::InvalidReservedWord { word },
        )?;

        Ok(Self {
            target: document.target,
            naming: NamingConfig::new(initialisms, reserved).with_charset(document.charset),
        })
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.naming.clone())
    }

    pub fn type_resolver(&self) -> TypeResolver<TargetLanguage> {
        TypeResolver::new(self.target)
    }
}

impl NamingConfig {
    /// Parse a configuration document, keeping only the naming part.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        Settings::from_json(document).map(|settings| settings.naming)
    }
}

/// Start from `builtin` (or from nothing when a replacement list is given) and
/// add every listed word after validating it.
fn build_word_set(
    builtin: WordSet,
    replacement: Option<Vec<String>>,
    extra: Vec<String>,
    is_valid: fn(&str) -> bool,
    invalid: fn(String) -> ConfigError,
) -> Result<WordSet, ConfigError> {
    let mut set = if replacement.is_some() {
        WordSet::default()
    } else {
        builtin
    };
    for word in replacement.into_iter().flatten().chain(extra) {
        if !is_valid(&word) {
            return Err(invalid(word));
        }
        set.insert(word);
    }
    Ok(set)
}

#[cfg(test)]
mod tests;

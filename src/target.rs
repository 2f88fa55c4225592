//! Target languages the generator can emit code for, and the rules lookup
//! table entries must follow.
//!
//! This module is shared with `build.rs`: the build script walks
//! [`TargetLanguage::ALL`] to find one reserved-word table per language and
//! validates every entry with the same predicates the run-time configuration
//! loader uses.

// Only part of this module is used by the build script.
#![allow(dead_code)]

use serde::Deserialize;

/// Output language of the code generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    /// Go: camel/Pascal case identifiers, `[]T` slices, `*T` references.
    #[default]
    Go,
    /// Rust: used for type names (`PascalCase`), `Vec<T>` and `Box<T>`.
    Rust,
}

impl TargetLanguage {
    /// Every supported language, in table generation order.
    pub const ALL: [TargetLanguage; 2] = [TargetLanguage::Go, TargetLanguage::Rust];

    /// Lowercase name, also the suffix of the reserved-word data file
    /// (`reserved_<name>.json`).
    pub const fn name(self) -> &'static str {
        match self {
            TargetLanguage::Go => "go",
            TargetLanguage::Rust => "rust",
        }
    }
}

//==================================================================================TABLE_KEYS
/// An initialism key is a non-empty run of uppercase ASCII letters and digits.
pub fn is_initialism_key(word: &str) -> bool {
    !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// A reserved-word key is a non-empty run of ASCII letters and digits.
/// Normalized identifiers never contain `_` before the escape is appended, so
/// a word containing one could never match.
pub fn is_reserved_key(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphanumeric())
}

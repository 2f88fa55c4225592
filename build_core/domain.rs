//! Structures deserialized from the word tables under `build_core/var/`.
use serde::Deserialize;

//==================================================================================INITIALISMS
#[derive(Debug, Deserialize)]
/// Table of acronyms kept as a single casing unit.
pub(crate) struct InitialismTable {
    /// Free-form description, copied into the generated doc comment.
    #[serde(rename = "Description")]
    pub(crate) description: Option<String>,
    /// Uppercase acronyms (e.g. "HTTP", "UTF8").
    #[serde(rename = "Words")]
    pub(crate) words: Vec<String>,
}

//==================================================================================RESERVED
#[derive(Debug, Deserialize)]
/// Reserved identifiers of one target language.
pub(crate) struct ReservedTable {
    /// Language name; must match `TargetLanguage::name`.
    #[serde(rename = "Language")]
    pub(crate) language: String,
    /// Words grouped by origin (keywords, builtin types, packages...).
    #[serde(rename = "Groups")]
    pub(crate) groups: Vec<WordGroup>,
}

#[derive(Debug, Deserialize)]
/// Named group of reserved words.
pub(crate) struct WordGroup {
    #[serde(rename = "Name")]
    pub(crate) name: String,
    #[serde(rename = "Words")]
    pub(crate) words: Vec<String>,
}

impl ReservedTable {
    /// Iterate over every word of every group.
    pub(crate) fn words(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|group| group.words.iter().map(String::as_str))
    }
}

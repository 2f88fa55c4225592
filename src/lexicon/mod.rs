//! Built-in word tables and the set type the normalizer looks words up in.
//! `generated_tables.rs` is produced at build time from `build_core/var/` and
//! exposes one sorted constant slice per table: `COMMON_INITIALISMS`,
//! `GO_RESERVED` and `RUST_RESERVED`.
include!(concat!(env!("OUT_DIR"), "/generated_tables.rs"));

use alloc::collections::BTreeSet;
use alloc::string::String;

use crate::target::TargetLanguage;

/// Built-in reserved-word table of a target language.
pub const fn reserved_table(target: TargetLanguage) -> &'static [&'static str] {
    match target {
        TargetLanguage::Go => GO_RESERVED,
        TargetLanguage::Rust => RUST_RESERVED,
    }
}

//==================================================================================WORD_SET
/// Immutable-by-convention set of words used for exact lookups.
///
/// The built-in tables are borrowed without allocation; a set only becomes
/// `Custom` once words are added at run time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSet {
    /// Static table. Must be sorted in byte order (the generated tables are).
    Builtin(&'static [&'static str]),
    /// Words supplied at run time.
    Custom(BTreeSet<String>),
}

impl WordSet {
    /// The built-in initialism table.
    pub const fn initialisms() -> Self {
        WordSet::Builtin(COMMON_INITIALISMS)
    }

    /// The built-in reserved-word table of `target`.
    pub const fn reserved(target: TargetLanguage) -> Self {
        WordSet::Builtin(reserved_table(target))
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        match self {
            WordSet::Builtin(words) => words.binary_search(&word).is_ok(),
            WordSet::Custom(words) => words.contains(word),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            WordSet::Builtin(words) => words.len(),
            WordSet::Custom(words) => words.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the words in byte order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        let (builtin, custom) = match self {
            WordSet::Builtin(words) => (Some(words.iter().copied()), None),
            WordSet::Custom(words) => (None, Some(words.iter().map(String::as_str))),
        };
        builtin
            .into_iter()
            .flatten()
            .chain(custom.into_iter().flatten())
    }

    /// Add a word, copying a built-in table into an owned set first.
    /// Returns `false` when the word was already present.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        match self {
            WordSet::Custom(words) => words.insert(word),
            WordSet::Builtin(table) => {
                if table.binary_search(&word.as_str()).is_ok() {
                    return false;
                }
                let mut words: BTreeSet<String> = table.iter().map(|w| String::from(*w)).collect();
                words.insert(word);
                *self = WordSet::Custom(words);
                true
            }
        }
    }
}

impl Default for WordSet {
    fn default() -> Self {
        WordSet::Custom(BTreeSet::new())
    }
}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        WordSet::Custom(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for WordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

#[cfg(test)]
mod tests;

//! Identifier normalization: turns any string into a camel or Pascal case
//! identifier of the target language.
//!
//! Normalization runs in three steps:
//! 1. segmentation into words (see [`Words`]),
//! 2. per-word casing, with initialisms rendered as one all-uppercase unit
//!    (or all-lowercase when they open a lower camel case identifier),
//! 3. a trailing `_` when the result is a reserved word of the target.
//!
//! ```text
//! "httpStatus", capitalize_first = true   → "HTTPStatus"
//! "foo__bar",   capitalize_first = true   → "FooBar"
//! "map",        capitalize_first = false  → "map_"
//! ```
use alloc::string::String;
use serde::Deserialize;

use crate::lexicon::WordSet;
use crate::target::TargetLanguage;

mod segment;
pub use segment::Words;

//==================================================================================CHARSET
/// Characters accepted as identifier content. Everything else is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Charset {
    /// ASCII letters and digits. Output is always plain ASCII.
    #[default]
    Ascii,
    /// Letters of any script and ASCII digits. Numeric letters (`Ⅻ`),
    /// superscripts (`²`) and non-ASCII digits are dropped.
    Unicode,
}

impl Charset {
    pub fn accepts(self, c: char) -> bool {
        match self {
            Charset::Ascii => c.is_ascii_alphanumeric(),
            Charset::Unicode => (c.is_alphabetic() && !c.is_numeric()) || c.is_ascii_digit(),
        }
    }
}

//==================================================================================CONFIG
/// Dictionaries and charset used by a [`Normalizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConfig {
    initialisms: WordSet,
    reserved: WordSet,
    charset: Charset,
}

impl NamingConfig {
    /// Configuration with explicit dictionaries and the ASCII charset.
    pub const fn new(initialisms: WordSet, reserved: WordSet) -> Self {
        Self {
            initialisms,
            reserved,
            charset: Charset::Ascii,
        }
    }

    /// Built-in initialisms and the built-in reserved words of `target`.
    pub const fn for_target(target: TargetLanguage) -> Self {
        Self::new(WordSet::initialisms(), WordSet::reserved(target))
    }

    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    pub fn with_initialisms(mut self, initialisms: WordSet) -> Self {
        self.initialisms = initialisms;
        self
    }

    pub fn with_reserved(mut self, reserved: WordSet) -> Self {
        self.reserved = reserved;
        self
    }

    pub fn initialisms(&self) -> &WordSet {
        &self.initialisms
    }

    pub fn reserved(&self) -> &WordSet {
        &self.reserved
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Case-insensitive initialism lookup: the word is uppercased first.
    pub fn is_initialism(&self, word: &str) -> bool {
        self.initialisms.contains(&word.to_uppercase())
    }

    /// Exact reserved-word lookup.
    pub fn is_reserved(&self, ident: &str) -> bool {
        self.reserved.contains(ident)
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self::for_target(TargetLanguage::Go)
    }
}

//==================================================================================NORMALIZER
/// Identifier normalizer bound to one [`NamingConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Normalizer {
    config: NamingConfig,
}

/// Normalizer with the built-in Go configuration.
static GO_NORMALIZER: Normalizer = Normalizer::new(NamingConfig::for_target(TargetLanguage::Go));

/// Make a valid Go identifier out of any string.
///
/// Produces `PascalCase` when `capitalize_first` is true and `camelCase`
/// otherwise. See [`Normalizer::normalize`].
pub fn goify(input: &str, capitalize_first: bool) -> String {
    GO_NORMALIZER.normalize(input, capitalize_first)
}

impl Normalizer {
    pub const fn new(config: NamingConfig) -> Self {
        Self { config }
    }

    /// Shared normalizer with the built-in Go configuration.
    pub fn go() -> &'static Normalizer {
        &GO_NORMALIZER
    }

    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// Segment `input` into words without changing their case.
    pub fn words(&self, input: &str) -> Words {
        Words::new(input, self.config.charset)
    }

    /// Normalize `input` into an identifier.
    ///
    /// Never fails: an input without any accepted character yields an empty
    /// string. The result is stable, i.e. normalizing it again with the same
    /// `capitalize_first` returns it unchanged.
    pub fn normalize(&self, input: &str, capitalize_first: bool) -> String {
        let mut ident = self.assemble(input, capitalize_first);
        // Casing can fuse two words into one that reads differently on the
        // next scan (`JM` + `Es` reads back as the initialism `JMES`). A pass
        // only changes the text when words merge or the lowered first word
        // splits, so it settles within one pass per word.
        for _ in 0..ident.len() {
            let settled = self.assemble(&ident, capitalize_first);
            if settled == ident {
                break;
            }
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "identifier {=str} re-cased to {=str}",
                ident.as_str(),
                settled.as_str()
            );
            ident = settled;
        }
        ident
    }

    /// One segmentation and casing pass followed by the reserved-word escape.
    fn assemble(&self, input: &str, capitalize_first: bool) -> String {
        let mut ident = String::with_capacity(input.len() + 1);
        for (index, word) in self.words(input).enumerate() {
            self.push_word(&mut ident, &word, index == 0, capitalize_first);
        }
        if self.config.is_reserved(&ident) {
            #[cfg(feature = "defmt")]
            defmt::trace!("escaping reserved identifier {=str}", ident.as_str());
            ident.push('_');
        }
        ident
    }

    /// Append `word` to `ident` with its casing rules applied.
    fn push_word(&self, ident: &mut String, word: &str, first: bool, capitalize_first: bool) {
        let lower_first = first && !capitalize_first;

        let upper = word.to_uppercase();
        if self.config.initialisms.contains(&upper) {
            if lower_first {
                ident.push_str(&upper.to_ascii_lowercase());
            } else {
                ident.push_str(&upper);
            }
            return;
        }

        let mut chars = word.chars();
        let Some(head) = chars.next() else {
            return;
        };
        let head = if lower_first {
            to_lower(head)
        } else if word.chars().all(|c| to_lower(c) == c) {
            to_upper(head)
        } else {
            head
        };
        ident.push(head);
        ident.push_str(chars.as_str());
    }
}

//==================================================================================CASE_MAPPING
/// Single-character case mappings. Characters whose mapping expands to several
/// characters (`ß` → `SS`) are kept as they are.
fn to_upper(c: char) -> char {
    single(c, c.to_uppercase())
}

fn to_lower(c: char) -> char {
    single(c, c.to_lowercase())
}

fn single(c: char, mut mapping: impl Iterator<Item = char>) -> char {
    match (mapping.next(), mapping.next()) {
        (Some(mapped), None) => mapped,
        _ => c,
    }
}

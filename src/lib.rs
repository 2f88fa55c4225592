//! `codegen-naming` library: the naming layer of a source code generator.
//! It turns arbitrary schema names into valid, idiomatically cased identifiers
//! (initialism dictionary, reserved-word escaping) and maps abstract type
//! descriptors to the native type names of the target language.
#![no_std]
extern crate alloc;
//==================================================================================
/// Configuration loading from JSON documents.
pub mod config;
/// Configuration and invariant errors.
pub mod error;
/// Built-in initialism and reserved-word tables, and the `WordSet` wrapper.
pub mod lexicon;
/// Identifier normalization: word segmentation, casing, reserved-word escape.
pub mod naming;
/// Target languages and the rules table entries follow (shared with `build.rs`).
pub mod target;
/// Type descriptors and the type name resolver.
pub mod types;
//==================================================================================
pub use config::Settings;
pub use error::{ConfigError, ResolveError};
pub use lexicon::WordSet;
pub use naming::{goify, Charset, NamingConfig, Normalizer};
pub use target::TargetLanguage;
pub use types::{
    go_native_type, go_type_name, go_type_ref, PrimitiveKind, TypeDescriptor, TypeResolver,
};

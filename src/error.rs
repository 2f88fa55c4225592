//! Error definitions shared across library modules.
//! Configuration errors are ordinary validation failures; `ResolveError`
//! signals a broken invariant in the caller and is kept a separate type so the
//! two can never be confused.
use alloc::string::String;
use thiserror_no_std::Error;

//==================================================================================CONFIG_ERROR
#[derive(Error, Debug, PartialEq, Eq)]
/// Errors raised while building a `NamingConfig` from a JSON document.
pub enum ConfigError {
    /// The document is not valid JSON or does not match the expected shape.
    #[error("Malformed naming configuration: {message}")]
    Malformed { message: String },
    /// An initialism is empty or not made of uppercase ASCII letters and digits.
    #[error("Invalid initialism {word:?}: expected uppercase ASCII letters and digits")]
    InvalidInitialism { word: String },
    /// A reserved word is empty or contains non-identifier characters.
    #[error("Invalid reserved word {word:?}: expected ASCII letters, digits or '_'")]
    InvalidReservedWord { word: String },
}

//==================================================================================RESOLVE_ERROR
#[derive(Error, Debug, PartialEq, Eq)]
/// Internal invariant violations detected by the type resolver.
///
/// These are bugs in the code that built the descriptor, not bad user input:
/// the current generation unit must be aborted, never patched with a default.
pub enum ResolveError {
    /// The descriptor variant has no type name of its own.
    #[error("Internal invariant violated: {descriptor} descriptor cannot be named directly")]
    UnsupportedDescriptor { descriptor: &'static str },
}

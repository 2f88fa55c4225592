//! Error set that can occur while generating the lookup tables during the build step.
use std::env::VarError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by the build script (JSON parsing, validation, code generation).
pub(crate) enum BuildError {
    /// A table entry cannot be used as a lookup key.
    #[error("[MESSAGE]:Invalid entry in [TABLE]:{table}, [WORD]:{word:?}, [COMMENT]:{comment}")]
    InvalidEntry {
        table: String,
        word: String,
        comment: &'static str,
    },

    /// A reserved-word file describes another language than its file name.
    #[error("[MESSAGE]:Language mismatch in [PATH]:{path}, expected {expected}, found {found}")]
    LanguageMismatch {
        path: PathBuf,
        expected: &'static str,
        found: String,
    },

    /// A table contains no words at all.
    #[error("[MESSAGE]:Empty table [TABLE]:{table}")]
    EmptyTable { table: String },

    /// Failed to read the `OUT_DIR` environment variable.
    #[error("[MESSAGE]:OUT_DIR error. [ERROR]:{source}")]
    OutDirErr {
        #[source]
        source: VarError,
    },

    /// Failure while parsing a JSON table.
    #[error("[MESSAGE]:Invalid JSON format [Error]:{0:?}")]
    ParseJson(#[from] serde_json::Error),

    /// Unable to read a file from disk.
    #[error("[MESSAGE]:Failed to read file [PATH]:{path} [ERROR]:{source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write the generated code to disk.
    #[error("[MESSAGE]:Failed to write file [PATH]:{path} [ERROR]:{source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Formatting error while writing generated code.
    #[error("[MESSAGE]:Failed to display writeln! macro [ERROR]:{source}")]
    WritelnErr {
        #[from]
        source: std::fmt::Error,
    },
}

//! Cargo build script: compiles the initialism and reserved-word tables.

// Re-use the target list and key rules from src/target.rs so the build
// script and the run-time configuration loader validate entries identically.
#[path = "src/target.rs"]
mod target;

mod build_core;
use crate::build_core::{
    conf::*,
    domain::{InitialismTable, ReservedTable},
    errors::BuildError,
    gen_tables::run_tables_gen,
};
use crate::target::TargetLanguage;

use std::fs;
use std::path::{Path, PathBuf};

// The word tables are authored as JSON under build_core/var/. This script
// validates them, sorts them and writes `generated_tables.rs` into OUT_DIR,
// which `src/lexicon/mod.rs` pulls in with `include!`. Lookups at run time are
// binary searches over constant slices: no allocation, no initialization order.

//==================================================================================MAIN
fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/target.rs");
    println!("cargo:rerun-if-changed={}", RESERVED_DIR);
    println!("cargo:rerun-if-env-changed={}", INITIALISMS_ENV);

    // 1. Locate the initialism table.
    // Priority order:
    //   1. CODEGEN_NAMING_INITIALISMS_PATH environment variable
    //   2. Default table shipped with the crate
    let default_initialisms_path = PathBuf::from(INITIALISMS_PATH);
    let initialisms_path = match std::env::var(INITIALISMS_ENV).ok().map(PathBuf::from) {
        Some(path) if path.exists() => {
            println!("cargo:warning=Using custom initialisms from {:?}", path);
            println!("cargo:rerun-if-changed={}", path.display());
            path
        }
        Some(path) => {
            println!(
                "cargo:warning=Custom initialisms path specified but file not found: {:?}",
                path
            );
            println!("cargo:warning=Falling back to the default initialisms");
            default_initialisms_path
        }
        None => default_initialisms_path,
    };
    let initialisms: InitialismTable = serde_json::from_str(&read_file(&initialisms_path)?)?;

    // 2. Load one reserved-word table per target language.
    let mut reserved = Vec::with_capacity(TargetLanguage::ALL.len());
    for language in TargetLanguage::ALL {
        let path = Path::new(RESERVED_DIR).join(format!("reserved_{}.json", language.name()));
        let table: ReservedTable = serde_json::from_str(&read_file(&path)?)?;
        if table.language != language.name() {
            return Err(BuildError::LanguageMismatch {
                path,
                expected: language.name(),
                found: table.language,
            });
        }
        reserved.push((language, table));
    }

    // 3. Generate and write the tables into `OUT_DIR`.
    let buffer_tables_code = run_tables_gen(&initialisms, &reserved)?;

    let out_dir_str = std::env::var("OUT_DIR").map_err(|e| BuildError::OutDirErr { source: e })?;
    let tables_file_path = PathBuf::from(out_dir_str).join(OUT_DIR_TABLES_FILE_NAME);

    fs::write(&tables_file_path, &buffer_tables_code).map_err(|e| BuildError::WriteFile {
        path: tables_file_path,
        source: e,
    })?;

    Ok(())
}

/// Read a table file into memory.
fn read_file(path: &Path) -> Result<String, BuildError> {
    fs::read_to_string(path).map_err(|e| BuildError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })
}

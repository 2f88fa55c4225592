//! Generate the static lookup tables from the JSON word lists.
use super::conf::*;
use super::domain::*;
use super::errors::*;
use super::name_helpers::*;
use crate::target::{is_initialism_key, is_reserved_key, TargetLanguage};

use std::collections::BTreeSet;
use std::fmt::Write;

/// Emit one sorted `&[&str]` slice per table.
pub(crate) fn run_tables_gen(
    initialisms: &InitialismTable,
    reserved: &[(TargetLanguage, ReservedTable)],
) -> Result<String, BuildError> {
    let mut buffer = String::new();
    writeln!(buffer, "// @generated by build.rs from build_core/var. Do not edit.")?;
    writeln!(buffer)?;

    let words = collect_words(
        INITIALISMS_TABLE_NAME,
        initialisms.words.iter().map(String::as_str),
        is_initialism_key,
        "expected uppercase ASCII letters and digits",
    )?;
    let doc = initialisms
        .description
        .as_deref()
        .unwrap_or("Acronyms kept as a single casing unit.");
    write_table(
        &mut buffer,
        &to_screaming_snake_case(INITIALISMS_TABLE_NAME),
        doc,
        &words,
    )?;

    for (language, table) in reserved {
        let table_name = format!("{} reserved", language.name());
        let words = collect_words(
            &table_name,
            table.words(),
            is_reserved_key,
            "expected ASCII letters and digits",
        )?;
        let groups = table
            .groups
            .iter()
            .map(|group| group.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let doc = format!(
            "Reserved `{}` identifiers: {}.",
            language.name(),
            groups
        );
        write_table(
            &mut buffer,
            &to_screaming_snake_case(&table_name),
            &doc,
            &words,
        )?;
    }

    Ok(buffer)
}

/// Validate and de-duplicate a table. `BTreeSet` keeps the words in byte order,
/// which is the order `str::cmp` uses for binary search.
fn collect_words<'a>(
    table: &str,
    words: impl Iterator<Item = &'a str>,
    is_valid: fn(&str) -> bool,
    comment: &'static str,
) -> Result<BTreeSet<&'a str>, BuildError> {
    let mut set = BTreeSet::new();
    for word in words {
        if !is_valid(word) {
            return Err(BuildError::InvalidEntry {
                table: table.to_string(),
                word: word.to_string(),
                comment,
            });
        }
        if !set.insert(word) {
            println!(
                "cargo:warning=[TABLE: {}] Duplicate word {:?} ignored",
                table, word
            );
        }
    }
    if set.is_empty() {
        return Err(BuildError::EmptyTable {
            table: table.to_string(),
        });
    }
    Ok(set)
}

/// Write a documented `pub const` slice.
fn write_table(
    buffer: &mut String,
    const_name: &str,
    doc: &str,
    words: &BTreeSet<&str>,
) -> Result<(), BuildError> {
    writeln!(buffer, "/// {}", doc.replace('\n', " "))?;
    writeln!(buffer, "///")?;
    writeln!(buffer, "/// Sorted in byte order.")?;
    writeln!(buffer, "pub const {}: &[&str] = &[", const_name)?;
    for word in words {
        writeln!(buffer, "    {:?},", word)?;
    }
    writeln!(buffer, "];")?;
    writeln!(buffer)?;
    Ok(())
}

//! Workspace for the build script: table definitions and the table generator.
pub mod conf;
pub mod domain;
pub mod errors;
pub mod gen_tables;
pub mod name_helpers;

//! Paths and constants used during build-time table generation.
//==================================================================================CONF
/// Default initialism table shipped with the crate.
pub(crate) const INITIALISMS_PATH: &str = "build_core/var/initialisms.json";
/// Directory holding one `reserved_<language>.json` file per target language.
pub(crate) const RESERVED_DIR: &str = "build_core/var";
/// Environment variable pointing to a replacement initialism table.
pub(crate) const INITIALISMS_ENV: &str = "CODEGEN_NAMING_INITIALISMS_PATH";
/// Generated table file name (written to `OUT_DIR`).
pub(crate) const OUT_DIR_TABLES_FILE_NAME: &str = "generated_tables.rs";
/// Name of the generated initialism slice.
pub(crate) const INITIALISMS_TABLE_NAME: &str = "common initialisms";

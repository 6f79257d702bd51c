//! Path resolution for the notebook database.
//!
//! Precedence: explicit path (CLI flag) > `NB_DB` env var > XDG data dir.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the database location.
pub const DB_ENV_VAR: &str = "NB_DB";

/// Get XDG-compliant data directory for notebook.
///
/// # Returns
/// Path to data directory: `~/.local/share/notebook/`, or `./notebook` when
/// neither `XDG_DATA_HOME` nor `HOME` is set.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .unwrap_or_else(|_| PathBuf::from("."));

    data_home.join("notebook")
}

/// Get default database file path (data_dir/notes.db).
pub fn get_db_path() -> PathBuf {
    get_data_dir().join("notes.db")
}

/// Resolve the database path from an optional CLI override.
pub fn resolve_db_path(cli: Option<PathBuf>) -> PathBuf {
    cli.or_else(|| env::var_os(DB_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(get_db_path)
}

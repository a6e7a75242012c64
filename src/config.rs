//! Storage keys and platform-specific paths

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Store key holding the JSON category document
pub const CATEGORIES_KEY: &str = "categories";

/// Store key holding the `"true"`/`"false"` dark-mode flag
pub const DARK_MODE_KEY: &str = "darkMode";

/// File name used by `export` when no output is given
pub const DEFAULT_EXPORT_FILE: &str = "categories.json";

/// Environment variable overriding the database location
pub const DB_ENV_VAR: &str = "LINKSHELF_DB";

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "LINKSHELF_LOG";

/// Get the linkshelf data directory
/// - macOS: ~/Library/Application Support/linkshelf/
/// - Linux: ~/.local/share/linkshelf/
/// - Windows: %APPDATA%/linkshelf/
pub fn data_dir() -> Result<PathBuf> {
    let data = dirs::data_dir().context("Could not determine data directory")?;
    Ok(data.join("linkshelf"))
}

/// Get the default store database path (<data dir>/storage.db)
pub fn default_db_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("storage.db"))
}

/// Resolve the database path: explicit flag, then `LINKSHELF_DB`, then the default
pub fn resolve_db_path(explicit: Option<&Path>) -> Result<PathBuf> {
    resolve_db_path_with(explicit, std::env::var_os(DB_ENV_VAR).map(PathBuf::from))
}

fn resolve_db_path_with(explicit: Option<&Path>, from_env: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    match from_env {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => default_db_path(),
    }
}

//! Shared utilities for commands

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;

use linkshelf::config;
use linkshelf::shelf::{BookmarkStore, Change};
use linkshelf::store::SqliteStore;

/// Open the bookmark shelf backed by the resolved database file
pub fn open_shelf(db: Option<&Path>) -> Result<BookmarkStore<SqliteStore>> {
    let db_path = config::resolve_db_path(db)?;
    tracing::debug!(path = %db_path.display(), "Opening store");

    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("Failed to open: {}", db_path.display()))?;
    Ok(BookmarkStore::new(store))
}

/// Describe the outcome of a mutation for the terminal
pub fn describe_change(change: Change, applied: &str) -> String {
    match change {
        Change::Applied => format!("{} {}", "Done:".green(), applied),
        Change::Skipped(reason) => format!("{} {}", "Skipped:".yellow(), reason),
    }
}

//! Bookmark store controller
//!
//! Every mutation is a full read-modify-write of the document held under
//! [`CATEGORIES_KEY`]. The dark-mode flag lives under its own key and is never
//! touched by document writes.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::model::{self, Category, Document, Link};
use super::url::format_url;
use crate::config::{CATEGORIES_KEY, DARK_MODE_KEY};
use crate::store::KeyValueStore;

/// Outcome of a mutating operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// The document was rewritten
    Applied,
    /// Nothing was written
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    BlankInput,
    CategoryNotFound,
    LinkNotFound,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankInput => write!(f, "input is blank"),
            Self::CategoryNotFound => write!(f, "no such category"),
            Self::LinkNotFound => write!(f, "no such link"),
        }
    }
}

/// Bookmark categories and links on top of an injected key/value store
pub struct BookmarkStore<S> {
    store: S,
}

impl<S: KeyValueStore> BookmarkStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Hand back the underlying store
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Rehydrate the full document; a missing key is an empty document
    pub fn categories(&self) -> Result<Document> {
        let raw = self
            .store
            .get(CATEGORIES_KEY)
            .context("Failed to read categories from store")?;

        match raw {
            Some(json) => serde_json::from_str(&json).context("Failed to parse stored categories"),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, doc: &Document) -> Result<()> {
        let json = serde_json::to_string(doc).context("Failed to serialize categories")?;
        self.store
            .set(CATEGORIES_KEY, &json)
            .context("Failed to write categories to store")
    }

    /// Append an empty category; blank names are ignored
    pub fn add_category(&mut self, name: &str) -> Result<Change> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(skipped(SkipReason::BlankInput));
        }

        let mut doc = self.categories()?;
        doc.push(Category::new(name));
        self.save(&doc)?;

        tracing::info!(category = name, "Added category");
        Ok(Change::Applied)
    }

    /// Append a link to the first category named `category`
    ///
    /// The URL is normalized first. An invalid URL still adds the link, with an
    /// empty URL.
    pub fn add_link(&mut self, category: &str, title: &str, url: &str) -> Result<Change> {
        let category = category.trim();
        let title = title.trim();
        let url = url.trim();
        if title.is_empty() || url.is_empty() {
            return Ok(skipped(SkipReason::BlankInput));
        }

        let mut doc = self.categories()?;
        let Some(target) = model::find_category_mut(&mut doc, category) else {
            return Ok(skipped(SkipReason::CategoryNotFound));
        };

        let url = format_url(url).unwrap_or_default();
        target.links.push(Link {
            title: title.to_string(),
            url,
        });
        self.save(&doc)?;

        tracing::info!(category, title, "Added link");
        Ok(Change::Applied)
    }

    /// Remove the first category named `name` together with its links
    pub fn delete_category(&mut self, name: &str) -> Result<Change> {
        let name = name.trim();
        let mut doc = self.categories()?;
        if model::remove_category(&mut doc, name).is_none() {
            return Ok(skipped(SkipReason::CategoryNotFound));
        }
        self.save(&doc)?;

        tracing::info!(category = name, "Deleted category");
        Ok(Change::Applied)
    }

    /// Remove the first link titled `title` from the first category named `category`
    pub fn delete_link(&mut self, category: &str, title: &str) -> Result<Change> {
        let category = category.trim();
        let title = title.trim();
        let mut doc = self.categories()?;
        let Some(target) = model::find_category_mut(&mut doc, category) else {
            return Ok(skipped(SkipReason::CategoryNotFound));
        };
        if target.remove_link(title).is_none() {
            return Ok(skipped(SkipReason::LinkNotFound));
        }
        self.save(&doc)?;

        tracing::info!(category, title, "Deleted link");
        Ok(Change::Applied)
    }

    /// The document as pretty-printed JSON, ready to be saved as a file
    pub fn export_document(&self) -> Result<String> {
        let doc = self.categories()?;
        serde_json::to_string_pretty(&doc).context("Failed to serialize categories")
    }

    /// Write [`Self::export_document`] to `path`
    pub fn export_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = self.export_document()?;
        fs::write(path, json).with_context(|| format!("Failed to write: {}", path.display()))?;

        tracing::info!(path = %path.display(), "Exported categories");
        Ok(())
    }

    /// Current dark-mode preference; anything but `"true"` reads as off
    pub fn dark_mode(&self) -> Result<bool> {
        let raw = self
            .store
            .get(DARK_MODE_KEY)
            .context("Failed to read dark mode preference")?;
        Ok(raw.as_deref() == Some("true"))
    }

    /// Flip and persist the dark-mode preference, returning the new value
    pub fn toggle_dark_mode(&mut self) -> Result<bool> {
        let enabled = !self.dark_mode()?;
        self.store
            .set(DARK_MODE_KEY, if enabled { "true" } else { "false" })
            .context("Failed to write dark mode preference")?;

        tracing::debug!(enabled, "Toggled dark mode");
        Ok(enabled)
    }
}

fn skipped(reason: SkipReason) -> Change {
    tracing::debug!(%reason, "Skipped");
    Change::Skipped(reason)
}

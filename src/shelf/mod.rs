//! Bookmark categories, links and the controller that persists them

pub mod controller;
pub mod model;
pub mod url;

pub use controller::{BookmarkStore, Change, SkipReason};
pub use model::{Category, Document, Link};

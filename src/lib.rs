//! linkshelf library
//!
//! Named categories of titled links, persisted as one JSON document in a
//! local key/value store.

pub mod config;
pub mod shelf;
pub mod store;

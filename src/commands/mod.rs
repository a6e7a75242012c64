//! CLI commands

pub mod category;
pub mod dark_mode;
pub mod export;
pub mod link;
pub mod list;
pub mod utils;

//! Link commands - Add and delete links inside a category

use anyhow::Result;
use std::path::Path;

use super::utils;

/// Execute the add-link command
pub fn add(db: Option<&Path>, category: &str, title: &str, url: &str) -> Result<()> {
    let mut shelf = utils::open_shelf(db)?;
    let change = shelf.add_link(category, title, url)?;
    println!(
        "{}",
        utils::describe_change(
            change,
            &format!("added link '{}' to '{}'", title.trim(), category)
        )
    );
    Ok(())
}

/// Execute the delete-link command
pub fn delete(db: Option<&Path>, category: &str, title: &str) -> Result<()> {
    let mut shelf = utils::open_shelf(db)?;
    let change = shelf.delete_link(category, title)?;
    println!(
        "{}",
        utils::describe_change(
            change,
            &format!("deleted link '{}' from '{}'", title, category)
        )
    );
    Ok(())
}

//! Category commands - Add and delete categories

use anyhow::Result;
use std::path::Path;

use super::utils;

/// Execute the add-category command
pub fn add(db: Option<&Path>, name: &str) -> Result<()> {
    let mut shelf = utils::open_shelf(db)?;
    let change = shelf.add_category(name)?;
    println!(
        "{}",
        utils::describe_change(change, &format!("added category '{}'", name.trim()))
    );
    Ok(())
}

/// Execute the delete-category command
pub fn delete(db: Option<&Path>, name: &str) -> Result<()> {
    let mut shelf = utils::open_shelf(db)?;
    let change = shelf.delete_category(name)?;
    println!(
        "{}",
        utils::describe_change(change, &format!("deleted category '{}'", name))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_delete() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("storage.db");

        add(Some(&db), "Work").unwrap();
        add(Some(&db), "  ").unwrap();
        assert_eq!(utils::open_shelf(Some(&db)).unwrap().categories().unwrap().len(), 1);

        delete(Some(&db), "Work").unwrap();
        assert!(utils::open_shelf(Some(&db))
            .unwrap()
            .categories()
            .unwrap()
            .is_empty());
    }
}

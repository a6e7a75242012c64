//! Dark mode command - Toggle or show the dark-mode preference

use anyhow::Result;
use std::path::Path;

use super::utils;

fn label(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

/// Execute the dark-mode command, returning the resulting preference
pub fn execute(db: Option<&Path>, status_only: bool) -> Result<bool> {
    let mut shelf = utils::open_shelf(db)?;

    let enabled = if status_only {
        shelf.dark_mode()?
    } else {
        shelf.toggle_dark_mode()?
    };

    println!("Dark mode: {}", label(enabled));
    Ok(enabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_status() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("storage.db");

        assert!(!execute(Some(&db), true).unwrap());
        assert!(execute(Some(&db), false).unwrap());
        assert!(execute(Some(&db), true).unwrap());
        assert!(!execute(Some(&db), false).unwrap());
    }
}

//! Export command - Write the category document as pretty-printed JSON

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

use super::utils;
use linkshelf::config::DEFAULT_EXPORT_FILE;

/// Where the export goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
}

impl ExportTarget {
    /// `-` means stdout, no value means `categories.json` in the current directory
    pub fn from_arg(output: Option<&str>) -> Self {
        match output {
            Some("-") => Self::Stdout,
            Some(path) => Self::File(PathBuf::from(path)),
            None => Self::File(PathBuf::from(DEFAULT_EXPORT_FILE)),
        }
    }
}

/// Execute the export command
pub fn execute(db: Option<&Path>, target: &ExportTarget) -> Result<()> {
    let shelf = utils::open_shelf(db)?;

    match target {
        ExportTarget::Stdout => {
            println!("{}", shelf.export_document()?);
        }
        ExportTarget::File(path) => {
            shelf.export_to(path)?;
            eprintln!("{} {}", "Exported to".green(), path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkshelf::shelf::Document;

    #[test]
    fn test_target_from_arg() {
        assert_eq!(ExportTarget::from_arg(Some("-")), ExportTarget::Stdout);
        assert_eq!(
            ExportTarget::from_arg(Some("out.json")),
            ExportTarget::File(PathBuf::from("out.json"))
        );
        assert_eq!(
            ExportTarget::from_arg(None),
            ExportTarget::File(PathBuf::from("categories.json"))
        );
    }

    #[test]
    fn test_export_file() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("storage.db");
        let out = dir.path().join("export.json");

        {
            let mut shelf = utils::open_shelf(Some(&db)).unwrap();
            shelf.add_category("Docs").unwrap();
            shelf.add_link("Docs", "Std", "doc.rust-lang.org/std").unwrap();
        }

        execute(Some(&db), &ExportTarget::File(out.clone())).unwrap();

        let exported: Document =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        let stored = utils::open_shelf(Some(&db)).unwrap().categories().unwrap();
        assert_eq!(exported, stored);
    }
}

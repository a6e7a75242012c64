//! Persisted bookmark document
//!
//! The whole document is one JSON array stored under a single key:
//! `[{ "name": ..., "links": [{ "title": ..., "url": ... }] }]`

use serde::{Deserialize, Serialize};

/// A titled URL belonging to one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub title: String,
    /// Normalized URL, empty when the entered URL was invalid
    pub url: String,
}

/// A named grouping of links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Lookup key; not guaranteed unique, lookups take the first match
    pub name: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            links: Vec::new(),
        }
    }

    /// Remove the first link with `title`, returning it
    pub fn remove_link(&mut self, title: &str) -> Option<Link> {
        let idx = self.links.iter().position(|l| l.title == title)?;
        Some(self.links.remove(idx))
    }
}

/// The root document: every category in display order
pub type Document = Vec<Category>;

/// First category named `name`
pub fn find_category_mut<'a>(doc: &'a mut Document, name: &str) -> Option<&'a mut Category> {
    doc.iter_mut().find(|c| c.name == name)
}

/// Remove the first category named `name`, returning it
pub fn remove_category(doc: &mut Document, name: &str) -> Option<Category> {
    let idx = doc.iter().position(|c| c.name == name)?;
    Some(doc.remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(title: &str) -> Link {
        Link {
            title: title.to_string(),
            url: format!("http://{}.example", title),
        }
    }

    #[test]
    fn test_json_shape() {
        let mut cat = Category::new("Docs");
        cat.links.push(Link {
            title: "Rust".to_string(),
            url: "http://rust-lang.org".to_string(),
        });

        let json = serde_json::to_string(&vec![cat]).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"Docs","links":[{"title":"Rust","url":"http://rust-lang.org"}]}]"#
        );
    }

    #[test]
    fn test_missing_links_field() {
        let doc: Document = serde_json::from_str(r#"[{"name":"Empty"}]"#).unwrap();
        assert_eq!(doc, vec![Category::new("Empty")]);
    }

    #[test]
    fn test_first_match_wins() {
        let mut doc = vec![Category::new("dup"), Category::new("dup")];
        find_category_mut(&mut doc, "dup")
            .unwrap()
            .links
            .push(link("a"));

        assert_eq!(doc[0].links.len(), 1);
        assert!(doc[1].links.is_empty());

        let removed = remove_category(&mut doc, "dup").unwrap();
        assert_eq!(removed.links.len(), 1);
        assert_eq!(doc.len(), 1);
        assert!(doc[0].links.is_empty());
    }

    #[test]
    fn test_remove_link_first_only() {
        let mut cat = Category::new("c");
        cat.links.push(link("x"));
        cat.links.push(link("y"));
        cat.links.push(link("x"));

        assert!(cat.remove_link("x").is_some());
        let titles: Vec<_> = cat.links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["y", "x"]);

        assert!(cat.remove_link("missing").is_none());
    }
}

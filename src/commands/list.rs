//! List command - Render every category and its links

use anyhow::Result;
use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::path::Path;

use super::utils;
use linkshelf::shelf::url::encode_href;
use linkshelf::shelf::{Category, Link};

/// Colors for the rendered table, picked from the dark-mode preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(enabled: bool) -> Self {
        if enabled {
            Self::Dark
        } else {
            Self::Light
        }
    }

    fn heading(self) -> Color {
        match self {
            Self::Light => Color::DarkBlue,
            Self::Dark => Color::White,
        }
    }

    fn href(self) -> Color {
        match self {
            Self::Light => Color::Blue,
            Self::Dark => Color::Cyan,
        }
    }

    fn preset(self) -> &'static str {
        match self {
            Self::Light => presets::UTF8_FULL_CONDENSED,
            Self::Dark => presets::UTF8_BORDERS_ONLY,
        }
    }
}

/// Execute the list command and return formatted output
pub fn execute(db: Option<&Path>, filter: Option<&str>) -> Result<String> {
    let shelf = utils::open_shelf(db)?;
    let categories = shelf.categories()?;
    let theme = Theme::from_dark_mode(shelf.dark_mode()?);

    Ok(render(&categories, theme, filter))
}

/// Render categories as a table
///
/// A filter keeps a whole category when its name matches, and otherwise only the
/// links whose title matches (case-insensitive).
pub fn render(categories: &[Category], theme: Theme, filter: Option<&str>) -> String {
    let pattern = filter.map(str::to_lowercase);

    let mut table = Table::new();
    table
        .load_preset(theme.preset())
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Title").add_attribute(Attribute::Bold),
            Cell::new("URL").add_attribute(Attribute::Bold),
        ]);

    let mut shown_categories = 0;
    let mut shown_links = 0;

    for category in categories {
        let name_matches = pattern
            .as_ref()
            .map_or(true, |p| category.name.to_lowercase().contains(p.as_str()));

        let links: Vec<&Link> = match &pattern {
            Some(p) if !name_matches => category
                .links
                .iter()
                .filter(|l| l.title.to_lowercase().contains(p.as_str()))
                .collect(),
            _ => category.links.iter().collect(),
        };

        if !name_matches && links.is_empty() {
            continue;
        }

        shown_categories += 1;
        let heading = || Cell::new(&category.name).fg(theme.heading());

        if links.is_empty() {
            table.add_row(vec![heading(), Cell::new("-"), Cell::new("-")]);
            continue;
        }

        for (i, link) in links.iter().enumerate() {
            let name_cell = if i == 0 { heading() } else { Cell::new("") };
            let href_cell = if link.url.is_empty() {
                Cell::new("(invalid)").fg(Color::Red)
            } else {
                Cell::new(encode_href(&link.url)).fg(theme.href())
            };
            table.add_row(vec![name_cell, Cell::new(&link.title), href_cell]);
            shown_links += 1;
        }
    }

    if shown_categories == 0 {
        return if categories.is_empty() {
            "No categories yet. Add one with `linkshelf add-category <NAME>`.".to_string()
        } else {
            "Nothing matches the filter.".to_string()
        };
    }

    let mut output = table.to_string();
    output.push_str(&format!(
        "\n\n{} categories, {} links",
        shown_categories, shown_links
    ));
    output
}

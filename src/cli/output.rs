//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use termtree::Tree;

use crate::domain::{Catalog, Place, Visit};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print plain output (no color)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// `[n] Name (d mi)` entry of a numbered list, 1-based.
pub fn numbered_place(index: usize, place: &Place) -> String {
    format!("[{}] {} ({} mi)", index + 1, place.name, place.distance)
}

/// `Name - Subcategory (d mi)` entry of a plain list.
pub fn place_line(place: &Place) -> String {
    format!("{} - {} ({} mi)", place.name, place.subcategory, place.distance)
}

/// Multi-line details block of one place.
pub fn place_details(place: &Place) -> String {
    format!(
        "{}\nCategory: {}\nSubcategory: {}\nDistance: {} miles\nWebsite: {}",
        place.name.bold(),
        place.category,
        place.subcategory,
        place.distance,
        place.website
    )
}

/// Build a display tree (root → category → subcategory → place) from a walk.
///
/// Consecutive visits with the same category/subcategory share a node, which
/// matches both walks since each expands a category completely.
pub fn render_tree<'a>(
    title: &str,
    visits: impl Iterator<Item = Visit<'a>>,
    catalog: &Catalog,
) -> Tree<String> {
    let mut root = Tree::new(title.to_string());
    let mut current: Option<(&str, &str)> = None;

    for visit in visits {
        let Some(place) = catalog.get(visit.place) else {
            continue;
        };
        let leaf = format!("{} ({} miles away)", place.name, place.distance);

        match current {
            Some((category, subcategory))
                if category == visit.category && subcategory == visit.subcategory => {}
            Some((category, _)) if category == visit.category => {
                if let Some(node) = root.leaves.last_mut() {
                    node.push(Tree::new(visit.subcategory.to_string()));
                }
            }
            _ => {
                let mut node = Tree::new(format!("{} Category", visit.category));
                node.push(Tree::new(visit.subcategory.to_string()));
                root.push(node);
            }
        }
        current = Some((visit.category, visit.subcategory));

        if let Some(bucket) = root
            .leaves
            .last_mut()
            .and_then(|node| node.leaves.last_mut())
        {
            bucket.push(Tree::new(leaf));
        }
    }

    root
}

//! Two-level category tree: category -> subcategory -> bucket of places

use std::collections::HashMap;

use tracing::{instrument, trace};

use crate::domain::entities::{Place, PlaceId};

/// Ordered bucket of places under one (category, subcategory) pair.
#[derive(Debug, Clone)]
pub struct SubcategoryNode {
    pub name: String,
    pub places: Vec<PlaceId>,
}

/// A category and its subcategories in first-insertion order.
#[derive(Debug, Clone)]
pub struct CategoryNode {
    pub name: String,
    pub subcategories: Vec<SubcategoryNode>,
    index: HashMap<String, usize>,
}

impl CategoryNode {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            subcategories: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn bucket_mut(&mut self, subcategory: &str) -> &mut SubcategoryNode {
        let pos = match self.index.get(subcategory) {
            Some(&pos) => pos,
            None => {
                trace!(category = %self.name, subcategory, "new subcategory");
                self.subcategories.push(SubcategoryNode {
                    name: subcategory.to_string(),
                    places: Vec::new(),
                });
                let pos = self.subcategories.len() - 1;
                self.index.insert(subcategory.to_string(), pos);
                pos
            }
        };
        &mut self.subcategories[pos]
    }

    pub fn subcategory(&self, name: &str) -> Option<&SubcategoryNode> {
        self.index.get(name).map(|&pos| &self.subcategories[pos])
    }
}

/// Index over the catalog keyed by category and subcategory.
///
/// Entries are created lazily on first insertion and never removed, so both
/// levels iterate in first-insertion order.
#[derive(Debug, Default, Clone)]
pub struct CategoryTree {
    categories: Vec<CategoryNode>,
    index: HashMap<String, usize>,
}

impl CategoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(level = "trace", skip(self, place), fields(name = %place.name))]
    pub fn insert(&mut self, id: PlaceId, place: &Place) {
        let pos = match self.index.get(&place.category) {
            Some(&pos) => pos,
            None => {
                self.categories.push(CategoryNode::new(&place.category));
                let pos = self.categories.len() - 1;
                self.index.insert(place.category.clone(), pos);
                pos
            }
        };
        self.categories[pos]
            .bucket_mut(&place.subcategory)
            .places
            .push(id);
    }

    /// Bucket at `(category, subcategory)`; empty for unknown paths.
    pub fn lookup(&self, category: &str, subcategory: &str) -> &[PlaceId] {
        self.category(category)
            .and_then(|node| node.subcategory(subcategory))
            .map(|bucket| bucket.places.as_slice())
            .unwrap_or(&[])
    }

    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn subcategories(&self, category: &str) -> Vec<&str> {
        self.category(category)
            .map(|node| node.subcategories.iter().map(|s| s.name.as_str()).collect())
            .unwrap_or_default()
    }

    /// All places of a category, subcategories concatenated in insertion order.
    pub fn places_in(&self, category: &str) -> Vec<PlaceId> {
        self.category(category)
            .map(|node| {
                node.subcategories
                    .iter()
                    .flat_map(|s| s.places.iter().copied())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether any bucket under `category` holds a place.
    pub fn has_places(&self, category: &str) -> bool {
        self.category(category)
            .map(|node| node.subcategories.iter().any(|s| !s.places.is_empty()))
            .unwrap_or(false)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.index.contains_key(category)
    }

    pub fn category(&self, name: &str) -> Option<&CategoryNode> {
        self.index.get(name).map(|&pos| &self.categories[pos])
    }

    /// Category nodes in insertion order.
    pub fn nodes(&self) -> &[CategoryNode] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;

    fn build(records: &[(&str, &str, &str)]) -> (Catalog, CategoryTree, Vec<PlaceId>) {
        let mut catalog = Catalog::new();
        let mut tree = CategoryTree::new();
        let mut ids = Vec::new();
        for (name, category, subcategory) in records {
            let place = Place::new(*name, *category, *subcategory, 1.0, "").unwrap();
            let id = catalog.add(place.clone());
            tree.insert(id, &place);
            ids.push(id);
        }
        (catalog, tree, ids)
    }

    #[test]
    fn given_inserts_when_listing_keys_then_first_insertion_order() {
        let (_, tree, _) = build(&[
            ("a", "Services", "Bank"),
            ("b", "Food", "Boba"),
            ("c", "Services", "Transportation"),
            ("d", "Food", "Bakery"),
            ("e", "Services", "Bank"),
        ]);

        assert_eq!(tree.categories(), vec!["Services", "Food"]);
        assert_eq!(tree.subcategories("Services"), vec!["Bank", "Transportation"]);
        assert_eq!(tree.subcategories("Food"), vec!["Boba", "Bakery"]);
    }

    #[test]
    fn given_unknown_path_when_looking_up_then_empty() {
        let (_, tree, _) = build(&[("a", "Food", "Boba")]);

        assert!(tree.lookup("Food", "Bakery").is_empty());
        assert!(tree.lookup("Shopping", "Boba").is_empty());
        assert!(tree.subcategories("Shopping").is_empty());
        assert!(!tree.has_places("Shopping"));
    }

    #[test]
    fn given_category_when_flattening_then_subcategories_concatenated() {
        let (_, tree, ids) = build(&[
            ("a", "Food", "Boba"),
            ("b", "Food", "Bakery"),
            ("c", "Food", "Boba"),
        ]);

        assert_eq!(tree.places_in("Food"), vec![ids[0], ids[2], ids[1]]);
    }
}

//! Explorer service
//!
//! The session object for one user browsing the catalog. Owns the catalog,
//! the category tree, the navigation stack and the session state, and exposes
//! the operations the menu shell and the one-shot commands are built on.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::domain::recommend::DEFAULT_LIMIT;
use crate::domain::{
    traverse, Catalog, CategoryTree, DomainError, HistoryEntry, MenuCategory, NavOutcome,
    NavState, Navigator, Place, PlaceId, Recommender, Session, Strategy, TraversalOrder, Visit,
};

/// How the explorer presents the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerOptions {
    /// Top-level menu in display order; empty derives it from the catalog
    pub menu_categories: Vec<String>,
    /// Categories that open a subcategory menu instead of a flat list
    pub nested_categories: Vec<String>,
    pub recommendation_limit: usize,
}

impl Default for ExplorerOptions {
    fn default() -> Self {
        Self {
            menu_categories: Vec::new(),
            nested_categories: Vec::new(),
            recommendation_limit: DEFAULT_LIMIT,
        }
    }
}

impl ExplorerOptions {
    fn menu(&self) -> Vec<MenuCategory> {
        self.menu_categories
            .iter()
            .map(|name| MenuCategory::new(name.clone(), self.is_nested(name)))
            .collect()
    }

    fn is_nested(&self, name: &str) -> bool {
        self.nested_categories.iter().any(|n| n == name)
    }
}

/// Service owning all state of a browsing session.
#[derive(Debug)]
pub struct ExplorerService {
    options: ExplorerOptions,
    catalog: Catalog,
    tree: CategoryTree,
    navigator: Navigator,
    recommender: Recommender,
    session: Session,
}

impl ExplorerService {
    /// Create an empty explorer.
    pub fn new(options: ExplorerOptions) -> Self {
        let navigator = Navigator::new(options.menu());
        let recommender = Recommender::new(options.recommendation_limit);
        Self {
            options,
            catalog: Catalog::new(),
            tree: CategoryTree::new(),
            navigator,
            recommender,
            session: Session::default(),
        }
    }

    /// Create an explorer seeded with `places` in order.
    pub fn with_places(options: ExplorerOptions, places: impl IntoIterator<Item = Place>) -> Self {
        let mut service = Self::new(options);
        for place in places {
            service.add_place(place);
        }
        debug!("with_places: loaded {} places", service.catalog.len());
        service
    }

    // ------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------

    /// Add a place to the catalog and its tree bucket.
    pub fn add_place(&mut self, place: Place) -> PlaceId {
        let new_category = !self.tree.contains_category(&place.category);
        let id = self.catalog.add(place);
        if let Some(place) = self.catalog.get(id) {
            self.tree.insert(id, place);
            if new_category && self.options.menu_categories.is_empty() {
                let entry =
                    MenuCategory::new(place.category.clone(), self.options.is_nested(&place.category));
                self.navigator.add_menu_entry(entry);
            }
        }
        id
    }

    pub fn place(&self, id: PlaceId) -> Option<&Place> {
        self.catalog.get(id)
    }

    /// Resolve ids to places, in the given order.
    pub fn places(&self, ids: &[PlaceId]) -> Vec<&Place> {
        self.catalog.resolve(ids).collect()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tree(&self) -> &CategoryTree {
        &self.tree
    }

    pub fn list_all(&self) -> Vec<PlaceId> {
        self.catalog.ids().to_vec()
    }

    pub fn search(&self, query: &str) -> Vec<PlaceId> {
        debug!("search: query={:?}", query);
        self.catalog.search(query)
    }

    pub fn filter_by_max_distance(&self, threshold: f64) -> Vec<PlaceId> {
        debug!("filter_by_max_distance: threshold={}", threshold);
        self.catalog.within(threshold)
    }

    pub fn find_by_name(&self, name: &str) -> ApplicationResult<PlaceId> {
        self.catalog
            .find_by_name(name)
            .ok_or_else(|| DomainError::UnknownPlace(name.to_string()).into())
    }

    /// Random pick from the whole catalog; `None` when it is empty.
    pub fn surprise<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<PlaceId> {
        self.catalog.ids().choose(rng).copied()
    }

    // ------------------------------------------------------------
    // Traversal and recommendation
    // ------------------------------------------------------------

    pub fn traverse(&self, order: TraversalOrder) -> impl Iterator<Item = Visit<'_>> + '_ {
        debug!("traverse: order={}", order);
        traverse(&self.tree, order)
    }

    pub fn recommend_by_similarity(&self, reference: PlaceId) -> Vec<PlaceId> {
        match self.catalog.get(reference) {
            Some(place) => self
                .recommender
                .by_similarity(&self.catalog, &self.tree, place),
            None => Vec::new(),
        }
    }

    pub fn recommend_by_proximity(&self, reference: PlaceId) -> Vec<PlaceId> {
        match self.catalog.get(reference) {
            Some(place) => self.recommender.by_proximity(&self.catalog, place),
            None => Vec::new(),
        }
    }

    pub fn recommend(&self, reference: PlaceId, strategy: Strategy) -> Vec<PlaceId> {
        match strategy {
            Strategy::Similarity => self.recommend_by_similarity(reference),
            Strategy::Proximity => self.recommend_by_proximity(reference),
        }
    }

    // ------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------

    pub fn menu(&self) -> &[MenuCategory] {
        self.navigator.menu()
    }

    pub fn nav_state(&self) -> NavState {
        self.navigator.state()
    }

    pub fn current_view(&self) -> NavOutcome {
        self.navigator.current(&self.tree)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn enter_category(&mut self, key: &str) -> ApplicationResult<NavOutcome> {
        Ok(self.navigator.enter_category(&self.tree, key)?)
    }

    /// Enter a subcategory of the current nested category and log it in the history.
    #[instrument(level = "debug", skip(self))]
    pub fn enter_subcategory(&mut self, key: &str) -> ApplicationResult<NavOutcome> {
        let outcome = self.navigator.enter_subcategory(&self.tree, key)?;
        if let NavState::InSubcategory {
            category,
            subcategory,
        } = &outcome.state
        {
            self.session.history.record_subcategory(category, subcategory);
        }
        Ok(outcome)
    }

    pub fn go_back(&mut self) -> NavOutcome {
        self.navigator.go_back(&self.tree)
    }

    pub fn go_home(&mut self) -> NavOutcome {
        self.navigator.go_home(&self.tree)
    }

    // ------------------------------------------------------------
    // Session
    // ------------------------------------------------------------

    /// Log that the details of `id` were shown.
    pub fn record_view(&mut self, id: PlaceId) {
        if self.catalog.get(id).is_some() {
            self.session.history.record_place(id);
        }
    }

    /// Add to favorites unless already present (by name). Returns whether it was added.
    pub fn toggle_favorite(&mut self, id: PlaceId) -> bool {
        match self.catalog.get(id) {
            Some(place) => {
                let added = self.session.favorites.add(id, place);
                debug!("toggle_favorite: name={} added={}", place.name, added);
                added
            }
            None => false,
        }
    }

    pub fn is_favorite(&self, id: PlaceId) -> bool {
        self.catalog
            .get(id)
            .is_some_and(|place| self.session.favorites.contains(place))
    }

    pub fn favorites(&self) -> Vec<PlaceId> {
        self.session.favorites.ids().to_vec()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.session.history.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn place(name: &str, category: &str, subcategory: &str) -> Place {
        Place::new(name, category, subcategory, 1.0, "").unwrap()
    }

    #[test]
    fn given_no_configured_menu_when_adding_places_then_menu_follows_catalog() {
        let options = ExplorerOptions {
            nested_categories: vec!["Food".into()],
            ..Default::default()
        };
        let service = ExplorerService::with_places(
            options,
            vec![
                place("Wells Fargo", "Services", "Bank"),
                place("Teaspoon Boba", "Food", "Boba"),
                place("Warm Springs BART", "Services", "Transportation"),
            ],
        );

        assert_eq!(
            service.menu(),
            &[
                MenuCategory::new("Services", false),
                MenuCategory::new("Food", true)
            ]
        );
    }

    #[test]
    fn given_empty_catalog_when_picking_surprise_then_none() {
        let service = ExplorerService::new(ExplorerOptions::default());
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(service.surprise(&mut rng), None);
    }

    #[test]
    fn given_catalog_when_picking_surprise_then_returns_catalog_member() {
        let service = ExplorerService::with_places(
            ExplorerOptions::default(),
            vec![place("a", "X", "x"), place("b", "Y", "y")],
        );
        let mut rng = StdRng::seed_from_u64(7);

        let pick = service.surprise(&mut rng).unwrap();
        assert!(service.list_all().contains(&pick));
    }
}

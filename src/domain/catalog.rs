//! Place catalog: arena storage with load-order iteration

use generational_arena::Arena;
use tracing::instrument;

use crate::domain::entities::{Place, PlaceId};

/// Append-only collection of places.
///
/// Places live in a generational arena so every other structure can refer to
/// them by [`PlaceId`]. `order` keeps load order, which is the catalog order
/// used for listing and for tie-breaking.
#[derive(Debug)]
pub struct Catalog {
    arena: Arena<Place>,
    order: Vec<PlaceId>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            order: Vec::new(),
        }
    }

    #[instrument(level = "trace", skip(self, place), fields(name = %place.name))]
    pub fn add(&mut self, place: Place) -> PlaceId {
        let id = PlaceId(self.arena.insert(place));
        self.order.push(id);
        id
    }

    pub fn get(&self, id: PlaceId) -> Option<&Place> {
        self.arena.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids in load order.
    pub fn ids(&self) -> &[PlaceId] {
        &self.order
    }

    /// Places in load order.
    pub fn iter(&self) -> impl Iterator<Item = (PlaceId, &Place)> + '_ {
        self.order
            .iter()
            .filter_map(move |&id| self.get(id).map(|place| (id, place)))
    }

    /// Places whose name contains `query`, ignoring case.
    #[instrument(level = "debug", skip(self))]
    pub fn search(&self, query: &str) -> Vec<PlaceId> {
        let needle = query.to_lowercase();
        self.iter()
            .filter(|(_, place)| place.name.to_lowercase().contains(&needle))
            .map(|(id, _)| id)
            .collect()
    }

    /// Places with `distance <= max_distance`, in load order.
    #[instrument(level = "debug", skip(self))]
    pub fn within(&self, max_distance: f64) -> Vec<PlaceId> {
        self.iter()
            .filter(|(_, place)| place.distance <= max_distance)
            .map(|(id, _)| id)
            .collect()
    }

    /// First place with exactly this name, falling back to a case-insensitive match.
    pub fn find_by_name(&self, name: &str) -> Option<PlaceId> {
        self.iter()
            .find(|(_, place)| place.name == name)
            .or_else(|| {
                let wanted = name.to_lowercase();
                self.iter()
                    .find(|(_, place)| place.name.to_lowercase() == wanted)
            })
            .map(|(id, _)| id)
    }

    /// Resolve a slice of ids to places, skipping stale handles.
    pub fn resolve<'a, 'b>(&'a self, ids: &'b [PlaceId]) -> impl Iterator<Item = &'a Place> + 'b
    where
        'a: 'b,
    {
        ids.iter().filter_map(move |&id| self.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, distance: f64) -> Place {
        Place::new(name, "Food", "General", distance, "").unwrap()
    }

    #[test]
    fn given_added_places_when_iterating_then_keeps_load_order() {
        let mut catalog = Catalog::new();
        catalog.add(place("b", 1.0));
        catalog.add(place("a", 2.0));

        let names: Vec<_> = catalog.iter().map(|(_, p)| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn given_temporary_ids_when_resolving_then_places_outlive_the_ids() {
        let mut catalog = Catalog::new();
        let kept = catalog.add(place("kept", 1.0));
        let mut other = Catalog::new();
        other.add(place("x", 1.0));
        let gone = other.add(place("gone", 2.0));

        let places: Vec<&Place> = {
            let ids = vec![gone, kept];
            catalog.resolve(&ids).collect()
        };

        let names: Vec<_> = places.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["kept"]);
    }

    #[test]
    fn given_mixed_case_name_when_finding_then_falls_back_to_case_insensitive() {
        let mut catalog = Catalog::new();
        let id = catalog.add(place("Gong Cha", 1.0));

        assert_eq!(catalog.find_by_name("Gong Cha"), Some(id));
        assert_eq!(catalog.find_by_name("gong cha"), Some(id));
        assert_eq!(catalog.find_by_name("Sharetea"), None);
    }

    #[test]
    fn given_threshold_when_filtering_then_includes_equal_distance() {
        let mut catalog = Catalog::new();
        let near = catalog.add(place("near", 0.5));
        catalog.add(place("far", 2.5));
        let edge = catalog.add(place("edge", 1.0));

        assert_eq!(catalog.within(1.0), vec![near, edge]);
    }
}

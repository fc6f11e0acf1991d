//! Session state: view history and favorites

use std::collections::HashSet;

use crate::domain::entities::{Place, PlaceId};

/// One entry of the view history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEntry {
    /// Details of a place were viewed
    Place(PlaceId),
    /// A subcategory was opened from a nested category menu
    Subcategory {
        category: String,
        subcategory: String,
    },
}

/// Append-only log of what the user looked at. Duplicates are kept.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn record_place(&mut self, id: PlaceId) {
        self.entries.push(HistoryEntry::Place(id));
    }

    pub fn record_subcategory(&mut self, category: &str, subcategory: &str) {
        self.entries.push(HistoryEntry::Subcategory {
            category: category.to_string(),
            subcategory: subcategory.to_string(),
        });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

/// Bookmarked places, unique by name, in the order they were added.
#[derive(Debug, Default, Clone)]
pub struct Favorites {
    ids: Vec<PlaceId>,
    names: HashSet<String>,
}

impl Favorites {
    /// Add `place` unless a favorite with the same name exists.
    ///
    /// Returns `true` when it was added.
    pub fn add(&mut self, id: PlaceId, place: &Place) -> bool {
        if !self.names.insert(place.name.clone()) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn contains(&self, place: &Place) -> bool {
        self.names.contains(&place.name)
    }

    pub fn ids(&self) -> &[PlaceId] {
        &self.ids
    }
}

/// Mutable per-run state of the single user.
#[derive(Debug, Default, Clone)]
pub struct Session {
    pub history: History,
    pub favorites: Favorites,
}

//! Recommendation engine: similarity by tree neighborhood, proximity by distance

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::domain::catalog::Catalog;
use crate::domain::entities::{Place, PlaceId};
use crate::domain::tree::CategoryTree;

/// Default number of recommendations returned.
pub const DEFAULT_LIMIT: usize = 5;

/// Recommendation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Same subcategory, falling back to same category
    #[default]
    Similarity,
    /// Closest distance values
    Proximity,
}

/// Produces related places for a reference place.
///
/// Both strategies are pure reads of the catalog and tree. A reference that is
/// not in the catalog (by name) yields no candidates.
#[derive(Debug, Clone, Copy)]
pub struct Recommender {
    limit: usize,
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl Recommender {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Peers from the same subcategory, or from the same category when the
    /// subcategory has no other members. Bucket order, no ranking.
    #[instrument(level = "debug", skip(self, catalog, tree, reference), fields(reference = %reference.name))]
    pub fn by_similarity(
        &self,
        catalog: &Catalog,
        tree: &CategoryTree,
        reference: &Place,
    ) -> Vec<PlaceId> {
        if !is_known(catalog, reference) {
            debug!("reference not in catalog");
            return Vec::new();
        }
        let others = |ids: Vec<PlaceId>| -> Vec<PlaceId> {
            ids.into_iter()
                .filter(|&id| catalog.get(id).is_some_and(|p| !p.same_as(reference)))
                .collect()
        };

        let same_subcategory =
            others(tree.lookup(&reference.category, &reference.subcategory).to_vec());
        let candidates = if same_subcategory.is_empty() {
            debug!("no subcategory peers, falling back to category");
            others(tree.places_in(&reference.category))
                .into_iter()
                .unique()
                .collect()
        } else {
            same_subcategory
        };

        candidates.into_iter().take(self.limit).collect()
    }

    /// The places whose distance is closest to the reference's distance.
    ///
    /// Selection keeps a max-heap of at most `limit` candidates, so the
    /// catalog is never fully sorted. Ties go to the earlier catalog entry.
    #[instrument(level = "debug", skip(self, catalog, reference), fields(reference = %reference.name))]
    pub fn by_proximity(&self, catalog: &Catalog, reference: &Place) -> Vec<PlaceId> {
        if self.limit == 0 || !is_known(catalog, reference) {
            return Vec::new();
        }

        let mut heap: BinaryHeap<Candidate> = BinaryHeap::with_capacity(self.limit + 1);
        for (seq, (id, place)) in catalog.iter().enumerate() {
            if place.same_as(reference) {
                continue;
            }
            heap.push(Candidate {
                gap: (place.distance - reference.distance).abs(),
                seq,
                id,
            });
            if heap.len() > self.limit {
                heap.pop();
            }
        }

        heap.into_sorted_vec().into_iter().map(|c| c.id).collect()
    }
}

fn is_known(catalog: &Catalog, reference: &Place) -> bool {
    catalog.iter().any(|(_, place)| place.same_as(reference))
}

/// Heap entry ordered by distance gap, then catalog position.
#[derive(Debug)]
struct Candidate {
    gap: f64,
    seq: usize,
    id: PlaceId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.gap
            .total_cmp(&other.gap)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with(distances: &[(&str, f64)]) -> (Catalog, Vec<PlaceId>) {
        let mut catalog = Catalog::new();
        let ids = distances
            .iter()
            .map(|(name, d)| catalog.add(Place::new(*name, "Food", "General", *d, "").unwrap()))
            .collect();
        (catalog, ids)
    }

    #[test]
    fn given_equal_gaps_when_selecting_then_earlier_entry_wins() {
        let (catalog, ids) = catalog_with(&[("ref", 1.0), ("a", 1.5), ("b", 0.5), ("c", 1.5)]);
        let reference = catalog.get(ids[0]).unwrap().clone();

        let result = Recommender::new(2).by_proximity(&catalog, &reference);

        assert_eq!(result, vec![ids[1], ids[2]]);
    }

    #[test]
    fn given_zero_limit_when_recommending_then_empty() {
        let (catalog, ids) = catalog_with(&[("ref", 1.0), ("a", 1.5)]);
        let reference = catalog.get(ids[0]).unwrap().clone();

        assert!(Recommender::new(0).by_proximity(&catalog, &reference).is_empty());
    }

    #[test]
    fn given_single_place_catalog_when_recommending_then_both_strategies_empty() {
        let (catalog, ids) = catalog_with(&[("ref", 1.0)]);
        let mut tree = CategoryTree::new();
        let reference = catalog.get(ids[0]).unwrap().clone();
        tree.insert(ids[0], &reference);
        let recommender = Recommender::default();

        assert!(recommender.by_similarity(&catalog, &tree, &reference).is_empty());
        assert!(recommender.by_proximity(&catalog, &reference).is_empty());
    }

    #[test]
    fn given_unknown_reference_when_recommending_then_empty() {
        let (catalog, _) = catalog_with(&[("a", 1.5), ("b", 2.0)]);
        let stranger = Place::new("stranger", "Food", "General", 1.0, "").unwrap();

        assert!(Recommender::default().by_proximity(&catalog, &stranger).is_empty());
    }
}

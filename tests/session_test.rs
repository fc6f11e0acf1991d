//! Integration tests for favorites, history and surprise picks.

use rand::rngs::StdRng;
use rand::SeedableRng;

use hidden_gems::application::services::{ExplorerOptions, ExplorerService};
use hidden_gems::config::Settings;
use hidden_gems::domain::{HistoryEntry, Place};
use hidden_gems::infrastructure::sample::sample_places;

fn explorer() -> ExplorerService {
    ExplorerService::with_places(Settings::default().explorer_options(), sample_places())
}

#[test]
fn given_place_when_favoriting_twice_then_stored_once() {
    let mut explorer = explorer();
    let id = explorer.find_by_name("Lake Elizabeth").unwrap();

    assert!(explorer.toggle_favorite(id));
    assert!(!explorer.toggle_favorite(id));

    assert_eq!(explorer.favorites(), vec![id]);
    assert!(explorer.is_favorite(id));
}

#[test]
fn given_duplicate_names_when_favoriting_then_identity_is_the_name() {
    let places = vec![
        Place::new("Twin", "Food", "Boba", 1.0, "").unwrap(),
        Place::new("Twin", "Services", "Bank", 2.0, "").unwrap(),
    ];
    let mut explorer = ExplorerService::with_places(ExplorerOptions::default(), places);
    let ids = explorer.list_all();

    assert!(explorer.toggle_favorite(ids[0]));
    assert!(!explorer.toggle_favorite(ids[1]));
    assert_eq!(explorer.favorites().len(), 1);
}

#[test]
fn given_browsing_when_viewing_then_history_keeps_chronological_order() {
    let mut explorer = explorer();
    explorer.enter_category("Food").unwrap();
    explorer.enter_subcategory("Boba").unwrap();
    let teaspoon = explorer.find_by_name("Teaspoon Boba").unwrap();
    let gong_cha = explorer.find_by_name("Gong Cha").unwrap();

    explorer.record_view(teaspoon);
    explorer.record_view(gong_cha);
    explorer.record_view(teaspoon);

    assert_eq!(
        explorer.history(),
        &[
            HistoryEntry::Subcategory {
                category: "Food".into(),
                subcategory: "Boba".into()
            },
            HistoryEntry::Place(teaspoon),
            HistoryEntry::Place(gong_cha),
            HistoryEntry::Place(teaspoon),
        ]
    );
}

#[test]
fn given_seeded_rng_when_picking_then_returns_catalog_member() {
    let explorer = explorer();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let id = explorer.surprise(&mut rng).unwrap();
        assert!(explorer.list_all().contains(&id));
    }
}

#[test]
fn given_empty_catalog_when_picking_then_none() {
    let explorer = ExplorerService::new(ExplorerOptions::default());
    let mut rng = StdRng::seed_from_u64(7);

    assert!(explorer.surprise(&mut rng).is_none());
    assert!(explorer.list_all().is_empty());
}

//! Integration tests for search, filtering and recommendations over the sample catalog.

use rstest::{fixture, rstest};

use hidden_gems::application::services::{ExplorerOptions, ExplorerService};
use hidden_gems::config::Settings;
use hidden_gems::domain::{PlaceId, Strategy};
use hidden_gems::infrastructure::sample::sample_places;

#[fixture]
fn explorer() -> ExplorerService {
    ExplorerService::with_places(Settings::default().explorer_options(), sample_places())
}

fn names(explorer: &ExplorerService, ids: &[PlaceId]) -> Vec<String> {
    explorer
        .places(ids)
        .into_iter()
        .map(|p| p.name.clone())
        .collect()
}

#[rstest]
fn given_boba_query_when_searching_then_matches_names_only(explorer: ExplorerService) {
    let ids = explorer.search("BOBA");

    // "Rose Tea Spot" mentions boba in its subcategory only
    assert_eq!(names(&explorer, &ids), vec!["Teaspoon Boba", "Rose Tea Boba"]);
}

#[rstest]
fn given_threshold_when_filtering_then_keeps_places_at_or_below_in_load_order(
    explorer: ExplorerService,
) {
    let ids = explorer.filter_by_max_distance(0.3);

    assert_eq!(
        names(&explorer, &ids),
        vec!["Donut Place", "Wells Fargo", "Warm Springs BART"]
    );
}

#[rstest]
#[case("Teaspoon Boba", vec!["Rose Tea Boba"])]
#[case("Amami Sushi", vec!["Toro Sushi Stone Grill & Bar", "Kakuna Sushi", "Spoon Korean Bistro", "Wingstop", "Cold Stone Creamery"])]
#[case("Gong Cha", vec!["Rose Tea Spot", "Happy Lemon", "85°C Bakery Café", "Tea Top", "TP Tea"])]
#[case("Lake Elizabeth", vec!["Mission Peak Regional Preserve", "Lake Elizabeth / Central Park", "Alviso Marina County Park", "Coyote Creek Trail"])]
#[case("Mission San Jose", vec![])]
fn given_reference_when_recommending_by_similarity_then_uses_tree_neighbors(
    explorer: ExplorerService,
    #[case] reference: &str,
    #[case] expected: Vec<&str>,
) {
    let id = explorer.find_by_name(reference).unwrap();

    let ids = explorer.recommend(id, Strategy::Similarity);

    assert_eq!(names(&explorer, &ids), expected);
}

#[rstest]
fn given_reference_when_recommending_by_proximity_then_closest_first_with_stable_ties(
    explorer: ExplorerService,
) {
    let id = explorer.find_by_name("Wells Fargo").unwrap();

    let ids = explorer.recommend(id, Strategy::Proximity);

    assert_eq!(
        names(&explorer, &ids),
        vec![
            "Donut Place",
            "Warm Springs BART",
            "Rose Tea Boba",
            "Teaspoon Boba",
            "Round1 Bowling & Amusement",
        ]
    );
}

#[rstest]
fn given_any_reference_when_recommending_by_proximity_then_sorted_and_excludes_reference(
    explorer: ExplorerService,
) {
    for id in explorer.list_all() {
        let reference = explorer.place(id).unwrap().clone();
        let ids = explorer.recommend_by_proximity(id);

        assert_eq!(ids.len(), 5);
        let gaps: Vec<f64> = explorer
            .places(&ids)
            .into_iter()
            .map(|p| {
                assert_ne!(p.name, reference.name);
                (p.distance - reference.distance).abs()
            })
            .collect();
        assert!(gaps.windows(2).all(|w| w[0] <= w[1]), "{}", reference.name);
    }
}

#[test]
fn given_configured_limit_when_recommending_then_caps_results() {
    let options = ExplorerOptions {
        recommendation_limit: 2,
        ..Settings::default().explorer_options()
    };
    let explorer = ExplorerService::with_places(options, sample_places());
    let id = explorer.find_by_name("Gong Cha").unwrap();

    assert_eq!(explorer.recommend_by_similarity(id).len(), 2);
    assert_eq!(explorer.recommend_by_proximity(id).len(), 2);
}

#[rstest]
fn given_unknown_name_when_resolving_then_errors(explorer: ExplorerService) {
    assert!(explorer.find_by_name("Nowhere Cafe").is_err());
}

#[rstest]
fn given_lowercase_name_when_resolving_then_matches_case_insensitively(
    explorer: ExplorerService,
) {
    let id = explorer.find_by_name("gong cha").unwrap();
    assert_eq!(explorer.place(id).unwrap().name, "Gong Cha");
}

//! Integration tests for Settings loading with layered merge semantics.
//!
//! Merge Semantics:
//! - Defaults → Global: REPLACE (global defines the real baseline)
//! - Global → Local: `menu.nested` UNION with negation, everything else REPLACE
//! - Any → Env vars: REPLACE (explicit user override, see `config_env_test.rs`)

use std::fs;

use tempfile::TempDir;

use hidden_gems::config::Settings;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn given_global_config_when_loading_then_replaces_defaults() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("hidden-gems.toml");
    fs::write(
        &global,
        r#"
recommendation_limit = 3

[menu]
nested = ["Drinks/Cafe"]
"#,
    )
    .unwrap();

    let settings = Settings::load_from(Some(global.as_path()), None).expect("load settings");

    assert_eq!(settings.recommendation_limit, 3);
    assert_eq!(settings.menu.nested, strings(&["Drinks/Cafe"]));
    assert_eq!(settings.menu.categories.len(), 6, "unset arrays keep defaults");
    assert!(settings.show_random_pick);
}

#[test]
fn given_global_and_local_config_when_loading_then_local_unions_nested_with_negation() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("global.toml");
    let local = dir.path().join("local.toml");
    fs::write(
        &global,
        r#"
recommendation_limit = 3

[menu]
nested = ["Drinks/Cafe", "Services"]
"#,
    )
    .unwrap();
    fs::write(
        &local,
        r#"
show_random_pick = false

[menu]
nested = ["Food", "!Services"]
categories = ["Food", "Drinks/Cafe"]
"#,
    )
    .unwrap();

    let settings = Settings::load_from(Some(global.as_path()), Some(local.as_path()))
        .expect("load settings");

    assert_eq!(settings.recommendation_limit, 3, "global scalar survives");
    assert!(!settings.show_random_pick);
    assert_eq!(settings.menu.nested, strings(&["Drinks/Cafe", "Food"]));
    assert_eq!(settings.menu.categories, strings(&["Food", "Drinks/Cafe"]));
}

#[test]
fn given_local_catalog_file_with_tilde_when_loading_then_expands_home() {
    let dir = TempDir::new().unwrap();
    let local = dir.path().join("local.toml");
    fs::write(&local, r#"catalog_file = "~/places.toml""#).unwrap();

    let settings = Settings::load_from(None, Some(local.as_path())).expect("load settings");

    let home = std::env::var("HOME").expect("HOME should be set");
    let path = settings.catalog_file.expect("catalog_file set");
    assert!(path.starts_with(&home), "{}", path.display());
    assert!(path.ends_with("places.toml"));
}

#[test]
fn given_missing_local_config_when_loading_then_errors() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let result = Settings::load_from(None, Some(missing.as_path()));

    assert!(result.is_err());
}

#[test]
fn given_missing_global_config_when_loading_then_skipped() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let settings = Settings::load_from(Some(missing.as_path()), None).expect("load settings");

    assert_eq!(settings.recommendation_limit, 5);
}

#[test]
fn given_malformed_config_when_loading_then_reports_config_error() {
    let dir = TempDir::new().unwrap();
    let local = dir.path().join("broken.toml");
    fs::write(&local, "recommendation_limit = \"many\"").unwrap();

    let err = Settings::load_from(None, Some(local.as_path())).unwrap_err();

    assert!(err.to_string().contains("broken.toml"), "{}", err);
}

#[test]
fn given_template_when_parsing_then_is_valid_toml() {
    let template = Settings::template();

    let parsed: Settings = toml::from_str(&template).expect("template parses");

    assert_eq!(parsed, Settings::default());
}

//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/hidden-gems/hidden-gems.toml`
//! 3. Local config: file given with `--config`
//! 4. Environment variables: `HIDDENGEMS_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::services::ExplorerOptions;
use crate::application::ApplicationError;
use crate::domain::recommend::DEFAULT_LIMIT;

/// Top-level menu configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MenuConfig {
    /// Menu categories in display order (empty: derive from the catalog)
    pub categories: Vec<String>,
    /// Categories that open a subcategory menu
    pub nested: Vec<String>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            categories: vec![
                "Food".into(),
                "Drinks/Cafe".into(),
                "Shopping & Entertainment".into(),
                "Nature & Parks".into(),
                "Services".into(),
                "Places Nearby".into(),
            ],
            nested: vec!["Food".into()],
        }
    }
}

/// Raw menu config for intermediate parsing (arrays are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawMenuConfig {
    pub categories: Option<Vec<String>>,
    pub nested: Option<Vec<String>>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub catalog_file: Option<PathBuf>,
    pub recommendation_limit: Option<usize>,
    pub show_random_pick: Option<bool>,
    #[serde(default)]
    pub menu: RawMenuConfig,
}

impl MenuConfig {
    /// Merge arrays with union semantics and negation support.
    ///
    /// - Items from overlay are appended to base, keeping base order
    /// - Items prefixed with `!` remove the corresponding item from the result
    /// - Duplicates are de-duplicated
    ///
    /// # Examples
    /// ```ignore
    /// merge_array(&["a", "b"], &["c"])       // → ["a", "b", "c"]
    /// merge_array(&["a", "b"], &["!a", "c"]) // → ["b", "c"]
    /// ```
    pub fn merge_array(base: &[String], overlay: &[String]) -> Vec<String> {
        let mut result: Vec<String> = Vec::with_capacity(base.len() + overlay.len());
        for item in base {
            if !result.contains(item) {
                result.push(item.clone());
            }
        }

        for pattern in overlay {
            if let Some(negated) = pattern.strip_prefix('!') {
                result.retain(|item| item != negated);
            } else if !result.contains(pattern) {
                result.push(pattern.clone());
            }
        }
        result
    }

    /// Merge overlay config onto self (base).
    ///
    /// - `categories` is an ordered menu: overlay replaces it when specified
    /// - `nested`: union merge with negation support (if overlay specified)
    pub fn merge(&self, overlay: &RawMenuConfig) -> Self {
        Self {
            categories: overlay
                .categories
                .clone()
                .unwrap_or_else(|| self.categories.clone()),
            nested: overlay
                .nested
                .as_ref()
                .map(|o| Self::merge_array(&self.nested, o))
                .unwrap_or_else(|| self.nested.clone()),
        }
    }

    /// Apply global config onto defaults.
    ///
    /// Arrays specified in the global config replace the defaults entirely.
    pub fn apply_global(&self, global: &RawMenuConfig) -> Self {
        Self {
            categories: global
                .categories
                .clone()
                .unwrap_or_else(|| self.categories.clone()),
            nested: global.nested.clone().unwrap_or_else(|| self.nested.clone()),
        }
    }
}

/// Unified configuration for hidden-gems.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// TOML catalog file (default: built-in sample catalog)
    pub catalog_file: Option<PathBuf>,
    /// Maximum number of recommendations per query
    pub recommendation_limit: usize,
    /// Show a random pick when the menu shell starts
    pub show_random_pick: bool,
    /// Top-level menu settings
    pub menu: MenuConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_file: None,
            recommendation_limit: DEFAULT_LIMIT,
            show_random_pick: true,
            menu: MenuConfig::default(),
        }
    }
}

/// Get the XDG config directory for hidden-gems.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "hidden-gems").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("hidden-gems.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Options for the explorer service.
    pub fn explorer_options(&self) -> ExplorerOptions {
        ExplorerOptions {
            menu_categories: self.menu.categories.clone(),
            nested_categories: self.menu.nested.clone(),
            recommendation_limit: self.recommendation_limit,
        }
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(path) = &self.catalog_file {
            let raw = path.to_string_lossy();
            let expanded = shellexpand::full(raw.as_ref())
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| raw.to_string());
            self.catalog_file = Some(PathBuf::from(expanded));
        }
    }

    /// Merge overlay config onto self (base).
    ///
    /// - Scalar options: overlay wins if Some, otherwise keep base
    /// - Menu: see [`MenuConfig::merge`]
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            catalog_file: overlay
                .catalog_file
                .clone()
                .or_else(|| self.catalog_file.clone()),
            recommendation_limit: overlay
                .recommendation_limit
                .unwrap_or(self.recommendation_limit),
            show_random_pick: overlay.show_random_pick.unwrap_or(self.show_random_pick),
            menu: self.menu.merge(&overlay.menu),
        }
    }

    /// Apply global config onto defaults with REPLACE semantics for arrays.
    fn apply_global(&self, global: &RawSettings) -> Self {
        Self {
            catalog_file: global
                .catalog_file
                .clone()
                .or_else(|| self.catalog_file.clone()),
            recommendation_limit: global
                .recommendation_limit
                .unwrap_or(self.recommendation_limit),
            show_random_pick: global.show_random_pick.unwrap_or(self.show_random_pick),
            menu: self.menu.apply_global(&global.menu),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_config` - Optional config file given on the command line
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/hidden-gems/hidden-gems.toml` (arrays REPLACE defaults)
    /// 3. Local config (`menu.nested` UNIONS with global, `menu.categories` REPLACES)
    /// 4. Environment variables: `HIDDENGEMS_*` prefix (REPLACES - explicit override)
    pub fn load(local_config: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path().filter(|path| path.exists());
        Self::load_from(global.as_deref(), local_config)
    }

    /// Load settings from explicit file locations.
    ///
    /// A missing global file is skipped; a missing local file is an error since
    /// it was asked for explicitly.
    pub fn load_from(
        global_config: Option<&Path>,
        local_config: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config (REPLACES defaults)
        if let Some(global_path) = global_config {
            if global_path.exists() {
                let raw = load_raw_settings(global_path)?;
                current = current.apply_global(&raw);
            }
        }

        // 3. Local config (UNION for nested categories)
        if let Some(local_path) = local_config {
            let raw = load_raw_settings(local_path)?;
            current = current.merge_with(&raw);
        }

        // 4. Environment variables (replaces - explicit override)
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();

        Ok(current)
    }

    /// Apply HIDDENGEMS_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("HIDDENGEMS")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("menu.categories")
                .with_list_parse_key("menu.nested"),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("catalog_file") {
            settings.catalog_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_int("recommendation_limit") {
            settings.recommendation_limit =
                usize::try_from(val).map_err(|_| ApplicationError::Config {
                    message: format!("recommendation_limit must not be negative: {}", val),
                })?;
        }
        if let Ok(val) = config.get_bool("show_random_pick") {
            settings.show_random_pick = val;
        }
        if let Ok(val) = config.get::<Vec<String>>("menu.categories") {
            settings.menu.categories = val;
        }
        if let Ok(val) = config.get::<Vec<String>>("menu.nested") {
            settings.menu.nested = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# hidden-gems configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/hidden-gems/hidden-gems.toml
#   Local:  file passed with --config
#   Env:    HIDDENGEMS_* environment variables (explicit overrides)
#
# Array Merge Semantics:
#   Global config REPLACES compiled defaults.
#   Local menu.nested UNIONS with global; use "!name" to remove an inherited item:
#     nested = ["Drinks/Cafe", "!Food"]

# TOML catalog with [[places]] tables (default: built-in sample)
# catalog_file = "~/places.toml"

# Maximum number of recommendations
# recommendation_limit = 5

# Show a random pick when the menu starts
# show_random_pick = true

[menu]
# Top-level menu in display order (empty: all catalog categories)
# categories = ["Food", "Drinks/Cafe", "Shopping & Entertainment", "Nature & Parks", "Services", "Places Nearby"]

# Categories that open a subcategory menu instead of a flat place list
# nested = ["Food"]
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load_from(None, None).expect("load defaults");
        assert_eq!(settings.recommendation_limit, 5);
        assert_eq!(settings.menu.nested, strings(&["Food"]));
        assert_eq!(settings.menu.categories.len(), 6);
        assert!(settings.catalog_file.is_none());
    }

    #[test]
    fn given_tilde_in_catalog_file_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            catalog_file: Some(PathBuf::from("~/places.toml")),
            ..Default::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let path = settings.catalog_file.unwrap();
        assert!(
            path.to_string_lossy().starts_with(&home),
            "catalog_file should start with home dir: {}",
            path.display()
        );
    }

    #[test]
    fn test_merge_array_union_keeps_order() {
        let result = MenuConfig::merge_array(&strings(&["b", "a"]), &strings(&["c"]));
        assert_eq!(result, strings(&["b", "a", "c"]));
    }

    #[test]
    fn test_merge_array_negation() {
        let result = MenuConfig::merge_array(&strings(&["a", "b"]), &strings(&["!a", "c"]));
        assert_eq!(result, strings(&["b", "c"]));
    }

    #[test]
    fn test_merge_array_negation_nonexistent() {
        let result = MenuConfig::merge_array(&strings(&["a", "b"]), &strings(&["!x"]));
        assert_eq!(result, strings(&["a", "b"]));
    }

    #[test]
    fn test_merge_array_duplicates() {
        let result = MenuConfig::merge_array(&strings(&["a", "b"]), &strings(&["a", "c"]));
        assert_eq!(result, strings(&["a", "b", "c"]));
    }

    #[test]
    fn test_merge_menu_replaces_categories_and_unions_nested() {
        let base = MenuConfig::default();
        let overlay = RawMenuConfig {
            categories: Some(strings(&["Services", "Food"])),
            nested: Some(strings(&["Services"])),
        };

        let result = base.merge(&overlay);

        assert_eq!(result.categories, strings(&["Services", "Food"]));
        assert_eq!(result.nested, strings(&["Food", "Services"]));
    }

    #[test]
    fn test_apply_global_replaces_arrays() {
        let base = MenuConfig::default();
        let global = RawMenuConfig {
            categories: None,
            nested: Some(strings(&["Services"])),
        };

        let result = base.apply_global(&global);

        assert_eq!(result.nested, strings(&["Services"]));
        assert_eq!(result.categories, MenuConfig::default().categories);
    }

    #[test]
    fn given_settings_when_serializing_then_round_trips_through_toml() {
        let settings = Settings::default();
        let text = settings.to_toml().unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}

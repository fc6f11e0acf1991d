//! Navigation state machine: a stack of tree-path segments.
//!
//! ```text
//! Home ──enter_category──▶ InCategory ──enter_subcategory──▶ InSubcategory
//!   ▲                        │   (nested categories only)          │
//!   └──────go_back/go_home───┘◀────────────go_back─────────────────┘
//!   ▲                                                              │
//!   └─────────────────────────────go_home──────────────────────────┘
//! ```
//!
//! Which content a category shows is data driven: a [`MenuCategory`] with
//! `nested = true` presents its subcategories, any other category presents
//! all of its places flattened.

use std::fmt;

use tracing::debug;

use crate::domain::entities::PlaceId;
use crate::domain::error::DomainError;
use crate::domain::tree::CategoryTree;

/// Maximum stack depth: category, then subcategory.
pub const MAX_DEPTH: usize = 2;

/// A top-level menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCategory {
    pub name: String,
    /// Present a subcategory menu instead of a flattened place list
    pub nested: bool,
}

impl MenuCategory {
    pub fn new(name: impl Into<String>, nested: bool) -> Self {
        Self {
            name: name.into(),
            nested,
        }
    }
}

/// Position derived from the stack depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState {
    Home,
    InCategory(String),
    InSubcategory {
        category: String,
        subcategory: String,
    },
}

impl fmt::Display for NavState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavState::Home => write!(f, "Home"),
            NavState::InCategory(category) => write!(f, "{}", category),
            NavState::InSubcategory {
                category,
                subcategory,
            } => write!(f, "{} / {}", category, subcategory),
        }
    }
}

/// What the caller should present for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavView {
    /// Top-level menu category names
    Menu(Vec<String>),
    /// Subcategory keys of a nested category
    Subcategories(Vec<String>),
    Places(Vec<PlaceId>),
    /// The named category had nothing to show; navigation returned home
    EmptyCategory(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavOutcome {
    pub state: NavState,
    pub view: NavView,
}

/// Stack based menu position.
///
/// Invalid selections return [`DomainError::InvalidSelection`] and leave the
/// stack untouched.
#[derive(Debug, Clone)]
pub struct Navigator {
    menu: Vec<MenuCategory>,
    stack: Vec<String>,
}

impl Navigator {
    pub fn new(menu: Vec<MenuCategory>) -> Self {
        Self {
            menu,
            stack: Vec::with_capacity(MAX_DEPTH),
        }
    }

    pub fn menu(&self) -> &[MenuCategory] {
        &self.menu
    }

    /// Append a category to the end of the menu, ignoring duplicates.
    pub fn add_menu_entry(&mut self, entry: MenuCategory) {
        if self.menu_entry(&entry.name).is_none() {
            self.menu.push(entry);
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn state(&self) -> NavState {
        match self.stack.as_slice() {
            [] => NavState::Home,
            [category] => NavState::InCategory(category.clone()),
            [category, subcategory, ..] => NavState::InSubcategory {
                category: category.clone(),
                subcategory: subcategory.clone(),
            },
        }
    }

    fn menu_entry(&self, name: &str) -> Option<&MenuCategory> {
        self.menu.iter().find(|entry| entry.name == name)
    }

    fn is_nested(&self, name: &str) -> bool {
        self.menu_entry(name).is_some_and(|entry| entry.nested)
    }

    /// Select a category from the top-level menu.
    pub fn enter_category(
        &mut self,
        tree: &CategoryTree,
        key: &str,
    ) -> Result<NavOutcome, DomainError> {
        if !self.stack.is_empty() {
            return Err(DomainError::InvalidSelection(format!(
                "cannot enter category '{}' from {}",
                key,
                self.state()
            )));
        }
        if self.menu_entry(key).is_none() {
            return Err(DomainError::InvalidSelection(format!(
                "unknown category '{}'",
                key
            )));
        }

        if !tree.has_places(key) {
            debug!(category = key, "empty category, returning home");
            self.stack.clear();
            return Ok(NavOutcome {
                state: NavState::Home,
                view: NavView::EmptyCategory(key.to_string()),
            });
        }

        self.stack.push(key.to_string());
        debug!(category = key, depth = self.depth(), "entered category");
        Ok(self.current(tree))
    }

    /// Select a subcategory of the current nested category.
    pub fn enter_subcategory(
        &mut self,
        tree: &CategoryTree,
        key: &str,
    ) -> Result<NavOutcome, DomainError> {
        let category = match self.stack.as_slice() {
            [category] => category.clone(),
            _ => {
                return Err(DomainError::InvalidSelection(format!(
                    "cannot enter subcategory '{}' from {}",
                    key,
                    self.state()
                )))
            }
        };
        if !self.is_nested(&category) {
            return Err(DomainError::InvalidSelection(format!(
                "category '{}' has no subcategory menu",
                category
            )));
        }
        if !tree.subcategories(&category).contains(&key) {
            return Err(DomainError::InvalidSelection(format!(
                "unknown subcategory '{}' in '{}'",
                key, category
            )));
        }

        self.stack.push(key.to_string());
        debug!(category = %category, subcategory = key, "entered subcategory");
        Ok(self.current(tree))
    }

    /// Pop one level; no-op at home.
    pub fn go_back(&mut self, tree: &CategoryTree) -> NavOutcome {
        self.stack.pop();
        debug!(depth = self.depth(), "back");
        self.current(tree)
    }

    pub fn go_home(&mut self, tree: &CategoryTree) -> NavOutcome {
        self.stack.clear();
        self.current(tree)
    }

    /// View for the current state without transitioning.
    pub fn current(&self, tree: &CategoryTree) -> NavOutcome {
        let state = self.state();
        let view = match &state {
            NavState::Home => NavView::Menu(self.menu.iter().map(|m| m.name.clone()).collect()),
            NavState::InCategory(category) if self.is_nested(category) => NavView::Subcategories(
                tree.subcategories(category)
                    .into_iter()
                    .map(String::from)
                    .collect(),
            ),
            NavState::InCategory(category) => NavView::Places(tree.places_in(category)),
            NavState::InSubcategory {
                category,
                subcategory,
            } => NavView::Places(tree.lookup(category, subcategory).to_vec()),
        };
        NavOutcome { state, view }
    }
}

//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod catalog;
pub mod entities;
pub mod error;
pub mod navigation;
pub mod recommend;
pub mod session;
pub mod traversal;
pub mod tree;

pub use catalog::Catalog;
pub use entities::{Place, PlaceId};
pub use error::DomainError;
pub use navigation::{MenuCategory, NavOutcome, NavState, NavView, Navigator};
pub use recommend::{Recommender, Strategy};
pub use session::{Favorites, History, HistoryEntry, Session};
pub use traversal::{traverse, BreadthFirst, DepthFirst, TraversalOrder, Visit};
pub use tree::CategoryTree;

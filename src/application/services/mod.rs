//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod explorer;

pub use explorer::{ExplorerOptions, ExplorerService};

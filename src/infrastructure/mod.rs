//! Infrastructure layer: I/O implementations and DI container
//!
//! This layer implements I/O boundary traits, loads the catalog and wires up services.

pub mod catalog;
pub mod di;
pub mod error;
pub mod sample;
pub mod traits;

pub use error::{InfraError, InfraResult};

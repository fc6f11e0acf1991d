//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic. It owns the session state and is
//! free of terminal and file I/O.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};

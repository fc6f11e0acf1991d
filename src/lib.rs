//! Explore local hidden gems.
//!
//! Places are grouped into a two-level category tree, browsed through a
//! small navigation state machine, walked depth- or breadth-first and used
//! as references for similarity and proximity recommendations.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

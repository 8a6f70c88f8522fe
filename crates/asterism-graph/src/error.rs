//! Error types for graph operations.
//!
//! Only a wholly empty star list is a failure. Dangling references and
//! isolated roots degrade to fewer animated edges and are reported through
//! [`Schedule::skipped`](crate::Schedule::skipped) instead.

use thiserror::Error;

/// Errors that stop a reveal from being planned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// No stars to pick a central node from.
    #[error("constellation {0:?} has no stars")]
    EmptyConstellation(String),
}

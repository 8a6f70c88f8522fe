//! Shared star and constellation types for asterism.
//!
//! This crate is the data foundation: typed star IDs, the star and edge
//! records of a constellation, and loading of the data document. It has
//! **no internal asterism dependencies**. It is a pure leaf crate that the graph
//! and animation crates build on.
//!
//! # Data Overview
//!
//! ```text
//! ConstellationData ← the data document ({ "items": [...] })
//!     └── Constellation (name + nominal center ra/dec)
//!           └── Star (StarId, ra, dec, magnitude, hex color)
//!           └── Edge (from StarId → to StarId, undirected for traversal)
//! ```
//!
//! # Key Types
//!
//! |-----------------------|-------------------------------------------|
//! | Type                  | Purpose                                   |
//! |-----------------------|-------------------------------------------|
//! | [`StarId`]            | Star identity, unique within a constellation |
//! | [`Star`]              | Angular position, brightness, color       |
//! | [`Edge`]              | One connection line between two stars     |
//! | [`Constellation`]     | Stars + edges + nominal center            |
//! | [`ConstellationData`] | The parsed data document                  |
//! | [`Selector`]          | Which constellation a run processes       |
//! |-----------------------|-------------------------------------------|

pub mod constellation;
pub mod document;
pub mod ids;

// Re-export primary types at crate root for convenience.
pub use constellation::{Constellation, Edge, Star};
pub use document::{ConstellationData, LoadError, Selector};
pub use ids::StarId;

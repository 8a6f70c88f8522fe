//! Star, edge, and constellation records.
//!
//! These mirror the data document one-to-one and are immutable after load.
//! Coordinates are angles in radians.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::StarId;

/// A single star of a constellation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub id: StarId,
    /// Right ascension (radians).
    pub ra: f32,
    /// Declination (radians).
    pub dec: f32,
    /// Apparent magnitude; lower is brighter.
    pub magnitude: f32,
    /// Hex RGB without a leading `#`, e.g. `"ffd2a1"`.
    pub color: String,
}

/// A connection line between two stars.
///
/// Stored as an ordered pair but undirected for traversal. In a schedule the
/// order is meaningful: `from` is where the line starts growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: StarId,
    pub to: StarId,
}

impl Edge {
    pub const fn new(from: StarId, to: StarId) -> Self {
        Self { from, to }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl From<(i32, i32)> for Edge {
    fn from((from, to): (i32, i32)) -> Self {
        Self::new(StarId::new(from), StarId::new(to))
    }
}

/// A named set of stars and the lines between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constellation {
    pub name: String,
    /// Nominal center right ascension (radians).
    pub ra: f32,
    /// Nominal center declination (radians).
    pub dec: f32,
    #[serde(default)]
    pub stars: Vec<Star>,
    #[serde(default)]
    pub pairs: Vec<Edge>,
}

impl Constellation {
    /// Star IDs that appear more than once, in first-repeat order.
    pub fn duplicate_star_ids(&self) -> Vec<StarId> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for star in &self.stars {
            if !seen.insert(star.id) && !dupes.contains(&star.id) {
                dupes.push(star.id);
            }
        }
        dupes
    }

    /// Pairs naming at least one star ID absent from `stars`.
    pub fn dangling_pairs(&self) -> impl Iterator<Item = &Edge> + '_ {
        let ids: HashSet<StarId> = self.stars.iter().map(|s| s.id).collect();
        self.pairs
            .iter()
            .filter(move |p| !ids.contains(&p.from) || !ids.contains(&p.to))
    }
}

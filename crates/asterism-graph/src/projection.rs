//! Angular coordinates to unit-sphere positions.
//!
//! This is a simplified placement, not celestial-sphere astrometry: `y` is
//! the pole axis and right ascension sweeps the `x`/`z` plane.

use std::collections::HashMap;

use asterism_types::{Star, StarId};
use glam::Vec3;

/// Project `(ra, dec)` in radians onto the unit sphere.
///
/// Defined for every real input; no range checks.
pub fn project(ra: f32, dec: f32) -> Vec3 {
    let (sin_dec, cos_dec) = dec.sin_cos();
    let (sin_ra, cos_ra) = ra.sin_cos();
    Vec3::new(cos_dec * cos_ra, sin_dec, cos_dec * sin_ra)
}

/// Answers whether a star ID resolves to something drawable.
///
/// The scheduler consults this before emitting an edge so that references
/// to unknown stars are skipped instead of scheduled.
pub trait StarLookup {
    fn contains_star(&self, id: StarId) -> bool;
}

/// Projected position of every star in one run.
///
/// Rebuilt for each run; never cached across loads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StarPositions {
    positions: HashMap<StarId, Vec3>,
}

impl StarPositions {
    /// Project each star once. With duplicate IDs the later star wins.
    pub fn from_stars(stars: &[Star]) -> Self {
        let positions = stars.iter().map(|s| (s.id, project(s.ra, s.dec))).collect();
        Self { positions }
    }

    pub fn get(&self, id: StarId) -> Option<Vec3> {
        self.positions.get(&id).copied()
    }

    /// Both endpoints of an edge, if both resolve.
    pub fn endpoints(&self, from: StarId, to: StarId) -> Option<(Vec3, Vec3)> {
        Some((self.get(from)?, self.get(to)?))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StarId, Vec3)> + '_ {
        self.positions.iter().map(|(id, p)| (*id, *p))
    }
}

impl StarLookup for StarPositions {
    fn contains_star(&self, id: StarId) -> bool {
        self.positions.contains_key(&id)
    }
}

impl FromIterator<(StarId, Vec3)> for StarPositions {
    fn from_iter<I: IntoIterator<Item = (StarId, Vec3)>>(iter: I) -> Self {
        Self { positions: iter.into_iter().collect() }
    }
}

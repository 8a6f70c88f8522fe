//! Central star selection: the BFS root nearest the nominal center.

use asterism_types::{Star, StarId};

use crate::{GraphError, project};

/// Pick the star whose projection is closest to the projected center.
///
/// Ties go to the first star in input order. `name` only labels the error
/// when `stars` is empty.
pub fn select_central(
    name: &str,
    stars: &[Star],
    center_ra: f32,
    center_dec: f32,
) -> Result<StarId, GraphError> {
    let center = project(center_ra, center_dec);

    let mut best: Option<(StarId, f32)> = None;
    for star in stars {
        let distance = project(star.ra, star.dec).distance(center);
        // Strict less-than keeps the first minimum.
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((star.id, distance));
        }
    }

    match best {
        Some((id, distance)) => {
            tracing::debug!(constellation = name, %id, distance, "selected central star");
            Ok(id)
        }
        None => Err(GraphError::EmptyConstellation(name.to_string())),
    }
}

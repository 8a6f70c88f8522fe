//! The seam to whatever draws the constellation.

use asterism_types::{Edge, StarId};
use glam::Vec3;
use palette::Srgb;

/// A request to draw one star marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarMarker {
    pub id: StarId,
    pub position: Vec3,
    pub color: Srgb<u8>,
    pub magnitude: f32,
}

/// Rendering collaborator.
///
/// The driver calls `place_star` once per star before playback and
/// `begin_line` once per animated edge, at the moment its level starts.
/// Everything after that goes through the returned [`LineHandle`].
pub trait Scene {
    type Line: LineHandle;

    fn place_star(&mut self, marker: StarMarker);

    /// Create a line fixed at `start` whose terminal point will be animated.
    fn begin_line(&mut self, edge: Edge, start: Vec3) -> Self::Line;
}

/// A live line whose terminal point is owned by exactly one animation task.
pub trait LineHandle {
    fn set_end(&mut self, end: Vec3);

    /// Called once, right after the final `set_end` to the target.
    fn finish(&mut self) {}
}

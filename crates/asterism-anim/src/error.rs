//! Error types for animation playback.

use thiserror::Error;

/// Errors from playing an animation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimError {
    /// The frame clock was dropped while lines were still growing.
    #[error("frame clock stopped before the animation finished")]
    ClockStopped,

    /// A star color is not `rrggbb` / `rgb` hex.
    #[error("invalid hex color {0:?}")]
    InvalidColor(String),
}

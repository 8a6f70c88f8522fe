//! Graph construction and reveal scheduling for constellations.
//!
//! Turns the flat star and pair lists of a [`Constellation`] into the
//! ordered edge levels the animation plays back:
//!
//! ```text
//! stars ──project──▶ StarPositions ─────────────────────────┐
//!   │                                                       ▼
//!   └──select_central──▶ root ──┐                    (lookup guard)
//! pairs ──Adjacency::build──────┴──schedule_levels──▶ Schedule { levels, skipped }
//! ```
//!
//! Everything here is pure data. Nothing in this crate knows about frames,
//! clocks, or drawing; see `asterism-anim` for that side.
//!
//! [`Constellation`]: asterism_types::Constellation

mod adjacency;
mod central;
mod error;
mod plan;
mod projection;
mod schedule;

pub use adjacency::Adjacency;
pub use central::select_central;
pub use error::GraphError;
pub use plan::RevealPlan;
pub use projection::{StarLookup, StarPositions, project};
pub use schedule::{Level, RevealMode, Schedule, schedule_levels, sequential_levels, simultaneous_levels};

pub use glam::Vec3;

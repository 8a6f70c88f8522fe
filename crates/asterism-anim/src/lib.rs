//! Level-synchronized line animation for constellation reveals.
//!
//! The host owns a [`FrameClock`] and publishes clock time once per rendered
//! frame. The [`AnimationDriver`] plays a schedule level by level: every
//! edge in a level grows concurrently, and the next level starts only after
//! each line of the current one has snapped to its target.
//!
//! ```text
//!   host frame loop            watch<f64>           AnimationDriver
//!   ┌──────────────────┐   ───────────────▶   ┌──────────────────────────┐
//!   │ clock.advance(dt)│                      │ level 0: join(line tasks)│
//!   │ draw scene       │                      │ level 1: join(line tasks)│
//!   └──────────────────┘                      │ ...                      │
//!                                             └────────────┬─────────────┘
//!                                       Scene::begin_line  │ LineHandle::set_end
//!                                                          ▼
//!                                             rendering collaborator
//! ```
//!
//! Everything runs on one task. Concurrency within a level comes from
//! joining the line futures, not from threads. Dropping the playback future
//! cancels the run and leaves drawn lines where they are.

mod clock;
mod color;
mod driver;
mod error;
mod scene;
mod tween;

#[cfg(test)]
mod testing;

pub use clock::{ClockHandle, FrameClock, FrameTicks};
pub use color::{decode_hex, star_color};
pub use driver::{AnimationDriver, PlaybackReport};
pub use error::AnimError;
pub use scene::{LineHandle, Scene, StarMarker};
pub use tween::LineTween;

pub use palette::Srgb;

//! External frame clock.
//!
//! Clock time is seconds as `f64`, published through a `watch` channel. Each
//! publish is one frame boundary. Subscribers only ever see the latest time,
//! which is all a tween needs since progress is computed from absolute time.

use tokio::sync::watch;

use crate::AnimError;

/// Write side of the clock, owned by the host frame loop.
///
/// A clock that stops advancing stalls every waiting line; there is no
/// timeout. Dropping it makes waiting lines fail with
/// [`AnimError::ClockStopped`].
#[derive(Debug)]
pub struct FrameClock {
    tx: watch::Sender<f64>,
}

impl FrameClock {
    /// A clock starting at time zero.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0.0);
        Self { tx }
    }

    /// Current clock time.
    pub fn now(&self) -> f64 {
        *self.tx.borrow()
    }

    /// Move time forward by `dt` seconds and publish a frame.
    ///
    /// Negative deltas are clamped to zero so time never runs backwards.
    pub fn advance(&self, dt: f64) {
        let dt = dt.max(0.0);
        self.tx.send_modify(|now| *now += dt);
    }

    /// Publish a frame at absolute time `now`, if it is not in the past.
    pub fn set(&self, now: f64) {
        self.tx.send_if_modified(|current| {
            if now >= *current {
                *current = now;
                true
            } else {
                tracing::warn!(current = *current, requested = now, "ignoring backwards clock");
                false
            }
        });
    }

    /// Cloneable read side.
    pub fn handle(&self) -> ClockHandle {
        ClockHandle { rx: self.tx.subscribe() }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Read side of a [`FrameClock`].
#[derive(Debug, Clone)]
pub struct ClockHandle {
    rx: watch::Receiver<f64>,
}

impl ClockHandle {
    /// Current clock time.
    pub fn now(&self) -> f64 {
        *self.rx.borrow()
    }

    /// A frame stream that waits for the *next* frame from now on.
    ///
    /// Returns the stream and the time it started at.
    pub fn ticks(&self) -> (FrameTicks, f64) {
        let mut rx = self.rx.clone();
        let now = *rx.borrow_and_update();
        (FrameTicks { rx }, now)
    }
}

/// Per-task frame stream.
#[derive(Debug)]
pub struct FrameTicks {
    rx: watch::Receiver<f64>,
}

impl FrameTicks {
    /// Suspend until the next frame and return its clock time.
    pub async fn next(&mut self) -> Result<f64, AnimError> {
        self.rx.changed().await.map_err(|_| AnimError::ClockStopped)?;
        Ok(*self.rx.borrow_and_update())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;

    #[test]
    fn test_advance_and_set() {
        let clock = FrameClock::new();
        let handle = clock.handle();

        clock.advance(0.25);
        clock.advance(0.25);
        assert_eq!(handle.now(), 0.5);

        clock.set(2.0);
        assert_eq!(clock.now(), 2.0);

        clock.set(1.0);
        clock.advance(-3.0);
        assert_eq!(clock.now(), 2.0);
    }

    #[test]
    fn test_ticks_wait_for_next_frame() {
        let clock = FrameClock::new();
        clock.advance(1.0);

        let (mut ticks, started) = clock.handle().ticks();
        assert_eq!(started, 1.0);
        // Nothing published since subscribing
        assert!(ticks.next().now_or_never().is_none());

        clock.advance(0.5);
        assert_eq!(ticks.next().now_or_never(), Some(Ok(1.5)));
        assert!(ticks.next().now_or_never().is_none());
    }

    #[test]
    fn test_missed_frames_collapse_to_latest() {
        let clock = FrameClock::new();
        let (mut ticks, _) = clock.handle().ticks();

        clock.advance(0.1);
        clock.advance(0.1);
        clock.advance(0.1);
        let now = ticks.next().now_or_never().unwrap().unwrap();
        assert!((now - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_dropped_clock_stops_ticks() {
        let clock = FrameClock::new();
        let (mut ticks, _) = clock.handle().ticks();
        drop(clock);
        assert_eq!(ticks.next().now_or_never(), Some(Err(AnimError::ClockStopped)));
    }

    #[test]
    fn test_backwards_set_publishes_nothing() {
        let clock = FrameClock::new();
        clock.set(3.0);
        let (mut ticks, _) = clock.handle().ticks();
        clock.set(2.0);
        assert!(ticks.next().now_or_never().is_none());
    }
}

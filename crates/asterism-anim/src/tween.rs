//! Linear growth of one line's terminal point.

use glam::Vec3;

/// Moves a line's end from `from` to `to` over `duration` seconds.
///
/// The start of the line stays at `from` for the whole animation; only the
/// terminal point moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineTween {
    pub from: Vec3,
    pub to: Vec3,
    pub duration: f32,
}

impl LineTween {
    pub fn new(from: Vec3, to: Vec3, duration: f32) -> Self {
        Self { from, to, duration }
    }

    /// Fraction of the animation done after `elapsed` seconds, in `[0, 1]`.
    ///
    /// A non-positive or non-finite duration is complete immediately.
    pub fn progress(&self, elapsed: f32) -> f32 {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return 1.0;
        }
        (elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self, elapsed: f32) -> bool {
        self.progress(elapsed) >= 1.0
    }

    /// Terminal point after `elapsed` seconds.
    ///
    /// Exactly `to` once complete, with no interpolation residue.
    pub fn sample(&self, elapsed: f32) -> Vec3 {
        let t = self.progress(elapsed);
        if t >= 1.0 { self.to } else { self.from.lerp(self.to, t) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tween() -> LineTween {
        LineTween::new(Vec3::new(0.1, 0.2, 0.3), Vec3::new(0.7, -0.9, 0.35), 1.0)
    }

    #[test]
    fn test_midpoint_at_half_duration() {
        let tw = tween();
        let mid = (tw.from + tw.to) / 2.0;
        assert!(tw.sample(0.5).abs_diff_eq(mid, 1e-6));
    }

    #[test]
    fn test_exact_target_when_done() {
        let tw = tween();
        assert_eq!(tw.sample(1.0), tw.to);
        assert_eq!(tw.sample(1.7), tw.to);
        assert!(tw.is_complete(1.0));
        assert!(!tw.is_complete(0.999));
    }

    #[test]
    fn test_start_and_before_start() {
        let tw = tween();
        assert_eq!(tw.sample(0.0), tw.from);
        assert_eq!(tw.sample(-2.0), tw.from);
        assert_eq!(tw.progress(-2.0), 0.0);
    }

    #[test]
    fn test_scaled_duration() {
        let tw = LineTween::new(Vec3::ZERO, Vec3::X * 4.0, 2.0);
        assert!(tw.sample(0.5).abs_diff_eq(Vec3::X, 1e-6));
        assert_eq!(tw.progress(1.0), 0.5);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let tw = LineTween::new(Vec3::ZERO, Vec3::Y, 0.0);
        assert!(tw.is_complete(0.0));
        assert_eq!(tw.sample(0.0), Vec3::Y);
    }

    #[test]
    fn test_non_finite_duration_completes_immediately() {
        for duration in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let tw = LineTween::new(Vec3::ZERO, Vec3::X, duration);
            for elapsed in [0.0, 1.0, 10.0, 1e9] {
                assert!(tw.is_complete(elapsed), "{duration} at {elapsed}");
                assert_eq!(tw.sample(elapsed), Vec3::X);
            }
        }
    }
}

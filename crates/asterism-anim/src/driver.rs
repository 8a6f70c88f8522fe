//! Level-by-level playback of a reveal schedule.

use asterism_graph::{Level, RevealPlan, StarPositions, project};
use asterism_types::{Constellation, Star};
use futures::future::try_join_all;
use palette::Srgb;

use crate::{AnimError, ClockHandle, FrameTicks, LineHandle, LineTween, Scene, StarMarker, star_color};

/// What a playback run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackReport {
    /// Levels that had at least one line to grow.
    pub levels: usize,
    /// Lines grown to completion.
    pub animated: usize,
    /// Edges dropped because an endpoint had no position.
    pub skipped: usize,
}

/// Plays levels against a [`Scene`], paced by a frame clock.
pub struct AnimationDriver<'s, S: Scene> {
    scene: &'s mut S,
    clock: ClockHandle,
    /// Seconds per line.
    duration: f32,
    fallback_color: Srgb<u8>,
}

impl<'s, S: Scene> AnimationDriver<'s, S> {
    pub fn new(scene: &'s mut S, clock: ClockHandle, duration: f32) -> Self {
        Self {
            scene,
            clock,
            duration,
            fallback_color: Srgb::new(255, 255, 255),
        }
    }

    /// Color for stars whose hex does not decode.
    pub fn with_fallback_color(mut self, color: Srgb<u8>) -> Self {
        self.fallback_color = color;
        self
    }

    /// Request one marker per star, in input order.
    pub fn place_stars(&mut self, stars: &[Star]) {
        for star in stars {
            self.scene.place_star(StarMarker {
                id: star.id,
                position: project(star.ra, star.dec),
                color: star_color(star, self.fallback_color),
                magnitude: star.magnitude,
            });
        }
        tracing::debug!(count = stars.len(), "placed star markers");
    }

    /// Grow every edge of each level concurrently, one level at a time.
    ///
    /// A level starts only after every line of the previous level has
    /// snapped to its target. An edge with an endpoint missing from
    /// `positions` is skipped without holding up the rest of its level.
    pub async fn play_levels(
        &mut self,
        levels: &[Level],
        positions: &StarPositions,
    ) -> Result<PlaybackReport, AnimError> {
        let mut report = PlaybackReport::default();

        for (depth, level) in levels.iter().enumerate() {
            let started_at = self.clock.now();
            let mut lines = Vec::with_capacity(level.len());

            for edge in level {
                let Some((from, to)) = positions.endpoints(edge.from, edge.to) else {
                    tracing::warn!(from = %edge.from, to = %edge.to, "edge endpoint has no position, skipping");
                    report.skipped += 1;
                    continue;
                };
                let line = self.scene.begin_line(*edge, from);
                let (ticks, _) = self.clock.ticks();
                lines.push(grow_line(line, LineTween::new(from, to, self.duration), ticks, started_at));
            }

            if lines.is_empty() {
                continue;
            }

            let count = lines.len();
            tracing::debug!(level = depth, lines = count, started_at, "level started");
            try_join_all(lines).await?;
            tracing::debug!(level = depth, finished_at = self.clock.now(), "level complete");

            report.levels += 1;
            report.animated += count;
        }

        Ok(report)
    }

    /// Place the constellation's stars, then play its planned levels.
    pub async fn reveal(
        &mut self,
        constellation: &Constellation,
        plan: &RevealPlan,
    ) -> Result<PlaybackReport, AnimError> {
        self.place_stars(&constellation.stars);
        let report = self.play_levels(&plan.schedule.levels, &plan.positions).await?;
        tracing::info!(
            constellation = %constellation.name,
            levels = report.levels,
            animated = report.animated,
            skipped = report.skipped,
            "reveal finished"
        );
        Ok(report)
    }
}

/// Move one line's terminal point each frame until it reaches the target.
async fn grow_line<L: LineHandle>(
    mut line: L,
    tween: LineTween,
    mut ticks: FrameTicks,
    started_at: f64,
) -> Result<(), AnimError> {
    loop {
        let now = ticks.next().await?;
        let elapsed = (now - started_at) as f32;
        line.set_end(tween.sample(elapsed));
        tracing::trace!(elapsed, progress = tween.progress(elapsed), "line frame");
        if tween.is_complete(elapsed) {
            line.finish();
            return Ok(());
        }
    }
}

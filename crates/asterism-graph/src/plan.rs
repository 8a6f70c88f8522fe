//! One reveal run, planned end to end.

use asterism_types::{Constellation, StarId};

use crate::{
    Adjacency, GraphError, RevealMode, Schedule, StarPositions, schedule_levels, select_central,
    sequential_levels, simultaneous_levels,
};

/// Positions, root, and edge levels for one constellation.
///
/// Built fresh for every run and dropped with it.
#[derive(Debug, Clone)]
pub struct RevealPlan {
    pub mode: RevealMode,
    pub positions: StarPositions,
    /// Central star (the BFS root, also reported for the other modes).
    pub root: StarId,
    pub schedule: Schedule,
}

impl RevealPlan {
    /// Project, build, select, and schedule.
    ///
    /// Fails only when the constellation has no stars; the scheduler is not
    /// run in that case.
    pub fn build(constellation: &Constellation, mode: RevealMode) -> Result<Self, GraphError> {
        let root = select_central(
            &constellation.name,
            &constellation.stars,
            constellation.ra,
            constellation.dec,
        )?;
        let positions = StarPositions::from_stars(&constellation.stars);

        let schedule = match mode {
            RevealMode::BreadthFirst => {
                let adjacency = Adjacency::build(&constellation.pairs);
                schedule_levels(&adjacency, root, &positions)
            }
            RevealMode::Sequential => sequential_levels(&constellation.pairs, &positions),
            RevealMode::Simultaneous => simultaneous_levels(&constellation.pairs, &positions),
        };

        tracing::info!(
            constellation = %constellation.name,
            %mode,
            %root,
            levels = schedule.levels.len(),
            edges = schedule.edge_count(),
            skipped = schedule.skipped.len(),
            "planned reveal"
        );

        Ok(Self { mode, positions, root, schedule })
    }
}

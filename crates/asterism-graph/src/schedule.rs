//! Reveal scheduling: grouping edges into levels that animate together.
//!
//! The canonical schedule is a level-synchronous BFS from the central star.
//! Each pass dequeues exactly the frontier that was queued when the pass
//! began, so every edge in level `k` discovers a node at depth `k + 1`.
//!
//! Two simpler modes reproduce earlier reveal styles: one edge at a time in
//! pair order, or every edge at once.

use std::collections::{HashSet, VecDeque};

use asterism_types::{Edge, StarId};
use serde::{Deserialize, Serialize};

use crate::{Adjacency, StarLookup};

/// Edges discovered while expanding one frontier, in emission order.
pub type Level = Vec<Edge>;

/// How edges are grouped into levels.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum RevealMode {
    /// Breadth-first from the central star, one level per depth.
    #[default]
    BreadthFirst,
    /// One resolvable pair per level, in pair order.
    Sequential,
    /// A single level with every resolvable pair.
    Simultaneous,
}

/// Ordered edge levels plus what could not be scheduled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub levels: Vec<Level>,
    /// Edges dropped because an endpoint does not resolve to a star.
    pub skipped: Vec<Edge>,
    /// Stars lit by the reveal, counted from the visited set.
    ///
    /// For breadth-first this is every visited star, root included, so an
    /// isolated root counts 1. A root with no position is never visited and
    /// counts 0. The other modes count distinct endpoints of scheduled edges.
    pub reached: usize,
}

impl Schedule {
    /// Total edges across all levels.
    pub fn edge_count(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Level-synchronous BFS from `root`.
///
/// A neighbor that `lookup` does not resolve is recorded in
/// [`Schedule::skipped`] and never visited, so anything reachable only
/// through it stays dark. A root without an adjacency entry yields an empty
/// schedule. Disconnected components are never reached.
pub fn schedule_levels(adjacency: &Adjacency, root: StarId, lookup: &impl StarLookup) -> Schedule {
    let mut schedule = Schedule::default();

    if !lookup.contains_star(root) {
        tracing::warn!(%root, "central star does not resolve, nothing to schedule");
        return schedule;
    }
    if !adjacency.contains(root) {
        tracing::debug!(%root, "central star has no edges, nothing to schedule");
        schedule.reached = 1;
        return schedule;
    }

    // Root is visited before its own neighbors are read, so self-loops stop here.
    let mut visited = HashSet::from([root]);
    let mut queue = VecDeque::from([root]);

    while !queue.is_empty() {
        let frontier = queue.len();
        let mut level = Level::new();

        for _ in 0..frontier {
            let Some(node) = queue.pop_front() else { break };
            for &neighbor in adjacency.neighbors(node) {
                if visited.contains(&neighbor) {
                    continue;
                }
                if !lookup.contains_star(neighbor) {
                    schedule.skipped.push(Edge::new(node, neighbor));
                    continue;
                }
                visited.insert(neighbor);
                level.push(Edge::new(node, neighbor));
                queue.push_back(neighbor);
            }
        }

        if !level.is_empty() {
            schedule.levels.push(level);
        }
    }

    schedule.reached = visited.len();
    if !schedule.skipped.is_empty() {
        tracing::warn!(
            %root,
            skipped = schedule.skipped.len(),
            "skipped edges to unknown stars"
        );
    }
    tracing::debug!(
        %root,
        levels = schedule.levels.len(),
        edges = schedule.edge_count(),
        reached = schedule.reached,
        "scheduled breadth-first reveal"
    );
    schedule
}

/// Split `pairs` into resolvable edges (input order) and skipped ones.
fn partition_resolvable(pairs: &[Edge], lookup: &impl StarLookup) -> (Vec<Edge>, Vec<Edge>) {
    pairs
        .iter()
        .copied()
        .partition(|e| lookup.contains_star(e.from) && lookup.contains_star(e.to))
}

fn distinct_endpoints(edges: &[Edge]) -> usize {
    edges.iter().flat_map(|e| [e.from, e.to]).collect::<HashSet<_>>().len()
}

/// One level per resolvable pair, in pair order.
pub fn sequential_levels(pairs: &[Edge], lookup: &impl StarLookup) -> Schedule {
    let (edges, skipped) = partition_resolvable(pairs, lookup);
    let reached = distinct_endpoints(&edges);
    Schedule {
        levels: edges.into_iter().map(|e| vec![e]).collect(),
        skipped,
        reached,
    }
}

/// Every resolvable pair in a single level.
pub fn simultaneous_levels(pairs: &[Edge], lookup: &impl StarLookup) -> Schedule {
    let (edges, skipped) = partition_resolvable(pairs, lookup);
    let reached = distinct_endpoints(&edges);
    let levels = if edges.is_empty() { Vec::new() } else { vec![edges] };
    Schedule { levels, skipped, reached }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Resolves every ID in the list.
    struct Known(Vec<i32>);

    impl StarLookup for Known {
        fn contains_star(&self, id: StarId) -> bool {
            self.0.contains(&id.get())
        }
    }

    /// Resolves everything.
    struct AnyStar;

    impl StarLookup for AnyStar {
        fn contains_star(&self, _: StarId) -> bool {
            true
        }
    }

    fn edges(raw: &[(i32, i32)]) -> Vec<Edge> {
        raw.iter().copied().map(Edge::from).collect()
    }

    fn root(id: i32) -> StarId {
        StarId::new(id)
    }

    #[test]
    fn test_chain_levels() {
        let adj = Adjacency::build(&edges(&[(1, 2), (2, 3)]));
        let schedule = schedule_levels(&adj, root(1), &AnyStar);

        assert_eq!(schedule.levels, vec![edges(&[(1, 2)]), edges(&[(2, 3)])]);
        assert_eq!(schedule.reached, 3);
        assert!(schedule.skipped.is_empty());
    }

    #[test]
    fn test_duplicate_edge_emitted_once() {
        let adj = Adjacency::build(&edges(&[(1, 2), (1, 2)]));
        let schedule = schedule_levels(&adj, root(1), &AnyStar);
        assert_eq!(schedule.levels, vec![edges(&[(1, 2)])]);
    }

    #[test]
    fn test_root_without_edges() {
        let adj = Adjacency::build(&edges(&[(1, 2)]));
        let schedule = schedule_levels(&adj, root(7), &AnyStar);
        assert!(schedule.is_empty());
        assert_eq!(schedule.edge_count(), 0);
        // The root itself is still lit
        assert_eq!(schedule.reached, 1);
    }

    #[test]
    fn test_frontier_grouping() {
        // 1 ─ 2 ─ 4
        // └── 3 ─ 5 ─ 6
        let adj = Adjacency::build(&edges(&[(1, 2), (1, 3), (2, 4), (3, 5), (5, 6)]));
        let schedule = schedule_levels(&adj, root(1), &AnyStar);

        assert_eq!(
            schedule.levels,
            vec![
                edges(&[(1, 2), (1, 3)]),
                edges(&[(2, 4), (3, 5)]),
                edges(&[(5, 6)]),
            ]
        );
        assert_eq!(schedule.reached, 6);
        // Tree: one edge per non-root node
        assert_eq!(schedule.edge_count(), schedule.reached - 1);
    }

    #[test]
    fn test_edges_follow_stored_direction_from_discoverer() {
        // Pair stored as (2, 1) is still emitted outward from the root.
        let adj = Adjacency::build(&edges(&[(2, 1), (3, 2)]));
        let schedule = schedule_levels(&adj, root(1), &AnyStar);
        assert_eq!(schedule.levels, vec![edges(&[(1, 2)]), edges(&[(2, 3)])]);
    }

    #[test]
    fn test_cycle_emits_spanning_edges_only() {
        // Square with a diagonal: 5 pairs, 4 nodes
        let adj = Adjacency::build(&edges(&[(1, 2), (2, 3), (3, 4), (4, 1), (1, 3)]));
        let schedule = schedule_levels(&adj, root(1), &AnyStar);

        assert_eq!(schedule.levels, vec![edges(&[(1, 2), (1, 4), (1, 3)])]);
        assert_eq!(schedule.reached, 4);
        assert!(schedule.edge_count() <= 5);
    }

    #[test]
    fn test_self_loop_is_ignored() {
        let adj = Adjacency::build(&edges(&[(1, 1), (1, 2), (2, 2)]));
        let schedule = schedule_levels(&adj, root(1), &AnyStar);
        assert_eq!(schedule.levels, vec![edges(&[(1, 2)])]);
    }

    #[test]
    fn test_disconnected_component_not_reached() {
        let adj = Adjacency::build(&edges(&[(1, 2), (3, 4)]));
        let schedule = schedule_levels(&adj, root(1), &AnyStar);
        assert_eq!(schedule.levels, vec![edges(&[(1, 2)])]);
        assert_eq!(schedule.reached, 2);
    }

    #[test]
    fn test_unresolved_neighbor_is_skipped() {
        // 9 is not a star; 4 hangs off 9 and is unreachable without it.
        let adj = Adjacency::build(&edges(&[(1, 2), (1, 9), (9, 4), (2, 3)]));
        let schedule = schedule_levels(&adj, root(1), &Known(vec![1, 2, 3, 4]));

        assert_eq!(schedule.levels, vec![edges(&[(1, 2)]), edges(&[(2, 3)])]);
        assert_eq!(schedule.skipped, edges(&[(1, 9)]));
        assert_eq!(schedule.reached, 3);
    }

    #[test]
    fn test_unresolved_isolated_root_reaches_nothing() {
        let adj = Adjacency::build(&edges(&[(1, 2)]));
        let schedule = schedule_levels(&adj, root(7), &Known(vec![1, 2]));
        assert!(schedule.is_empty());
        assert_eq!(schedule.reached, 0);
    }

    #[test]
    fn test_unresolved_root() {
        let adj = Adjacency::build(&edges(&[(1, 2)]));
        let schedule = schedule_levels(&adj, root(1), &Known(vec![2]));
        assert!(schedule.is_empty());
        assert_eq!(schedule.reached, 0);
    }

    #[test]
    fn test_every_edge_reaches_next_depth() {
        let pairs = edges(&[(1, 2), (1, 3), (2, 3), (3, 4), (4, 5), (2, 5), (5, 6), (6, 1)]);
        let adj = Adjacency::build(&pairs);
        let schedule = schedule_levels(&adj, root(1), &AnyStar);

        let mut depth = std::collections::HashMap::from([(root(1), 0usize)]);
        for (k, level) in schedule.levels.iter().enumerate() {
            for edge in level {
                let from_depth = depth[&edge.from];
                assert!(from_depth <= k, "{edge:?} starts deeper than level {k}");
                assert!(!depth.contains_key(&edge.to), "{edge:?} revisits a node");
                depth.insert(edge.to, k + 1);
            }
        }
        assert_eq!(depth.len(), schedule.reached);
        assert_eq!(schedule.edge_count(), schedule.reached - 1);
    }

    #[test]
    fn test_sequential_levels() {
        let pairs = edges(&[(1, 2), (2, 9), (2, 3)]);
        let schedule = sequential_levels(&pairs, &Known(vec![1, 2, 3]));

        assert_eq!(schedule.levels, vec![edges(&[(1, 2)]), edges(&[(2, 3)])]);
        assert_eq!(schedule.skipped, edges(&[(2, 9)]));
        assert_eq!(schedule.reached, 3);
    }

    #[test]
    fn test_simultaneous_levels() {
        let pairs = edges(&[(1, 2), (3, 4), (4, 8)]);
        let schedule = simultaneous_levels(&pairs, &Known(vec![1, 2, 3, 4]));
        assert_eq!(schedule.levels, vec![edges(&[(1, 2), (3, 4)])]);
        assert_eq!(schedule.skipped, edges(&[(4, 8)]));

        let empty = simultaneous_levels(&[], &AnyStar);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_reveal_mode_strings() {
        assert_eq!(RevealMode::BreadthFirst.to_string(), "breadth-first");
        assert_eq!("Sequential".parse::<RevealMode>().unwrap(), RevealMode::Sequential);
        assert_eq!("simultaneous".parse::<RevealMode>().unwrap(), RevealMode::Simultaneous);
        assert!("spiral".parse::<RevealMode>().is_err());
    }
}

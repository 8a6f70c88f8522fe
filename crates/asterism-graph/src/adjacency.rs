//! Undirected adjacency built from a constellation's pair list.

use std::collections::HashMap;

use asterism_types::{Edge, StarId};

/// Star ID to ordered neighbor list.
///
/// This is an ephemeral structure computed per run. Neighbors keep edge
/// order and are listed once per edge endpoint, so duplicate edges give
/// duplicate entries and a self-loop lists the star as its own neighbor.
/// The map has no idea which IDs name real stars.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Adjacency {
    neighbors: HashMap<StarId, Vec<StarId>>,
}

impl Adjacency {
    /// Build the adjacency for a pair list.
    pub fn build(edges: &[Edge]) -> Self {
        let mut neighbors: HashMap<StarId, Vec<StarId>> = HashMap::new();
        for edge in edges {
            neighbors.entry(edge.from).or_default().push(edge.to);
            neighbors.entry(edge.to).or_default().push(edge.from);
        }
        Self { neighbors }
    }

    /// Neighbors of a star, in stored order. Empty if the star has no entry.
    pub fn neighbors(&self, id: StarId) -> &[StarId] {
        self.neighbors.get(&id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Whether the star appears in any edge.
    pub fn contains(&self, id: StarId) -> bool {
        self.neighbors.contains_key(&id)
    }

    /// Number of stars with an entry.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(raw: &[i32]) -> Vec<StarId> {
        raw.iter().copied().map(StarId::new).collect()
    }

    fn edges(raw: &[(i32, i32)]) -> Vec<Edge> {
        raw.iter().copied().map(Edge::from).collect()
    }

    #[test]
    fn test_build_chain() {
        let adj = Adjacency::build(&edges(&[(1, 2), (2, 3)]));

        assert_eq!(adj.len(), 3);
        assert_eq!(adj.neighbors(StarId::new(1)), ids(&[2]).as_slice());
        assert_eq!(adj.neighbors(StarId::new(2)), ids(&[1, 3]).as_slice());
        assert_eq!(adj.neighbors(StarId::new(3)), ids(&[2]).as_slice());
    }

    #[test]
    fn test_duplicate_edges_are_kept() {
        let adj = Adjacency::build(&edges(&[(1, 2), (1, 2)]));
        assert_eq!(adj.neighbors(StarId::new(1)), ids(&[2, 2]).as_slice());
        assert_eq!(adj.neighbors(StarId::new(2)), ids(&[1, 1]).as_slice());
    }

    #[test]
    fn test_self_loop_lists_itself() {
        let adj = Adjacency::build(&edges(&[(5, 5)]));
        assert_eq!(adj.neighbors(StarId::new(5)), ids(&[5, 5]).as_slice());
    }

    #[test]
    fn test_unknown_star_is_empty() {
        let adj = Adjacency::build(&edges(&[(1, 2)]));
        assert!(!adj.contains(StarId::new(9)));
        assert!(adj.neighbors(StarId::new(9)).is_empty());
    }

    #[test]
    fn test_empty() {
        let adj = Adjacency::build(&[]);
        assert!(adj.is_empty());
    }
}

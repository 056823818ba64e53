//! Directed weighted edges and the endpoint-unique edge set.

use std::{collections::HashSet, fmt, slice};

/// A directed edge from `source` to `destination` carrying an integer weight.
///
/// # Examples
/// ```
/// use randigraph_core::Edge;
///
/// let edge = Edge::new(0, 2, 7);
/// assert_eq!(edge.endpoints(), (0, 2));
/// assert!(!edge.is_self_loop());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    /// Vertex the edge leaves.
    pub source: usize,
    /// Vertex the edge enters.
    pub destination: usize,
    /// Edge weight.
    pub weight: u64,
}

impl Edge {
    /// Creates an edge.
    #[must_use]
    pub const fn new(source: usize, destination: usize, weight: u64) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Returns the `(source, destination)` pair that identifies the edge.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.source, self.destination)
    }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} (weight {})", self.source, self.destination, self.weight)
    }
}

/// Upper bound on edges reserved before any are inserted.
pub(crate) const MAX_PREALLOCATED_EDGES: usize = 1 << 20;

/// Edges that are unique by `(source, destination)`.
///
/// The weight plays no part in uniqueness: inserting an edge whose endpoints
/// are already present is rejected and the stored weight is kept. The reverse
/// edge `(destination, source)` is a different edge. Iteration follows
/// insertion order.
///
/// # Examples
/// ```
/// use randigraph_core::{Edge, EdgeSet};
///
/// let mut edges = EdgeSet::new();
/// assert!(edges.insert(Edge::new(0, 1, 5)));
/// assert!(!edges.insert(Edge::new(0, 1, 9)));
/// assert!(edges.insert(Edge::new(1, 0, 9)));
/// assert_eq!(edges.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EdgeSet {
    edges: Vec<Edge>,
    endpoints: HashSet<(usize, usize)>,
}

impl EdgeSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with room for `capacity` edges.
    ///
    /// At most 2^20 edges are reserved up front; larger sets grow on demand.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_PREALLOCATED_EDGES);
        Self {
            edges: Vec::with_capacity(capacity),
            endpoints: HashSet::with_capacity(capacity),
        }
    }

    /// Inserts `edge` unless its endpoint pair is already present.
    ///
    /// Returns `true` when the edge was added.
    pub fn insert(&mut self, edge: Edge) -> bool {
        if !self.endpoints.insert(edge.endpoints()) {
            return false;
        }
        self.edges.push(edge);
        true
    }

    /// Returns `true` when an edge from `source` to `destination` is present.
    #[must_use]
    pub fn contains(&self, source: usize, destination: usize) -> bool {
        self.endpoints.contains(&(source, destination))
    }

    /// Number of edges in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the set holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over the edges in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Edge> {
        self.edges.iter()
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a Edge;
    type IntoIter = slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::distinct(Edge::new(0, 1, 1), true)]
    #[case::loop_on_zero(Edge::new(0, 0, 1), false)]
    #[case::loop_on_other(Edge::new(4, 4, 3), false)]
    fn self_loop_detection(#[case] edge: Edge, #[case] distinct: bool) {
        assert_eq!(edge.is_self_loop(), !distinct);
    }

    #[test]
    fn with_capacity_caps_oversized_reservations() {
        let mut edges = EdgeSet::with_capacity(usize::MAX);
        assert!(edges.is_empty());
        assert!(edges.insert(Edge::new(0, 1, 1)));
        assert_eq!(edges.len(), 1);
    }

    #[test]
    fn duplicate_endpoints_keep_first_weight() {
        let mut edges = EdgeSet::new();
        assert!(edges.insert(Edge::new(2, 3, 10)));
        assert!(!edges.insert(Edge::new(2, 3, 99)));
        assert_eq!(edges.len(), 1);
        assert_eq!(edges.iter().next().map(|edge| edge.weight), Some(10));
    }

    #[test]
    fn reverse_direction_is_a_distinct_edge() {
        let mut edges = EdgeSet::with_capacity(2);
        assert!(edges.insert(Edge::new(0, 1, 1)));
        assert!(edges.insert(Edge::new(1, 0, 1)));
        assert!(edges.contains(0, 1));
        assert!(edges.contains(1, 0));
        assert!(!edges.contains(0, 2));
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut edges = EdgeSet::new();
        for edge in [Edge::new(3, 1, 1), Edge::new(0, 2, 2), Edge::new(1, 3, 3)] {
            edges.insert(edge);
        }
        let order: Vec<(usize, usize)> = (&edges).into_iter().map(Edge::endpoints).collect();
        assert_eq!(order, vec![(3, 1), (0, 2), (1, 3)]);
    }

    #[test]
    fn display_names_endpoints_and_weight() {
        assert_eq!(Edge::new(1, 2, 3).to_string(), "1 -> 2 (weight 3)");
    }
}

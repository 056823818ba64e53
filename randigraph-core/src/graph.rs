//! In-memory directed weighted graph and its invariant checks.

use crate::{
    edge::{Edge, EdgeSet},
    error::GraphError,
};

/// A directed weighted graph over the vertices `[0, num_vertices)`.
///
/// Every edge held by a [`Graph`] has in-range endpoints, no self-loops, and a
/// unique endpoint pair. Weights are only checked for being non-zero here; use
/// [`Graph::check_weights`] to enforce an upper bound.
///
/// # Examples
/// ```
/// use randigraph_core::{Edge, Graph};
///
/// let graph = Graph::from_edges(3, [Edge::new(0, 1, 4), Edge::new(1, 0, 2)])
///     .expect("edges are valid");
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.num_edges(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    num_vertices: usize,
    edges: EdgeSet,
}

impl Graph {
    pub(crate) const fn from_parts(num_vertices: usize, edges: EdgeSet) -> Self {
        Self {
            num_vertices,
            edges,
        }
    }

    /// Builds a graph from an edge list, rejecting the first edge that breaks
    /// an invariant.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`], [`GraphError::SelfLoop`],
    /// [`GraphError::DuplicateEdge`], or [`GraphError::ZeroWeight`].
    pub fn from_edges<I>(num_vertices: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = Edge>,
    {
        let iter = edges.into_iter();
        let mut set = EdgeSet::with_capacity(iter.size_hint().0);
        for edge in iter {
            if edge.source >= num_vertices || edge.destination >= num_vertices {
                return Err(GraphError::VertexOutOfRange { edge, num_vertices });
            }
            if edge.is_self_loop() {
                return Err(GraphError::SelfLoop { edge });
            }
            if edge.weight == 0 {
                return Err(GraphError::ZeroWeight { edge });
            }
            if !set.insert(edge) {
                return Err(GraphError::DuplicateEdge { edge });
            }
        }
        Ok(Self::from_parts(num_vertices, set))
    }

    /// Ensures every weight lies in `[1, weight_range]`.
    ///
    /// # Errors
    /// Returns [`GraphError::WeightOutOfRange`] for the first heavier edge.
    pub fn check_weights(&self, weight_range: u64) -> Result<(), GraphError> {
        match self.edges.iter().find(|edge| edge.weight > weight_range) {
            Some(edge) => Err(GraphError::WeightOutOfRange {
                edge: *edge,
                weight_range,
            }),
            None => Ok(()),
        }
    }

    /// Number of vertices.
    #[must_use]
    pub const fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// The graph's edges.
    #[must_use]
    pub const fn edges(&self) -> &EdgeSet {
        &self.edges
    }
}

//! Builder for validated [`Generator`] configurations.
//!
//! All checks happen in [`GeneratorBuilder::build`], before any sampling or
//! file I/O, so an invalid request never leaves a file behind.

use std::num::{NonZeroU64, NonZeroUsize};

use crate::{error::GeneratorError, generator::Generator};

/// Default vertex count.
pub const DEFAULT_NUM_VERTICES: usize = 50_000;
/// Default edge count.
pub const DEFAULT_NUM_EDGES: usize = 80_000;
/// Default inclusive upper bound for edge weights.
pub const DEFAULT_WEIGHT_RANGE: u64 = 100;

/// Configures and constructs [`Generator`] instances.
///
/// # Examples
/// ```
/// use randigraph_core::GeneratorBuilder;
///
/// let generator = GeneratorBuilder::new()
///     .with_num_vertices(4)
///     .with_num_edges(6)
///     .with_weight_range(10)
///     .with_seed(42)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(generator.max_edges(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    num_vertices: usize,
    num_edges: usize,
    weight_range: u64,
    seed: Option<u64>,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            num_vertices: DEFAULT_NUM_VERTICES,
            num_edges: DEFAULT_NUM_EDGES,
            weight_range: DEFAULT_WEIGHT_RANGE,
            seed: None,
        }
    }
}

impl GeneratorBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use randigraph_core::{DEFAULT_WEIGHT_RANGE, GeneratorBuilder};
    ///
    /// let builder = GeneratorBuilder::new();
    /// assert_eq!(builder.weight_range(), DEFAULT_WEIGHT_RANGE);
    /// assert_eq!(builder.seed(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the vertex count.
    #[must_use]
    pub const fn with_num_vertices(mut self, num_vertices: usize) -> Self {
        self.num_vertices = num_vertices;
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    pub const fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Overrides the target edge count.
    #[must_use]
    pub const fn with_num_edges(mut self, num_edges: usize) -> Self {
        self.num_edges = num_edges;
        self
    }

    /// Returns the configured edge count.
    #[must_use]
    pub const fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Overrides the inclusive weight bound.
    #[must_use]
    pub const fn with_weight_range(mut self, weight_range: u64) -> Self {
        self.weight_range = weight_range;
        self
    }

    /// Returns the configured weight bound.
    #[must_use]
    pub const fn weight_range(&self) -> u64 {
        self.weight_range
    }

    /// Fixes the RNG seed so runs are reproducible.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration and constructs a [`Generator`].
    ///
    /// # Errors
    /// Returns [`GeneratorError::ZeroVertices`] or
    /// [`GeneratorError::ZeroWeightRange`] for zero parameters,
    /// [`GeneratorError::Overflow`] when the maximum edge count does not fit
    /// in `usize`, and [`GeneratorError::TooManyEdges`] when more edges are
    /// requested than `num_vertices * (num_vertices - 1)`.
    ///
    /// # Examples
    /// ```
    /// use randigraph_core::{GeneratorBuilder, GeneratorError};
    ///
    /// let err = GeneratorBuilder::new()
    ///     .with_num_vertices(2)
    ///     .with_num_edges(3)
    ///     .build()
    ///     .expect_err("two vertices allow only two directed edges");
    /// assert_eq!(
    ///     err,
    ///     GeneratorError::TooManyEdges { requested: 3, num_vertices: 2, max: 2 },
    /// );
    /// ```
    pub fn build(self) -> Result<Generator, GeneratorError> {
        let num_vertices =
            NonZeroUsize::new(self.num_vertices).ok_or(GeneratorError::ZeroVertices)?;
        let weight_range =
            NonZeroU64::new(self.weight_range).ok_or(GeneratorError::ZeroWeightRange)?;
        let max_edges = max_directed_edges(num_vertices)?;
        if self.num_edges > max_edges {
            return Err(GeneratorError::TooManyEdges {
                requested: self.num_edges,
                num_vertices: num_vertices.get(),
                max: max_edges,
            });
        }

        Ok(Generator::new(
            num_vertices,
            self.num_edges,
            weight_range,
            max_edges,
            self.seed,
        ))
    }
}

/// Number of distinct directed edges without self-loops on `num_vertices`
/// vertices.
fn max_directed_edges(num_vertices: NonZeroUsize) -> Result<usize, GeneratorError> {
    let n = num_vertices.get();
    n.checked_mul(n - 1).ok_or(GeneratorError::Overflow { num_vertices: n })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::single_vertex(1, 0)]
    #[case::pair(2, 2)]
    #[case::triangle(3, 6)]
    #[case::large(50_000, 2_499_950_000)]
    fn max_directed_edges_counts_ordered_pairs(#[case] n: usize, #[case] expected: usize) {
        let vertices = NonZeroUsize::new(n).expect("test vertex counts are non-zero");
        assert_eq!(max_directed_edges(vertices), Ok(expected));
    }

    #[test]
    fn max_directed_edges_reports_overflow() {
        let vertices = NonZeroUsize::new(usize::MAX).expect("usize::MAX is non-zero");
        assert_eq!(
            max_directed_edges(vertices),
            Err(GeneratorError::Overflow {
                num_vertices: usize::MAX
            })
        );
    }

    #[rstest]
    #[case::zero_vertices(0, 0, 5, GeneratorError::ZeroVertices)]
    #[case::zero_weight_range(3, 1, 0, GeneratorError::ZeroWeightRange)]
    #[case::too_many_edges(
        2,
        3,
        5,
        GeneratorError::TooManyEdges { requested: 3, num_vertices: 2, max: 2 },
    )]
    #[case::single_vertex_with_edge(
        1,
        1,
        5,
        GeneratorError::TooManyEdges { requested: 1, num_vertices: 1, max: 0 },
    )]
    fn build_rejects_invalid_configuration(
        #[case] num_vertices: usize,
        #[case] num_edges: usize,
        #[case] weight_range: u64,
        #[case] expected: GeneratorError,
    ) {
        let err = GeneratorBuilder::new()
            .with_num_vertices(num_vertices)
            .with_num_edges(num_edges)
            .with_weight_range(weight_range)
            .build()
            .expect_err("configuration must be rejected");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case::empty(5, 0)]
    #[case::complete(4, 12)]
    #[case::single_vertex_no_edges(1, 0)]
    fn build_accepts_boundary_configurations(#[case] num_vertices: usize, #[case] num_edges: usize) {
        let generator = GeneratorBuilder::new()
            .with_num_vertices(num_vertices)
            .with_num_edges(num_edges)
            .build()
            .expect("configuration is valid");
        assert_eq!(generator.num_vertices(), num_vertices);
        assert_eq!(generator.num_edges(), num_edges);
        assert_eq!(generator.weight_range(), DEFAULT_WEIGHT_RANGE);
    }
}

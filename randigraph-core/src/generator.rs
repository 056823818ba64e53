//! Rejection-sampling generator for random directed weighted graphs.
//!
//! Candidates are drawn uniformly and discarded when they form a self-loop or
//! repeat an existing endpoint pair. The weight is drawn with every candidate
//! and thrown away together with it. Expected retries grow without bound as
//! the requested edge count approaches `num_vertices * (num_vertices - 1)`.

use std::num::{NonZeroU64, NonZeroUsize};

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{Span, debug, field, info, instrument};

use crate::{
    edge::{Edge, EdgeSet},
    graph::Graph,
};

/// Counters collected while sampling candidates.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GenerationStats {
    /// Candidates drawn, accepted or not.
    pub attempts: u64,
    /// Candidates discarded because both endpoints matched.
    pub self_loops: u64,
    /// Candidates discarded because the endpoint pair already existed.
    pub duplicates: u64,
}

/// Output of [`Generator::generate`].
#[derive(Clone, Debug)]
pub struct Generation {
    /// The generated graph.
    pub graph: Graph,
    /// Sampling counters.
    pub stats: GenerationStats,
    /// Seed that reproduces this graph.
    pub seed: u64,
}

/// Validated generator configuration. Construct with
/// [`crate::GeneratorBuilder`].
///
/// # Examples
/// ```
/// use randigraph_core::GeneratorBuilder;
///
/// let generator = GeneratorBuilder::new()
///     .with_num_vertices(3)
///     .with_num_edges(3)
///     .with_weight_range(5)
///     .with_seed(7)
///     .build()
///     .expect("configuration is valid");
/// let generation = generator.generate();
/// assert_eq!(generation.graph.num_edges(), 3);
/// assert_eq!(generation.seed, 7);
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    num_vertices: NonZeroUsize,
    num_edges: usize,
    weight_range: NonZeroU64,
    max_edges: usize,
    seed: Option<u64>,
}

impl Generator {
    pub(crate) const fn new(
        num_vertices: NonZeroUsize,
        num_edges: usize,
        weight_range: NonZeroU64,
        max_edges: usize,
        seed: Option<u64>,
    ) -> Self {
        Self {
            num_vertices,
            num_edges,
            weight_range,
            max_edges,
            seed,
        }
    }

    /// Number of vertices in generated graphs.
    #[must_use]
    pub const fn num_vertices(&self) -> usize {
        self.num_vertices.get()
    }

    /// Number of edges in generated graphs.
    #[must_use]
    pub const fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Inclusive upper bound for edge weights.
    #[must_use]
    pub const fn weight_range(&self) -> u64 {
        self.weight_range.get()
    }

    /// Maximum number of distinct directed edges for the vertex count.
    #[must_use]
    pub const fn max_edges(&self) -> usize {
        self.max_edges
    }

    /// Configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generates a graph with a [`SmallRng`] seeded from the configured seed,
    /// or from a freshly drawn one when none was configured.
    #[must_use]
    pub fn generate(&self) -> Generation {
        let seed = self.seed.unwrap_or_else(rand::random);
        let mut rng = SmallRng::seed_from_u64(seed);
        let (graph, stats) = self.generate_with_rng(&mut rng);
        Generation { graph, stats, seed }
    }

    /// Generates a graph drawing every candidate from `rng`.
    #[instrument(
        name = "generator.generate",
        skip(self, rng),
        fields(
            num_vertices = self.num_vertices.get(),
            num_edges = self.num_edges,
            weight_range = self.weight_range.get(),
            attempts = field::Empty,
        ),
    )]
    pub fn generate_with_rng<R>(&self, rng: &mut R) -> (Graph, GenerationStats)
    where
        R: Rng,
    {
        let n = self.num_vertices.get();
        let mut edges = EdgeSet::with_capacity(self.num_edges);
        let mut stats = GenerationStats::default();

        while edges.len() < self.num_edges {
            stats.attempts += 1;
            let candidate = Edge::new(
                rng.gen_range(0..n),
                rng.gen_range(0..n),
                rng.gen_range(1..=self.weight_range.get()),
            );
            if candidate.is_self_loop() {
                stats.self_loops += 1;
                continue;
            }
            if !edges.insert(candidate) {
                stats.duplicates += 1;
            }
        }

        Span::current().record("attempts", stats.attempts);
        debug!(
            self_loops = stats.self_loops,
            duplicates = stats.duplicates,
            "rejection sampling finished"
        );
        info!(edges = edges.len(), "graph generated");
        (Graph::from_parts(n, edges), stats)
    }
}

//! Type definitions for MST property-based tests.
//!
//! Provides the fixture, configuration, and weight distribution types used
//! by the graph generation strategies and property functions.

use crate::Graph;

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights and topology are chosen during generation,
/// producing inputs that stress different parts of the engines.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range, so ties are rare.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    ManyIdentical,
    /// Random spanning path plus roughly `0.5n` to `n` extra edges.
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
}

/// Fixture for MST property tests.
///
/// Holds the vertex count, the undirected edges that were generated and the
/// distribution that produced them, so failures can be diagnosed.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of vertices, labelled `0..vertex_count`.
    pub vertex_count: usize,
    /// Generated undirected edges as `(left, right, weight)`.
    pub edges: Vec<(usize, usize, u64)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl GraphFixture {
    /// Materialises the fixture as a symmetric [`Graph`] whose keys are
    /// `0..vertex_count` in order, isolated vertices included.
    pub(super) fn graph(&self) -> Graph<usize, u64> {
        let mut builder = (0..self.vertex_count).fold(Graph::builder(), |builder, vertex| {
            builder.add_vertex(vertex)
        });
        builder.extend(self.edges.iter().copied());
        builder.build()
    }

    /// Formats the context appended to every property failure message.
    pub(super) fn context(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len(),
        )
    }
}

/// Configuration for the determinism property.
///
/// Controls how many times each engine is re-executed on the same input to
/// detect non-determinism.
pub(super) struct DeterminismConfig {
    /// Number of times to repeat the computation per input.
    pub repetitions: usize,
    /// Number of threads that run the engines over one shared graph.
    pub threads: usize,
}

impl DeterminismConfig {
    /// Loads the configuration from environment variables, falling back to
    /// sensible defaults.
    ///
    /// `ARBOR_MST_PBT_DETERMINISM_REPS` controls the repetition count
    /// (default: 5) and `ARBOR_MST_PBT_THREADS` the thread count (default: 4).
    pub(super) fn load() -> Self {
        Self {
            repetitions: read_env("ARBOR_MST_PBT_DETERMINISM_REPS", 5),
            threads: read_env("ARBOR_MST_PBT_THREADS", 4),
        }
    }
}

fn read_env(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

//! Seeded synthetic graphs for the MST benchmarks.
//!
//! Each graph starts from a random recursive tree, so it is always
//! connected, and then gains a configurable number of random extra edges per
//! vertex. Parallel edges and shared weights are allowed.

use arbor_core::Graph;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{error::BenchSetupError, params::MstBenchParams};

/// Configuration for [`generate`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices, labelled `0..vertex_count`.
    pub vertex_count: usize,
    /// Random edges added per vertex after the spanning tree is laid down.
    pub extra_edges_per_vertex: usize,
    /// Weights are drawn uniformly from `1..=max_weight`.
    pub max_weight: u64,
    /// RNG seed.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    /// Builds a configuration from benchmark parameters.
    #[must_use]
    pub const fn from_params(params: MstBenchParams, max_weight: u64, seed: u64) -> Self {
        Self {
            vertex_count: params.vertex_count,
            extra_edges_per_vertex: params.extra_edges_per_vertex,
            max_weight,
            seed,
        }
    }
}

/// Generates a connected symmetric graph.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` or
/// `max_weight` is zero.
///
/// # Examples
/// ```
/// use arbor_benches::source::{SyntheticGraphConfig, generate};
///
/// let graph = generate(&SyntheticGraphConfig {
///     vertex_count: 16,
///     extra_edges_per_vertex: 2,
///     max_weight: 100,
///     seed: 7,
/// })
/// .expect("configuration is valid");
/// assert_eq!(graph.vertex_count(), 16);
/// ```
pub fn generate(config: &SyntheticGraphConfig) -> Result<Graph<usize, u64>, BenchSetupError> {
    if config.vertex_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertex_count",
        });
    }
    if config.max_weight == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "max_weight",
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut builder = Graph::builder().add_vertex(0);

    for vertex in 1..config.vertex_count {
        let parent = rng.gen_range(0..vertex);
        let weight = rng.gen_range(1..=config.max_weight);
        builder = builder.add_edge(parent, vertex, weight);
    }

    let extra = config
        .vertex_count
        .saturating_mul(config.extra_edges_per_vertex);
    for _ in 0..extra {
        let left = rng.gen_range(0..config.vertex_count);
        let right = rng.gen_range(0..config.vertex_count);
        if left != right {
            builder = builder.add_edge(left, right, rng.gen_range(1..=config.max_weight));
        }
    }

    Ok(builder.build())
}

//! Benchmark parameter types.

use std::fmt;

/// Shape of the graph used by one MST benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Random edges added per vertex on top of the spanning tree.
    pub extra_edges_per_vertex: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},extra={}",
            self.vertex_count, self.extra_edges_per_vertex
        )
    }
}

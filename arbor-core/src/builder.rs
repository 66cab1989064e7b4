//! Solver configuration and the public entry points.
//!
//! [`MstBuilder`] configures an [`MstSolver`], which admits a graph and then
//! hands it to the Prim or Kruskal engine. The free functions [`prim`] and
//! [`kruskal`] run the default solver.

use tracing::{instrument, warn};

use crate::{
    error::Result,
    graph::{Graph, Vertex},
    mst,
    result::SpanningTree,
    weight::Weight,
};

/// How the solver treats edge weights below zero.
///
/// Spanning tree optimality does not depend on the sign of the weights, but
/// graphs carrying negative weights usually indicate a modelling error, so
/// they are rejected unless the caller opts in.
///
/// # Examples
/// ```
/// use arbor_core::NegativeWeights;
///
/// assert_eq!(NegativeWeights::default(), NegativeWeights::Reject);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum NegativeWeights {
    /// Fail with [`crate::MstError::MalformedGraph`].
    #[default]
    Reject,
    /// Accept negative weights and log a warning.
    Accept,
}

/// Configures and constructs [`MstSolver`] instances.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, MstBuilder, NegativeWeights};
///
/// let solver = MstBuilder::new()
///     .with_negative_weights(NegativeWeights::Accept)
///     .build();
/// let graph = Graph::builder()
///     .add_edge("x", "y", -1_i64)
///     .add_edge("y", "z", 2)
///     .build();
/// let tree = solver.kruskal(&graph).expect("negative weights are accepted");
/// assert_eq!(tree.total_cost(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MstBuilder {
    negative_weights: NegativeWeights,
}

impl MstBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{MstBuilder, NegativeWeights};
    ///
    /// let builder = MstBuilder::new();
    /// assert_eq!(builder.negative_weights(), NegativeWeights::Reject);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the negative weight policy.
    #[must_use]
    pub fn with_negative_weights(mut self, policy: NegativeWeights) -> Self {
        self.negative_weights = policy;
        self
    }

    /// Returns the configured negative weight policy.
    #[must_use]
    pub fn negative_weights(&self) -> NegativeWeights {
        self.negative_weights
    }

    /// Constructs the solver.
    #[must_use]
    pub fn build(self) -> MstSolver {
        MstSolver {
            negative_weights: self.negative_weights,
        }
    }
}

/// Runs the spanning tree engines under a fixed configuration.
///
/// The solver holds no per-run state, so one instance can serve any number of
/// graphs and threads.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MstSolver {
    negative_weights: NegativeWeights,
}

impl MstSolver {
    /// Starts an [`MstBuilder`].
    #[must_use]
    pub fn builder() -> MstBuilder {
        MstBuilder::new()
    }

    /// Returns the negative weight policy in force.
    #[must_use]
    pub fn negative_weights(&self) -> NegativeWeights {
        self.negative_weights
    }

    /// Grows a minimum spanning tree from `start` with Prim's algorithm.
    ///
    /// The frontier is a binary heap of `(weight, vertex, via)` entries with
    /// stale entries skipped when popped. Only `start`'s component is
    /// spanned; other vertices are silently left out.
    ///
    /// # Errors
    /// Returns [`crate::MstError::UnknownVertex`] when `start`, or any
    /// neighbour named by an adjacency record, is not a key, and
    /// [`crate::MstError::MalformedGraph`] when a weight is non-finite or
    /// negative under [`NegativeWeights::Reject`]. Returns
    /// [`crate::MstError::CostOverflow`] when the total does not fit `W`.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Graph, MstSolver};
    ///
    /// let graph = Graph::builder()
    ///     .add_edge('A', 'B', 1_u32)
    ///     .add_edge('C', 'D', 2)
    ///     .build();
    /// let tree = MstSolver::default().prim(&graph, &'A').expect("A is a key");
    /// assert_eq!(tree.into_parts(), (vec![('A', 'B', 1)], 1));
    /// ```
    #[instrument(
        name = "mst.prim",
        err,
        skip(self, graph, start),
        fields(
            vertices = graph.vertex_count(),
            records = graph.record_count(),
            start = ?start,
            negative_weights = ?self.negative_weights
        ),
    )]
    pub fn prim<V: Vertex, W: Weight>(
        &self,
        graph: &Graph<V, W>,
        start: &V,
    ) -> Result<SpanningTree<V, W>> {
        self.admit(graph)?;
        mst::grow(graph, start)
    }

    /// Builds a minimum spanning forest with Kruskal's algorithm.
    ///
    /// Every vertex is covered: a disconnected graph yields one tree per
    /// component and the total cost sums all of them.
    ///
    /// # Errors
    /// Returns [`crate::MstError::UnknownVertex`] when an adjacency record
    /// names a neighbour that is not a key, and
    /// [`crate::MstError::MalformedGraph`] when a weight is non-finite or
    /// negative under [`NegativeWeights::Reject`], and
    /// [`crate::MstError::CostOverflow`] when the total does not fit `W`.
    #[instrument(
        name = "mst.kruskal",
        err,
        skip(self, graph),
        fields(
            vertices = graph.vertex_count(),
            records = graph.record_count(),
            negative_weights = ?self.negative_weights
        ),
    )]
    pub fn kruskal<V: Vertex, W: Weight>(&self, graph: &Graph<V, W>) -> Result<SpanningTree<V, W>> {
        self.admit(graph)?;
        mst::build(graph)
    }

    fn admit<V: Vertex, W: Weight>(&self, graph: &Graph<V, W>) -> Result<()> {
        let admission = mst::admit(graph, self.negative_weights)?;
        if admission.negative_records > 0 {
            warn!(
                negative_records = admission.negative_records,
                "accepting negative edge weights"
            );
        }
        Ok(())
    }
}

/// Runs Prim's algorithm from `start` with the default [`MstSolver`].
///
/// # Errors
/// See [`MstSolver::prim`].
pub fn prim<V: Vertex, W: Weight>(graph: &Graph<V, W>, start: &V) -> Result<SpanningTree<V, W>> {
    MstSolver::default().prim(graph, start)
}

/// Runs Kruskal's algorithm with the default [`MstSolver`].
///
/// # Errors
/// See [`MstSolver::kruskal`].
pub fn kruskal<V: Vertex, W: Weight>(graph: &Graph<V, W>) -> Result<SpanningTree<V, W>> {
    MstSolver::default().kruskal(graph)
}

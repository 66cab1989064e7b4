//! Result types for spanning tree computations.
//!
//! A [`SpanningTree`] is produced once per engine invocation and never mutated
//! afterwards. Rendering it graphically is left to downstream consumers; the
//! [`fmt::Display`] implementation gives the plain textual summary.

use std::fmt;

use crate::{graph::Vertex, weight::Weight};

/// Identifies the engine that produced a [`SpanningTree`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Priority-driven growth from a start vertex.
    Prim,
    /// Sorted-edge scan joined through a disjoint set.
    Kruskal,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Prim => "Prim",
            Self::Kruskal => "Kruskal",
        })
    }
}

/// An accepted edge, oriented the way the engine discovered it.
///
/// Prim records `(via, vertex)`; Kruskal records the orientation of the first
/// adjacency record that introduced the edge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TreeEdge<V, W> {
    from: V,
    to: V,
    weight: W,
}

impl<V, W: Copy> TreeEdge<V, W> {
    pub(crate) const fn new(from: V, to: V, weight: W) -> Self {
        Self { from, to, weight }
    }

    /// Returns the endpoint the edge was discovered from.
    #[must_use]
    pub fn from(&self) -> &V {
        &self.from
    }

    /// Returns the endpoint the edge leads to.
    #[must_use]
    pub fn to(&self) -> &V {
        &self.to
    }

    /// Returns the edge weight.
    #[must_use]
    pub fn weight(&self) -> W {
        self.weight
    }

    /// Consumes the edge into an `(endpoint, endpoint, weight)` triple.
    #[must_use]
    pub fn into_tuple(self) -> (V, V, W) {
        (self.from, self.to, self.weight)
    }

    /// Returns `true` when the edge joins `left` and `right` in either
    /// orientation.
    #[must_use]
    pub fn joins(&self, left: &V, right: &V) -> bool
    where
        V: PartialEq,
    {
        (self.from == *left && self.to == *right) || (self.from == *right && self.to == *left)
    }
}

impl<V: fmt::Debug, W: fmt::Display> fmt::Display for TreeEdge<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} - {:?} ({})", self.from, self.to, self.weight)
    }
}

/// The output of a minimum spanning tree or forest computation.
///
/// Edges are kept in acceptance order. `total_cost` is the sum of their
/// weights.
///
/// # Examples
/// ```
/// use arbor_core::{Algorithm, Graph, kruskal};
///
/// let graph = Graph::builder()
///     .add_edge('A', 'B', 1_u32)
///     .add_edge('C', 'D', 2)
///     .build();
/// let forest = kruskal(&graph).expect("graph is well formed");
/// assert_eq!(forest.algorithm(), Algorithm::Kruskal);
/// assert_eq!(forest.component_count(), 2);
/// assert!(!forest.is_tree());
///
/// let (edges, total) = forest.into_parts();
/// assert_eq!(edges, vec![('A', 'B', 1), ('C', 'D', 2)]);
/// assert_eq!(total, 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTree<V, W> {
    edges: Vec<TreeEdge<V, W>>,
    total_cost: W,
    component_count: usize,
    algorithm: Algorithm,
}

impl<V: Vertex, W: Weight> SpanningTree<V, W> {
    pub(crate) fn new(
        algorithm: Algorithm,
        edges: Vec<TreeEdge<V, W>>,
        total_cost: W,
        component_count: usize,
    ) -> Self {
        Self {
            edges,
            total_cost,
            component_count,
            algorithm,
        }
    }

    /// Returns the accepted edges in acceptance order.
    #[must_use]
    pub fn edges(&self) -> &[TreeEdge<V, W>] {
        &self.edges
    }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    pub fn total_cost(&self) -> W {
        self.total_cost
    }

    /// Returns the engine that produced this result.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the number of connected components the result spans.
    ///
    /// Prim only ever grows the start vertex's component, so its results
    /// report `1`. Kruskal reports one component per tree in the forest,
    /// isolated vertices included.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Returns `true` when the result is a single tree.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the number of accepted edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when no edge was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns `true` when an accepted edge joins `left` and `right`.
    #[must_use]
    pub fn contains_edge(&self, left: &V, right: &V) -> bool {
        self.edges.iter().any(|edge| edge.joins(left, right))
    }

    /// Iterates the accepted edges.
    pub fn iter(&self) -> std::slice::Iter<'_, TreeEdge<V, W>> {
        self.edges.iter()
    }

    /// Consumes the result into `(edges, total_cost)` triples.
    #[must_use]
    pub fn into_parts(self) -> (Vec<(V, V, W)>, W) {
        let edges = self.edges.into_iter().map(TreeEdge::into_tuple).collect();
        (edges, self.total_cost)
    }
}

impl<'a, V: Vertex, W: Weight> IntoIterator for &'a SpanningTree<V, W> {
    type Item = &'a TreeEdge<V, W>;
    type IntoIter = std::slice::Iter<'a, TreeEdge<V, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Vertex, W: Weight> fmt::Display for SpanningTree<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} spanning tree:", self.algorithm)?;
        for edge in &self.edges {
            writeln!(f, "  {edge}")?;
        }
        write!(f, "Total cost: {}", self.total_cost)
    }
}

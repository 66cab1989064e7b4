//! Adjacency-list graph model shared by both spanning tree engines.
//!
//! The graph keeps its keys in the order the caller supplied them and stores
//! every adjacency record exactly as given. Symmetry is not enforced: a caller
//! may list an undirected edge from both endpoints or from one only, and the
//! engines cope with either.

use std::{collections::HashMap, fmt, hash::Hash};

use crate::{
    error::{MstError, Result},
    weight::Weight,
};

/// A vertex label.
///
/// Labels are opaque to the engines apart from hashing, equality and their
/// natural ordering, which breaks ties between equally weighted candidates.
/// The trait is implemented for every type meeting the bounds.
pub trait Vertex: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Ord + fmt::Debug {}

/// A weighted undirected graph stored as adjacency lists.
///
/// # Examples
/// ```
/// use arbor_core::Graph;
///
/// let graph = Graph::from_adjacency([
///     ("a", vec![("b", 3_u32)]),
///     ("b", vec![("a", 3)]),
/// ]);
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.neighbors(&"a").expect("a is a key"), &[("b", 3)]);
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V, W> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    adjacency: Vec<Vec<(V, W)>>,
}

impl<V: Vertex, W: Weight> Graph<V, W> {
    /// Builds a graph from a mapping of vertex to `(neighbour, weight)` pairs.
    ///
    /// Keys keep their first-seen order. A key that appears more than once has
    /// its neighbour lists concatenated. Neighbours are not registered as keys;
    /// a neighbour that never appears as a key is reported by the solvers as
    /// [`MstError::UnknownVertex`].
    ///
    /// # Examples
    /// ```
    /// use arbor_core::Graph;
    ///
    /// let graph = Graph::from_adjacency([
    ///     ('x', vec![('y', 1_u8)]),
    ///     ('y', vec![]),
    ///     ('x', vec![('y', 2)]),
    /// ]);
    /// assert_eq!(graph.vertices(), &['x', 'y']);
    /// assert_eq!(graph.record_count(), 2);
    /// ```
    pub fn from_adjacency<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = (V, W)>,
    {
        let mut graph = Self::default();
        for (vertex, neighbors) in adjacency {
            let slot = graph.slot(vertex);
            if let Some(records) = graph.adjacency.get_mut(slot) {
                records.extend(neighbors);
            }
        }
        graph
    }

    /// Starts a [`GraphBuilder`] for assembling a symmetric graph edge by edge.
    #[must_use]
    pub fn builder() -> GraphBuilder<V, W> {
        GraphBuilder::default()
    }

    /// Returns the adjacency records of `vertex` in insertion order.
    ///
    /// # Errors
    /// Returns [`MstError::UnknownVertex`] when `vertex` is not a key.
    pub fn neighbors(&self, vertex: &V) -> Result<&[(V, W)]> {
        self.index_of(vertex)
            .and_then(|slot| self.adjacency.get(slot))
            .map(Vec::as_slice)
            .ok_or_else(|| MstError::unknown_vertex(vertex))
    }

    /// Returns every key in insertion order.
    #[must_use]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Returns `true` when `vertex` is a key of the graph.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of stored adjacency records.
    ///
    /// An undirected edge listed from both endpoints counts twice.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns `true` when the graph has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Dense index of `vertex`, assigned in insertion order.
    pub(crate) fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    /// The stored key equal to `vertex`, borrowed for the graph's lifetime.
    pub(crate) fn key(&self, vertex: &V) -> Option<&V> {
        self.index_of(vertex).and_then(|slot| self.vertices.get(slot))
    }

    /// Iterates `(index, key, records)` in insertion order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (usize, &V, &[(V, W)])> {
        self.vertices
            .iter()
            .zip(&self.adjacency)
            .enumerate()
            .map(|(slot, (vertex, records))| (slot, vertex, records.as_slice()))
    }

    fn slot(&mut self, vertex: V) -> usize {
        if let Some(slot) = self.index_of(&vertex) {
            return slot;
        }
        let slot = self.vertices.len();
        self.index.insert(vertex.clone(), slot);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        slot
    }

    fn push_record(&mut self, vertex: V, neighbor: V, weight: W) {
        let slot = self.slot(vertex);
        if let Some(records) = self.adjacency.get_mut(slot) {
            records.push((neighbor, weight));
        }
    }
}

impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }
}

/// Assembles a [`Graph`] one undirected edge at a time.
///
/// Each edge is recorded from both endpoints, so the result is symmetric.
///
/// # Examples
/// ```
/// use arbor_core::Graph;
///
/// let graph = Graph::builder()
///     .add_edge(1, 2, 0.5_f64)
///     .add_vertex(3)
///     .build();
/// assert_eq!(graph.vertices(), &[1, 2, 3]);
/// assert_eq!(graph.neighbors(&2).expect("2 is a key"), &[(1, 0.5)]);
/// assert!(graph.neighbors(&3).expect("3 is a key").is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct GraphBuilder<V, W> {
    graph: Graph<V, W>,
}

impl<V, W> Default for GraphBuilder<V, W> {
    fn default() -> Self {
        Self {
            graph: Graph::default(),
        }
    }
}

impl<V: Vertex, W: Weight> GraphBuilder<V, W> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `vertex` as a key without adding any edges.
    #[must_use]
    pub fn add_vertex(mut self, vertex: V) -> Self {
        self.graph.slot(vertex);
        self
    }

    /// Records the undirected edge `left -- right` from both endpoints.
    #[must_use]
    pub fn add_edge(mut self, left: V, right: V, weight: W) -> Self {
        self.push_edge(left, right, weight);
        self
    }

    /// Finishes the graph.
    #[must_use]
    pub fn build(self) -> Graph<V, W> {
        self.graph
    }

    fn push_edge(&mut self, left: V, right: V, weight: W) {
        self.graph.push_record(left.clone(), right.clone(), weight);
        self.graph.push_record(right, left, weight);
    }
}

impl<V: Vertex, W: Weight> Extend<(V, V, W)> for GraphBuilder<V, W> {
    fn extend<T: IntoIterator<Item = (V, V, W)>>(&mut self, edges: T) {
        for (left, right, weight) in edges {
            self.push_edge(left, right, weight);
        }
    }
}

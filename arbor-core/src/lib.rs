//! Arbor core library.
//!
//! Computes minimum spanning trees over labelled, weighted, undirected graphs
//! with two independent strategies:
//!
//! - [`prim`] grows a single tree outward from a start vertex using a
//!   lazily-pruned priority frontier.
//! - [`kruskal`] sorts every edge and joins components through a
//!   path-compressing disjoint set, yielding a spanning forest when the graph
//!   is disconnected.
//!
//! Both return a [`SpanningTree`] holding the accepted edges in acceptance
//! order together with their total cost.
//!
//! # Tie-breaking
//!
//! Equal weights are resolved by the natural ordering of vertex labels, so
//! repeated runs over the same graph always produce identical edge lists.
//!
//! # Examples
//! ```
//! use arbor_core::{Graph, kruskal, prim};
//!
//! let graph = Graph::builder()
//!     .add_edge('A', 'B', 1_u32)
//!     .add_edge('B', 'C', 2)
//!     .add_edge('A', 'C', 4)
//!     .build();
//!
//! let grown = prim(&graph, &'A').expect("A is a vertex");
//! let sorted = kruskal(&graph).expect("graph is well formed");
//! assert_eq!(grown.total_cost(), 3);
//! assert_eq!(sorted.total_cost(), 3);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod graph;
mod mst;
mod result;
mod weight;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{MstBuilder, MstSolver, NegativeWeights, kruskal, prim},
    error::{MstError, MstErrorCode, Result, WeightDefect},
    graph::{Graph, GraphBuilder, Vertex},
    result::{Algorithm, SpanningTree, TreeEdge},
    weight::Weight,
};

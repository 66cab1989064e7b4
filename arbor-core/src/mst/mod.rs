//! Minimum spanning tree (MST) engines.
//!
//! Two independent strategies share the read-only [`crate::Graph`]:
//!
//! - `prim` grows one tree from a start vertex over a lazily pruned binary
//!   heap.
//! - `kruskal` flattens the adjacency lists into candidate edges, sorts them
//!   and joins components through a path-compressing disjoint set.
//!
//! Each call owns its working state (heap, absorbed set, disjoint set) and
//! drops it on return, so concurrent calls over one graph never interact.

mod kruskal;
mod prim;
mod union_find;
mod validate;

pub(crate) use self::{kruskal::build, prim::grow, validate::admit};

#[cfg(test)]
mod property;

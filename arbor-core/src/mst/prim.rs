//! Prim's algorithm over a lazily pruned priority frontier.
//!
//! The frontier never decreases a key in place. Every time a vertex is
//! absorbed, an entry for each of its unabsorbed neighbours is pushed, and
//! entries whose vertex was absorbed in the meantime are discarded when they
//! surface.

use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, HashSet},
};

use tracing::debug;

use crate::{
    error::{MstError, Result},
    graph::{Graph, Vertex},
    result::{Algorithm, SpanningTree, TreeEdge},
    weight::Weight,
};

/// A candidate on the frontier: reach `vertex` through `via` at `weight`.
///
/// Ordered by weight, then by the candidate label, then by the `via` label
/// (`None` first) so the heap has a total order.
#[derive(Debug)]
struct FrontierEntry<'g, V, W> {
    weight: W,
    vertex: &'g V,
    via: Option<&'g V>,
}

impl<V: Vertex, W: Weight> Ord for FrontierEntry<'_, V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .weight_cmp(&other.weight)
            .then_with(|| self.vertex.cmp(other.vertex))
            .then_with(|| self.via.cmp(&other.via))
    }
}

impl<V: Vertex, W: Weight> PartialOrd for FrontierEntry<'_, V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Vertex, W: Weight> PartialEq for FrontierEntry<'_, V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Vertex, W: Weight> Eq for FrontierEntry<'_, V, W> {}

/// Grows a minimum spanning tree of `start`'s component.
///
/// Vertices unreachable from `start` are left out of the result.
pub(crate) fn grow<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
    start: &V,
) -> Result<SpanningTree<V, W>> {
    let root = graph
        .key(start)
        .ok_or_else(|| MstError::unknown_vertex(start))?;

    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse(FrontierEntry {
        weight: W::ZERO,
        vertex: root,
        via: None,
    }));

    let mut absorbed: HashSet<&V> = HashSet::with_capacity(graph.vertex_count());
    let mut edges = Vec::with_capacity(graph.vertex_count().saturating_sub(1));
    let mut total_cost = W::ZERO;
    let mut stale = 0_usize;

    while let Some(Reverse(entry)) = frontier.pop() {
        if !absorbed.insert(entry.vertex) {
            stale += 1;
            continue;
        }

        total_cost = total_cost
            .checked_add(entry.weight)
            .ok_or_else(|| MstError::cost_overflow::<W>(Algorithm::Prim))?;
        if let Some(via) = entry.via {
            edges.push(TreeEdge::new(via.clone(), entry.vertex.clone(), entry.weight));
        }

        for (neighbor, weight) in graph.neighbors(entry.vertex)? {
            if !absorbed.contains(neighbor) {
                frontier.push(Reverse(FrontierEntry {
                    weight: *weight,
                    vertex: neighbor,
                    via: Some(entry.vertex),
                }));
            }
        }
    }

    debug!(
        absorbed = absorbed.len(),
        edges = edges.len(),
        stale,
        "prim frontier exhausted"
    );
    Ok(SpanningTree::new(Algorithm::Prim, edges, total_cost, 1))
}

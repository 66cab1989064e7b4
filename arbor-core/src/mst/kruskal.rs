//! Kruskal's algorithm over the flattened adjacency lists.
//!
//! Flattening walks keys in insertion order and their records in order. A
//! record `(node, neighbour, w)` is dropped when `(neighbour, node, w)` was
//! already taken, which folds the two records of a symmetrically stored edge
//! into one candidate. The match is on the exact reversed triple: two distinct
//! parallel edges with equal weight listed in opposite directions collapse
//! into one.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::{MstError, Result},
    graph::{Graph, Vertex},
    result::{Algorithm, SpanningTree, TreeEdge},
    weight::Weight,
};

use super::union_find::DisjointSet;

#[derive(Debug)]
struct Candidate<'g, V, W> {
    weight: W,
    left: &'g V,
    right: &'g V,
    left_slot: usize,
    right_slot: usize,
}

/// Builds a minimum spanning forest over every vertex of `graph`.
pub(crate) fn build<V: Vertex, W: Weight>(graph: &Graph<V, W>) -> Result<SpanningTree<V, W>> {
    let Flattened {
        mut candidates,
        skipped,
    } = flatten(graph)?;

    candidates.sort_by(|a, b| {
        a.weight
            .weight_cmp(&b.weight)
            .then_with(|| a.left.cmp(b.left))
            .then_with(|| a.right.cmp(b.right))
    });

    let mut components = DisjointSet::new(graph.vertex_count());
    let mut edges = Vec::with_capacity(graph.vertex_count().saturating_sub(1));
    let mut total_cost = W::ZERO;

    for candidate in &candidates {
        if components.union(candidate.left_slot, candidate.right_slot) {
            edges.push(TreeEdge::new(
                candidate.left.clone(),
                candidate.right.clone(),
                candidate.weight,
            ));
            total_cost = total_cost
                .checked_add(candidate.weight)
                .ok_or_else(|| MstError::cost_overflow::<W>(Algorithm::Kruskal))?;
        }
    }

    debug!(
        candidates = candidates.len(),
        skipped_reverse = skipped,
        accepted = edges.len(),
        components = components.components(),
        "kruskal scan complete"
    );
    Ok(SpanningTree::new(
        Algorithm::Kruskal,
        edges,
        total_cost,
        components.components(),
    ))
}

#[derive(Debug)]
struct Flattened<'g, V, W> {
    candidates: Vec<Candidate<'g, V, W>>,
    skipped: usize,
}

fn flatten<V: Vertex, W: Weight>(graph: &Graph<V, W>) -> Result<Flattened<'_, V, W>> {
    let mut taken: HashMap<(&V, &V), Vec<W>> = HashMap::new();
    let mut candidates = Vec::with_capacity(graph.record_count());
    let mut skipped = 0_usize;

    for (left_slot, node, records) in graph.entries() {
        for (neighbor, weight) in records {
            let right_slot = graph
                .index_of(neighbor)
                .ok_or_else(|| MstError::unknown_vertex(neighbor))?;

            let reverse_taken = taken
                .get(&(neighbor, node))
                .is_some_and(|weights| weights.contains(weight));
            if reverse_taken {
                skipped += 1;
                continue;
            }

            taken.entry((node, neighbor)).or_default().push(*weight);
            candidates.push(Candidate {
                weight: *weight,
                left: node,
                right: neighbor,
                left_slot,
                right_slot,
            });
        }
    }

    Ok(Flattened {
        candidates,
        skipped,
    })
}

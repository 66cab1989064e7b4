//! Shared helper functions for MST property-based tests.

use crate::SpanningTree;

/// Path-halving find over a plain parent table.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Sums the weights of the tree's edges independently of `total_cost`.
pub(super) fn summed_weight(tree: &SpanningTree<usize, u64>) -> u64 {
    tree.iter().map(|edge| edge.weight()).sum()
}

/// Returns a copy of the tree's edges as plain tuples.
pub(super) fn edge_tuples(tree: &SpanningTree<usize, u64>) -> Vec<(usize, usize, u64)> {
    tree.iter()
        .map(|edge| (*edge.from(), *edge.to(), edge.weight()))
        .collect()
}

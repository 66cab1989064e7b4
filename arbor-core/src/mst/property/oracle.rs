//! Sequential Kruskal oracle for MST property verification.
//!
//! A deliberately plain union-by-rank Kruskal over the fixture's edge list.
//! It shares no code with the engines, so agreement on totals and counts is
//! meaningful. Edge selection may differ from the engines when weights tie,
//! but the minimum total per component does not.

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleForest {
    /// Total weight of the spanning forest.
    pub total_weight: u64,
    /// Number of edges in the spanning forest.
    pub edge_count: usize,
    /// Number of connected components, isolated vertices included.
    pub component_count: usize,
    /// Final representative of each vertex.
    roots: Vec<usize>,
    /// Forest weight accumulated per representative.
    component_weight: Vec<u64>,
    /// Vertex count per representative.
    component_size: Vec<usize>,
}

impl OracleForest {
    /// Minimum spanning tree weight of the component holding `vertex`.
    pub(super) fn component_weight_of(&self, vertex: usize) -> u64 {
        self.component_weight[self.roots[vertex]]
    }

    /// Number of vertices in the component holding `vertex`.
    pub(super) fn component_size_of(&self, vertex: usize) -> usize {
        self.component_size[self.roots[vertex]]
    }

    /// Returns `true` when `left` and `right` share a component.
    pub(super) fn connected(&self, left: usize, right: usize) -> bool {
        self.roots[left] == self.roots[right]
    }
}

/// Computes a minimum spanning forest with sequential Kruskal.
///
/// Self-loops and out-of-range endpoints are ignored.
pub(super) fn sequential_kruskal(
    vertex_count: usize,
    edges: &[(usize, usize, u64)],
) -> OracleForest {
    let mut sorted: Vec<(usize, usize, u64)> = edges
        .iter()
        .copied()
        .filter(|&(left, right, _)| left != right && left < vertex_count && right < vertex_count)
        .collect();
    sorted.sort_unstable_by_key(|&(left, right, weight)| {
        (weight, left.min(right), left.max(right))
    });

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut rank = vec![0_usize; vertex_count];
    let mut accepted = Vec::new();
    let mut components = vertex_count;

    for &(left, right, weight) in &sorted {
        let left_root = find_root(&mut parent, left);
        let right_root = find_root(&mut parent, right);
        if left_root != right_root {
            union_by_rank(&mut parent, &mut rank, left_root, right_root);
            accepted.push((left, weight));
            components -= 1;
        }
    }

    let roots: Vec<usize> = (0..vertex_count)
        .map(|vertex| find_root(&mut parent, vertex))
        .collect();
    let mut component_weight = vec![0_u64; vertex_count];
    let mut component_size = vec![0_usize; vertex_count];
    for &root in &roots {
        component_size[root] += 1;
    }
    for &(endpoint, weight) in &accepted {
        component_weight[roots[endpoint]] += weight;
    }

    OracleForest {
        total_weight: accepted.iter().map(|&(_, weight)| weight).sum(),
        edge_count: accepted.len(),
        component_count: components,
        roots,
        component_weight,
        component_size,
    }
}

/// Union by rank, breaking ties towards the smaller index.
fn union_by_rank(parent: &mut [usize], rank: &mut [usize], a: usize, b: usize) {
    let (root, child) = match rank[a].cmp(&rank[b]) {
        std::cmp::Ordering::Greater => (a, b),
        std::cmp::Ordering::Less => (b, a),
        std::cmp::Ordering::Equal if a <= b => (a, b),
        std::cmp::Ordering::Equal => (b, a),
    };
    parent[child] = root;
    if rank[root] == rank[child] {
        rank[root] += 1;
    }
}

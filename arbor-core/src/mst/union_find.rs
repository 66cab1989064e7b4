//! Union-find (disjoint set union) used by the Kruskal engine.
//!
//! Nodes are the dense vertex indices assigned by [`crate::Graph`]. `find`
//! compresses every node on the lookup path straight to the root. `union`
//! always hangs the second representative under the first; there is no rank
//! or size heuristic.

#[derive(Clone, Debug)]
pub(super) struct DisjointSet {
    parent: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    pub(super) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            components: n,
        }
    }

    pub(super) fn components(&self) -> usize {
        self.components
    }

    pub(super) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets holding `left` and `right`.
    ///
    /// Returns `false` when both were already in the same set.
    pub(super) fn union(&mut self, left: usize, right: usize) -> bool {
        let left = self.find(left);
        let right = self.find(right);
        if left == right {
            return false;
        }
        self.parent[right] = left;
        self.components = self.components.saturating_sub(1);
        true
    }
}

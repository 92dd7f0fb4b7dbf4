//! The `GraphLike` query surface and the `Block` decomposition it is built on.
//!
//! `Graph` and `InducedSubgraph` both implement [`GraphLike`]; the BFS used to
//! compute connected components, component-separator adjacency, and full
//! block decomposition is written once here as default trait methods, driven
//! only by each implementor's `neighbors`/`contains`/`nodes`.

use std::collections::VecDeque;

use crate::error::Error;
use crate::node_set::{Node, NodeSet};

/// A connected component of `G \ removed`, paired with the subset of
/// `removed` adjacent to it.
///
/// `separator` is always a subset of the `removed` set a `Block` was
/// decomposed against. When `separator` equals that full `removed` set, the
/// component is said to be *full* with respect to it — the condition used
/// throughout minimal-separator and PMC reasoning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub separator: NodeSet,
    pub component: NodeSet,
}

impl Block {
    /// The union of this block's separator and component.
    pub fn union(&self) -> NodeSet {
        self.separator.union(&self.component)
    }

    /// Whether every node in `nodes` belongs to this block's union.
    pub fn includes_nodes(&self, nodes: &NodeSet) -> bool {
        let u = self.union();
        nodes.iter().all(|v| u.contains(*v))
    }

    /// Whether this block's component is full with respect to `k`, i.e. its
    /// separator is exactly `k`.
    pub fn is_full_for(&self, k: &NodeSet) -> bool {
        &self.separator == k
    }
}

/// Shared read-only query surface implemented by [`super::core::Graph`] and
/// [`super::induced::InducedSubgraph`].
///
/// Implementors provide only `n`, `contains`, `nodes`, and `neighbors`;
/// `components`, `adjacent_to`, and `blocks` are derived from those via a
/// single shared BFS (see [`blocks_via_bfs`]).
pub trait GraphLike {
    /// Number of vertices reachable through this view (not necessarily the
    /// underlying graph's total vertex count, for an induced subgraph).
    fn n(&self) -> usize;

    /// Whether `v` is part of this view.
    fn contains(&self, v: Node) -> bool;

    /// All vertex labels visible through this view, sorted.
    fn nodes(&self) -> NodeSet;

    /// The neighbors of `v` within this view, sorted.
    fn neighbors(&self, v: Node) -> Result<NodeSet, Error>;

    fn degree(&self, v: Node) -> Result<usize, Error> {
        Ok(self.neighbors(v)?.len())
    }

    fn adjacent(&self, u: Node, v: Node) -> Result<bool, Error> {
        Ok(self.neighbors(u)?.contains(v))
    }

    /// Connected components of the subgraph induced by `self.nodes() \ removed`.
    fn components(&self, removed: &NodeSet) -> Vec<NodeSet> {
        blocks_via_bfs(self, removed)
            .into_iter()
            .map(|b| b.component)
            .collect()
    }

    /// The subset of `k` adjacent to some vertex of `component`.
    fn adjacent_to(&self, component: &NodeSet, k: &NodeSet) -> NodeSet {
        let mut out = Vec::new();
        for &c in component.iter() {
            if let Ok(ns) = self.neighbors(c) {
                for &x in ns.iter() {
                    if k.contains(x) && !out.contains(&x) {
                        out.push(x);
                    }
                }
            }
        }
        NodeSet::from_iter_sorted(out)
    }

    /// Full block decomposition of `self.nodes() \ removed`: every component
    /// of the restriction, paired with the subset of `removed` adjacent to it.
    fn blocks(&self, removed: &NodeSet) -> Vec<Block>
    where
        Self: Sized,
    {
        blocks_via_bfs(self, removed)
    }
}

/// Single BFS pass computing, for every component of `view.nodes() \ removed`,
/// the pair `(adjacent_to(component, removed), component)`.
///
/// Mirrors the classic single-pass decomposition: a node is visited by BFS
/// if it survives removal, and whenever a visited node's neighbor falls in
/// `removed`, that neighbor is recorded against the component currently
/// being grown.
pub fn blocks_via_bfs<G: GraphLike + ?Sized>(view: &G, removed: &NodeSet) -> Vec<Block> {
    let nodes = view.nodes();
    let max_label = nodes
        .iter()
        .chain(removed.iter())
        .copied()
        .max()
        .map_or(0, |m| m + 1);
    let mut visited = vec![false; max_label];
    let mut blocks = Vec::new();

    for start in nodes.iter().copied() {
        if removed.contains(start) || get_visited(&visited, start) {
            continue;
        }

        let mut component = Vec::new();
        let mut separator = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(start);
        set_visited(&mut visited, start);

        while let Some(node) = queue.pop_front() {
            component.push(node);
            let neighbors = view.neighbors(node).unwrap_or_else(|_| NodeSet::new());
            for &nbr in neighbors.iter() {
                if removed.contains(nbr) {
                    if !separator.contains(&nbr) {
                        separator.push(nbr);
                    }
                } else if !get_visited(&visited, nbr) {
                    set_visited(&mut visited, nbr);
                    queue.push_back(nbr);
                }
            }
        }

        component.sort_unstable();
        separator.sort_unstable();
        blocks.push(Block {
            separator: NodeSet::from(separator),
            component: NodeSet::from(component),
        });
    }

    blocks
}

fn get_visited(visited: &[bool], v: Node) -> bool {
    visited.get(v).copied().unwrap_or(false)
}

fn set_visited(visited: &mut Vec<bool>, v: Node) {
    if v >= visited.len() {
        visited.resize(v + 1, false);
    }
    visited[v] = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::core::Graph;

    fn four_cycle() -> Graph {
        let mut g = Graph::new(4);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(2, 3).unwrap();
        g.add_edge(3, 0).unwrap();
        g
    }

    #[test]
    fn removing_two_opposite_vertices_splits_into_two_full_components() {
        let g = four_cycle();
        let removed = NodeSet::from(vec![0, 2]);
        let blocks = g.blocks(&removed);
        assert_eq!(blocks.len(), 2);
        for b in &blocks {
            assert!(b.is_full_for(&removed));
            assert_eq!(b.component.len(), 1);
        }
    }

    #[test]
    fn adjacent_to_is_always_a_subset_of_k() {
        let g = four_cycle();
        let k = NodeSet::from(vec![0, 2]);
        let component = NodeSet::singleton(1);
        let adj = g.adjacent_to(&component, &k);
        assert!(adj.is_subset(&k));
        assert_eq!(adj, k);
    }

    #[test]
    fn block_union_is_separator_plus_component() {
        let b = Block {
            separator: NodeSet::from(vec![0, 2]),
            component: NodeSet::from(vec![1]),
        };
        assert_eq!(b.union(), NodeSet::from(vec![0, 1, 2]));
        assert!(b.includes_nodes(&NodeSet::from(vec![0, 1])));
        assert!(!b.includes_nodes(&NodeSet::from(vec![3])));
    }
}

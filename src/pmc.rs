//! Potential-maximal-clique membership test (Bouchitté–Todinca Theorem 8).

use crate::graph::GraphLike;
use crate::node_set::NodeSet;

/// Decides whether `k` is a potential maximal clique of `g`.
///
/// `k` is a PMC iff:
/// 1. no connected component of `g \ k` is full with respect to `k` (its
///    neighborhood in `k` is not all of `k`), and
/// 2. completing every component's neighborhood into a clique makes `k`
///    itself a clique — i.e. every pair `x, y ∈ k` is either already an edge
///    of `g`, or both lie in the neighborhood-in-`k` of some common
///    component.
///
/// Runs in `O(n·m)`: component decomposition is one BFS, and the pairwise
/// check pre-collects, for each `x`, the components whose separator contains
/// it, so each pair is resolved by a constant number of binary searches.
pub fn is_pmc<G: GraphLike>(k: &NodeSet, g: &G) -> bool {
    if k.is_empty() {
        return false;
    }

    let blocks = g.blocks(k);
    let separators: Vec<&NodeSet> = blocks.iter().map(|b| &b.separator).collect();

    if separators.iter().any(|s| *s == k) {
        return false;
    }

    let k_nodes: Vec<_> = k.iter().copied().collect();

    // For each x in k, the indices of separators containing x.
    let containing: Vec<Vec<usize>> = k_nodes
        .iter()
        .map(|&x| {
            separators
                .iter()
                .enumerate()
                .filter(|(_, s)| s.contains(x))
                .map(|(i, _)| i)
                .collect()
        })
        .collect();

    for i in 0..k_nodes.len() {
        let x = k_nodes[i];
        for &y in &k_nodes[(i + 1)..] {
            if g.adjacent(x, y).unwrap_or(false) {
                continue;
            }
            let completed = containing[i].iter().any(|&si| separators[si].contains(y));
            if !completed {
                return false;
            }
        }
    }

    true
}

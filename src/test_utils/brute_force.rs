//! Brute-force ground-truth PMC computation by exhaustive triangulation
//! search, used only to cross-validate [`crate::PMCEnumerator`] (Testable
//! Property 5, "Completeness") against the *definition* of a PMC rather than
//! against the incremental algorithm itself.
//!
//! This is deliberately simple and exponential: it tries every vertex
//! elimination ordering, fills each into a chordal supergraph via the
//! classical elimination game, trims each fill down to a minimal
//! triangulation, and unions the maximal cliques of every minimal
//! triangulation found. Tractable only for the small graphs (a handful of
//! vertices) used in tests.

use crate::graph::{Graph, GraphLike};
use crate::node_set::{Node, NodeSet, NodeSetSet};

/// The union, over every minimal triangulation of `g`, of that
/// triangulation's maximal cliques — i.e. the PMCs of `g` by definition,
/// computed independently of [`crate::PMCEnumerator`].
pub fn ground_truth_pmcs(g: &Graph) -> NodeSetSet {
    let n = g.n();
    let mut pmcs = NodeSetSet::new();
    if n == 0 {
        return pmcs;
    }

    let mut order: Vec<Node> = (0..n).collect();
    permutations(&mut order, 0, &mut |ordering| {
        let filled = elimination_fill(g, ordering);
        let minimal = minimize_triangulation(g, &filled);
        for clique in maximal_cliques(&minimal) {
            pmcs.insert(clique);
        }
    });

    pmcs
}

/// Heap's algorithm, invoking `visit` once per permutation of `items`.
fn permutations(items: &mut [Node], k: usize, visit: &mut impl FnMut(&[Node])) {
    if k == items.len() {
        visit(items);
        return;
    }
    for i in k..items.len() {
        items.swap(k, i);
        permutations(items, k + 1, visit);
        items.swap(k, i);
    }
}

/// The classical elimination game: eliminate vertices in `order`, and each
/// time a vertex is eliminated, add fill edges making its not-yet-eliminated
/// neighbors a clique. The result is always a chordal supergraph of `g`.
fn elimination_fill(g: &Graph, order: &[Node]) -> Graph {
    let n = g.n();
    let mut adjacency: Vec<NodeSet> = (0..n)
        .map(|v| g.neighbors(v).expect("v < n by loop bound"))
        .collect();
    let mut eliminated = vec![false; n];

    for &v in order {
        let remaining: Vec<Node> = adjacency[v]
            .iter()
            .copied()
            .filter(|&u| !eliminated[u])
            .collect();
        for i in 0..remaining.len() {
            for j in (i + 1)..remaining.len() {
                let (a, b) = (remaining[i], remaining[j]);
                if !adjacency[a].contains(b) {
                    adjacency[a] = adjacency[a].with_inserted(b);
                    adjacency[b] = adjacency[b].with_inserted(a);
                }
            }
        }
        eliminated[v] = true;
    }

    let mut out = Graph::new(n);
    for u in 0..n {
        for &v in adjacency[u].iter() {
            if u < v {
                out.add_edge(u, v).expect("u, v < n by construction");
            }
        }
    }
    out
}

/// Repeatedly removes a fill edge (one not present in `g`) from `filled` as
/// long as the result stays chordal, until no more can be removed. Produces
/// *a* minimal triangulation contained in `filled`, not necessarily the one
/// reachable by every removal order — sufficient for cross-validating PMC
/// membership, since every minimal triangulation is found by some ordering
/// in [`ground_truth_pmcs`]'s outer search.
fn minimize_triangulation(g: &Graph, filled: &Graph) -> Graph {
    let n = filled.n();
    let mut current = filled.clone();
    loop {
        let fill_edges: Vec<(Node, Node)> = (0..n)
            .flat_map(|u| {
                current
                    .neighbors(u)
                    .unwrap()
                    .iter()
                    .copied()
                    .filter(move |&v| v > u)
                    .map(move |v| (u, v))
            })
            .filter(|&(u, v)| !g.adjacent(u, v).unwrap_or(false))
            .collect();

        let mut removed_one = false;
        for (u, v) in fill_edges {
            let candidate = without_edge(&current, u, v);
            if is_chordal(&candidate) {
                current = candidate;
                removed_one = true;
                break;
            }
        }
        if !removed_one {
            return current;
        }
    }
}

fn without_edge(g: &Graph, u: Node, v: Node) -> Graph {
    let n = g.n();
    let mut out = Graph::new(n);
    for x in 0..n {
        for &y in g.neighbors(x).unwrap().iter() {
            if x < y && !(x == u && y == v) && !(x == v && y == u) {
                out.add_edge(x, y).expect("x, y < n by construction");
            }
        }
    }
    out
}

/// Maximum Cardinality Search produces a candidate perfect elimination
/// ordering in `O(n + m)`; `g` is chordal iff that ordering actually is one,
/// checked in `O(n · m)`.
fn is_chordal(g: &Graph) -> bool {
    let n = g.n();
    if n == 0 {
        return true;
    }
    let mut weight = vec![0usize; n];
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);

    for _ in 0..n {
        let next = (0..n)
            .filter(|&v| !visited[v])
            .max_by_key(|&v| weight[v])
            .expect("n - order.len() > 0");
        visited[next] = true;
        order.push(next);
        for &u in g.neighbors(next).unwrap().iter() {
            if !visited[u] {
                weight[u] += 1;
            }
        }
    }
    order.reverse();

    let position: Vec<usize> = {
        let mut pos = vec![0usize; n];
        for (i, &v) in order.iter().enumerate() {
            pos[v] = i;
        }
        pos
    };

    for &v in &order {
        let later_neighbors: Vec<Node> = g
            .neighbors(v)
            .unwrap()
            .iter()
            .copied()
            .filter(|&u| position[u] > position[v])
            .collect();
        if let Some(&first) = later_neighbors.iter().min_by_key(|&&u| position[u]) {
            for &u in &later_neighbors {
                if u != first && !g.adjacent(first, u).unwrap_or(false) {
                    return false;
                }
            }
        }
    }
    true
}

/// All maximal cliques of `g`, via Bron–Kerbosch without pivoting. Only used
/// against the small chordal graphs this module produces.
fn maximal_cliques(g: &Graph) -> NodeSetSet {
    let n = g.n();
    let all: NodeSet = NodeSet::from_iter_sorted(0..n);
    let mut out = NodeSetSet::new();
    bron_kerbosch(g, NodeSet::new(), all, NodeSet::new(), &mut out);
    out
}

fn bron_kerbosch(g: &Graph, r: NodeSet, mut p: NodeSet, mut x: NodeSet, out: &mut NodeSetSet) {
    if p.is_empty() && x.is_empty() {
        out.insert(r);
        return;
    }
    for v in p.clone().iter().copied() {
        let nbrs_v = g.neighbors(v).expect("v came from a valid node set");
        let r_next = r.with_inserted(v);
        let p_next = p.intersection(&nbrs_v);
        let x_next = x.intersection(&nbrs_v);
        bron_kerbosch(g, r_next, p_next, x_next, out);

        p = NodeSet::from_iter_sorted(p.iter().copied().filter(|&u| u != v));
        x = x.with_inserted(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    #[test]
    fn chordal_detection_on_four_cycle_and_its_diagonal() {
        let cycle = fixtures::four_cycle();
        assert!(!is_chordal(&cycle));
        let mut with_diagonal = cycle.clone();
        with_diagonal.add_edge(0, 2).unwrap();
        assert!(is_chordal(&with_diagonal));
    }

    #[test]
    fn ground_truth_matches_known_scenario() {
        let g = fixtures::triangle_on_stilts();
        let pmcs = ground_truth_pmcs(&g);
        assert_eq!(pmcs.len(), 3);
        assert!(pmcs.contains(&NodeSet::from(vec![0, 3])));
        assert!(pmcs.contains(&NodeSet::from(vec![2, 3, 4])));
        assert!(pmcs.contains(&NodeSet::from(vec![1, 4])));
    }

    #[test]
    fn ground_truth_on_chordal_graph_is_its_maximal_cliques() {
        let g = fixtures::star(4);
        let pmcs = ground_truth_pmcs(&g);
        assert_eq!(pmcs, maximal_cliques(&g));
    }
}

//! Small named graphs used across property and scenario tests.

use crate::graph::Graph;

/// `n` vertices, no edges.
pub fn edgeless(n: usize) -> Graph {
    Graph::new(n)
}

/// The complete graph on `n` vertices.
pub fn complete(n: usize) -> Graph {
    let mut g = Graph::new(n);
    for u in 0..n {
        for v in (u + 1)..n {
            g.add_edge(u, v).expect("u, v < n by loop bounds");
        }
    }
    g
}

/// `0 - 1 - 2 - ... - (n-1)`.
pub fn path(n: usize) -> Graph {
    let mut g = Graph::new(n);
    for i in 0..n.saturating_sub(1) {
        g.add_edge(i, i + 1).expect("i, i+1 < n by loop bound");
    }
    g
}

/// The cycle on `n >= 3` vertices: `0 - 1 - ... - (n-1) - 0`.
pub fn cycle(n: usize) -> Graph {
    assert!(n >= 3, "a cycle needs at least 3 vertices");
    let mut g = path(n);
    g.add_edge(n - 1, 0).expect("endpoints are valid nodes");
    g
}

/// Scenario S4: the 4-cycle `0-1-2-3-0`.
pub fn four_cycle() -> Graph {
    cycle(4)
}

/// Scenario S5: "triangle on stilts" — a triangle `{2,3,4}` with a pendant
/// vertex hanging off each of two of its corners.
pub fn triangle_on_stilts() -> Graph {
    let mut g = Graph::new(5);
    g.add_edge(0, 3).unwrap();
    g.add_edge(3, 2).unwrap();
    g.add_edge(3, 4).unwrap();
    g.add_edge(2, 4).unwrap();
    g.add_edge(1, 4).unwrap();
    g
}

/// Scenario S6: a path `0-2-1` plus an isolated vertex `3`.
pub fn path_plus_isolated_vertex() -> Graph {
    let mut g = Graph::new(4);
    g.add_edge(0, 2).unwrap();
    g.add_edge(1, 2).unwrap();
    g
}

/// A star: center `0`, leaves `1..n`. Chordal for every `n`.
pub fn star(n: usize) -> Graph {
    let mut g = Graph::new(n);
    for leaf in 1..n {
        g.add_edge(0, leaf).expect("0, leaf < n by loop bound");
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphLike;

    #[test]
    fn complete_has_all_edges() {
        let g = complete(4);
        assert_eq!(g.m(), 6);
    }

    #[test]
    fn cycle_closes_the_path() {
        let g = four_cycle();
        assert_eq!(g.m(), 4);
        assert!(g.adjacent(3, 0).unwrap());
    }
}

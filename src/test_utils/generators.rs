//! Randomized graph generators for property-based and fuzz-style tests.
//!
//! [`arb_small_graph`] drives `proptest`-based property tests (see
//! `tests/properties.rs`); [`random_graph`] is a `rand`-seeded generator used
//! where reproducibility across a fixed seed matters more than shrinking,
//! e.g. in benchmarks.

use proptest::collection::vec;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::Graph;

/// A `proptest` strategy producing graphs on `2..=max_n` vertices with an
/// arbitrary edge set. Kept small by default (see `tests/properties.rs`)
/// since several properties cross-validate against brute-force triangulation
/// search, which is only tractable for a handful of vertices.
pub fn arb_small_graph(max_n: usize) -> impl Strategy<Value = Graph> {
    (2..=max_n).prop_flat_map(|n| {
        let max_edges = n * (n - 1) / 2;
        vec(any::<bool>(), max_edges).prop_map(move |picks| {
            let mut g = Graph::new(n);
            let mut idx = 0;
            for u in 0..n {
                for v in (u + 1)..n {
                    if picks[idx] {
                        g.add_edge(u, v).expect("u, v < n by loop bounds");
                    }
                    idx += 1;
                }
            }
            g
        })
    })
}

/// A uniformly random graph on `n` vertices where each edge is present
/// independently with probability `edge_prob`, seeded for reproducibility.
pub fn random_graph(n: usize, edge_prob: f64, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = Graph::new(n);
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.random::<f64>() < edge_prob {
                g.add_edge(u, v).expect("u, v < n by loop bounds");
            }
        }
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphLike;

    #[test]
    fn random_graph_is_reproducible_for_a_fixed_seed() {
        let a = random_graph(8, 0.4, 42);
        let b = random_graph(8, 0.4, 42);
        assert_eq!(a.m(), b.m());
        for u in 0..8 {
            assert_eq!(a.neighbors(u).unwrap(), b.neighbors(u).unwrap());
        }
    }

    #[test]
    fn random_graph_respects_vertex_count() {
        let g = random_graph(6, 0.5, 7);
        assert_eq!(g.n(), 6);
    }
}

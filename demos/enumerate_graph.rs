//! Builds a small graph, enumerates its potential maximal cliques, and
//! cross-checks every algorithm variant against the baseline.
//!
//! Run with: `cargo run --example enumerate_graph`

use pmc_enum::{Algorithm, Graph, PMCEnumerator};

fn main() {
    println!("=== Potential Maximal Clique Enumeration ===\n");

    four_cycle_example();
    triangle_on_stilts_example();
    variant_cross_check();
    minimal_separators_example();
}

/// The simplest non-trivial case: a chordless 4-cycle has four PMCs, one
/// per way of adding a diagonal.
fn four_cycle_example() {
    println!("--- 4-cycle: 0-1-2-3-0 ---");
    let mut g = Graph::new(4);
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    g.add_edge(2, 3).unwrap();
    g.add_edge(3, 0).unwrap();

    let mut enumerator = PMCEnumerator::new(g);
    let pmcs = enumerator.get().unwrap();
    println!("PMCs: {}", pmcs);
    println!("Count: {}\n", pmcs.len());
}

/// A triangle with two pendant vertices: the pendants never merge into the
/// triangle's PMC, so the enumerator reports three disjoint-looking PMCs.
fn triangle_on_stilts_example() {
    println!("--- Triangle on stilts ---");
    let mut g = Graph::new(5);
    g.add_edge(0, 3).unwrap();
    g.add_edge(3, 2).unwrap();
    g.add_edge(3, 4).unwrap();
    g.add_edge(2, 4).unwrap();
    g.add_edge(1, 4).unwrap();

    let mut enumerator = PMCEnumerator::new(g);
    let pmcs = enumerator.get().unwrap();
    println!("PMCs: {}\n", pmcs);
}

/// All five algorithm variants must agree on the final PMC set; this is the
/// cross-validation the variants exist for.
fn variant_cross_check() {
    println!("--- Cross-checking algorithm variants ---");
    let mut g = Graph::new(6);
    for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (0, 2)] {
        g.add_edge(u, v).unwrap();
    }

    let mut baseline = PMCEnumerator::new(g.clone());
    let expected = baseline.get().unwrap();

    for algorithm in [
        Algorithm::Reverse,
        Algorithm::Ascending,
        Algorithm::Descending,
        Algorithm::Parallel,
    ] {
        let mut enumerator = PMCEnumerator::new(g.clone());
        enumerator.set_algorithm(algorithm).unwrap();
        let got = enumerator.get().unwrap();
        println!("{:?} agrees with Normal: {}", algorithm, got == expected);
    }
    println!();
}

/// `get_ms()` exposes the minimal separators of the full graph discovered as
/// a side effect of computing the PMCs.
fn minimal_separators_example() {
    println!("--- Minimal separators of the 4-cycle ---");
    let mut g = Graph::new(4);
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    g.add_edge(2, 3).unwrap();
    g.add_edge(3, 0).unwrap();

    let mut enumerator = PMCEnumerator::new(g);
    enumerator.get().unwrap();
    println!("Minimal separators: {}", enumerator.get_ms());
}

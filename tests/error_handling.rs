//! Integration coverage for the crate's error-handling contract: invalid
//! node queries, invalid enumerator-state transitions, exhausted separator
//! iteration, and time-budget exhaustion producing a flagged partial result
//! rather than an error.

use pmc_enum::test_utils::generators::random_graph;
use pmc_enum::{Algorithm, Error, Graph, MinimalSeparatorEnumerator, PMCEnumerator, Priority};

#[test]
fn neighbors_of_an_out_of_range_node_is_invalid_node() {
    use pmc_enum::GraphLike;
    let g = Graph::new(3);
    assert!(matches!(g.neighbors(3), Err(Error::InvalidNode(3, 3))));
}

#[test]
fn set_algorithm_is_only_legal_while_fresh() {
    let mut e = PMCEnumerator::new(Graph::new(2));
    e.get().unwrap();
    assert!(e.set_algorithm(Algorithm::Reverse).is_err());
    assert!(e.set_time_limit(1).is_err());
    assert!(e.set_minimal_separators(Default::default()).is_err());
}

#[test]
fn reset_returns_the_enumerator_to_fresh() {
    let mut e = PMCEnumerator::new(Graph::new(2));
    e.get().unwrap();
    e.reset(Graph::new(3));
    // Legal again now that the enumerator is Fresh.
    e.set_algorithm(Algorithm::Reverse).unwrap();
    let pmcs = e.get().unwrap();
    assert_eq!(pmcs.len(), 3);
}

#[test]
fn separator_enumerator_errors_once_exhausted() {
    let g = Graph::new(3);
    let mut enumerator = MinimalSeparatorEnumerator::new(&g, Priority::Uniform);
    assert!(!enumerator.has_next());
    assert!(matches!(enumerator.next(), Err(Error::IterExhausted)));
}

#[test]
fn zero_time_limit_means_unlimited() {
    let mut e = PMCEnumerator::new(random_graph(12, 0.3, 9));
    e.set_time_limit(0).unwrap();
    let pmcs = e.get().unwrap();
    assert!(!e.is_out_of_time());
    assert!(!pmcs.is_empty());
}

#[test]
fn a_generous_time_limit_on_a_small_graph_never_triggers_out_of_time() {
    let mut e = PMCEnumerator::new(random_graph(10, 0.3, 11));
    e.set_time_limit(5).unwrap();
    let pmcs = e.get().unwrap();
    assert!(!e.is_out_of_time());
    assert!(!pmcs.is_empty());
}

/// Whether or not the budget is exhausted, every PMC returned is sound —
/// partial results never include unchecked candidates.
#[test]
fn partial_results_are_always_sound_regardless_of_time_budget() {
    use pmc_enum::is_pmc;

    let g = random_graph(16, 0.3, 13);
    let mut e = PMCEnumerator::new(g.clone());
    e.set_time_limit(5).unwrap();
    let pmcs = e.get().unwrap();
    for k in &pmcs {
        assert!(is_pmc(k, &g));
    }
}

#[test]
fn precomputed_separators_are_verified_not_blindly_trusted() {
    use pmc_enum::NodeSet;
    use pmc_enum::NodeSetSet;

    let g = Graph::new(4); // no edges: no set is a minimal separator
    let mut bogus = NodeSetSet::new();
    bogus.insert(NodeSet::from(vec![0, 1]));

    let mut e = PMCEnumerator::new(g);
    e.set_minimal_separators(bogus).unwrap();
    let pmcs = e.get().unwrap();
    // The bogus separator was rejected; the edgeless graph still yields one
    // singleton PMC per vertex.
    assert_eq!(pmcs.len(), 4);
}

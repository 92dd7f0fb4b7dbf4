//! The potential-maximal-clique enumerator: the incremental "one vertex at a
//! time" algorithm built on minimal separators and [`is_pmc`].

use std::sync::Mutex;
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::error::{EnumeratorState, Error};
use crate::graph::{Graph, GraphLike, InducedSubgraph};
use crate::node_set::{Node, NodeSet, NodeSetSet};
use crate::pmc::is_pmc;
use crate::separators::{MinimalSeparatorEnumerator, Priority};

/// Which vertex ordering and execution strategy to use. All variants produce
/// the same final set of PMCs; they exist for cross-validation and for
/// exploiting parallelism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Process vertices `0, 1, …, n-1`.
    #[default]
    Normal,
    /// Process vertices `n-1, …, 1, 0`.
    Reverse,
    /// Within each `OneMoreVertex` step, consider candidates in order of
    /// increasing set size.
    Ascending,
    /// Within each `OneMoreVertex` step, consider candidates in order of
    /// decreasing set size.
    Descending,
    /// Parallelize the candidate sweep inside each `OneMoreVertex` step
    /// across a `rayon` thread pool.
    Parallel,
}

/// Enumerates the potential maximal cliques of a graph.
///
/// Construct with [`PMCEnumerator::new`], optionally configure with
/// `set_algorithm`/`set_time_limit`/`set_minimal_separators` while in state
/// `Fresh`, then call [`get`](Self::get). The result is memoised: repeated
/// calls to `get` after the first return the cached set without
/// recomputation.
pub struct PMCEnumerator {
    graph: Graph,
    algorithm: Algorithm,
    time_limit: Option<Duration>,
    precomputed_separators: Option<NodeSetSet>,
    state: EnumeratorState,
    result: Option<NodeSetSet>,
    full_graph_separators: NodeSetSet,
    out_of_time: bool,
}

impl PMCEnumerator {
    pub fn new(graph: Graph) -> Self {
        PMCEnumerator {
            graph,
            algorithm: Algorithm::default(),
            time_limit: None,
            precomputed_separators: None,
            state: EnumeratorState::Fresh,
            result: None,
            full_graph_separators: NodeSetSet::new(),
            out_of_time: false,
        }
    }

    fn require_fresh(&self) -> Result<(), Error> {
        if self.state == EnumeratorState::Fresh {
            Ok(())
        } else {
            Err(Error::InvalidState(self.state))
        }
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> Result<(), Error> {
        self.require_fresh()?;
        self.algorithm = algorithm;
        Ok(())
    }

    /// Supplies a precomputed set of minimal separators for the full graph.
    ///
    /// Every supplied set is re-verified against the graph (checked to
    /// actually witness at least two full components) before being trusted;
    /// this is cheap relative to the enumeration it replaces, and silent
    /// trust would let a bad candidate corrupt every downstream PMC.
    pub fn set_minimal_separators(&mut self, separators: NodeSetSet) -> Result<(), Error> {
        self.require_fresh()?;
        let mut verified = NodeSetSet::new();
        for s in separators {
            if is_minimal_separator(&self.graph, &s) {
                verified.insert(s);
            }
        }
        self.precomputed_separators = Some(verified);
        Ok(())
    }

    /// `0` means unlimited.
    pub fn set_time_limit(&mut self, seconds: u64) -> Result<(), Error> {
        self.require_fresh()?;
        self.time_limit = if seconds == 0 {
            None
        } else {
            Some(Duration::from_secs(seconds))
        };
        Ok(())
    }

    pub fn is_out_of_time(&self) -> bool {
        self.out_of_time
    }

    /// Resets the enumerator to state `Fresh` against a new graph, clearing
    /// any cached result, algorithm/time-limit choice, and precomputed
    /// separators.
    pub fn reset(&mut self, graph: Graph) {
        self.graph = graph;
        self.algorithm = Algorithm::default();
        self.time_limit = None;
        self.precomputed_separators = None;
        self.state = EnumeratorState::Fresh;
        self.result = None;
        self.full_graph_separators = NodeSetSet::new();
        self.out_of_time = false;
    }

    /// The minimal separators of the full graph, discovered as a side effect
    /// of `get()`. Empty if `get()` has not yet run.
    pub fn get_ms(&self) -> NodeSetSet {
        self.full_graph_separators.clone()
    }

    /// Computes (or returns the memoised) set of potential maximal cliques.
    pub fn get(&mut self) -> Result<NodeSetSet, Error> {
        if let Some(cached) = &self.result {
            return Ok(cached.clone());
        }
        self.state = EnumeratorState::Computing;

        let deadline = self.time_limit.map(|d| Instant::now() + d);
        let (pmcs, separators, out_of_time) = run(&self.graph, self.algorithm, deadline, self.precomputed_separators.as_ref());

        self.full_graph_separators = separators;
        self.out_of_time = out_of_time;
        self.state = EnumeratorState::Done;
        self.result = Some(pmcs.clone());
        Ok(pmcs)
    }
}

fn is_minimal_separator(graph: &Graph, s: &NodeSet) -> bool {
    let blocks = graph.blocks(s);
    blocks.iter().filter(|b| b.is_full_for(s)).count() >= 2
}

/// Drives the `i = 1..n` outer loop, returning the final PMC set, the
/// minimal separators of the full graph, and whether the time budget was
/// exhausted.
fn run(
    graph: &Graph,
    algorithm: Algorithm,
    deadline: Option<Instant>,
    precomputed: Option<&NodeSetSet>,
) -> (NodeSetSet, NodeSetSet, bool) {
    let n = graph.n();
    if n == 0 {
        return (NodeSetSet::new(), NodeSetSet::new(), false);
    }

    let order = vertex_order(n, algorithm);

    let mut prefix: Vec<Node> = vec![order[0]];
    let mut p_prev = NodeSetSet::new();
    p_prev.insert(NodeSet::singleton(order[0]));
    let mut d_prev = NodeSetSet::new();

    for &a in order.iter().skip(1) {
        if let Some(dl) = deadline {
            if Instant::now() >= dl {
                return (p_prev, d_prev, true);
            }
        }

        let prev_nodes = NodeSet::from(prefix.clone());
        prefix.push(a);
        let cur_nodes = NodeSet::from(prefix.clone());

        let g1 = InducedSubgraph::new(graph, &cur_nodes);
        let g2 = InducedSubgraph::new(graph, &prev_nodes);

        let d1 = if cur_nodes.len() == n {
            precomputed
                .cloned()
                .unwrap_or_else(|| enumerate_separators(&g1, algorithm))
        } else {
            enumerate_separators(&g1, algorithm)
        };

        let p1 = one_more_vertex(g1, g2, a, &d1, &d_prev, &p_prev, algorithm, deadline);

        p_prev = p1;
        d_prev = d1;
    }

    let out_of_time = deadline.map(|dl| Instant::now() >= dl).unwrap_or(false);
    (p_prev, d_prev, out_of_time)
}

fn vertex_order(n: usize, algorithm: Algorithm) -> Vec<Node> {
    match algorithm {
        Algorithm::Reverse => (0..n).rev().collect(),
        _ => (0..n).collect(),
    }
}

fn enumerate_separators<G: GraphLike>(g: &G, _algorithm: Algorithm) -> NodeSetSet {
    // `MinimalSeparatorEnumerator` is generic over `GraphLike`, so an
    // `InducedSubgraph` is enumerated directly against its own (parent-graph)
    // vertex labels — no relabelling copy, and no label translation needed on
    // the way back into `one_more_vertex`.
    let enumerator = MinimalSeparatorEnumerator::new(g, Priority::Uniform);
    enumerator.collect_remaining()
}

#[allow(clippy::too_many_arguments)]
fn one_more_vertex(
    g1: InducedSubgraph<'_>,
    g2: InducedSubgraph<'_>,
    a: Node,
    d1: &NodeSetSet,
    d2: &NodeSetSet,
    p2: &NodeSetSet,
    algorithm: Algorithm,
    deadline: Option<Instant>,
) -> NodeSetSet {
    let degree_a = g1.neighbors(a).map(|ns| ns.len()).unwrap_or(0);
    if degree_a == 0 {
        let mut out = p2.clone();
        out.insert(NodeSet::singleton(a));
        return out;
    }

    let p2_ordered = ordered_by_size(p2, algorithm);
    let d1_ordered = ordered_by_size(d1, algorithm);

    if algorithm == Algorithm::Parallel {
        return one_more_vertex_parallel(g1, g2, a, &d1_ordered, d2, &p2_ordered);
    }

    let mut out = NodeSetSet::new();
    let a_set = NodeSet::singleton(a);

    for k in &p2_ordered {
        if let Some(dl) = deadline {
            if Instant::now() >= dl {
                break;
            }
        }
        if is_pmc(k, &g1) {
            out.insert(k.clone());
        } else {
            let k_plus_a = k.union(&a_set);
            if is_pmc(&k_plus_a, &g1) {
                out.insert(k_plus_a);
            }
        }
    }

    for s in &d1_ordered {
        let s_a = if s.contains(a) {
            s.clone()
        } else {
            s.union(&a_set)
        };
        if is_pmc(&s_a, &g1) {
            out.insert(s_a);
        }

        if !s.contains(a) && !d2.contains(s) {
            for component in g1.components(s) {
                if g1.adjacent_to(&component, s) != *s {
                    continue;
                }
                for t in d2 {
                    let t_cap_c = t.intersection(&component);
                    let u = s.union(&t_cap_c);
                    if is_pmc(&u, &g1) {
                        out.insert(u);
                    }
                }
            }
        }
    }

    out
}

fn one_more_vertex_parallel(
    g1: InducedSubgraph<'_>,
    _g2: InducedSubgraph<'_>,
    a: Node,
    d1: &[NodeSet],
    d2: &NodeSetSet,
    p2: &[NodeSet],
) -> NodeSetSet {
    let out = Mutex::new(NodeSetSet::new());
    let a_set = NodeSet::singleton(a);

    p2.par_iter().for_each(|k| {
        if is_pmc(k, g1) {
            out.lock().unwrap().insert(k.clone());
        } else {
            let k_plus_a = k.union(&a_set);
            if is_pmc(&k_plus_a, g1) {
                out.lock().unwrap().insert(k_plus_a);
            }
        }
    });

    d1.par_iter().for_each(|s| {
        let s_a = if s.contains(a) { s.clone() } else { s.union(&a_set) };
        if is_pmc(&s_a, g1) {
            out.lock().unwrap().insert(s_a);
        }

        if !s.contains(a) && !d2.contains(s) {
            let components: Vec<NodeSet> = g1
                .components(s)
                .into_iter()
                .filter(|c| g1.adjacent_to(c, s) == *s)
                .collect();
            components.par_iter().for_each(|component| {
                d2.par_iter().for_each(|t| {
                    let t_cap_c = t.intersection(component);
                    let u = s.union(&t_cap_c);
                    if is_pmc(&u, g1) {
                        out.lock().unwrap().insert(u);
                    }
                });
            });
        }
    });

    out.into_inner().unwrap()
}

fn ordered_by_size(sets: &NodeSetSet, algorithm: Algorithm) -> Vec<NodeSet> {
    let mut v: Vec<NodeSet> = sets.iter().cloned().collect();
    match algorithm {
        Algorithm::Ascending => v.sort_by_key(|s| s.len()),
        Algorithm::Descending => v.sort_by_key(|s| std::cmp::Reverse(s.len())),
        _ => {}
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enumerate(g: Graph) -> NodeSetSet {
        let mut e = PMCEnumerator::new(g);
        e.get().unwrap()
    }

    #[test]
    fn empty_graph_has_no_pmcs() {
        assert!(enumerate(Graph::new(0)).is_empty());
    }

    #[test]
    fn single_vertex_is_its_own_pmc() {
        let pmcs = enumerate(Graph::new(1));
        assert_eq!(pmcs.len(), 1);
        assert!(pmcs.contains(&NodeSet::singleton(0)));
    }

    // Scenarios S1-S6 and full cross-variant agreement live in
    // tests/scenarios.rs and tests/properties.rs; these unit tests cover
    // enumerator-internal behavior not visible from the public API alone.

    #[test]
    fn algorithm_variants_agree() {
        let mut g = Graph::new(5);
        g.add_edge(0, 3).unwrap();
        g.add_edge(3, 2).unwrap();
        g.add_edge(3, 4).unwrap();
        g.add_edge(2, 4).unwrap();
        g.add_edge(1, 4).unwrap();

        let baseline = enumerate(g.clone());
        for algo in [
            Algorithm::Reverse,
            Algorithm::Ascending,
            Algorithm::Descending,
            Algorithm::Parallel,
        ] {
            let mut e = PMCEnumerator::new(g.clone());
            e.set_algorithm(algo).unwrap();
            assert_eq!(e.get().unwrap(), baseline);
        }
    }

    #[test]
    fn set_algorithm_after_get_is_rejected() {
        let mut e = PMCEnumerator::new(Graph::new(2));
        e.get().unwrap();
        assert!(matches!(
            e.set_algorithm(Algorithm::Reverse),
            Err(Error::InvalidState(EnumeratorState::Done))
        ));
    }

    #[test]
    fn get_result_is_memoised() {
        let mut e = PMCEnumerator::new(Graph::new(3));
        let first = e.get().unwrap();
        let second = e.get().unwrap();
        assert_eq!(first, second);
    }
}

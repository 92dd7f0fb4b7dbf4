//! Lazy enumeration of all minimal separators of a graph, by successive
//! generation: new separators are discovered by saturating an already-found
//! one with a vertex from its neighborhood and checking whether that
//! produces a genuinely full component.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::Error;
use crate::graph::GraphLike;
use crate::node_set::NodeSet;
use crate::node_set::NodeSetSet;

/// Dequeue order for [`MinimalSeparatorEnumerator`]. Changes only the order
/// candidates are emitted in, never the final set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    /// No particular scoring; ties broken by the candidate's own canonical
    /// ordering.
    #[default]
    Uniform,
    /// Smaller separators dequeue first.
    AscendingSize,
    /// Separators closer to already being a clique (fewer missing edges)
    /// dequeue first.
    FillEdges,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Scored {
    score: i64,
    set: NodeSet,
}

impl PartialOrd for Scored {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scored {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.score.cmp(&other.score).then_with(|| self.set.cmp(&other.set))
    }
}

/// A lazy, non-duplicating enumerator over every minimal separator of a
/// graph.
///
/// Construction seeds the candidate queue in `O(n·m)`; each call to
/// [`next`](Self::next) pops the highest-priority candidate and generates
/// its successors, so the full separator space is never materialized at
/// once.
pub struct MinimalSeparatorEnumerator<'a, G: GraphLike> {
    graph: &'a G,
    priority: Priority,
    queue: BinaryHeap<Reverse<Scored>>,
    seen: NodeSetSet,
}

impl<'a, G: GraphLike> MinimalSeparatorEnumerator<'a, G> {
    pub fn new(graph: &'a G, priority: Priority) -> Self {
        let mut enumerator = MinimalSeparatorEnumerator {
            graph,
            priority,
            queue: BinaryHeap::new(),
            seen: NodeSetSet::new(),
        };
        enumerator.seed();
        enumerator
    }

    /// Whether at least one more separator remains to be produced.
    pub fn has_next(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Pops and returns the next minimal separator, or
    /// [`Error::IterExhausted`] if none remain.
    pub fn next(&mut self) -> Result<NodeSet, Error> {
        let Reverse(scored) = self.queue.pop().ok_or(Error::IterExhausted)?;
        self.generate_successors(&scored.set);
        Ok(scored.set)
    }

    /// Drains the remaining separators into a [`NodeSetSet`].
    pub fn collect_remaining(mut self) -> NodeSetSet {
        let mut out = NodeSetSet::new();
        while let Ok(s) = self.next() {
            out.insert(s);
        }
        out
    }

    fn score(&self, s: &NodeSet) -> i64 {
        match self.priority {
            Priority::Uniform => 0,
            Priority::AscendingSize => s.len() as i64,
            Priority::FillEdges => {
                let k = s.len() as i64;
                let possible = k * (k - 1) / 2;
                let present = present_edges(self.graph, s);
                possible - present
            }
        }
    }

    fn push_candidate(&mut self, s: NodeSet) {
        if self.seen.insert(s.clone()) {
            let score = self.score(&s);
            self.queue.push(Reverse(Scored { score, set: s }));
        }
    }

    fn seed(&mut self) {
        for v in self.graph.nodes().iter().copied() {
            let nbrs_v = self.graph.neighbors(v).expect("v came from this view's own node set");
            let closed_v = nbrs_v.with_inserted(v);
            let blocks = self.graph.blocks(&closed_v);
            for u in nbrs_v.iter().copied() {
                let nbrs_u = self.graph.neighbors(u).expect("u is a valid neighbor");
                for block in &blocks {
                    if !block.component.intersection(&nbrs_u).is_empty() {
                        self.push_candidate(block.separator.clone());
                    }
                }
            }
        }
    }

    fn generate_successors(&mut self, s: &NodeSet) {
        let neighborhood = neighborhood_of_set(self.graph, s);
        for x in neighborhood.iter().copied() {
            let sx = s.with_inserted(x);
            let nbrs_x = self.graph.neighbors(x).expect("x came from a valid neighborhood");
            let removed = s.union(&nbrs_x);
            let blocks = self.graph.blocks(&removed);
            if blocks.iter().any(|b| b.is_full_for(&sx)) {
                self.push_candidate(sx);
            }
        }
    }
}

/// `N(S)`: vertices not in `S` adjacent to some vertex of `S`.
fn neighborhood_of_set<G: GraphLike>(graph: &G, s: &NodeSet) -> NodeSet {
    let mut out = Vec::new();
    for &v in s.iter() {
        if let Ok(nbrs) = graph.neighbors(v) {
            for &x in nbrs.iter() {
                if !s.contains(x) && !out.contains(&x) {
                    out.push(x);
                }
            }
        }
    }
    NodeSet::from(out)
}

fn present_edges<G: GraphLike>(graph: &G, s: &NodeSet) -> i64 {
    let mut count = 0i64;
    let nodes: Vec<_> = s.iter().copied().collect();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            if graph.adjacent(nodes[i], nodes[j]).unwrap_or(false) {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn four_cycle() -> Graph {
        let mut g = Graph::new(4);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(2, 3).unwrap();
        g.add_edge(3, 0).unwrap();
        g
    }

    #[test]
    fn four_cycle_has_two_minimal_separators() {
        let g = four_cycle();
        let enumerator = MinimalSeparatorEnumerator::new(&g, Priority::Uniform);
        let all = enumerator.collect_remaining();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&NodeSet::from(vec![0, 2])));
        assert!(all.contains(&NodeSet::from(vec![1, 3])));
    }

    #[test]
    fn edgeless_graph_has_no_separators() {
        let g = Graph::new(3);
        let enumerator = MinimalSeparatorEnumerator::new(&g, Priority::Uniform);
        assert!(enumerator.collect_remaining().is_empty());
    }

    #[test]
    fn exhausted_enumerator_errors_on_next() {
        let g = Graph::new(3);
        let mut enumerator = MinimalSeparatorEnumerator::new(&g, Priority::Uniform);
        assert!(matches!(enumerator.next(), Err(Error::IterExhausted)));
    }
}

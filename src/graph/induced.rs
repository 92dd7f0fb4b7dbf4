//! A restriction of a [`Graph`] to a vertex subset, preserving node labels.
//!
//! `InducedSubgraph` does not copy the parent graph; it borrows it and
//! filters queries to the retained vertex set. This keeps node identity
//! stable across the incremental `G_1, G_2, …, G_n` sequence the PMC
//! enumerator builds.

use crate::error::Error;
use crate::graph::block::GraphLike;
use crate::graph::core::Graph;
use crate::node_set::{Node, NodeSet};

/// A view of `graph` restricted to `nodes`.
///
/// Every query answers in terms of the parent graph's original labels: a
/// vertex's neighbors are its parent-graph neighbors intersected with this
/// view's retained node set.
#[derive(Clone, Copy)]
pub struct InducedSubgraph<'a> {
    graph: &'a Graph,
    nodes: &'a NodeSet,
}

impl<'a> InducedSubgraph<'a> {
    pub fn new(graph: &'a Graph, nodes: &'a NodeSet) -> Self {
        InducedSubgraph { graph, nodes }
    }

    pub fn parent(&self) -> &'a Graph {
        self.graph
    }
}

impl GraphLike for InducedSubgraph<'_> {
    fn n(&self) -> usize {
        self.nodes.len()
    }

    fn contains(&self, v: Node) -> bool {
        self.nodes.contains(v)
    }

    fn nodes(&self) -> NodeSet {
        self.nodes.clone()
    }

    fn neighbors(&self, v: Node) -> Result<NodeSet, Error> {
        if !self.contains(v) {
            return Err(Error::InvalidNode(v, self.graph.n()));
        }
        let full = self.graph.neighbors(v)?;
        Ok(full.intersection(self.nodes))
    }
}

//! pmc-enum - Potential maximal clique enumeration
//!
//! This crate enumerates, for an arbitrary finite simple undirected graph
//! `G = (V, E)`, the set of its **potential maximal cliques (PMCs)** — vertex
//! subsets `K ⊆ V` such that some minimal triangulation of `G` has `K` as a
//! maximal clique. PMCs are the combinatorial core object in
//! Bouchitté–Todinca-style algorithms for treewidth and minimum-fill
//! computation.
//!
//! # Overview
//!
//! The crate builds up the PMCs of `G` incrementally, one vertex at a time:
//!
//! - **[`Graph`](graph::Graph)** / **[`InducedSubgraph`](graph::InducedSubgraph)**:
//!   an immutable graph and label-preserving restrictions of it, sharing a
//!   common query surface via the [`GraphLike`](graph::GraphLike) trait.
//! - **[`MinimalSeparatorEnumerator`](separators::MinimalSeparatorEnumerator)**:
//!   a lazy, non-duplicating enumeration of every minimal separator of a
//!   graph.
//! - **[`is_pmc`](pmc::is_pmc)**: the membership test (Bouchitté–Todinca
//!   Theorem 8) that decides whether a vertex set is a PMC.
//! - **[`PMCEnumerator`](enumerator::PMCEnumerator)**: the incremental
//!   "one-more-vertex" algorithm that ties the above together.
//!
//! # Quick Start
//!
//! ```rust
//! use pmc_enum::{Graph, PMCEnumerator};
//!
//! // A 4-cycle: 0-1-2-3-0.
//! let mut g = Graph::new(4);
//! g.add_edge(0, 1).unwrap();
//! g.add_edge(1, 2).unwrap();
//! g.add_edge(2, 3).unwrap();
//! g.add_edge(3, 0).unwrap();
//!
//! let mut enumerator = PMCEnumerator::new(g);
//! let pmcs = enumerator.get().unwrap();
//! assert_eq!(pmcs.len(), 4);
//! ```
//!
//! # Scope
//!
//! This crate does not parse graph files, format statistics tables, drive a
//! CLI, or orchestrate triangulation enumeration — those are the concern of
//! external collaborators built on top of it. It also does not compute
//! treewidth or produce tree decompositions; PMCs are the only output.

pub mod enumerator;
pub mod error;
pub mod graph;
pub mod node_set;
pub mod pmc;
pub mod separators;

pub mod test_utils;

pub use enumerator::{Algorithm, PMCEnumerator};
pub use error::{EnumeratorState, Error};
pub use graph::{Block, Graph, GraphLike, InducedSubgraph};
pub use node_set::{Node, NodeSet, NodeSetSet};
pub use pmc::is_pmc;
pub use separators::{MinimalSeparatorEnumerator, Priority};

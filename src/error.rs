//! Error types for graph queries and enumerator state transitions.

use thiserror::Error;

use crate::node_set::Node;

/// The lifecycle state of a [`crate::enumerator::PMCEnumerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumeratorState {
    /// Constructed (or reset), no computation has started.
    Fresh,
    /// `get()` is in progress.
    Computing,
    /// `get()` has completed; the result is memoised.
    Done,
}

impl std::fmt::Display for EnumeratorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EnumeratorState::Fresh => "Fresh",
            EnumeratorState::Computing => "Computing",
            EnumeratorState::Done => "Done",
        };
        write!(f, "{}", s)
    }
}

/// Errors produced by this crate's graph queries and enumerators.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A node index fell outside `[0, n)` for a graph of `n` vertices.
    #[error("node {0} is out of range for a graph with {1} nodes")]
    InvalidNode(Node, usize),

    /// `next()` was called on an already-exhausted separator iterator.
    #[error("minimal separator enumeration is already exhausted")]
    IterExhausted,

    /// An enumerator-configuration method was called in a state that
    /// forbids it (e.g. `set_algorithm` after `get()` has run).
    #[error("operation not valid in enumerator state {0}")]
    InvalidState(EnumeratorState),
}

//! Graph storage and the shared query surface algorithms are written against.

pub mod block;
pub mod core;
pub mod induced;

pub use block::{Block, GraphLike};
pub use core::Graph;
pub use induced::InducedSubgraph;

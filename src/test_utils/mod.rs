//! Test-only support: small named graph fixtures, randomized generators, and
//! a brute-force ground-truth PMC computation used to cross-validate
//! [`crate::PMCEnumerator`] against the definition of a potential maximal
//! clique rather than against the incremental algorithm itself.
//!
//! Nothing here is part of the crate's public contract for callers; it
//! exists so property and integration tests can build graphs without
//! duplicating boilerplate.

pub mod brute_force;
pub mod fixtures;
pub mod generators;

pub use brute_force::ground_truth_pmcs;

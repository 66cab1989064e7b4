//! Property-based tests for the Prim and Kruskal engines.
//!
//! Checks both engines against a sequential union-by-rank oracle, validates
//! the structural invariants of their output (acyclicity, coverage, edge
//! count) and confirms that repeated and concurrent runs agree exactly,
//! across graph topologies with varied weight distributions.

mod equivalence;
mod helpers;
mod oracle;
mod types;

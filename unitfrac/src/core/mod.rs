//! Deterministic, pure arithmetic shared by the decomposition strategies.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod fraction;
pub mod gcd;
pub mod greedy;
pub mod invariants;
pub mod lookahead;
pub mod types;

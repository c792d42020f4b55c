//! Egyptian-fraction decomposition.
//!
//! Expands a proper fraction `n/d` into a sum of distinct unit fractions.
//! The crate keeps the same split as its CLI needs:
//!
//! - **[`core`]**: Pure, deterministic arithmetic (fractions, gcd, the lookahead
//!   and greedy strategies, result invariants). No I/O, no logging.
//! - **[`io`]**: Side-effecting helpers (config file load/save).
//!
//! Orchestration modules ([`decompose`], [`render`]) combine the two to
//! implement CLI commands.

pub mod core;
pub mod decompose;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod render;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::fraction::{Fraction, UnitFraction};
pub use crate::core::lookahead::decompose;
pub use crate::core::types::{Decomposition, Strategy};
pub use crate::error::{DecomposeError, ParseFractionError};

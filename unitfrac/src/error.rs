//! Typed errors for fraction construction and parsing.

use num_bigint::BigInt;
use thiserror::Error;

/// A fraction rejected before any decomposition work starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecomposeError {
    #[error("numerator must be positive, got {numerator}")]
    NumeratorNotPositive { numerator: BigInt },

    #[error("numerator {numerator} must be less than denominator {denominator}")]
    NumeratorNotLessThanDenominator {
        numerator: BigInt,
        denominator: BigInt,
    },
}

impl DecomposeError {
    /// Name of the argument that is out of range.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::NumeratorNotPositive { .. } => "numerator",
            Self::NumeratorNotLessThanDenominator { .. } => "denominator",
        }
    }
}

/// Failure to read a fraction from its `n/d` text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFractionError {
    #[error("expected a fraction of the form n/d, got '{0}'")]
    MissingSlash(String),

    #[error("{part} '{input}' is not an integer")]
    InvalidInteger { part: &'static str, input: String },

    #[error(transparent)]
    Invalid(#[from] DecomposeError),
}

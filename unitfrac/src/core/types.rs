//! Shared deterministic types for decomposition results.

use clap::ValueEnum;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::core::fraction::{Fraction, UnitFraction};

/// Which expansion to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Greedy start, then scan forward for a remainder that simplifies.
    #[default]
    Lookahead,
    /// Fibonacci–Sylvester: always subtract the largest unit fraction that fits.
    Greedy,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lookahead => "lookahead",
            Self::Greedy => "greedy",
        }
    }
}

/// A fraction together with the unit fractions one strategy produced for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    pub fraction: Fraction,
    pub strategy: Strategy,
    pub terms: Vec<UnitFraction>,
}

impl Decomposition {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn largest_denominator(&self) -> Option<&BigUint> {
        self.terms.iter().map(UnitFraction::denominator).max()
    }

    /// Bit width of the largest denominator (0 when there are no terms).
    pub fn largest_denominator_bits(&self) -> u64 {
        self.largest_denominator().map_or(0, BigUint::bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_denominator_ignores_term_order() {
        let decomposition = Decomposition {
            fraction: Fraction::new(4, 5).expect("valid"),
            strategy: Strategy::Lookahead,
            terms: vec![
                UnitFraction::new(5u32),
                UnitFraction::new(10u32),
                UnitFraction::new(2u32),
            ],
        };
        assert_eq!(
            decomposition.largest_denominator(),
            Some(&BigUint::from(10u32))
        );
        assert_eq!(decomposition.largest_denominator_bits(), 4);
    }
}

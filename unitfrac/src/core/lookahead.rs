//! Greedy-with-lookahead Egyptian-fraction expansion.
//!
//! Each step starts at the greedy candidate (the largest unit fraction that
//! fits the remainder) and scans upward for the first denominator whose
//! subtraction leaves a remainder that either simplifies or is itself a unit
//! fraction. Trading a larger current denominator for a reducible remainder
//! keeps later denominators small for many inputs.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::core::fraction::{Fraction, UnitFraction};
use crate::core::gcd::gcd;
use crate::error::DecomposeError;

/// Expand `numerator/denominator` into distinct unit fractions.
///
/// Arguments are validated before any work: the numerator must be positive
/// and strictly less than the denominator.
pub fn decompose(
    numerator: impl Into<BigInt>,
    denominator: impl Into<BigInt>,
) -> Result<Vec<UnitFraction>, DecomposeError> {
    let fraction = Fraction::new(numerator, denominator)?;
    Ok(decompose_lookahead(&fraction))
}

/// Expand an already validated fraction.
pub fn decompose_lookahead(fraction: &Fraction) -> Vec<UnitFraction> {
    let mut terms = Vec::new();
    let mut remainder = Remainder::start(fraction);
    loop {
        match next_step(&remainder, &terms) {
            Step::Exact { term } => {
                terms.push(term);
                return terms;
            }
            Step::Finish { term, last } => {
                terms.push(term);
                terms.push(last);
                return terms;
            }
            Step::Continue { term, next } => {
                terms.push(term);
                remainder = next;
            }
        }
    }
}

/// What is left to expand, plus the smallest denominator the next term may use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remainder {
    pub numerator: BigUint,
    pub denominator: BigUint,
    pub cursor: BigUint,
}

impl Remainder {
    pub fn start(fraction: &Fraction) -> Self {
        Self {
            numerator: fraction.numerator().clone(),
            denominator: fraction.denominator().clone(),
            cursor: BigUint::from(2u32),
        }
    }

    /// Smallest candidate `c >= cursor` with `numerator * c >= denominator`.
    fn first_candidate(&self) -> BigUint {
        let greedy = (&self.denominator + &self.numerator - 1u32) / &self.numerator;
        greedy.max(self.cursor.clone())
    }
}

/// Outcome of taking one term off a [`Remainder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `term` was the whole remainder.
    Exact { term: UnitFraction },
    /// Subtracting `term` left the unit fraction `last`.
    Finish {
        term: UnitFraction,
        last: UnitFraction,
    },
    /// Subtracting `term` left `next`, whose numerator is at least 2.
    Continue { term: UnitFraction, next: Remainder },
}

/// Find the next unit fraction whose subtraction leaves a simplifiable or
/// terminal remainder.
///
/// `emitted` holds the terms already produced; a candidate that would end the
/// expansion with a repeated denominator is skipped. The remainder strictly
/// shrinks and the returned cursor strictly exceeds the chosen denominator.
pub fn next_step(remainder: &Remainder, emitted: &[UnitFraction]) -> Step {
    let Remainder {
        numerator,
        denominator,
        ..
    } = remainder;
    let mut candidate = remainder.first_candidate();
    loop {
        let left = numerator * &candidate;
        let rest_numerator = &left - denominator;
        if rest_numerator.is_zero() {
            return Step::Exact {
                term: UnitFraction::new(candidate),
            };
        }

        let rest_denominator = denominator * &candidate;
        let divisor = gcd(&rest_numerator, &rest_denominator);
        if !divisor.is_one() || rest_numerator.is_one() {
            let next_numerator = &rest_numerator / &divisor;
            let next_denominator = &rest_denominator / &divisor;
            if !next_numerator.is_one() {
                let cursor = &candidate + 1u32;
                return Step::Continue {
                    term: UnitFraction::new(candidate),
                    next: Remainder {
                        numerator: next_numerator,
                        denominator: next_denominator,
                        cursor,
                    },
                };
            }
            if !repeats(&next_denominator, &candidate, emitted) {
                return Step::Finish {
                    term: UnitFraction::new(candidate),
                    last: UnitFraction::new(next_denominator),
                };
            }
        }
        candidate += 1u32;
    }
}

fn repeats(last: &BigUint, candidate: &BigUint, emitted: &[UnitFraction]) -> bool {
    last == candidate || emitted.iter().any(|term| term.denominator() == last)
}

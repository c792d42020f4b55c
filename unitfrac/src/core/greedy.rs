//! Fibonacci–Sylvester greedy expansion, used as a baseline.

use num_traits::Zero;

use crate::core::fraction::{Fraction, UnitFraction};
use crate::core::gcd::gcd;

/// Repeatedly subtract `1/ceil(d/n)` until nothing is left.
///
/// Denominators come out strictly increasing.
pub fn decompose_greedy(fraction: &Fraction) -> Vec<UnitFraction> {
    let mut numerator = fraction.numerator().clone();
    let mut denominator = fraction.denominator().clone();
    let mut terms = Vec::new();
    while !numerator.is_zero() {
        let candidate = (&denominator + &numerator - 1u32) / &numerator;
        let rest_numerator = &numerator * &candidate - &denominator;
        let rest_denominator = &denominator * &candidate;
        terms.push(UnitFraction::new(candidate));
        if rest_numerator.is_zero() {
            break;
        }
        let divisor = gcd(&rest_numerator, &rest_denominator);
        numerator = rest_numerator / &divisor;
        denominator = rest_denominator / divisor;
    }
    terms
}

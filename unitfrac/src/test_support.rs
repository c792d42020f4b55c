//! Test-only helpers for building expected expansions.

use num_bigint::BigUint;

use crate::core::fraction::UnitFraction;

/// Unit fractions with the given small denominators, in order.
pub fn units(denominators: &[u64]) -> Vec<UnitFraction> {
    denominators
        .iter()
        .map(|&denominator| UnitFraction::new(denominator))
        .collect()
}

/// Unit fractions with decimal denominators too large for `u64`.
pub fn units_from_str(denominators: &[&str]) -> Vec<UnitFraction> {
    denominators
        .iter()
        .map(|raw| {
            let denominator: BigUint = raw.parse().expect("decimal denominator");
            UnitFraction::new(denominator)
        })
        .collect()
}

//! Checks that a list of unit fractions is an Egyptian fraction for a value.

use std::collections::BTreeMap;

use num_bigint::BigUint;
use num_rational::BigRational;
use num_traits::Zero;

use crate::core::fraction::{Fraction, UnitFraction};

/// Check a proposed expansion of `fraction`:
/// - At least one term
/// - Every denominator `>= 2`
/// - No denominator repeated
/// - Exact sum equals `fraction`
pub fn validate_decomposition(fraction: &Fraction, terms: &[UnitFraction]) -> Vec<String> {
    let mut errors = Vec::new();
    if terms.is_empty() {
        errors.push("decomposition has no terms".to_string());
        return errors;
    }

    let two = BigUint::from(2u32);
    let mut positions: BTreeMap<&BigUint, Vec<usize>> = BTreeMap::new();
    for (index, term) in terms.iter().enumerate() {
        let position = index + 1;
        if term.denominator() < &two {
            errors.push(format!(
                "term {}: denominator {} must be >= 2",
                position,
                term.denominator()
            ));
        }
        positions.entry(term.denominator()).or_default().push(position);
    }

    for (denominator, at) in &positions {
        if at.len() > 1 {
            let at: Vec<String> = at.iter().map(ToString::to_string).collect();
            errors.push(format!(
                "denominator {} repeated at terms {}",
                denominator,
                at.join(", ")
            ));
        }
    }

    let sum = terms
        .iter()
        .filter_map(UnitFraction::to_rational)
        .fold(BigRational::zero(), |acc, value| acc + value);
    let expected = fraction.to_rational();
    if sum != expected {
        errors.push(format!("terms sum to {} but expected {}", sum, expected));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::units;

    fn fraction(numerator: i64, denominator: i64) -> Fraction {
        Fraction::new(numerator, denominator).expect("valid")
    }

    #[test]
    fn accepts_valid_expansion() {
        assert!(validate_decomposition(&fraction(3, 4), &units(&[2, 4])).is_empty());
        assert!(validate_decomposition(&fraction(6, 8), &units(&[4, 2])).is_empty());
    }

    #[test]
    fn reports_empty_terms() {
        let errors = validate_decomposition(&fraction(1, 2), &[]);
        assert_eq!(errors, vec!["decomposition has no terms".to_string()]);
    }

    #[test]
    fn reports_duplicates_once_with_positions() {
        let errors = validate_decomposition(&fraction(11, 15), &units(&[3, 5, 5]));
        assert_eq!(
            errors,
            vec!["denominator 5 repeated at terms 2, 3".to_string()]
        );
    }

    #[test]
    fn reports_small_denominators_and_wrong_sum() {
        let errors = validate_decomposition(&fraction(1, 2), &units(&[1, 0]));
        assert!(errors.iter().any(|err| err == "term 1: denominator 1 must be >= 2"));
        assert!(errors.iter().any(|err| err == "term 2: denominator 0 must be >= 2"));
        assert!(
            errors
                .iter()
                .any(|err| err == "terms sum to 1 but expected 1/2")
        );
    }
}

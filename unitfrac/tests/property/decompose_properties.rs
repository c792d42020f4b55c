use std::collections::HashSet;

use num_rational::BigRational;
use num_traits::Zero;
use proptest::prelude::*;
use unitfrac::core::greedy::decompose_greedy;
use unitfrac::core::invariants::validate_decomposition;
use unitfrac::{Fraction, UnitFraction, decompose};

fn exact_sum(terms: &[UnitFraction]) -> BigRational {
    terms
        .iter()
        .map(|term| term.to_rational().expect("non-zero denominator"))
        .fold(BigRational::zero(), |acc, value| acc + value)
}

fn distinct(terms: &[UnitFraction]) -> bool {
    let seen: HashSet<_> = terms.iter().map(UnitFraction::denominator).collect();
    seen.len() == terms.len()
}

#[test]
fn every_fraction_up_to_sixteenths_is_a_valid_expansion() {
    for denominator in 2..=16i64 {
        for numerator in 1..denominator {
            let fraction = Fraction::new(numerator, denominator).expect("valid");
            let terms = decompose(numerator, denominator).expect("decompose");
            let errors = validate_decomposition(&fraction, &terms);
            assert!(errors.is_empty(), "{fraction}: {errors:?}");
        }
    }
}

proptest! {
    #[test]
    fn lookahead_sums_exactly(denominator in 2i64..=18, seed in 0i64..1000) {
        let numerator = 1 + seed % (denominator - 1);
        let fraction = Fraction::new(numerator, denominator).expect("valid");
        let terms = decompose(numerator, denominator).expect("decompose");
        prop_assert_eq!(exact_sum(&terms), fraction.to_rational());
        prop_assert!(distinct(&terms), "{}: repeated denominator", fraction);
    }

    #[test]
    fn lookahead_is_deterministic(denominator in 2i64..=18, seed in 0i64..1000) {
        let numerator = 1 + seed % (denominator - 1);
        let first = decompose(numerator, denominator).expect("decompose");
        let second = decompose(numerator, denominator).expect("decompose");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn greedy_is_strictly_increasing_and_exact(
        denominator in 2u64..=200,
        seed in 0u64..1_000,
    ) {
        let numerator = 1 + seed % (denominator - 1);
        let fraction = Fraction::new(numerator, denominator).expect("valid");
        let terms = decompose_greedy(&fraction);
        prop_assert_eq!(exact_sum(&terms), fraction.to_rational());
        prop_assert!(terms.windows(2).all(|pair| pair[0].denominator() < pair[1].denominator()));
    }

    #[test]
    fn rejects_non_positive_numerators(numerator in -1000i64..=0, denominator in -1000i64..1000) {
        prop_assert!(decompose(numerator, denominator).is_err());
    }
}

//! Strategy dispatch for `unitfrac decompose` and `unitfrac compare`.

use anyhow::{Result, bail};
use tracing::{debug, instrument};

use crate::core::fraction::Fraction;
use crate::core::greedy::decompose_greedy;
use crate::core::invariants::validate_decomposition;
use crate::core::lookahead::decompose_lookahead;
use crate::core::types::{Decomposition, Strategy};

/// Both strategies applied to the same fraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub lookahead: Decomposition,
    pub greedy: Decomposition,
}

/// Run `strategy` on `fraction` and verify the result.
///
/// A result that fails [`validate_decomposition`] is a bug in the strategy,
/// reported as an error rather than returned.
#[instrument(skip_all, fields(fraction = %fraction, strategy = strategy.as_str()))]
pub fn run_strategy(fraction: &Fraction, strategy: Strategy) -> Result<Decomposition> {
    let terms = match strategy {
        Strategy::Lookahead => decompose_lookahead(fraction),
        Strategy::Greedy => decompose_greedy(fraction),
    };
    let errors = validate_decomposition(fraction, &terms);
    if !errors.is_empty() {
        bail!(
            "{} expansion of {} is invalid:\n- {}",
            strategy.as_str(),
            fraction,
            errors.join("\n- ")
        );
    }
    let decomposition = Decomposition {
        fraction: fraction.clone(),
        strategy,
        terms,
    };
    debug!(
        terms = decomposition.len(),
        largest_bits = decomposition.largest_denominator_bits(),
        "decomposed"
    );
    Ok(decomposition)
}

/// Run both strategies on `fraction`.
pub fn compare(fraction: &Fraction) -> Result<Comparison> {
    Ok(Comparison {
        lookahead: run_strategy(fraction, Strategy::Lookahead)?,
        greedy: run_strategy(fraction, Strategy::Greedy)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::units;

    #[test]
    fn run_strategy_dispatches_by_strategy() {
        let fraction = Fraction::new(4, 13).expect("valid");
        let greedy = run_strategy(&fraction, Strategy::Greedy).expect("greedy");
        assert_eq!(greedy.strategy, Strategy::Greedy);
        assert_eq!(greedy.terms, units(&[4, 18, 468]));

        let lookahead = run_strategy(&fraction, Strategy::Lookahead).expect("lookahead");
        assert_eq!(lookahead.strategy, Strategy::Lookahead);
        assert_eq!(lookahead.terms[..3], units(&[13, 26, 28])[..]);
    }

    #[test]
    fn compare_is_deterministic() {
        let fraction = Fraction::new(7, 15).expect("valid");
        let first = compare(&fraction).expect("compare");
        let second = compare(&fraction).expect("compare");
        assert_eq!(first, second);
        assert_eq!(first.lookahead.terms, units(&[3, 8, 120]));
        assert_eq!(first.greedy.terms, units(&[3, 8, 120]));
    }
}

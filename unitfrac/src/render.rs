//! Text and JSON rendering of decompositions.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::core::types::{Decomposition, Strategy};
use crate::decompose::Comparison;

/// Digits kept on each side of an elided denominator.
const ELIDE_KEEP: usize = 6;

/// Output format for `unitfrac decompose`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Stable JSON shape for a decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecompositionReport {
    pub fraction: String,
    pub strategy: Strategy,
    pub terms: Vec<String>,
    pub term_count: usize,
    pub largest_denominator_bits: u64,
}

impl From<&Decomposition> for DecompositionReport {
    fn from(decomposition: &Decomposition) -> Self {
        Self {
            fraction: decomposition.fraction.to_string(),
            strategy: decomposition.strategy,
            terms: decomposition
                .terms
                .iter()
                .map(ToString::to_string)
                .collect(),
            term_count: decomposition.len(),
            largest_denominator_bits: decomposition.largest_denominator_bits(),
        }
    }
}

/// Render `n/d = 1/a + 1/b + ...`, shortening denominators longer than
/// `elide_digits` (0 keeps every digit).
pub fn render_text(decomposition: &Decomposition, elide_digits: usize) -> String {
    let terms: Vec<String> = decomposition
        .terms
        .iter()
        .map(|term| format!("1/{}", elide(term.denominator(), elide_digits)))
        .collect();
    format!("{} = {}", decomposition.fraction, terms.join(" + "))
}

/// Render the JSON report with a trailing newline.
pub fn render_json(decomposition: &Decomposition) -> serde_json::Result<String> {
    let mut payload = serde_json::to_string_pretty(&DecompositionReport::from(decomposition))?;
    payload.push('\n');
    Ok(payload)
}

/// One summary line per strategy.
pub fn render_comparison(comparison: &Comparison) -> String {
    [&comparison.lookahead, &comparison.greedy]
        .iter()
        .map(|decomposition| {
            format!(
                "{}: {} terms, largest denominator {} bits",
                decomposition.strategy.as_str(),
                decomposition.len(),
                decomposition.largest_denominator_bits()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn elide(value: &BigUint, elide_digits: usize) -> String {
    let digits = value.to_string();
    if elide_digits == 0 || digits.len() <= elide_digits {
        return digits;
    }
    format!(
        "{}…{} ({} digits)",
        &digits[..ELIDE_KEEP],
        &digits[digits.len() - ELIDE_KEEP..],
        digits.len()
    )
}

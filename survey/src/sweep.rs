//! Sweep proper fractions through both strategies and aggregate the results.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use unitfrac::Fraction;
use unitfrac::decompose::compare;

/// Per-fraction outcome of one sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FractionRecord {
    pub fraction: String,
    pub lookahead_terms: usize,
    pub greedy_terms: usize,
    pub lookahead_bits: u64,
    pub greedy_bits: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveySummary {
    pub fractions: usize,
    pub lookahead_terms: usize,
    pub greedy_terms: usize,
    /// Fractions where lookahead used fewer terms than greedy.
    pub lookahead_fewer: usize,
    pub lookahead_more: usize,
    pub ties: usize,
    pub widest_lookahead_bits: u64,
    pub widest_greedy_bits: u64,
}

/// Every `n/d` with `2 <= d <= max_denominator` and `1 <= n < d`.
pub fn proper_fractions(max_denominator: u64) -> impl Iterator<Item = (u64, u64)> {
    (2..=max_denominator).flat_map(|denominator| {
        (1..denominator).map(move |numerator| (numerator, denominator))
    })
}

/// Run both strategies over every proper fraction up to `max_denominator`.
#[instrument(skip_all, fields(max_denominator = max_denominator))]
pub fn sweep(max_denominator: u64) -> Result<Vec<FractionRecord>> {
    let mut records = Vec::new();
    for (numerator, denominator) in proper_fractions(max_denominator) {
        let fraction = Fraction::new(numerator, denominator)
            .with_context(|| format!("build {numerator}/{denominator}"))?;
        let comparison = compare(&fraction)?;
        let record = FractionRecord {
            fraction: fraction.to_string(),
            lookahead_terms: comparison.lookahead.len(),
            greedy_terms: comparison.greedy.len(),
            lookahead_bits: comparison.lookahead.largest_denominator_bits(),
            greedy_bits: comparison.greedy.largest_denominator_bits(),
        };
        debug!(
            fraction = %record.fraction,
            lookahead_terms = record.lookahead_terms,
            greedy_terms = record.greedy_terms,
            "swept"
        );
        records.push(record);
    }
    Ok(records)
}

pub fn aggregate(records: &[FractionRecord]) -> SurveySummary {
    let mut summary = SurveySummary::default();
    for record in records {
        summary.fractions += 1;
        summary.lookahead_terms += record.lookahead_terms;
        summary.greedy_terms += record.greedy_terms;
        match record.lookahead_terms.cmp(&record.greedy_terms) {
            std::cmp::Ordering::Less => summary.lookahead_fewer += 1,
            std::cmp::Ordering::Greater => summary.lookahead_more += 1,
            std::cmp::Ordering::Equal => summary.ties += 1,
        }
        summary.widest_lookahead_bits = summary.widest_lookahead_bits.max(record.lookahead_bits);
        summary.widest_greedy_bits = summary.widest_greedy_bits.max(record.greedy_bits);
    }
    summary
}

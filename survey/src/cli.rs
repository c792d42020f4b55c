//! CLI command implementations.

use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use tracing::{info, warn};

use crate::results::{SurveyResults, load_results, write_results};
use crate::sweep::{SurveySummary, aggregate, sweep};

/// Sweep every proper fraction up to `max_denominator` and persist the results.
pub fn run_survey(max_denominator: u64, out: &Path) -> Result<()> {
    if max_denominator < 2 {
        bail!("max denominator must be >= 2, got {}", max_denominator);
    }
    info!(max_denominator, "starting sweep");
    let started_at = Utc::now();
    let records = sweep(max_denominator).context("sweep fractions")?;
    let finished_at = Utc::now();
    let summary = aggregate(&records);
    let results = SurveyResults::new(max_denominator, started_at, finished_at, summary, records);
    write_results(out, &results)?;

    print_summary(&results.summary);
    println!("survey: results={}", out.display());
    Ok(())
}

/// Show the summary of a results file, recomputed from its records.
pub fn report(path: &Path) -> Result<()> {
    let results = load_results(path)?;
    let (summary, warnings) = check_summary(&results);
    println!(
        "report: max_denominator={} duration_secs={:.2}",
        results.max_denominator, results.duration_secs
    );
    print_summary(&summary);
    for warning in warnings {
        warn!(%warning, "stored summary is stale");
        eprintln!("warning: {}", warning);
    }
    Ok(())
}

/// Recompute the summary and list fields where the stored one disagrees.
pub fn check_summary(results: &SurveyResults) -> (SurveySummary, Vec<String>) {
    let fresh = aggregate(&results.records);
    let stored = &results.summary;
    let mut warnings = Vec::new();
    let fields = [
        ("fractions", stored.fractions as u64, fresh.fractions as u64),
        (
            "lookahead_terms",
            stored.lookahead_terms as u64,
            fresh.lookahead_terms as u64,
        ),
        (
            "greedy_terms",
            stored.greedy_terms as u64,
            fresh.greedy_terms as u64,
        ),
        (
            "lookahead_fewer",
            stored.lookahead_fewer as u64,
            fresh.lookahead_fewer as u64,
        ),
        (
            "lookahead_more",
            stored.lookahead_more as u64,
            fresh.lookahead_more as u64,
        ),
        ("ties", stored.ties as u64, fresh.ties as u64),
        (
            "widest_lookahead_bits",
            stored.widest_lookahead_bits,
            fresh.widest_lookahead_bits,
        ),
        (
            "widest_greedy_bits",
            stored.widest_greedy_bits,
            fresh.widest_greedy_bits,
        ),
    ];
    for (label, stored, fresh) in fields {
        if stored != fresh {
            warnings.push(format!("{label}: stored {stored}, recomputed {fresh}"));
        }
    }
    (fresh, warnings)
}

fn print_summary(summary: &SurveySummary) {
    println!("survey: fractions={}", summary.fractions);
    println!(
        "survey: terms lookahead={} greedy={}",
        summary.lookahead_terms, summary.greedy_terms
    );
    println!(
        "survey: lookahead fewer={} more={} ties={}",
        summary.lookahead_fewer, summary.lookahead_more, summary.ties
    );
    println!(
        "survey: widest_bits lookahead={} greedy={}",
        summary.widest_lookahead_bits, summary.widest_greedy_bits
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_then_report_is_consistent() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("results.json");
        run_survey(5, &path).expect("run");

        let results = load_results(&path).expect("load");
        assert_eq!(results.records.len(), 10);
        let (summary, warnings) = check_summary(&results);
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(summary, results.summary);
        report(&path).expect("report");
    }

    #[test]
    fn check_summary_flags_stale_fields() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("results.json");
        run_survey(4, &path).expect("run");

        let mut results = load_results(&path).expect("load");
        results.summary.ties += 1;
        results.summary.widest_greedy_bits = 99;
        let (_, warnings) = check_summary(&results);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("ties: stored"));
        assert!(warnings[1].starts_with("widest_greedy_bits: stored 99"));
    }

    #[test]
    fn run_rejects_tiny_range() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = run_survey(1, &temp.path().join("results.json")).expect_err("too small");
        assert!(err.to_string().contains("max denominator must be >= 2"));
    }
}

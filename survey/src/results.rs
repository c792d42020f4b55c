//! Survey result persistence.
//!
//! Results are written as pretty JSON so runs can be diffed and re-reported
//! without recomputing the sweep.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sweep::{FractionRecord, SurveySummary};

/// Persisted output of `survey run`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResults {
    pub max_denominator: u64,
    /// RFC 3339 UTC timestamps.
    pub started_at: String,
    pub finished_at: String,
    pub duration_secs: f64,
    pub summary: SurveySummary,
    pub records: Vec<FractionRecord>,
}

impl SurveyResults {
    pub fn new(
        max_denominator: u64,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        summary: SurveySummary,
        records: Vec<FractionRecord>,
    ) -> Self {
        let duration_secs = (finished_at - started_at)
            .to_std()
            .map(|duration| duration.as_secs_f64())
            .unwrap_or(0.0);
        Self {
            max_denominator,
            started_at: started_at.to_rfc3339(),
            finished_at: finished_at.to_rfc3339(),
            duration_secs,
            summary,
            records,
        }
    }
}

/// Write results atomically (temp file + rename).
pub fn write_results(path: &Path, results: &SurveyResults) -> Result<()> {
    let mut payload = serde_json::to_string_pretty(results).context("serialize results")?;
    payload.push('\n');
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)
        .with_context(|| format!("write temp results {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace results {}", path.display()))?;
    Ok(())
}

pub fn load_results(path: &Path) -> Result<SurveyResults> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("out").join("results.json");
        let started_at = Utc::now();
        let finished_at = started_at + Duration::milliseconds(1500);
        let records = vec![FractionRecord {
            fraction: "1/2".to_string(),
            lookahead_terms: 1,
            greedy_terms: 1,
            lookahead_bits: 2,
            greedy_bits: 2,
        }];
        let results = SurveyResults::new(
            2,
            started_at,
            finished_at,
            crate::sweep::aggregate(&records),
            records,
        );
        assert_eq!(results.duration_secs, 1.5);

        write_results(&path, &results).expect("write");
        assert!(!path.with_extension("json.tmp").exists());
        let loaded = load_results(&path).expect("load");
        assert_eq!(loaded, results);
    }
}

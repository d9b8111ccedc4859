//! JSON output formatting
//!
//! One document per run:
//!
//! ```json
//! {
//!   "distribution": { "type": "gamma", "shape": 2.5 },
//!   "label": "gamma(shape=2.5)",
//!   "count": 3,
//!   "workers": 1,
//!   "seed": 42,
//!   "expected": { "mean": 2.5, "variance": 2.5 },
//!   "summary": { "count": 3, "mean": 2.4, ... },
//!   "samples": [1.9, 2.2, 3.1]
//! }
//! ```
//!
//! Non-finite values (a Cauchy tail can overflow) serialize as `null`.

use crate::config::{Config, DistributionConfig, NormalizeConfig};
use crate::stats::SampleStats;
use crate::worker::RunResult;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Expected moments of the configured distribution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonMoments {
    pub mean: Option<f64>,
    pub variance: Option<f64>,
}

/// Summary statistics over the generated samples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    pub count: u64,
    pub mean: f64,
    pub variance: f64,
    pub stdev: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub elapsed_sec: f64,
}

impl JsonSummary {
    pub fn from_stats(stats: &SampleStats, elapsed_sec: f64) -> Self {
        Self {
            count: stats.count(),
            mean: stats.mean(),
            variance: stats.variance(),
            stdev: stats.stdev(),
            min: stats.min(),
            max: stats.max(),
            elapsed_sec,
        }
    }
}

/// Complete JSON report for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    pub distribution: DistributionConfig,
    pub label: String,
    pub count: usize,
    pub workers: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalize: Option<NormalizeConfig>,
    pub expected: JsonMoments,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<JsonSummary>,
    pub samples: Vec<f64>,
}

impl JsonReport {
    pub fn new(result: &RunResult, config: &Config, summary: bool) -> Self {
        Self {
            distribution: config.distribution.clone(),
            label: config.distribution.to_string(),
            count: result.samples.len(),
            workers: result.workers,
            seed: config.run.seed,
            normalize: config.run.normalize,
            expected: JsonMoments {
                mean: result.expected_mean,
                variance: result.expected_variance,
            },
            summary: summary
                .then(|| JsonSummary::from_stats(&result.stats, result.elapsed.as_secs_f64())),
            samples: result.samples.clone(),
        }
    }
}

/// Write the report as pretty-printed JSON
pub fn write_json<W: Write>(
    out: &mut W,
    result: &RunResult,
    config: &Config,
    summary: bool,
) -> Result<()> {
    let report = JsonReport::new(result, config, summary);
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_util;
    use serde_json::Value;

    fn render(result: &RunResult, summary: bool) -> Value {
        let mut out = Vec::new();
        write_json(&mut out, result, &test_util::config(), summary).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_json_report_fields() {
        let value = render(&test_util::result(vec![0.25, 0.75]), true);
        assert_eq!(value["distribution"]["type"], "uniform");
        assert_eq!(value["label"], "uniform(min=0, max=1)");
        assert_eq!(value["count"], 2);
        assert_eq!(value["seed"], 1);
        assert_eq!(value["expected"]["mean"], 0.5);
        assert_eq!(value["summary"]["count"], 2);
        assert_eq!(value["summary"]["mean"], 0.5);
        assert_eq!(value["samples"], serde_json::json!([0.25, 0.75]));
    }

    #[test]
    fn test_json_without_summary() {
        let value = render(&test_util::result(vec![0.5]), false);
        assert!(value.get("summary").is_none());
    }

    #[test]
    fn test_json_non_finite_and_undefined() {
        let mut result = test_util::result(vec![f64::INFINITY, 1.0]);
        result.expected_mean = None;
        let value = render(&result, false);
        assert!(value["samples"][0].is_null());
        assert!(value["expected"]["mean"].is_null());
    }

    #[test]
    fn test_json_report_reads_back() {
        let report = JsonReport::new(&test_util::result(vec![0.1]), &test_util::config(), true);
        let text = serde_json::to_string(&report).unwrap();
        let back: JsonReport = serde_json::from_str(&text).unwrap();
        assert_eq!(back.distribution, report.distribution);
        assert_eq!(back.samples, vec![0.1]);
    }
}

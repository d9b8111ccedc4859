//! Parallel sample generation
//!
//! Fans one configured run out over several worker threads. Samplers are
//! never shared: each worker builds its own sampler from the configuration
//! and drives it from its own [`XoshiroSource`].
//!
//! # Seeding
//!
//! With a base seed `s`, worker `i` is seeded with `s + i` (wrapping). Worker
//! outputs are concatenated in worker order, so a seeded run is reproducible
//! for a fixed worker count. Without a seed every worker seeds from entropy.
//!
//! # Example
//!
//! ```
//! use variates::config::{Config, DistributionConfig, RunConfig, OutputConfig};
//! use variates::worker::run_parallel;
//!
//! let config = Config {
//!     distribution: DistributionConfig::Exponential { lambda: 2.0 },
//!     run: RunConfig { count: 1000, seed: Some(1), workers: Some(4), normalize: None },
//!     output: OutputConfig::default(),
//! };
//! let result = run_parallel(&config)?;
//! assert_eq!(result.samples.len(), 1000);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::batch::{sample_vec, sample_vec_normalized};
use crate::config::{Config, DistributionConfig, NormalizeConfig};
use crate::distribution::Sampler;
use crate::source::XoshiroSource;
use crate::stats::SampleStats;
use crate::Result;
use anyhow::Context;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Output of a completed run
#[derive(Debug, Clone)]
pub struct RunResult {
    /// All samples, worker 0 first
    pub samples: Vec<f64>,
    /// Statistics over `samples`
    pub stats: SampleStats,
    pub workers: usize,
    /// Mean of the configured distribution, if defined
    pub expected_mean: Option<f64>,
    /// Variance of the configured distribution, if defined
    pub expected_variance: Option<f64>,
    pub elapsed: Duration,
}

/// One worker's share of a run
struct WorkerOutput {
    samples: Vec<f64>,
    stats: SampleStats,
    expected_mean: Option<f64>,
    expected_variance: Option<f64>,
}

/// Split `count` samples over `workers`; the first `count % workers` get one extra
pub fn split_count(count: usize, workers: usize) -> Vec<usize> {
    let workers = workers.max(1);
    let base = count / workers;
    let extra = count % workers;
    (0..workers).map(|i| base + usize::from(i < extra)).collect()
}

/// Seed for worker `index`, or `None` for entropy
pub fn worker_seed(base: Option<u64>, index: usize) -> Option<u64> {
    base.map(|seed| seed.wrapping_add(index as u64))
}

/// Generate `config.run.count` samples across the configured workers
pub fn run_parallel(config: &Config) -> Result<RunResult> {
    let workers = config.run.effective_workers();
    let shares = split_count(config.run.count, workers);
    info!(
        distribution = %config.distribution,
        count = config.run.count,
        workers,
        seed = ?config.run.seed,
        "starting run"
    );

    let start = Instant::now();
    let outputs = shares
        .par_iter()
        .enumerate()
        .map(|(index, &share)| {
            run_worker(
                index,
                share,
                &config.distribution,
                worker_seed(config.run.seed, index),
                config.run.normalize,
            )
        })
        .collect::<Result<Vec<_>>>()?;
    let elapsed = start.elapsed();

    let mut samples = Vec::with_capacity(config.run.count);
    let mut stats = SampleStats::new();
    let (expected_mean, expected_variance) = outputs
        .first()
        .map(|o| (o.expected_mean, o.expected_variance))
        .unwrap_or((None, None));
    for output in outputs {
        stats.merge(&output.stats);
        samples.extend(output.samples);
    }

    info!(
        count = samples.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "run complete"
    );

    Ok(RunResult {
        samples,
        stats,
        workers,
        expected_mean,
        expected_variance,
        elapsed,
    })
}

fn run_worker(
    index: usize,
    count: usize,
    dist: &DistributionConfig,
    seed: Option<u64>,
    normalize: Option<NormalizeConfig>,
) -> Result<WorkerOutput> {
    let source = match seed {
        Some(seed) => XoshiroSource::seeded(seed),
        None => XoshiroSource::from_entropy(),
    };
    let mut sampler = dist
        .build_sampler(source)
        .with_context(|| format!("Worker {} failed to build {}", index, dist.name()))?;

    let samples = match normalize {
        Some(n) => sample_vec_normalized(&mut sampler, count, n.mean, n.stdev),
        None => sample_vec(&mut sampler, count),
    };
    let stats = SampleStats::from_slice(&samples);
    debug!(worker = index, count, ?seed, mean = stats.mean(), "worker finished");

    // Remapped samples no longer follow the configured moments
    let (expected_mean, expected_variance) = match normalize {
        Some(_) => (None, None),
        None => (sampler.mean(), sampler.variance()),
    };

    Ok(WorkerOutput {
        samples,
        stats,
        expected_mean,
        expected_variance,
    })
}

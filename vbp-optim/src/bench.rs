use std::time::Instant;

use crate::config::BenchConfig;
use anyhow::Result;
use itertools::Itertools;
use log::{debug, info};
use ordered_float::OrderedFloat;
use rand::SeedableRng;
use rand::prelude::SmallRng;
use serde::{Deserialize, Serialize};
use vsvbp::entities::Instance;
use vsvbp::generator::generate;
use vsvbp::solver::{Strategy, catalogue};

/// Results of all strategies on the generated instances of every (bins, resources) combination
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BenchReport {
    pub config: BenchConfig,
    pub entries: Vec<BenchEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BenchEntry {
    pub num_bins: usize,
    pub num_resources: usize,
    pub avg_items: f64,
    /// Mean over the instances of the mean usage over all dimensions
    pub avg_usage: f64,
    /// Mean over the instances of the usage of the most used dimension
    pub avg_max_usage: f64,
    /// In the order of [`strategies`]
    pub strategies: Vec<StrategyStats>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StrategyStats {
    pub name: String,
    /// Mean fraction of the items packed
    pub mean_packed: f64,
    /// Number of instances on which every item was packed
    pub successes: usize,
}

/// Strategies exercised by the benchmark
pub fn strategies(config: &BenchConfig) -> Vec<Strategy> {
    let mut strategies = catalogue(config.use_dot_product);
    if config.use_similarity {
        strategies.push(Strategy::similarity());
    }
    strategies
}

pub fn run_benchmark(config: &BenchConfig) -> Result<BenchReport> {
    let start = Instant::now();
    let mut entries = vec![];
    for (&num_bins, &num_resources) in config
        .num_bins
        .iter()
        .cartesian_product(config.num_resources.iter())
    {
        let entry = bench_combination(config, num_bins, num_resources)?;
        info!(
            "[BENCH] {num_bins} bins, {num_resources} resources: {:.1} items, best strategy {}",
            entry.avg_items,
            entry
                .strategies
                .iter()
                .max_by_key(|s| (s.successes, OrderedFloat(s.mean_packed)))
                .map_or("-", |s| s.name.as_str())
        );
        entries.push(entry);
    }
    info!(
        "[BENCH] finished in {:.3}s",
        start.elapsed().as_secs_f64()
    );
    Ok(BenchReport {
        config: config.clone(),
        entries,
    })
}

fn bench_combination(
    config: &BenchConfig,
    num_bins: usize,
    num_resources: usize,
) -> Result<BenchEntry> {
    let mut strategies = strategies(config);
    let mut packed = vec![0.0; strategies.len()];
    let mut successes = vec![0; strategies.len()];
    let (mut n_items, mut usage, mut max_usage) = (0, 0.0, 0.0);

    for seed in 0..config.num_instances {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut instance = generate(
            num_bins,
            num_resources,
            config.min_fill,
            &config.generator,
            &mut rng,
        )?;
        let (mean, max) = usage_stats(&instance);
        n_items += instance.n_items();
        usage += mean;
        max_usage += max;

        for (s, strategy) in strategies.iter_mut().enumerate() {
            instance.empty();
            let failures = strategy.run(&mut instance, &mut rng);
            if instance.n_items() > 0 {
                packed[s] += (instance.n_items() - failures.len()) as f64 / instance.n_items() as f64;
            } else {
                packed[s] += 1.0;
            }
            if failures.is_empty() {
                successes[s] += 1;
            }
            debug!(
                "[BENCH] seed {seed}: {} left {} items unpacked",
                strategy.name,
                failures.len()
            );
        }
    }

    let n = config.num_instances.max(1) as f64;
    Ok(BenchEntry {
        num_bins,
        num_resources,
        avg_items: n_items as f64 / n,
        avg_usage: usage / n,
        avg_max_usage: max_usage / n,
        strategies: strategies
            .into_iter()
            .zip_eq(packed.into_iter().zip_eq(successes))
            .map(|(strategy, (packed, successes))| StrategyStats {
                name: strategy.name,
                mean_packed: packed / n,
                successes,
            })
            .collect(),
    })
}

/// Mean and maximum usage over the dimensions with capacity
fn usage_stats(instance: &Instance) -> (f64, f64) {
    let usage = instance.usage();
    match usage.is_empty() {
        true => (0.0, 0.0),
        false => (
            usage.iter().sum::<f64>() / usage.len() as f64,
            usage.iter().copied().fold(0.0, f64::max),
        ),
    }
}

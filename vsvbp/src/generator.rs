use crate::entities::{Bin, Instance, Item};
use crate::util::assertions;
use anyhow::{Result, ensure};
use itertools::Itertools;
use rand::Rng;
use rand::prelude::{SliceRandom, SmallRng};
use rand_distr::Exp1;
use serde::{Deserialize, Serialize};

pub const MAX_NUM_RES: usize = 101;
pub const MAX_RES: u64 = 1000;
pub const MIN_RES: u64 = 10;
/// Number of attempts to generate an item which fits before a bin is considered full
pub const MAX_TRY: usize = 100;

/// How the bins (and the items packed in them) of a generated instance are drawn
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum BinGenerator {
    /// Capacities uniform in `[MIN_RES, MAX_RES]`, item requirements uniform in `[0, rem_cons * remaining]`.
    /// With probability `1 - rare_rate` the last resource of a bin has no capacity.
    Uniform { rem_cons: f64, rare_rate: f64 },
    /// Capacities of a bin are perturbations of a common base.
    /// With `correlated_items`, so are the requirements of each item.
    Correlated {
        dev: f64,
        rem_cons: f64,
        correlated_items: bool,
    },
    /// All items are perturbations of `base_item`, bins are about five times its size
    SimilarItems { base_item: Vec<u64>, dev: f64 },
    /// Uniform bins filled with items of about a fifth of their capacities
    Similar { dev: f64 },
}

impl Default for BinGenerator {
    fn default() -> Self {
        BinGenerator::Uniform {
            rem_cons: 1.0,
            rare_rate: 1.0,
        }
    }
}

/// Generates a random instance of `num_bins` bins which is feasible by construction.
///
/// Every bin is filled with items generated to fit in it, until the items use at least a fraction
/// `min_fill` of its volume or no fitting item could be generated.
/// The returned instance still contains this packing, call [`Instance::empty`] before packing it again.
/// Items and bins are shuffled.
pub fn generate(
    num_bins: usize,
    num_resources: usize,
    min_fill: f64,
    bin_generator: &BinGenerator,
    rng: &mut SmallRng,
) -> Result<Instance> {
    ensure!(
        0.0 < min_fill && min_fill <= 1.0,
        "min_fill should be in (0, 1], got {min_fill}"
    );
    ensure!(
        0 < num_resources && num_resources < MAX_NUM_RES,
        "number of resources should be in [1, {MAX_NUM_RES}), got {num_resources}"
    );
    if let BinGenerator::SimilarItems { base_item, .. } = bin_generator {
        ensure!(
            base_item.len() == num_resources,
            "base item has {} resources, expected {num_resources}",
            base_item.len()
        );
    }

    let mut items = vec![];
    let mut bins = vec![];
    for _ in 0..num_bins {
        let mut filler = BinFiller::new(&mut items, min_fill);
        let bin = match bin_generator {
            BinGenerator::Uniform {
                rem_cons,
                rare_rate,
            } => uniform_bin(&mut filler, num_resources, *rem_cons, *rare_rate, rng),
            BinGenerator::Correlated {
                dev,
                rem_cons,
                correlated_items,
            } => correlated_bin(
                &mut filler,
                num_resources,
                *dev,
                *rem_cons,
                *correlated_items,
                rng,
            ),
            BinGenerator::SimilarItems { base_item, dev } => {
                similar_items_bin(&mut filler, base_item, *dev, rng)
            }
            BinGenerator::Similar { dev } => similar_bin(&mut filler, num_resources, *dev, rng),
        };
        bins.push(bin);
    }

    // shuffle the items and keep the witness packing pointing to them
    let mut order = (0..items.len()).collect_vec();
    order.shuffle(rng);
    let mut new_id = vec![0; items.len()];
    for (new, &old) in order.iter().enumerate() {
        new_id[old] = new;
    }
    let items = order.iter().map(|&old| items[old].clone()).collect_vec();
    bins.iter_mut()
        .flat_map(|b| b.items.iter_mut())
        .for_each(|id| *id = new_id[*id]);
    bins.shuffle(rng);

    let instance = Instance::new(items, bins);
    debug_assert!(assertions::instance_consistent(&instance));
    debug_assert!(instance.is_packed());
    Ok(instance)
}

/// Mean fraction of the bin's capacity required by the item, ignoring dimensions without capacity.
fn volume(item: &Item, bin: &Bin) -> f64 {
    let (sum, n) = item
        .requirements
        .iter()
        .zip(bin.capacities.iter())
        .filter(|(_, c)| **c > 0)
        .fold((0.0, 0), |(sum, n), (r, c)| (sum + *r as f64 / *c as f64, n + 1));
    match n {
        0 => 0.0,
        n => sum / n as f64,
    }
}

/// Fills a single bin with generated items, appending them to the shared item list.
struct BinFiller<'a> {
    items: &'a mut Vec<Item>,
    min_fill: f64,
    volume: f64,
}

impl<'a> BinFiller<'a> {
    fn new(items: &'a mut Vec<Item>, min_fill: f64) -> Self {
        Self {
            items,
            min_fill: min_fill.min(1.0 - 1e-15),
            volume: 0.0,
        }
    }

    fn is_full(&self) -> bool {
        self.volume >= self.min_fill
    }

    /// Adds an item with the given requirements to the bin if it is non-zero and fits.
    fn try_add(&mut self, bin: &mut Bin, requirements: Vec<u64>) -> bool {
        if requirements.iter().all(|r| *r == 0) {
            return false;
        }
        let item = Item::new(requirements);
        match bin.add(self.items.len(), &item) {
            true => {
                self.volume += volume(&item, bin);
                self.items.push(item);
                true
            }
            false => false,
        }
    }

    /// Keeps adding generated items until the bin is full or an item is rejected.
    fn fill(&mut self, bin: &mut Bin, mut gen_item: impl FnMut(&Bin) -> Vec<u64>) {
        while !self.is_full() {
            let requirements = gen_item(bin);
            if !self.try_add(bin, requirements) {
                break;
            }
        }
    }

    /// Same as [`BinFiller::fill`], but each item gets [`MAX_TRY`] attempts.
    fn fill_with_retries(&mut self, bin: &mut Bin, mut gen_item: impl FnMut(&Bin) -> Vec<u64>) {
        while !self.is_full() {
            let added = (0..MAX_TRY).any(|_| {
                let requirements = gen_item(bin);
                self.try_add(bin, requirements)
            });
            if !added {
                break;
            }
        }
    }
}

/// `max(0, round(base + e - mean))` with `e` exponentially distributed with `mean = base * dev`
fn perturb(base: f64, dev: f64, rng: &mut SmallRng) -> u64 {
    let mean = base * dev;
    let noise = match mean > 0.0 {
        true => rng.sample::<f64, _>(Exp1) * mean - mean,
        false => 0.0,
    };
    (base + noise).round().max(0.0) as u64
}

fn uniform_requirements(bin: &Bin, rem_cons: f64, rng: &mut SmallRng) -> Vec<u64> {
    bin.remaining
        .iter()
        .map(|r| rng.random_range(0..=(rem_cons * *r as f64) as u64))
        .collect()
}

fn uniform_capacities(num_resources: usize, rng: &mut SmallRng) -> Vec<u64> {
    (0..num_resources)
        .map(|_| rng.random_range(MIN_RES..=MAX_RES))
        .collect()
}

fn uniform_bin(
    filler: &mut BinFiller,
    num_resources: usize,
    rem_cons: f64,
    rare_rate: f64,
    rng: &mut SmallRng,
) -> Bin {
    let mut capacities = uniform_capacities(num_resources, rng);
    if rare_rate < 1.0 && rng.random::<f64>() > rare_rate {
        if let Some(last) = capacities.last_mut() {
            *last = 0;
        }
    }
    let mut bin = Bin::new(capacities);
    filler.fill(&mut bin, |b| uniform_requirements(b, rem_cons, rng));
    bin
}

fn correlated_bin(
    filler: &mut BinFiller,
    num_resources: usize,
    dev: f64,
    rem_cons: f64,
    correlated_items: bool,
    rng: &mut SmallRng,
) -> Bin {
    let base = rng.random_range(MIN_RES..=MAX_RES) as f64;
    let capacities = (0..num_resources)
        .map(|_| perturb(base, dev, rng))
        .collect_vec();
    let mut bin = Bin::new(capacities);
    match correlated_items {
        true => {
            let min_cap = bin.capacities.iter().min().copied().unwrap_or(0);
            let max_base = ((rem_cons * min_cap as f64) as u64).max(1);
            filler.fill_with_retries(&mut bin, |_| {
                let base = rng.random_range(1..=max_base) as f64;
                (0..num_resources).map(|_| perturb(base, dev, rng)).collect()
            });
        }
        false => filler.fill(&mut bin, |b| uniform_requirements(b, rem_cons, rng)),
    }
    bin
}

fn similar_items_bin(
    filler: &mut BinFiller,
    base_item: &[u64],
    dev: f64,
    rng: &mut SmallRng,
) -> Bin {
    let capacities = base_item
        .iter()
        .map(|v| perturb(5.0 * *v as f64, dev, rng))
        .collect_vec();
    let mut bin = Bin::new(capacities);
    filler.fill_with_retries(&mut bin, |_| {
        base_item
            .iter()
            .map(|v| perturb(*v as f64, dev, rng))
            .collect()
    });
    bin
}

fn similar_bin(filler: &mut BinFiller, num_resources: usize, dev: f64, rng: &mut SmallRng) -> Bin {
    let mut bin = Bin::new(uniform_capacities(num_resources, rng));
    let capacities = bin.capacities.clone();
    filler.fill_with_retries(&mut bin, |_| {
        capacities
            .iter()
            .map(|c| perturb(*c as f64 / 5.0, dev, rng))
            .collect()
    });
    bin
}

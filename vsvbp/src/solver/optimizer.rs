use std::time::Instant;

use crate::entities::{Bin, Instance, Item, lower_bound};
use crate::solver::find_packing;
use crate::util::SolverConfig;
use log::{debug, info};
use rand::SeedableRng;
use rand::prelude::SmallRng;

/// Best packing found by the [`Optimizer`]
#[derive(Clone, Debug)]
pub struct Solution {
    /// Instance with the minimal number of bins found, all items packed
    pub instance: Instance,
    /// Name of the strategy which produced the packing
    pub strategy: String,
    pub lower_bound: usize,
}

/// Binary search over the number of bins, using the feasibility oracle as a black box.
pub struct Optimizer {
    pub items: Vec<Item>,
    /// Template bin, every candidate bin gets its capacities
    pub tbin: Bin,
    pub config: SolverConfig,
    pub rng: SmallRng,
}

impl Optimizer {
    pub fn new(items: Vec<Item>, tbin: Bin, config: SolverConfig) -> Self {
        assert!(
            items.iter().all(|i| i.dims() == tbin.dims()),
            "items and bin should have the same number of dimensions"
        );
        let rng = match config.prng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self {
            items,
            tbin,
            config,
            rng,
        }
    }

    /// Searches the smallest number of bins in `[lower_bound, n_items]` for which a packing is found.
    /// Returns `None` if no candidate could be packed.
    pub fn solve(&mut self) -> Option<Solution> {
        let start = Instant::now();
        let lb = lower_bound(&self.items, &self.tbin);
        let (mut low, mut high) = (lb, self.items.len());
        info!(
            "[VBP] searching in [{low}, {high}] bins for {} items",
            self.items.len()
        );

        let mut best: Option<Solution> = None;
        while low <= high {
            let mid = low + (high - low) / 2;
            let mut instance = Instance::with_uniform_bins(self.items.clone(), &self.tbin, mid);
            match find_packing(&mut instance, self.config.use_dot_product, &mut self.rng) {
                Some(strategy) => {
                    debug!("[VBP] {mid} bins feasible ({strategy})");
                    best = Some(Solution {
                        instance,
                        strategy,
                        lower_bound: lb,
                    });
                    match mid.checked_sub(1) {
                        Some(m) => high = m,
                        None => break,
                    }
                }
                None => {
                    debug!("[VBP] {mid} bins infeasible");
                    low = mid + 1;
                }
            }
        }

        match &best {
            Some(sol) => info!(
                "[VBP] optimization finished in {:.3}ms: {} bins (lower bound {lb}) using {}",
                start.elapsed().as_secs_f64() * 1000.0,
                sol.instance.n_bins(),
                sol.strategy
            ),
            None => info!(
                "[VBP] optimization finished in {:.3}ms: no packing found",
                start.elapsed().as_secs_f64() * 1000.0
            ),
        }
        best
    }
}

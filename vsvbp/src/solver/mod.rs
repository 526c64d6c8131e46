//! Approximate minimization of the number of bins.
//!
//! [`is_feasible`] tries an ordered catalogue of [`Strategy`]s on an instance,
//! [`Optimizer`] performs a binary search over the number of bins on top of it.
//! Neither proves anything: a negative answer only means none of the catalogued strategies succeeded.

mod optimizer;
mod strategy;

use crate::entities::{Bin, Instance, Item};
use log::debug;
use rand::prelude::SmallRng;

#[doc(inline)]
pub use optimizer::{Optimizer, Solution};
#[doc(inline)]
pub use strategy::{Strategy, catalogue};

/// Runs the catalogued strategies in order until one of them packs every item.
/// Returns the name of the successful strategy, leaving its packing in `instance`.
/// If none succeeds, `None` is returned and `instance` holds the packing of the last strategy tried.
pub fn find_packing(instance: &mut Instance, use_dp: bool, rng: &mut SmallRng) -> Option<String> {
    for mut strategy in catalogue(use_dp) {
        instance.empty();
        let failures = strategy.run(instance, rng);
        match failures.first() {
            None => {
                debug!("[VBP] {} packed all {} items", strategy.name, instance.n_items());
                return Some(strategy.name);
            }
            Some(first) => debug!(
                "[VBP] {} failed: {} unpacked items, first at rank {}",
                strategy.name,
                failures.len(),
                first.rank
            ),
        }
    }
    None
}

/// Returns true if any of the catalogued strategies packs every item of the instance.
pub fn is_feasible(instance: &mut Instance, use_dp: bool, rng: &mut SmallRng) -> bool {
    find_packing(instance, use_dp, rng).is_some()
}

/// Searches for the smallest number of bins with the capacities of `tbin` in which all `items` can be packed.
///
/// Returns the packed instance, or `None` if no tried number of bins could be packed.
/// Note that an empty set of items yields an instance without any bins, not `None`.
/// A seed makes the run deterministic.
pub fn optimize(items: &[Item], tbin: &Bin, use_dp: bool, seed: Option<u64>) -> Option<Instance> {
    let config = crate::util::SolverConfig {
        use_dot_product: use_dp,
        prng_seed: seed,
    };
    Optimizer::new(items.to_vec(), tbin.clone(), config)
        .solve()
        .map(|sol| sol.instance)
}

//! Packing heuristics. All of them share the same contract:
//! the bins of the instance are expected to be empty (see [`Instance::empty`]),
//! every placed item is inserted in its destination bin,
//! and the items which could not be placed are returned as [`Failure`]s.
//! An empty list of failures means every item was packed.

mod bin_balancing;
mod bin_centric;
mod item_centric;

use crate::entities::{Instance, ItemId};
use crate::measures::MeasurePair;
use crate::util::assertions;
use rand::prelude::SmallRng;
use serde::{Deserialize, Serialize};

#[doc(inline)]
pub use bin_balancing::bin_balancing;
#[doc(inline)]
pub use bin_centric::bfd_bin_centric;
#[doc(inline)]
pub use item_centric::bfd_item_centric;

/// An item which could not be placed by a heuristic
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Heuristic specific rank, see the individual heuristics
    pub rank: usize,
    pub item: ItemId,
}

/// What happens to the working bin list after a bin accepts an item in [`bin_balancing`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalancingMode {
    /// The scan of the next item starts right after the accepting bin
    Global,
    /// Only the accepting bin is moved to the end of the list
    Single,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heuristic {
    ItemCentric,
    BinCentric,
    BinBalancing(BalancingMode),
}

impl Heuristic {
    pub fn run(
        &self,
        instance: &mut Instance,
        measures: &mut MeasurePair,
        rng: &mut SmallRng,
    ) -> Vec<Failure> {
        let failures = match self {
            Heuristic::ItemCentric => bfd_item_centric(instance, measures, rng),
            Heuristic::BinCentric => bfd_bin_centric(instance, measures, rng),
            Heuristic::BinBalancing(mode) => bin_balancing(instance, measures, *mode, rng),
        };
        debug_assert!(assertions::instance_consistent(instance));
        debug_assert_eq!(instance.n_items_packed() + failures.len(), instance.n_items());
        failures
    }

    /// Short prefix used in strategy names
    pub fn abbrev(&self) -> &'static str {
        match self {
            Heuristic::ItemCentric => "ic",
            Heuristic::BinCentric => "bc",
            Heuristic::BinBalancing(BalancingMode::Global) => "bb",
            Heuristic::BinBalancing(BalancingMode::Single) => "sbb",
        }
    }
}

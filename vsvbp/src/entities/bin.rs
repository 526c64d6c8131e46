use crate::entities::{Item, ItemId};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Position of a [`Bin`] in [`Instance::bins`](crate::entities::Instance::bins).
pub type BinId = usize;

/// A bin with fixed per-resource capacities and the items accepted so far.
///
/// Invariant: for every dimension `k`, `remaining[k] == capacities[k] - sum(requirements[k])` over the accepted items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bin {
    pub capacities: Vec<u64>,
    pub remaining: Vec<u64>,
    /// Accepted items, in order of insertion
    pub items: Vec<ItemId>,
}

impl Bin {
    pub fn new(capacities: Vec<u64>) -> Self {
        Self {
            remaining: capacities.clone(),
            capacities,
            items: vec![],
        }
    }

    /// Number of resource dimensions
    pub fn dims(&self) -> usize {
        self.capacities.len()
    }

    /// Returns true if the remaining capacity dominates the item's requirements in every dimension.
    /// Panics if the item and the bin differ in dimensions.
    pub fn feasible(&self, item: &Item) -> bool {
        assert_eq!(item.dims(), self.dims(), "item and bin differ in dimensions");
        item.requirements
            .iter()
            .zip_eq(self.remaining.iter())
            .all(|(req, rem)| req <= rem)
    }

    /// Adds the item to the bin without checking feasibility.
    pub fn insert(&mut self, id: ItemId, item: &Item) {
        debug_assert!(self.feasible(item), "item {id} does not fit in bin {:?}", self.remaining);
        self.remaining
            .iter_mut()
            .zip_eq(item.requirements.iter())
            .for_each(|(rem, req)| *rem -= req);
        self.items.push(id);
    }

    /// Adds the item to the bin if it fits. Returns whether it was added.
    pub fn add(&mut self, id: ItemId, item: &Item) -> bool {
        match self.feasible(item) {
            true => {
                self.insert(id, item);
                true
            }
            false => false,
        }
    }

    /// Removes all items, restoring the remaining capacities.
    pub fn empty(&mut self) {
        self.items.clear();
        self.remaining.clone_from(&self.capacities);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

use crate::entities::{Bin, BinId, Instance, Item, ItemId};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Scratch state of a single heuristic run.
///
/// Holds the working lists of pending items and open bins, and the transient sizes assigned by the measures.
/// Sizes are indexed by [`ItemId`]/[`BinId`] and start at 0 for every run.
#[derive(Debug)]
pub struct PackingState<'a> {
    pub items: &'a [Item],
    pub bins: &'a mut [Bin],
    /// Items which still have to be packed, in working order
    pub pending: Vec<ItemId>,
    /// Bins still considered by the heuristic, in working order
    pub open: Vec<BinId>,
    pub item_sizes: Vec<f64>,
    pub bin_sizes: Vec<f64>,
}

impl<'a> PackingState<'a> {
    pub fn new(instance: &'a mut Instance) -> Self {
        let Instance { items, bins } = instance;
        let items: &'a [Item] = items;
        let bins: &'a mut [Bin] = bins;
        Self {
            pending: (0..items.len()).collect(),
            open: (0..bins.len()).collect(),
            item_sizes: vec![0.0; items.len()],
            bin_sizes: vec![0.0; bins.len()],
            items,
            bins,
        }
    }

    /// Per-dimension total requirement of the pending items, `None` if nothing is pending.
    pub fn pending_requirements(&self) -> Option<Vec<u128>> {
        let dims = self.items[*self.pending.first()?].dims();
        let mut total = vec![0; dims];
        for &i in &self.pending {
            total
                .iter_mut()
                .zip_eq(self.items[i].requirements.iter())
                .for_each(|(t, r)| *t += u128::from(*r));
        }
        Some(total)
    }

    /// Per-dimension total remaining capacity of the open bins, `None` if no bin is open.
    pub fn open_remaining(&self) -> Option<Vec<u128>> {
        let dims = self.bins[*self.open.first()?].dims();
        let mut total = vec![0; dims];
        for &b in &self.open {
            total
                .iter_mut()
                .zip_eq(self.bins[b].remaining.iter())
                .for_each(|(t, r)| *t += u128::from(*r));
        }
        Some(total)
    }

    /// Removes and returns the pending item with the largest size.
    /// Ties are broken in favor of the first one in working order.
    pub fn take_largest_pending(&mut self) -> Option<ItemId> {
        let pos = self
            .pending
            .iter()
            .enumerate()
            .min_by_key(|(_, i)| Reverse(OrderedFloat(self.item_sizes[**i])))
            .map(|(pos, _)| pos)?;
        Some(self.pending.remove(pos))
    }

    /// The open bin with the smallest size, ties broken in favor of the first one in working order.
    pub fn smallest_open(&self) -> Option<BinId> {
        self.open
            .iter()
            .copied()
            .min_by_key(|b| OrderedFloat(self.bin_sizes[*b]))
    }

    /// Stable sort of the open bins by increasing size
    pub fn sort_open_ascending(&mut self) {
        let sizes = &self.bin_sizes;
        self.open.sort_by_key(|b| OrderedFloat(sizes[*b]));
    }

    /// Stable sort of the pending items by decreasing size
    pub fn sort_pending_descending(&mut self) {
        let sizes = &self.item_sizes;
        self.pending.sort_by_key(|i| Reverse(OrderedFloat(sizes[*i])));
    }

    /// Inserts the item in the first open bin (in working order) with enough remaining capacity.
    pub fn first_fit(&mut self, item: ItemId) -> Option<BinId> {
        let items = self.items;
        let bin = self
            .open
            .iter()
            .copied()
            .find(|b| self.bins[*b].feasible(&items[item]))?;
        self.bins[bin].insert(item, &items[item]);
        Some(bin)
    }

    /// Inserts the first pending item (in working order) which fits in the bin and removes it from the pending items.
    pub fn fill_first(&mut self, bin: BinId) -> Option<ItemId> {
        let items = self.items;
        let pos = self
            .pending
            .iter()
            .position(|i| self.bins[bin].feasible(&items[*i]))?;
        let item = self.pending.remove(pos);
        self.bins[bin].insert(item, &items[item]);
        Some(item)
    }

    /// Tries to insert the item in the bin.
    pub fn try_insert(&mut self, bin: BinId, item: ItemId) -> bool {
        self.bins[bin].add(item, &self.items[item])
    }
}

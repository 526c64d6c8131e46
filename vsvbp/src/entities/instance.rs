use crate::entities::{Bin, Item};
use crate::util::assertions;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A packing problem (or an attempt at one): a set of items and a set of bins.
///
/// Heuristics never reorder [`Instance::items`] or [`Instance::bins`],
/// they only mutate the contents of the bins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub items: Vec<Item>,
    pub bins: Vec<Bin>,
}

impl Instance {
    pub fn new(items: Vec<Item>, bins: Vec<Bin>) -> Self {
        assert!(
            assertions::dimensions_consistent(&items, &bins),
            "all items and bins should have the same number of dimensions"
        );

        Self { items, bins }
    }

    /// Creates an instance with `n_bins` empty bins with the same capacities as `tbin`.
    pub fn with_uniform_bins(items: Vec<Item>, tbin: &Bin, n_bins: usize) -> Self {
        let bins = (0..n_bins)
            .map(|_| Bin::new(tbin.capacities.clone()))
            .collect_vec();
        Self::new(items, bins)
    }

    /// Removes every item from every bin. Capacities, items and bins themselves are kept.
    pub fn empty(&mut self) {
        self.bins.iter_mut().for_each(|b| b.empty());
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn n_bins(&self) -> usize {
        self.bins.len()
    }

    /// Number of items currently assigned to a bin
    pub fn n_items_packed(&self) -> usize {
        self.bins.iter().map(|b| b.items.len()).sum()
    }

    /// Returns true if every item is assigned to exactly one bin.
    pub fn is_packed(&self) -> bool {
        let mut seen = vec![false; self.items.len()];
        for &id in self.bins.iter().flat_map(|b| b.items.iter()) {
            match seen.get_mut(id) {
                Some(s) if !*s => *s = true,
                _ => return false,
            }
        }
        seen.into_iter().all(|s| s)
    }

    /// Per-dimension fraction of the total bin capacity required by all items.
    /// Dimensions without any capacity are omitted.
    pub fn usage(&self) -> Vec<f64> {
        let Some(dims) = self.bins.first().map(|b| b.dims()) else {
            return vec![];
        };
        (0..dims)
            .filter_map(|k| {
                let cap = self.bins.iter().map(|b| u128::from(b.capacities[k])).sum::<u128>();
                let req = self.items.iter().map(|i| u128::from(i.requirements[k])).sum::<u128>();
                (cap > 0).then(|| req as f64 / cap as f64)
            })
            .collect()
    }
}

/// Lower bound on the number of bins with the capacities of `tbin` needed to pack `items`.
///
/// Totals are accumulated in `u128`, so they cannot overflow.
/// For each dimension the total requirement is divided by the capacity (rounded up), the bound is the maximum over all dimensions.
/// Returns 0 for an empty set of items and `usize::MAX` if a dimension with zero capacity is required.
pub fn lower_bound(items: &[Item], tbin: &Bin) -> usize {
    if items.is_empty() {
        return 0;
    }
    assert!(
        items.iter().all(|i| i.dims() == tbin.dims()),
        "items and bin should have the same number of dimensions"
    );

    (0..tbin.dims())
        .map(|k| {
            let req = items.iter().map(|i| u128::from(i.requirements[k])).sum::<u128>();
            match (req, u128::from(tbin.capacities[k])) {
                (0, _) => 0,
                (_, 0) => usize::MAX,
                (req, cap) => usize::try_from(req.div_ceil(cap)).unwrap_or(usize::MAX),
            }
        })
        .max()
        .unwrap_or(0)
}

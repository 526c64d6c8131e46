use crate::entities::{Bin, Instance, Item};
use log::error;

//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

pub fn dimensions_consistent(items: &[Item], bins: &[Bin]) -> bool {
    let dims = match (items.first(), bins.first()) {
        (Some(i), _) => i.dims(),
        (None, Some(b)) => b.dims(),
        (None, None) => return true,
    };
    items.iter().all(|i| i.dims() == dims)
        && bins
            .iter()
            .all(|b| b.dims() == dims && b.remaining.len() == dims)
}

/// Checks the remaining capacity bookkeeping of a bin against the items it contains.
/// A bin which respects this can never be over capacity, since `remaining` is unsigned.
pub fn bin_remaining_correct(bin: &Bin, items: &[Item]) -> bool {
    (0..bin.dims()).all(|k| {
        let load = bin
            .items
            .iter()
            .map(|&i| u128::from(items[i].requirements[k]))
            .sum::<u128>();
        let capacity = u128::from(bin.capacities[k]);
        let correct = load <= capacity && u128::from(bin.remaining[k]) == capacity - load;
        if !correct {
            error!(
                "bin bookkeeping mismatch in dimension {k}: capacity {}, load {load}, remaining {}",
                bin.capacities[k], bin.remaining[k]
            );
        }
        correct
    })
}

/// Checks that every bin is within capacity and no item is assigned twice.
pub fn instance_consistent(instance: &Instance) -> bool {
    let mut assigned = vec![false; instance.items.len()];
    for bin in &instance.bins {
        if !bin_remaining_correct(bin, &instance.items) {
            return false;
        }
        for &i in &bin.items {
            if assigned[i] {
                error!("item {i} is assigned to more than one bin");
                return false;
            }
            assigned[i] = true;
        }
    }
    true
}

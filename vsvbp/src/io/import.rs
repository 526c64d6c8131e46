use crate::entities::{Bin, Item};
use crate::io::ext_repr::ExtInstance;
use anyhow::{Result, ensure};
use itertools::Itertools;

/// Imports an instance into the library.
/// Every item type is expanded into `demand` separate items, a representative bin is returned alongside.
pub fn import(ext_instance: &ExtInstance) -> Result<(Vec<Item>, Bin)> {
    let d = ext_instance.dimensions;
    ensure!(
        ext_instance.capacities.len() == d,
        "bin has {} capacities, expected {d}",
        ext_instance.capacities.len()
    );
    for (i, ext_item) in ext_instance.items.iter().enumerate() {
        ensure!(
            ext_item.requirements.len() == d,
            "item type {i} has {} requirements, expected {d}",
            ext_item.requirements.len()
        );
    }

    let items = ext_instance
        .items
        .iter()
        .flat_map(|ext_item| {
            (0..ext_item.demand).map(|_| Item::new(ext_item.requirements.clone()))
        })
        .collect_vec();

    Ok((items, Bin::new(ext_instance.capacities.clone())))
}

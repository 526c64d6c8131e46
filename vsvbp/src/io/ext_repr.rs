use serde::{Deserialize, Serialize};

/// Vector bin packing instance: one bin type and a set of item types
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtInstance {
    /// Number of resource dimensions
    pub dimensions: usize,
    /// Capacities of every bin
    pub capacities: Vec<u64>,
    pub items: Vec<ExtItem>,
}

/// Item type with a demand
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtItem {
    pub requirements: Vec<u64>,
    /// Amount of identical items of this type
    pub demand: u64,
}

/// Packing of all items in a number of bins
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtSolution {
    pub n_bins: usize,
    /// Per-dimension bound on the number of bins
    pub lower_bound: usize,
    /// Name of the strategy which found the packing
    pub strategy: String,
    pub bins: Vec<ExtBin>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtBin {
    pub capacities: Vec<u64>,
    pub remaining: Vec<u64>,
    /// Indices of the packed items, in the order of expansion of the item types
    pub items: Vec<usize>,
}

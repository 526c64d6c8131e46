use crate::io::ext_repr::{ExtBin, ExtSolution};
use crate::solver::Solution;

/// Exports a solution out of the library
pub fn export(solution: &Solution) -> ExtSolution {
    ExtSolution {
        n_bins: solution.instance.n_bins(),
        lower_bound: solution.lower_bound,
        strategy: solution.strategy.clone(),
        bins: solution
            .instance
            .bins
            .iter()
            .map(|bin| ExtBin {
                capacities: bin.capacities.clone(),
                remaining: bin.remaining.clone(),
                items: bin.items.clone(),
            })
            .collect(),
    }
}

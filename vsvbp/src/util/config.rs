use serde::{Deserialize, Serialize};

/// Configuration of the [`Optimizer`](crate::solver::Optimizer)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Also try the dot product strategies, which are considerably slower (`O(n*m)` per placement)
    pub use_dot_product: bool,
    /// Seed for the PRNG. If undefined, the solver runs in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            use_dot_product: false,
            prng_seed: Some(0),
        }
    }
}

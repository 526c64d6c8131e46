use serde::{Deserialize, Serialize};
use vsvbp::generator::BinGenerator;
use vsvbp::util::SolverConfig;

/// Configuration of the `vbp-optim` binary
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct VBPConfig {
    /// Configuration of the optimizer, `--use-dp` and `--seed` take precedence
    pub solver: SolverConfig,
    /// Only used by the `benchmark` subcommand
    #[serde(default)]
    pub bench: BenchConfig,
}

/// Configuration of a benchmark over generated instances
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BenchConfig {
    /// Number of bins of the generated instances, every value is combined with every `num_resources`
    pub num_bins: Vec<usize>,
    pub num_resources: Vec<usize>,
    /// Number of generated instances per combination, seeded `0..num_instances`
    pub num_instances: u64,
    /// Minimum fraction of each generated bin's volume which is filled with items
    pub min_fill: f64,
    pub generator: BinGenerator,
    /// Also run the dot product strategies (slow)
    pub use_dot_product: bool,
    /// Also run the item-centric similarity strategy (slow)
    pub use_similarity: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            num_bins: vec![10, 30, 100],
            num_resources: vec![2, 5, 10],
            num_instances: 100,
            min_fill: 0.7,
            generator: BinGenerator::Correlated {
                dev: 0.2,
                rem_cons: 0.8,
                correlated_items: false,
            },
            use_dot_product: false,
            use_similarity: false,
        }
    }
}

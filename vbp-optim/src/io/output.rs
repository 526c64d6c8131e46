use serde::{Deserialize, Serialize};
use vsvbp::io::ext_repr::{ExtInstance, ExtSolution};
use vsvbp::util::SolverConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct VBPOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    /// `null` if no packing was found for any number of bins
    pub solution: Option<ExtSolution>,
    pub config: SolverConfig,
}

use crate::entities::PackingState;
use crate::measures::{Measure, Phase, Target};
use itertools::Itertools;
use rand::prelude::SmallRng;
use serde::{Deserialize, Serialize};

/// How the per-dimension weights of a [`Weighted`] measure are derived
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Normalization {
    /// Inverse of the total remaining capacity of the open bins
    OneOverC,
    /// Inverse of the total requirement of the pending items
    OneOverR,
    /// Total requirement of the pending items divided by the total remaining capacity of the open bins
    ROverC,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Sizes are computed once, during init
    Static,
    /// Sizes are recomputed on every update, from the current residual demand and capacity
    Dynamic,
}

/// Size of an item (bin) is the weighted sum of its requirements (remaining capacities).
///
/// A dimension whose normalizing total is zero gets weight 0.
#[derive(Clone, Copy, Debug)]
pub struct Weighted {
    pub target: Target,
    pub norm: Normalization,
    pub mode: Mode,
}

impl Weighted {
    pub fn new(target: Target, norm: Normalization, mode: Mode) -> Self {
        Self { target, norm, mode }
    }

    /// Weights derived from the current state, `None` if a required list is empty.
    pub fn weights(norm: Normalization, state: &PackingState) -> Option<Vec<f64>> {
        let inverse = |t: u128| match t {
            0 => 0.0,
            t => 1.0 / t as f64,
        };
        match norm {
            Normalization::OneOverC => Some(state.open_remaining()?.into_iter().map(inverse).collect()),
            Normalization::OneOverR => {
                Some(state.pending_requirements()?.into_iter().map(inverse).collect())
            }
            Normalization::ROverC => {
                let req = state.pending_requirements()?;
                let res = state.open_remaining()?;
                Some(
                    req.into_iter()
                        .zip_eq(res)
                        .map(|(r, c)| match c {
                            0 => 0.0,
                            c => r as f64 / c as f64,
                        })
                        .collect(),
                )
            }
        }
    }

    fn apply(&self, state: &mut PackingState) {
        let Some(weights) = Self::weights(self.norm, state) else {
            return;
        };
        let weigh = |v: &[u64]| {
            weights
                .iter()
                .zip(v.iter())
                .map(|(w, x)| w * *x as f64)
                .sum::<f64>()
        };
        match self.target {
            Target::Items => {
                for &i in &state.pending {
                    state.item_sizes[i] = weigh(&state.items[i].requirements);
                }
            }
            Target::Bins => {
                for &b in &state.open {
                    state.bin_sizes[b] = weigh(&state.bins[b].remaining);
                }
            }
        }
    }
}

impl Measure for Weighted {
    fn evaluate(&mut self, state: &mut PackingState, phase: Phase, _rng: &mut SmallRng) {
        match (self.mode, phase) {
            (Mode::Static, Phase::Init) | (Mode::Dynamic, Phase::Update) => self.apply(state),
            (Mode::Static, Phase::Update) | (Mode::Dynamic, Phase::Init) => {}
        }
    }

    fn name(&self) -> &'static str {
        match (self.mode, self.norm) {
            (Mode::Static, Normalization::OneOverC) => "static_1/C",
            (Mode::Static, Normalization::OneOverR) => "static_1/R",
            (Mode::Static, Normalization::ROverC) => "static_R/C",
            (Mode::Dynamic, Normalization::OneOverC) => "dynamic_1/C",
            (Mode::Dynamic, Normalization::OneOverR) => "dynamic_1/R",
            (Mode::Dynamic, Normalization::ROverC) => "dynamic_R/C",
        }
    }
}

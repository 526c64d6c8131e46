//! A measure assigns transient sizes to the pending items and/or open bins of a [`PackingState`].
//! Heuristics read these sizes to decide which item to pack next and in which order to try the bins.
//!
//! Every heuristic run calls each of its measures once with [`Phase::Init`] before the first iteration,
//! and then with [`Phase::Update`] right before the sizes are read.

mod pairwise;
mod random;
mod weighted;

use crate::entities::PackingState;
use rand::prelude::SmallRng;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[doc(inline)]
pub use pairwise::{DotNorm, DotProduct, Similarity};
#[doc(inline)]
pub use random::{DoNothing, Shuffle, ShuffleOnce};
#[doc(inline)]
pub use weighted::{Mode, Normalization, Weighted};

/// Phase of a heuristic run in which a measure is evaluated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Once, before any item is packed
    Init,
    /// Every iteration, right before the sizes are read
    Update,
}

/// Which entities a measure assigns sizes to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    Items,
    Bins,
}

pub trait Measure: Debug {
    /// Updates the sizes in `state`. Measures may also reorder the working lists of `state`.
    fn evaluate(&mut self, state: &mut PackingState, phase: Phase, rng: &mut SmallRng);

    /// Short human-readable identifier
    fn name(&self) -> &'static str;
}

/// An item measure together with a bin measure, the configuration of a heuristic run.
#[derive(Debug)]
pub struct MeasurePair {
    pub item: Box<dyn Measure>,
    pub bin: Box<dyn Measure>,
}

impl MeasurePair {
    pub fn new(item: impl Measure + 'static, bin: impl Measure + 'static) -> Self {
        Self {
            item: Box::new(item),
            bin: Box::new(bin),
        }
    }

    /// Evaluates the item measure, then the bin measure.
    pub fn evaluate(&mut self, state: &mut PackingState, phase: Phase, rng: &mut SmallRng) {
        self.item.evaluate(state, phase, rng);
        self.bin.evaluate(state, phase, rng);
    }

    pub fn nothing() -> Self {
        Self::new(DoNothing, DoNothing)
    }

    pub fn shuffle() -> Self {
        Self::new(Shuffle(Target::Items), Shuffle(Target::Bins))
    }

    pub fn shuffle_once() -> Self {
        Self::new(
            ShuffleOnce::new(Target::Items),
            ShuffleOnce::new(Target::Bins),
        )
    }

    pub fn weighted(mode: Mode, norm: Normalization) -> Self {
        Self::new(
            Weighted::new(Target::Items, norm, mode),
            Weighted::new(Target::Bins, norm, mode),
        )
    }

    /// Dot product measure on the items, which ranks the bins as well
    pub fn dot_product(norm: DotNorm) -> Self {
        Self::new(DotProduct(norm), DoNothing)
    }

    pub fn similarity() -> Self {
        Self::new(Similarity, DoNothing)
    }
}

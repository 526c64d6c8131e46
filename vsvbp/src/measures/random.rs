use crate::entities::PackingState;
use crate::measures::{Measure, Phase, Target};
use rand::Rng;
use rand::prelude::SmallRng;
use rand::seq::SliceRandom;

/// Leaves all sizes untouched
#[derive(Clone, Copy, Debug, Default)]
pub struct DoNothing;

impl Measure for DoNothing {
    fn evaluate(&mut self, _state: &mut PackingState, _phase: Phase, _rng: &mut SmallRng) {}

    fn name(&self) -> &'static str {
        "nothing"
    }
}

/// Assigns a uniformly random size in `[0, 1)` to every target on each update.
#[derive(Clone, Copy, Debug)]
pub struct Shuffle(pub Target);

impl Measure for Shuffle {
    fn evaluate(&mut self, state: &mut PackingState, phase: Phase, rng: &mut SmallRng) {
        if phase == Phase::Init {
            return;
        }
        match self.0 {
            Target::Items => {
                for &i in &state.pending {
                    state.item_sizes[i] = rng.random();
                }
            }
            Target::Bins => {
                for &b in &state.open {
                    state.bin_sizes[b] = rng.random();
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "shuffle"
    }
}

/// Shuffles the working list of its target on the first update after an init, and does nothing afterwards.
/// Sizes are untouched, so ties resolve according to the shuffled order.
#[derive(Clone, Copy, Debug)]
pub struct ShuffleOnce {
    pub target: Target,
    armed: bool,
}

impl ShuffleOnce {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            armed: false,
        }
    }

    /// Whether the next update will shuffle
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

impl Measure for ShuffleOnce {
    fn evaluate(&mut self, state: &mut PackingState, phase: Phase, rng: &mut SmallRng) {
        match (phase, self.armed) {
            (Phase::Init, _) => self.armed = true,
            (Phase::Update, true) => {
                match self.target {
                    Target::Items => state.pending.shuffle(rng),
                    Target::Bins => state.open.shuffle(rng),
                }
                self.armed = false;
            }
            (Phase::Update, false) => {}
        }
    }

    fn name(&self) -> &'static str {
        "shuffle_once"
    }
}

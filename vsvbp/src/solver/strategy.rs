use crate::entities::Instance;
use crate::heuristics::{BalancingMode, Failure, Heuristic};
use crate::measures::{DotNorm, MeasurePair, Mode, Normalization};
use rand::prelude::SmallRng;

/// A heuristic together with the measures that drive it
#[derive(Debug)]
pub struct Strategy {
    pub name: String,
    pub heuristic: Heuristic,
    pub measures: MeasurePair,
}

impl Strategy {
    pub fn new(heuristic: Heuristic, measures: MeasurePair) -> Self {
        let name = format!("{}_{}", heuristic.abbrev(), measures.item.name());
        Self {
            name,
            heuristic,
            measures,
        }
    }

    /// Runs the heuristic on the instance, whose bins are expected to be empty.
    pub fn run(&mut self, instance: &mut Instance, rng: &mut SmallRng) -> Vec<Failure> {
        self.heuristic.run(instance, &mut self.measures, rng)
    }

    /// Item-centric strategy driven by the [`Similarity`](crate::measures::Similarity) measure.
    /// Not part of the [`catalogue`].
    pub fn similarity() -> Self {
        Self::new(Heuristic::ItemCentric, MeasurePair::similarity())
    }
}

const NORMALIZATIONS: [Normalization; 3] = [
    Normalization::OneOverC,
    Normalization::OneOverR,
    Normalization::ROverC,
];

/// All strategies tried by the feasibility oracle, cheapest first.
///
/// 1. item-centric with static measures
/// 2. item-centric with dynamic measures
/// 3. bin-centric with dynamic measures
/// 4. global bin balancing, then single bin balancing
/// 5. item-centric with dot product measures, only if `use_dp`
pub fn catalogue(use_dp: bool) -> Vec<Strategy> {
    let mut strategies = vec![];

    let static_pairs = || {
        [MeasurePair::nothing(), MeasurePair::shuffle_once()]
            .into_iter()
            .chain(NORMALIZATIONS.map(|n| MeasurePair::weighted(Mode::Static, n)))
    };
    let dynamic_pairs = || {
        [MeasurePair::shuffle()]
            .into_iter()
            .chain(NORMALIZATIONS.map(|n| MeasurePair::weighted(Mode::Dynamic, n)))
    };
    let balancing_pairs = || {
        [
            MeasurePair::nothing(),
            MeasurePair::shuffle_once(),
            MeasurePair::shuffle(),
        ]
        .into_iter()
        .chain(NORMALIZATIONS.into_iter().flat_map(|n| {
            [
                MeasurePair::weighted(Mode::Static, n),
                MeasurePair::weighted(Mode::Dynamic, n),
            ]
        }))
    };

    strategies.extend(static_pairs().map(|m| Strategy::new(Heuristic::ItemCentric, m)));
    strategies.extend(dynamic_pairs().map(|m| Strategy::new(Heuristic::ItemCentric, m)));
    strategies.extend(dynamic_pairs().map(|m| Strategy::new(Heuristic::BinCentric, m)));
    for mode in [BalancingMode::Global, BalancingMode::Single] {
        strategies.extend(
            balancing_pairs().map(|m| Strategy::new(Heuristic::BinBalancing(mode), m)),
        );
    }

    if use_dp {
        strategies.extend(
            [DotNorm::Raw, DotNorm::Capacity, DotNorm::Requirement]
                .map(|n| Strategy::new(Heuristic::ItemCentric, MeasurePair::dot_product(n))),
        );
    }

    strategies
}

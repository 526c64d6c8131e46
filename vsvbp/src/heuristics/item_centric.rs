use crate::entities::{Instance, PackingState};
use crate::heuristics::Failure;
use crate::measures::{MeasurePair, Phase};
use log::trace;
use rand::prelude::SmallRng;

/// Item-centric best-fit-decreasing.
///
/// Every iteration, the largest pending item is inserted in the first bin (by increasing size) with enough remaining capacity.
/// The rank of a failure is the number of items processed before it.
pub fn bfd_item_centric(
    instance: &mut Instance,
    measures: &mut MeasurePair,
    rng: &mut SmallRng,
) -> Vec<Failure> {
    let mut state = PackingState::new(instance);
    let mut failures = vec![];

    measures.evaluate(&mut state, Phase::Init, rng);

    let mut iteration = 0;
    while !state.pending.is_empty() {
        measures.evaluate(&mut state, Phase::Update, rng);

        let Some(item) = state.take_largest_pending() else {
            break;
        };
        state.sort_open_ascending();

        match state.first_fit(item) {
            Some(bin) => trace!("[IC] item {item} -> bin {bin}"),
            None => {
                trace!("[IC] item {item} does not fit in any bin");
                failures.push(Failure {
                    rank: iteration,
                    item,
                });
            }
        }
        iteration += 1;
    }

    failures
}

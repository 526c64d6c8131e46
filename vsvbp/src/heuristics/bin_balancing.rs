use crate::entities::{Instance, PackingState};
use crate::heuristics::{BalancingMode, Failure};
use crate::measures::{MeasurePair, Phase};
use log::trace;
use rand::prelude::SmallRng;

/// Bin balancing: spreads the items over the bins instead of filling them one at a time.
///
/// Bins are sorted once by increasing size. The largest pending item is offered to every bin exactly once,
/// in circular order starting at a rotating offset.
/// When a bin accepts it, either the offset moves past that bin ([`BalancingMode::Global`]),
/// or that bin is moved to the end of the list ([`BalancingMode::Single`]).
///
/// The rank of a failure is the number of items processed before it.
pub fn bin_balancing(
    instance: &mut Instance,
    measures: &mut MeasurePair,
    mode: BalancingMode,
    rng: &mut SmallRng,
) -> Vec<Failure> {
    let mut state = PackingState::new(instance);
    let mut failures = vec![];

    measures.evaluate(&mut state, Phase::Init, rng);
    measures.bin.evaluate(&mut state, Phase::Update, rng);
    state.sort_open_ascending();

    let n_bins = state.open.len();
    let mut offset = 0;
    let mut iteration = 0;
    while !state.pending.is_empty() {
        measures.item.evaluate(&mut state, Phase::Update, rng);
        let Some(item) = state.take_largest_pending() else {
            break;
        };

        let mut accepted = None;
        for rank in 0..n_bins {
            let pos = (offset + rank) % n_bins;
            let bin = state.open[pos];
            if state.try_insert(bin, item) {
                accepted = Some((rank, pos));
                break;
            }
        }

        match accepted {
            Some((rank, pos)) => {
                trace!("[BB] item {item} -> bin {}", state.open[pos]);
                match mode {
                    BalancingMode::Global => offset = (offset + rank + 1) % n_bins,
                    BalancingMode::Single => {
                        let bin = state.open.remove(pos);
                        state.open.push(bin);
                    }
                }
            }
            None => {
                trace!("[BB] item {item} does not fit in any bin");
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

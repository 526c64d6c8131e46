use crate::entities::{Instance, PackingState};
use crate::heuristics::Failure;
use crate::measures::{MeasurePair, Phase};
use log::trace;
use rand::prelude::SmallRng;

/// Bin-centric best-fit-decreasing.
///
/// The smallest open bin is filled with pending items, taken by decreasing size, until none of them fits anymore.
/// The bin is then closed and the next one is selected.
///
/// Failures are the items still pending after all bins are closed.
/// The rank of the `j`-th failure is the number of packed items plus `j`.
pub fn bfd_bin_centric(
    instance: &mut Instance,
    measures: &mut MeasurePair,
    rng: &mut SmallRng,
) -> Vec<Failure> {
    let mut state = PackingState::new(instance);
    let n_items = state.pending.len();

    measures.evaluate(&mut state, Phase::Init, rng);
    measures.item.evaluate(&mut state, Phase::Update, rng);

    while !state.open.is_empty() {
        measures.bin.evaluate(&mut state, Phase::Update, rng);
        let Some(bin) = state.smallest_open() else {
            break;
        };

        loop {
            measures.item.evaluate(&mut state, Phase::Update, rng);
            state.sort_pending_descending();
            match state.fill_first(bin) {
                Some(item) => trace!("[BC] item {item} -> bin {bin}"),
                None => break,
            }
        }

        trace!("[BC] closing bin {bin}, remaining {:?}", state.bins[bin].remaining);
        state.open.retain(|b| *b != bin);
    }

    let n_packed = n_items - state.pending.len();
    state
        .pending
        .iter()
        .enumerate()
        .map(|(j, &item)| Failure {
            rank: n_packed + j,
            item,
        })
        .collect()
}

//! Measures that jointly score every (pending item, open bin) pair and rank the best pair first.
//! The chosen bin gets size 0 (others 1) and the chosen item size 2 (others 1),
//! so a best-fit heuristic driven by them always packs the globally best pair.
//!
//! Every call costs `O(|items| * |bins|)`.

use crate::entities::{Bin, BinId, Item, ItemId, PackingState};
use crate::measures::{Measure, Phase};
use rand::prelude::SmallRng;
use serde::{Deserialize, Serialize};

/// Selects the pair whose remaining capacity is closest (in Euclidean distance) to a scalar multiple of the requirements.
#[derive(Clone, Copy, Debug, Default)]
pub struct Similarity;

impl Similarity {
    /// Squared residual of the best-fit projection of the bin's remaining capacity onto the item's requirements.
    /// `None` if the item does not fit.
    pub fn score(item: &Item, bin: &Bin) -> Option<f64> {
        if !bin.feasible(item) {
            return None;
        }
        let pairs = || {
            item.requirements
                .iter()
                .zip(bin.remaining.iter())
                .map(|(&r, &c)| (r as f64, c as f64))
        };
        let (dot, norm_r) = pairs().fold((0.0, 0.0), |(d, n), (r, c)| (d + r * c, n + r * r));
        let x = if norm_r == 0.0 { 0.0 } else { dot / norm_r };
        Some(pairs().map(|(r, c)| (x * r - c).powi(2)).sum())
    }
}

impl Measure for Similarity {
    fn evaluate(&mut self, state: &mut PackingState, phase: Phase, _rng: &mut SmallRng) {
        if phase == Phase::Init {
            return;
        }
        let mut best: Option<(f64, ItemId, BinId)> = None;
        for &i in &state.pending {
            for &b in &state.open {
                if let Some(s) = Self::score(&state.items[i], &state.bins[b]) {
                    if best.is_none_or(|(best_s, _, _)| s < best_s) {
                        best = Some((s, i, b));
                    }
                }
            }
        }
        rank_pair(state, best.map(|(_, i, b)| (i, b)));
    }

    fn name(&self) -> &'static str {
        "similarity"
    }
}

/// Normalization applied to the dot product of requirements and remaining capacity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DotNorm {
    /// Plain dot product
    Raw,
    /// Divided by the squared norm of the remaining capacity
    Capacity,
    /// Divided by the product of the norms of requirements and remaining capacity (cosine similarity)
    Requirement,
}

/// Selects the pair with the largest (normalized) dot product between requirements and remaining capacity.
#[derive(Clone, Copy, Debug)]
pub struct DotProduct(pub DotNorm);

impl DotProduct {
    /// `None` if the item does not fit. A zero denominator yields a score of 0.
    pub fn score(norm: DotNorm, item: &Item, bin: &Bin) -> Option<f64> {
        if !bin.feasible(item) {
            return None;
        }
        let (dot, norm_r, norm_c) = item
            .requirements
            .iter()
            .zip(bin.remaining.iter())
            .map(|(&r, &c)| (r as f64, c as f64))
            .fold((0.0, 0.0, 0.0), |(d, nr, nc), (r, c)| {
                (d + r * c, nr + r * r, nc + c * c)
            });
        let denominator = match norm {
            DotNorm::Raw => return Some(dot),
            DotNorm::Capacity => norm_c,
            DotNorm::Requirement => norm_r.sqrt() * norm_c.sqrt(),
        };
        match denominator == 0.0 {
            true => Some(0.0),
            false => Some(dot / denominator),
        }
    }
}

impl Measure for DotProduct {
    /// Scores are (re)computed in both phases.
    fn evaluate(&mut self, state: &mut PackingState, _phase: Phase, _rng: &mut SmallRng) {
        let mut best: Option<(f64, ItemId, BinId)> = None;
        for &i in &state.pending {
            for &b in &state.open {
                if let Some(s) = Self::score(self.0, &state.items[i], &state.bins[b]) {
                    if best.is_none_or(|(best_s, _, _)| s > best_s) {
                        best = Some((s, i, b));
                    }
                }
            }
        }
        rank_pair(state, best.map(|(_, i, b)| (i, b)));
    }

    fn name(&self) -> &'static str {
        match self.0 {
            DotNorm::Raw => "dp",
            DotNorm::Capacity => "dp_normC",
            DotNorm::Requirement => "dp_normR",
        }
    }
}

/// Ranks the chosen pair first. Without any feasible pair, the first pending item and first open bin are chosen.
fn rank_pair(state: &mut PackingState, best: Option<(ItemId, BinId)>) {
    let (Some(&first_i), Some(&first_b)) = (state.pending.first(), state.open.first()) else {
        return;
    };
    let (best_i, best_b) = best.unwrap_or((first_i, first_b));
    for &b in &state.open {
        state.bin_sizes[b] = if b == best_b { 0.0 } else { 1.0 };
    }
    for &i in &state.pending {
        state.item_sizes[i] = if i == best_i { 2.0 } else { 1.0 };
    }
}

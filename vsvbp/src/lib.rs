//! Heuristics for the Variable-Sized Vector Bin Packing (VSVBP) problem.
//!
//! Items are vectors of per-resource requirements, bins are vectors of per-resource capacities.
//! The [`solver`] combines a catalogue of packing [`heuristics`], each driven by a pair of
//! [`measures`], into a binary search over the number of bins.

/// Items, bins, instances and the per-run packing state
pub mod entities;

/// Scoring functions which drive the selection order of the heuristics
pub mod measures;

/// Item-centric, bin-centric and bin balancing packing heuristics
pub mod heuristics;

/// Feasibility oracle and binary search over the number of bins
pub mod solver;

/// Random generators of feasible instances
pub mod generator;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

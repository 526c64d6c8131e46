use std::path::{Path, PathBuf};

use crate::io;
use crate::io::output::VBPOutput;
use anyhow::{Context, Result};
use log::{info, warn};
use rayon::prelude::*;
use thousands::Separable;
use vsvbp::solver::{Optimizer, Solution};
use vsvbp::util::SolverConfig;

/// Outcome of the optimization of a single instance file
#[derive(Debug, Clone)]
pub struct FileResult {
    pub path: PathBuf,
    pub n_items: usize,
    pub lower_bound: usize,
    /// `None` if no packing was found
    pub n_bins: Option<usize>,
}

/// Parses and optimizes an instance file.
/// If `output_folder` is provided, the instance and its solution are written to `sol_<stem>.json` in it.
pub fn optimize_file(
    path: &Path,
    config: SolverConfig,
    output_folder: Option<&Path>,
) -> Result<FileResult> {
    let ext_instance = io::read_instance(path)?;
    let (items, tbin) = vsvbp::io::import(&ext_instance)
        .with_context(|| format!("invalid instance: {}", path.display()))?;
    let n_items = items.len();
    let lower_bound = vsvbp::entities::lower_bound(&items, &tbin);

    let solution: Option<Solution> = Optimizer::new(items, tbin, config).solve();

    let result = FileResult {
        path: path.to_path_buf(),
        n_items,
        lower_bound,
        n_bins: solution.as_ref().map(|s| s.instance.n_bins()),
    };
    match result.n_bins {
        Some(n_bins) => info!(
            "[RUN] {}: {} items packed in {n_bins} bins",
            path.display(),
            n_items.separate_with_commas()
        ),
        None => warn!(
            "[RUN] {}: no packing found for {} items",
            path.display(),
            n_items.separate_with_commas()
        ),
    }

    if let Some(folder) = output_folder {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .with_context(|| format!("invalid file name: {}", path.display()))?;
        let output = VBPOutput {
            instance: ext_instance,
            solution: solution.as_ref().map(vsvbp::io::export),
            config,
        };
        io::write_json(&output, &folder.join(format!("sol_{stem}.json")))?;
    }

    Ok(result)
}

/// Optimizes all files in parallel, every one of them with its own PRNG seeded from `config`.
/// Results are returned in the order of `paths`.
pub fn optimize_files(
    paths: &[PathBuf],
    config: SolverConfig,
    output_folder: Option<&Path>,
) -> Vec<Result<FileResult>> {
    paths
        .par_iter()
        .map(|path| optimize_file(path, config, output_folder))
        .collect()
}

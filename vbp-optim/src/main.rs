use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser as ClapParser;
use log::{info, warn};
use thousands::Separable;
use vbp_optim::bench::run_benchmark;
use vbp_optim::config::VBPConfig;
use vbp_optim::io;
use vbp_optim::io::cli::{Cli, Command, OptimizeArgs};
use vbp_optim::runner::{optimize_file, optimize_files};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            VBPConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed VBPConfig: {config:?}");

    match args.command {
        Command::Optimize(opt_args) => main_optimize(opt_args, config),
        Command::Benchmark { output_file } => {
            let report = run_benchmark(&config.bench)?;
            io::write_json(&report, &output_file)
        }
    }
}

fn main_optimize(args: OptimizeArgs, config: VBPConfig) -> Result<()> {
    let mut solver_config = config.solver;
    if args.use_dp {
        solver_config.use_dot_product = true;
    }
    if let Some(seed) = args.seed {
        solver_config.prng_seed = Some(seed);
    }

    if let Some(folder) = &args.output_folder {
        fs::create_dir_all(folder)
            .with_context(|| format!("could not create solution folder: {}", folder.display()))?;
    }
    let output_folder = args.output_folder.as_deref();

    match (args.input.file, args.input.dir) {
        (Some(file), _) => {
            optimize_file(&file, solver_config, output_folder)?;
        }
        (None, Some(dir)) => optimize_dir(&dir, args.recursive, solver_config, output_folder)?,
        (None, None) => bail!("either --file or --dir is required"),
    }
    Ok(())
}

fn optimize_dir(
    dir: &Path,
    recursive: bool,
    config: vsvbp::util::SolverConfig,
    output_folder: Option<&Path>,
) -> Result<()> {
    let paths = io::instance_files(dir, recursive)?;
    info!(
        "[MAIN] optimizing {} instances in {}",
        paths.len().separate_with_commas(),
        dir.display()
    );

    let results = optimize_files(&paths, config, output_folder);
    let mut n_solved = 0;
    for (path, result) in paths.iter().zip(results) {
        match result {
            Ok(r) if r.n_bins.is_some() => n_solved += 1,
            Ok(_) => {}
            Err(e) => warn!("[MAIN] {}: {e:#}", path.display()),
        }
    }
    info!(
        "[MAIN] packings found for {n_solved}/{} instances",
        paths.len()
    );
    Ok(())
}

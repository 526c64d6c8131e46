use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info",
        global = true
    )]
    pub log_level: LevelFilter,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Minimizes the number of bins for one instance file or a directory of them
    Optimize(OptimizeArgs),
    /// Runs every strategy on generated instances and writes a report
    Benchmark {
        #[arg(short, long, value_name = "FILE")]
        output_file: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub input: Input,
    /// Recurse into subdirectories of `--dir`
    #[arg(short, long)]
    pub recursive: bool,
    /// Also try the dot product strategies
    #[arg(short, long)]
    pub use_dp: bool,
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,
    /// Folder in which a `sol_<stem>.json` is written for every instance
    #[arg(short, long, value_name = "FOLDER")]
    pub output_folder: Option<PathBuf>,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct Input {
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

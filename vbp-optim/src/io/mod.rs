use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::EPOCH;
use anyhow::{Context, Result};
use itertools::Itertools;
use log::{Level, LevelFilter, info};
use serde::Serialize;
use vsvbp::io::ext_repr::ExtInstance;

pub mod cli;
pub mod output;

pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    let file = File::open(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    vsvbp::io::parse(BufReader::new(file))
        .with_context(|| format!("could not parse instance file: {}", path.display()))
}

/// All files in `dir`, sorted by path. Subdirectories are only visited if `recursive`.
pub fn instance_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = vec![];
    for entry in fs::read_dir(dir).with_context(|| format!("could not read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            if recursive {
                files.extend(instance_files(&path, recursive)?);
            }
        } else {
            files.push(path);
        }
    }
    Ok(files.into_iter().sorted().collect())
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open output file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write output file: {}", path.display()))?;

    info!(
        "json written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or_default()
    );
    Ok(())
}

/// `[LEVEL] [hh:mm:ss] <thread>`, with the time elapsed since [`EPOCH`].
pub fn log_prefix(level: Level, thread_name: &str, elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let (h, m, s) = (secs / 3600, (secs / 60) % 60, secs % 60);
    format!("[{level}] [{h:0>2}:{m:0>2}:{s:0>2}] <{thread_name}>")
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let prefix = log_prefix(record.level(), handle.name().unwrap_or("-"), EPOCH.elapsed());
            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("epoch: {}", jiff::Timestamp::now());
    Ok(())
}

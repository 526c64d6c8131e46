use std::sync::LazyLock;
use std::time::Instant;

pub mod bench;
pub mod config;
pub mod io;
pub mod runner;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

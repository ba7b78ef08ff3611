//! Command implementations

pub mod autoplay;
pub mod bench;
pub mod simple;

pub use autoplay::{AutoplayResult, run_autoplay};
pub use bench::{BenchConfig, BenchResult, run_bench};
pub use simple::{Command, apply_command, parse_command, run_simple};

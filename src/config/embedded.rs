//! Embedded puzzle data
//!
//! Compiled into the binary at build time.

// Include generated corpus from build script
include!(concat!(env!("OUT_DIR"), "/corpus.rs"));

/// Default puzzle: `PRIME` down at (5, 5) on a 30x30 grid
pub const DEFAULT_PUZZLE: &str = include_str!("../../data/default_puzzle.toml");

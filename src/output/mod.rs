//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_autoplay_result, print_bench_result, print_clues, print_completion, print_grid,
};

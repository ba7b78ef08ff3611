//! Placement engine
//!
//! Finds a corpus word that can cross a freshly completed word. The search is a
//! deterministic first-match scan over the corpus in its current order: no
//! backtracking, no scoring, no randomness.

mod engine;

pub use engine::{Placement, find_placement};

//! Cell-level grid state
//!
//! The player's guesses, the solution letters implied by placed words, and the
//! derived occupancy map used for conflict detection.

mod occupancy;
mod solution;
mod store;

pub use occupancy::OccupancyMap;
pub use solution::SolutionGrid;
pub use store::GridStore;

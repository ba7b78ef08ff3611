//! Puzzle state: placed words, the corpus pool and the player's guesses
//!
//! [`Puzzle`] is the single owned state object handed to the placement engine and the
//! interaction layer. Nothing here is global.

mod corpus;
mod registry;
mod state;
mod view;

pub use corpus::CorpusPool;
pub use registry::WordRegistry;
pub use state::Puzzle;
pub use view::{CellStatus, CellView};

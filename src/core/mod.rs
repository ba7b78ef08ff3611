//! Core domain types for the crossword grid
//!
//! Positions, directions, validated word text and placed words. Everything here is
//! plain data with no knowledge of the grid, the registry or the player.

mod error;
mod position;
mod word;

pub use error::CrosswordError;
pub use position::{Dimensions, Direction, Position};
pub use word::{CorpusEntry, PlacedWord, WordError, WordId, WordText};

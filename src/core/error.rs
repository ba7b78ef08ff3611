//! Runtime error type shared by the grid, registry and placement engine

use super::{Dimensions, Position, WordError, WordId};
use thiserror::Error;

/// Recoverable errors raised while editing or growing a puzzle
///
/// None of these should bring down a running session: the interaction layer
/// turns `UnknownWordId` into a no-op and `NoPlacementFound` into a log line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrosswordError {
    #[error("position {position} is outside the {dimensions} grid")]
    OutOfBounds {
        position: Position,
        dimensions: Dimensions,
    },

    #[error("no word with id {0}")]
    UnknownWordId(WordId),

    #[error("word id {0} is already in use")]
    DuplicateWordId(WordId),

    #[error("every word id is in use")]
    IdsExhausted,

    #[error("no corpus word can cross word {word_id}")]
    NoPlacementFound { word_id: WordId },

    #[error("cell {position} already holds '{existing}', cannot place '{incoming}'")]
    ConflictingLetter {
        position: Position,
        existing: char,
        incoming: char,
    },

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
}

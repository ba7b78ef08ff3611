//! Results of input events

use crate::core::{CrosswordError, PlacedWord, WordId};

/// What an input event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Unknown word, out-of-range cell or non-letter key; nothing changed
    Ignored,
    /// Focus or cursor moved
    Moved,
    /// A guess was written or cleared; lists words solved by this edit
    Edited { completions: Vec<Completion> },
}

impl Outcome {
    /// Completions triggered by this event, empty for non-edits
    #[must_use]
    pub fn completions(&self) -> &[Completion] {
        match self {
            Self::Edited { completions } => completions,
            Self::Ignored | Self::Moved => &[],
        }
    }
}

/// A word solved for the first time, and the crossing word it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub word_id: WordId,
    pub placed: Result<PlacedWord, CrosswordError>,
}

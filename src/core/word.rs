//! Word text and placed-word representation
//!
//! A `WordText` stores an uppercase word along with letter position indices used to
//! find crossing letters quickly.

use super::{Direction, Position};
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Identifier of a placed word; also its clue number on the grid
pub type WordId = u32;

/// Validated uppercase word with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordText {
    text: String,
    letter_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl WordText {
    /// Create a new word from a string, normalized to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use crossword_grid::core::WordText;
    ///
    /// let word = WordText::new("prime").unwrap();
    /// assert_eq!(word.as_str(), "PRIME");
    ///
    /// assert!(WordText::new("").is_err());
    /// assert!(WordText::new("tw0").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letter_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &letter) in text.as_bytes().iter().enumerate() {
            letter_positions.entry(letter).or_default().push(i);
        }

        Ok(Self {
            text,
            letter_positions,
        })
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false`: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Letter at `index`
    ///
    /// # Panics
    /// Panics if `index >= len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, index: usize) -> u8 {
        self.text.as_bytes()[index]
    }

    /// All indices where `letter` appears, ascending
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.letter_positions
            .get(&letter.to_ascii_uppercase())
            .map_or(&[], Vec::as_slice)
    }

    /// Case-insensitive comparison against raw text
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.text.eq_ignore_ascii_case(other.trim())
    }
}

impl fmt::Display for WordText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A word fixed on the grid
///
/// Immutable once placed: letter `i` lives at `anchor` advanced `i` cells along
/// `direction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    id: WordId,
    text: WordText,
    anchor: Position,
    direction: Direction,
    clue: String,
}

impl PlacedWord {
    #[must_use]
    pub fn new(
        id: WordId,
        text: WordText,
        anchor: Position,
        direction: Direction,
        clue: impl Into<String>,
    ) -> Self {
        Self {
            id,
            text,
            anchor,
            direction,
            clue: clue.into(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> WordId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn text(&self) -> &WordText {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn anchor(&self) -> Position {
        self.anchor
    }

    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// Grid position of letter `index`
    #[inline]
    #[must_use]
    pub const fn cell(&self, index: usize) -> Position {
        self.anchor.advance(self.direction, index)
    }

    /// Every cell of the word, in letter order
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len()).map(|i| self.cell(i))
    }

    /// Every `(cell, solution letter)` pair, in letter order
    pub fn letters(&self) -> impl Iterator<Item = (Position, u8)> + '_ {
        self.text
            .letters()
            .iter()
            .enumerate()
            .map(|(i, &letter)| (self.cell(i), letter))
    }

    /// Letter index of `position` within this word, if the word covers it
    #[must_use]
    pub fn index_of(&self, position: Position) -> Option<usize> {
        let (along, across, fixed) = match self.direction {
            Direction::Across => (position.x, position.y, self.anchor.y),
            Direction::Down => (position.y, position.x, self.anchor.x),
        };
        let start = match self.direction {
            Direction::Across => self.anchor.x,
            Direction::Down => self.anchor.y,
        };
        if across != fixed || along < start {
            return None;
        }
        let index = along - start;
        (index < self.len()).then_some(index)
    }

    #[inline]
    #[must_use]
    pub fn covers(&self, position: Position) -> bool {
        self.index_of(position).is_some()
    }

    /// Clue line as shown to the player, e.g. `2. Down: Top Text`
    #[must_use]
    pub fn clue_line(&self) -> String {
        format!("{}. {}: {}", self.id, self.direction, self.clue)
    }
}

/// An unused candidate word available for auto-placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    text: WordText,
    clue: String,
}

impl CorpusEntry {
    /// # Errors
    /// Returns `WordError` if `text` is not a valid word
    pub fn new(text: &str, clue: impl Into<String>) -> Result<Self, WordError> {
        Ok(Self {
            text: WordText::new(text)?,
            clue: clue.into(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn text(&self) -> &WordText {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }
}

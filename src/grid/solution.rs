//! Solution letters implied by the placed words

use crate::core::{CrosswordError, Dimensions, PlacedWord, Position};

/// Solution letter of every covered cell
///
/// Crossing words must agree on their shared cell. A disagreement is rejected with
/// `ConflictingLetter`; the layout never silently keeps the last letter written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionGrid {
    dimensions: Dimensions,
    cells: Vec<Option<u8>>,
}

impl SolutionGrid {
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            cells: vec![None; dimensions.area()],
        }
    }

    /// Lay out every word, failing on the first out-of-grid cell or letter conflict
    ///
    /// # Errors
    /// Returns `OutOfBounds` or `ConflictingLetter`
    pub fn from_words<'a>(
        dimensions: Dimensions,
        words: impl IntoIterator<Item = &'a PlacedWord>,
    ) -> Result<Self, CrosswordError> {
        let mut grid = Self::new(dimensions);
        for word in words {
            grid.insert(word)?;
        }
        Ok(grid)
    }

    /// Solution letter at `position`, `None` if uncovered or outside the grid
    #[must_use]
    pub fn letter_at(&self, position: Position) -> Option<u8> {
        if self.dimensions.contains(position) {
            self.cells[self.dimensions.index(position)]
        } else {
            None
        }
    }

    /// Verify `word` fits in the grid and agrees with every letter already laid out
    ///
    /// # Errors
    /// Returns `OutOfBounds` for the first cell outside the grid, or
    /// `ConflictingLetter` for the first cell holding a different letter
    pub fn check(&self, word: &PlacedWord) -> Result<(), CrosswordError> {
        for (position, letter) in word.letters() {
            if !self.dimensions.contains(position) {
                return Err(CrosswordError::OutOfBounds {
                    position,
                    dimensions: self.dimensions,
                });
            }
            if let Some(existing) = self.cells[self.dimensions.index(position)]
                && existing != letter
            {
                return Err(CrosswordError::ConflictingLetter {
                    position,
                    existing: char::from(existing),
                    incoming: char::from(letter),
                });
            }
        }
        Ok(())
    }

    /// Check and then lay out `word`; the grid is untouched on error
    ///
    /// # Errors
    /// See [`SolutionGrid::check`]
    pub fn insert(&mut self, word: &PlacedWord) -> Result<(), CrosswordError> {
        self.check(word)?;
        for (position, letter) in word.letters() {
            let index = self.dimensions.index(position);
            self.cells[index] = Some(letter);
        }
        Ok(())
    }
}

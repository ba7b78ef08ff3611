//! The player's guesses

use crate::core::{CrosswordError, Dimensions, Position};

/// Bounded map from position to the player's current guess
///
/// Every access is bounds-checked; an out-of-range position is reported as
/// `CrosswordError::OutOfBounds` instead of faulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridStore {
    dimensions: Dimensions,
    cells: Vec<Option<u8>>,
}

impl GridStore {
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            cells: vec![None; dimensions.area()],
        }
    }

    /// Current guess at `position`, `None` when the cell is empty
    ///
    /// # Errors
    /// Returns `OutOfBounds` if `position` is outside the grid
    pub fn get(&self, position: Position) -> Result<Option<char>, CrosswordError> {
        let index = self.checked_index(position)?;
        Ok(self.cells[index].map(char::from))
    }

    /// Store `letter` (uppercased) at `position`
    ///
    /// # Errors
    /// Returns `OutOfBounds` for positions outside the grid and `InvalidLetter` for
    /// anything other than an ASCII letter
    pub fn set(&mut self, position: Position, letter: char) -> Result<(), CrosswordError> {
        if !letter.is_ascii_alphabetic() {
            return Err(CrosswordError::InvalidLetter(letter));
        }
        let index = self.checked_index(position)?;
        self.cells[index] = Some(letter.to_ascii_uppercase() as u8);
        Ok(())
    }

    /// Empty the cell at `position`
    ///
    /// # Errors
    /// Returns `OutOfBounds` if `position` is outside the grid
    pub fn clear(&mut self, position: Position) -> Result<(), CrosswordError> {
        let index = self.checked_index(position)?;
        self.cells[index] = None;
        Ok(())
    }

    /// Number of non-empty cells
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn checked_index(&self, position: Position) -> Result<usize, CrosswordError> {
        if self.dimensions.contains(position) {
            Ok(self.dimensions.index(position))
        } else {
            Err(CrosswordError::OutOfBounds {
                position,
                dimensions: self.dimensions,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_clear() {
        let mut grid = GridStore::new(Dimensions::new(5, 5));
        let p = Position::new(2, 3);

        assert_eq!(grid.get(p), Ok(None));
        grid.set(p, 'q').unwrap();
        assert_eq!(grid.get(p), Ok(Some('Q')));
        assert_eq!(grid.filled(), 1);

        grid.clear(p).unwrap();
        assert_eq!(grid.get(p), Ok(None));
        assert_eq!(grid.filled(), 0);
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let mut grid = GridStore::new(Dimensions::new(3, 4));
        let outside = Position::new(4, 0);

        assert!(matches!(
            grid.get(outside),
            Err(CrosswordError::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.set(outside, 'A'),
            Err(CrosswordError::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.clear(Position::new(0, 3)),
            Err(CrosswordError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn rejects_non_letters() {
        let mut grid = GridStore::new(Dimensions::new(3, 3));
        assert_eq!(
            grid.set(Position::new(0, 0), '7'),
            Err(CrosswordError::InvalidLetter('7'))
        );
        assert_eq!(grid.get(Position::new(0, 0)), Ok(None));
    }
}

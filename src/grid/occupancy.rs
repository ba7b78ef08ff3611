//! Occupancy map derived from the placed words

use crate::core::{Dimensions, PlacedWord, Position};

/// Which cells are covered by at least one placed word
///
/// Always built from scratch from the full word list; there is no incremental
/// update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyMap {
    dimensions: Dimensions,
    cells: Vec<bool>,
}

impl OccupancyMap {
    /// Build the map from every placed word
    ///
    /// Cells outside `dimensions` are ignored.
    #[must_use]
    pub fn from_words<'a>(
        dimensions: Dimensions,
        words: impl IntoIterator<Item = &'a PlacedWord>,
    ) -> Self {
        let mut cells = vec![false; dimensions.area()];
        for word in words {
            for position in word.cells() {
                if dimensions.contains(position) {
                    cells[dimensions.index(position)] = true;
                }
            }
        }
        Self { dimensions, cells }
    }

    /// `false` for positions outside the grid
    #[inline]
    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.dimensions.contains(position) && self.cells[self.dimensions.index(position)]
    }

    /// In bounds and not covered by any word
    #[inline]
    #[must_use]
    pub fn is_free(&self, position: Position) -> bool {
        self.dimensions.contains(position) && !self.cells[self.dimensions.index(position)]
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Debug dump: one line per row, `X` for occupied cells
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.dimensions.area() + self.dimensions.rows);
        for row in self.cells.chunks(self.dimensions.cols.max(1)) {
            for &occupied in row {
                out.push(if occupied { 'X' } else { ' ' });
            }
            out.push('\n');
        }
        out
    }
}

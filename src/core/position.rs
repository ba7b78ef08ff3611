//! Grid coordinates, word directions and grid bounds

use serde::{Deserialize, Serialize};
use std::fmt;

/// A grid cell coordinate: `x` is the column, `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Position `steps` cells forward along `direction`
    #[inline]
    #[must_use]
    pub const fn advance(self, direction: Direction, steps: usize) -> Self {
        match direction {
            Direction::Across => Self::new(self.x + steps, self.y),
            Direction::Down => Self::new(self.x, self.y + steps),
        }
    }

    /// Position `steps` cells backward along `direction`
    ///
    /// Returns `None` if that would leave the grid through the top or left edge.
    #[inline]
    #[must_use]
    pub const fn retreat(self, direction: Direction, steps: usize) -> Option<Self> {
        match direction {
            Direction::Across => match self.x.checked_sub(steps) {
                Some(x) => Some(Self::new(x, self.y)),
                None => None,
            },
            Direction::Down => match self.y.checked_sub(steps) {
                Some(y) => Some(Self::new(self.x, y)),
                None => None,
            },
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction a word runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// The direction a crossing word must take
    #[inline]
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Across => "Across",
            Self::Down => "Down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Configured grid size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    #[inline]
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Whether `position` lies inside `[0, cols) x [0, rows)`
    #[inline]
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x < self.cols && position.y < self.rows
    }

    /// Total number of cells
    #[inline]
    #[must_use]
    pub const fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Row-major index of an in-bounds position
    #[inline]
    pub(crate) const fn index(&self, position: Position) -> usize {
        position.y * self.cols + position.x
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

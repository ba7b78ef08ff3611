//! Read-only cell data for the renderers

use crate::core::{Position, WordId};

/// How the player's guess compares with the solution letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStatus {
    Empty,
    Correct,
    Wrong,
}

/// Everything a renderer needs to draw one covered cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub position: Position,
    pub solution: char,
    pub guess: Option<char>,
    pub status: CellStatus,
    /// Ids of words starting on this cell
    pub numbers: Vec<WordId>,
    /// Part of at least one word the player has completed
    pub completed: bool,
}

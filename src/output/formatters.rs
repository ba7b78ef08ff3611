//! Formatting utilities for terminal output

use crate::core::{Position, WordId};
use crate::puzzle::{CellView, Puzzle};

/// Smallest rectangle holding every placed word, widened by `margin` cells and
/// clamped to the grid
///
/// Returns `(top_left, bottom_right)` inclusive, or `None` for an empty puzzle.
#[must_use]
pub fn word_bounds(puzzle: &Puzzle, margin: usize) -> Option<(Position, Position)> {
    let dims = puzzle.dimensions();
    let mut cells = puzzle.registry().all().iter().flat_map(|w| w.cells());
    let first = cells.next()?;
    let (min, max) = cells.fold((first, first), |(min, max), p| {
        (
            Position::new(min.x.min(p.x), min.y.min(p.y)),
            Position::new(max.x.max(p.x), max.y.max(p.y)),
        )
    });

    Some((
        Position::new(min.x.saturating_sub(margin), min.y.saturating_sub(margin)),
        Position::new(
            (max.x + margin).min(dims.cols - 1),
            (max.y + margin).min(dims.rows - 1),
        ),
    ))
}

/// Two-character cell: the letter shown plus a trailing space
///
/// Blank cells are `. `, covered cells without a guess `_ `. With `reveal` the
/// solution letter is shown instead of the guess.
#[must_use]
pub fn cell_text(view: Option<&CellView>, reveal: bool) -> String {
    let letter = match view {
        None => '.',
        Some(v) if reveal => v.solution,
        Some(v) => v.guess.unwrap_or('_'),
    };
    format!("{letter} ")
}

/// Plain rows of the grid, cropped to the placed words plus a one-cell margin
#[must_use]
pub fn grid_lines(puzzle: &Puzzle, reveal: bool) -> Vec<String> {
    let Some((top_left, bottom_right)) = word_bounds(puzzle, 1) else {
        return Vec::new();
    };

    (top_left.y..=bottom_right.y)
        .map(|y| {
            (top_left.x..=bottom_right.x)
                .map(|x| cell_text(puzzle.cell_view(Position::new(x, y)).as_ref(), reveal))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Word numbers for an anchor cell, e.g. `2` or `2/5`
#[must_use]
pub fn number_label(numbers: &[WordId]) -> String {
    numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dimensions, Direction, PlacedWord, WordText};
    use crate::puzzle::CorpusPool;

    fn prime_puzzle() -> Puzzle {
        let prime = PlacedWord::new(
            2,
            WordText::new("PRIME").unwrap(),
            Position::new(5, 5),
            Direction::Down,
            "Top Text",
        );
        Puzzle::new(Dimensions::new(30, 30), [prime], CorpusPool::default()).unwrap()
    }

    #[test]
    fn bounds_include_margin() {
        let puzzle = prime_puzzle();
        assert_eq!(
            word_bounds(&puzzle, 0),
            Some((Position::new(5, 5), Position::new(5, 9)))
        );
        assert_eq!(
            word_bounds(&puzzle, 1),
            Some((Position::new(4, 4), Position::new(6, 10)))
        );
    }

    #[test]
    fn bounds_clamp_to_grid() {
        let word = PlacedWord::new(
            1,
            WordText::new("cat").unwrap(),
            Position::new(0, 0),
            Direction::Across,
            "",
        );
        let puzzle = Puzzle::new(Dimensions::new(1, 3), [word], CorpusPool::default()).unwrap();
        assert_eq!(
            word_bounds(&puzzle, 2),
            Some((Position::new(0, 0), Position::new(2, 0)))
        );
    }

    #[test]
    fn empty_puzzle_has_no_lines() {
        let puzzle =
            Puzzle::new(Dimensions::new(5, 5), Vec::new(), CorpusPool::default()).unwrap();
        assert!(word_bounds(&puzzle, 1).is_none());
        assert!(grid_lines(&puzzle, true).is_empty());
    }

    #[test]
    fn grid_lines_show_guesses_or_solution() {
        let mut puzzle = prime_puzzle();
        puzzle.guesses_mut().set(Position::new(5, 5), 'p').unwrap();

        let guesses = grid_lines(&puzzle, false);
        assert_eq!(guesses.len(), 7);
        assert_eq!(guesses[0], ". . .");
        assert_eq!(guesses[1], ". P .");
        assert_eq!(guesses[2], ". _ .");

        let solution = grid_lines(&puzzle, true);
        assert_eq!(solution[3], ". I .");
        assert_eq!(solution[5], ". E .");
    }

    #[test]
    fn number_labels() {
        assert_eq!(number_label(&[]), "");
        assert_eq!(number_label(&[2]), "2");
        assert_eq!(number_label(&[2, 5]), "2/5");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}

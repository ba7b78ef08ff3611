//! Autoplay command
//!
//! Solves words one after another by typing their solutions, so crossing words keep
//! getting placed until the corpus runs dry.

use crate::core::{CrosswordError, PlacedWord, WordId};
use crate::interaction::Session;
use crate::puzzle::Puzzle;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of an autoplay run
#[derive(Debug, Clone)]
pub struct AutoplayResult {
    pub puzzle: Puzzle,
    /// Words typed in
    pub rounds: usize,
    /// Completions fired, including words solved as a side effect
    pub solved: usize,
    /// Crossing words placed, in order
    pub placed: Vec<PlacedWord>,
    /// Completions where the crossing search came up empty
    pub failures: Vec<(WordId, CrosswordError)>,
    pub duration: Duration,
}

impl AutoplayResult {
    /// Share of completions that produced a crossing word
    #[must_use]
    pub fn placement_rate(&self) -> f64 {
        if self.solved == 0 {
            return 0.0;
        }
        self.placed.len() as f64 / self.solved as f64
    }
}

/// Type the solution of the first unsolved word, up to `max_rounds` times
///
/// Stops early once every placed word has been solved.
#[must_use]
pub fn run_autoplay(puzzle: Puzzle, max_rounds: usize) -> AutoplayResult {
    let start = Instant::now();
    let mut session = Session::new(puzzle);
    let mut rounds = 0;
    let mut solved = 0;
    let mut placed = Vec::new();
    let mut failures = Vec::new();

    while rounds < max_rounds {
        let Some((id, letters)) = next_unsolved(session.puzzle()) else {
            debug!(rounds, "every word solved");
            break;
        };
        rounds += 1;

        for (index, letter) in letters.into_iter().enumerate() {
            let outcome = session.on_letter_entered(id, index, letter);
            for completion in outcome.completions() {
                solved += 1;
                match &completion.placed {
                    Ok(word) => placed.push(word.clone()),
                    Err(err) => failures.push((completion.word_id, err.clone())),
                }
            }
        }
    }

    AutoplayResult {
        puzzle: session.into_puzzle(),
        rounds,
        solved,
        placed,
        failures,
        duration: start.elapsed(),
    }
}

/// First word in registry order whose completion has not fired yet
fn next_unsolved(puzzle: &Puzzle) -> Option<(WordId, Vec<char>)> {
    let registry = puzzle.registry();
    registry
        .all()
        .iter()
        .find(|word| !registry.is_notified(word.id()))
        .map(|word| {
            let letters = word.text().letters().iter().map(|&b| char::from(b)).collect();
            (word.id(), letters)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dimensions, Direction, Position, WordText};
    use crate::puzzle::CorpusPool;

    fn prime_puzzle(corpus: &[(&str, &str)]) -> Puzzle {
        let prime = PlacedWord::new(
            2,
            WordText::new("PRIME").unwrap(),
            Position::new(5, 5),
            Direction::Down,
            "Top Text",
        );
        Puzzle::new(
            Dimensions::new(30, 30),
            [prime],
            CorpusPool::from_pairs(corpus).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn first_round_places_side() {
        let result = run_autoplay(prime_puzzle(&[("side", "abcd"), ("blue", "bcdd")]), 1);
        assert_eq!(result.rounds, 1);
        assert_eq!(result.solved, 1);
        assert_eq!(result.placed.len(), 1);
        assert_eq!(result.placed[0].text().as_str(), "SIDE");
        assert_eq!(result.placed[0].anchor(), Position::new(4, 7));
        assert!(result.failures.is_empty());
    }

    #[test]
    fn runs_until_every_word_is_solved() {
        let result = run_autoplay(prime_puzzle(&[("side", "abcd"), ("blue", "bcdd")]), 100);

        // PRIME places SIDE, SIDE places BLUE down through its E, BLUE finds nothing
        assert_eq!(result.rounds, 3);
        assert_eq!(result.solved, 3);
        let texts: Vec<_> = result.placed.iter().map(|w| w.text().as_str()).collect();
        assert_eq!(texts, vec!["SIDE", "BLUE"]);
        assert_eq!(result.placed[1].anchor(), Position::new(7, 4));
        assert_eq!(
            result.failures,
            vec![(4, CrosswordError::NoPlacementFound { word_id: 4 })]
        );
        assert!((result.placement_rate() - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.puzzle.solved_count(), 3);
        assert!(result.puzzle.corpus().is_empty());
    }

    #[test]
    fn zero_rounds_does_nothing() {
        let result = run_autoplay(prime_puzzle(&[("side", "abcd")]), 0);
        assert_eq!(result.rounds, 0);
        assert_eq!(result.solved, 0);
        assert!(result.placement_rate().abs() < f64::EPSILON);
        assert_eq!(result.puzzle.registry().len(), 1);
    }

    #[test]
    fn crossings_never_disagree() {
        let corpus = crate::config::embedded_corpus().unwrap();
        let prime = PlacedWord::new(
            2,
            WordText::new("PRIME").unwrap(),
            Position::new(5, 5),
            Direction::Down,
            "",
        );
        let puzzle = Puzzle::new(Dimensions::new(30, 30), [prime], corpus).unwrap();
        let result = run_autoplay(puzzle, 50);

        let solution = result.puzzle.registry().solution();
        for word in result.puzzle.registry().all() {
            for (position, letter) in word.letters() {
                assert_eq!(solution.letter_at(position), Some(letter));
            }
        }
    }
}

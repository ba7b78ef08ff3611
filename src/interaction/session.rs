//! Focus tracking and event handlers

use super::{Completion, Outcome};
use crate::core::{Position, WordId};
use crate::puzzle::Puzzle;
use tracing::{debug, info, warn};

/// A player's session over a puzzle
///
/// Owns the puzzle. All mutation happens synchronously inside the event handlers.
#[derive(Debug, Clone)]
pub struct Session {
    puzzle: Puzzle,
    focus: Option<WordId>,
    cursor: usize,
}

impl Session {
    #[must_use]
    pub const fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            focus: None,
            cursor: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub fn into_puzzle(self) -> Puzzle {
        self.puzzle
    }

    /// Focused word id
    #[inline]
    #[must_use]
    pub const fn focus(&self) -> Option<WordId> {
        self.focus
    }

    /// Letter index of the highlighted cell in the focused word
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Grid position of the highlighted cell
    #[must_use]
    pub fn cursor_position(&self) -> Option<Position> {
        let word = self.puzzle.word(self.focus?)?;
        Some(word.cell(self.cursor))
    }

    /// Clue line of the focused word, e.g. `2. Down: Top Text`
    #[must_use]
    pub fn current_clue(&self) -> Option<String> {
        self.focus
            .and_then(|id| self.puzzle.word(id))
            .map(crate::core::PlacedWord::clue_line)
    }

    /// A letter typed into cell `cell_index` of word `word_id`
    ///
    /// Writes the guess, focuses the word and advances the cursor (clamped to the
    /// last letter). Every word covering the edited cell is then checked for
    /// completion.
    pub fn on_letter_entered(&mut self, word_id: WordId, cell_index: usize, letter: char) -> Outcome {
        let Some(word) = self.puzzle.word(word_id) else {
            debug!(word_id, "letter for unknown word ignored");
            return Outcome::Ignored;
        };
        if cell_index >= word.len() || !letter.is_ascii_alphabetic() {
            return Outcome::Ignored;
        }
        let position = word.cell(cell_index);
        let last = word.len() - 1;

        if let Err(err) = self.puzzle.guesses_mut().set(position, letter) {
            warn!(%err, "guess rejected");
            return Outcome::Ignored;
        }

        self.focus = Some(word_id);
        self.cursor = (cell_index + 1).min(last);

        Outcome::Edited {
            completions: self.check_completions(position),
        }
    }

    /// Backspace on cell `cell_index` of word `word_id`
    ///
    /// Clears the cell and moves the cursor back one letter (clamped at 0).
    pub fn on_backspace(&mut self, word_id: WordId, cell_index: usize) -> Outcome {
        let Some(word) = self.puzzle.word(word_id) else {
            debug!(word_id, "backspace for unknown word ignored");
            return Outcome::Ignored;
        };
        if cell_index >= word.len() {
            return Outcome::Ignored;
        }
        let position = word.cell(cell_index);

        if let Err(err) = self.puzzle.guesses_mut().clear(position) {
            warn!(%err, "clear rejected");
            return Outcome::Ignored;
        }

        self.focus = Some(word_id);
        self.cursor = cell_index.saturating_sub(1);
        Outcome::Edited {
            completions: Vec::new(),
        }
    }

    /// Focus the next word in registry order, wrapping around
    ///
    /// With nothing focused, the first word gets focus.
    pub fn on_tab_pressed(&mut self) -> Outcome {
        let words = self.puzzle.registry().all();
        if words.is_empty() {
            return Outcome::Ignored;
        }
        let next = self
            .focus
            .and_then(|id| self.puzzle.registry().position_of(id))
            .map_or(0, |i| (i + 1) % words.len());

        self.focus = Some(words[next].id());
        self.cursor = 0;
        Outcome::Moved
    }

    /// Click on cell `cell_index` of word `word_id`
    ///
    /// Clicking inside the already focused word switches to a perpendicular word
    /// sharing that cell, if there is one.
    pub fn on_cell_clicked(&mut self, word_id: WordId, cell_index: usize) -> Outcome {
        let Some(word) = self.puzzle.word(word_id) else {
            return Outcome::Ignored;
        };
        if cell_index >= word.len() {
            return Outcome::Ignored;
        }

        if self.focus == Some(word_id) {
            let position = word.cell(cell_index);
            let crossing = self
                .puzzle
                .registry()
                .words_at(position)
                .find(|other| other.direction() != word.direction())
                .and_then(|other| other.index_of(position).map(|i| (other.id(), i)));

            if let Some((other_id, index)) = crossing {
                self.focus = Some(other_id);
                self.cursor = index;
                return Outcome::Moved;
            }
        }

        self.focus = Some(word_id);
        self.cursor = cell_index;
        Outcome::Moved
    }

    /// Click on a grid position, e.g. from the mouse
    ///
    /// Prefers the focused word when it covers the cell, so a second click on the
    /// same cell toggles direction.
    pub fn on_position_clicked(&mut self, position: Position) -> Outcome {
        let registry = self.puzzle.registry();
        let target = self
            .focus
            .and_then(|id| registry.find(id))
            .filter(|w| w.covers(position))
            .or_else(|| registry.words_at(position).next())
            .and_then(|w| w.index_of(position).map(|i| (w.id(), i)));

        match target {
            Some((id, index)) => self.on_cell_clicked(id, index),
            None => Outcome::Ignored,
        }
    }

    /// Type into the highlighted cell of the focused word
    pub fn type_letter(&mut self, letter: char) -> Outcome {
        match self.focus {
            Some(id) => self.on_letter_entered(id, self.cursor, letter),
            None => Outcome::Ignored,
        }
    }

    /// Backspace on the highlighted cell of the focused word
    pub fn backspace(&mut self) -> Outcome {
        match self.focus {
            Some(id) => self.on_backspace(id, self.cursor),
            None => Outcome::Ignored,
        }
    }

    /// A word's guesses all match its solution
    ///
    /// Runs at most once per word; later calls, and calls for words that are not
    /// actually matched, return `None`. The crossing search failing is reported in
    /// the completion, never as a hard error.
    pub fn on_word_fully_matched(&mut self, word_id: WordId) -> Option<Completion> {
        if !self.puzzle.is_word_matched(word_id) || !self.puzzle.mark_notified(word_id) {
            return None;
        }
        info!(word_id, "word solved");

        let placed = self.puzzle.place_crossing(word_id);
        if let Err(err) = &placed {
            warn!(word_id, %err, "no crossing word placed");
        }
        Some(Completion { word_id, placed })
    }

    fn check_completions(&mut self, position: Position) -> Vec<Completion> {
        let solved: Vec<WordId> = self
            .puzzle
            .registry()
            .words_at(position)
            .map(crate::core::PlacedWord::id)
            .filter(|&id| {
                self.puzzle.is_word_matched(id) && !self.puzzle.registry().is_notified(id)
            })
            .collect();

        solved
            .into_iter()
            .filter_map(|id| self.on_word_fully_matched(id))
            .collect()
    }
}

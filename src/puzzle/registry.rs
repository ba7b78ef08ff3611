//! Ordered collection of placed words

use crate::core::{CrosswordError, Dimensions, Direction, PlacedWord, Position, WordId, WordText};
use crate::grid::SolutionGrid;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Placed words in insertion order
///
/// Every word is validated against the grid bounds and the solution letters of the
/// words already placed, so crossing words can never disagree. Ids are unique and
/// never reused. Each word carries an explicit "already notified" flag so completion
/// fires once per word.
#[derive(Debug, Clone)]
pub struct WordRegistry {
    words: Vec<PlacedWord>,
    notified: Vec<bool>,
    index: FxHashMap<WordId, usize>,
    solution: SolutionGrid,
    // `None` once a word holds `WordId::MAX`
    next_id: Option<WordId>,
}

impl WordRegistry {
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            words: Vec::new(),
            notified: Vec::new(),
            index: FxHashMap::default(),
            solution: SolutionGrid::new(dimensions),
            next_id: Some(1),
        }
    }

    /// Append a new word under a freshly allocated id
    ///
    /// # Errors
    /// Returns `OutOfBounds` or `ConflictingLetter` if the word does not fit, and
    /// `IdsExhausted` once no id above every existing one is left
    pub fn add(
        &mut self,
        text: WordText,
        anchor: Position,
        direction: Direction,
        clue: impl Into<String>,
    ) -> Result<WordId, CrosswordError> {
        let id = self.next_id.ok_or(CrosswordError::IdsExhausted)?;
        self.insert(PlacedWord::new(id, text, anchor, direction, clue))?;
        Ok(id)
    }

    /// Append a word that already carries its id (initial configuration)
    ///
    /// # Errors
    /// Returns `DuplicateWordId`, `OutOfBounds` or `ConflictingLetter`
    pub fn insert(&mut self, word: PlacedWord) -> Result<(), CrosswordError> {
        if self.index.contains_key(&word.id()) {
            return Err(CrosswordError::DuplicateWordId(word.id()));
        }
        self.solution.insert(&word)?;

        debug!(
            id = word.id(),
            text = %word.text(),
            anchor = %word.anchor(),
            direction = %word.direction(),
            "word registered"
        );

        self.next_id = match (self.next_id, word.id().checked_add(1)) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };
        self.index.insert(word.id(), self.words.len());
        self.words.push(word);
        self.notified.push(false);
        Ok(())
    }

    /// All placed words in insertion order
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[PlacedWord] {
        &self.words
    }

    #[must_use]
    pub fn find(&self, id: WordId) -> Option<&PlacedWord> {
        self.index.get(&id).map(|&i| &self.words[i])
    }

    /// Insertion-order index of a word
    #[must_use]
    pub fn position_of(&self, id: WordId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Words covering `position`, in insertion order
    pub fn words_at(&self, position: Position) -> impl Iterator<Item = &PlacedWord> + '_ {
        self.words.iter().filter(move |w| w.covers(position))
    }

    /// Ids of words whose first letter sits on `position`
    pub fn numbers_at(&self, position: Position) -> impl Iterator<Item = WordId> + '_ {
        self.words
            .iter()
            .filter(move |w| w.anchor() == position)
            .map(PlacedWord::id)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn solution(&self) -> &SolutionGrid {
        &self.solution
    }

    /// Set the word's notified flag
    ///
    /// Returns `true` only the first time it is called for a known id.
    pub fn mark_notified(&mut self, id: WordId) -> bool {
        match self.index.get(&id) {
            Some(&i) if !self.notified[i] => {
                self.notified[i] = true;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_notified(&self, id: WordId) -> bool {
        self.index.get(&id).is_some_and(|&i| self.notified[i])
    }

    /// Number of words whose completion has already fired
    #[must_use]
    pub fn notified_count(&self) -> usize {
        self.notified.iter().filter(|&&n| n).count()
    }
}

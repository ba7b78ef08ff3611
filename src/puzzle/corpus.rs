//! Pool of unused candidate words

use crate::core::{CorpusEntry, WordError};
use rand::Rng;
use rand::seq::SliceRandom;

/// Candidate words consumed in order, without replacement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusPool {
    entries: Vec<CorpusEntry>,
}

impl CorpusPool {
    #[must_use]
    pub const fn new(entries: Vec<CorpusEntry>) -> Self {
        Self { entries }
    }

    /// Build a pool from `(word, clue)` pairs
    ///
    /// # Errors
    /// Returns the first `WordError` among the pairs
    ///
    /// # Examples
    /// ```
    /// use crossword_grid::puzzle::CorpusPool;
    ///
    /// let pool = CorpusPool::from_pairs(&[("side", "abcd"), ("blue", "bcdd")]).unwrap();
    /// assert_eq!(pool.len(), 2);
    /// ```
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, WordError> {
        let entries = pairs
            .iter()
            .map(|&(text, clue)| CorpusEntry::new(text, clue))
            .collect::<Result<_, _>>()?;
        Ok(Self { entries })
    }

    /// Entries in scan order
    pub fn iter(&self) -> impl Iterator<Item = &CorpusEntry> + '_ {
        self.entries.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry whose text matches `text`, ignoring case
    ///
    /// Returns the number of entries removed.
    pub fn remove_matching(&mut self, text: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !entry.text().matches(text));
        before - self.entries.len()
    }

    /// Reorder the pool; scanning stays first-match over the new order
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.entries.shuffle(rng);
    }
}

//! Owned puzzle state

use super::{CellStatus, CellView, CorpusPool, WordRegistry};
use crate::core::{CrosswordError, Dimensions, Direction, PlacedWord, Position, WordId, WordText};
use crate::grid::{GridStore, OccupancyMap};
use crate::placement::find_placement;
use tracing::{info, trace};

/// Everything a running puzzle needs: placed words, the corpus pool, the player's
/// guesses and the occupancy map derived from the words
///
/// The occupancy map is rebuilt in full whenever a word is added, so a placement
/// search always sees every word placed so far.
#[derive(Debug, Clone)]
pub struct Puzzle {
    dimensions: Dimensions,
    registry: WordRegistry,
    corpus: CorpusPool,
    guesses: GridStore,
    occupancy: OccupancyMap,
}

impl Puzzle {
    /// Lay out the initial words
    ///
    /// # Errors
    /// Returns the first `DuplicateWordId`, `OutOfBounds` or `ConflictingLetter`
    /// among `words`
    pub fn new(
        dimensions: Dimensions,
        words: impl IntoIterator<Item = PlacedWord>,
        corpus: CorpusPool,
    ) -> Result<Self, CrosswordError> {
        let mut registry = WordRegistry::new(dimensions);
        for word in words {
            registry.insert(word)?;
        }
        let occupancy = OccupancyMap::from_words(dimensions, registry.all());

        Ok(Self {
            dimensions,
            registry,
            corpus,
            guesses: GridStore::new(dimensions),
            occupancy,
        })
    }

    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[inline]
    #[must_use]
    pub const fn registry(&self) -> &WordRegistry {
        &self.registry
    }

    #[inline]
    #[must_use]
    pub const fn corpus(&self) -> &CorpusPool {
        &self.corpus
    }

    #[inline]
    pub fn corpus_mut(&mut self) -> &mut CorpusPool {
        &mut self.corpus
    }

    #[inline]
    #[must_use]
    pub const fn guesses(&self) -> &GridStore {
        &self.guesses
    }

    #[inline]
    pub fn guesses_mut(&mut self) -> &mut GridStore {
        &mut self.guesses
    }

    #[inline]
    #[must_use]
    pub const fn occupancy(&self) -> &OccupancyMap {
        &self.occupancy
    }

    #[must_use]
    pub fn word(&self, id: WordId) -> Option<&PlacedWord> {
        self.registry.find(id)
    }

    /// Whether every cell of the word holds its solution letter
    #[must_use]
    pub fn is_word_matched(&self, id: WordId) -> bool {
        self.registry.find(id).is_some_and(|word| {
            word.letters().all(|(position, letter)| {
                self.guesses.get(position) == Ok(Some(char::from(letter)))
            })
        })
    }

    /// Find a corpus word crossing `source_id`, consume it from the corpus and
    /// register it
    ///
    /// Returns the newly placed word.
    ///
    /// # Errors
    /// Returns `UnknownWordId` if `source_id` is not placed, `NoPlacementFound`
    /// when no corpus word can cross it, or `IdsExhausted`. The corpus is left
    /// untouched on error.
    pub fn place_crossing(&mut self, source_id: WordId) -> Result<PlacedWord, CrosswordError> {
        let source = self
            .registry
            .find(source_id)
            .ok_or(CrosswordError::UnknownWordId(source_id))?;

        let placement = find_placement(source, &self.corpus, &self.occupancy)?;

        let text = placement.text.as_str().to_owned();
        let new_id = self.add_word(
            placement.text,
            placement.anchor,
            placement.direction,
            placement.clue,
        )?;
        self.corpus.remove_matching(&text);
        let placed = self
            .registry
            .find(new_id)
            .cloned()
            .ok_or(CrosswordError::UnknownWordId(new_id))?;

        info!(
            source = source_id,
            id = new_id,
            text = %placed.text(),
            offset = placement.offset,
            cross_index = placement.cross_index,
            anchor = %placed.anchor(),
            direction = %placed.direction(),
            remaining_corpus = self.corpus.len(),
            "crossing word placed"
        );
        Ok(placed)
    }

    /// Register a word and rebuild the occupancy map
    ///
    /// # Errors
    /// Returns `OutOfBounds` or `ConflictingLetter` if the word does not fit
    pub fn add_word(
        &mut self,
        text: WordText,
        anchor: Position,
        direction: Direction,
        clue: impl Into<String>,
    ) -> Result<WordId, CrosswordError> {
        let id = self.registry.add(text, anchor, direction, clue)?;
        self.occupancy = OccupancyMap::from_words(self.dimensions, self.registry.all());
        trace!(
            occupied = self.occupancy.occupied_count(),
            occupancy = %self.occupancy.render(),
            "occupancy rebuilt"
        );
        Ok(id)
    }

    /// Presentation data for a covered cell, `None` for blank cells
    #[must_use]
    pub fn cell_view(&self, position: Position) -> Option<CellView> {
        let solution = char::from(self.registry.solution().letter_at(position)?);
        let guess = self.guesses.get(position).ok().flatten();
        let status = match guess {
            None => CellStatus::Empty,
            Some(letter) if letter == solution => CellStatus::Correct,
            Some(_) => CellStatus::Wrong,
        };
        let completed = self
            .registry
            .words_at(position)
            .any(|word| self.registry.is_notified(word.id()));

        Some(CellView {
            position,
            solution,
            guess,
            status,
            numbers: self.registry.numbers_at(position).collect(),
            completed,
        })
    }

    /// Number of placed words whose completion has fired
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.registry.notified_count()
    }

    pub(crate) fn mark_notified(&mut self, id: WordId) -> bool {
        self.registry.mark_notified(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn prime_puzzle() -> Puzzle {
        let prime = PlacedWord::new(
            2,
            WordText::new("PRIME").unwrap(),
            Position::new(5, 5),
            Direction::Down,
            "Top Text",
        );
        let corpus = CorpusPool::from_pairs(&[("side", "abcd"), ("blue", "bcdd")]).unwrap();
        Puzzle::new(Dimensions::new(30, 30), [prime], corpus).unwrap()
    }

    fn type_word(puzzle: &mut Puzzle, id: WordId, text: &str) {
        let cells: Vec<_> = puzzle.word(id).unwrap().cells().collect();
        for (position, letter) in cells.into_iter().zip(text.chars()) {
            puzzle.guesses_mut().set(position, letter).unwrap();
        }
    }

    #[test]
    fn matched_only_when_every_letter_is_right() {
        let mut puzzle = prime_puzzle();
        assert!(!puzzle.is_word_matched(2));

        type_word(&mut puzzle, 2, "prine");
        assert!(!puzzle.is_word_matched(2));

        type_word(&mut puzzle, 2, "prime");
        assert!(puzzle.is_word_matched(2));
        assert!(!puzzle.is_word_matched(99));
    }

    #[test]
    fn place_crossing_consumes_corpus_and_rebuilds_occupancy() {
        let mut puzzle = prime_puzzle();
        assert!(!puzzle.occupancy().is_occupied(Position::new(4, 7)));

        let placed = puzzle.place_crossing(2).unwrap();
        assert_eq!(placed.text().as_str(), "SIDE");
        assert_eq!(placed.id(), 3);

        let side = puzzle.word(3).unwrap();
        assert_eq!(side.anchor(), Position::new(4, 7));
        assert_eq!(side.direction(), Direction::Across);
        assert_eq!(side.clue(), "abcd");

        assert_eq!(puzzle.corpus().len(), 1);
        assert_eq!(
            puzzle.corpus().iter().next().unwrap().text().as_str(),
            "BLUE"
        );
        assert!(puzzle.occupancy().is_occupied(Position::new(4, 7)));
        assert!(puzzle.occupancy().is_occupied(Position::new(7, 7)));
    }

    #[test]
    fn place_crossing_unknown_source() {
        let mut puzzle = prime_puzzle();
        assert_eq!(
            puzzle.place_crossing(7),
            Err(CrosswordError::UnknownWordId(7))
        );
    }

    #[test]
    fn exhausted_corpus_reports_no_placement() {
        let mut puzzle = prime_puzzle();
        puzzle.place_crossing(2).unwrap();
        // BLUE shares no letter with PRIME at offsets 1..4
        assert_eq!(
            puzzle.place_crossing(2),
            Err(CrosswordError::NoPlacementFound { word_id: 2 })
        );
        assert_eq!(puzzle.registry().len(), 2);
        assert_eq!(puzzle.corpus().len(), 1);
    }

    #[test]
    fn failed_registration_keeps_the_corpus_word() {
        let prime = PlacedWord::new(
            WordId::MAX,
            WordText::new("PRIME").unwrap(),
            Position::new(5, 5),
            Direction::Down,
            "Top Text",
        );
        let corpus = CorpusPool::from_pairs(&[("side", "abcd")]).unwrap();
        let mut puzzle = Puzzle::new(Dimensions::new(30, 30), [prime], corpus).unwrap();

        assert_eq!(
            puzzle.place_crossing(WordId::MAX),
            Err(CrosswordError::IdsExhausted)
        );
        assert_eq!(puzzle.corpus().len(), 1);
        assert_eq!(puzzle.registry().len(), 1);
        assert!(!puzzle.occupancy().is_occupied(Position::new(4, 7)));
    }

    #[test]
    fn cell_view_reports_status_and_numbers() {
        let mut puzzle = prime_puzzle();
        assert!(puzzle.cell_view(Position::new(0, 0)).is_none());

        let anchor = puzzle.cell_view(Position::new(5, 5)).unwrap();
        assert_eq!(anchor.solution, 'P');
        assert_eq!(anchor.status, CellStatus::Empty);
        assert_eq!(anchor.numbers, vec![2]);

        puzzle.guesses_mut().set(Position::new(5, 5), 'p').unwrap();
        puzzle.guesses_mut().set(Position::new(5, 6), 'x').unwrap();
        assert_eq!(
            puzzle.cell_view(Position::new(5, 5)).unwrap().status,
            CellStatus::Correct
        );
        let wrong = puzzle.cell_view(Position::new(5, 6)).unwrap();
        assert_eq!(wrong.status, CellStatus::Wrong);
        assert!(wrong.numbers.is_empty());
        assert!(!wrong.completed);
    }

    #[test]
    fn initial_conflict_rejected() {
        let words = [
            PlacedWord::new(
                9,
                WordText::new("BBBBB").unwrap(),
                Position::new(0, 5),
                Direction::Across,
                "",
            ),
            PlacedWord::new(
                10,
                WordText::new("CCCCC").unwrap(),
                Position::new(0, 5),
                Direction::Across,
                "",
            ),
        ];
        let result = Puzzle::new(Dimensions::new(50, 60), words, CorpusPool::default());
        assert!(matches!(
            result,
            Err(CrosswordError::ConflictingLetter { .. })
        ));
    }

    proptest! {
        #[test]
        fn grown_words_never_disagree(
            seed in "[a-e]{3,6}",
            candidates in prop::collection::vec("[a-e]{2,6}", 0..12),
            rounds in 1usize..8,
        ) {
            let start = PlacedWord::new(
                1,
                WordText::new(seed.as_str()).unwrap(),
                Position::new(6, 6),
                Direction::Across,
                "",
            );
            let pairs: Vec<(&str, &str)> = candidates.iter().map(|c| (c.as_str(), "")).collect();
            let corpus = CorpusPool::from_pairs(&pairs).unwrap();
            let mut puzzle = Puzzle::new(Dimensions::new(16, 16), [start], corpus).unwrap();

            for round in 0..rounds {
                let ids: Vec<WordId> = puzzle.registry().all().iter().map(PlacedWord::id).collect();
                let source = ids[round % ids.len()];
                let _ = puzzle.place_crossing(source);
            }

            let solution = puzzle.registry().solution();
            for word in puzzle.registry().all() {
                prop_assert!(puzzle.dimensions().contains(word.cell(word.len() - 1)));
                for (position, letter) in word.letters() {
                    prop_assert_eq!(solution.letter_at(position), Some(letter));
                    prop_assert!(puzzle.occupancy().is_occupied(position));
                }
            }
        }
    }
}

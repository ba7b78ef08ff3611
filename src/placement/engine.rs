//! Crossing-word search

use crate::core::{CrosswordError, Direction, PlacedWord, Position, WordId, WordText};
use crate::grid::OccupancyMap;
use crate::puzzle::CorpusPool;
use tracing::{debug, trace};

/// A conflict-free spot for a corpus word crossing a source word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Source word being crossed
    pub source_id: WordId,
    /// The chosen corpus word and its clue
    pub text: WordText,
    pub clue: String,
    /// Letter index in the source word where the crossing happens
    pub offset: usize,
    /// Letter index in the new word that lands on the crossing cell
    pub cross_index: usize,
    /// Shared cell
    pub crossing: Position,
    /// First letter of the new word
    pub anchor: Position,
    pub direction: Direction,
}

/// Find the first corpus word that can cross `source`
///
/// For each corpus entry in order, offsets into `source` are tried from 1 up to
/// `min(len(source), len(candidate))`. A source letter matching candidate letter
/// `k` puts the candidate perpendicular to `source` with letter `k` on the shared
/// cell. Every other candidate cell must be inside the grid and unoccupied;
/// otherwise the next `k`, then the next offset, is tried.
///
/// `occupancy` must be built from the current word list.
///
/// # Errors
/// Returns `NoPlacementFound` when no entry has a conflict-free crossing.
pub fn find_placement(
    source: &PlacedWord,
    corpus: &CorpusPool,
    occupancy: &OccupancyMap,
) -> Result<Placement, CrosswordError> {
    let direction = source.direction().perpendicular();

    for entry in corpus.iter() {
        let candidate = entry.text();
        let limit = source.len().min(candidate.len());

        for offset in 1..limit {
            let crossing = source.cell(offset);
            let letter = source.text().letter_at(offset);

            for &cross_index in candidate.positions_of(letter) {
                let Some(anchor) = crossing.retreat(direction, cross_index) else {
                    trace!(candidate = %candidate, offset, cross_index, "runs off the grid edge");
                    continue;
                };

                if span_is_free(occupancy, anchor, direction, candidate.len(), cross_index) {
                    debug!(
                        source = source.id(),
                        candidate = %candidate,
                        offset,
                        cross_index,
                        anchor = %anchor,
                        "crossing found"
                    );
                    return Ok(Placement {
                        source_id: source.id(),
                        text: candidate.clone(),
                        clue: entry.clue().to_string(),
                        offset,
                        cross_index,
                        crossing,
                        anchor,
                        direction,
                    });
                }

                trace!(candidate = %candidate, offset, cross_index, "conflict");
            }
        }
    }

    Err(CrosswordError::NoPlacementFound {
        word_id: source.id(),
    })
}

/// Every cell except the shared one must be in the grid and unoccupied
fn span_is_free(
    occupancy: &OccupancyMap,
    anchor: Position,
    direction: Direction,
    len: usize,
    cross_index: usize,
) -> bool {
    (0..len)
        .filter(|&i| i != cross_index)
        .all(|i| occupancy.is_free(anchor.advance(direction, i)))
}

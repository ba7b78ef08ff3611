//! Puzzle file loading
//!
//! ```toml
//! rows = 30
//! cols = 30
//!
//! [[words]]
//! id = 2
//! text = "PRIME"
//! position = { x = 5, y = 5 }
//! direction = "down"
//! clue = "Top Text"
//!
//! [[corpus]]
//! text = "side"
//! clue = "abcd"
//! ```

use super::embedded::{CORPUS, DEFAULT_PUZZLE};
use crate::core::{
    CorpusEntry, CrosswordError, Dimensions, Direction, PlacedWord, Position, WordError, WordId,
    WordText,
};
use crate::puzzle::{CorpusPool, Puzzle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Largest grid a puzzle file may ask for
pub const MAX_CELLS: usize = 1 << 20;

/// Startup configuration errors; these are fatal
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read puzzle file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse puzzle: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(
        "grid must have at least one row and one column and at most {max} cells, got {rows}x{cols}",
        max = MAX_CELLS
    )]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("word {id}: {source}")]
    InvalidWord { id: WordId, source: WordError },

    #[error("corpus word '{text}': {source}")]
    InvalidCorpusWord { text: String, source: WordError },

    #[error("initial layout: {0}")]
    Layout(#[from] CrosswordError),
}

/// A whole puzzle description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub rows: usize,
    pub cols: usize,
    #[serde(default)]
    pub words: Vec<WordConfig>,
    /// Falls back to the embedded corpus when absent
    #[serde(default)]
    pub corpus: Option<Vec<CorpusConfig>>,
}

/// One initial word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordConfig {
    pub id: WordId,
    pub text: String,
    pub position: Position,
    pub direction: Direction,
    #[serde(default)]
    pub clue: String,
}

/// One corpus entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusConfig {
    pub text: String,
    #[serde(default)]
    pub clue: String,
}

impl PuzzleConfig {
    /// Load a puzzle from a TOML file
    ///
    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be read and
    /// `ConfigError::Parse` if it is not a valid puzzle
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("loading puzzle file");
        let content = fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        info!(
            rows = config.rows,
            cols = config.cols,
            words = config.words.len(),
            "puzzle file loaded"
        );
        Ok(config)
    }

    /// Parse a puzzle from TOML text
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` on malformed input
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// The puzzle compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded data is malformed
    pub fn default_puzzle() -> Result<Self, ConfigError> {
        Self::from_toml(DEFAULT_PUZZLE)
    }

    /// Validate the description and lay out the initial words
    ///
    /// # Errors
    /// Returns `InvalidDimensions` for an empty or oversized grid, `InvalidWord` /
    /// `InvalidCorpusWord` for malformed text, and `Layout` when initial words
    /// leave the grid, reuse an id or disagree on a shared cell
    pub fn build(&self) -> Result<Puzzle, ConfigError> {
        let area = self.rows.checked_mul(self.cols).unwrap_or(usize::MAX);
        if area == 0 || area > MAX_CELLS {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let dimensions = Dimensions::new(self.rows, self.cols);

        let words = self
            .words
            .iter()
            .map(|w| {
                let text = WordText::new(w.text.as_str())
                    .map_err(|source| ConfigError::InvalidWord { id: w.id, source })?;
                Ok(PlacedWord::new(
                    w.id,
                    text,
                    w.position,
                    w.direction,
                    w.clue.clone(),
                ))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let corpus = match &self.corpus {
            Some(entries) => CorpusPool::new(
                entries
                    .iter()
                    .map(|e| {
                        CorpusEntry::new(&e.text, e.clue.clone()).map_err(|source| {
                            ConfigError::InvalidCorpusWord {
                                text: e.text.clone(),
                                source,
                            }
                        })
                    })
                    .collect::<Result<_, _>>()?,
            ),
            None => embedded_corpus()?,
        };

        Ok(Puzzle::new(dimensions, words, corpus)?)
    }
}

/// The corpus compiled into the binary
///
/// # Errors
/// Only fails if the embedded data is malformed
pub fn embedded_corpus() -> Result<CorpusPool, ConfigError> {
    CORPUS
        .iter()
        .map(|&(text, clue)| {
            CorpusEntry::new(text, clue).map_err(|source| ConfigError::InvalidCorpusWord {
                text: text.to_string(),
                source,
            })
        })
        .collect::<Result<_, _>>()
        .map(CorpusPool::new)
}

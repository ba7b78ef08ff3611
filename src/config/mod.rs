//! Puzzle configuration
//!
//! Puzzles are described in TOML: grid size, initial words and an optional corpus.
//! The default puzzle and corpus are compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{CORPUS, CORPUS_COUNT, DEFAULT_PUZZLE};
pub use loader::{ConfigError, CorpusConfig, PuzzleConfig, WordConfig, embedded_corpus};

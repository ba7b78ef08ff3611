//! Crossword Grid
//!
//! A crossword grid engine: words live on a fixed grid, the player types guesses,
//! and every word solved for the first time pulls a crossing word out of a corpus
//! and places it perpendicular to the solved one.
//!
//! # Quick Start
//!
//! ```rust
//! use crossword_grid::config::PuzzleConfig;
//! use crossword_grid::interaction::Session;
//!
//! let puzzle = PuzzleConfig::default_puzzle()?.build()?;
//! let mut session = Session::new(puzzle);
//!
//! session.on_tab_pressed();
//! for letter in "prime".chars() {
//!     session.type_letter(letter);
//! }
//! // PRIME is solved, so a crossing word has been added
//! assert_eq!(session.puzzle().registry().len(), 2);
//! # Ok::<(), crossword_grid::config::ConfigError>(())
//! ```

// Core domain types
pub mod core;

// Letter storage and occupancy
pub mod grid;

// Placed words, corpus and puzzle state
pub mod puzzle;

// Crossing-word search
pub mod placement;

// Focus and input events
pub mod interaction;

// Puzzle files and embedded data
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

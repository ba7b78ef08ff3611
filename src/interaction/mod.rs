//! Interaction layer
//!
//! Turns player input (letters, Backspace, Tab, clicks) into focus changes and
//! guess edits, and grows the puzzle when a word is solved.

mod outcome;
mod session;

pub use outcome::{Completion, Outcome};
pub use session::Session;

//! Simple interactive CLI mode
//!
//! Line-based play without the TUI

use crate::core::WordId;
use crate::interaction::{Outcome, Session};
use crate::output::{print_clues, print_completion, print_grid};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tab,
    Click { word_id: WordId, index: usize },
    Type(String),
    Back,
    Show,
    Reveal,
    Help,
    Quit,
}

/// Parse a line of input; `None` for anything unrecognized
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let verb = parts.next()?.to_lowercase();

    let command = match verb.as_str() {
        "tab" | "t" => Command::Tab,
        "click" | "c" => {
            let word_id = parts.next()?.parse().ok()?;
            let index = parts.next().map_or(Some(0), |s| s.parse().ok())?;
            Command::Click { word_id, index }
        }
        "type" | "y" => {
            let letters: String = parts.by_ref().collect();
            if letters.is_empty() {
                return None;
            }
            Command::Type(letters)
        }
        "back" | "b" => Command::Back,
        "show" | "s" => Command::Show,
        "reveal" => Command::Reveal,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return None,
    };

    // Trailing garbage makes the line invalid
    if matches!(command, Command::Type(_)) || parts.next().is_none() {
        Some(command)
    } else {
        None
    }
}

/// Apply a command to the session, returning the outcomes of each event it fired
pub fn apply_command(session: &mut Session, command: &Command) -> Vec<Outcome> {
    match command {
        Command::Tab => vec![session.on_tab_pressed()],
        Command::Click { word_id, index } => vec![session.on_cell_clicked(*word_id, *index)],
        Command::Type(letters) => letters.chars().map(|c| session.type_letter(c)).collect(),
        Command::Back => vec![session.backspace()],
        Command::Show | Command::Reveal | Command::Help | Command::Quit => Vec::new(),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(mut session: Session) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Crossword - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    print_grid(session.puzzle(), false);
    print_clues(session.puzzle());

    loop {
        if let Some(clue) = session.current_clue() {
            println!(
                "\n{} {} (cell {})",
                "Focus:".bright_cyan(),
                clue.bright_white().bold(),
                session.cursor() + 1
            );
        }

        let Some(line) = get_user_input(">")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        if line.is_empty() {
            continue;
        }

        let Some(command) = parse_command(&line) else {
            println!("❌ Unknown command. Type 'help' for the list.");
            continue;
        };

        match command {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Help => print_help(),
            Command::Show => {
                print_grid(session.puzzle(), false);
                print_clues(session.puzzle());
            }
            Command::Reveal => print_grid(session.puzzle(), true),
            _ => {
                let outcomes = apply_command(&mut session, &command);
                if outcomes.iter().all(|o| *o == Outcome::Ignored) {
                    println!("{}", "Nothing happened (no word focused?)".bright_black());
                }

                let completions: Vec<_> = outcomes.iter().flat_map(Outcome::completions).collect();
                for completion in &completions {
                    print_completion(completion);
                }
                if !completions.is_empty() {
                    print_grid(session.puzzle(), false);
                }
            }
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  tab                 focus the next word");
    println!("  click <id> [index]  focus a word's cell (again to switch direction)");
    println!("  type <letters>      type into the focused word");
    println!("  back                clear the highlighted cell");
    println!("  show / reveal       print the grid (reveal shows the solution)");
    println!("  quit                leave\n");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt} ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dimensions, Direction, PlacedWord, Position, WordText};
    use crate::puzzle::{CorpusPool, Puzzle};

    fn prime_session() -> Session {
        let prime = PlacedWord::new(
            2,
            WordText::new("PRIME").unwrap(),
            Position::new(5, 5),
            Direction::Down,
            "Top Text",
        );
        let corpus = CorpusPool::from_pairs(&[("side", "abcd"), ("blue", "bcdd")]).unwrap();
        Session::new(Puzzle::new(Dimensions::new(30, 30), [prime], corpus).unwrap())
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("tab"), Some(Command::Tab));
        assert_eq!(parse_command("  TAB  "), Some(Command::Tab));
        assert_eq!(
            parse_command("click 2 3"),
            Some(Command::Click {
                word_id: 2,
                index: 3
            })
        );
        assert_eq!(
            parse_command("click 4"),
            Some(Command::Click {
                word_id: 4,
                index: 0
            })
        );
        assert_eq!(
            parse_command("type pr ime"),
            Some(Command::Type("prime".to_string()))
        );
        assert_eq!(parse_command("back"), Some(Command::Back));
        assert_eq!(parse_command("show"), Some(Command::Show));
        assert_eq!(parse_command("q"), Some(Command::Quit));
    }

    #[test]
    fn rejects_bad_commands() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("dance"), None);
        assert_eq!(parse_command("click"), None);
        assert_eq!(parse_command("click two"), None);
        assert_eq!(parse_command("click 2 x"), None);
        assert_eq!(parse_command("type"), None);
        assert_eq!(parse_command("tab now"), None);
    }

    #[test]
    fn typing_prime_places_side() {
        let mut session = prime_session();
        apply_command(&mut session, &Command::Tab);
        let outcomes = apply_command(&mut session, &Command::Type("prime".to_string()));

        assert_eq!(outcomes.len(), 5);
        let completions: Vec<_> = outcomes.iter().flat_map(Outcome::completions).collect();
        assert_eq!(completions.len(), 1);
        assert_eq!(completions[0].word_id, 2);
        assert_eq!(
            completions[0].placed.as_ref().map(|w| w.text().as_str()),
            Ok("SIDE")
        );
    }

    #[test]
    fn typing_without_focus_is_ignored() {
        let mut session = prime_session();
        let outcomes = apply_command(&mut session, &Command::Type("p".to_string()));
        assert_eq!(outcomes, vec![Outcome::Ignored]);
        assert!(apply_command(&mut session, &Command::Show).is_empty());
    }
}

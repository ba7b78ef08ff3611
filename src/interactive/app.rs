//! TUI application state and logic

use super::rendering::{grid_area, viewport};
use crate::interaction::{Completion, Outcome, Session};
use crate::logging;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use tracing::{error, info};

/// Application state
pub struct App {
    pub session: Session,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Tab or click a cell to pick a word, then type",
            MessageStyle::Info,
        );
        app
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.session.on_tab_pressed();
            }
            KeyCode::Backspace => {
                self.session.backspace();
            }
            KeyCode::Char(c)
                if c.is_ascii_alphabetic()
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let outcome = self.session.type_letter(c);
                self.report(&outcome);
            }
            _ => {}
        }
    }

    /// Handle a mouse event; `area` is the full terminal area
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let view = viewport(&self.session, grid_area(area));
        if let Some(position) = view.position_at(mouse.column, mouse.row) {
            self.session.on_position_clicked(position);
        }
    }

    fn report(&mut self, outcome: &Outcome) {
        for completion in outcome.completions() {
            let (text, style) = describe(completion);
            self.add_message(&text, style);
        }
    }
}

/// Message text for a completion
fn describe(completion: &Completion) -> (String, MessageStyle) {
    match &completion.placed {
        Ok(word) => (
            format!(
                "Word {} solved! {} added {} at {}",
                completion.word_id,
                word.text(),
                word.direction(),
                word.anchor()
            ),
            MessageStyle::Success,
        ),
        Err(err) => (
            format!("Word {} solved, {err}", completion.word_id),
            MessageStyle::Error,
        ),
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Log to file to avoid interfering with the TUI
    logging::init_file(logging::TUI_LOG_FILE)?;
    info!("starting TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(%err, "TUI exited with an error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    info!(solved = app.session.puzzle().solved_count(), "leaving TUI");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dimensions, Direction, PlacedWord, Position, WordText};
    use crate::puzzle::{CorpusPool, Puzzle};

    fn app() -> App {
        let prime = PlacedWord::new(
            2,
            WordText::new("PRIME").unwrap(),
            Position::new(5, 5),
            Direction::Down,
            "Top Text",
        );
        let corpus = CorpusPool::from_pairs(&[("side", "abcd"), ("blue", "bcdd")]).unwrap();
        let puzzle = Puzzle::new(Dimensions::new(30, 30), [prime], corpus).unwrap();
        App::new(Session::new(puzzle))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn typing_a_word_reports_the_crossing() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        for c in "prime".chars() {
            press(&mut app, KeyCode::Char(c));
        }

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Success);
        assert!(last.text.contains("SIDE"));
        assert_eq!(app.session.puzzle().registry().len(), 2);
    }

    #[test]
    fn backspace_clears_highlighted_cell() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.session.cursor(), 2);

        // Cursor sits on the empty third cell, so R survives the first backspace
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.cursor(), 1);
        assert_eq!(
            app.session.puzzle().guesses().get(Position::new(5, 6)),
            Ok(Some('R'))
        );

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.cursor(), 0);
        assert_eq!(
            app.session.puzzle().guesses().get(Position::new(5, 6)),
            Ok(None)
        );
    }

    #[test]
    fn quit_keys() {
        let mut escaped = app();
        press(&mut escaped, KeyCode::Char('q'));
        assert!(!escaped.should_quit);

        press(&mut escaped, KeyCode::Esc);
        assert!(escaped.should_quit);

        let mut other = app();
        other.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(other.should_quit);
    }

    #[test]
    fn modified_letters_are_not_typed() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        app.handle_key(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::ALT));
        assert_eq!(app.session.cursor(), 0);
        assert_eq!(app.session.puzzle().guesses().filled(), 0);

        app.handle_key(KeyEvent::new(KeyCode::Char('P'), KeyModifiers::SHIFT));
        assert_eq!(app.session.cursor(), 1);
        assert_eq!(
            app.session.puzzle().guesses().get(Position::new(5, 5)),
            Ok(Some('P'))
        );
    }

    #[test]
    fn click_focuses_the_cell_under_the_mouse() {
        let mut app = app();
        let area = Rect::new(0, 0, 120, 40);
        let view = viewport(&app.session, grid_area(area));
        let (column, row) = view.screen_cell(Position::new(5, 7)).unwrap();

        app.handle_mouse(
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
            area,
        );
        assert_eq!(app.session.focus(), Some(2));
        assert_eq!(app.session.cursor(), 2);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..20 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 8);
        assert_eq!(app.messages.last().unwrap().text, "m19");
    }
}

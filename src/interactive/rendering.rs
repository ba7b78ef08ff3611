//! TUI rendering with ratatui
//!
//! Each grid cell is drawn `CELL_WIDTH` columns wide and `CELL_HEIGHT` rows tall:
//! the word numbers on the first row, the letter on the second.

use super::app::{App, MessageStyle};
use crate::core::Position;
use crate::interaction::Session;
use crate::output::formatters::{number_label, word_bounds};
use crate::puzzle::CellStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

pub const CELL_WIDTH: u16 = 3;
pub const CELL_HEIGHT: u16 = 2;

/// The part of the puzzle visible in the grid panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Screen area the cells are drawn in
    pub area: Rect,
    /// Grid position drawn at the top-left of `area`
    pub origin: Position,
    pub cols: usize,
    pub rows: usize,
}

impl Viewport {
    /// Grid position under a screen coordinate
    #[must_use]
    pub fn position_at(&self, column: u16, row: u16) -> Option<Position> {
        if column < self.area.x || row < self.area.y {
            return None;
        }
        let cx = usize::from((column - self.area.x) / CELL_WIDTH);
        let cy = usize::from((row - self.area.y) / CELL_HEIGHT);
        if cx >= self.cols || cy >= self.rows {
            return None;
        }
        Some(Position::new(self.origin.x + cx, self.origin.y + cy))
    }

    /// Screen coordinate of the letter row of a visible cell
    #[must_use]
    pub fn screen_cell(&self, position: Position) -> Option<(u16, u16)> {
        let cx = position.x.checked_sub(self.origin.x)?;
        let cy = position.y.checked_sub(self.origin.y)?;
        if cx >= self.cols || cy >= self.rows {
            return None;
        }
        Some((
            self.area.x + cx as u16 * CELL_WIDTH + 1,
            self.area.y + cy as u16 * CELL_HEIGHT + 1,
        ))
    }
}

/// Pick the first visible index on one axis
///
/// Starts at `lo` and scrolls just far enough to keep `focus` on screen.
fn axis_origin(lo: usize, span: usize, limit: usize, focus: Option<usize>) -> usize {
    let span = span.max(1);
    let origin = match focus {
        Some(f) if f < lo => f,
        Some(f) if f >= lo + span => f + 1 - span,
        _ => lo,
    };
    origin.min(limit.saturating_sub(span))
}

/// Viewport for `area`, cropped to the placed words and following the cursor
#[must_use]
pub fn viewport(session: &Session, area: Rect) -> Viewport {
    let puzzle = session.puzzle();
    let dims = puzzle.dimensions();
    let (lo, _) = word_bounds(puzzle, 1).unwrap_or((Position::new(0, 0), Position::new(0, 0)));
    let cursor = session.cursor_position();

    let span_x = usize::from(area.width / CELL_WIDTH);
    let span_y = usize::from(area.height / CELL_HEIGHT);
    let origin = Position::new(
        axis_origin(lo.x, span_x, dims.cols, cursor.map(|p| p.x)),
        axis_origin(lo.y, span_y, dims.rows, cursor.map(|p| p.y)),
    );

    Viewport {
        area,
        origin,
        cols: span_x.min(dims.cols - origin.x),
        rows: span_y.min(dims.rows - origin.y),
    }
}

/// Split the frame into header, main panel, clue line and status bar
fn main_layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Grid and side panel
            Constraint::Length(3), // Clue line
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

fn panel_layout(area: Rect) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Grid
            Constraint::Percentage(35), // Clues and messages
        ])
        .split(area);
    [chunks[0], chunks[1]]
}

fn grid_block() -> Block<'static> {
    Block::default()
        .title(" Grid ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// Inner area of the grid panel for a frame of size `area`
#[must_use]
pub fn grid_area(area: Rect) -> Rect {
    let [_, main, _, _] = main_layout(area);
    let [grid, _] = panel_layout(main);
    grid_block().inner(grid)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let [header, main, clue, status] = main_layout(f.area());
    let [grid, side] = panel_layout(main);

    render_header(f, header);
    render_grid(f, &app.session, grid);
    render_side_panel(f, app, side);
    render_clue(f, &app.session, clue);
    render_status(f, &app.session, status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧩 CROSSWORD - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, session: &Session, area: Rect) {
    let block = grid_block();
    let view = viewport(session, block.inner(area));
    f.render_widget(block, area);

    let puzzle = session.puzzle();
    let cursor = session.cursor_position();
    let focused = session.focus().and_then(|id| puzzle.word(id));
    let width = usize::from(CELL_WIDTH);

    let mut lines = Vec::with_capacity(view.rows * usize::from(CELL_HEIGHT));
    for y in view.origin.y..view.origin.y + view.rows {
        let mut labels = Vec::with_capacity(view.cols);
        let mut letters = Vec::with_capacity(view.cols);

        for x in view.origin.x..view.origin.x + view.cols {
            let position = Position::new(x, y);
            let Some(cell) = puzzle.cell_view(position) else {
                labels.push(Span::raw(" ".repeat(width)));
                letters.push(Span::raw(" ".repeat(width)));
                continue;
            };

            let mut base = Style::default().bg(Color::Rgb(40, 40, 40));
            if focused.is_some_and(|w| w.covers(position)) {
                base = base.bg(Color::Blue);
            }
            if cursor == Some(position) {
                base = base.bg(Color::Yellow).fg(Color::Black);
            }

            let mut label = number_label(&cell.numbers);
            label.truncate(width);
            labels.push(Span::styled(
                format!("{label:<width$}"),
                base.fg(Color::DarkGray),
            ));

            let letter_style = match cell.status {
                CellStatus::Empty => base,
                CellStatus::Correct => base.fg(Color::Green),
                CellStatus::Wrong => base.fg(Color::Red),
            };
            let letter_style = if cell.completed {
                letter_style.add_modifier(Modifier::BOLD)
            } else {
                letter_style
            };
            letters.push(Span::styled(
                format!(" {} ", cell.guess.unwrap_or(' ')),
                letter_style,
            ));
        }

        lines.push(Line::from(labels));
        lines.push(Line::from(letters));
    }

    f.render_widget(Paragraph::new(lines), view.area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),         // Clues
            Constraint::Length(3),      // Progress
            Constraint::Percentage(35), // Messages
        ])
        .split(area);

    render_clues(f, &app.session, chunks[0]);
    render_progress(f, &app.session, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_clues(f: &mut Frame, session: &Session, area: Rect) {
    let registry = session.puzzle().registry();
    let items: Vec<ListItem> = registry
        .all()
        .iter()
        .map(|word| {
            let solved = registry.is_notified(word.id());
            let marker = if solved { "✓ " } else { "  " };
            let mut style = if solved {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            if session.focus() == Some(word.id()) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            ListItem::new(format!("{marker}{}", word.clue_line())).style(style)
        })
        .collect();

    let clues = List::new(items).block(
        Block::default()
            .title(" Clues ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(clues, area);
}

fn render_progress(f: &mut Frame, session: &Session, area: Rect) {
    let puzzle = session.puzzle();
    let total = puzzle.registry().len();
    let solved = puzzle.solved_count();
    let percent = if total == 0 {
        0
    } else {
        (solved * 100 / total).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Solved ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{solved}/{total} words"));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_clue(f: &mut Frame, session: &Session, area: Rect) {
    let (content, color) = match session.current_clue() {
        Some(clue) => (clue, Color::Yellow),
        None => ("No word selected".to_string(), Color::DarkGray),
    };

    let clue = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Clue ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(clue, area);
}

fn render_status(f: &mut Frame, session: &Session, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let puzzle = session.puzzle();
    let cursor = session
        .cursor_position()
        .map_or_else(|| "-".to_string(), |p| p.to_string());
    let position = Paragraph::new(format!(
        "Grid {} | Cell {cursor} | Filled {}",
        puzzle.dimensions(),
        puzzle.guesses().filled()
    ))
    .alignment(Alignment::Center);
    f.render_widget(position, chunks[0]);

    let corpus = Paragraph::new(format!(
        "Words: {} | Corpus left: {}",
        puzzle.registry().len(),
        puzzle.corpus().len()
    ))
    .alignment(Alignment::Center);
    f.render_widget(corpus, chunks[1]);

    let help = Paragraph::new("Tab: Next word | Click: Select | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dimensions, Direction, PlacedWord, WordText};
    use crate::puzzle::{CorpusPool, Puzzle};
    use ratatui::{Terminal, backend::TestBackend};

    fn session(y: usize) -> Session {
        let prime = PlacedWord::new(
            2,
            WordText::new("PRIME").unwrap(),
            Position::new(5, y),
            Direction::Down,
            "Top Text",
        );
        let puzzle = Puzzle::new(Dimensions::new(30, 30), [prime], CorpusPool::default()).unwrap();
        Session::new(puzzle)
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
            .collect()
    }

    #[test]
    fn viewport_starts_at_word_bounds() {
        let view = viewport(&session(5), Rect::new(1, 1, 60, 30));
        assert_eq!(view.origin, Position::new(4, 4));
        assert_eq!(view.position_at(1, 1), Some(Position::new(4, 4)));
        assert_eq!(
            view.position_at(1 + CELL_WIDTH, 1 + CELL_HEIGHT),
            Some(Position::new(5, 5))
        );
        assert_eq!(view.position_at(0, 0), None);
    }

    #[test]
    fn viewport_follows_the_cursor() {
        // Only 3 grid rows fit; PRIME reaches down to row 26
        let mut session = session(22);
        session.on_cell_clicked(2, 4);
        let view = viewport(&session, Rect::new(0, 0, 30, 6));
        assert_eq!(view.rows, 3);
        let cursor = session.cursor_position().unwrap();
        assert_eq!(cursor, Position::new(5, 26));
        assert!(view.screen_cell(cursor).is_some());
    }

    #[test]
    fn ui_shows_clue_and_grid_letters() {
        let mut app = App::new(session(5));
        app.session.on_tab_pressed();
        app.session.type_letter('p');

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = screen_text(&terminal).join("\n");

        assert!(text.contains("2. Down: Top Text"));
        assert!(text.contains(" P "));
        assert!(text.contains("Corpus left: 0"));
    }
}

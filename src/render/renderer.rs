use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Board, Cursor, GameState};
use crate::metrics::LifeMetrics;

pub const DEAD_GLYPH: char = '.';
pub const ALIVE_GLYPH: char = '#';
pub const CURSOR_GLYPH: char = 'X';

/// One ASCII line per board row; the cursor glyph replaces whatever cell is
/// under it without touching the board.
pub fn board_lines(board: &Board, cursor: Cursor) -> Vec<String> {
    (0..board.rows())
        .map(|i| {
            (0..board.cols())
                .map(|j| {
                    if i == cursor.y && j == cursor.x {
                        CURSOR_GLYPH
                    } else if board.get(i as i64, j as i64).is_alive() {
                        ALIVE_GLYPH
                    } else {
                        DEAD_GLYPH
                    }
                })
                .collect()
        })
        .collect()
}

/// Start of a `visible`-long window over `len` items that keeps `focus`
/// inside it, centred where the edges allow
fn window_start(focus: usize, len: usize, visible: usize) -> usize {
    if len <= visible {
        return 0;
    }
    focus.saturating_sub(visible / 2).min(len - visible)
}

/// Everything a frame needs, captured from the game state at draw time
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub lines: Vec<String>,
    pub generation: u64,
    pub population: usize,
    pub running: bool,
    pub cursor: Cursor,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            lines: board_lines(&state.board, state.cursor),
            generation: state.generation,
            population: state.board.population(),
            running: state.running,
            cursor: state.cursor,
        }
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot, metrics: &LifeMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(snapshot, metrics);
        frame.render_widget(stats, chunks[0]);

        let grid = self.render_grid(chunks[1], snapshot);
        frame.render_widget(grid, chunks[1]);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    /// The board inside its border, scrolled so the cursor stays in view
    /// when the board is larger than `area`
    fn render_grid(&self, area: Rect, snapshot: &Snapshot) -> Paragraph<'_> {
        let visible_rows = area.height.saturating_sub(2) as usize;
        let visible_cols = area.width.saturating_sub(2) as usize;
        let board_cols = snapshot.lines.first().map_or(0, String::len);

        let top = window_start(snapshot.cursor.y, snapshot.lines.len(), visible_rows);
        let left = window_start(snapshot.cursor.x, board_cols, visible_cols);

        let lines: Vec<Line> = snapshot
            .lines
            .iter()
            .skip(top)
            .take(visible_rows)
            .map(|row| {
                Line::from(
                    row.chars()
                        .skip(left)
                        .take(visible_cols)
                        .map(Self::styled_glyph)
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Life "),
            )
            .alignment(Alignment::Center)
    }

    fn styled_glyph(glyph: char) -> Span<'static> {
        let style = match glyph {
            CURSOR_GLYPH => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            ALIVE_GLYPH => Style::default().fg(Color::Green),
            _ => Style::default().fg(Color::DarkGray),
        };
        Span::styled(glyph.to_string(), style)
    }

    fn render_stats(&self, snapshot: &Snapshot, metrics: &LifeMetrics) -> Paragraph<'_> {
        let (status, status_color) = if snapshot.running {
            ("RUNNING", Color::Green)
        } else {
            ("PAUSED", Color::Yellow)
        };

        let text = vec![Line::from(vec![
            Span::styled("Generation: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.generation.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Population: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.population.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Peak: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.peak_population.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled(
                status,
                Style::default()
                    .fg(status_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));
        let text = vec![Line::from(vec![
            key("hjkl"),
            Span::raw(" move | "),
            key("t"),
            Span::raw(" toggle cell | "),
            key("space"),
            Span::raw(" start/pause | "),
            key("n"),
            Span::raw(" step | "),
            key("R"),
            Span::raw(" randomize | "),
            key("c"),
            Span::raw(" clear | "),
            Span::styled("q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

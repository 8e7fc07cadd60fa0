use super::action::Direction;
use super::board::Board;

/// Editing cursor, always inside the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
}

impl Cursor {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Move by delta, wrapping on a `rows` x `cols` torus
    pub fn moved_by(&self, dx: i64, dy: i64, rows: usize, cols: usize) -> Self {
        let x = (self.x as i64 + dx).rem_euclid(cols.max(1) as i64) as usize;
        let y = (self.y as i64 + dy).rem_euclid(rows.max(1) as i64) as usize;
        Self { x, y }
    }

    /// Move one cell in a direction, wrapping on a `rows` x `cols` torus
    pub fn moved_in_direction(&self, direction: Direction, rows: usize, cols: usize) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy, rows, cols)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub cursor: Cursor,
    pub running: bool,
    should_quit: bool,
    /// Generations applied since the board was last randomized or cleared
    pub generation: u64,
}

impl GameState {
    /// Create a paused game state with the cursor in the top-left corner
    pub fn new(board: Board) -> Self {
        Self {
            board,
            cursor: Cursor::default(),
            running: false,
            should_quit: false,
            generation: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request exit. There is no way to take this back.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let (rows, cols) = (self.board.rows(), self.board.cols());
        self.cursor = self.cursor.moved_in_direction(direction, rows, cols);
    }

    pub fn toggle_under_cursor(&mut self) {
        self.board.toggle(self.cursor.y as i64, self.cursor.x as i64);
    }
}

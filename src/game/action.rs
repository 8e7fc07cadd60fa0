/// Direction the cursor can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Action a key press maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Move the cursor one cell, wrapping at the edges
    MoveCursor(Direction),
    /// Flip the cell under the cursor
    ToggleCell,
    /// Start or pause the simulation
    ToggleRunning,
    Randomize,
    /// Kill every cell and pause
    Clear,
    /// Advance exactly one generation while paused
    Step,
    None,
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::MoveCursor(direction)
    }
}

use crate::game::{Action, Direction};

/// Ctrl+C as delivered in raw mode
pub const CTRL_C: u8 = 0x03;

/// Maps raw input bytes to game actions.
///
/// | key            | action                    |
/// |----------------|---------------------------|
/// | `q` `Q` Ctrl+C | quit                      |
/// | `h` `j` `k` `l`| cursor left/down/up/right |
/// | space          | start/pause               |
/// | `t`            | toggle cell under cursor  |
/// | `R`            | randomize board           |
/// | `c`            | clear board               |
/// | `n`            | single step while paused  |
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_byte(&self, byte: u8) -> Action {
        match byte {
            b'q' | b'Q' | CTRL_C => Action::Quit,

            // Movement - vi keys
            b'h' => Action::MoveCursor(Direction::Left),
            b'j' => Action::MoveCursor(Direction::Down),
            b'k' => Action::MoveCursor(Direction::Up),
            b'l' => Action::MoveCursor(Direction::Right),

            // Editing and simulation control
            b' ' => Action::ToggleRunning,
            b't' => Action::ToggleCell,
            b'R' => Action::Randomize,
            b'c' => Action::Clear,
            b'n' => Action::Step,

            _ => Action::None,
        }
    }

    /// Map an optional byte, `None` meaning no key was pending
    pub fn handle_key(&self, key: Option<u8>) -> Action {
        key.map_or(Action::None, |byte| self.handle_byte(byte))
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

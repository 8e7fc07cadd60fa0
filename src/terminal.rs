//! Terminal collaborators: raw-mode input and frame presentation.
//!
//! [`TerminalIo`] and [`Screen`] are the only fallible surfaces of the game.
//! [`CrosstermTerminal`] implements both on top of crossterm and ratatui;
//! tests substitute scripted implementations.

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stderr, stderr};
use std::time::Duration;

use crate::input::CTRL_C;
use crate::metrics::LifeMetrics;
use crate::render::{Renderer, Snapshot};

/// Failures of the terminal collaborators. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Raw mode or screen setup failed; the game loop never starts
    #[error("failed to set up terminal: {0}")]
    Setup(#[source] io::Error),

    /// A read failed for a reason other than "no input pending"
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    /// Restoring the original terminal mode failed
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),

    #[error("failed to draw frame: {0}")]
    Draw(#[source] io::Error),
}

/// Raw-mode keyboard input
pub trait TerminalIo {
    /// Disable line buffering and echo
    fn enter_raw_mode(&mut self) -> Result<(), TerminalError>;

    /// Return the next pending key byte without blocking, `None` when no
    /// input is waiting
    fn read_key(&mut self) -> Result<Option<u8>, TerminalError>;

    /// Undo [`TerminalIo::enter_raw_mode`]. Safe to call when raw mode was
    /// never entered.
    fn restore_mode(&mut self) -> Result<(), TerminalError>;
}

/// Somewhere frames are drawn
pub trait Screen {
    fn present(&mut self, snapshot: &Snapshot, metrics: &LifeMetrics) -> Result<(), TerminalError>;
}

/// Translate a crossterm key press into the byte the keymap understands.
///
/// Arrow keys become `h/j/k/l` and Enter toggles the cell under the cursor.
pub fn key_to_byte(key: KeyEvent) -> Option<u8> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(CTRL_C);
    }

    match key.code {
        KeyCode::Char(c) if c.is_ascii() => Some(c as u8),
        KeyCode::Left => Some(b'h'),
        KeyCode::Down => Some(b'j'),
        KeyCode::Up => Some(b'k'),
        KeyCode::Right => Some(b'l'),
        KeyCode::Enter => Some(b't'),
        KeyCode::Esc => Some(b'q'),
        _ => None,
    }
}

/// Terminal backed by crossterm raw mode and a ratatui alternate screen on stderr
pub struct CrosstermTerminal {
    terminal: Option<Terminal<CrosstermBackend<Stderr>>>,
    renderer: Renderer,
    raw: bool,
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self {
            terminal: None,
            renderer: Renderer::new(),
            raw: false,
        }
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalIo for CrosstermTerminal {
    fn enter_raw_mode(&mut self) -> Result<(), TerminalError> {
        enable_raw_mode().map_err(TerminalError::Setup)?;
        self.raw = true;

        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).map_err(TerminalError::Setup)?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).map_err(TerminalError::Setup)?;
        terminal.hide_cursor().map_err(TerminalError::Setup)?;
        terminal.clear().map_err(TerminalError::Setup)?;
        self.terminal = Some(terminal);

        info!("Entered raw mode");
        Ok(())
    }

    fn read_key(&mut self) -> Result<Option<u8>, TerminalError> {
        // poll with a zero timeout never blocks; an error here is a real
        // failure, not an empty queue
        while event::poll(Duration::ZERO).map_err(TerminalError::Read)? {
            if let Event::Key(key) = event::read().map_err(TerminalError::Read)? {
                if let Some(byte) = key_to_byte(key) {
                    debug!("Key event: {:?} -> {:#04x}", key.code, byte);
                    return Ok(Some(byte));
                }
            }
        }
        Ok(None)
    }

    fn restore_mode(&mut self) -> Result<(), TerminalError> {
        // Every step runs even if an earlier one failed; raw mode goes first
        // so the shell gets line editing back whatever else breaks
        let mut first_err = None;

        if self.raw {
            match disable_raw_mode() {
                Ok(()) => self.raw = false,
                Err(err) => keep_first(&mut first_err, err),
            }
        }

        if let Some(mut terminal) = self.terminal.take() {
            if let Err(err) = execute!(terminal.backend_mut(), LeaveAlternateScreen) {
                keep_first(&mut first_err, err);
            }
            if let Err(err) = terminal.show_cursor() {
                keep_first(&mut first_err, err);
            }
        }

        match first_err {
            Some(err) => Err(TerminalError::Restore(err)),
            None => {
                info!("Restored terminal mode");
                Ok(())
            }
        }
    }
}

/// Record `err` unless an earlier restore step already failed
fn keep_first(slot: &mut Option<io::Error>, err: io::Error) {
    if slot.is_none() {
        *slot = Some(err);
    } else {
        warn!("Further restore step failed: {err}");
    }
}

impl Screen for CrosstermTerminal {
    fn present(&mut self, snapshot: &Snapshot, metrics: &LifeMetrics) -> Result<(), TerminalError> {
        let Some(terminal) = self.terminal.as_mut() else {
            return Err(TerminalError::Draw(io::Error::new(
                io::ErrorKind::NotConnected,
                "terminal not initialized",
            )));
        };

        let renderer = &self.renderer;
        terminal
            .draw(|frame| renderer.render(frame, snapshot, metrics))
            .map_err(TerminalError::Draw)?;
        Ok(())
    }
}

//! Core Game of Life logic
//!
//! This module contains the board, the transition rule, the update/draw
//! scheduler and the interactive session, without any terminal or rendering
//! dependencies.

pub mod action;
pub mod board;
pub mod config;
pub mod rules;
pub mod scheduler;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use board::{Board, Cell};
pub use config::{ConfigError, GameConfig};
pub use scheduler::{MonotonicClock, RateGate, Scheduler};
pub use session::{Session, TickOutcome};
pub use state::{Cursor, GameState};

//! ASCII Life - Conway's Game of Life in the terminal
//!
//! This library provides:
//! - Core simulation and timing (game module)
//! - Byte-level keymap (input module)
//! - ASCII frame building and TUI layout (render module)
//! - Raw-mode terminal collaborators (terminal module)
//! - The interactive main loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod terminal;

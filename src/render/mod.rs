pub mod renderer;

pub use renderer::{Renderer, Snapshot, board_lines};

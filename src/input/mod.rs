pub mod handler;

pub use handler::{CTRL_C, InputHandler};

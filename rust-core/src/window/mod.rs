//! Window function library

pub mod functions;
pub mod apply;

pub use functions::{generate_window, window_over, WindowType};
pub use apply::{apply_window, placed_window};

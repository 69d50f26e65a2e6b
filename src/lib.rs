//! Single-screen retro Snake: the grid simulation plus the terminal
//! collaborators (rendering, input, audio cues) that drive it.

pub mod audio;
pub mod clock;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;

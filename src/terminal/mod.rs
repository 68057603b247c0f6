// src/terminal/mod.rs

//! Terminal layer root module.
//!
//! Concrete collaborators of the round controller, built on crossterm:
//! - Raw-mode / alternate-screen session guard
//! - Board renderer and status lines
//! - Keyboard command source

pub mod input;
pub mod render;
pub mod session;

pub use input::KeyboardInput;
pub use render::TerminalRenderer;
pub use session::TerminalSession;

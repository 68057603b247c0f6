//! Main configuration module.
//!
//! Re-exports submodules for gameplay and terminal layout configuration.
pub mod game;
pub mod render;

pub use game::GameConfig;

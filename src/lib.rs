//! Terminal 2048.
//!
//! The `game` module holds the engine (grid, rotation-based merges, spawn/win/loss
//! rules, round controller) and is independent of any terminal. The `terminal`
//! module provides the crossterm renderer, keyboard source and screen guard.

pub mod config;
pub mod error;
pub mod game;
pub mod terminal;


pub use error::{GameError, Result};

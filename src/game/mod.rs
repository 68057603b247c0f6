//! Game core: grid model, merge engine, rules, and the round controller.

pub mod types;
pub mod state;
pub mod game_loop;

pub mod grid;
pub mod systems;

pub use game_loop::{Phase, RoundController};
pub use grid::Grid;
pub use state::SessionState;
pub use types::*;

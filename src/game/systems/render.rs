//! Output side of a round: what the controller hands to whoever draws the game.

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::game::grid::Grid;

/// Everything visible after a state transition.
#[derive(Debug, Clone, Copy)]
pub struct RoundView<'a> {
    pub grid: &'a Grid,
    pub score: u64,
    pub step: u64,
    /// Win/lose banner, if the round has ended.
    pub status: Option<&'a str>,
}

pub trait Renderer {
    /// Redraw the whole game. Must not wait on the player.
    fn render(&mut self, view: &RoundView<'_>) -> Result<()>;

    /// Side-channel status line (key echo, end of game). Failures are not reported.
    fn notify(&mut self, message: &str, at: DateTime<Local>);
}

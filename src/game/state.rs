use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::error::Result;
use crate::game::grid::Grid;
use crate::game::types::Status;

/// Mutable state of one game. Owned by the round controller; replaced on restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub game_id: Uuid,
    pub grid: Grid,
    /// Accepted moves that did not leave the board packed.
    pub step: u64,
    /// Sum of every spawned tile value.
    pub score: u64,
    pub status: Status,
}

impl SessionState {
    pub fn new(grid_size: usize) -> Result<Self> {
        Ok(SessionState {
            game_id: Uuid::new_v4(),
            grid: Grid::new(grid_size)?,
            step: 0,
            score: 0,
            status: Status::Continue,
        })
    }

    /// Start over with an empty grid of the same size and fresh counters.
    pub fn reset(&mut self) -> Result<()> {
        *self = SessionState::new(self.grid.size())?;
        Ok(())
    }
}

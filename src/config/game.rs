//! Game configuration constants.
//!
//! This module defines the main gameplay parameters such as the grid size
//! and the tile value that wins a round.

use serde::{Serialize, Deserialize};

use crate::error::{GameError, Result};

/// Number of rows (and columns) in the game grid.
pub const GRID_SIZE: usize = 4;

/// A round is won as soon as any tile reaches this value.
pub const WIN_THRESHOLD: u32 = 64;

/// Tile values a spawn picks from, uniformly.
pub const SPAWN_VALUES: [u32; 2] = [2, 4];

/// Grid cells per spawned tile: a round spawns `size * size / CELLS_PER_SPAWN` tiles.
pub const CELLS_PER_SPAWN: usize = 16;

/// Validated gameplay settings for one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_size: usize,
    pub win_threshold: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            win_threshold: WIN_THRESHOLD,
        }
    }
}

impl GameConfig {
    pub fn new(grid_size: usize, win_threshold: u32) -> Result<Self> {
        let config = Self { grid_size, win_threshold };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(GameError::InvalidGridSize(self.grid_size));
        }
        if self.win_threshold < 4 || !self.win_threshold.is_power_of_two() {
            return Err(GameError::InvalidWinThreshold(self.win_threshold));
        }
        Ok(())
    }

    /// Number of tiles one spawning phase places (floor division, so zero below 4x4).
    pub fn spawn_count(&self) -> usize {
        self.grid_size * self.grid_size / CELLS_PER_SPAWN
    }
}

//! Error type shared by the game core and the terminal layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// A grid needs at least one row and one column.
    #[error("invalid grid size {0}: must be at least 1")]
    InvalidGridSize(usize),

    #[error("invalid grid shape: {0}")]
    InvalidShape(String),

    #[error("invalid tile value {value} at ({row}, {col}): tiles are 0 or a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: u32 },

    #[error("invalid win threshold {0}: must be a power of two >= 4")]
    InvalidWinThreshold(u32),

    /// The event source failed; there is no degraded mode, the process exits.
    #[error("input source failed: {0}")]
    Input(#[source] std::io::Error),

    #[error("input producer dropped before delivering a command")]
    InputClosed,

    #[error("terminal output failed: {0}")]
    Render(#[from] std::io::Error),
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;

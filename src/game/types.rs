use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Direction a move pushes the tiles towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
}

/// One player intent, as delivered by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    Restart,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Continue,
    Win,
    Lose,
}

impl Status {
    /// Banner text shown over the board, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Status::Continue => None,
            Status::Win => Some("Game Win"),
            Status::Lose => Some("Game Lose"),
        }
    }
}

/// Outcome of a single merge along one axis.
///
/// `changed` is also true when every row was already packed, so a packed board
/// still goes through spawning (which is where a loss gets detected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveResult {
    pub changed: bool,
    pub axis_full: bool,
}

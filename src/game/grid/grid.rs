//! Square tile grid.
//!
//! Rotations are pure: they return a new grid and leave `self` untouched, which is
//! what lets the merge engine solve one direction and derive the other three.

use std::fmt;

use serde::{Serialize, Deserialize};

use crate::error::{GameError, Result};
use crate::game::types::Position;

/// N×N matrix of tiles. `0` is an empty cell, anything else is a power of two >= 2.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<u32>>,
}

impl Grid {
    /// Allocate an empty `size`×`size` grid.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidGridSize(size));
        }
        Ok(Self { cells: vec![vec![0; size]; size] })
    }

    /// Build a grid from explicit rows, checking the shape and tile values.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(GameError::InvalidGridSize(size));
        }
        if let Some(bad) = rows.iter().position(|row| row.len() != size) {
            return Err(GameError::InvalidShape(format!(
                "row {} has {} cells, expected {}",
                bad,
                rows[bad].len(),
                size
            )));
        }
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value != 0 && (value < 2 || !value.is_power_of_two()) {
                    return Err(GameError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.cells
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<u32>] {
        &mut self.cells
    }

    pub fn get(&self, pos: Position) -> u32 {
        self.cells[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Position, value: u32) {
        self.cells[pos.row][pos.col] = value;
    }

    /// Rotate 90° counter-clockwise.
    pub fn rotate_left(&self) -> Self {
        let n = self.size();
        self.permute(|x, y| (n - 1 - y, x))
    }

    /// Rotate 90° clockwise.
    pub fn rotate_right(&self) -> Self {
        let n = self.size();
        self.permute(|x, y| (y, n - 1 - x))
    }

    /// Rotate 180°.
    pub fn rotate_half(&self) -> Self {
        let n = self.size();
        self.permute(|x, y| (n - 1 - x, n - 1 - y))
    }

    /// Copy every cell `(x, y)` to `target(x, y)` in a fresh grid.
    fn permute(&self, target: impl Fn(usize, usize) -> (usize, usize)) -> Self {
        let n = self.size();
        let mut cells = vec![vec![0; n]; n];
        for (x, line) in self.cells.iter().enumerate() {
            for (y, &value) in line.iter().enumerate() {
                let (tx, ty) = target(x, y);
                cells[tx][ty] = value;
            }
        }
        Self { cells }
    }

    /// Coordinates of every cell whose value satisfies `predicate`, in row-major order.
    pub fn cells_by_value(&self, predicate: impl Fn(u32) -> bool) -> Vec<Position> {
        let predicate = &predicate;
        self.cells.iter().enumerate()
            .flat_map(move |(row, line)| {
                line.iter().enumerate().filter_map(move |(col, &value)| {
                    predicate(value).then_some(Position { row, col })
                })
            })
            .collect()
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        self.cells_by_value(|value| value == 0)
    }

    pub fn max_value(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "G2048:")?;
        for line in &self.cells {
            for value in line {
                write!(f, "[{}]", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Merge engine.
//!
//! Only the leftward merge is implemented. Up, down and right rotate the grid so the
//! requested direction points left, merge, and rotate back.

use crate::game::grid::Grid;
use crate::game::types::{Direction, MoveResult};

/// What happened to one row during a leftward merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowMerge {
    moved: bool,
    full: bool,
}

/// Slide non-zero tiles to the left, keeping their order. Returns whether anything moved.
fn compact(row: &mut [u32]) -> bool {
    let mut moved = false;
    let mut empty: Option<usize> = None;
    for y in 0..row.len() {
        match (row[y], empty) {
            (0, None) => empty = Some(y),
            (0, Some(_)) => {}
            (value, Some(slot)) => {
                row[slot] = value;
                row[y] = 0;
                moved = true;
                // Everything between the slot and `y` was empty.
                empty = Some(slot + 1);
            }
            (_, None) => {}
        }
    }
    moved
}

fn slide_row(row: &mut [u32]) -> RowMerge {
    let mut moved = compact(row);
    let mut full = true;

    let last = row.len().saturating_sub(1);
    for y in 0..row.len() {
        if row[y] == 0 {
            full = false;
        } else if y < last && row[y] == row[y + 1] {
            // The largest u32 tile has nothing to double into and stays put.
            if let Some(doubled) = row[y].checked_mul(2) {
                row[y] = doubled;
                row[y + 1] = 0;
                moved = true;
                full = false;
            }
        }
    }

    // Close the gaps the merges opened; merged tiles are not merged again.
    compact(row);

    RowMerge { moved, full }
}

/// Merge a single row towards index 0.
pub fn merge_row(row: &mut [u32]) -> MoveResult {
    let RowMerge { moved, full } = slide_row(row);
    MoveResult { changed: moved || full, axis_full: full }
}

/// Merge every row of the grid towards column 0.
pub fn merge_left(grid: &mut Grid) -> MoveResult {
    let mut moved = false;
    let mut full = true;
    for row in grid.rows_mut() {
        let outcome = slide_row(row);
        moved |= outcome.moved;
        full &= outcome.full;
    }
    MoveResult { changed: moved || full, axis_full: full }
}

pub fn merge_up(grid: &mut Grid) -> MoveResult {
    let mut rotated = grid.rotate_left();
    let result = merge_left(&mut rotated);
    *grid = rotated.rotate_right();
    result
}

pub fn merge_down(grid: &mut Grid) -> MoveResult {
    let mut rotated = grid.rotate_right();
    let result = merge_left(&mut rotated);
    *grid = rotated.rotate_left();
    result
}

pub fn merge_right(grid: &mut Grid) -> MoveResult {
    let mut rotated = grid.rotate_half();
    let result = merge_left(&mut rotated);
    *grid = rotated.rotate_half();
    result
}

/// Apply the merge for `direction` in place.
pub fn apply_move(grid: &mut Grid, direction: Direction) -> MoveResult {
    match direction {
        Direction::Up => merge_up(grid),
        Direction::Down => merge_down(grid),
        Direction::Left => merge_left(grid),
        Direction::Right => merge_right(grid),
    }
}

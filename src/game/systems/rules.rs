//! Spawn, win and loss rules.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::config::game::SPAWN_VALUES;
use crate::game::grid::Grid;
use crate::game::systems::merge::apply_move;
use crate::game::types::{Direction, Position};

/// A tile placed by `spawn_tiles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned {
    pub pos: Position,
    pub value: u32,
}

/// Place `count` random tiles into the cells that are empty right now.
///
/// The empty set is sampled once, so two spawns may land on the same cell; the later
/// one overwrites the earlier. Returns `None` when the grid has no empty cell.
pub fn spawn_tiles<R: Rng + ?Sized>(grid: &mut Grid, count: usize, rng: &mut R) -> Option<Vec<Spawned>> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let mut spawned = Vec::with_capacity(count);
    for _ in 0..count {
        let value = SPAWN_VALUES[rng.random_range(0..SPAWN_VALUES.len())];
        let Some(&pos) = empty.choose(rng) else { break };
        grid.set(pos, value);
        debug!("[Rules] Spawned {} at ({}, {})", value, pos.row, pos.col);
        spawned.push(Spawned { pos, value });
    }
    Some(spawned)
}

/// True once any tile has reached `threshold`.
pub fn is_win(grid: &Grid, threshold: u32) -> bool {
    !grid.cells_by_value(|value| value >= threshold).is_empty()
}

/// True while the player can still do something: an empty cell exists, or some
/// direction would actually rearrange the tiles.
pub fn has_moves(grid: &Grid) -> bool {
    if !grid.empty_cells().is_empty() {
        return true;
    }
    Direction::ALL.iter().any(|&direction| {
        let mut probe = grid.clone();
        apply_move(&mut probe, direction);
        probe != *grid
    })
}

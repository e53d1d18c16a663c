use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::basic::{BoardDim, Cell};
use crate::snake::Snake;

/// Random draws per board cell before giving up on rejection sampling
const REJECTIONS_PER_CELL: usize = 4;

/// Pick a cell the snake doesn't occupy, uniformly at random.
///
/// Draws independent uniform cells until one is free. A snake that covers
/// most of the board makes that slow, so after `4 * area` misses the free
/// cells are enumerated and one of them is chosen directly. Returns `None`
/// only when the snake covers the whole board.
pub fn spawn_apple(board_dim: BoardDim, snake: &Snake, rng: &mut impl Rng) -> Option<Cell> {
    for _ in 0..board_dim.area() * REJECTIONS_PER_CELL {
        let candidate = board_dim.random_cell(rng);
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    let free_cells = board_dim
        .cells()
        .filter(|cell| !snake.occupies(*cell))
        .collect_vec();
    if free_cells.is_empty() {
        log::warn!("no space left for a new apple");
    }
    free_cells.choose(rng).copied()
}

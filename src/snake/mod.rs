use std::collections::VecDeque;

use crate::basic::Cell;
use crate::error::{Error, Result};

/// The cells occupied by the snake, head first.
///
/// Cells are unique, a head landing on an existing cell is a
/// self-collision and never gets pushed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    pub fn new(body: impl IntoIterator<Item = Cell>) -> Self {
        Self { body: body.into_iter().collect() }
    }

    pub fn head(&self) -> Result<Cell> {
        self.body
            .front()
            .copied()
            .ok_or_else(|| Error::invariant("head of an empty snake"))
    }

    pub fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    pub fn pop_tail(&mut self) -> Option<Cell> {
        self.body.pop_back()
    }

    // O(len), len is bounded by the board area
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.iter().any(|segment| *segment == cell)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Head to tail
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn reset(&mut self, body: &[Cell]) {
        self.body.clear();
        self.body.extend(body.iter().copied());
    }
}

use itertools::Itertools;
use rand::Rng;

use crate::basic::Cell;

/// Size of the playing field in cells. Bounds are half-open,
/// the visual border around the field is not part of it.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct BoardDim {
    pub rows: isize,
    pub cols: isize,
}

impl BoardDim {
    pub const fn new(rows: isize, cols: isize) -> Self {
        Self { rows, cols }
    }

    pub fn contains(self, cell: Cell) -> bool {
        (0..self.rows).contains(&cell.row) && (0..self.cols).contains(&cell.col)
    }

    pub fn area(self) -> usize {
        (self.rows * self.cols) as usize
    }

    /// Uniform over the whole board, the result may be occupied
    pub fn random_cell(self, rng: &mut impl Rng) -> Cell {
        Cell {
            row: rng.gen_range(0..self.rows),
            col: rng.gen_range(0..self.cols),
        }
    }

    /// All cells in row-major order
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.rows)
            .cartesian_product(0..self.cols)
            .map(Cell::from)
    }
}

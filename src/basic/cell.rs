use std::fmt::{Debug, Error, Formatter};

use super::dir::Dir;

/// A (row, column) coordinate on the board, row 0 is the top
#[derive(Eq, PartialEq, Copy, Clone, Hash)]
pub struct Cell {
    pub row: isize,
    pub col: isize,
}

impl Cell {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell in `dir`, may lie outside the board
    #[must_use]
    pub fn translate(self, dir: Dir) -> Self {
        let (dr, dc) = dir.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl From<(isize, isize)> for Cell {
    fn from((row, col): (isize, isize)) -> Self {
        Self { row, col }
    }
}

impl Debug for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[test]
fn test_translate() {
    let c = Cell::new(10, 10);
    assert_eq!(c.translate(Dir::Up), Cell::new(9, 10));
    assert_eq!(c.translate(Dir::Right), Cell::new(10, 11));
    assert_eq!(c.translate(Dir::Down), Cell::new(11, 10));
    assert_eq!(c.translate(Dir::Left), Cell::new(10, 9));
    assert_eq!(Cell::new(0, 5).translate(Dir::Up), Cell::new(-1, 5));
}

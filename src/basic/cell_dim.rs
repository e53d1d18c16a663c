use crate::basic::{BoardDim, Cell, Point};

/// Pixel geometry of a square cell
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellDim {
    pub side: f32,
}

impl From<f32> for CellDim {
    fn from(side: f32) -> Self {
        Self { side }
    }
}

impl CellDim {
    /// Center of a cell relative to its top-left corner
    pub fn center(self) -> Point {
        Point::square(self.side / 2.)
    }

    /// Top-left corner of `cell` relative to the top-left corner of the board
    pub fn to_point(self, cell: Cell) -> Point {
        Point {
            x: cell.col as f32 * self.side,
            y: cell.row as f32 * self.side,
        }
    }

    pub fn board_size(self, board_dim: BoardDim) -> Point {
        Point {
            x: board_dim.cols as f32 * self.side,
            y: board_dim.rows as f32 * self.side,
        }
    }
}

#[test]
fn test_to_point() {
    let cell_dim = CellDim::from(30.);
    assert_eq!(cell_dim.to_point(Cell::new(0, 0)), Point { x: 0., y: 0. });
    assert_eq!(cell_dim.to_point(Cell::new(2, 3)), Point { x: 90., y: 60. });
    assert_eq!(cell_dim.center(), Point { x: 15., y: 15. });
    assert_eq!(
        cell_dim.board_size(BoardDim::new(20, 20)),
        Point { x: 600., y: 600. }
    );
}

use num_integer::Integer;

use crate::app::palette::Palette;
use crate::basic::{BoardDim, CellDim, Point};
use crate::error::Result;
use crate::rendering::{board_origin, CellPainter};

/// Checkerboard cells plus, optionally, a one-cell-wide band around them
pub fn paint_board(
    painter: &mut impl CellPainter,
    board_dim: BoardDim,
    cell_dim: CellDim,
    palette: &Palette,
    draw_border: bool,
) -> Result {
    let origin = board_origin(cell_dim);
    let cell_size = Point::square(cell_dim.side);

    for cell in board_dim.cells() {
        let color = if (cell.row + cell.col).is_even() {
            palette.light_cell_color
        } else {
            palette.dark_cell_color
        };
        painter.fill_rect(origin + cell_dim.to_point(cell), cell_size, color)?;
    }

    if draw_border {
        let side = cell_dim.side;
        let Point { x: width, y: height } = cell_dim.board_size(board_dim) + Point::square(2. * side);

        #[rustfmt::skip]
        let bands = [
            (Point { x: 0., y: 0. }, Point { x: width, y: side }),
            (Point { x: 0., y: height - side }, Point { x: width, y: side }),
            (Point { x: 0., y: 0. }, Point { x: side, y: height }),
            (Point { x: width - side, y: 0. }, Point { x: side, y: height }),
        ];
        for (top_left, size) in bands {
            painter.fill_rect(top_left, size, palette.border_color)?;
        }
    }

    Ok(())
}

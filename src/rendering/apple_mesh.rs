use crate::app::palette::Palette;
use crate::basic::{Cell, CellDim, Point};
use crate::error::Result;
use crate::rendering::{board_origin, CellPainter};

pub fn paint_apple(
    painter: &mut impl CellPainter,
    apple: Cell,
    cell_dim: CellDim,
    palette: &Palette,
) -> Result {
    let side = cell_dim.side;
    let center = board_origin(cell_dim) + cell_dim.to_point(apple) + cell_dim.center();
    painter.fill_circle(center, side / 2., palette.apple_color)?;

    // stem on the top edge
    let stem_top_left = center - Point { x: side / 8., y: side / 2. };
    let stem_size = Point { x: side / 4., y: side / 8. };
    painter.fill_rect(stem_top_left, stem_size, palette.stem_color)
}

#[test]
fn test_apple_with_stem() {
    use crate::rendering::recording::{RecordingPainter, Shape};

    let palette = Palette::default();
    let mut painter = RecordingPainter::default();
    paint_apple(&mut painter, Cell::new(0, 1), CellDim::from(40.), &palette).unwrap();

    assert_eq!(
        painter.shapes,
        vec![
            Shape::Circle {
                center: Point { x: 100., y: 60. },
                radius: 20.,
                color: palette.apple_color,
            },
            Shape::Rect {
                top_left: Point { x: 95., y: 40. },
                size: Point { x: 10., y: 5. },
                color: palette.stem_color,
            },
        ]
    );
}

use crate::app::palette::Palette;
use crate::basic::{Cell, CellDim};
use crate::error::Result;
use crate::rendering::{board_origin, CellPainter};

/// One circle per segment, colored along the head to tail gradient
pub fn paint_snake<I>(
    painter: &mut impl CellPainter,
    segments: I,
    cell_dim: CellDim,
    palette: &Palette,
) -> Result
where
    I: IntoIterator<Item = Cell>,
    I::IntoIter: ExactSizeIterator,
{
    let origin = board_origin(cell_dim) + cell_dim.center();
    let radius = cell_dim.side * 0.45;

    let segments = segments.into_iter();
    let len = segments.len();
    for (seg, cell) in segments.enumerate() {
        let center = origin + cell_dim.to_point(cell);
        painter.fill_circle(center, radius, palette.segment_color(seg, len))?;
    }
    Ok(())
}

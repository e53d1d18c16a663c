//! Meshes for the board, the snake and the apple.
//!
//! Shapes are emitted through [`CellPainter`] so that the geometry can be
//! checked without a graphics context, the ggez implementation forwards
//! to a [`MeshBuilder`].

use ggez::graphics::{Color, DrawMode, Mesh, MeshBuilder, Rect};
use ggez::Context;

pub use apple_mesh::paint_apple;
pub use board_mesh::paint_board;
pub use snake_mesh::paint_snake;

use crate::basic::{CellDim, Point};
use crate::error::{ErrorConversion, Result};

mod apple_mesh;
mod board_mesh;
#[cfg(test)]
pub mod recording;
mod snake_mesh;

pub trait CellPainter {
    fn fill_rect(&mut self, top_left: Point, size: Point, color: Color) -> Result;
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) -> Result;
}

impl CellPainter for MeshBuilder {
    fn fill_rect(&mut self, top_left: Point, size: Point, color: Color) -> Result {
        let rect = Rect::new(top_left.x, top_left.y, size.x, size.y);
        self.rectangle(DrawMode::fill(), rect, color)?;
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) -> Result {
        self.circle(DrawMode::fill(), center, radius, 0.1, color)?;
        Ok(())
    }
}

/// Pixel offset of the board's top-left cell, leaves room for the border band
pub fn board_origin(cell_dim: CellDim) -> Point {
    Point::square(cell_dim.side)
}

/// Collect whatever `paint` emits into a single mesh
pub fn build_mesh<F>(ctx: &Context, name: &str, paint: F) -> Result<Mesh>
where
    F: FnOnce(&mut MeshBuilder) -> Result,
{
    let mut builder = MeshBuilder::new();
    paint(&mut builder).with_trace_step(name)?;
    Ok(Mesh::from_data(ctx, builder.build()))
}

use ggez::graphics::Color;

use crate::basic::Point;
use crate::error::Result;
use crate::rendering::CellPainter;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Rect { top_left: Point, size: Point, color: Color },
    Circle { center: Point, radius: f32, color: Color },
}

/// Keeps every shape in the order it was painted
#[derive(Default)]
pub struct RecordingPainter {
    pub shapes: Vec<Shape>,
}

impl RecordingPainter {
    pub fn circles(&self) -> Vec<(Point, f32, Color)> {
        self.shapes
            .iter()
            .filter_map(|shape| match *shape {
                Shape::Circle { center, radius, color } => Some((center, radius, color)),
                _ => None,
            })
            .collect()
    }

    pub fn rects(&self) -> Vec<(Point, Point, Color)> {
        self.shapes
            .iter()
            .filter_map(|shape| match *shape {
                Shape::Rect { top_left, size, color } => Some((top_left, size, color)),
                _ => None,
            })
            .collect()
    }
}

impl CellPainter for RecordingPainter {
    fn fill_rect(&mut self, top_left: Point, size: Point, color: Color) -> Result {
        self.shapes.push(Shape::Rect { top_left, size, color });
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) -> Result {
        self.shapes.push(Shape::Circle { center, radius, color });
        Ok(())
    }
}

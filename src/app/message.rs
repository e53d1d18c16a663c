use ggez::graphics::{Canvas, Color, DrawParam, PxScale, Text, TextAlign, TextLayout};
use ggez::Context;
use std::time::Duration;

use crate::basic::Point;
use crate::game::Score;

/// Finite number of possible messages
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum MessageID {
    Title,
    /// Score and time alive
    Status,
    /// Measured logic and render rates
    Fps,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Position {
    TopLeft,
    TopRight,
}

pub struct Message {
    pub text: String,

    pub position: Position,
    pub h_margin: f32,
    pub v_margin: f32,
    pub font_size: f32,
    /// Name under which the font was registered with ggez
    pub font: Option<&'static str>,
    pub color: Color,
}

impl Message {
    pub const DEFAULT_MARGIN: f32 = 10.;

    pub fn new(text: String, position: Position, font_size: f32, color: Color) -> Self {
        Self {
            text,
            position,
            h_margin: Self::DEFAULT_MARGIN,
            v_margin: 0.,
            font_size,
            font: None,
            color,
        }
    }

    pub fn font(mut self, font: Option<&'static str>) -> Self {
        self.font = font;
        self
    }

    fn dest(&self, width: f32) -> Point {
        match self.position {
            Position::TopLeft => Point { x: self.h_margin, y: self.v_margin },
            Position::TopRight => Point {
                x: width - self.h_margin,
                y: self.v_margin,
            },
        }
    }

    pub fn draw(&self, ctx: &Context, canvas: &mut Canvas) {
        let (width, _) = ctx.gfx.drawable_size();

        let layout = match self.position {
            Position::TopLeft => TextLayout::top_left(),
            Position::TopRight => TextLayout {
                h_align: TextAlign::End,
                v_align: TextAlign::Begin,
            },
        };

        let mut text = Text::new(self.text.as_str());
        text.set_scale(PxScale::from(self.font_size)).set_layout(layout);
        if let Some(font) = self.font {
            text.set_font(font);
        }

        let dp = DrawParam::default().dest(self.dest(width)).color(self.color);
        canvas.draw(&text, dp)
    }
}

/// Whole seconds, the fraction is dropped
pub fn status_text(score: Score, time_alive: Duration) -> String {
    format!("Score: {} | Time: {}s", score, time_alive.as_secs())
}

pub fn fps_text(logic_fps: f64, render_fps: f64) -> String {
    format!("u: {:.2} g: {:.2}", logic_fps, render_fps)
}

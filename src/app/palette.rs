use ggez::graphics::Color;

lazy_static! {
    static ref DEFAULT_BACKGROUND_COLOR: Color = Color::from_rgb(21, 127, 31);
    static ref DEFAULT_LIGHT_CELL_COLOR: Color = Color::from_rgb(169, 215, 81);
    static ref DEFAULT_DARK_CELL_COLOR: Color = Color::from_rgb(162, 208, 73);
    static ref DEFAULT_BORDER_COLOR: Color = Color::from_rgb(86, 138, 53);
    static ref DEFAULT_SNAKE_HEAD_COLOR: Color = Color::from_rgb(68, 110, 231);
    static ref DEFAULT_SNAKE_TAIL_COLOR: Color = Color::from_rgb(77, 123, 242);
    static ref DEFAULT_APPLE_COLOR: Color = Color::from_rgb(230, 71, 29);
    static ref DEFAULT_STEM_COLOR: Color = Color::from_rgb(34, 139, 34);
    static ref DEFAULT_FPS_WARNING_COLOR: Color = Color::from_rgb(235, 168, 52);
}

pub struct Palette {
    pub background_color: Color,
    pub light_cell_color: Color,
    pub dark_cell_color: Color,
    pub border_color: Color,

    pub snake_head_color: Color,
    pub snake_tail_color: Color,
    pub apple_color: Color,
    pub stem_color: Color,

    pub hud_color: Color,
    pub fps_warning_color: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background_color: *DEFAULT_BACKGROUND_COLOR,
            light_cell_color: *DEFAULT_LIGHT_CELL_COLOR,
            dark_cell_color: *DEFAULT_DARK_CELL_COLOR,
            border_color: *DEFAULT_BORDER_COLOR,

            snake_head_color: *DEFAULT_SNAKE_HEAD_COLOR,
            snake_tail_color: *DEFAULT_SNAKE_TAIL_COLOR,
            apple_color: *DEFAULT_APPLE_COLOR,
            stem_color: *DEFAULT_STEM_COLOR,

            hud_color: Color::WHITE,
            fps_warning_color: *DEFAULT_FPS_WARNING_COLOR,
        }
    }
}

impl Palette {
    /// Linear head to tail gradient, `seg` 0 is the head
    pub fn segment_color(&self, seg: usize, len: usize) -> Color {
        let (head, tail) = (self.snake_head_color, self.snake_tail_color);
        if len <= 1 {
            return head;
        }
        let tail_ratio = seg as f32 / (len - 1) as f32;
        let head_ratio = 1. - tail_ratio;
        Color {
            r: head_ratio * head.r + tail_ratio * tail.r,
            g: head_ratio * head.g + tail_ratio * tail.g,
            b: head_ratio * head.b + tail_ratio * tail.b,
            a: 1.,
        }
    }
}

#[test]
fn test_segment_gradient() {
    let palette = Palette::default();
    assert_eq!(palette.segment_color(0, 5), palette.snake_head_color);
    assert_eq!(palette.segment_color(4, 5), palette.snake_tail_color);
    assert_eq!(palette.segment_color(0, 1), palette.snake_head_color);

    let middle = palette.segment_color(2, 5);
    let expected_r = (palette.snake_head_color.r + palette.snake_tail_color.r) / 2.;
    assert!((middle.r - expected_r).abs() < 1e-6);
}

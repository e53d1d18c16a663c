use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;

pub struct Prefs {
    pub title: String,
    pub cell_side: f32,

    pub logic_interval: Duration,
    pub render_interval: Duration,

    pub draw_hud: bool,
    pub draw_border: bool,
    pub display_fps: bool,
    pub fps_report_interval: Duration,

    /// The ggez default font is used when unset
    pub hud_font: Option<PathBuf>,
    pub hud_font_size: f32,

    pub log_dir: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            title: "SnakeAI".to_string(),
            cell_side: 30.,

            logic_interval: Duration::from_millis(100),
            render_interval: Duration::from_micros(16_667),

            draw_hud: true,
            draw_border: true,
            display_fps: false,
            fps_report_interval: Duration::from_secs(5),

            hud_font: None,
            hud_font_size: 24.,

            log_dir: PathBuf::from("."),
            log_level: LevelFilter::Info,
        }
    }
}

impl Prefs {
    pub const FONT_VAR: &'static str = "SNAKE_FONT";
    pub const LOG_DIR_VAR: &'static str = "SNAKE_LOG_DIR";
    pub const LOG_LEVEL_VAR: &'static str = "SNAKE_LOG_LEVEL";

    pub fn from_env() -> Self {
        Self::default().with_vars(|key| std::env::var(key).ok())
    }

    /// Override fields from variables, unparseable values are ignored
    pub fn with_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(font) = var(Self::FONT_VAR).filter(|s| !s.is_empty()) {
            self.hud_font = Some(PathBuf::from(font));
        }
        if let Some(dir) = var(Self::LOG_DIR_VAR).filter(|s| !s.is_empty()) {
            self.log_dir = PathBuf::from(dir);
        }
        if let Some(level) = var(Self::LOG_LEVEL_VAR).and_then(|s| s.parse().ok()) {
            self.log_level = level;
        }
        self
    }
}

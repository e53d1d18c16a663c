#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate lazy_static;

use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::run;
use ggez::ContextBuilder;

use crate::app::prefs::Prefs;
use crate::app::App;
use crate::basic::Point;
use crate::error::{Error, ErrorConversion, Result};

mod app;
mod apple;
mod basic;
mod error;
mod event_log;
mod game;
mod logging;
mod rendering;
mod snake;

fn main() -> Result {
    let prefs = Prefs::from_env();
    logging::init(&prefs)?;

    let Point { x: width, y: height } = app::window_size(&prefs);
    let wm = WindowMode::default()
        .dimensions(width, height)
        .resizable(false);
    let ws = WindowSetup::default().title(&prefs.title).vsync(true);

    let (mut ctx, event_loop) = ContextBuilder::new("grid_snake", "gorilskij")
        .window_mode(wm)
        .window_setup(ws)
        .build()
        .map_err(|e| Error::initialization(format!("window: {}", e)))
        .with_trace_step("main")?;

    let app = App::new(&mut ctx, prefs).with_trace_step("main")?;
    log::info!("window {}x{} opened", width, height);
    run(ctx, event_loop, app)
}

use ggez::event::{ErrorOrigin, EventHandler};
use ggez::graphics::{Canvas, DrawParam, FontData, Mesh};
use ggez::input::keyboard::KeyInput;
use ggez::Context;
use rand::Rng;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::app::control::Control;
use crate::app::keyboard_control::{key_action, Controls, KeyAction, TurnLatch};
use crate::app::message::{fps_text, status_text, Message, MessageID, Position};
use crate::app::palette::Palette;
use crate::app::prefs::Prefs;
use crate::basic::{CellDim, Dir, Point};
use crate::error::{Error, ErrorConversion, Result};
use crate::event_log::{EventLog, Journal};
use crate::game::{Game, BOARD_DIM};
use crate::rendering::{build_mesh, paint_apple, paint_board, paint_snake};

pub mod control;
pub mod keyboard_control;
pub mod message;
pub mod palette;
pub mod prefs;

/// Name the configured HUD font is registered under
const HUD_FONT: &str = "hud";
const TITLE: &str = "Snake AI";

/// Window size in pixels, the board plus a one-cell border on each side
pub fn window_size(prefs: &Prefs) -> Point {
    let cell_dim = CellDim::from(prefs.cell_side);
    cell_dim.board_size(BOARD_DIM) + Point::square(2. * cell_dim.side)
}

fn load_font(ctx: &mut Context, path: &Path) -> Result {
    let bytes = fs::read(path)
        .map_err(|e| Error::initialization(format!("font {}: {}", path.display(), e)))?;
    ctx.gfx.add_font(HUD_FONT, FontData::from_vec(bytes)?);
    Ok(())
}

/// Apple and snake, rebuilt on every render tick
fn scene_mesh(ctx: &Context, game: &Game, cell_dim: CellDim, palette: &Palette) -> Result<Mesh> {
    let state = game.state();
    build_mesh(ctx, "scene_mesh", |builder| {
        paint_apple(builder, state.apple, cell_dim, palette)?;
        paint_snake(builder, state.snake.cells(), cell_dim, palette)
    })
}

/// One input pass: the queued turns go through a [`TurnLatch`], at most
/// one of them reaches the game. The queue is emptied either way.
fn steer_from_input<R: Rng>(game: &mut Game<R>, pending_turns: &mut Vec<Dir>) -> Option<Dir> {
    let mut latch = TurnLatch::new(game.state().dir);
    for dir in pending_turns.drain(..) {
        latch.offer(dir);
    }
    let dir = latch.accepted()?;
    game.steer(dir).then_some(dir)
}

pub struct App {
    prefs: Prefs,
    palette: Palette,
    cell_dim: CellDim,
    font: Option<&'static str>,

    control: Control,
    controls: [Controls; 2],
    /// Turns pressed since the last logic tick, oldest first
    pending_turns: Vec<Dir>,
    last_fps_report: Instant,

    game: Game,
    journal: Journal,

    board_mesh: Mesh,
    scene_mesh: Mesh,
    hud: HashMap<MessageID, Message>,
}

impl App {
    pub fn new(ctx: &mut Context, prefs: Prefs) -> Result<Self> {
        let now = Instant::now();

        let font = match &prefs.hud_font {
            Some(path) => {
                load_font(ctx, path).with_trace_step("App::new")?;
                Some(HUD_FONT)
            }
            None => None,
        };

        let mut journal = Journal::open(&prefs.log_dir).with_trace_step("App::new")?;
        journal.telemetry(&format!("session {} started", journal.session_id()));

        let game = Game::new(BOARD_DIM, rand::thread_rng(), now)?;
        let palette = Palette::default();
        let cell_dim = CellDim::from(prefs.cell_side);

        let board_mesh = build_mesh(ctx, "board_mesh", |builder| {
            paint_board(builder, BOARD_DIM, cell_dim, &palette, prefs.draw_border)
        })?;

        let scene_mesh = scene_mesh(ctx, &game, cell_dim, &palette)?;

        let mut app = Self {
            control: Control::new(prefs.logic_interval, prefs.render_interval, now),
            controls: [Controls::ARROWS, Controls::WASD],
            pending_turns: vec![],
            last_fps_report: now,

            board_mesh,
            scene_mesh,
            hud: HashMap::new(),

            prefs,
            palette,
            cell_dim,
            font,
            game,
            journal,
        };
        app.update_hud(now);
        Ok(app)
    }

    /// One input pass followed by one engine tick
    fn logic_tick(&mut self, now: Instant) -> Result {
        steer_from_input(&mut self.game, &mut self.pending_turns);
        self.game
            .tick(now, &mut self.journal)
            .with_trace_step("App::logic_tick")?;

        if now.saturating_duration_since(self.last_fps_report) >= self.prefs.fps_report_interval {
            self.last_fps_report = now;
            let text = fps_text(self.control.measured_logic_fps(), self.control.measured_render_fps());
            self.journal.telemetry(&format!("fps: {}", text));
        }
        Ok(())
    }

    fn update_hud(&mut self, now: Instant) {
        let size = self.prefs.hud_font_size;
        let color = self.palette.hud_color;
        let state = self.game.state();

        self.hud.insert(
            MessageID::Title,
            Message::new(TITLE.to_string(), Position::TopLeft, size, color).font(self.font),
        );
        self.hud.insert(
            MessageID::Status,
            Message::new(status_text(state.score, state.time_alive(now)), Position::TopRight, size, color)
                .font(self.font),
        );

        if self.prefs.display_fps {
            self.update_fps_message();
        } else {
            self.hud.remove(&MessageID::Fps);
        }
    }

    fn update_fps_message(&mut self) {
        let logic_fps = self.control.measured_logic_fps();
        let render_fps = self.control.measured_render_fps();
        let expected_logic_fps = 1. / self.prefs.logic_interval.as_secs_f64();

        // > 5% undershoot
        let color = if logic_fps < expected_logic_fps * 0.95 {
            self.palette.fps_warning_color
        } else {
            self.palette.hud_color
        };

        let size = self.prefs.hud_font_size;
        let message = Message {
            v_margin: size,
            ..Message::new(fps_text(logic_fps, render_fps), Position::TopLeft, size * 0.75, color)
        };
        self.hud.insert(MessageID::Fps, message.font(self.font));
    }

    /// Report the session once, later calls do nothing
    fn finish(&mut self) {
        if let Some(summary) = self.game.quit(Instant::now(), &mut self.journal) {
            log::info!(
                "final score {}, best score {}",
                summary.final_score,
                summary.best_score
            );
        }
    }
}

impl EventHandler<Error> for App {
    fn update(&mut self, _ctx: &mut Context) -> Result {
        if !self.game.is_running() {
            return Ok(());
        }
        let now = Instant::now();
        if self.control.logic_due(now) {
            self.logic_tick(now)?;
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        let now = Instant::now();
        if self.control.render_due(now) {
            self.scene_mesh = scene_mesh(ctx, &self.game, self.cell_dim, &self.palette)
                .with_trace_step("App::draw")?;
            self.update_hud(now);
        }

        let mut canvas = Canvas::from_frame(ctx, self.palette.background_color);
        canvas.draw(&self.board_mesh, DrawParam::default());
        canvas.draw(&self.scene_mesh, DrawParam::default());
        if self.prefs.draw_hud {
            for message in self.hud.values() {
                message.draw(ctx, &mut canvas);
            }
        }
        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> Result {
        let Some(key) = input.keycode else {
            return Ok(());
        };
        match key_action(&self.controls, key, input.mods) {
            KeyAction::Turn(dir) => self.pending_turns.push(dir),
            KeyAction::Quit => ctx.request_quit(),
            KeyAction::ToggleFps => {
                self.prefs.display_fps = !self.prefs.display_fps;
                log::debug!("fps display {}", self.prefs.display_fps);
            }
            KeyAction::None => {}
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> Result<bool> {
        self.finish();
        Ok(false)
    }

    fn on_error(&mut self, _ctx: &mut Context, origin: ErrorOrigin, e: Error) -> bool {
        log::error!("{:?} failed: {:?}", origin, e);
        self.finish();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::Cell;
    use crate::event_log::recorder::Recorder;
    use crate::game::GameState;
    use crate::snake::Snake;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn moving_right() -> Game<StdRng> {
        let state = GameState {
            snake: Snake::new([Cell::new(10, 10), Cell::new(10, 9), Cell::new(10, 8)]),
            apple: Cell::new(0, 0),
            dir: Dir::Right,
            score: 0,
            start: Instant::now(),
            running: true,
        };
        Game::from_state(BOARD_DIM, state, StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_first_queued_turn_steers_the_tick() {
        let mut game = moving_right();
        let mut pending = vec![Dir::Up, Dir::Down];

        assert_eq!(steer_from_input(&mut game, &mut pending), Some(Dir::Up));
        assert!(pending.is_empty());

        game.tick(Instant::now(), &mut Recorder::default()).unwrap();
        assert_eq!(game.state().snake.head().unwrap(), Cell::new(9, 10));
    }

    #[test]
    fn test_reversal_in_queue_is_skipped() {
        let mut game = moving_right();
        let mut pending = vec![Dir::Left, Dir::Down];

        assert_eq!(steer_from_input(&mut game, &mut pending), Some(Dir::Down));
        game.tick(Instant::now(), &mut Recorder::default()).unwrap();
        assert_eq!(game.state().snake.head().unwrap(), Cell::new(11, 10));
    }

    #[test]
    fn test_empty_queue_keeps_heading() {
        let mut game = moving_right();
        assert_eq!(steer_from_input(&mut game, &mut vec![]), None);
        game.tick(Instant::now(), &mut Recorder::default()).unwrap();
        assert_eq!(game.state().snake.head().unwrap(), Cell::new(10, 11));
    }
}

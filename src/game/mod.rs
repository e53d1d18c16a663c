use std::cmp::max;
use std::time::{Duration, Instant};

use rand::rngs::ThreadRng;
use rand::Rng;

pub use collisions::{find_collision, Outcome};

use crate::apple::spawn_apple;
use crate::basic::{BoardDim, Cell, Dir};
use crate::error::{Error, ErrorConversion, Result};
use crate::event_log::{EventLog, SessionSummary};
use crate::snake::Snake;

mod collisions;

pub type Score = u32;

pub const BOARD_DIM: BoardDim = BoardDim::new(20, 20);
pub const INITIAL_BODY: [Cell; 3] = [Cell::new(10, 10), Cell::new(10, 9), Cell::new(10, 8)];
pub const INITIAL_DIR: Dir = Dir::Right;

/// Scores that get an achievement message
pub const ACHIEVEMENTS: [Score; 5] = [5, 10, 25, 50, 100];

const fn initial_body_fits(board_dim: BoardDim) -> bool {
    let mut i = 0;
    while i < INITIAL_BODY.len() {
        let Cell { row, col } = INITIAL_BODY[i];
        if row < 0 || row >= board_dim.rows || col < 0 || col >= board_dim.cols {
            return false;
        }
        i += 1;
    }
    true
}

static_assertions::const_assert!(initial_body_fits(BOARD_DIM));
// the first move must not leave the board
static_assertions::const_assert!(INITIAL_BODY[0].col + 1 < BOARD_DIM.cols);

#[derive(Clone, Debug)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Cell,
    pub dir: Dir,
    pub score: Score,
    /// When the current round started
    pub start: Instant,
    pub running: bool,
}

impl GameState {
    pub fn time_alive(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start)
    }
}

/// Movement and collision engine, advanced one cell per logic tick
pub struct Game<R: Rng = ThreadRng> {
    board_dim: BoardDim,
    state: GameState,
    best_score: Score,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(board_dim: BoardDim, mut rng: R, now: Instant) -> Result<Self> {
        let snake = Snake::new(INITIAL_BODY);
        let apple = spawn_apple(board_dim, &snake, &mut rng)
            .ok_or_else(|| Error::invariant("no room for the first apple"))?;

        Ok(Self {
            board_dim,
            state: GameState {
                snake,
                apple,
                dir: INITIAL_DIR,
                score: 0,
                start: now,
                running: true,
            },
            best_score: 0,
            rng,
        })
    }

    /// Continue from an arbitrary state
    pub fn from_state(board_dim: BoardDim, state: GameState, rng: R) -> Self {
        Self {
            board_dim,
            best_score: state.score,
            state,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Change direction unless `dir` reverses into the snake's neck
    pub fn steer(&mut self, dir: Dir) -> bool {
        if dir.is_opposite(self.state.dir) {
            return false;
        }
        log::debug!("turning {}", dir);
        self.state.dir = dir;
        true
    }

    pub fn tick(&mut self, now: Instant, log: &mut dyn EventLog) -> Result<Outcome> {
        let next_head = self
            .state
            .snake
            .head()
            .with_trace_step("Game::tick")?
            .translate(self.state.dir);
        let outcome = find_collision(self.board_dim, &self.state.snake, self.state.apple, next_head);

        if outcome.is_fatal() {
            log::debug!("{:?} at {:?}", outcome, next_head);
            log.death(self.state.score, self.state.time_alive(now));
            self.reset(now)?;
            return Ok(outcome);
        }

        match outcome {
            Outcome::FoodEaten => {
                self.state.snake.push_head(next_head);
                self.state.score += 1;
                self.best_score = max(self.best_score, self.state.score);

                let score = self.state.score;
                log.score_update(score);
                if ACHIEVEMENTS.contains(&score) {
                    log.telemetry(&format!("achievement: reached a score of {}", score));
                }

                match spawn_apple(self.board_dim, &self.state.snake, &mut self.rng) {
                    Some(apple) => {
                        log::debug!("apple spawned at {:?}", apple);
                        self.state.apple = apple;
                    }
                    None => {
                        log.telemetry(&format!("achievement: board cleared with a score of {}", score));
                        log.death(score, self.state.time_alive(now));
                        self.reset(now)?;
                    }
                }
            }
            // safe move
            _ => {
                self.state.snake.push_head(next_head);
                self.state.snake.pop_tail();
            }
        }

        Ok(outcome)
    }

    /// Back to the initial body, direction and score with a fresh apple
    pub fn reset(&mut self, now: Instant) -> Result {
        let state = &mut self.state;
        state.snake.reset(&INITIAL_BODY);
        state.dir = INITIAL_DIR;
        state.score = 0;
        state.start = now;
        state.apple = spawn_apple(self.board_dim, &state.snake, &mut self.rng)
            .ok_or_else(|| Error::invariant("no room for an apple after reset"))
            .with_trace_step("Game::reset")?;
        log::info!("game reset");
        Ok(())
    }

    /// Stop the game and report the final numbers, only the first call reports
    pub fn quit(&mut self, now: Instant, log: &mut dyn EventLog) -> Option<SessionSummary> {
        if !self.state.running {
            return None;
        }
        self.state.running = false;

        let summary = SessionSummary {
            final_score: self.state.score,
            time_alive: self.state.time_alive(now),
            best_score: self.best_score,
        };
        log.session_end(&summary);
        Some(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_log::recorder::{Event, Recorder};
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn cells(cells: &[(isize, isize)]) -> Vec<Cell> {
        cells.iter().copied().map(Cell::from).collect()
    }

    fn game_with(body: &[(isize, isize)], dir: Dir, apple: (isize, isize)) -> Game<StdRng> {
        let state = GameState {
            snake: Snake::new(cells(body)),
            apple: apple.into(),
            dir,
            score: 0,
            start: Instant::now(),
            running: true,
        };
        Game::from_state(BOARD_DIM, state, StdRng::seed_from_u64(42))
    }

    fn assert_consistent(game: &Game<StdRng>) {
        let body = game.state.snake.cells().collect_vec();
        let unique: HashSet<_> = body.iter().copied().collect();
        assert_eq!(unique.len(), body.len(), "duplicate cells in {:?}", body);
        assert!(!game.state.snake.occupies(game.state.apple));
        assert!(game.board_dim.contains(game.state.apple));
        assert!(!body.is_empty());
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(BOARD_DIM, StdRng::seed_from_u64(0), Instant::now()).unwrap();
        assert_eq!(game.state.snake.cells().collect_vec(), INITIAL_BODY.to_vec());
        assert_eq!(game.state.dir, Dir::Right);
        assert_eq!(game.state.score, 0);
        assert!(game.is_running());
        assert_consistent(&game);
    }

    #[test]
    fn test_safe_move_keeps_length() {
        let mut game = game_with(&[(10, 10), (10, 9), (10, 8)], Dir::Right, (0, 0));
        let mut log = Recorder::default();

        let outcome = game.tick(Instant::now(), &mut log).unwrap();

        assert_eq!(outcome, Outcome::SafeMove);
        assert_eq!(
            game.state.snake.cells().collect_vec(),
            cells(&[(10, 11), (10, 10), (10, 9)])
        );
        assert_eq!(game.state.score, 0);
        assert!(log.events.is_empty());
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut game = game_with(&[(10, 10), (10, 9), (10, 8)], Dir::Right, (10, 11));
        let mut log = Recorder::default();

        let outcome = game.tick(Instant::now(), &mut log).unwrap();

        assert_eq!(outcome, Outcome::FoodEaten);
        assert_eq!(
            game.state.snake.cells().take(3).collect_vec(),
            cells(&[(10, 11), (10, 10), (10, 9)])
        );
        assert_eq!(game.state.snake.len(), 4);
        assert_eq!(game.state.score, 1);
        assert_eq!(game.best_score, 1);
        assert_eq!(log.events, vec![Event::Score(1)]);
        assert_consistent(&game);
    }

    #[test]
    fn test_wall_collision_resets() {
        let mut game = game_with(&[(0, 5), (1, 5), (2, 5), (3, 5)], Dir::Up, (15, 15));
        game.state.score = 4;
        let start = game.state.start;
        let mut log = Recorder::default();
        let now = start + Duration::from_millis(2_500);

        let outcome = game.tick(now, &mut log).unwrap();

        assert_eq!(outcome, Outcome::WallCollision);
        assert_eq!(game.state.snake.cells().collect_vec(), INITIAL_BODY.to_vec());
        assert_eq!(game.state.score, 0);
        assert_eq!(game.state.dir, INITIAL_DIR);
        assert_eq!(game.state.start, now);
        assert_eq!(log.deaths(), vec![(4, Duration::from_millis(2_500))]);
        assert_consistent(&game);
    }

    #[test]
    fn test_self_collision_resets() {
        let mut game = game_with(
            &[(5, 5), (5, 4), (5, 3), (4, 3), (4, 4), (4, 5)],
            Dir::Up,
            (15, 15),
        );
        let mut log = Recorder::default();

        let outcome = game.tick(Instant::now(), &mut log).unwrap();

        assert_eq!(outcome, Outcome::SelfCollision);
        assert_eq!(game.state.snake.len(), 3);
        assert_eq!(game.state.score, 0);
        assert_eq!(log.deaths().len(), 1);
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut game = game_with(&[(10, 10), (10, 9), (10, 8)], Dir::Right, (0, 0));
        assert!(!game.steer(Dir::Left));
        game.tick(Instant::now(), &mut Recorder::default()).unwrap();
        assert_eq!(game.state.dir, Dir::Right);
        assert_eq!(game.state.snake.head().unwrap(), Cell::new(10, 11));

        assert!(game.steer(Dir::Down));
        assert_eq!(game.state.dir, Dir::Down);
    }

    #[test]
    fn test_double_reset_is_a_fresh_game() {
        let mut game = game_with(&[(3, 3), (3, 2), (3, 1), (3, 0)], Dir::Up, (15, 15));
        game.state.score = 2;
        let now = Instant::now();

        game.reset(now).unwrap();
        game.reset(now).unwrap();
        // keep the apple off the first move
        game.state.apple = Cell::new(0, 0);

        let outcome = game.tick(now, &mut Recorder::default()).unwrap();
        assert_eq!(outcome, Outcome::SafeMove);
        assert_eq!(
            game.state.snake.cells().collect_vec(),
            cells(&[(10, 11), (10, 10), (10, 9)])
        );
        assert_eq!(game.state.score, 0);
    }

    #[test]
    fn test_achievement_is_reported() {
        let mut game = game_with(&[(10, 10), (10, 9), (10, 8)], Dir::Right, (10, 11));
        game.state.score = ACHIEVEMENTS[0] - 1;
        let mut log = Recorder::default();

        game.tick(Instant::now(), &mut log).unwrap();

        assert_eq!(log.telemetry(), vec!["achievement: reached a score of 5"]);
    }

    #[test]
    fn test_clearing_the_board_resets() {
        // 1x4 board, the apple fills the last free cell
        let board_dim = BoardDim::new(1, 4);
        let state = GameState {
            snake: Snake::new(cells(&[(0, 2), (0, 1), (0, 0)])),
            apple: Cell::new(0, 3),
            dir: Dir::Right,
            score: 0,
            start: Instant::now(),
            running: true,
        };
        let mut game = Game::from_state(board_dim, state, StdRng::seed_from_u64(5));
        let mut log = Recorder::default();

        let outcome = game.tick(Instant::now(), &mut log).unwrap();

        assert_eq!(outcome, Outcome::FoodEaten);
        assert_eq!(game.state.score, 0);
        assert_eq!(game.best_score, 1);
        assert_eq!(log.deaths().len(), 1);
        assert_eq!(log.deaths()[0].0, 1);
        assert!(log.telemetry()[0].starts_with("achievement: board cleared"));
    }

    #[test]
    fn test_empty_snake_fails_the_tick() {
        let mut game = game_with(&[], Dir::Right, (0, 0));
        assert!(game.tick(Instant::now(), &mut Recorder::default()).is_err());
    }

    #[test]
    fn test_quit_reports_once() {
        let mut game = game_with(&[(10, 10), (10, 9), (10, 8)], Dir::Right, (10, 11));
        let mut log = Recorder::default();
        game.tick(Instant::now(), &mut log).unwrap();

        let summary = game.quit(Instant::now(), &mut log).unwrap();
        assert_eq!(summary.final_score, 1);
        assert_eq!(summary.best_score, 1);
        assert!(!game.is_running());
        assert!(game.quit(Instant::now(), &mut log).is_none());
        assert_eq!(
            log.events.iter().filter(|e| matches!(e, Event::SessionEnd(_))).count(),
            1
        );
    }

    #[test]
    fn test_random_play_keeps_invariants() {
        let mut game = Game::new(BOARD_DIM, StdRng::seed_from_u64(9), Instant::now()).unwrap();
        let mut steering = StdRng::seed_from_u64(10);
        let mut log = Recorder::default();

        for _ in 0..5_000 {
            let before = game.state.snake.len();
            game.steer(Dir::random(&mut steering));
            match game.tick(Instant::now(), &mut log).unwrap() {
                Outcome::SafeMove => assert_eq!(game.state.snake.len(), before),
                Outcome::FoodEaten => assert_eq!(game.state.snake.len(), before + 1),
                Outcome::WallCollision | Outcome::SelfCollision => {
                    assert_eq!(game.state.snake.len(), INITIAL_BODY.len());
                    assert_eq!(game.state.score, 0);
                }
            }
            assert_consistent(&game);
        }
    }
}

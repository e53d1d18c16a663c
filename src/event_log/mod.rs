//! Where the game reports what happened to it.
//!
//! Nothing reported here feeds back into the game, an [`EventLog`] is
//! free to drop, buffer or fail to write events.

use std::time::Duration;

pub use journal::Journal;

use crate::game::Score;

mod journal;
#[cfg(test)]
pub mod recorder;

/// Reported once when the loop stops
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub final_score: Score,
    pub time_alive: Duration,
    /// Highest score reached in any round of the session
    pub best_score: Score,
}

pub trait EventLog {
    /// The snake crashed, `score` and `time_alive` are from before the reset
    fn death(&mut self, score: Score, time_alive: Duration);
    fn score_update(&mut self, score: Score);
    /// Free-form session, fps and achievement messages
    fn telemetry(&mut self, event: &str);
    fn session_end(&mut self, _summary: &SessionSummary) {}
}

/// One line of the death log
pub fn death_line(score: Score, time_alive: Duration) -> String {
    format!("Score: {}, Time Alive: {:.2}s", score, time_alive.as_secs_f32())
}

#[test]
fn test_death_line() {
    assert_eq!(
        death_line(7, Duration::from_millis(12_345)),
        "Score: 7, Time Alive: 12.35s"
    );
    assert_eq!(death_line(0, Duration::ZERO), "Score: 0, Time Alive: 0.00s");
}

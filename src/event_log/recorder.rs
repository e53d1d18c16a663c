use std::time::Duration;

use crate::event_log::{EventLog, SessionSummary};
use crate::game::Score;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Death { score: Score, time_alive: Duration },
    Score(Score),
    Telemetry(String),
    SessionEnd(SessionSummary),
}

/// Keeps every event in memory
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Recorder {
    pub fn deaths(&self) -> Vec<(Score, Duration)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Death { score, time_alive } => Some((*score, *time_alive)),
                _ => None,
            })
            .collect()
    }

    pub fn telemetry(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Telemetry(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl EventLog for Recorder {
    fn death(&mut self, score: Score, time_alive: Duration) {
        self.events.push(Event::Death { score, time_alive })
    }

    fn score_update(&mut self, score: Score) {
        self.events.push(Event::Score(score))
    }

    fn telemetry(&mut self, event: &str) {
        self.events.push(Event::Telemetry(event.to_string()))
    }

    fn session_end(&mut self, summary: &SessionSummary) {
        self.events.push(Event::SessionEnd(*summary))
    }
}

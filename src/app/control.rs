use std::{
    cmp::max,
    collections::VecDeque,
    time::{Duration, Instant},
};

/// Stores an instant along with the number of frames it represents
struct NFrameInstant(usize, Instant);

/// Objective measurement of framerate based on periodic calls
/// to [`FpsCounter::register_frames`], completely detached from the
/// pacing mechanism
struct FpsCounter {
    /// An `Instant` is stored every `step` frames
    step: usize,
    /// Counts down from `step` to 0 to tell when the next
    /// `Instant` should be stored
    n: usize,
    buffer: VecDeque<NFrameInstant>,
}

impl FpsCounter {
    /// Number of `Instant`s to store in `buffer`
    const LEN: usize = 10;

    fn new(expected_fps: f64) -> Self {
        // store an instant ~every second, but at most every frame
        Self {
            step: max(1, expected_fps as usize),
            n: 0,
            buffer: VecDeque::with_capacity(Self::LEN),
        }
    }

    fn register_frames(&mut self, num_frames: usize, now: Instant) {
        if self.n < num_frames {
            if self.buffer.len() >= Self::LEN {
                self.buffer.pop_front();
            }
            self.buffer
                .push_back(NFrameInstant(self.step - self.n + num_frames - 1, now));
            self.n = self.step - 1;
        } else {
            self.n -= num_frames;
        }
    }

    /// The framerate is calculated as the inverse of the
    /// average frame duration
    fn fps(&self) -> f64 {
        if self.buffer.len() >= 2 {
            let first_frame = self.buffer[0].1;
            let last_frame = self.buffer[self.buffer.len() - 1].1;
            let total_buffer_duration = (last_frame - first_frame).as_secs_f64();
            let num_frames = self.buffer.iter().skip(1).map(|nfi| nfi.0).sum::<usize>() as f64;
            num_frames / total_buffer_duration
        } else {
            0.
        }
    }
}

/// Paces logic ticks and render ticks on one thread.
///
/// A due logic tick moves `last_logic` forward by exactly one interval so
/// ticks don't drift, a late loop catches up one tick per call. A due render
/// tick restarts the render interval from the current instant.
pub struct Control {
    logic_interval: Duration,
    render_interval: Duration,
    last_logic: Instant,
    last_render: Instant,

    measured_logic_fps: FpsCounter,
    measured_render_fps: FpsCounter,
}

impl Control {
    pub fn new(logic_interval: Duration, render_interval: Duration, now: Instant) -> Self {
        Self {
            logic_interval,
            render_interval,
            last_logic: now,
            last_render: now,

            measured_logic_fps: FpsCounter::new(1. / logic_interval.as_secs_f64()),
            measured_render_fps: FpsCounter::new(1. / render_interval.as_secs_f64()),
        }
    }

    pub fn logic_due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_logic) < self.logic_interval {
            return false;
        }
        self.last_logic += self.logic_interval;
        self.measured_logic_fps.register_frames(1, now);
        true
    }

    pub fn render_due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_render) < self.render_interval {
            return false;
        }
        self.last_render = now;
        self.measured_render_fps.register_frames(1, now);
        true
    }

    pub fn measured_logic_fps(&self) -> f64 {
        self.measured_logic_fps.fps()
    }

    pub fn measured_render_fps(&self) -> f64 {
        self.measured_render_fps.fps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIC: Duration = Duration::from_millis(100);
    const RENDER: Duration = Duration::from_millis(16);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_logic_fires_once_per_interval() {
        let t0 = Instant::now();
        let mut control = Control::new(LOGIC, RENDER, t0);

        assert!(!control.logic_due(t0 + ms(50)));
        assert!(control.logic_due(t0 + ms(100)));
        assert!(!control.logic_due(t0 + ms(150)));
        assert!(control.logic_due(t0 + ms(205)));
        // advanced to 200, not to 205
        assert!(control.logic_due(t0 + ms(300)));
    }

    #[test]
    fn test_late_logic_catches_up_one_tick_per_call() {
        let t0 = Instant::now();
        let mut control = Control::new(LOGIC, RENDER, t0);

        let now = t0 + ms(350);
        assert!(control.logic_due(now));
        assert!(control.logic_due(now));
        assert!(control.logic_due(now));
        assert!(!control.logic_due(now));
    }

    #[test]
    fn test_render_restarts_from_now() {
        let t0 = Instant::now();
        let mut control = Control::new(LOGIC, RENDER, t0);

        assert!(!control.render_due(t0 + ms(10)));
        assert!(control.render_due(t0 + ms(40)));
        // one render regardless of how late it was
        assert!(!control.render_due(t0 + ms(50)));
        assert!(control.render_due(t0 + ms(56)));
    }

    #[test]
    fn test_fps_counter() {
        let t0 = Instant::now();
        let mut counter = FpsCounter::new(10.);
        assert_eq!(counter.fps(), 0.);

        for i in 0..=30 {
            counter.register_frames(1, t0 + ms(10 * i));
        }
        assert!((counter.fps() - 100.).abs() < 1e-6, "{}", counter.fps());
    }
}

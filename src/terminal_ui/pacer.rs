// Standard library
use std::time::{Duration, Instant};

/// Decides when the next generation is due. The display loop owns pacing:
/// the engine itself is stateless with respect to time.
pub struct Pacer {
    last_step: Instant,
    slow: bool,
    paused: bool,
}

impl Pacer {
    pub fn new(now: Instant) -> Self {
        Self {
            last_step: now,
            slow: false,
            paused: false,
        }
    }

    /// True when enough wall-clock time has elapsed for another generation.
    pub fn step_due(&mut self, now: Instant) -> bool {
        if self.paused {
            return false;
        }
        let interval = if self.slow {
            SLOW_INTERVAL
        } else {
            NORMAL_INTERVAL
        };
        if now.duration_since(self.last_step) >= interval {
            self.last_step = now;
            true
        } else {
            false
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn toggle_slow(&mut self) {
        self.slow = !self.slow;
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn is_slow(&self) -> bool {
        self.slow
    }
}

const NORMAL_INTERVAL: Duration = Duration::from_micros(33_333); // 1/30 s
const SLOW_INTERVAL: Duration = Duration::from_millis(250);

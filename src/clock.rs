use std::thread;
use std::time::{Duration, Instant};

/// Paces the main loop
pub trait Clock {
    /// Blocks until the next frame boundary
    fn tick(&mut self);
}

/// Sleeps away whatever is left of each frame at a fixed rate
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / frame_rate.max(1),
            last: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Time left in the current frame as of `now`
    pub fn remaining(&self, now: Instant) -> Duration {
        self.frame.saturating_sub(now.saturating_duration_since(self.last))
    }
}

impl Clock for FrameClock {
    fn tick(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.last = Instant::now();
    }
}

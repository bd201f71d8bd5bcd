//! Frame pacing.

use std::thread;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Block until at least `1/rate` seconds have passed since the previous call.
    fn tick(&mut self, rate: u32);
}

/// Sleep-based clock. The first call returns immediately.
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock { last: None }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        FrameClock::new()
    }
}

impl Clock for FrameClock {
    fn tick(&mut self, rate: u32) {
        let frame = Duration::from_secs(1) / rate.max(1);
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < frame {
                thread::sleep(frame - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_does_not_block() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick(1);
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn caps_rate() {
        let mut clock = FrameClock::new();
        clock.tick(50);
        let start = Instant::now();
        clock.tick(50);
        clock.tick(50);
        // Two full frames at 50/s.
        assert!(start.elapsed() >= Duration::from_millis(39));
    }
}

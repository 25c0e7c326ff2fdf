//! Time source for the sampling loop.

use fugit::{MicrosDurationU64, TimerInstantU64};

/// Microsecond timestamp on a monotonic timeline.
pub type Instant = TimerInstantU64<1_000_000>;

pub trait Clock {
    fn now(&mut self) -> Instant;

    fn sleep(&mut self, duration: MicrosDurationU64);
}

/// Process-local monotonic clock. Timestamps count from its creation.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: std::time::Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&mut self) -> Instant {
        // u64 microseconds last ~584k years.
        Instant::from_ticks(self.origin.elapsed().as_micros() as u64)
    }

    fn sleep(&mut self, duration: MicrosDurationU64) {
        std::thread::sleep(std::time::Duration::from_micros(duration.ticks()));
    }
}

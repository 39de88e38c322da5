//! Monotonic time source for timed state (power-mode expiry, pursuer respawn)
//!
//! The simulation never reads wall-clock time itself; the caller passes a
//! clock into each tick so replays and tests can drive time by hand.

use std::cell::Cell;
use std::time::Instant;

/// Milliseconds since an arbitrary fixed origin. Must never go backwards.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Real time, measured from construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for tests and deterministic replays
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: u64) {
        debug_assert!(ms >= self.now.get(), "clock must be monotonic");
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

//! Time source for the polling loops
//!
//! Every deadline in the runner is computed from a [`Clock`] so the
//! handshake and capture loops can be driven by virtual time in tests.

use std::time::{Duration, Instant};

/// Monotonic time source with a blocking sleep
pub trait Clock {
    /// Current monotonic instant
    fn now(&self) -> Instant;

    /// Suspend the caller for `duration`
    fn sleep(&self, duration: Duration);
}

/// Wall-clock implementation backed by [`Instant`] and `thread::sleep`
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[cfg(test)]
pub use manual::ManualClock;

//! Wall-clock sources
//!
//! The face never reads the OS clock directly; it reads a `WallClock`,
//! so tests and simulators can script time instead of sleeping through
//! minute boundaries.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current wall-clock time.
pub trait WallClock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// The OS wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemWallClock;

impl WallClock for SystemWallClock {
    fn now_millis(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_millis() as i64,
            // System clock set before 1970; report the epoch instead of failing.
            Err(_) => 0,
        }
    }
}

/// Manually driven clock for tests and simulation.
///
/// Shared by value through `Arc`; the atomic lets the scripting side
/// move time while the face reads it from inside event callbacks.
#[derive(Debug, Default)]
pub struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    pub fn new(epoch_millis: i64) -> Self {
        ManualClock {
            millis: AtomicI64::new(epoch_millis),
        }
    }

    /// Jump the clock to an absolute time.
    pub fn set(&self, epoch_millis: i64) {
        self.millis.store(epoch_millis, Ordering::SeqCst);
    }

    /// Move the clock forward (or backward, with a negative delta).
    pub fn advance(&self, delta_millis: i64) {
        self.millis.fetch_add(delta_millis, Ordering::SeqCst);
    }
}

impl WallClock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_set_and_advance() {
        let clock = ManualClock::new(1_000);
        assert_eq!(clock.now_millis(), 1_000);

        clock.advance(60_000);
        assert_eq!(clock.now_millis(), 61_000);

        clock.set(5);
        assert_eq!(clock.now_millis(), 5);

        clock.advance(-10);
        assert_eq!(clock.now_millis(), -5);
    }

    #[test]
    fn test_system_clock_is_post_epoch() {
        let clock = SystemWallClock;
        assert!(clock.now_millis() > 0);
    }
}

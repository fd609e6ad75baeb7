use jiff::Timestamp;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A source of wall-clock time for identifier generators.
pub trait Clock: Send + Sync {
    /// Returns the current time of the clock.
    fn now(&self) -> Timestamp;
    /// Block and wait until the clock reaches the target time.
    fn wait_until(&self, target: Timestamp);
}

/// The real system clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }

    fn wait_until(&self, target: Timestamp) {
        // Re-check after every sleep; sleeps can wake early, and the first
        // estimate can undershoot when the clock is adjusted underneath us.
        loop {
            let now = Timestamp::now();
            if now >= target {
                return;
            }
            // Floor at 1ms so sub-millisecond gaps don't busy-spin.
            let millis = target.duration_since(now).as_millis().max(1) as u64;
            std::thread::sleep(Duration::from_millis(millis));
        }
    }
}

/// A manually driven clock for deterministic tests.
///
/// Clones share state, so a test can keep a handle while the generator
/// owns another. `wait_until` advances the clock instead of blocking,
/// which lets wait-on-overflow paths run instantly under test.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Timestamp>>,
}

impl ManualClock {
    /// Creates a clock frozen at the given instant.
    pub fn new(now: Timestamp) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Creates a clock frozen at the given epoch second.
    ///
    /// # Panics
    ///
    /// Panics if `second` is outside the representable timestamp range.
    pub fn at_second(second: i64) -> Self {
        Self::new(Timestamp::from_second(second).expect("second must be in range"))
    }

    /// Moves the clock forward by `seconds`.
    pub fn advance_secs(&self, seconds: i64) {
        let mut now = self.now.lock().expect("manual clock lock poisoned");
        *now = *now + jiff::SignedDuration::from_secs(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.now.lock().expect("manual clock lock poisoned")
    }

    fn wait_until(&self, target: Timestamp) {
        let mut now = self.now.lock().expect("manual clock lock poisoned");
        // Never move backward; waiting for a past instant is a no-op.
        if target > *now {
            *now = target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_starts_where_told() {
        let clock = ManualClock::at_second(100);
        assert_eq!(clock.now().as_second(), 100);
    }

    #[test]
    fn manual_clock_advances_on_wait() {
        let clock = ManualClock::at_second(100);
        clock.wait_until(Timestamp::from_second(1_000).unwrap());
        assert_eq!(clock.now().as_second(), 1_000);
    }

    #[test]
    fn manual_clock_never_waits_backward() {
        let clock = ManualClock::at_second(100);
        clock.wait_until(Timestamp::from_second(50).unwrap());
        assert_eq!(clock.now().as_second(), 100);
    }

    #[test]
    fn manual_clock_clones_share_state() {
        let clock = ManualClock::at_second(0);
        let handle = clock.clone();
        handle.advance_secs(5);
        assert_eq!(clock.now().as_second(), 5);
    }
}

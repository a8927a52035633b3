//! Clocks and one-shot timers.
//!
//! The controller never sleeps or spawns; deferred work is a deadline that
//! is checked against a [`Clock`] whenever the host polls. Tests and the
//! headless demo drive a [`ManualClock`] so expiry is deterministic.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current time.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock.
///
/// Clones share the same elapsed time, so a test can keep one handle and
/// give another to the controller.
///
/// ```
/// use std::time::Duration;
/// use mention_input::timer::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// let start = clock.now();
/// handle.advance(Duration::from_millis(250));
/// assert_eq!(clock.now() - start, Duration::from_millis(250));
/// ```
#[derive(Clone, Debug)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Create a clock at elapsed time zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get().saturating_add(by));
    }

    /// Time elapsed since creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }
}

/// A single pending deadline.
///
/// Arming replaces any pending deadline; firing disarms it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShotTimer {
    deadline: Option<Instant>,
}

impl OneShotTimer {
    /// Create a disarmed timer.
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to fire `delay` after `now`.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = now.checked_add(delay);
    }

    /// Disarm the timer.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Check if the pending deadline has been reached.
    #[must_use]
    pub fn has_elapsed(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Fire the timer if its deadline has been reached.
    ///
    /// Returns `true` exactly once per arming.
    pub fn fire(&mut self, now: Instant) -> bool {
        if self.has_elapsed(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let t0 = clock.now();
        other.advance(Duration::from_secs(2));
        assert_eq!(clock.elapsed(), Duration::from_secs(2));
        assert_eq!(clock.now().duration_since(t0), Duration::from_secs(2));
    }

    #[test]
    fn test_timer_fires_once() {
        let clock = ManualClock::new();
        let mut timer = OneShotTimer::new();
        timer.arm(clock.now(), Duration::from_secs(1));

        clock.advance(Duration::from_millis(999));
        assert!(!timer.fire(clock.now()));

        clock.advance(Duration::from_millis(1));
        assert!(timer.fire(clock.now()));
        assert!(!timer.fire(clock.now()));
        assert!(!timer.has_elapsed(clock.now()));
    }

    #[test]
    fn test_rearm_replaces_deadline() {
        let clock = ManualClock::new();
        let mut timer = OneShotTimer::new();
        timer.arm(clock.now(), Duration::from_secs(1));
        clock.advance(Duration::from_millis(800));
        timer.arm(clock.now(), Duration::from_secs(1));
        clock.advance(Duration::from_millis(800));
        assert!(!timer.has_elapsed(clock.now()));
        clock.advance(Duration::from_millis(200));
        assert!(timer.has_elapsed(clock.now()));
    }

    #[test]
    fn test_cancel() {
        let clock = ManualClock::new();
        let mut timer = OneShotTimer::new();
        timer.arm(clock.now(), Duration::ZERO);
        timer.cancel();
        assert!(!timer.fire(clock.now()));
        assert!(!timer.has_elapsed(clock.now()));
    }
}

//! Search debouncer
//!
//! A single cancellable pending value with a deadline, polled by the
//! UI tick. Arming replaces whatever was pending, so at most one
//! timer exists per input. Time is injected, which keeps the window
//! logic testable without sleeping.

use std::time::{Duration, Instant};

/// Debounce window for search input
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Cancellable single-timer debouncer
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Arm with a new value, restarting the inactivity window
    ///
    /// Any previously pending value is discarded.
    pub fn arm(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// Drop the pending value without firing
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Fire the pending value if its window has elapsed
    ///
    /// Fires at most once per armed value.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_only_after_window() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        let start = Instant::now();

        debouncer.arm("jersey", start);
        assert_eq!(debouncer.poll(start), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(499)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(500)),
            Some("jersey")
        );
    }

    #[test]
    fn test_fires_at_most_once() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        let start = Instant::now();

        debouncer.arm("ball", start);
        let fire_time = start + Duration::from_millis(600);
        assert_eq!(debouncer.poll(fire_time), Some("ball"));
        assert_eq!(debouncer.poll(fire_time), None);
        assert!(!debouncer.is_armed());
    }

    #[test]
    fn test_rearm_restarts_window() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        let start = Instant::now();

        // Keystrokes at 0ms, 300ms, 600ms: nothing fires until 600+500
        debouncer.arm("j", start);
        debouncer.arm("je", start + Duration::from_millis(300));
        assert_eq!(debouncer.poll(start + Duration::from_millis(550)), None);
        debouncer.arm("jer", start + Duration::from_millis(600));
        assert_eq!(debouncer.poll(start + Duration::from_millis(1050)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(1100)),
            Some("jer")
        );
    }

    #[test]
    fn test_cancel_discards_pending() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        let start = Instant::now();

        debouncer.arm("x", start);
        debouncer.cancel();
        assert_eq!(debouncer.poll(start + Duration::from_secs(10)), None);
    }
}

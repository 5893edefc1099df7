//! Timer scheduling
//!
//! A deadline scheduler polled by its owner. There is no background thread:
//! the owner calls [`TimerScheduler::poll`] from its event loop (or from a
//! test with explicit timestamps) and reacts to the ids that came due.
//!
//! Callers that need to distinguish a still-relevant timer from a superseded
//! one keep their own generation bookkeeping next to the returned
//! [`TimerId`]; the scheduler itself only tracks deadlines.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Unique identifier for a scheduled timer
    pub struct TimerId;
}

struct Timer {
    deadline_ms: f64,
}

/// Owner-polled deadline scheduler
pub struct TimerScheduler {
    timers: SlotMap<TimerId, Timer>,
}

impl TimerScheduler {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
        }
    }

    /// Schedule a timer that comes due at `deadline_ms`
    pub fn schedule(&mut self, deadline_ms: f64) -> TimerId {
        self.timers.insert(Timer { deadline_ms })
    }

    /// Cancel a pending timer. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    /// Whether the timer is still pending
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Remove and return every timer whose deadline is at or before `now_ms`
    pub fn poll(&mut self, now_ms: f64) -> SmallVec<[TimerId; 2]> {
        let due: SmallVec<[TimerId; 2]> = self
            .timers
            .iter()
            .filter(|(_, t)| t.deadline_ms <= now_ms)
            .map(|(id, _)| id)
            .collect();
        for id in &due {
            self.timers.remove(*id);
        }
        if !due.is_empty() {
            tracing::trace!("{} timer(s) fired at {now_ms:.0}ms", due.len());
        }
        due
    }

    /// Earliest pending deadline, for hosts that schedule wakeups
    pub fn next_deadline(&self) -> Option<f64> {
        self.timers
            .values()
            .map(|t| t.deadline_ms)
            .min_by(|a, b| a.total_cmp(b))
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

impl Default for TimerScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_returns_due_timers_once() {
        let mut timers = TimerScheduler::new();
        let a = timers.schedule(100.0);
        let b = timers.schedule(200.0);

        assert!(timers.poll(50.0).is_empty());

        let due = timers.poll(150.0);
        assert_eq!(due.as_slice(), &[a]);
        assert!(!timers.is_scheduled(a));
        assert!(timers.is_scheduled(b));

        // A fired timer is not reported again
        assert!(timers.poll(150.0).is_empty());

        let due = timers.poll(250.0);
        assert_eq!(due.as_slice(), &[b]);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_deadline_inclusive() {
        let mut timers = TimerScheduler::new();
        let id = timers.schedule(350.0);
        assert_eq!(timers.poll(350.0).as_slice(), &[id]);
    }

    #[test]
    fn test_cancel() {
        let mut timers = TimerScheduler::new();
        let id = timers.schedule(100.0);
        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.poll(500.0).is_empty());
    }

    #[test]
    fn test_next_deadline() {
        let mut timers = TimerScheduler::new();
        assert_eq!(timers.next_deadline(), None);
        timers.schedule(400.0);
        let early = timers.schedule(100.0);
        assert_eq!(timers.next_deadline(), Some(100.0));
        timers.cancel(early);
        assert_eq!(timers.next_deadline(), Some(400.0));
    }
}

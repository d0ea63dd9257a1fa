//! Fire-once delayed tasks.
//!
//! Time is passed in by the caller so hosts can drive timers from their event
//! loop and tests can use synthetic instants.

use std::time::{Duration, Instant};

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Pending fire-once timers, keyed by handle.
#[derive(Debug, Default)]
pub struct Timers {
    next_id: u64,
    pending: Vec<(TimerId, Instant)>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a timer that becomes due `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push((id, now + delay));
        log::trace!("[timers] scheduled {:?} in {:?}", id, delay);
        id
    }

    /// Cancel a pending timer. Returns true if it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(pending, _)| *pending != id);
        before != self.pending.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|(pending, _)| *pending == id)
    }

    /// Remove the timer if it is due at `now`. Returns true if it fired.
    pub fn take_due(&mut self, id: TimerId, now: Instant) -> bool {
        let Some(pos) = self
            .pending
            .iter()
            .position(|(pending, deadline)| *pending == id && *deadline <= now)
        else {
            return false;
        };
        self.pending.remove(pos);
        log::trace!("[timers] fired {:?}", id);
        true
    }

    /// Earliest deadline among pending timers, for event loop poll timeouts.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(_, deadline)| *deadline).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

//! Interaction state: list open/closed and the type-ahead buffer.

use std::time::{Duration, Instant};

use pagedom::{TimerId, Timers};

/// Whether the options list is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    Closed,
    Open,
}

/// Inputs to the list state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Toggle,
    Close,
}

impl ListState {
    /// Transition table.
    pub fn apply(self, transition: Transition) -> ListState {
        match (self, transition) {
            (ListState::Closed, Transition::Toggle) => ListState::Open,
            (ListState::Open, Transition::Toggle) => ListState::Closed,
            (_, Transition::Close) => ListState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == ListState::Open
    }
}

/// Characters typed in quick succession, cleared by a debounce timer.
#[derive(Debug, Default)]
pub struct SearchBuffer {
    buffer: String,
    timer: Option<TimerId>,
}

impl SearchBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Append a typed character (lower-cased) and restart the debounce.
    pub fn push(&mut self, timers: &mut Timers, c: char, now: Instant, debounce: Duration) {
        if let Some(timer) = self.timer.take() {
            timers.cancel(timer);
        }
        self.buffer.extend(c.to_lowercase());
        self.timer = Some(timers.schedule(now, debounce));
    }

    /// Clear the buffer if its debounce has fired. Returns true if it was cleared.
    pub fn expire(&mut self, timers: &mut Timers, now: Instant) -> bool {
        let Some(timer) = self.timer else {
            return false;
        };
        if !timers.take_due(timer, now) {
            return false;
        }
        self.timer = None;
        self.buffer.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_table() {
        use ListState::*;
        use Transition::*;

        assert_eq!(Closed.apply(Toggle), Open);
        assert_eq!(Open.apply(Toggle), Closed);
        assert_eq!(Open.apply(Close), Closed);
        assert_eq!(Closed.apply(Close), Closed);
    }

    #[test]
    fn buffer_accumulates_until_debounce() {
        let mut timers = Timers::new();
        let mut search = SearchBuffer::new();
        let t0 = Instant::now();
        let debounce = Duration::from_millis(500);

        search.push(&mut timers, 'C', t0, debounce);
        search.push(&mut timers, 'h', t0 + Duration::from_millis(400), debounce);
        assert_eq!(search.as_str(), "ch");

        // Restarted on the second key, so 800ms after t0 is still inside the window.
        assert!(!search.expire(&mut timers, t0 + Duration::from_millis(800)));
        assert_eq!(timers.len(), 1);

        assert!(search.expire(&mut timers, t0 + Duration::from_millis(900)));
        assert!(search.is_empty());
        assert!(timers.is_empty());
    }
}

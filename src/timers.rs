//! Deferred event queue
//!
//! Timers are not threads: a scheduled event is stored with its deadline and
//! handed back to the event loop once the deadline has passed, so it goes
//! through the same serial dispatch as key presses.

use std::time::{Duration, Instant};

/// Events waiting for their deadline, in scheduling order
#[derive(Debug)]
pub struct DeferredQueue<E> {
    pending: Vec<(Instant, E)>,
}

impl<E> Default for DeferredQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> DeferredQueue<E> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Schedule `event` to be delivered `delay` after `now`
    pub fn schedule(&mut self, now: Instant, delay: Duration, event: E) {
        self.pending.push((now + delay, event));
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(deadline, _)| *deadline).min()
    }

    /// How long the loop may block waiting for input without missing a deadline
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        match self.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(max),
            None => max,
        }
    }

    /// Remove and return every event whose deadline is at or before `now`,
    /// earliest first. Events with equal deadlines keep scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<E> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|(deadline, _)| *deadline <= now);
        self.pending = pending;
        due.sort_by_key(|(deadline, _)| *deadline);
        due.into_iter().map(|(_, event)| event).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

//! Deterministic timer queue driven by a virtual clock.
//!
//! # Design
//! - Mirrors browser timer semantics: dropping a [`TimerHandle`] cancels the pending entry.
//! - Entries fire in `(deadline, scheduling order)` order so equal deadlines stay FIFO.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

type Key = (u64, u64);

struct Inner<T> {
    now_ms: u64,
    next_token: u64,
    pending: BTreeMap<Key, T>,
}

/// Virtual-clock timer queue; payloads are returned from [`VirtualTimers::advance`] when due.
pub struct VirtualTimers<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Default for VirtualTimers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VirtualTimers<T> {
    /// Create an empty queue positioned at `t = 0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                now_ms: 0,
                next_token: 0,
                pending: BTreeMap::new(),
            })),
        }
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Number of scheduled entries that have neither fired nor been cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Schedule `payload` to fire `delay_ms` after the current virtual time.
    pub fn schedule(&self, delay_ms: u64, payload: T) -> TimerHandle<T> {
        let mut inner = self.inner.borrow_mut();
        let key = (inner.now_ms + delay_ms, inner.next_token);
        inner.next_token += 1;
        inner.pending.insert(key, payload);
        TimerHandle {
            key,
            queue: Rc::downgrade(&self.inner),
        }
    }

    /// Move the clock forward and return every payload whose deadline elapsed, in firing order.
    pub fn advance(&self, by_ms: u64) -> Vec<T> {
        let mut inner = self.inner.borrow_mut();
        inner.now_ms += by_ms;
        let now = inner.now_ms;
        let due: Vec<Key> = inner
            .pending
            .range(..(now + 1, 0))
            .map(|(key, _)| *key)
            .collect();
        due.into_iter()
            .filter_map(|key| inner.pending.remove(&key))
            .collect()
    }
}

/// Handle to a scheduled entry; dropping it cancels the entry if it has not fired.
pub struct TimerHandle<T> {
    key: Key,
    queue: Weak<RefCell<Inner<T>>>,
}

impl<T> TimerHandle<T> {
    /// Whether the entry is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.queue
            .upgrade()
            .is_some_and(|queue| queue.borrow().pending.contains_key(&self.key))
    }

    /// Virtual deadline of the entry in milliseconds.
    #[must_use]
    pub const fn deadline_ms(&self) -> u64 {
        self.key.0
    }
}

impl<T> Drop for TimerHandle<T> {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            if let Ok(mut inner) = queue.try_borrow_mut() {
                inner.pending.remove(&self.key);
            }
        }
    }
}

impl<T> std::fmt::Debug for TimerHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerHandle")
            .field("deadline_ms", &self.key.0)
            .field("token", &self.key.1)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_due_entries_in_deadline_order() {
        let timers = VirtualTimers::new();
        let _late = timers.schedule(300, "late");
        let _early = timers.schedule(100, "early");
        let _same = timers.schedule(100, "same");

        assert!(timers.advance(99).is_empty());
        assert_eq!(timers.advance(1), vec!["early", "same"]);
        assert_eq!(timers.advance(500), vec!["late"]);
        assert_eq!(timers.now_ms(), 600);
    }

    #[test]
    fn dropping_handle_cancels_entry() {
        let timers = VirtualTimers::new();
        let handle = timers.schedule(50, 1);
        assert!(handle.is_pending());
        assert_eq!(handle.deadline_ms(), 50);
        drop(handle);
        assert_eq!(timers.pending(), 0);
        assert!(timers.advance(100).is_empty());
    }

    #[test]
    fn fired_handles_are_no_longer_pending() {
        let timers = VirtualTimers::new();
        let handle = timers.schedule(10, ());
        assert_eq!(timers.advance(10).len(), 1);
        assert!(!handle.is_pending());
    }
}

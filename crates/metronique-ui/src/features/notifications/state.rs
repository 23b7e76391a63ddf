//! Ordered notification registry.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use yew::Reducible;

use crate::core::tone::NotificationKind;

/// Stable identifier of a notification for its whole lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id source shared by everything that enqueues.
#[derive(Debug, Default)]
pub struct IdSequence {
    next: Cell<u64>,
}

impl IdSequence {
    /// Allocate the next id.
    pub fn next_id(&self) -> NotificationId {
        let id = self.next.get() + 1;
        self.next.set(id);
        NotificationId(id)
    }
}

/// Render phase of a queued notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPhase {
    /// On screen.
    Visible,
    /// Exit animation playing.
    Closing,
}

/// A queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationRecord {
    /// Identifier.
    pub id: NotificationId,
    /// Severity.
    pub kind: NotificationKind,
    /// Message body.
    pub message: String,
    /// Enqueue time in milliseconds since the epoch.
    pub created_at_ms: u64,
    /// Current phase.
    pub phase: NotificationPhase,
}

/// Reducer actions for [`NotificationQueue`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotificationAction {
    /// Append a record.
    Push(NotificationRecord),
    /// Mark a record as closing.
    BeginClosing(NotificationId),
    /// Remove a record.
    Dismiss(NotificationId),
    /// Remove every record.
    Clear,
}

/// Active notifications in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    records: Vec<NotificationRecord>,
}

impl NotificationQueue {
    /// Create a record with a fresh id and append it.
    pub fn enqueue(
        &mut self,
        ids: &IdSequence,
        kind: NotificationKind,
        message: impl Into<String>,
        now_ms: u64,
    ) -> NotificationId {
        let id = ids.next_id();
        self.push(NotificationRecord {
            id,
            kind,
            message: message.into(),
            created_at_ms: now_ms,
            phase: NotificationPhase::Visible,
        });
        id
    }

    /// Append a prepared record.
    pub fn push(&mut self, record: NotificationRecord) {
        tracing::debug!(id = %record.id, kind = record.kind.as_str(), "notification enqueued");
        self.records.push(record);
    }

    /// Mark a record as closing. Returns `false` if unknown or already closing.
    pub fn begin_closing(&mut self, id: NotificationId) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) if record.phase == NotificationPhase::Visible => {
                record.phase = NotificationPhase::Closing;
                tracing::debug!(%id, "notification closing");
                true
            }
            _ => false,
        }
    }

    /// Remove a record. Returns `false` when it was already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = self.records.len() != before;
        if removed {
            tracing::debug!(%id, "notification removed");
        }
        removed
    }

    /// Look up a record.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&NotificationRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[NotificationRecord] {
        &self.records
    }

    /// Number of active records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Reducible for NotificationQueue {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            NotificationAction::Push(record) => {
                next.push(record);
                true
            }
            NotificationAction::BeginClosing(id) => next.begin_closing(id),
            NotificationAction::Dismiss(id) => next.dismiss(id),
            NotificationAction::Clear => {
                let had_records = !next.is_empty();
                next.records.clear();
                had_records
            }
        };
        if changed { Rc::new(next) } else { self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enqueue_preserves_fifo_order_and_unique_ids() {
        let ids = IdSequence::default();
        let mut queue = NotificationQueue::default();
        let kinds = [
            NotificationKind::Error,
            NotificationKind::Info,
            NotificationKind::Success,
            NotificationKind::Warning,
        ];
        let issued: Vec<_> = kinds
            .iter()
            .enumerate()
            .map(|(index, kind)| queue.enqueue(&ids, *kind, format!("m{index}"), 0))
            .collect();
        let messages: Vec<_> = queue.records().iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, ["m0", "m1", "m2", "m3"]);
        let stored: Vec<_> = queue.records().iter().map(|r| r.id).collect();
        assert_eq!(stored, issued);
        assert!(issued.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn dismissing_twice_equals_dismissing_once() {
        let ids = IdSequence::default();
        let mut queue = NotificationQueue::default();
        let first = queue.enqueue(&ids, NotificationKind::Error, "x", 10);
        let second = queue.enqueue(&ids, NotificationKind::Info, "y", 11);
        assert!(queue.dismiss(first));
        let after_once = queue.clone();
        assert!(!queue.dismiss(first));
        assert_eq!(queue, after_once);
        assert_eq!(queue.len(), 1);
        assert!(queue.get(second).is_some());
    }

    #[test]
    fn begin_closing_applies_once() {
        let ids = IdSequence::default();
        let mut queue = NotificationQueue::default();
        let id = queue.enqueue(&ids, NotificationKind::Warning, "w", 0);
        assert!(queue.begin_closing(id));
        assert!(!queue.begin_closing(id));
        assert_eq!(queue.get(id).map(|r| r.phase), Some(NotificationPhase::Closing));
    }

    #[test]
    fn reducer_keeps_identity_for_noop_actions() {
        let ids = IdSequence::default();
        let mut seed = NotificationQueue::default();
        let id = seed.enqueue(&ids, NotificationKind::Success, "ok", 0);
        let state = Rc::new(seed);

        let missing = ids.next_id();
        let same = Rc::clone(&state).reduce(NotificationAction::Dismiss(missing));
        assert!(Rc::ptr_eq(&same, &state));

        let removed = Rc::clone(&state).reduce(NotificationAction::Dismiss(id));
        assert!(removed.is_empty());
        let cleared = removed.clone().reduce(NotificationAction::Clear);
        assert!(Rc::ptr_eq(&cleared, &removed));
    }
}

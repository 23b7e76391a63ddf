//! Time range registry and keyed time picker entries.

use std::collections::BTreeMap;
use std::rc::Rc;

use chrono::NaiveDateTime;
use serde::Serialize;
use yew::Reducible;

use crate::core::duration::{RangeDuration, TimeSpan, time_duration};
use crate::features::time::logic::{ClockFormat, format_time};

/// Published state of one time picker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePickerEntry {
    /// Selected instant.
    pub time: Option<NaiveDateTime>,
    /// `02:30 PM`.
    pub formatted: Option<String>,
    /// Milliseconds since the epoch (local time treated as UTC).
    pub timestamp: Option<i64>,
}

impl TimePickerEntry {
    /// Derive every field from `time`; `None` yields an entry with all fields absent.
    #[must_use]
    pub fn from_time(time: Option<NaiveDateTime>) -> Self {
        Self {
            time,
            formatted: time.map(|t| format_time(t.time(), ClockFormat::TwelveHour)),
            timestamp: time.map(|t| t.and_utc().timestamp_millis()),
        }
    }
}

/// Combined view of everything in the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSnapshot {
    /// Range start.
    pub start: Option<NaiveDateTime>,
    /// Range end.
    pub end: Option<NaiveDateTime>,
    /// Stored duration.
    pub duration: Option<TimeSpan>,
    /// Ordering check.
    pub is_valid: Option<bool>,
    /// Keyed pickers.
    pub pickers: BTreeMap<String, TimePickerEntry>,
    /// Number of keyed pickers.
    pub picker_count: usize,
}

/// Reducer actions for [`TimeState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimeAction {
    /// Set the range start.
    SetStart(Option<NaiveDateTime>),
    /// Set the range end.
    SetEnd(Option<NaiveDateTime>),
    /// Upsert a keyed picker.
    UpdatePicker {
        /// Picker key.
        key: String,
        /// New value.
        value: Option<NaiveDateTime>,
    },
    /// Remove a keyed picker.
    RemovePicker(String),
    /// Drop every picker and the range.
    ClearAll,
}

/// Session-lifetime time registry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeState {
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    meeting_duration: Option<TimeSpan>,
    pickers: BTreeMap<String, TimePickerEntry>,
}

impl TimeState {
    /// Range start.
    #[must_use]
    pub const fn start(&self) -> Option<NaiveDateTime> {
        self.start
    }

    /// Range end.
    #[must_use]
    pub const fn end(&self) -> Option<NaiveDateTime> {
        self.end
    }

    /// Last valid duration computed for the range.
    #[must_use]
    pub const fn meeting_duration(&self) -> Option<&TimeSpan> {
        self.meeting_duration.as_ref()
    }

    fn refresh_duration(&mut self) {
        match time_duration(self.start, self.end) {
            Some(RangeDuration::Valid(span)) => self.meeting_duration = Some(span),
            Some(RangeDuration::Invalid { message }) => {
                tracing::warn!(reason = message, "keeping previous meeting duration");
            }
            None => {}
        }
    }

    /// Store the start; recompute the duration when the pair is complete and ordered.
    pub fn set_start(&mut self, time: Option<NaiveDateTime>) {
        self.start = time;
        self.refresh_duration();
    }

    /// Store the end; recompute the duration when the pair is complete and ordered.
    pub fn set_end(&mut self, time: Option<NaiveDateTime>) {
        self.end = time;
        self.refresh_duration();
    }

    /// `Some(end > start)` once both boundaries are set.
    #[must_use]
    pub fn is_valid_range(&self) -> Option<bool> {
        self.start.zip(self.end).map(|(start, end)| end > start)
    }

    /// Upsert a keyed picker.
    pub fn update_picker(&mut self, key: impl Into<String>, value: Option<NaiveDateTime>) {
        self.pickers.insert(key.into(), TimePickerEntry::from_time(value));
    }

    /// Remove a keyed picker. Returns whether it existed.
    pub fn remove_picker(&mut self, key: &str) -> bool {
        self.pickers.remove(key).is_some()
    }

    /// Look up a keyed picker.
    #[must_use]
    pub fn picker(&self, key: &str) -> Option<&TimePickerEntry> {
        self.pickers.get(key)
    }

    /// Every keyed picker.
    #[must_use]
    pub const fn pickers(&self) -> &BTreeMap<String, TimePickerEntry> {
        &self.pickers
    }

    /// Drop every picker and the range.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Everything in one serializable value.
    #[must_use]
    pub fn snapshot(&self) -> TimeSnapshot {
        TimeSnapshot {
            start: self.start,
            end: self.end,
            duration: self.meeting_duration.clone(),
            is_valid: self.is_valid_range(),
            pickers: self.pickers.clone(),
            picker_count: self.pickers.len(),
        }
    }
}

impl Reducible for TimeState {
    type Action = TimeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TimeAction::SetStart(time) => next.set_start(time),
            TimeAction::SetEnd(time) => next.set_end(time),
            TimeAction::UpdatePicker { key, value } => next.update_picker(key, value),
            TimeAction::RemovePicker(key) => {
                next.remove_picker(&key);
            }
            TimeAction::ClearAll => next.clear_all(),
        }
        if next == *self { self } else { Rc::new(next) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|d| d.and_hms_opt(h, m, 0))
            .expect("valid instant")
    }

    #[test]
    fn meeting_duration_tracks_valid_pairs_only() {
        let state = Rc::new(TimeState::default())
            .reduce(TimeAction::SetStart(Some(at(9, 15))))
            .reduce(TimeAction::SetEnd(Some(at(11, 0))));
        assert_eq!(
            state.meeting_duration().map(|d| d.formatted.as_str()),
            Some("1h 45m")
        );
        let state = state.reduce(TimeAction::SetEnd(Some(at(8, 0))));
        assert_eq!(state.is_valid_range(), Some(false));
        assert_eq!(state.meeting_duration().map(|d| d.total_minutes), Some(105));
    }

    #[test]
    fn picker_entries_format_on_twelve_hour_clock() {
        let mut state = TimeState::default();
        state.update_picker("standup", Some(at(14, 30)));
        state.update_picker("unset", None);
        let entry = state.picker("standup").expect("registered picker");
        assert_eq!(entry.formatted.as_deref(), Some("02:30 PM"));
        assert!(entry.timestamp.is_some());
        assert!(state.picker("unset").is_some_and(|e| e.time.is_none()));

        let snapshot = state.snapshot();
        assert_eq!(snapshot.picker_count, 2);
        let json = serde_json::to_value(&snapshot).expect("serializable");
        assert_eq!(json["pickerCount"], 2);
    }

    #[test]
    fn remove_and_clear_all() {
        let state = Rc::new(TimeState::default())
            .reduce(TimeAction::UpdatePicker {
                key: "a".to_string(),
                value: Some(at(10, 0)),
            })
            .reduce(TimeAction::SetStart(Some(at(10, 0))));
        let removed = Rc::clone(&state).reduce(TimeAction::RemovePicker("a".to_string()));
        assert!(removed.pickers().is_empty());
        let unchanged = Rc::clone(&removed).reduce(TimeAction::RemovePicker("a".to_string()));
        assert!(Rc::ptr_eq(&unchanged, &removed));
        let cleared = state.reduce(TimeAction::ClearAll);
        assert_eq!(*cleared, TimeState::default());
    }
}

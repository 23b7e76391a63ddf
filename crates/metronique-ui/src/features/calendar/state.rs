//! Date range registry and keyed date picker entries.

use std::collections::BTreeMap;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use yew::Reducible;

use crate::core::duration::{DateSpan, RangeDuration, date_duration};

/// Published state of one date picker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatePickerEntry {
    /// Selected date.
    pub date: Option<NaiveDate>,
    /// `Jan 5, 2024`.
    pub formatted: Option<String>,
    /// Milliseconds since the epoch at midnight (UTC).
    pub timestamp: Option<i64>,
    /// `Friday`.
    pub weekday: Option<String>,
    /// `2024-01-05`.
    pub iso: Option<String>,
}

impl DatePickerEntry {
    /// Derive every field from `date`; `None` yields an entry with all fields absent.
    #[must_use]
    pub fn from_date(date: Option<NaiveDate>) -> Self {
        Self {
            date,
            formatted: date.map(|d| d.format("%b %-d, %Y").to_string()),
            timestamp: date.map(|d| d.and_time(NaiveTime::MIN).and_utc().timestamp_millis()),
            weekday: date.map(|d| d.format("%A").to_string()),
            iso: date.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// Summary item returned by [`CalendarState::upcoming`] and [`CalendarState::past`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatedEntry {
    /// Picker key.
    pub key: String,
    /// Date.
    pub date: NaiveDate,
    /// Display label.
    pub formatted: String,
}

/// API-friendly rendering of the range.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedRange {
    /// ISO start date.
    pub start_date: Option<String>,
    /// ISO end date.
    pub end_date: Option<String>,
    /// Stored duration in days.
    pub duration_days: Option<i64>,
    /// Stored duration label.
    pub duration_formatted: Option<String>,
}

/// Combined view of everything in the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSnapshot {
    /// Range start.
    pub start: Option<NaiveDate>,
    /// Range end.
    pub end: Option<NaiveDate>,
    /// Stored duration.
    pub duration: Option<DateSpan>,
    /// Ordering check.
    pub is_valid: Option<bool>,
    /// Every day of the range.
    pub dates: Vec<NaiveDate>,
    /// Keyed pickers.
    pub pickers: BTreeMap<String, DatePickerEntry>,
    /// Number of keyed pickers.
    pub picker_count: usize,
}

/// Reducer actions for [`CalendarState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CalendarAction {
    /// Set the range start.
    SetStart(Option<NaiveDate>),
    /// Set the range end.
    SetEnd(Option<NaiveDate>),
    /// Upsert a keyed picker.
    UpdatePicker {
        /// Picker key.
        key: String,
        /// New value.
        value: Option<NaiveDate>,
    },
    /// Remove a keyed picker.
    RemovePicker(String),
    /// Drop every picker and the range.
    ClearAll,
}

/// Session-lifetime date registry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalendarState {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    project_duration: Option<DateSpan>,
    pickers: BTreeMap<String, DatePickerEntry>,
}

impl CalendarState {
    /// Range start.
    #[must_use]
    pub const fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// Range end.
    #[must_use]
    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Last valid duration computed for the range.
    #[must_use]
    pub const fn project_duration(&self) -> Option<&DateSpan> {
        self.project_duration.as_ref()
    }

    fn refresh_duration(&mut self) {
        match date_duration(self.start, self.end) {
            Some(RangeDuration::Valid(span)) => self.project_duration = Some(span),
            Some(RangeDuration::Invalid { message }) => {
                tracing::warn!(
                    start = ?self.start,
                    end = ?self.end,
                    reason = message,
                    "keeping previous project duration"
                );
            }
            None => {}
        }
    }

    /// Store the start; recompute the duration when the pair is complete and ordered.
    pub fn set_start(&mut self, date: Option<NaiveDate>) {
        self.start = date;
        self.refresh_duration();
    }

    /// Store the end; recompute the duration when the pair is complete and ordered.
    pub fn set_end(&mut self, date: Option<NaiveDate>) {
        self.end = date;
        self.refresh_duration();
    }

    /// `Some(end > start)` once both boundaries are set.
    #[must_use]
    pub fn is_valid_range(&self) -> Option<bool> {
        self.start.zip(self.end).map(|(start, end)| end > start)
    }

    /// Every day from start to end inclusive; empty when incomplete.
    #[must_use]
    pub fn dates_in_range(&self) -> Vec<NaiveDate> {
        self.start
            .zip(self.end)
            .map(|(start, end)| start.iter_days().take_while(|day| *day <= end).collect())
            .unwrap_or_default()
    }

    /// Whether `date` lies within the range, inclusive.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start
            .zip(self.end)
            .is_some_and(|(start, end)| start <= date && date <= end)
    }

    /// Range rendered for submission.
    #[must_use]
    pub fn formatted_range(&self) -> FormattedRange {
        FormattedRange {
            start_date: self.start.map(|d| d.format("%Y-%m-%d").to_string()),
            end_date: self.end.map(|d| d.format("%Y-%m-%d").to_string()),
            duration_days: self.project_duration.as_ref().map(|span| span.total_days),
            duration_formatted: self
                .project_duration
                .as_ref()
                .map(|span| span.formatted.clone()),
        }
    }

    /// Upsert a keyed picker.
    pub fn update_picker(&mut self, key: impl Into<String>, value: Option<NaiveDate>) {
        self.pickers
            .insert(key.into(), DatePickerEntry::from_date(value));
    }

    /// Remove a keyed picker. Returns whether it existed.
    pub fn remove_picker(&mut self, key: &str) -> bool {
        self.pickers.remove(key).is_some()
    }

    /// Look up a keyed picker.
    #[must_use]
    pub fn picker(&self, key: &str) -> Option<&DatePickerEntry> {
        self.pickers.get(key)
    }

    /// Every keyed picker.
    #[must_use]
    pub const fn pickers(&self) -> &BTreeMap<String, DatePickerEntry> {
        &self.pickers
    }

    /// Drop every picker and the range.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    fn dated(&self) -> impl Iterator<Item = DatedEntry> + '_ {
        self.pickers.iter().filter_map(|(key, entry)| {
            Some(DatedEntry {
                key: key.clone(),
                date: entry.date?,
                formatted: entry.formatted.clone()?,
            })
        })
    }

    /// Picker dates after `today`, soonest first.
    #[must_use]
    pub fn upcoming(&self, today: NaiveDate) -> Vec<DatedEntry> {
        let mut entries: Vec<_> = self.dated().filter(|entry| entry.date > today).collect();
        entries.sort_by_key(|entry| entry.date);
        entries
    }

    /// Picker dates before `today`, most recent first.
    #[must_use]
    pub fn past(&self, today: NaiveDate) -> Vec<DatedEntry> {
        let mut entries: Vec<_> = self.dated().filter(|entry| entry.date < today).collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    /// Everything in one serializable value.
    #[must_use]
    pub fn snapshot(&self) -> CalendarSnapshot {
        CalendarSnapshot {
            start: self.start,
            end: self.end,
            duration: self.project_duration.clone(),
            is_valid: self.is_valid_range(),
            dates: self.dates_in_range(),
            pickers: self.pickers.clone(),
            picker_count: self.pickers.len(),
        }
    }
}

impl Reducible for CalendarState {
    type Action = CalendarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CalendarAction::SetStart(date) => next.set_start(date),
            CalendarAction::SetEnd(date) => next.set_end(date),
            CalendarAction::UpdatePicker { key, value } => next.update_picker(key, value),
            CalendarAction::RemovePicker(key) => {
                next.remove_picker(&key);
            }
            CalendarAction::ClearAll => next.clear_all(),
        }
        if next == *self { self } else { Rc::new(next) }
    }
}

/// Whole days from `today` to `date` (negative in the past).
#[must_use]
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// Whether `date` is `today`.
#[must_use]
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// Whether `date` is before `today`.
#[must_use]
pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// Whether `date` is after `today`.
#[must_use]
pub fn is_future(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

//! Month grid, free-text search and the date picker model.

use std::rc::Rc;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use yew::Reducible;

/// Column headers of the Sunday-first grid.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

static FULL_DATE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})[-/](\d{1,2})[-/](\d{4})$").ok());
static DAY_MONTH: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})[-/](\d{1,2})$").ok());

/// Display format of a selected date.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// `MMM DD, YYYY`, rendered as `Jan 5, 2024`.
    #[default]
    MonthDayYear,
    /// `DD/MM/YYYY`.
    DayMonthYear,
    /// `YYYY-MM-DD`.
    Iso,
}

impl DateFormat {
    /// Map a format token onto a variant; unknown tokens use the default.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "DD/MM/YYYY" => Self::DayMonthYear,
            "YYYY-MM-DD" => Self::Iso,
            _ => Self::MonthDayYear,
        }
    }

    /// Render `date`.
    #[must_use]
    pub fn format(self, date: NaiveDate) -> String {
        match self {
            Self::MonthDayYear => date.format("%b %-d, %Y").to_string(),
            Self::DayMonthYear => date.format("%d/%m/%Y").to_string(),
            Self::Iso => date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// First day of the month containing `date`.
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `delta` months away from `view`.
#[must_use]
pub fn shift_month(view: NaiveDate, delta: i32) -> NaiveDate {
    let index = view.year() * 12 + view.month0().cast_signed() + delta;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12).cast_unsigned() + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(view)
}

/// Header label such as `January 2024`.
#[must_use]
pub fn month_label(view: NaiveDate) -> String {
    view.format("%B %Y").to_string()
}

/// Sunday-first grid: leading `None` cells for the weekday offset, then every day of the month.
#[must_use]
pub fn month_grid(view: NaiveDate) -> Vec<Option<NaiveDate>> {
    let first = first_of_month(view);
    let offset = first.weekday().num_days_from_sunday() as usize;
    let days = first
        .iter_days()
        .take_while(|day| day.month() == first.month());
    std::iter::repeat_n(None, offset)
        .chain(days.map(Some))
        .collect()
}

/// Parse `d-m-yyyy`, `d/m/yyyy`, `d-m` or `d/m`. A missing year uses `default_year`.
///
/// Returns `None` for anything else, including impossible dates such as `31/2`.
#[must_use]
pub fn parse_search(input: &str, default_year: i32) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let captures = FULL_DATE
        .as_ref()
        .and_then(|pattern| pattern.captures(input))
        .or_else(|| DAY_MONTH.as_ref().and_then(|pattern| pattern.captures(input)))?;
    let day = captures.get(1)?.as_str().parse().ok()?;
    let month = captures.get(2)?.as_str().parse().ok()?;
    let year = match captures.get(3) {
        Some(year) => year.as_str().parse().ok()?,
        None => default_year,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Selection constraints of a picker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateBounds {
    /// Earliest selectable date.
    pub min: Option<NaiveDate>,
    /// Latest selectable date.
    pub max: Option<NaiveDate>,
    /// Individually disabled dates.
    pub disabled: Vec<NaiveDate>,
}

impl DateBounds {
    /// Whether `date` may not be selected.
    #[must_use]
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.min.is_some_and(|min| date < min)
            || self.max.is_some_and(|max| date > max)
            || self.disabled.contains(&date)
    }
}

/// Interactive state of one date picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatePickerModel {
    /// Selected date.
    pub selected: Option<NaiveDate>,
    /// First day of the displayed month.
    pub view: NaiveDate,
    /// Search box text.
    pub search: String,
    /// Whether the dropdown is open.
    pub open: bool,
}

impl DatePickerModel {
    /// Model showing the selected month, or the month of `today`.
    #[must_use]
    pub fn new(selected: Option<NaiveDate>, today: NaiveDate) -> Self {
        Self {
            selected,
            view: first_of_month(selected.unwrap_or(today)),
            search: String::new(),
            open: false,
        }
    }

    /// Open or close the dropdown.
    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the dropdown.
    pub const fn close(&mut self) {
        self.open = false;
    }

    /// Move the view one month back.
    pub fn previous_month(&mut self) {
        self.view = shift_month(self.view, -1);
    }

    /// Move the view one month forward.
    pub fn next_month(&mut self) {
        self.view = shift_month(self.view, 1);
    }

    /// Update the search text; a parsable date moves the view to its month.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        if let Some(date) = parse_search(&self.search, self.view.year()) {
            self.view = first_of_month(date);
        }
    }

    /// Select a date: closes the dropdown and clears the search. Disabled dates are ignored.
    pub fn select(&mut self, date: NaiveDate, bounds: &DateBounds) -> bool {
        if bounds.is_disabled(date) {
            tracing::debug!(%date, "ignoring disabled date");
            return false;
        }
        self.selected = Some(date);
        self.open = false;
        self.search.clear();
        true
    }

    /// Select the date typed into the search box (Enter).
    pub fn submit_search(&mut self, bounds: &DateBounds) -> Option<NaiveDate> {
        let date = parse_search(&self.search, self.view.year())?;
        self.select(date, bounds).then_some(date)
    }

    /// Clear the selection.
    pub const fn clear(&mut self) {
        self.selected = None;
    }

    /// Whether `date` is the selection.
    #[must_use]
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected == Some(date)
    }

    /// Grid for the displayed month.
    #[must_use]
    pub fn cells(&self) -> Vec<Option<NaiveDate>> {
        month_grid(self.view)
    }
}

/// Reducer actions for [`DatePickerModel`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatePickerAction {
    /// Open or close the dropdown.
    Toggle,
    /// Close the dropdown.
    Close,
    /// Show the previous month.
    PreviousMonth,
    /// Show the next month.
    NextMonth,
    /// Replace the search text.
    Search(String),
    /// Select a date subject to `bounds`.
    Select {
        /// Candidate date.
        date: NaiveDate,
        /// Constraints in force.
        bounds: DateBounds,
    },
    /// Clear the selection.
    Clear,
    /// Adopt a value supplied by the parent.
    Sync(Option<NaiveDate>),
}

impl Reducible for DatePickerModel {
    type Action = DatePickerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DatePickerAction::Toggle => next.toggle(),
            DatePickerAction::Close => next.close(),
            DatePickerAction::PreviousMonth => next.previous_month(),
            DatePickerAction::NextMonth => next.next_month(),
            DatePickerAction::Search(text) => next.set_search(text),
            DatePickerAction::Select { date, bounds } => {
                next.select(date, &bounds);
            }
            DatePickerAction::Clear => next.clear(),
            DatePickerAction::Sync(value) => {
                next.selected = value;
                if let Some(date) = value {
                    next.view = first_of_month(date);
                }
            }
        }
        if next == *self { self } else { Rc::new(next) }
    }
}

//! Booking dialog domain
//!
//! A `BookingSelection` is the short-lived state behind the "Book a Call"
//! dialog: duration, date, time and an optional message. It derives the
//! price, validates completeness and turns into a `BookingRequest` on submit.
//!
//! Candidate dates are the 14 calendar days after the day the dialog was
//! opened. Candidate times are a fixed list and do not consult the profile's
//! availability slots.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::profiles::Profile;

pub const DATE_WINDOW_DAYS: u64 = 14;

pub const TIME_SLOTS: [&str; 8] = [
    "09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00", "18:00",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Please select a date and time")]
    Incomplete,

    #[error("{date} is not bookable; choose a date between {first} and {last}")]
    DateOutsideWindow {
        date: NaiveDate,
        first: NaiveDate,
        last: NaiveDate,
    },

    #[error("{0} is not an offered time slot")]
    UnknownTimeSlot(String),

    #[error("{0} minutes is not a supported call duration")]
    UnsupportedDuration(u32),
}

/// Call length. Serialized as whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum CallDuration {
    #[default]
    HalfHour,
    Hour,
    HourAndHalf,
}

impl CallDuration {
    pub const ALL: [CallDuration; 3] = [Self::HalfHour, Self::Hour, Self::HourAndHalf];

    pub fn minutes(self) -> u32 {
        match self {
            Self::HalfHour => 30,
            Self::Hour => 60,
            Self::HourAndHalf => 90,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::HalfHour => "30 minutes",
            Self::Hour => "1 hour",
            Self::HourAndHalf => "1.5 hours",
        }
    }

    /// `hourly_rate * minutes / 60`
    pub fn price(self, hourly_rate: Decimal) -> Decimal {
        (hourly_rate * Decimal::from(self.minutes()) / Decimal::from(60)).normalize()
    }
}

impl TryFrom<u32> for CallDuration {
    type Error = BookingError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|d| d.minutes() == minutes)
            .ok_or(BookingError::UnsupportedDuration(minutes))
    }
}

impl From<CallDuration> for u32 {
    fn from(d: CallDuration) -> Self {
        d.minutes()
    }
}

/// Inclusive range of selectable dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    first: NaiveDate,
    last: NaiveDate,
}

impl DateWindow {
    /// Tomorrow through `DATE_WINDOW_DAYS` days from today. Today is never
    /// offered, however early or late `now` is.
    pub fn after(now: NaiveDateTime) -> Self {
        let today = now.date();
        Self {
            first: today + Days::new(1),
            last: today + Days::new(DATE_WINDOW_DAYS),
        }
    }

    pub fn first(&self) -> NaiveDate {
        self.first
    }

    pub fn last(&self) -> NaiveDate {
        self.last
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        self.first.iter_days().take_while({
            let last = self.last;
            move |d| *d <= last
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionState {
    /// Date or time still missing.
    Incomplete,
    /// Ready to submit.
    Ready,
}

/// Partial update from the dialog. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingUpdate {
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Emitted on successful submit. Nothing stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub profile_id: String,
    pub scheduled_date_time: NaiveDateTime,
    pub duration: CallDuration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BookingSelection {
    profile_id: String,
    profile_name: String,
    hourly_rate: Decimal,
    window: DateWindow,
    duration: CallDuration,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    message: String,
}

impl BookingSelection {
    /// Fresh selection for `profile`, with the date window fixed at `now`.
    pub fn new(profile: &Profile, now: NaiveDateTime) -> Self {
        Self {
            profile_id: profile.id.clone(),
            profile_name: profile.name.clone(),
            hourly_rate: profile.hourly_rate,
            window: DateWindow::after(now),
            duration: CallDuration::default(),
            date: None,
            time: None,
            message: String::new(),
        }
    }

    pub fn duration(&self) -> CallDuration {
        self.duration
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    pub fn state(&self) -> SelectionState {
        if self.date.is_some() && self.time.is_some() {
            SelectionState::Ready
        } else {
            SelectionState::Incomplete
        }
    }

    pub fn can_submit(&self) -> bool {
        self.state() == SelectionState::Ready
    }

    pub fn total_price(&self) -> Decimal {
        self.duration.price(self.hourly_rate)
    }

    /// Changing the duration never clears date or time.
    pub fn select_duration(&mut self, duration: CallDuration) {
        self.duration = duration;
    }

    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), BookingError> {
        if !self.window.contains(date) {
            return Err(BookingError::DateOutsideWindow {
                date,
                first: self.window.first,
                last: self.window.last,
            });
        }
        self.date = Some(date);
        Ok(())
    }

    pub fn select_time(&mut self, label: &str) -> Result<(), BookingError> {
        let time = TIME_SLOTS
            .contains(&label)
            .then(|| NaiveTime::parse_from_str(label, "%H:%M").ok())
            .flatten()
            .ok_or_else(|| BookingError::UnknownTimeSlot(label.to_string()))?;
        self.time = Some(time);
        Ok(())
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Apply every field of `update` or none of them.
    pub fn apply(&mut self, update: BookingUpdate) -> Result<(), BookingError> {
        let mut next = self.clone();
        if let Some(minutes) = update.duration {
            next.select_duration(CallDuration::try_from(minutes)?);
        }
        if let Some(date) = update.date {
            next.select_date(date)?;
        }
        if let Some(time) = update.time.as_deref() {
            next.select_time(time)?;
        }
        if let Some(message) = update.message {
            next.set_message(message);
        }
        *self = next;
        Ok(())
    }

    /// Back to defaults. The date window stays the one computed at open.
    pub fn reset(&mut self) {
        self.duration = CallDuration::default();
        self.date = None;
        self.time = None;
        self.message.clear();
    }

    /// Build the request and reset. On failure nothing changes.
    pub fn submit(&mut self) -> Result<BookingRequest, BookingError> {
        let (Some(date), Some(time)) = (self.date, self.time) else {
            return Err(BookingError::Incomplete);
        };

        let message = self.message.trim();
        let request = BookingRequest {
            profile_id: self.profile_id.clone(),
            scheduled_date_time: date.and_time(time),
            duration: self.duration,
            message: (!message.is_empty()).then(|| message.to_string()),
        };

        self.reset();
        Ok(request)
    }

    pub fn view(&self) -> BookingDialogView {
        let durations = CallDuration::ALL
            .into_iter()
            .map(|d| DurationOption {
                minutes: d.minutes(),
                label: d.label(),
                price: d.price(self.hourly_rate),
                selected: d == self.duration,
            })
            .collect();

        let dates = self
            .window
            .dates()
            .map(|date| DateOption {
                date,
                weekday: date.format("%a").to_string(),
                day: date.format("%-d").to_string(),
                selected: self.date == Some(date),
            })
            .collect();

        // Times are offered once a date is picked.
        let selected_time = self.time.map(|t| t.format("%H:%M").to_string());
        let times = if self.date.is_some() {
            TIME_SLOTS
                .iter()
                .map(|&label| TimeOption {
                    label,
                    selected: selected_time.as_deref() == Some(label),
                })
                .collect()
        } else {
            Vec::new()
        };

        BookingDialogView {
            profile_id: self.profile_id.clone(),
            profile_name: self.profile_name.clone(),
            hourly_rate: self.hourly_rate,
            state: self.state(),
            durations,
            dates,
            times,
            message: self.message.clone(),
            summary: BookingSummary {
                duration: self.duration.label(),
                date: self.date.map(|d| d.format("%b %-d, %Y").to_string()),
                time: selected_time,
                total: self.total_price(),
            },
            can_submit: self.can_submit(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationOption {
    pub minutes: u32,
    pub label: &'static str,
    pub price: Decimal,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateOption {
    pub date: NaiveDate,
    pub weekday: String,
    pub day: String,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct TimeOption {
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct BookingSummary {
    pub duration: &'static str,
    pub date: Option<String>,
    pub time: Option<String>,
    pub total: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDialogView {
    pub profile_id: String,
    pub profile_name: String,
    pub hourly_rate: Decimal,
    pub state: SelectionState,
    pub durations: Vec<DurationOption>,
    pub dates: Vec<DateOption>,
    pub times: Vec<TimeOption>,
    pub message: String,
    pub summary: BookingSummary,
    pub can_submit: bool,
}

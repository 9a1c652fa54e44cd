//! Date window - inclusive calendar-date range used by every aggregate query

use chrono::{Days, NaiveDate};
use std::fmt;

/// Wire format for dates in query strings and responses
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive `[start, end]` range of calendar dates
///
/// Comparisons are done on dates only; a timestamp anywhere on `end`
/// falls inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Create a window, rejecting `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateWindowError> {
        if start > end {
            return Err(DateWindowError::StartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    /// Single-day window
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Window of `days` days ending on `end` (`end - days` through `end`)
    pub fn lookback(end: NaiveDate, days: u64) -> Self {
        let start = end.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[inline]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Check whether a date falls inside the window (both ends inclusive)
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..={}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

/// Parse a single `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate, DateWindowError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| DateWindowError::InvalidDate(value.to_string()))
}

/// Errors building a date window
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateWindowError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("startDate {start} is after endDate {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },
}

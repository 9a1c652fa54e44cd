//! Named time-range presets offered by the dashboard filter bar

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::DateWindow;

/// Preset relative to "today"; weeks run Sunday through Saturday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    #[default]
    ThisMonth,
    LastMonth,
    ThisWeek,
    LastWeek,
}

impl TimeRange {
    /// Resolve the preset to a concrete window
    pub fn resolve(self, today: NaiveDate) -> DateWindow {
        match self {
            Self::ThisMonth => month_of(today),
            Self::LastMonth => {
                let previous = first_of_month(today)
                    .checked_sub_months(Months::new(1))
                    .unwrap_or(NaiveDate::MIN);
                month_of(previous)
            }
            Self::ThisWeek => week_of(today),
            Self::LastWeek => {
                let previous = today.checked_sub_days(Days::new(7)).unwrap_or(NaiveDate::MIN);
                week_of(previous)
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThisMonth => "this_month",
            Self::LastMonth => "last_month",
            Self::ThisWeek => "this_week",
            Self::LastWeek => "last_week",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeRange {
    type Err = UnknownTimeRange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "this_month" => Ok(Self::ThisMonth),
            "last_month" => Ok(Self::LastMonth),
            "this_week" => Ok(Self::ThisWeek),
            "last_week" => Ok(Self::LastWeek),
            _ => Err(UnknownTimeRange(s.to_string())),
        }
    }
}

/// Error for an unrecognised preset name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown time range '{0}'")]
pub struct UnknownTimeRange(pub String);

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn month_of(date: NaiveDate) -> DateWindow {
    let start = first_of_month(date);
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    DateWindow::new(start, end).unwrap_or_else(|_| DateWindow::day(date))
}

fn week_of(date: NaiveDate) -> DateWindow {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    let start = date.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN);
    let end = start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
    DateWindow::new(start, end).unwrap_or_else(|_| DateWindow::day(date))
}

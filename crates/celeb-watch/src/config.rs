//! Watch client configuration
//!
//! Loaded from `WATCH_*` environment variables (and `.env`).

use std::str::FromStr;
use std::time::Duration;

use celeb_core::{DashboardQuery, Page, SentimentFilter, TimeRange, TopicFilter};
use chrono::NaiveDate;

/// Filter bar state: preset window, topic and ranking sentiment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WatchFilters {
    pub time_range: TimeRange,
    pub topic: TopicFilter,
    pub sentiment: SentimentFilter,
}

impl WatchFilters {
    /// Resolve the preset against `today` into an immutable query
    pub fn query(&self, today: NaiveDate) -> DashboardQuery {
        DashboardQuery::new(self.time_range.resolve(today))
            .with_topic(self.topic.clone())
            .with_sentiment(self.sentiment)
    }
}

/// Watch client configuration
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Base URL of the dashboard API
    pub api_url: String,
    /// Refresh period
    pub interval: Duration,
    /// Whether the scheduled refresh starts enabled
    pub auto_refresh: bool,
    pub filters: WatchFilters,
    pub page: Page,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:8080".to_string(),
            interval: Duration::from_secs(5),
            auto_refresh: true,
            filters: WatchFilters::default(),
            page: Page::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum WatchConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

fn var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T>(key: &'static str, default: T) -> Result<T, WatchConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match var(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| WatchConfigError::InvalidValue {
            key,
            message: e.to_string(),
        }),
        None => Ok(default),
    }
}

fn parse_bool(key: &'static str, default: bool) -> Result<bool, WatchConfigError> {
    match var(key).map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None => Ok(default),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(other) => Err(WatchConfigError::InvalidValue {
            key,
            message: format!("expected a boolean, got '{other}'"),
        }),
    }
}

impl WatchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, WatchConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let interval_secs: u64 = parse_var("WATCH_INTERVAL_SECS", defaults.interval.as_secs())?;
        if interval_secs == 0 {
            return Err(WatchConfigError::InvalidValue {
                key: "WATCH_INTERVAL_SECS",
                message: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            api_url: var("WATCH_API_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            interval: Duration::from_secs(interval_secs),
            auto_refresh: parse_bool("WATCH_AUTO_REFRESH", defaults.auto_refresh)?,
            filters: WatchFilters {
                time_range: parse_var("WATCH_TIME_RANGE", TimeRange::default())?,
                topic: TopicFilter::from_param(var("WATCH_TOPIC").as_deref()),
                sentiment: SentimentFilter::from_param(var("WATCH_SENTIMENT").as_deref()),
            },
            page: Page::new(
                parse_var("WATCH_PAGE", defaults.page.number())?,
                parse_var("WATCH_PAGE_SIZE", defaults.page.size())?,
            ),
        })
    }
}

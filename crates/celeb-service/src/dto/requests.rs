//! Request DTOs for API endpoints
//!
//! Bodies use the dashboard's camelCase field names. Required fields are
//! `Option` so a missing value yields the endpoint's own message instead of a
//! generic deserialization failure.

use celeb_core::entities::is_valid_image_url;
use celeb_core::value_objects::{
    parse_date, DashboardQuery, DateWindow, SentimentFilter, TimeRange, TopicFilter,
};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::services::{ServiceError, ServiceResult};

/// Largest `limit` honoured by the interactions listing
pub const MAX_INTERACTIONS_LIMIT: i64 = 1000;

/// Blank image URLs are accepted and stored as null
fn validate_image_url(url: &str) -> Result<(), ValidationError> {
    if url.trim().is_empty() || is_valid_image_url(url) {
        Ok(())
    } else {
        let mut err = ValidationError::new("image_url");
        err.message = Some("imageUrl must be an http(s) URL or a path starting with '/'".into());
        Err(err)
    }
}

/// Trimmed, non-empty value of a required text field
pub(crate) fn required_text(value: Option<&str>, message: &'static str) -> ServiceResult<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .ok_or_else(|| ServiceError::validation(message))
}

// ============================================================================
// Celebrity Requests
// ============================================================================

/// Create celebrity request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCelebrityRequest {
    #[validate(length(max = 200, message = "Name must be at most 200 characters"))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_image_url"))]
    pub image_url: Option<String>,

    /// Defaults to false
    pub is_celebrity: Option<bool>,
}

/// Update celebrity request (full overwrite of name and image)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCelebrityRequest {
    #[validate(length(max = 200, message = "Name must be at most 200 characters"))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_image_url"))]
    pub image_url: Option<String>,

    /// Omitted keeps the stored flag
    pub is_celebrity: Option<bool>,
}

/// Toggle request; kept as raw JSON so non-boolean values get a 400
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleCelebrityRequest {
    #[serde(default)]
    pub is_celebrity: serde_json::Value,
}

// ============================================================================
// Alias Requests
// ============================================================================

/// Create alias request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateAliasRequest {
    #[validate(length(max = 200, message = "Alias must be at most 200 characters"))]
    pub alias: Option<String>,
}

// ============================================================================
// Dashboard Query Parameters
// ============================================================================

/// How an endpoint fills in dates the caller left out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowDefault {
    /// Each missing date becomes today
    Today,
    /// Both dates must be present
    Required,
    /// Missing start is `today - days`, missing end is today
    LookbackDays(u32),
    /// Missing dates select the `timeRange` preset (default this month)
    Preset,
}

/// Query-string parameters shared by the aggregate endpoints
///
/// Every value arrives as text so that malformed input surfaces as a
/// descriptive 400 rather than an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub time_range: Option<String>,
    pub topic: Option<String>,
    pub sentiment: Option<String>,
    pub limit: Option<String>,
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl DashboardParams {
    /// Resolve the date window according to the endpoint's default policy
    pub fn window(&self, today: NaiveDate, default: WindowDefault) -> ServiceResult<DateWindow> {
        let start = non_blank(self.start_date.as_ref());
        let end = non_blank(self.end_date.as_ref());

        let parse = |value: Option<&str>, fallback: NaiveDate| -> ServiceResult<NaiveDate> {
            match value {
                Some(raw) => parse_date(raw).map_err(|e| ServiceError::Domain(e.into())),
                None => Ok(fallback),
            }
        };

        // A defaulted start never lands after the caller's end date
        let (start, end) = match default {
            WindowDefault::Required => match (start, end) {
                (Some(start), Some(end)) => (parse(Some(start), today)?, parse(Some(end), today)?),
                _ => return Err(ServiceError::validation("Missing date range")),
            },
            WindowDefault::Today => {
                let end = parse(end, today)?;
                (parse(start, today.min(end))?, end)
            }
            WindowDefault::LookbackDays(days) => {
                let end = parse(end, today)?;
                let lookback = DateWindow::lookback(today, u64::from(days)).start();
                (parse(start, lookback.min(end))?, end)
            }
            WindowDefault::Preset => {
                if start.is_none() && end.is_none() {
                    return Ok(self.time_range()?.resolve(today));
                }
                let end = parse(end, today)?;
                (parse(start, today.min(end))?, end)
            }
        };

        DateWindow::new(start, end).map_err(|e| ServiceError::Domain(e.into()))
    }

    /// Requested preset, defaulting to this month
    pub fn time_range(&self) -> ServiceResult<TimeRange> {
        match non_blank(self.time_range.as_ref()) {
            Some(raw) => raw
                .parse()
                .map_err(|e: celeb_core::value_objects::UnknownTimeRange| {
                    ServiceError::validation(e.to_string())
                }),
            None => Ok(TimeRange::default()),
        }
    }

    pub fn topic(&self) -> TopicFilter {
        TopicFilter::from_param(self.topic.as_deref())
    }

    pub fn sentiment(&self) -> SentimentFilter {
        SentimentFilter::from_param(self.sentiment.as_deref())
    }

    /// Build the immutable query for the aggregate layer
    pub fn query(&self, today: NaiveDate, default: WindowDefault) -> ServiceResult<DashboardQuery> {
        Ok(DashboardQuery::new(self.window(today, default)?)
            .with_topic(self.topic())
            .with_sentiment(self.sentiment()))
    }

    /// Positive row limit, clamped to `MAX_INTERACTIONS_LIMIT`
    pub fn limit(&self) -> ServiceResult<Option<i64>> {
        match non_blank(self.limit.as_ref()) {
            None => Ok(None),
            Some(raw) => match raw.parse::<i64>() {
                Ok(limit) if limit > 0 => Ok(Some(limit.min(MAX_INTERACTIONS_LIMIT))),
                _ => Err(ServiceError::validation("limit must be a positive integer")),
            },
        }
    }
}

//! Celebrity entity - a public figure tracked by the dashboard

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// Image shown when a celebrity has no usable image URL
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=40&width=40";

/// Celebrity entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Celebrity {
    pub id: EntityId,
    pub name: String,
    pub image_url: Option<String>,
    /// Published flag; only published celebrities show up in aggregates
    pub is_celebrity: bool,
    pub created_at: DateTime<Utc>,
}

impl Celebrity {
    /// Check if the celebrity is visible in aggregate views
    #[inline]
    pub fn is_published(&self) -> bool {
        self.is_celebrity
    }

    /// Image URL safe to render, falling back to the placeholder
    pub fn display_image_url(&self) -> &str {
        display_image_url(self.image_url.as_deref())
    }
}

/// Fields for inserting a celebrity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCelebrity {
    pub name: String,
    pub image_url: Option<String>,
    pub is_celebrity: bool,
}

impl NewCelebrity {
    /// Unpublished celebrity with no image
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: None,
            is_celebrity: false,
        }
    }
}

/// Full update of a celebrity's editable fields
///
/// `is_celebrity: None` keeps the stored flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CelebrityUpdate {
    pub name: String,
    pub image_url: Option<String>,
    pub is_celebrity: Option<bool>,
}

/// Check that a value is an absolute http(s) URL or a root-relative path
pub fn is_valid_image_url(url: &str) -> bool {
    let url = url.trim();
    if let Some(rest) = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    {
        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        return !host.is_empty() && !url.contains(char::is_whitespace);
    }
    url.starts_with('/') && url.len() > 1 && !url.starts_with("//")
}

/// Sanitize an optional stored image URL for display
pub fn display_image_url(url: Option<&str>) -> &str {
    match url.map(str::trim) {
        Some(url) if is_valid_image_url(url) => url,
        _ => PLACEHOLDER_IMAGE,
    }
}

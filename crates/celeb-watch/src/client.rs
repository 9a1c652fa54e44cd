//! HTTP client for the dashboard API

use std::time::Duration;

use async_trait::async_trait;
use celeb_core::value_objects::DATE_FORMAT;
use celeb_core::DashboardQuery;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::snapshot::{CelebrityRow, DashboardSnapshot, ReactionRow, Stats};

/// Client-side fetch errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Parse(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Anything that can produce a dashboard snapshot for a query
#[async_trait]
pub trait SnapshotSource: Send + Sync + 'static {
    /// Never fails; problems are logged and an empty snapshot returned
    async fn fetch(&self, query: &DashboardQuery) -> DashboardSnapshot;
}

/// Dashboard API client
#[derive(Debug, Clone)]
pub struct DashboardClient {
    client: reqwest::Client,
    base_url: String,
}

impl DashboardClient {
    /// Create a client with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the three panels concurrently
    #[instrument(skip(self, query), fields(window = %query.window))]
    pub async fn try_fetch(&self, query: &DashboardQuery) -> Result<DashboardSnapshot, ClientError> {
        let params = query_params(query);

        let (top_celebrities, top_reactions, stats) = tokio::try_join!(
            self.get_json::<Vec<CelebrityRow>>("/top-celebrities", &params),
            self.get_json::<Vec<ReactionRow>>("/top-reactions", &params),
            self.get_json::<Stats>("/stats", &params),
        )?;

        debug!(
            celebrities = top_celebrities.len(),
            reactions = top_reactions.len(),
            "Fetched dashboard panels"
        );

        Ok(DashboardSnapshot {
            top_celebrities,
            top_reactions,
            stats,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.client.get(&url).query(params).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json().await?)
    }
}

#[async_trait]
impl SnapshotSource for DashboardClient {
    async fn fetch(&self, query: &DashboardQuery) -> DashboardSnapshot {
        match self.try_fetch(query).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Dashboard fetch failed; showing empty data");
                DashboardSnapshot::empty()
            }
        }
    }
}

/// Query-string pairs shared by every panel request
fn query_params(query: &DashboardQuery) -> Vec<(&'static str, String)> {
    vec![
        ("startDate", query.window.start().format(DATE_FORMAT).to_string()),
        ("endDate", query.window.end().format(DATE_FORMAT).to_string()),
        ("topic", query.topic.to_string()),
        ("sentiment", query.sentiment.as_str().to_string()),
    ]
}

//! Dashboard snapshot - what one refresh of the API returns
//!
//! Wire types are declared here rather than shared with the server so the
//! client tolerates fields it does not know about.

use celeb_core::AliasList;
use serde::Deserialize;

/// One row of `/top-celebrities`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CelebrityRow {
    pub celebrity_id: i64,
    pub celebrity_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub celebrity_aliases: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub total_positive: i64,
    pub total_negative: i64,
    pub total_neutral: i64,
    pub total_interactions: i64,
    #[serde(default)]
    pub main_aspects: Vec<String>,
    #[serde(default)]
    pub total_reactions: i64,
}

impl CelebrityRow {
    /// Aliases as a deduplicated list, falling back to the joined string
    pub fn alias_list(&self) -> AliasList {
        if self.aliases.is_empty() {
            AliasList::from_joined(self.celebrity_aliases.as_deref())
        } else {
            AliasList::from_aliases(&self.aliases)
        }
    }
}

/// One row of `/top-reactions`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReactionRow {
    pub celebrity_id: i64,
    pub celebrity_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub total_reactions: i64,
}

/// `/stats` body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub total_positive: i64,
    pub total_negative: i64,
    pub total_neutral: i64,
    pub total_interactions: i64,
    pub total_celebrities: i64,
}

/// Everything the dashboard shows for one refresh
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardSnapshot {
    pub top_celebrities: Vec<CelebrityRow>,
    pub top_reactions: Vec<ReactionRow>,
    pub stats: Stats,
}

impl DashboardSnapshot {
    /// Zeroed stats and empty lists, shown when a fetch fails
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.top_celebrities.is_empty()
            && self.top_reactions.is_empty()
            && self.stats == Stats::default()
    }
}

//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use celeb_core::entities::{
    Celebrity, CelebrityAlias, Interaction, StatsSummary, TopCelebrity, TopReactionCelebrity,
};
use celeb_core::value_objects::DateWindow;

use super::responses::{
    AliasResponse, CelebrityResponse, InteractionResponse, StatsResponse, TopCelebrityResponse,
    TopReactionResponse, WindowResponse,
};

// ============================================================================
// Celebrity / Alias Mappers
// ============================================================================

impl From<&Celebrity> for CelebrityResponse {
    fn from(celebrity: &Celebrity) -> Self {
        Self {
            id: celebrity.id.into_inner(),
            name: celebrity.name.clone(),
            image_url: celebrity.image_url.clone(),
            is_celebrity: celebrity.is_celebrity,
            created_at: celebrity.created_at,
        }
    }
}

impl From<Celebrity> for CelebrityResponse {
    fn from(celebrity: Celebrity) -> Self {
        Self::from(&celebrity)
    }
}

impl From<CelebrityAlias> for AliasResponse {
    fn from(alias: CelebrityAlias) -> Self {
        Self {
            id: alias.id.into_inner(),
            celebrity_id: alias.celebrity_id.into_inner(),
            alias: alias.alias,
            created_at: alias.created_at,
        }
    }
}

// ============================================================================
// Analytics Mappers
// ============================================================================

impl From<Interaction> for InteractionResponse {
    fn from(interaction: Interaction) -> Self {
        Self {
            total: interaction.total(),
            id: interaction.id.into_inner(),
            celebrity_id: interaction.celebrity_id.into_inner(),
            celebrity_name: interaction.celebrity_name,
            is_celebrity: interaction.is_celebrity,
            positive_count: interaction.positive_count,
            negative_count: interaction.negative_count,
            neutral_count: interaction.neutral_count,
            field: interaction.field,
            interaction_date: interaction.interaction_date,
            created_at: interaction.created_at,
        }
    }
}

impl From<TopCelebrity> for TopCelebrityResponse {
    fn from(top: TopCelebrity) -> Self {
        Self {
            celebrity_id: top.celebrity_id.into_inner(),
            celebrity_name: top.celebrity_name,
            image_url: top.image_url,
            is_celebrity: top.is_celebrity,
            celebrity_aliases: top.aliases.joined(),
            aliases: top.aliases.into_vec(),
            total_positive: top.totals.positive,
            total_negative: top.totals.negative,
            total_neutral: top.totals.neutral,
            total_interactions: top.totals.total(),
            main_aspects: top.main_aspects,
            total_reactions: top.total_reactions,
        }
    }
}

impl From<TopReactionCelebrity> for TopReactionResponse {
    fn from(top: TopReactionCelebrity) -> Self {
        Self {
            celebrity_id: top.celebrity_id.into_inner(),
            celebrity_name: top.celebrity_name,
            image_url: top.image_url,
            total_reactions: top.total_reactions,
        }
    }
}

impl From<StatsSummary> for StatsResponse {
    fn from(stats: StatsSummary) -> Self {
        Self {
            total_positive: stats.totals.positive,
            total_negative: stats.totals.negative,
            total_neutral: stats.totals.neutral,
            total_interactions: stats.total_interactions(),
            total_celebrities: stats.total_celebrities,
        }
    }
}

impl From<DateWindow> for WindowResponse {
    fn from(window: DateWindow) -> Self {
        Self {
            start_date: window.start(),
            end_date: window.end(),
        }
    }
}

//! Aggregate rows -> read models

use celeb_core::entities::{
    collect_aspects, SentimentTotals, StatsSummary, TopCelebrity, TopReactionCelebrity,
};
use celeb_core::value_objects::{AliasList, EntityId};

use crate::models::{StatsModel, TopCelebrityModel, TopReactionModel};

/// Aliases are deduplicated and aspects normalized here rather than in SQL
impl From<TopCelebrityModel> for TopCelebrity {
    fn from(model: TopCelebrityModel) -> Self {
        TopCelebrity {
            celebrity_id: EntityId::new(model.celebrity_id),
            celebrity_name: model.celebrity_name,
            image_url: model.image_url,
            is_celebrity: model.is_celebrity,
            aliases: AliasList::from_aliases(model.aliases),
            totals: SentimentTotals::new(
                model.total_positive,
                model.total_negative,
                model.total_neutral,
            ),
            main_aspects: collect_aspects(model.main_aspects.into_iter().map(Some)),
            total_reactions: model.total_reactions,
        }
    }
}

impl From<TopReactionModel> for TopReactionCelebrity {
    fn from(model: TopReactionModel) -> Self {
        TopReactionCelebrity {
            celebrity_id: EntityId::new(model.celebrity_id),
            celebrity_name: model.celebrity_name,
            image_url: model.image_url,
            total_reactions: model.total_reactions,
        }
    }
}

impl From<StatsModel> for StatsSummary {
    fn from(model: StatsModel) -> Self {
        StatsSummary {
            totals: SentimentTotals::new(
                model.total_positive,
                model.total_negative,
                model.total_neutral,
            ),
            total_celebrities: model.total_celebrities,
        }
    }
}

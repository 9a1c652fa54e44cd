//! Interaction entity <-> model mapper

use celeb_core::entities::Interaction;
use celeb_core::value_objects::EntityId;

use crate::models::InteractionModel;

impl From<InteractionModel> for Interaction {
    fn from(model: InteractionModel) -> Self {
        Interaction {
            id: EntityId::new(model.id),
            celebrity_id: EntityId::new(model.celebrity_id),
            celebrity_name: model.celebrity_name,
            is_celebrity: model.is_celebrity,
            positive_count: model.positive_count,
            negative_count: model.negative_count,
            neutral_count: model.neutral_count,
            field: model.field,
            interaction_date: model.interaction_date,
            created_at: model.created_at,
        }
    }
}

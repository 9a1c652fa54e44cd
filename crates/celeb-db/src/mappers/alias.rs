//! Alias entity <-> model mapper

use celeb_core::entities::CelebrityAlias;
use celeb_core::value_objects::EntityId;

use crate::models::AliasModel;

impl From<AliasModel> for CelebrityAlias {
    fn from(model: AliasModel) -> Self {
        CelebrityAlias {
            id: EntityId::new(model.id),
            celebrity_id: EntityId::new(model.celebrity_id),
            alias: model.alias,
            created_at: model.created_at,
        }
    }
}

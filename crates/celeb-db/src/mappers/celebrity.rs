//! Celebrity entity <-> model mapper

use celeb_core::entities::{Celebrity, CelebrityUpdate, NewCelebrity};
use celeb_core::value_objects::EntityId;

use crate::models::CelebrityModel;

/// Convert CelebrityModel to Celebrity entity
impl From<CelebrityModel> for Celebrity {
    fn from(model: CelebrityModel) -> Self {
        Celebrity {
            id: EntityId::new(model.id),
            name: model.name,
            image_url: model.image_url,
            is_celebrity: model.is_celebrity,
            created_at: model.created_at,
        }
    }
}

/// Values bound for celebrity insert/update statements
///
/// Names are trimmed and blank image URLs are stored as NULL.
#[derive(Debug)]
pub struct CelebrityInsert<'a> {
    pub name: &'a str,
    pub image_url: Option<&'a str>,
    pub is_celebrity: Option<bool>,
}

impl<'a> CelebrityInsert<'a> {
    pub fn new(celebrity: &'a NewCelebrity) -> Self {
        Self {
            name: celebrity.name.trim(),
            image_url: normalize_image_url(celebrity.image_url.as_deref()),
            is_celebrity: Some(celebrity.is_celebrity),
        }
    }

    pub fn from_update(update: &'a CelebrityUpdate) -> Self {
        Self {
            name: update.name.trim(),
            image_url: normalize_image_url(update.image_url.as_deref()),
            is_celebrity: update.is_celebrity,
        }
    }
}

fn normalize_image_url(url: Option<&str>) -> Option<&str> {
    url.map(str::trim).filter(|u| !u.is_empty())
}

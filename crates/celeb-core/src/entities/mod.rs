//! Domain entities - core business objects

mod alias;
mod analytics;
mod celebrity;
mod interaction;

pub use alias::CelebrityAlias;
pub use analytics::{
    collect_aspects, SentimentTotals, StatsSummary, TopCelebrity, TopReactionCelebrity,
};
pub use celebrity::{
    display_image_url, is_valid_image_url, Celebrity, CelebrityUpdate, NewCelebrity,
    PLACEHOLDER_IMAGE,
};
pub use interaction::{is_real_topic, Interaction};

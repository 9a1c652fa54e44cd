//! # celeb-core
//!
//! Domain layer containing entities, value objects, aggregate read models and
//! repository traits. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Celebrity, CelebrityAlias, CelebrityUpdate, Interaction, NewCelebrity, SentimentTotals,
    StatsSummary, TopCelebrity, TopReactionCelebrity,
};
pub use error::DomainError;
pub use traits::{
    AliasRepository, AnalyticsRepository, CelebrityRepository, InteractionRepository, RepoResult,
};
pub use value_objects::{
    AliasList, DashboardQuery, DateWindow, DateWindowError, EntityId, EntityIdParseError, Page,
    SentimentFilter, TimeRange, TopicFilter,
};

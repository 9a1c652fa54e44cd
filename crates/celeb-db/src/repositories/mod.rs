//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in celeb-core.

mod alias;
mod analytics;
mod celebrity;
mod error;
mod interaction;

pub use alias::PgAliasRepository;
pub use analytics::PgAnalyticsRepository;
pub use celebrity::PgCelebrityRepository;
pub use interaction::PgInteractionRepository;

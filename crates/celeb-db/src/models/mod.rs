//! Database models - SQLx-compatible structs for PostgreSQL tables and
//! aggregate query rows

mod alias;
mod analytics;
mod celebrity;
mod interaction;

pub use alias::AliasModel;
pub use analytics::{StatsModel, TopCelebrityModel, TopReactionModel};
pub use celebrity::CelebrityModel;
pub use interaction::InteractionModel;

//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AliasRepository, AnalyticsRepository, CelebrityRepository, InteractionRepository, RepoResult,
};

//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod alias;
pub mod analytics;
pub mod celebrity;
pub mod context;
pub mod dashboard;
pub mod error;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use alias::AliasService;
pub use analytics::AnalyticsService;
pub use celebrity::CelebrityService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use dashboard::DashboardService;
pub use error::{ServiceError, ServiceResult};

//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateAliasRequest, CreateCelebrityRequest, DashboardParams, ToggleCelebrityRequest,
    UpdateCelebrityRequest, WindowDefault, MAX_INTERACTIONS_LIMIT,
};

pub use responses::{
    AliasResponse, CelebrityResponse, DashboardResponse, HealthChecks, HealthResponse,
    InteractionResponse, ReadinessResponse, StatsResponse, SuccessResponse, TopCelebrityResponse,
    TopReactionResponse, WindowResponse,
};

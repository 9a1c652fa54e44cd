//! Configuration structs

mod app_config;

pub use app_config::{
    AnalyticsConfig, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment,
    RateLimitConfig, ServerConfig,
};

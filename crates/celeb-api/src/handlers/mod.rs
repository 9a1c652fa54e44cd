//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod aliases;
pub mod analytics;
pub mod celebrities;
pub mod health;

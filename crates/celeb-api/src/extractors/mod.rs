//! Axum extractors for request handling
//!
//! Custom extractors for validated bodies, id paths and dashboard queries.

mod path;
mod query;
mod validated;

pub use path::IdPath;
pub use query::WindowQuery;
pub use validated::{JsonBody, ValidatedJson};

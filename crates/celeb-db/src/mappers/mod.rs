//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions from database rows to domain objects,
//! plus insert helpers that normalize entity data before it is bound.

mod alias;
mod analytics;
mod celebrity;
mod interaction;

pub use celebrity::CelebrityInsert;

//! Entity ID - database-assigned row identifier
//!
//! Celebrities, aliases and interactions are keyed by serial integers
//! assigned by PostgreSQL. Ids are always strictly positive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Row identifier for a stored record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(i64);

impl EntityId {
    /// Create a new EntityId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from string representation, rejecting zero and negative ids
    pub fn parse(s: &str) -> Result<Self, EntityIdParseError> {
        let id = s
            .trim()
            .parse::<i64>()
            .map_err(|_| EntityIdParseError::InvalidFormat)?;

        if id <= 0 {
            return Err(EntityIdParseError::NotPositive);
        }

        Ok(Self(id))
    }
}

/// Error when parsing an EntityId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EntityIdParseError {
    #[error("invalid id format")]
    InvalidFormat,

    #[error("id must be a positive integer")]
    NotPositive,
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<EntityId> for i64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl std::str::FromStr for EntityId {
    type Err = EntityIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityId::parse(s)
    }
}

//! Typed identifiers for domain entities.
//!
//! Identifiers travel as plain strings on the wire and in stored documents;
//! the newtype keeps them from being confused with other text fields.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of a registered tukang (random UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TukangId(Uuid);

impl TukangId {
    /// Generates a fresh random identifier.
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an identifier from its hyphenated string form.
    #[inline]
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    #[inline]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TukangId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TukangId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for TukangId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

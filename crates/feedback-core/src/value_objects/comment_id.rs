//! Comment ID - the platform-assigned identifier of a tracked comment
//!
//! The upstream platform hands out unsigned 64-bit integers. They are kept
//! numeric on the wire and on disk, but manual refresh requests may quote
//! them, so deserialization accepts both forms.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of a comment on the collaboration platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommentId(u64);

impl CommentId {
    /// Create a new CommentId from a raw value
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner value
    #[inline]
    pub const fn into_inner(self) -> u64 {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, CommentIdParseError> {
        s.trim()
            .parse::<u64>()
            .map(CommentId)
            .map_err(|_| CommentIdParseError::InvalidFormat)
    }
}

/// Error when parsing a CommentId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CommentIdParseError {
    #[error("invalid comment id format")]
    InvalidFormat,
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CommentId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<CommentId> for u64 {
    fn from(id: CommentId) -> Self {
        id.0
    }
}

impl std::str::FromStr for CommentId {
    type Err = CommentIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommentId::parse(s)
    }
}

impl Serialize for CommentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

// Deserialize from number or numeric string
impl<'de> Deserialize<'de> for CommentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct CommentIdVisitor;

        impl Visitor<'_> for CommentIdVisitor {
            type Value = CommentId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a non-negative integer or numeric string")
            }

            fn visit_u64<E>(self, value: u64) -> Result<CommentId, E>
            where
                E: de::Error,
            {
                Ok(CommentId(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<CommentId, E>
            where
                E: de::Error,
            {
                u64::try_from(value)
                    .map(CommentId)
                    .map_err(|_| de::Error::custom("comment id must not be negative"))
            }

            fn visit_str<E>(self, value: &str) -> Result<CommentId, E>
            where
                E: de::Error,
            {
                CommentId::parse(value).map_err(|_| de::Error::custom("invalid comment id string"))
            }
        }

        deserializer.deserialize_any(CommentIdVisitor)
    }
}

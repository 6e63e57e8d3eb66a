//! Validated topic name.
//!
//! A [`TopicName`] is the only form in which a name reaches the lifecycle
//! coordinator. Parsing enforces the registry length limits and the naming
//! rules of the managed Pub/Sub service, so both stores accept every value
//! of this type.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Minimum topic name length, in characters.
pub const MIN_NAME_LEN: usize = 5;

/// Maximum topic name length, in characters.
pub const MAX_NAME_LEN: usize = 256;

/// Prefix reserved by the managed Pub/Sub service.
const RESERVED_PREFIX: &str = "goog";

/// Reasons a candidate topic name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopicNameError {
    /// Name is shorter or longer than the allowed range.
    #[error("name must be between 5 and 256 characters, got {0}")]
    Length(usize),

    /// Name does not start with an ASCII letter.
    #[error("name must start with a letter")]
    LeadingCharacter,

    /// Name contains a character outside the allowed set.
    #[error("name contains invalid character {0:?}")]
    InvalidCharacter(char),

    /// Name starts with the reserved `goog` prefix.
    #[error("name must not start with \"goog\"")]
    ReservedPrefix,
}

/// Name of a topic, unique across the registry and valid as a Pub/Sub
/// topic id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TopicName(String);

impl TopicName {
    /// Validates `raw` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns a [`TopicNameError`] describing the first rule violated.
    pub fn parse(raw: impl Into<String>) -> Result<Self, TopicNameError> {
        let raw = raw.into();

        let len = raw.chars().count();
        if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
            return Err(TopicNameError::Length(len));
        }
        if !raw.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(TopicNameError::LeadingCharacter);
        }
        if let Some(bad) = raw.chars().find(|c| !is_allowed(*c)) {
            return Err(TopicNameError::InvalidCharacter(bad));
        }
        if raw.to_ascii_lowercase().starts_with(RESERVED_PREFIX) {
            return Err(TopicNameError::ReservedPrefix);
        }

        Ok(Self(raw))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | '+' | '%')
}

impl fmt::Display for TopicName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TopicName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw).map_err(serde::de::Error::custom)
    }
}

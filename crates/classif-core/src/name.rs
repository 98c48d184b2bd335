//! # Software Name
//!
//! Newtype for the catalogue record identifier. A record's `name` field is
//! the only key the engine has for scoping edits, so it is validated at
//! construction time rather than passed around as a bare string.
//!
//! ## Validation
//!
//! [`SoftwareName`] must be non-empty after trimming. Catalogue names are
//! otherwise free-form — the referential mixes upper-case product names,
//! vendor suffixes, and parenthesized qualifiers (e.g. `"AZENDOO (app)"`).

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The unique name of one software record in the catalogue document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SoftwareName(String);

impl<'de> Deserialize<'de> for SoftwareName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl SoftwareName {
    /// Create a software name, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySoftwareName`] if the string is empty
    /// or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySoftwareName);
        }
        Ok(Self(trimmed))
    }

    /// Access the name string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SoftwareName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

use crate::{MAX_COLLECTION_NAME_LEN, MAX_PREFIX_LEN, PREFIX_SEPARATOR};
use convert_case::{Case, Casing};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, str::FromStr};
use thiserror::Error as ThisError;

///
/// NamingError
///

#[derive(Debug, ThisError)]
pub enum NamingError {
    #[error("collection name cannot be empty")]
    EmptyName,

    #[error("collection name '{name}' contains invalid character {ch:?}")]
    InvalidNameChar { name: String, ch: char },

    #[error("collection name '{name}' must start with an ASCII letter")]
    InvalidNameStart { name: String },

    #[error("prefix '{prefix}' contains invalid character {ch:?}")]
    InvalidPrefixChar { prefix: String, ch: char },

    #[error("prefix '{prefix}' must start with an ASCII letter")]
    InvalidPrefixStart { prefix: String },

    #[error("collection name '{name}' is {len} bytes, over the {max} byte limit", max = MAX_COLLECTION_NAME_LEN)]
    NameTooLong { name: String, len: usize },

    #[error("base collection name '{name}' must be snake_case")]
    NotSnakeCase { name: String },

    #[error("prefix '{prefix}' is {len} bytes, over the {max} byte limit", max = MAX_PREFIX_LEN)]
    PrefixTooLong { prefix: String, len: usize },
}

///
/// Prefix
///
/// Namespacing applied to every collection name of one logical model. May be
/// empty, in which case base names pass through unchanged. A non-empty prefix
/// starts with an ASCII letter and continues with ASCII alphanumerics or `-`;
/// it never contains the separator, so the first `_` of a resolved name always
/// delimits the prefix.
///

#[derive(
    Clone, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(try_from = "String")]
pub struct Prefix(String);

impl Prefix {
    /// The empty prefix.
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Validate a raw prefix string.
    pub fn new(prefix: impl Into<String>) -> Result<Self, NamingError> {
        let prefix = prefix.into();

        if prefix.is_empty() {
            return Ok(Self(prefix));
        }
        if prefix.len() > MAX_PREFIX_LEN {
            return Err(NamingError::PrefixTooLong {
                len: prefix.len(),
                prefix,
            });
        }
        if !prefix.chars().next().is_some_and(|ch| ch.is_ascii_alphabetic()) {
            return Err(NamingError::InvalidPrefixStart { prefix });
        }
        if let Some(ch) = prefix
            .chars()
            .skip(1)
            .find(|ch| !ch.is_ascii_alphanumeric() && *ch != '-')
        {
            return Err(NamingError::InvalidPrefixChar { prefix, ch });
        }

        Ok(Self(prefix))
    }

    /// Resolve a snake_case base name into the collection name this prefix
    /// namespaces it under.
    pub fn resolve(&self, base: &str) -> Result<CollectionName, NamingError> {
        validate_base_name(base)?;

        if self.0.is_empty() {
            CollectionName::new(base)
        } else {
            CollectionName::new(format!("{}{PREFIX_SEPARATOR}{base}", self.0))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Prefix {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Prefix {
    type Error = NamingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

///
/// CollectionName
///
/// Fully resolved physical collection name, valid under the target store's
/// naming rules: starts with an ASCII letter, continues with ASCII
/// alphanumerics, `_` or `-`. Names starting with `_` belong to the store's
/// system namespace and are rejected here. Ordered, so every derived
/// collection sequence is deterministic.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "String")]
pub struct CollectionName(String);

impl CollectionName {
    /// Validate a fully resolved collection name.
    pub fn new(name: impl Into<String>) -> Result<Self, NamingError> {
        let name = name.into();

        if name.is_empty() {
            return Err(NamingError::EmptyName);
        }
        if name.len() > MAX_COLLECTION_NAME_LEN {
            return Err(NamingError::NameTooLong {
                len: name.len(),
                name,
            });
        }
        if !name.chars().next().is_some_and(|ch| ch.is_ascii_alphabetic()) {
            return Err(NamingError::InvalidNameStart { name });
        }
        if let Some(ch) = name
            .chars()
            .skip(1)
            .find(|ch| !ch.is_ascii_alphanumeric() && *ch != '_' && *ch != '-')
        {
            return Err(NamingError::InvalidNameChar { name, ch });
        }

        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CollectionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CollectionName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for CollectionName {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CollectionName {
    type Error = NamingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// Base names come from model catalogs, not user input, but the builder path
// still validates them so a bad catalog entry fails loudly.
fn validate_base_name(base: &str) -> Result<(), NamingError> {
    if base.is_empty() {
        return Err(NamingError::EmptyName);
    }
    if !base.chars().next().is_some_and(|ch| ch.is_ascii_alphabetic()) {
        return Err(NamingError::InvalidNameStart {
            name: base.to_string(),
        });
    }
    if base.to_case(Case::Snake) != base {
        return Err(NamingError::NotSnakeCase {
            name: base.to_string(),
        });
    }

    Ok(())
}

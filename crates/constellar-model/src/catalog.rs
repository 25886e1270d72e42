//! The shipped model catalog.
//!
//! Three logical models cover the store: the command-side
//! [`user_profile_store`], the [`first_level_projection`] it feeds, and the
//! [`second_level_projection`] derived from that. Each factory owns its
//! model's base-name table; the tables are the single authority for which
//! collections exist, and every other surface derives from them.

use crate::constellation::{ConstellationBuilder, ModelConstellation, ModelError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// ModelKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "kebab-case")]
#[remain::sorted]
pub enum ModelKind {
    FirstLevelProjection,
    SecondLevelProjection,
    UserProfileStore,
}

impl ModelKind {
    /// Every shipped model, in pipeline order.
    pub const ALL: [Self; 3] = [
        Self::UserProfileStore,
        Self::FirstLevelProjection,
        Self::SecondLevelProjection,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstLevelProjection => "first-level-projection",
            Self::SecondLevelProjection => "second-level-projection",
            Self::UserProfileStore => "user-profile-store",
        }
    }

    /// Build this model's constellation for `prefix` via its factory.
    pub fn constellation(self, prefix: &str) -> Result<ModelConstellation, ModelError> {
        match self {
            Self::FirstLevelProjection => first_level_projection(prefix),
            Self::SecondLevelProjection => second_level_projection(prefix),
            Self::UserProfileStore => user_profile_store(prefix),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// UnknownModelError
///

#[derive(Debug, ThisError)]
#[error(
    "unknown model kind '{0}', expected one of: user-profile-store, \
     first-level-projection, second-level-projection"
)]
pub struct UnknownModelError(String);

impl FromStr for ModelKind {
    type Err = UnknownModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-level-projection" => Ok(Self::FirstLevelProjection),
            "second-level-projection" => Ok(Self::SecondLevelProjection),
            "user-profile-store" => Ok(Self::UserProfileStore),
            other => Err(UnknownModelError(other.to_string())),
        }
    }
}

///
/// ModelTable
///
/// Base-name table backing one factory. Bases are snake_case and unprefixed;
/// the builder resolves and validates them on every call.
///

struct ModelTable {
    documents: &'static [&'static str],
    query_documents: &'static [&'static str],
    edges: &'static [&'static str],
}

const USER_PROFILE_STORE: ModelTable = ModelTable {
    documents: &["client_settings", "functions", "profiles", "roles", "tags"],
    query_documents: &[
        "functions_query",
        "profiles_query",
        "roles_query",
        "tags_query",
    ],
    edges: &["function_links", "memberships", "tag_links"],
};

const FIRST_LEVEL_PROJECTION: ModelTable = ModelTable {
    documents: &[
        "client_settings",
        "functions",
        "profiles",
        "projection_state",
        "roles",
        "tags",
        "temporary_assignments",
    ],
    query_documents: &[],
    edges: &["function_links", "memberships", "security_assignments"],
};

const SECOND_LEVEL_PROJECTION: ModelTable = ModelTable {
    documents: &["projection_state"],
    query_documents: &[
        "activity_logs_query",
        "assignments_query",
        "profiles_query",
        "tags_query",
    ],
    edges: &["path_links"],
};

/// Constellation of the command-side store: the profile, role, function and
/// tag documents, their read-optimized query views, and the edges linking
/// profiles to what they are granted.
pub fn user_profile_store(prefix: &str) -> Result<ModelConstellation, ModelError> {
    from_table(ModelKind::UserProfileStore, prefix, &USER_PROFILE_STORE)
}

/// Constellation of the first-level projection: a denormalized replica of the
/// command-side documents plus projection bookkeeping. It keeps no query
/// documents; readers at this level traverse the graph directly.
pub fn first_level_projection(prefix: &str) -> Result<ModelConstellation, ModelError> {
    from_table(
        ModelKind::FirstLevelProjection,
        prefix,
        &FIRST_LEVEL_PROJECTION,
    )
}

/// Constellation of the second-level projection: aggregated query documents
/// rebuilt from the first level, with only projection bookkeeping on the
/// document side.
pub fn second_level_projection(prefix: &str) -> Result<ModelConstellation, ModelError> {
    from_table(
        ModelKind::SecondLevelProjection,
        prefix,
        &SECOND_LEVEL_PROJECTION,
    )
}

fn from_table(
    model: ModelKind,
    prefix: &str,
    table: &ModelTable,
) -> Result<ModelConstellation, ModelError> {
    let mut builder = ConstellationBuilder::new(model, prefix);

    for base in table.documents {
        builder = builder.document(base);
    }
    for base in table.query_documents {
        builder = builder.query_document(base);
    }
    for base in table.edges {
        builder = builder.edge(base);
    }

    builder.build()
}

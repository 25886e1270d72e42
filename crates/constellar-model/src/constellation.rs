use crate::{
    catalog::ModelKind,
    naming::{CollectionName, NamingError, Prefix},
};
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};
use thiserror::Error as ThisError;

///
/// ModelError
///

#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("collection '{name}' is declared more than once in the {model} model ({first}, then {second})")]
    DuplicateCollection {
        model: ModelKind,
        name: CollectionName,
        first: CollectionRole,
        second: CollectionRole,
    },

    #[error("the {model} model declares no collections")]
    EmptyModel { model: ModelKind },

    #[error(transparent)]
    Naming(#[from] NamingError),
}

///
/// CollectionRole
///
/// Semantic role of a collection inside one model constellation. Roles
/// partition the constellation; the same resolved name never carries two.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "kebab-case")]
#[remain::sorted]
pub enum CollectionRole {
    Document,
    Edge,
    QueryDocument,
}

impl CollectionRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Edge => "edge",
            Self::QueryDocument => "query-document",
        }
    }
}

impl fmt::Display for CollectionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// ModelConstellation
///
/// The complete collection topology derived for one logical model under one
/// prefix: three pairwise-disjoint, ordered name sets. Values are immutable
/// once built; the only way to construct one is [`ConstellationBuilder`],
/// which rejects any declaration that would break disjointness.
///

#[derive(Clone, Debug, Serialize)]
pub struct ModelConstellation {
    model: ModelKind,
    prefix: Prefix,
    document_collections: BTreeSet<CollectionName>,
    query_document_collections: BTreeSet<CollectionName>,
    edge_collections: BTreeSet<CollectionName>,
}

impl ModelConstellation {
    #[must_use]
    pub const fn model(&self) -> ModelKind {
        self.model
    }

    #[must_use]
    pub const fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    #[must_use]
    pub const fn document_collections(&self) -> &BTreeSet<CollectionName> {
        &self.document_collections
    }

    #[must_use]
    pub const fn query_document_collections(&self) -> &BTreeSet<CollectionName> {
        &self.query_document_collections
    }

    #[must_use]
    pub const fn edge_collections(&self) -> &BTreeSet<CollectionName> {
        &self.edge_collections
    }

    /// Every collection with its role: documents, then query documents, then
    /// edges, each group in name order.
    pub fn collections(&self) -> impl Iterator<Item = (CollectionRole, &CollectionName)> {
        self.document_collections
            .iter()
            .map(|name| (CollectionRole::Document, name))
            .chain(
                self.query_document_collections
                    .iter()
                    .map(|name| (CollectionRole::QueryDocument, name)),
            )
            .chain(
                self.edge_collections
                    .iter()
                    .map(|name| (CollectionRole::Edge, name)),
            )
    }

    /// Role of `name` in this constellation, if it belongs to it.
    #[must_use]
    pub fn role_of(&self, name: &str) -> Option<CollectionRole> {
        if self.document_collections.contains(name) {
            Some(CollectionRole::Document)
        } else if self.query_document_collections.contains(name) {
            Some(CollectionRole::QueryDocument)
        } else if self.edge_collections.contains(name) {
            Some(CollectionRole::Edge)
        } else {
            None
        }
    }

    /// Total collection count across all three sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.document_collections.len()
            + self.query_document_collections.len()
            + self.edge_collections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

///
/// ConstellationBuilder
///
/// Collects role/base-name declarations for one model and resolves them into
/// a [`ModelConstellation`]. The prefix and every base name are validated on
/// build; a resolved name claimed by two declarations is rejected, so the
/// constellations handed out are disjoint by construction.
///

#[derive(Clone, Debug)]
pub struct ConstellationBuilder {
    model: ModelKind,
    prefix: String,
    entries: Vec<(CollectionRole, String)>,
}

impl ConstellationBuilder {
    #[must_use]
    pub fn new(model: ModelKind, prefix: &str) -> Self {
        Self {
            model,
            prefix: prefix.to_string(),
            entries: Vec::new(),
        }
    }

    /// Declare a command-side document collection.
    #[must_use]
    pub fn document(self, base: &str) -> Self {
        self.declare(CollectionRole::Document, base)
    }

    /// Declare a read-side query document collection.
    #[must_use]
    pub fn query_document(self, base: &str) -> Self {
        self.declare(CollectionRole::QueryDocument, base)
    }

    /// Declare an edge collection.
    #[must_use]
    pub fn edge(self, base: &str) -> Self {
        self.declare(CollectionRole::Edge, base)
    }

    #[must_use]
    fn declare(mut self, role: CollectionRole, base: &str) -> Self {
        self.entries.push((role, base.to_string()));
        self
    }

    /// Resolve every declaration and assemble the constellation.
    pub fn build(self) -> Result<ModelConstellation, ModelError> {
        let prefix = Prefix::new(self.prefix)?;

        if self.entries.is_empty() {
            return Err(ModelError::EmptyModel { model: self.model });
        }

        let mut claimed: BTreeMap<CollectionName, CollectionRole> = BTreeMap::new();
        let mut document_collections = BTreeSet::new();
        let mut query_document_collections = BTreeSet::new();
        let mut edge_collections = BTreeSet::new();

        for (role, base) in self.entries {
            let name = prefix.resolve(&base)?;

            if let Some(&first) = claimed.get(&name) {
                return Err(ModelError::DuplicateCollection {
                    model: self.model,
                    name,
                    first,
                    second: role,
                });
            }
            claimed.insert(name.clone(), role);

            match role {
                CollectionRole::Document => {
                    document_collections.insert(name);
                }
                CollectionRole::Edge => {
                    edge_collections.insert(name);
                }
                CollectionRole::QueryDocument => {
                    query_document_collections.insert(name);
                }
            }
        }

        Ok(ModelConstellation {
            model: self.model,
            prefix,
            document_collections,
            query_document_collections,
            edge_collections,
        })
    }
}

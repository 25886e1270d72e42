use constellar_model::{
    constellation::{CollectionRole, ModelConstellation},
    naming::CollectionName,
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

///
/// CollectionKind
///
/// Physical classification a provisioning consumer needs: a collection is
/// created either as a document collection or as an edge collection. Query
/// documents collapse into `Document` here; the finer [`CollectionRole`]
/// stays available on the constellation for callers that need the
/// command/read split.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "kebab-case")]
#[remain::sorted]
pub enum CollectionKind {
    Document,
    Edge,
}

impl CollectionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Edge => "edge",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<CollectionRole> for CollectionKind {
    fn from(role: CollectionRole) -> Self {
        match role {
            CollectionRole::Document | CollectionRole::QueryDocument => Self::Document,
            CollectionRole::Edge => Self::Edge,
        }
    }
}

///
/// CollectionDetail
///
/// One provisioning entry: a resolved collection name and the kind of
/// physical collection it requires.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct CollectionDetail {
    pub name: CollectionName,
    pub kind: CollectionKind,
}

impl CollectionDetail {
    #[must_use]
    pub const fn new(name: CollectionName, kind: CollectionKind) -> Self {
        Self { name, kind }
    }
}

/// Flatten a constellation into its provisioning sequence: the set union of
/// document and query-document names classified [`CollectionKind::Document`],
/// followed by edge names classified [`CollectionKind::Edge`], each group in
/// name order.
#[must_use]
pub fn collection_details(constellation: &ModelConstellation) -> Vec<CollectionDetail> {
    let documents: BTreeSet<&CollectionName> = constellation
        .document_collections()
        .iter()
        .chain(constellation.query_document_collections())
        .collect();

    documents
        .into_iter()
        .map(|name| CollectionDetail::new(name.clone(), CollectionKind::Document))
        .chain(
            constellation
                .edge_collections()
                .iter()
                .map(|name| CollectionDetail::new(name.clone(), CollectionKind::Edge)),
        )
        .collect()
}

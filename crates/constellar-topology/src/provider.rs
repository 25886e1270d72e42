use crate::detail::{CollectionDetail, collection_details};
use constellar_model::{
    catalog::{self, ModelKind},
    constellation::ModelError,
};

///
/// CollectionTopology
///
/// Shared capability of the per-model topology providers: derive the
/// authoritative, flattened collection sequence for the prefix bound at
/// construction. Derivation is pure and idempotent; the only failure mode is
/// a constellation rejection, which passes through unchanged.
///

pub trait CollectionTopology {
    /// The logical model this provider answers for.
    fn model(&self) -> ModelKind;

    /// The prefix bound at construction, exactly as supplied.
    fn prefix(&self) -> &str;

    /// Derive the flattened, classified collection sequence.
    fn collection_details(&self) -> Result<Vec<CollectionDetail>, ModelError>;
}

///
/// UserProfileStoreTopology
///
/// Topology provider for the command-side user-profile store.
///

#[derive(Clone, Debug)]
pub struct UserProfileStoreTopology {
    prefix: String,
}

impl UserProfileStoreTopology {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl CollectionTopology for UserProfileStoreTopology {
    fn model(&self) -> ModelKind {
        ModelKind::UserProfileStore
    }

    fn prefix(&self) -> &str {
        &self.prefix
    }

    fn collection_details(&self) -> Result<Vec<CollectionDetail>, ModelError> {
        let constellation = catalog::user_profile_store(&self.prefix)?;

        Ok(collection_details(&constellation))
    }
}

///
/// FirstLevelProjectionTopology
///
/// Topology provider for the first-level projection.
///

#[derive(Clone, Debug)]
pub struct FirstLevelProjectionTopology {
    prefix: String,
}

impl FirstLevelProjectionTopology {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl CollectionTopology for FirstLevelProjectionTopology {
    fn model(&self) -> ModelKind {
        ModelKind::FirstLevelProjection
    }

    fn prefix(&self) -> &str {
        &self.prefix
    }

    fn collection_details(&self) -> Result<Vec<CollectionDetail>, ModelError> {
        let constellation = catalog::first_level_projection(&self.prefix)?;

        Ok(collection_details(&constellation))
    }
}

///
/// SecondLevelProjectionTopology
///
/// Topology provider for the second-level projection.
///

#[derive(Clone, Debug)]
pub struct SecondLevelProjectionTopology {
    prefix: String,
}

impl SecondLevelProjectionTopology {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl CollectionTopology for SecondLevelProjectionTopology {
    fn model(&self) -> ModelKind {
        ModelKind::SecondLevelProjection
    }

    fn prefix(&self) -> &str {
        &self.prefix
    }

    fn collection_details(&self) -> Result<Vec<CollectionDetail>, ModelError> {
        let constellation = catalog::second_level_projection(&self.prefix)?;

        Ok(collection_details(&constellation))
    }
}

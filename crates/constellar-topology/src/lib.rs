pub mod detail;
pub mod plan;
pub mod provider;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        detail::{CollectionDetail, CollectionKind, collection_details},
        plan::{PlanError, ProvisioningPlan},
        provider::{
            CollectionTopology, FirstLevelProjectionTopology, SecondLevelProjectionTopology,
            UserProfileStoreTopology,
        },
    };
}

//! ## Crate layout
//! - `model`: logical models, naming rules, and constellation building.
//! - `topology`: provider capability, provisioning classification, and plans.
//!
//! The `prelude` module mirrors the surface provisioning call sites use.

pub use constellar_model as model;
pub use constellar_topology as topology;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use model::Error;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        model::{
            catalog::{self, ModelKind},
            constellation::{CollectionRole, ConstellationBuilder, ModelConstellation, ModelError},
            naming::{CollectionName, NamingError, Prefix},
        },
        topology::{
            detail::{CollectionDetail, CollectionKind, collection_details},
            plan::{PlanError, ProvisioningPlan},
            provider::{
                CollectionTopology as _, FirstLevelProjectionTopology,
                SecondLevelProjectionTopology, UserProfileStoreTopology,
            },
        },
    };
}

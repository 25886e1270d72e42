use crate::detail::{CollectionDetail, CollectionKind};
use constellar_model::naming::CollectionName;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error as ThisError;

///
/// PlanError
///

#[derive(Debug, ThisError)]
pub enum PlanError {
    #[error("collection '{name}' appears more than once in the target topology")]
    DuplicateTarget { name: CollectionName },

    #[error("collection '{name}' exists as {found} but the model requires {expected}")]
    KindMismatch {
        name: CollectionName,
        expected: CollectionKind,
        found: CollectionKind,
    },
}

///
/// ProvisioningPlan
///
/// Pure diff between a derived target topology and the collections a caller
/// observed in the store: what to create, and what is already in place.
/// A duplicate name in the target sequence fails the plan instead of being
/// deduplicated away, and so does an existing collection of the wrong kind.
///

#[derive(Clone, Debug, Serialize)]
pub struct ProvisioningPlan {
    create: Vec<CollectionDetail>,
    present: Vec<CollectionName>,
}

impl ProvisioningPlan {
    /// Compare `target` against the observed name-to-kind map.
    pub fn derive(
        target: &[CollectionDetail],
        existing: &BTreeMap<CollectionName, CollectionKind>,
    ) -> Result<Self, PlanError> {
        let mut seen: BTreeSet<&CollectionName> = BTreeSet::new();
        let mut create = Vec::new();
        let mut present = Vec::new();

        for detail in target {
            if !seen.insert(&detail.name) {
                return Err(PlanError::DuplicateTarget {
                    name: detail.name.clone(),
                });
            }

            match existing.get(&detail.name) {
                None => create.push(detail.clone()),
                Some(found) if *found == detail.kind => present.push(detail.name.clone()),
                Some(found) => {
                    return Err(PlanError::KindMismatch {
                        name: detail.name.clone(),
                        expected: detail.kind,
                        found: *found,
                    });
                }
            }
        }

        Ok(Self { create, present })
    }

    /// Collections that must be created, in target order.
    #[must_use]
    pub fn create(&self) -> &[CollectionDetail] {
        &self.create
    }

    /// Collections already in place with the required kind, in target order.
    #[must_use]
    pub fn present(&self) -> &[CollectionName] {
        &self.present
    }

    /// True when nothing is left to create.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.create.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{CollectionTopology, UserProfileStoreTopology};

    fn target() -> Vec<CollectionDetail> {
        UserProfileStoreTopology::new("svc")
            .collection_details()
            .expect("valid prefix")
    }

    fn observed(entries: &[(&str, CollectionKind)]) -> BTreeMap<CollectionName, CollectionKind> {
        entries
            .iter()
            .map(|(name, kind)| (CollectionName::new(*name).expect("valid name"), *kind))
            .collect()
    }

    #[test]
    fn empty_store_creates_everything() {
        let target = target();
        let plan = ProvisioningPlan::derive(&target, &BTreeMap::new()).expect("clean target");

        assert_eq!(plan.create().len(), target.len());
        assert!(plan.present().is_empty());
        assert!(!plan.is_satisfied());
    }

    #[test]
    fn existing_collections_are_reported_present() {
        let target = target();
        let existing = observed(&[
            ("svc_profiles", CollectionKind::Document),
            ("svc_memberships", CollectionKind::Edge),
        ]);

        let plan = ProvisioningPlan::derive(&target, &existing).expect("clean target");

        assert_eq!(plan.create().len(), target.len() - 2);
        assert_eq!(
            plan.present()
                .iter()
                .map(CollectionName::as_str)
                .collect::<Vec<_>>(),
            ["svc_profiles", "svc_memberships"]
        );
    }

    #[test]
    fn fully_provisioned_store_is_satisfied() {
        let target = target();
        let existing: BTreeMap<CollectionName, CollectionKind> = target
            .iter()
            .map(|detail| (detail.name.clone(), detail.kind))
            .collect();

        let plan = ProvisioningPlan::derive(&target, &existing).expect("clean target");

        assert!(plan.is_satisfied());
        assert_eq!(plan.present().len(), target.len());
    }

    #[test]
    fn unmanaged_collections_are_ignored() {
        let target = target();
        let existing = observed(&[("legacy_things", CollectionKind::Document)]);

        let plan = ProvisioningPlan::derive(&target, &existing).expect("clean target");

        assert_eq!(plan.create().len(), target.len());
        assert!(plan.present().is_empty());
    }

    #[test]
    fn kind_mismatch_fails_the_plan() {
        let target = target();
        let existing = observed(&[("svc_memberships", CollectionKind::Document)]);

        let err =
            ProvisioningPlan::derive(&target, &existing).expect_err("edge exists as document");

        match err {
            PlanError::KindMismatch {
                name,
                expected,
                found,
            } => {
                assert_eq!(name.as_str(), "svc_memberships");
                assert_eq!(expected, CollectionKind::Edge);
                assert_eq!(found, CollectionKind::Document);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_target_fails_the_plan() {
        let mut target = target();
        target.push(target[0].clone());

        let err =
            ProvisioningPlan::derive(&target, &BTreeMap::new()).expect_err("duplicated target");

        assert!(matches!(err, PlanError::DuplicateTarget { .. }));
    }
}

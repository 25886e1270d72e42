use crate::{catalog::ModelKind, constellation::ModelConstellation, naming::CollectionName};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn arb_prefix() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-z][a-z0-9-]{0,11}"]
}

fn arb_nonempty_prefix() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,11}"
}

fn arb_model() -> impl Strategy<Value = ModelKind> {
    prop_oneof![
        Just(ModelKind::UserProfileStore),
        Just(ModelKind::FirstLevelProjection),
        Just(ModelKind::SecondLevelProjection),
    ]
}

fn all_names(constellation: &ModelConstellation) -> BTreeSet<CollectionName> {
    constellation
        .collections()
        .map(|(_, name)| name.clone())
        .collect()
}

proptest! {
    #[test]
    fn valid_prefixes_always_build(prefix in arb_prefix(), model in arb_model()) {
        prop_assert!(model.constellation(&prefix).is_ok());
    }

    #[test]
    fn derivation_is_deterministic(prefix in arb_prefix(), model in arb_model()) {
        let first = model.constellation(&prefix).expect("valid prefix");
        let second = model.constellation(&prefix).expect("valid prefix");

        prop_assert_eq!(all_names(&first), all_names(&second));
    }

    #[test]
    fn sets_stay_disjoint(prefix in arb_prefix(), model in arb_model()) {
        let constellation = model.constellation(&prefix).expect("valid prefix");

        prop_assert_eq!(all_names(&constellation).len(), constellation.len());
    }

    #[test]
    fn prefixed_names_are_prefix_plus_base(
        prefix in arb_nonempty_prefix(),
        model in arb_model(),
    ) {
        let bare = model.constellation("").expect("empty prefix");
        let prefixed = model.constellation(&prefix).expect("valid prefix");

        let expected: BTreeSet<String> = bare
            .collections()
            .map(|(_, name)| format!("{prefix}_{name}"))
            .collect();
        let actual: BTreeSet<String> = prefixed
            .collections()
            .map(|(_, name)| name.to_string())
            .collect();

        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn distinct_prefixes_never_collide(
        a in arb_prefix(),
        b in arb_prefix(),
        model in arb_model(),
    ) {
        prop_assume!(a != b);

        let left = all_names(&model.constellation(&a).expect("valid prefix"));
        let right = all_names(&model.constellation(&b).expect("valid prefix"));

        prop_assert!(left.is_disjoint(&right));
    }
}

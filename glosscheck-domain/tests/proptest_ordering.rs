//! Property-based tests for deterministic ordering in glosscheck-domain.
//!
//! These tests verify that:
//! - Units are sorted consistently regardless of registration order
//! - Ties on priority are broken by name
//! - Repeated listings produce identical output

use glosscheck_domain::{CheckUnit, FnCheck, Registry};
use glosscheck_types::CheckResult;
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Strategy to generate unique check names with small (often colliding) priorities.
fn arb_units() -> impl Strategy<Value = Vec<(String, i32)>> {
    prop::collection::btree_map(
        prop::string::string_regex(r"[a-z][a-z0-9_-]{0,10}").unwrap(),
        -3i32..4,
        1..12,
    )
    .prop_map(|m: BTreeMap<String, i32>| m.into_iter().collect())
}

fn build(units: &[(String, i32)]) -> Registry {
    let mut registry = Registry::new();
    for (name, priority) in units {
        let owned = name.clone();
        let unit: Arc<dyn CheckUnit> =
            Arc::new(FnCheck::simple(name.clone(), *priority, false, move |_, _, _| {
                CheckResult::pass(owned.clone(), "")
            }));
        registry.register(unit).unwrap();
    }
    registry
}

proptest! {
    /// Registration order never changes the listing.
    #[test]
    fn listing_ignores_registration_order(units in arb_units(), seed in any::<u64>()) {
        let mut shuffled = units.clone();
        // Deterministic rotation stands in for a shuffle.
        let len = shuffled.len();
        shuffled.rotate_left((seed as usize) % len);
        shuffled.reverse();

        let a = build(&units).names();
        let b = build(&shuffled).names();
        prop_assert_eq!(a, b);
    }

    /// The listing is sorted by (priority, name).
    #[test]
    fn listing_is_priority_then_name(units in arb_units()) {
        let registry = build(&units);
        let keys: Vec<(i32, String)> = registry
            .list_sorted()
            .iter()
            .map(|u| (u.priority(), u.name().to_string()))
            .collect();

        let mut expected = keys.clone();
        expected.sort();
        prop_assert_eq!(&keys, &expected);
        prop_assert_eq!(keys.len(), units.len());
    }

    /// Listing twice yields the same order.
    #[test]
    fn listing_is_stable(units in arb_units()) {
        let registry = build(&units);
        prop_assert_eq!(registry.names(), registry.names());
    }
}

//! Property-based tests for deterministic reports under concurrent execution.
//!
//! These tests verify that:
//! - The split discipline reports normal outcomes sorted by (name, status)
//! - Completion timing and the concurrency bound never change the report

use glosscheck_core::{
    Artifact, CheckResult, CheckUnit, Discipline, FnCheck, Registry, RunContext, Status,
    ValidateSettings, validate,
};
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn arb_status() -> impl Strategy<Value = Status> {
    prop::sample::select(Status::ALL.to_vec())
}

/// Unique names, each with a priority, a status and a delay in microseconds.
fn arb_units() -> impl Strategy<Value = Vec<(String, i32, Status, u64)>> {
    prop::collection::btree_map(
        prop::string::string_regex(r"[a-z][a-z0-9-]{0,8}").unwrap(),
        (-2i32..3, arb_status(), 0u64..400),
        1..10,
    )
    .prop_map(|m: BTreeMap<String, (i32, Status, u64)>| {
        m.into_iter()
            .map(|(name, (priority, status, delay))| (name, priority, status, delay))
            .collect()
    })
}

fn build(units: &[(String, i32, Status, u64)]) -> Registry {
    let mut registry = Registry::new();
    for (name, priority, status, delay) in units {
        let owned = name.clone();
        let status = *status;
        let delay = Duration::from_micros(*delay);
        let unit: Arc<dyn CheckUnit> =
            Arc::new(FnCheck::simple(name.clone(), *priority, false, move |_, _, _| {
                thread::sleep(delay);
                CheckResult::new(owned.clone(), status, "")
            }));
        registry.register(unit).unwrap();
    }
    registry
}

fn split(max_parallel: usize) -> ValidateSettings {
    ValidateSettings {
        discipline: Discipline::Split,
        max_parallel,
        ..ValidateSettings::default()
    }
}

fn input() -> Artifact {
    Artifact::new(b"term;en\n".to_vec(), "g.csv", vec!["en".to_string()])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Normal-phase outcomes come back sorted by (name, status).
    #[test]
    fn split_reports_sorted_outcomes(units in arb_units(), max_parallel in 1usize..6) {
        let registry = build(&units);
        let summary = validate(&registry, &RunContext::new(), input(), &split(max_parallel)).unwrap();

        let reported: Vec<(String, Status)> = summary
            .outcomes
            .iter()
            .map(|o| (o.name.clone(), o.status))
            .collect();
        let mut expected: Vec<(String, Status)> =
            units.iter().map(|(n, _, s, _)| (n.clone(), *s)).collect();
        expected.sort();

        prop_assert_eq!(reported, expected);
        prop_assert_eq!(summary.counts.total(), units.len() as u64);
    }

    /// The concurrency bound changes scheduling, never the report.
    #[test]
    fn split_report_independent_of_parallelism(units in arb_units()) {
        let registry = build(&units);
        let serial = validate(&registry, &RunContext::new(), input(), &split(1)).unwrap();
        let wide = validate(&registry, &RunContext::new(), input(), &split(8)).unwrap();

        prop_assert_eq!(serial.outcomes, wide.outcomes);
        prop_assert_eq!(serial.counts, wide.counts);
    }

    /// Ordered runs follow the registry listing exactly.
    #[test]
    fn ordered_report_follows_listing(units in arb_units()) {
        let registry = build(&units);
        let summary = validate(
            &registry,
            &RunContext::new(),
            input(),
            &ValidateSettings::default(),
        )
        .unwrap();

        let reported: Vec<String> = summary.outcomes.iter().map(|o| o.name.clone()).collect();
        prop_assert_eq!(reported, registry.names());
    }
}

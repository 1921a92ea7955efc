use glosscheck_types::{Artifact, CheckResult, FixResult, Status, Summary};
use proptest::prelude::*;

#[test]
fn summary_new_sets_defaults() {
    let input = Artifact::new(
        b"term;de;en\n".to_vec(),
        "glossary.csv",
        vec!["de".to_string(), "en".to_string()],
    );

    let summary = Summary::new(&input);

    assert_eq!(summary.counts.total(), 0);
    assert!(summary.outcomes.is_empty());
    assert!(!summary.early_exit);
    assert!(summary.early_check.is_none());
    assert!(summary.early_status.is_none());
    assert!(!summary.applied_fixes);
    assert!(summary.fixes.is_empty());
    assert_eq!(summary.final_data, input.data);
    assert_eq!(summary.final_path, input.path);
    assert!(summary.run.is_none());
}

#[test]
fn artifact_default_is_empty() {
    let artifact = Artifact::default();
    assert!(artifact.data.is_empty());
    assert!(artifact.path.is_empty());
    assert!(artifact.langs.is_empty());
}

#[test]
fn fix_result_helpers_match_fields() {
    let data = FixResult::with_data(b"abc".to_vec());
    assert_eq!(data.data.as_deref(), Some(&b"abc"[..]));
    assert!(data.path.is_none());

    let path = FixResult::with_path("renamed.csv");
    assert!(path.data.is_none());
    assert_eq!(path.path.as_deref(), Some("renamed.csv"));
}

fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Pass),
        Just(Status::Warn),
        Just(Status::Fail),
        Just(Status::Error),
    ]
}

proptest! {
    /// Counters always agree with the recorded outcomes.
    #[test]
    fn counts_match_outcomes(statuses in prop::collection::vec(arb_status(), 0..32)) {
        let mut summary = Summary::new(&Artifact::default());
        for (i, status) in statuses.iter().enumerate() {
            summary.record(CheckResult::new(format!("c{i}"), *status, ""));
        }

        for status in Status::ALL {
            let seen = summary.outcomes.iter().filter(|o| o.status == status).count() as u64;
            prop_assert_eq!(summary.counts.get(status), seen);
        }
        prop_assert_eq!(summary.counts.total(), statuses.len() as u64);
        prop_assert_eq!(summary.worst_status(), statuses.iter().copied().max());
    }
}

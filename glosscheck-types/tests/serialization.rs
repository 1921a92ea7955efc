use glosscheck_types::{CheckResult, FixRecord, FixResult, Status, StatusCounts};

#[test]
fn status_serializes_snake_case() {
    let pass = serde_json::to_value(Status::Pass).expect("serialize");
    let warn = serde_json::to_value(Status::Warn).expect("serialize");
    let fail = serde_json::to_value(Status::Fail).expect("serialize");
    let error = serde_json::to_value(Status::Error).expect("serialize");

    assert_eq!(pass, serde_json::json!("pass"));
    assert_eq!(warn, serde_json::json!("warn"));
    assert_eq!(fail, serde_json::json!("fail"));
    assert_eq!(error, serde_json::json!("error"));
}

#[test]
fn status_display_matches_wire_name() {
    for status in Status::ALL {
        let wire = serde_json::to_value(status).expect("serialize");
        assert_eq!(wire, serde_json::json!(status.to_string()));
    }
}

#[test]
fn check_result_message_defaults_when_missing() {
    let parsed: CheckResult =
        serde_json::from_str(r#"{"name":"utf8","status":"warn"}"#).expect("parse");
    assert_eq!(parsed.name, "utf8");
    assert_eq!(parsed.status, Status::Warn);
    assert!(parsed.message.is_empty());
}

#[test]
fn fix_record_omits_empty_note_and_absent_path() {
    let record = FixRecord::from_fix("trim", &FixResult::with_data(b"x".to_vec()));
    let value = serde_json::to_value(&record).expect("serialize");

    assert_eq!(value["check"], "trim");
    assert_eq!(value["data_supplied"], true);
    assert_eq!(value["did_change"], true);
    assert!(value.get("note").is_none());
    assert!(value.get("path").is_none());
}

#[test]
fn status_counts_serialize_every_bucket() {
    let counts = StatusCounts {
        pass: 2,
        warn: 1,
        fail: 0,
        error: 0,
    };
    let value = serde_json::to_value(counts).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({ "pass": 2, "warn": 1, "fail": 0, "error": 0 })
    );
}

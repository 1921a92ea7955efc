use crate::artifact::Artifact;
use crate::outcome::{CheckResult, FixResult};
use crate::status::{Status, StatusCounts};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fix proposal that was folded into the working artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixRecord {
    pub check: String,
    pub data_supplied: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    pub did_change: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
}

impl FixRecord {
    pub fn from_fix(check: &str, fix: &FixResult) -> Self {
        Self {
            check: check.to_string(),
            data_supplied: fix.data.is_some(),
            path: fix.path.clone(),
            did_change: fix.did_change,
            note: fix.note.clone(),
        }
    }
}

/// Timing and identity of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunInfo {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl RunInfo {
    pub fn start() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            ended_at: None,
            duration_ms: None,
        }
    }

    pub fn finish(&mut self) {
        let now = Utc::now();
        let elapsed = (now - self.started_at).num_milliseconds().max(0) as u64;
        self.ended_at = Some(now);
        self.duration_ms = Some(elapsed);
    }
}

/// Aggregate report of one validation run.
///
/// Outcomes are only appended through [`Summary::record`], which keeps
/// `counts` equal to the statuses found in `outcomes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub counts: StatusCounts,
    pub outcomes: Vec<CheckResult>,

    pub early_exit: bool,
    pub early_check: Option<String>,
    pub early_status: Option<Status>,

    pub applied_fixes: bool,
    pub fixes: Vec<FixRecord>,
    pub final_data: Vec<u8>,
    pub final_path: String,

    pub run: Option<RunInfo>,
}

impl Summary {
    /// Fresh summary whose final data/path mirror the input.
    pub fn new(input: &Artifact) -> Self {
        Self {
            counts: StatusCounts::default(),
            outcomes: Vec::new(),
            early_exit: false,
            early_check: None,
            early_status: None,
            applied_fixes: false,
            fixes: Vec::new(),
            final_data: input.data.clone(),
            final_path: input.path.clone(),
            run: None,
        }
    }

    pub fn record(&mut self, result: CheckResult) {
        self.counts.record(result.status);
        self.outcomes.push(result);
    }

    pub fn mark_early_exit(&mut self, check: impl Into<String>, status: Status) {
        self.early_exit = true;
        self.early_check = Some(check.into());
        self.early_status = Some(status);
    }

    /// Mirror the propagated artifact fields.
    pub fn sync_final(&mut self, artifact: &Artifact) {
        self.final_data.clone_from(&artifact.data);
        self.final_path.clone_from(&artifact.path);
    }

    pub fn note_fix(&mut self, check: &str, fix: &FixResult) {
        if fix.did_change {
            self.applied_fixes = true;
        }
        self.fixes.push(FixRecord::from_fix(check, fix));
    }

    /// Most severe status recorded, if any check ran.
    pub fn worst_status(&self) -> Option<Status> {
        self.outcomes.iter().map(|o| o.status).max()
    }

    /// First Error outcome in execution order.
    pub fn first_error(&self) -> Option<&CheckResult> {
        self.outcomes.iter().find(|o| o.status == Status::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.counts.error > 0
    }

    /// Business outcome: any Fail or Error anywhere in the run.
    pub fn is_failed(&self) -> bool {
        self.counts.fail > 0 || self.counts.error > 0
    }
}

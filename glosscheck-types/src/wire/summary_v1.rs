use serde::{Deserialize, Serialize};

use crate::outcome::CheckResult;
use crate::status::{Status, StatusCounts};
use crate::summary::{FixRecord, RunInfo, Summary};

/// Schema-exact wire representation of glosscheck.summary.v1.
///
/// Raw final bytes are not part of the wire form; only their length is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryV1 {
    pub schema: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run: Option<RunInfo>,

    pub counts: StatusCounts,

    #[serde(default)]
    pub outcomes: Vec<CheckResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early_exit: Option<EarlyExitV1>,

    #[serde(default)]
    pub applied_fixes: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fixes: Vec<FixRecord>,

    pub final_path: String,
    pub final_data_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarlyExitV1 {
    pub check: String,
    pub status: Status,
}

impl From<&Summary> for SummaryV1 {
    fn from(summary: &Summary) -> Self {
        let early_exit = match (&summary.early_check, summary.early_status) {
            (Some(check), Some(status)) if summary.early_exit => Some(EarlyExitV1 {
                check: check.clone(),
                status,
            }),
            _ => None,
        };

        Self {
            schema: crate::schema::GLOSSCHECK_SUMMARY_V1.to_string(),
            run: summary.run.clone(),
            counts: summary.counts,
            outcomes: summary.outcomes.clone(),
            early_exit,
            applied_fixes: summary.applied_fixes,
            fixes: summary.fixes.clone(),
            final_path: summary.final_path.clone(),
            final_data_bytes: summary.final_data.len() as u64,
        }
    }
}

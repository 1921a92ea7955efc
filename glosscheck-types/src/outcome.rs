use crate::status::Status;
use serde::{Deserialize, Serialize};

/// A check's verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub status: Status,

    #[serde(default)]
    pub message: String,
}

impl CheckResult {
    pub fn new(name: impl Into<String>, status: Status, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            message: message.into(),
        }
    }

    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, Status::Pass, message)
    }

    pub fn warn(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, Status::Warn, message)
    }

    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, Status::Fail, message)
    }

    pub fn error(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, Status::Error, message)
    }
}

/// A check's proposed mutation of the working artifact.
///
/// `data: None` means "no opinion, keep the current bytes".
/// `data: Some(vec![])` means the check deliberately emptied the content.
/// The two must never be conflated, so presence is carried by the `Option`,
/// not by the length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixResult {
    pub data: Option<Vec<u8>>,
    pub path: Option<String>,
    pub did_change: bool,
    pub note: String,
}

impl FixResult {
    /// Replacement content; marks the fix as a change.
    pub fn with_data(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Some(data.into()),
            did_change: true,
            ..Self::default()
        }
    }

    /// Replacement path only; the content is left alone.
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            did_change: true,
            ..Self::default()
        }
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// True when the fix carries neither data nor path.
    pub fn is_empty(&self) -> bool {
        self.data.is_none() && self.path.is_none()
    }
}

/// Verdict plus optional fix, as returned by a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub result: CheckResult,
    pub fix: FixResult,
}

impl CheckOutcome {
    pub fn new(result: CheckResult, fix: FixResult) -> Self {
        Self { result, fix }
    }
}

impl From<CheckResult> for CheckOutcome {
    fn from(result: CheckResult) -> Self {
        Self {
            result,
            fix: FixResult::default(),
        }
    }
}

//! Shared value types for the glosscheck workspace.
//!
//! These flow between the orchestrator and the check units:
//! - [`Artifact`] is the input snapshot a unit inspects.
//! - [`CheckOutcome`] is what a unit hands back (verdict plus optional fix).
//! - [`Summary`] is the aggregate report of one run.
//!
//! # Design constraints
//! - `Summary` is serialized through the versioned [`wire`] form only.
//! - Prefer adding optional fields over changing semantics.

pub mod artifact;
pub mod outcome;
pub mod status;
pub mod summary;
pub mod wire;

pub use artifact::Artifact;
pub use outcome::{CheckOutcome, CheckResult, FixResult};
pub use status::{Status, StatusCounts};
pub use summary::{FixRecord, RunInfo, Summary};

/// Schema identifiers.
pub mod schema {
    pub const GLOSSCHECK_SUMMARY_V1: &str = "glosscheck.summary.v1";
}

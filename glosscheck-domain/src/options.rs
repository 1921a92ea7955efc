use serde::Deserialize;

/// Per-run switches handed to every check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunOptions {
    /// Propagate each check's fix into the artifact seen by later checks.
    pub fix_mode: bool,

    /// Ask the caller to run the whole pipeline once more after fixes settle.
    /// The orchestrator itself never loops.
    pub rerun_after_fix: bool,

    /// Turn an Error anywhere into a hard error returned to the caller.
    pub hard_fail_on_err: bool,
}

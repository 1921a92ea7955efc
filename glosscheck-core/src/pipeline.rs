//! Entry points for hosts embedding the engine.

use crate::orchestrator::Orchestrator;
use crate::settings::ValidateSettings;
use glosscheck_domain::{Registry, RunContext};
use glosscheck_types::{Artifact, Summary};
use tracing::info;

/// Check name used in early-exit metadata when a run is cancelled.
pub const CANCELLED_CHECK: &str = "context canceled";

/// Message used when the escalated Error outcomes carry no text.
pub const FALLBACK_ERROR_MESSAGE: &str = "one or more checks reported an error";

/// Hard error returned to the caller. Both variants keep the report built so far.
#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    #[error("validation cancelled")]
    Cancelled { summary: Box<Summary> },

    #[error("check '{check}' errored: {message}")]
    CheckErrored {
        check: String,
        message: String,
        summary: Box<Summary>,
    },
}

impl ValidateError {
    pub fn summary(&self) -> &Summary {
        match self {
            ValidateError::Cancelled { summary } | ValidateError::CheckErrored { summary, .. } => {
                summary
            }
        }
    }

    pub fn into_summary(self) -> Summary {
        match self {
            ValidateError::Cancelled { summary } | ValidateError::CheckErrored { summary, .. } => {
                *summary
            }
        }
    }
}

/// Run every registered check once against `input`.
pub fn validate(
    registry: &Registry,
    ctx: &RunContext,
    input: Artifact,
    settings: &ValidateSettings,
) -> Result<Summary, ValidateError> {
    Orchestrator::new(registry, settings.clone()).validate(ctx, input)
}

/// Run the pipeline, then once more on the fixed artifact when asked to.
///
/// The second pass only happens when `fix_mode` and `rerun_after_fix` are both set and the
/// first pass applied fixes. The returned summary is the second pass's, with the first
/// pass's fix records in front and `applied_fixes` kept true. There is never a third pass.
pub fn run_with_rerun(
    registry: &Registry,
    ctx: &RunContext,
    input: Artifact,
    settings: &ValidateSettings,
) -> Result<Summary, ValidateError> {
    let langs = input.langs.clone();
    let first = validate(registry, ctx, input, settings)?;

    let options = settings.options;
    if !(options.fix_mode && options.rerun_after_fix && first.applied_fixes) {
        return Ok(first);
    }

    info!(fixes = first.fixes.len(), "rerunning after fixes");
    let fixed = Artifact::new(first.final_data.clone(), first.final_path.clone(), langs);

    let merge = |mut second: Summary| {
        let mut fixes = first.fixes.clone();
        fixes.append(&mut second.fixes);
        second.fixes = fixes;
        second.applied_fixes = true;
        second
    };

    match validate(registry, ctx, fixed, settings) {
        Ok(second) => Ok(merge(second)),
        Err(ValidateError::Cancelled { summary }) => Err(ValidateError::Cancelled {
            summary: Box::new(merge(*summary)),
        }),
        Err(ValidateError::CheckErrored {
            check,
            message,
            summary,
        }) => Err(ValidateError::CheckErrored {
            check,
            message,
            summary: Box::new(merge(*summary)),
        }),
    }
}

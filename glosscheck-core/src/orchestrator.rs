//! The check loop: ordering, fail-fast, fix propagation and concurrency.
//!
//! The orchestrator is the single writer of the working artifact. Checks only ever see a
//! shared reference; every fold into the summary happens on the calling thread.

use crate::pipeline::{CANCELLED_CHECK, FALLBACK_ERROR_MESSAGE, ValidateError};
use crate::settings::{Discipline, ValidateSettings};
use glosscheck_domain::{CheckUnit, Registry, RunContext, RunOptions, run_guarded};
use glosscheck_types::{Artifact, CheckOutcome, CheckResult, RunInfo, Status, Summary};
use std::sync::Arc;
use std::thread;
use tracing::{debug, info, warn};

/// How the loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Flow {
    Completed,
    Stopped { check: String, status: Status },
    Cancelled,
}

/// Working state for one run.
struct RunState {
    artifact: Artifact,
    summary: Summary,
    options: RunOptions,
}

impl RunState {
    fn new(input: Artifact, options: RunOptions) -> Self {
        let summary = Summary::new(&input);
        Self {
            artifact: input,
            summary,
            options,
        }
    }

    /// Fold one outcome: count it, then propagate its fix when fix mode is on.
    fn absorb(&mut self, outcome: CheckOutcome) {
        let CheckOutcome { result, fix } = outcome;

        if self.options.fix_mode && (!fix.is_empty() || fix.did_change) {
            self.artifact.apply_fix(&fix);
            self.summary.note_fix(&result.name, &fix);
            debug!(
                check = %result.name,
                data = fix.data.is_some(),
                path = ?fix.path,
                did_change = fix.did_change,
                "propagated fix"
            );
            self.summary.sync_final(&self.artifact);
        }
        self.summary.record(result);
    }
}

/// Runs the checks of one registry under fixed settings.
pub struct Orchestrator<'r> {
    registry: &'r Registry,
    settings: ValidateSettings,
}

impl<'r> Orchestrator<'r> {
    pub fn new(registry: &'r Registry, settings: ValidateSettings) -> Self {
        Self { registry, settings }
    }

    pub fn settings(&self) -> &ValidateSettings {
        &self.settings
    }

    /// Run every registered check against `input`.
    ///
    /// A hard error still carries the summary built so far.
    pub fn validate(&self, ctx: &RunContext, input: Artifact) -> Result<Summary, ValidateError> {
        let units = self.registry.list_sorted();
        let mut run = RunInfo::start();
        let mut state = RunState::new(input, self.settings.options);

        info!(
            run_id = %run.run_id,
            checks = units.len(),
            discipline = ?self.settings.discipline,
            fix_mode = self.settings.options.fix_mode,
            "starting validation"
        );

        let flow = match self.settings.discipline {
            Discipline::Ordered => self.run_ordered(ctx, &units, &mut state),
            Discipline::Split => self.run_split(ctx, &units, &mut state),
        };

        run.finish();
        state.summary.run = Some(run);

        let counts = state.summary.counts;
        info!(
            pass = counts.pass,
            warn = counts.warn,
            fail = counts.fail,
            error = counts.error,
            applied_fixes = state.summary.applied_fixes,
            "validation finished"
        );

        conclude(flow, state.summary, &self.settings.options)
    }

    fn run_ordered(
        &self,
        ctx: &RunContext,
        units: &[Arc<dyn CheckUnit>],
        state: &mut RunState,
    ) -> Flow {
        for unit in units {
            if ctx.is_cancelled() {
                return Flow::Cancelled;
            }
            if let Some(stop) = run_sequential(unit.as_ref(), ctx, state) {
                return stop;
            }
        }
        Flow::Completed
    }

    fn run_split(
        &self,
        ctx: &RunContext,
        units: &[Arc<dyn CheckUnit>],
        state: &mut RunState,
    ) -> Flow {
        let (critical, normal): (Vec<_>, Vec<_>) =
            units.iter().cloned().partition(|u| u.fail_fast());

        debug!(
            critical = critical.len(),
            normal = normal.len(),
            "split discipline"
        );

        for unit in &critical {
            if ctx.is_cancelled() {
                return Flow::Cancelled;
            }
            if let Some(stop) = run_sequential(unit.as_ref(), ctx, state) {
                return stop;
            }
        }

        let (mut outcomes, cancelled) = run_concurrent(
            &normal,
            ctx,
            &state.artifact,
            &state.options,
            self.settings.parallelism(),
        );

        // Completion order is scheduling-dependent; the report must not be.
        outcomes.sort_by(|a, b| {
            a.result
                .name
                .cmp(&b.result.name)
                .then(a.result.status.cmp(&b.result.status))
        });
        for outcome in outcomes {
            state.absorb(outcome);
        }

        if cancelled {
            Flow::Cancelled
        } else {
            Flow::Completed
        }
    }
}

/// Run one check on the calling thread and apply the fail-fast rule.
fn run_sequential(unit: &dyn CheckUnit, ctx: &RunContext, state: &mut RunState) -> Option<Flow> {
    let name = unit.name().to_string();
    debug!(check = %name, priority = unit.priority(), "running check");

    let outcome = run_guarded(unit, ctx, &state.artifact, &state.options);
    let status = outcome.result.status;
    debug!(check = %name, status = %status, "check finished");
    state.absorb(outcome);

    if unit.fail_fast() && status.is_blocking() {
        warn!(check = %name, status = %status, "fail-fast check stopped the run");
        return Some(Flow::Stopped {
            check: name,
            status,
        });
    }
    None
}

/// Run checks on scoped threads, at most `parallelism` at a time.
///
/// Each batch is joined before the next one starts; cancellation is checked before every
/// batch. Outcomes come back in launch order.
fn run_concurrent(
    units: &[Arc<dyn CheckUnit>],
    ctx: &RunContext,
    artifact: &Artifact,
    options: &RunOptions,
    parallelism: usize,
) -> (Vec<CheckOutcome>, bool) {
    let mut outcomes = Vec::with_capacity(units.len());

    for batch in units.chunks(parallelism) {
        if ctx.is_cancelled() {
            return (outcomes, true);
        }

        let joined: Vec<CheckOutcome> = thread::scope(|s| {
            let handles: Vec<_> = batch
                .iter()
                .map(|unit| {
                    let unit = unit.as_ref();
                    debug!(check = %unit.name(), "launching check");
                    (
                        unit.name(),
                        s.spawn(move || run_guarded(unit, ctx, artifact, options)),
                    )
                })
                .collect();

            handles
                .into_iter()
                .map(|(name, handle)| {
                    handle.join().unwrap_or_else(|_| {
                        CheckResult::error(name, "check thread terminated abnormally").into()
                    })
                })
                .collect()
        });
        outcomes.extend(joined);
    }

    (outcomes, false)
}

/// Apply early-exit metadata and the escalation rule.
///
/// Only Error escalates: a fail-fast Error, or any Error once the loop completes, becomes a
/// hard error when `hard_fail_on_err` is set. Fail never does. Cancellation always does.
fn conclude(
    flow: Flow,
    mut summary: Summary,
    options: &RunOptions,
) -> Result<Summary, ValidateError> {
    match flow {
        Flow::Cancelled => {
            warn!("run cancelled");
            summary.mark_early_exit(CANCELLED_CHECK, Status::Error);
            Err(ValidateError::Cancelled {
                summary: Box::new(summary),
            })
        }
        Flow::Stopped { check, status } => {
            summary.mark_early_exit(check.clone(), status);
            if status == Status::Error && options.hard_fail_on_err {
                let message = summary
                    .outcomes
                    .iter()
                    .rev()
                    .find(|o| o.name == check)
                    .map(|o| o.message.clone())
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
                return Err(ValidateError::CheckErrored {
                    check,
                    message,
                    summary: Box::new(summary),
                });
            }
            Ok(summary)
        }
        Flow::Completed => {
            if !options.hard_fail_on_err {
                return Ok(summary);
            }
            let Some(first) = summary.first_error() else {
                return Ok(summary);
            };
            // Name and message always come from the same outcome.
            let (check, message) = summary
                .outcomes
                .iter()
                .find(|o| o.status == Status::Error && !o.message.is_empty())
                .map(|o| (o.name.clone(), o.message.clone()))
                .unwrap_or_else(|| (first.name.clone(), FALLBACK_ERROR_MESSAGE.to_string()));
            Err(ValidateError::CheckErrored {
                check,
                message,
                summary: Box::new(summary),
            })
        }
    }
}

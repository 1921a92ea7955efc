use crate::context::RunContext;
use crate::options::RunOptions;
use glosscheck_types::{Artifact, CheckOutcome, CheckResult};
use std::fmt;

/// A pluggable validation rule.
///
/// The orchestrator only ever sees this trait. `name` must be stable and unique within a
/// registry; `priority` orders execution (lower first, ties broken by name).
pub trait CheckUnit: Send + Sync {
    fn name(&self) -> &str;

    fn priority(&self) -> i32;

    /// A Fail or Error from a fail-fast check stops the run.
    fn fail_fast(&self) -> bool {
        false
    }

    /// Inspect the artifact. An `Err` is reported as an Error outcome for this check.
    fn run(
        &self,
        ctx: &RunContext,
        artifact: &Artifact,
        opts: &RunOptions,
    ) -> anyhow::Result<CheckOutcome>;
}

type RunFn =
    dyn Fn(&RunContext, &Artifact, &RunOptions) -> anyhow::Result<CheckOutcome> + Send + Sync;

/// Closure-backed [`CheckUnit`].
pub struct FnCheck {
    name: String,
    priority: i32,
    fail_fast: bool,
    run_fn: Box<RunFn>,
}

impl FnCheck {
    pub fn new<F>(name: impl Into<String>, priority: i32, fail_fast: bool, run_fn: F) -> Self
    where
        F: Fn(&RunContext, &Artifact, &RunOptions) -> anyhow::Result<CheckOutcome>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            priority,
            fail_fast,
            run_fn: Box::new(run_fn),
        }
    }

    /// Verdict-only check over `(data, path, langs)`; never proposes a fix.
    pub fn simple<F>(name: impl Into<String>, priority: i32, fail_fast: bool, check: F) -> Self
    where
        F: Fn(&[u8], &str, &[String]) -> CheckResult + Send + Sync + 'static,
    {
        Self::new(name, priority, fail_fast, move |_ctx, artifact, _opts| {
            Ok(check(&artifact.data, &artifact.path, &artifact.langs).into())
        })
    }
}

impl CheckUnit for FnCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn fail_fast(&self) -> bool {
        self.fail_fast
    }

    fn run(
        &self,
        ctx: &RunContext,
        artifact: &Artifact,
        opts: &RunOptions,
    ) -> anyhow::Result<CheckOutcome> {
        (self.run_fn)(ctx, artifact, opts)
    }
}

impl fmt::Debug for FnCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCheck")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("fail_fast", &self.fail_fast)
            .finish_non_exhaustive()
    }
}

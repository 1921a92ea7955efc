//! Clap-free settings for the validation pipeline.

use glosscheck_domain::RunOptions;
use serde::Deserialize;

/// Execution discipline for one run.
///
/// `Ordered` walks every check once in priority order. `Split` runs fail-fast checks
/// sequentially first, then the rest concurrently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    #[default]
    Ordered,
    Split,
}

pub const DEFAULT_MAX_PARALLEL: usize = 4;

/// Settings for [`validate`](crate::pipeline::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateSettings {
    pub options: RunOptions,
    pub discipline: Discipline,

    /// Upper bound on concurrently running checks in the split discipline.
    pub max_parallel: usize,
}

impl ValidateSettings {
    /// Concurrency bound, never below one.
    pub fn parallelism(&self) -> usize {
        self.max_parallel.max(1)
    }
}

impl Default for ValidateSettings {
    fn default() -> Self {
        Self {
            options: RunOptions::default(),
            discipline: Discipline::default(),
            max_parallel: DEFAULT_MAX_PARALLEL,
        }
    }
}
